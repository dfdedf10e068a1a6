//! # Folio CLI
//!
//! Usage:
//!   folio input.txt -o pages.json
//!   echo 'Hello **world**' | folio --paragraphs
//!   folio --text notes.txt -o notes-plain.txt
//!   folio --template essay > essay.txt
//!
//! Output is the page stream as JSON by default; `--paragraphs` emits
//! the paragraph stream and `--text` emits markup-stripped plain text.

use std::env;
use std::fs;
use std::io::{self, Read};
use std::process;

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.iter().any(|a| a == "--help" || a == "-h") {
        print_usage();
        return;
    }

    // --template NAME prints a starter document and exits.
    if let Some(name) = flag_value(&args, "--template") {
        match folio::templates::by_name(&name) {
            Some(text) => {
                println!("{}", text);
                return;
            }
            None => {
                eprintln!(
                    "Unknown template '{}'. Available: {}",
                    name,
                    folio::templates::ALL
                        .iter()
                        .map(|(key, _)| *key)
                        .collect::<Vec<_>>()
                        .join(", ")
                );
                process::exit(1);
            }
        }
    }

    // Read input from the first non-flag argument, or stdin.
    let input = match input_path(&args) {
        Some(path) => fs::read_to_string(&path).expect("Failed to read input file"),
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .expect("Failed to read stdin");
            buf
        }
    };

    if args.iter().any(|a| a == "--stats") {
        let stats = folio::stats(&input);
        println!("{} words | {} characters", stats.words, stats.chars);
        return;
    }

    let config = match config_from_args(&args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e);
            process::exit(1);
        }
    };

    let output = if args.iter().any(|a| a == "--text") {
        Ok(folio::strip_markup(&input))
    } else if args.iter().any(|a| a == "--paragraphs") {
        folio::build_paragraphs(&input, &config)
            .and_then(|p| serde_json::to_string_pretty(&p).map_err(folio::FolioError::from))
    } else {
        folio::build_pages(&input, &config, &folio::font::FontContext::new())
            .and_then(|p| serde_json::to_string_pretty(&p).map_err(folio::FolioError::from))
    };

    let output = match output {
        Ok(output) => output,
        Err(e) => {
            eprintln!("{}", e);
            process::exit(1);
        }
    };

    match flag_value(&args, "-o") {
        Some(path) => {
            fs::write(&path, &output).expect("Failed to write output");
            eprintln!("Written {} bytes to {}", output.len(), path);
        }
        None => println!("{}", output),
    }
}

/// The first argument that is neither a flag nor a flag's value.
fn input_path(args: &[String]) -> Option<String> {
    let value_flags = [
        "-o",
        "--template",
        "--font-size",
        "--line-spacing",
        "--align",
        "--page-size",
        "--font",
    ];
    let mut skip = false;
    for arg in &args[1..] {
        if skip {
            skip = false;
            continue;
        }
        if value_flags.contains(&arg.as_str()) {
            skip = true;
            continue;
        }
        if arg.starts_with('-') {
            continue;
        }
        return Some(arg.clone());
    }
    None
}

/// The value following a flag, if present.
fn flag_value(args: &[String], flag: &str) -> Option<String> {
    args.windows(2)
        .find(|w| w[0] == flag)
        .map(|w| w[1].clone())
}

/// Assemble a layout config from CLI flags on top of the defaults.
fn config_from_args(args: &[String]) -> Result<folio::LayoutConfig, String> {
    let mut config = folio::LayoutConfig::default();

    if let Some(value) = flag_value(args, "--font-size") {
        config.font_size = value
            .parse()
            .map_err(|_| format!("Invalid --font-size '{}'", value))?;
    }
    if let Some(value) = flag_value(args, "--line-spacing") {
        config.line_spacing = value
            .parse()
            .map_err(|_| format!("Invalid --line-spacing '{}'", value))?;
    }
    if let Some(value) = flag_value(args, "--align") {
        config.alignment = match value.as_str() {
            "left" => folio::Alignment::Left,
            "center" => folio::Alignment::Center,
            "right" => folio::Alignment::Right,
            other => return Err(format!("Invalid --align '{}'", other)),
        };
    }
    if let Some(value) = flag_value(args, "--page-size") {
        config.page_size = match value.as_str() {
            "a4" => folio::PageSize::A4,
            "letter" => folio::PageSize::Letter,
            "legal" => folio::PageSize::Legal,
            other => return Err(format!("Invalid --page-size '{}'", other)),
        };
    }
    if let Some(value) = flag_value(args, "--font") {
        config.font_family = value;
    }
    if args.iter().any(|a| a == "--page-numbers") {
        config.show_page_numbers = true;
    }

    config.validate().map_err(|e| e.to_string())?;
    Ok(config)
}

fn print_usage() {
    println!(
        "folio - lay out marked-up text into page and paragraph streams

Usage:
  folio [INPUT] [FLAGS]            page stream as JSON (default)
  folio [INPUT] --paragraphs       paragraph stream as JSON
  folio [INPUT] --text             markup-stripped plain text
  folio [INPUT] --stats            word and character counts
  folio --template NAME            print a starter document

Input is read from INPUT or stdin.

Flags:
  -o PATH               write output to PATH instead of stdout
  --font-size N         10, 11, 12, 14, 16, 18, 20, or 24 (default 12)
  --line-spacing X      1, 1.5, or 2 (default 1.5)
  --align MODE          left, center, or right (default left)
  --page-size SIZE      a4, letter, or legal (default a4)
  --font FAMILY         font family for measurement (default Helvetica)
  --page-numbers        stamp 'Page N' footers on the page stream"
    );
}
