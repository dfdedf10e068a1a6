//! Integration tests for the folio export pipeline.
//!
//! These tests exercise the full path from raw marked-up text to the
//! page and paragraph streams. They verify:
//! - markup parsing feeds both streams consistently
//! - wrapping and pagination respect the configured geometry
//! - config validation fails fast and measurement failures are fatal
//! - the JSON entry points parse configs and serialize streams

use folio::font::FontContext;
use folio::layout::{DrawOp, Page};
use folio::{Alignment, FolioError, LayoutConfig, PageSize, Segment, TextMeasurer};

// ─── Helpers ────────────────────────────────────────────────────

/// Every char one unit wide, independent of style. Keeps page
/// geometry exact in the assertions below.
struct UnitMeasurer;

impl TextMeasurer for UnitMeasurer {
    fn measure(&self, text: &str, _: bool, _: bool, _: f64, _: &str) -> f64 {
        text.chars().count() as f64
    }
}

struct NegativeMeasurer;

impl TextMeasurer for NegativeMeasurer {
    fn measure(&self, _: &str, _: bool, _: bool, _: f64, _: &str) -> f64 {
        -1.0
    }
}

fn default_config() -> LayoutConfig {
    LayoutConfig::default()
}

fn build_pages(text: &str, config: &LayoutConfig) -> Vec<Page> {
    folio::build_pages(text, config, &UnitMeasurer).expect("layout should succeed")
}

fn page_texts(page: &Page) -> Vec<String> {
    page.ops
        .iter()
        .filter_map(|op| match op {
            DrawOp::Text { text, .. } => Some(text.clone()),
            _ => None,
        })
        .collect()
}

fn non_space_chars(s: &str) -> Vec<char> {
    s.chars().filter(|c| !c.is_whitespace()).collect()
}

// ─── End-to-End Scenarios ───────────────────────────────────────

#[test]
fn test_styled_text_reaches_the_page_stream() {
    let pages = build_pages("Hello **world**!", &default_config());
    assert_eq!(pages.len(), 1);

    let texts = page_texts(&pages[0]);
    assert_eq!(texts, vec!["Hello ", "world", "!"]);

    let bold_flags: Vec<bool> = pages[0]
        .ops
        .iter()
        .filter_map(|op| match op {
            DrawOp::Text { bold, .. } => Some(*bold),
            _ => None,
        })
        .collect();
    assert_eq!(bold_flags, vec![false, true, false]);
}

#[test]
fn test_paragraph_stream_segments_in_order() {
    let paragraphs =
        folio::build_paragraphs("**Bold** and *italic* and __under__.", &default_config())
            .expect("paragraphs");
    assert_eq!(paragraphs.len(), 1);
    assert_eq!(
        paragraphs[0].segments,
        vec![
            Segment::bold("Bold"),
            Segment::plain(" and "),
            Segment::italic("italic"),
            Segment::plain(" and "),
            Segment::underline("under"),
            Segment::plain("."),
        ]
    );
}

#[test]
fn test_both_streams_agree_on_stripped_content() {
    let text = "First **line** here\nsecond *line*\n\n__last__ one";
    let pages = build_pages(text, &default_config());
    let paragraphs = folio::build_paragraphs(text, &default_config()).expect("paragraphs");

    let from_pages: Vec<char> = pages
        .iter()
        .flat_map(page_texts)
        .flat_map(|t| non_space_chars(&t))
        .collect();
    let from_paragraphs: Vec<char> = paragraphs
        .iter()
        .flat_map(|p| p.segments.iter().map(|s| s.text.clone()).collect::<Vec<_>>())
        .flat_map(|t| non_space_chars(&t))
        .collect();
    let from_strip = non_space_chars(&folio::strip_markup(text));

    assert_eq!(from_pages, from_strip);
    assert_eq!(from_paragraphs, from_strip);
}

#[test]
fn test_template_exports_end_to_end() {
    let text = folio::templates::by_name("report").expect("report template");
    let pages = folio::build_pages(text, &default_config(), &FontContext::new())
        .expect("template should lay out");
    assert_eq!(pages.len(), 1);
    assert!(!pages[0].ops.is_empty());

    let paragraphs = folio::build_paragraphs(text, &default_config()).expect("paragraphs");
    assert_eq!(paragraphs.len(), text.split('\n').count());
}

// ─── Geometry ───────────────────────────────────────────────────

#[test]
fn test_long_text_overflows_to_multiple_pages() {
    // A4 at default spacing advances 6.3 units per line from the
    // 20-unit margin; 100 short lines need a third page.
    let lines: Vec<String> = (0..100).map(|i| format!("line {}", i)).collect();
    let pages = build_pages(&lines.join("\n"), &default_config());
    assert!(
        pages.len() >= 2,
        "100 lines should overflow, got {} pages",
        pages.len()
    );

    let numbers: Vec<u32> = pages.iter().map(|p| p.number).collect();
    let expected: Vec<u32> = (1..=pages.len() as u32).collect();
    assert_eq!(numbers, expected);

    let total_ops: usize = pages.iter().map(|p| page_texts(p).len()).sum();
    assert_eq!(total_ops, 100, "every line on exactly one page");
}

#[test]
fn test_larger_font_overflows_faster() {
    let lines: Vec<String> = (0..60).map(|i| format!("line {}", i)).collect();
    let text = lines.join("\n");

    let small = build_pages(&text, &default_config());
    let config = LayoutConfig {
        font_size: 24.0,
        ..default_config()
    };
    let large = build_pages(&text, &config);
    assert!(large.len() > small.len());
}

#[test]
fn test_long_logical_line_wraps_within_content_width() {
    let word = "abcdefghij"; // 10 units
    let text = vec![word; 40].join(" ");
    let pages = build_pages(&text, &default_config());
    assert_eq!(pages.len(), 1);
    let texts = page_texts(&pages[0]);
    assert!(texts.len() > 1, "400+ units must wrap against 170");
    assert!(texts.iter().all(|t| t.chars().count() <= 170));

    // Nothing lost at the wrap points.
    let rejoined: Vec<char> = texts.iter().flat_map(|t| non_space_chars(t)).collect();
    assert_eq!(rejoined, non_space_chars(&text));
}

#[test]
fn test_alignment_offsets_on_letter_page() {
    let config = LayoutConfig {
        page_size: PageSize::Letter,
        alignment: Alignment::Center,
        ..default_config()
    };
    let pages = build_pages("abcd", &config);
    match &pages[0].ops[0] {
        DrawOp::Text { x, .. } => assert!((x - (215.9 - 4.0) / 2.0).abs() < 1e-9),
        other => panic!("expected text op, got {:?}", other),
    }
}

#[test]
fn test_page_number_footers() {
    let config = LayoutConfig {
        show_page_numbers: true,
        ..default_config()
    };
    let lines: Vec<String> = (0..80).map(|i| format!("line {}", i)).collect();
    let pages = build_pages(&lines.join("\n"), &config);
    assert!(pages.len() >= 2);

    for page in &pages {
        let stamps: Vec<&DrawOp> = page
            .ops
            .iter()
            .filter(|op| matches!(op, DrawOp::PageNumber { .. }))
            .collect();
        assert_eq!(stamps.len(), 1, "exactly one stamp per page");
        match stamps[0] {
            DrawOp::PageNumber { text, x, y, .. } => {
                assert_eq!(text, &format!("Page {}", page.number));
                assert!((x - 105.0).abs() < 1e-9);
                assert!((y - 287.0).abs() < 1e-9);
            }
            _ => unreachable!(),
        }
    }
}

// ─── Failure Semantics ──────────────────────────────────────────

#[test]
fn test_empty_text_is_a_no_op_export() {
    let pages = folio::build_pages("", &default_config(), &UnitMeasurer).expect("pages");
    assert!(pages.is_empty());
    let paragraphs = folio::build_paragraphs("", &default_config()).expect("paragraphs");
    assert!(paragraphs.is_empty());
}

#[test]
fn test_bad_measurement_aborts_without_partial_output() {
    let result = folio::build_pages("some text", &default_config(), &NegativeMeasurer);
    assert!(matches!(result, Err(FolioError::Measurement(_))));
}

#[test]
fn test_invalid_config_rejected_before_layout() {
    let config = LayoutConfig {
        font_size: 13.0,
        ..default_config()
    };
    // The measurer would fail, but validation runs first.
    let result = folio::build_pages("text", &config, &NegativeMeasurer);
    assert!(matches!(result, Err(FolioError::Config(_))));
}

// ─── JSON Surface ───────────────────────────────────────────────

#[test]
fn test_pages_json_round_trip() {
    let json = folio::build_pages_json(
        "Hello **world**",
        r#"{ "fontSize": 14, "alignment": "center" }"#,
    )
    .expect("pages json");
    let value: serde_json::Value = serde_json::from_str(&json).expect("valid JSON out");
    let pages = value.as_array().expect("array of pages");
    assert_eq!(pages[0]["number"], 1);
    assert_eq!(pages[0]["width"], 210.0);
    let ops = pages[0]["ops"].as_array().expect("ops array");
    assert!(ops
        .iter()
        .any(|op| op["type"] == "text" && op["bold"] == true));
}

#[test]
fn test_paragraphs_json_round_trip() {
    let json = folio::build_paragraphs_json("a\n*b*", r#"{}"#).expect("paragraphs json");
    let value: serde_json::Value = serde_json::from_str(&json).expect("valid JSON out");
    let paragraphs = value.as_array().expect("array of paragraphs");
    assert_eq!(paragraphs.len(), 2);
    assert_eq!(paragraphs[1]["segments"][0]["italic"], true);
    assert_eq!(paragraphs[0]["lineSpacing"], 1.5);
}

#[test]
fn test_malformed_config_json_gives_hint() {
    let err = folio::build_pages_json("x", r#"{ "fontSize": "#).expect_err("truncated JSON");
    match err {
        FolioError::Parse { hint, .. } => assert!(!hint.is_empty()),
        other => panic!("expected parse error, got {:?}", other),
    }
}

#[test]
fn test_unknown_config_value_rejected() {
    let err = folio::build_pages_json("x", r#"{ "alignment": "justify" }"#)
        .expect_err("unknown alignment");
    assert!(matches!(err, FolioError::Parse { .. }));
}

// ─── Plain Text Utilities ───────────────────────────────────────

#[test]
fn test_strip_and_stats() {
    let text = "**Title**\n\nBody with *emphasis* here.";
    assert_eq!(
        folio::strip_markup(text),
        "Title\n\nBody with emphasis here."
    );
    let stats = folio::stats(text);
    assert_eq!(stats.words, 5);
    assert_eq!(stats.chars, text.chars().count());
}

// ─── Built-In Measurer ──────────────────────────────────────────

#[test]
fn test_font_context_drives_real_layout() {
    let config = default_config();
    let ctx = FontContext::new();
    let pages = folio::build_pages("A **bold** word is wider than a plain one", &config, &ctx)
        .expect("layout");
    let widths: Vec<f64> = pages[0]
        .ops
        .iter()
        .filter_map(|op| match op {
            DrawOp::Text { text, width, .. } if text.trim() == "bold" => Some(*width),
            _ => None,
        })
        .collect();
    assert_eq!(widths.len(), 1);
    let plain = ctx.measure_string("bold", "Helvetica", false, false, 12.0);
    assert!(widths[0] > plain, "bold run must measure wider than plain");
}
