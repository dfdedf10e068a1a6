//! Property tests for the parse / wrap / paginate invariants.

use proptest::prelude::*;

use folio::layout::DrawOp;
use folio::{LayoutConfig, PageSize, TextMeasurer};

struct UnitMeasurer;

impl TextMeasurer for UnitMeasurer {
    fn measure(&self, text: &str, _: bool, _: bool, _: f64, _: &str) -> f64 {
        text.chars().count() as f64
    }
}

fn non_space(s: &str) -> String {
    s.chars().filter(|c| !c.is_whitespace()).collect()
}

proptest! {
    /// Text with no marker characters parses to at most one segment,
    /// unstyled and equal to the input.
    #[test]
    fn markerless_text_is_one_plain_segment(line in "[a-zA-Z0-9 .,!?-]{0,60}") {
        let segments = folio::markup::parse_line(&line);
        if line.is_empty() {
            prop_assert!(segments.is_empty());
        } else {
            prop_assert_eq!(segments.len(), 1);
            prop_assert_eq!(&segments[0].text, &line);
            prop_assert!(!segments[0].is_styled());
        }
    }

    /// Concatenating parsed segments always equals the stripped line,
    /// and stripping markerless text is the identity.
    #[test]
    fn segment_concatenation_matches_strip(line in "[a-z*_ ]{0,60}") {
        let concatenated: String = folio::markup::parse_line(&line)
            .into_iter()
            .map(|s| s.text)
            .collect();
        prop_assert_eq!(concatenated, folio::strip_markup(&line));
    }

    /// Wrapping never drops, duplicates, or reorders non-space
    /// characters, for any width.
    #[test]
    fn wrapping_conserves_characters(
        line in "[a-z ]{0,120}",
        max_width in 1.0f64..200.0,
    ) {
        let segments = folio::markup::parse_line(&line);
        let lines = folio::text::wrap(&segments, max_width, &UnitMeasurer, 12.0, "Helvetica")
            .expect("wrap");
        let rejoined: String = lines.iter().map(|l| l.text()).collect::<Vec<_>>().join(" ");
        prop_assert_eq!(non_space(&rejoined), non_space(&line));
    }

    /// Every source line lands on exactly one page, in order, and page
    /// numbers are consecutive from 1.
    #[test]
    fn pagination_covers_every_line(line_count in 1usize..120) {
        let lines: Vec<String> = (0..line_count).map(|i| format!("l{}", i)).collect();
        let config = LayoutConfig {
            page_size: PageSize::Custom { width: 210.0, height: 55.0 },
            margin: 20.0,
            line_spacing: 1.0,
            ..Default::default()
        };
        let pages = folio::build_pages(&lines.join("\n"), &config, &UnitMeasurer)
            .expect("layout");

        let numbers: Vec<u32> = pages.iter().map(|p| p.number).collect();
        let expected: Vec<u32> = (1..=pages.len() as u32).collect();
        prop_assert_eq!(numbers, expected);

        let placed: Vec<String> = pages
            .iter()
            .flat_map(|p| p.ops.iter())
            .filter_map(|op| match op {
                DrawOp::Text { text, .. } => Some(text.clone()),
                _ => None,
            })
            .collect();
        prop_assert_eq!(placed, lines);
    }

    /// Lines never start left of zero, and under left alignment they
    /// start exactly at the margin.
    #[test]
    fn alignment_stays_on_the_page(
        word_len in 1usize..40,
        alignment in prop_oneof![
            Just(folio::Alignment::Left),
            Just(folio::Alignment::Center),
            Just(folio::Alignment::Right),
        ],
    ) {
        let config = LayoutConfig { alignment, ..Default::default() };
        let text = "a".repeat(word_len);
        let pages = folio::build_pages(&text, &config, &UnitMeasurer).expect("layout");
        for op in &pages[0].ops {
            if let DrawOp::Text { x, width, .. } = op {
                prop_assert!(*x >= 0.0);
                prop_assert!(x + width <= config.page_width() + 1e-9);
                if alignment == folio::Alignment::Left {
                    prop_assert_eq!(*x, config.margin);
                }
            }
        }
    }
}
