//! Property tests for the relay loop

use osalau_core::relay;
use osalau_core::{Result, Segmenter};
use proptest::prelude::*;

/// Segmenter that echoes the line back, shaped like a one-clause analysis.
struct EchoSegmenter;

impl Segmenter for EchoSegmenter {
    fn analyze(&mut self, line: &str) -> Result<String> {
        Ok(format!("<{line}>"))
    }
}

proptest! {
    /// N input lines produce exactly N output lines, in input order.
    #[test]
    fn relay_preserves_count_and_order(
        lines in prop::collection::vec("[^\r\n]{0,40}", 0..50)
    ) {
        let mut input = String::new();
        for line in &lines {
            input.push_str(line);
            input.push('\n');
        }

        let mut output = Vec::new();
        let relayed = relay::run(input.as_bytes(), &mut output, EchoSegmenter).unwrap();

        prop_assert_eq!(relayed as usize, lines.len());
        let text = String::from_utf8(output).unwrap();
        let out_lines: Vec<&str> = text.lines().collect();
        prop_assert_eq!(out_lines.len(), lines.len());
        for (observed, fed) in out_lines.iter().zip(&lines) {
            prop_assert_eq!(*observed, format!("<{fed}>"));
        }
    }

    /// Output never contains embedded line breaks, whatever the segmenter
    /// returns.
    #[test]
    fn relay_output_lines_are_flat(answer in "[a-z\r\n]{0,60}") {
        struct Fixed(String);
        impl Segmenter for Fixed {
            fn analyze(&mut self, _line: &str) -> Result<String> {
                Ok(self.0.clone())
            }
        }

        let mut output = Vec::new();
        relay::run("one line\n".as_bytes(), &mut output, Fixed(answer)).unwrap();

        let text = String::from_utf8(output).unwrap();
        prop_assert!(text.ends_with('\n'));
        prop_assert!(!text[..text.len() - 1].contains(['\n', '\r']));
        prop_assert!(!text.contains('\r'));
    }
}
