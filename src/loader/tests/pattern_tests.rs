//! Tests for filename pattern parsing

extern crate std;

use crate::errors::SlitscanError;
use crate::loader::FilePattern;

#[test]
fn test_plain_placeholder() {
    let pattern = FilePattern::parse("frame%d.png").unwrap();
    std::assert_eq!(pattern.format(1), "frame1.png");
    std::assert_eq!(pattern.format(42), "frame42.png");
}

#[test]
fn test_zero_padded_placeholder() {
    let pattern = FilePattern::parse("frame%04d.png").unwrap();
    std::assert_eq!(pattern.format(7), "frame0007.png");
    std::assert_eq!(pattern.format(1234), "frame1234.png");

    // Indexes wider than the padding are not truncated
    std::assert_eq!(pattern.format(123456), "frame123456.png");
}

#[test]
fn test_placeholder_with_path_components() {
    let pattern = FilePattern::parse("shots/take-2/%03d.png").unwrap();
    std::assert_eq!(pattern.format(9), "shots/take-2/009.png");
}

#[test]
fn test_literal_percent() {
    let pattern = FilePattern::parse("100%%-%d.png").unwrap();
    std::assert_eq!(pattern.format(3), "100%-3.png");
}

#[test]
fn test_no_placeholder_rejected() {
    let result = FilePattern::parse("frame.png");
    std::assert!(matches!(result, Err(SlitscanError::Usage(_))));
}

#[test]
fn test_multiple_placeholders_rejected() {
    let result = FilePattern::parse("%d-%d.png");
    std::assert!(matches!(result, Err(SlitscanError::Usage(_))));

    let result = FilePattern::parse("%02d/%04d.png");
    std::assert!(matches!(result, Err(SlitscanError::Usage(_))));
}

#[test]
fn test_unsupported_placeholder_rejected() {
    let result = FilePattern::parse("frame%s.png");
    std::assert!(matches!(result, Err(SlitscanError::Usage(_))));

    // A dangling percent at the end of the pattern is an error too
    let result = FilePattern::parse("frame%");
    std::assert!(matches!(result, Err(SlitscanError::Usage(_))));
}

#[test]
fn test_source_text_preserved() {
    let pattern = FilePattern::parse("frame%04d.png").unwrap();
    std::assert_eq!(pattern.source(), "frame%04d.png");
}
