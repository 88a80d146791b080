/*!
 * Tests for subtitle block parsing, text cleanup and timestamp labels
 */

use srtdigest::subtitle_processor::{
    clean_text, format_timestamp_label, parse_blocks, CueTiming, SrtTime, SubtitleBlock,
};
use crate::common;

/// Test timestamp label formatting with and without hours
#[test]
fn test_format_timestamp_label_withAndWithoutHours_shouldPadFields() {
    assert_eq!(format_timestamp_label(0, 0, 5), "00:05");
    assert_eq!(format_timestamp_label(1, 2, 3), "01:02:03");
    assert_eq!(format_timestamp_label(0, 59, 59), "59:59");
    assert_eq!(format_timestamp_label(12, 0, 0), "12:00:00");
}

/// Test that milliseconds never appear in labels
#[test]
fn test_srt_time_label_withMilliseconds_shouldDropThem() {
    let time = SrtTime::new(0, 1, 5, 999);
    assert_eq!(time.label(), "01:05");
}

/// Test timing line parsing
#[test]
fn test_cue_timing_parse_withValidLine_shouldReturnStartAndEnd() {
    let timing = CueTiming::parse("00:01:05,200 --> 00:01:06,000").unwrap();
    assert_eq!(timing.start, SrtTime::new(0, 1, 5, 200));
    assert_eq!(timing.end, SrtTime::new(0, 1, 6, 0));
}

/// Test timing lines with more than two hour digits and extra whitespace
#[test]
fn test_cue_timing_parse_withLongHours_shouldParse() {
    let timing = CueTiming::parse("100:00:00,000-->100:00:01,000 X1:40").unwrap();
    assert_eq!(timing.start.hours, 100);
    assert_eq!(timing.start.label(), "100:00:00");
}

/// Test that malformed timing lines are rejected
#[test]
fn test_cue_timing_parse_withInvalidLine_shouldReturnNone() {
    assert!(CueTiming::parse("00:01 --> 00:02").is_none());
    assert!(CueTiming::parse("not-a-timing-line").is_none());
}

/// Test markup removal
#[test]
fn test_clean_text_withMarkup_shouldRemoveTagsBracesAndBrackets() {
    assert_eq!(clean_text("<i>Hello</i> there"), "Hello there");
    assert_eq!(clean_text("{\\an8}Top line"), "Top line");
    assert_eq!(clean_text("[Music] Welcome [Applause]"), "Welcome");
    assert_eq!(clean_text("  spaced  "), "spaced");
    assert_eq!(clean_text("[Music]"), "");
}

/// Test that spans are removed non-greedily
#[test]
fn test_clean_text_withSeveralSpans_shouldKeepTextBetweenThem() {
    assert_eq!(clean_text("[a] keep [b]"), "keep");
    assert_eq!(clean_text("<b>one</b> and <b>two</b>"), "one and two");
}

/// Test parsing the three-block sample
#[test]
fn test_parse_blocks_withSampleFile_shouldKeepFallbackBlock() {
    let blocks = parse_blocks(common::SAMPLE_SRT);
    assert_eq!(blocks.len(), 3);

    assert_eq!(blocks[0].sequence_index, Some(1));
    assert_eq!(blocks[0].start_label().as_deref(), Some("00:01"));
    assert_eq!(blocks[0].payload(), "Hello");

    assert_eq!(blocks[1].start_label().as_deref(), Some("01:05"));

    assert!(!blocks[2].is_framed());
    assert_eq!(blocks[2].timing, None);
    assert_eq!(blocks[2].payload(), "x not-a-timing-line fallback line");
}

/// Test that short blocks are skipped silently
#[test]
fn test_parse_blocks_withShortBlocks_shouldSkipThem() {
    let content = "1\n00:00:01,000 --> 00:00:02,000\n\njust one line\n\n2\n00:00:03,000 --> 00:00:04,000\nkept";
    let blocks = parse_blocks(content);
    assert_eq!(blocks.len(), 1);
    assert_eq!(blocks[0].payload(), "kept");
}

/// Test multi-line cue text
#[test]
fn test_parse_blocks_withMultilineText_shouldJoinWithSpaces() {
    let content = "7\n00:00:01,000 --> 00:00:02,000\nfirst line\nsecond line\n";
    let blocks = parse_blocks(content);
    assert_eq!(blocks[0].raw_text_lines, vec!["first line", "second line"]);
    assert_eq!(blocks[0].payload(), "first line second line");
}

/// Test that an arrow line which fails the timing pattern keeps the text but loses the label
#[test]
fn test_parse_blocks_withUnparseableTiming_shouldHaveNoLabel() {
    let content = "3\n00:01 --> 00:02\nloose timing\n";
    let blocks = parse_blocks(content);
    assert_eq!(blocks.len(), 1);
    assert_eq!(blocks[0], SubtitleBlock {
        framed: true,
        sequence_index: Some(3),
        timing: None,
        raw_text_lines: vec!["loose timing".to_string()],
    });
    assert_eq!(blocks[0].start_label(), None);
}

/// Test that an index too large for u64 still counts as a framed cue
#[test]
fn test_parse_blocks_withOversizedIndex_shouldStayFramed() {
    let content = "123456789012345678901234567890\n00:00:01,000 --> 00:00:02,000\nHello\n";
    let blocks = parse_blocks(content);

    assert_eq!(blocks.len(), 1);
    assert!(blocks[0].is_framed());
    assert_eq!(blocks[0].sequence_index, None);
    assert_eq!(blocks[0].start_label().as_deref(), Some("00:01"));
    assert_eq!(blocks[0].raw_text_lines, vec!["Hello"]);
}

/// Test separators made of several blank and whitespace-only lines
#[test]
fn test_parse_blocks_withWideSeparators_shouldSplitCorrectly() {
    let content = "\n\n1\n00:00:01,000 --> 00:00:02,000\nA\n\n  \n\n2\n00:00:03,000 --> 00:00:04,000\nB\n\n\n";
    let blocks = parse_blocks(content);
    assert_eq!(blocks.len(), 2);
    assert_eq!(blocks[1].payload(), "B");
}

/// Test empty input
#[test]
fn test_parse_blocks_withEmptyInput_shouldReturnNothing() {
    assert!(parse_blocks("").is_empty());
    assert!(parse_blocks("   \n\n ").is_empty());
}
