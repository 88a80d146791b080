/*!
 * Tests for the title, key point and keyword heuristics
 */

use srtdigest::summary::{extract_key_points, extract_keywords, extract_title, AnalyzerPolicy, DocumentAnalyzer};
use crate::common;

/// Test that a timestamp marker is stripped from a late title line
#[test]
fn test_extract_title_withMarkerOnTenthLine_shouldStripMarker() {
    let mut content = String::new();
    for i in 0..9 {
        if i % 2 == 0 {
            content.push('\n');
        } else {
            content.push_str("hi\n");
        }
    }
    content.push_str("**[00:00]** A Reasonably Long Opening Statement\n");

    let title = extract_title(&content, "ignored.md", &AnalyzerPolicy::default());
    assert_eq!(title, "A Reasonably Long Opening Statement");
}

/// Test the filename fallback
#[test]
fn test_extract_title_withNoCandidate_shouldUseFilename() {
    let policy = AnalyzerPolicy::default();
    assert_eq!(extract_title("", "my_great_talk.md", &policy), "my great talk");
    assert_eq!(extract_title("ok\n\nno", "notes_2024.txt", &policy), "notes 2024");
}

/// Test that stacked extensions are all removed from the fallback title
#[test]
fn test_extract_title_withStackedExtensions_shouldStripAll() {
    let policy = AnalyzerPolicy::default();
    assert_eq!(extract_title("", "notes.txt.md", &policy), "notes");
}

/// Test that overly long lines are not used as titles
#[test]
fn test_extract_title_withVeryLongLine_shouldSkipIt() {
    let policy = AnalyzerPolicy::default();
    let content = format!("{}\nA proper title line\n", "x".repeat(250));
    assert_eq!(extract_title(&content, "f.md", &policy), "A proper title line");
}

/// Test key point ordering, cleanup and cap
#[test]
fn test_extract_key_points_withSampleArticle_shouldKeepDocumentOrder() {
    let policy = AnalyzerPolicy::default();
    let points = extract_key_points(common::SAMPLE_ARTICLE, 8, &policy);

    assert_eq!(points.len(), 4);
    assert_eq!(points[0], "Welcome back to the Infrastructure Podcast episode 42");
    assert!(points[1].starts_with("Today we discuss"));
    assert!(points.iter().all(|p| !p.contains("**[")));
    assert!(!points.iter().any(|p| p == "Short remark."));
}

/// Test that the cap and dedup hold for repetitive input
#[test]
fn test_extract_key_points_withRepeatedLines_shouldNeverExceedCapOrDuplicate() {
    let policy = AnalyzerPolicy::default();
    let mut content = String::new();
    for i in 0..30 {
        content.push_str(&format!("**[00:{:02}]** This is a repeated and sufficiently long line number {}\n", i, i % 5));
    }

    for max_points in [1, 3, 8, 20] {
        let points = extract_key_points(&content, max_points, &policy);
        assert!(points.len() <= max_points);

        let mut unique = points.clone();
        unique.sort();
        unique.dedup();
        assert_eq!(unique.len(), points.len());
    }
    assert_eq!(extract_key_points(&content, 20, &policy).len(), 5);
}

/// Test key point length bounds (exclusive)
#[test]
fn test_extract_key_points_withBoundaryLengths_shouldBeExclusive() {
    let policy = AnalyzerPolicy::default();
    let exactly_20 = "a".repeat(20);
    let exactly_21 = "b".repeat(21);
    let exactly_300 = "c".repeat(300);
    let content = format!("{}\n{}\n{}\n", exactly_20, exactly_21, exactly_300);

    assert_eq!(extract_key_points(&content, 8, &policy), vec![exactly_21]);
}

/// Test keyword extraction on the sample article
#[test]
fn test_extract_keywords_withSampleArticle_shouldPickSalientTokens() {
    let policy = AnalyzerPolicy::default();
    let keywords = extract_keywords(common::SAMPLE_ARTICLE, &policy);

    assert!(keywords.contains(&"Infrastructure".to_string()));
    assert!(keywords.contains(&"Podcast".to_string()));
    assert!(keywords.contains(&"Kubernetes".to_string()));
    assert!(keywords.contains(&"deployment".to_string()));
    assert!(!keywords.contains(&"changed".to_string()));
    assert!(keywords.iter().all(|k| k.chars().count() > 5));
}

/// Test that URLs and stopwords are never returned
#[test]
fn test_extract_keywords_withUrlsAndStopwords_shouldExcludeThem() {
    let policy = AnalyzerPolicy {
        stopwords: vec!["Important".to_string()],
        ..AnalyzerPolicy::default()
    };
    let content = "Visit http://Example.org and httpServer99 plus IMPORTANT and Notable";
    let keywords = extract_keywords(content, &policy);

    assert!(keywords.iter().all(|k| !k.starts_with("http")));
    assert!(!keywords.iter().any(|k| k.eq_ignore_ascii_case("important")));
    assert!(keywords.contains(&"Notable".to_string()));
}

/// Test the keyword cap and case-sensitive dedup
#[test]
fn test_extract_keywords_withManyCandidates_shouldCapAtLimit() {
    let policy = AnalyzerPolicy::default();
    let content: String = (0..40).map(|i| format!("Token{} ", i)).collect();
    let keywords = extract_keywords(&content, &policy);

    assert_eq!(keywords.len(), 15);
    assert_eq!(keywords[0], "Token0");
    assert_eq!(keywords[14], "Token14");

    let cased = extract_keywords("Rustacean RUSTACEAN Rustacean", &policy);
    assert_eq!(cased, vec!["Rustacean", "RUSTACEAN"]);
}

/// Test the full analysis of the sample article
#[test]
fn test_document_analyzer_withSampleArticle_shouldDeriveCounts() {
    let analyzer = DocumentAnalyzer::default();
    let document = analyzer.analyze(common::SAMPLE_ARTICLE, "episode_42.md");

    assert_eq!(document.title, "Welcome back to the Infrastructure Podcast episode 42");
    assert_eq!(document.key_points.len(), 4);
    assert_eq!(document.meaningful_line_count, 5);
    assert_eq!(document.word_count, common::SAMPLE_ARTICLE.split_whitespace().count());
}

/// Test analysis of an empty document
#[test]
fn test_document_analyzer_withEmptyContent_shouldFallBackGracefully() {
    let document = DocumentAnalyzer::default().analyze("", "empty_file.txt");

    assert_eq!(document.title, "empty file");
    assert!(document.key_points.is_empty());
    assert!(document.keywords.is_empty());
    assert_eq!(document.word_count, 0);
    assert_eq!(document.meaningful_line_count, 0);
}
