/*!
 * Tests for the summary layouts
 */

use srtdigest::summary::{AnalyzedDocument, ComposerLimits, SummaryComposer, SummaryLanguage, SummaryMode};

fn sample_document(points: usize) -> AnalyzedDocument {
    AnalyzedDocument {
        title: "Sample Title".to_string(),
        key_points: (1..=points).map(|i| format!("Key point number {} with enough text", i)).collect(),
        keywords: vec!["Kubernetes".to_string(), "observability".to_string()],
        word_count: 120,
        meaningful_line_count: 9,
    }
}

/// Test the exact detailed layout
#[test]
fn test_compose_detailed_withTwoPoints_shouldMatchLayout() {
    let composer = SummaryComposer::default();
    let summary = composer.compose(&sample_document(2), SummaryMode::Detailed);

    let expected = "# Sample Title\n\n## 文章总结\n\n\
### 基本信息\n- **内容长度**: 120 个单词\n- **主要内容数**: 9 条\n\n\
### 关键词\nKubernetes, observability\n\n\
### 核心观点\n1. Key point number 1 with enough text\n2. Key point number 2 with enough text\n\
\n### 主要启示\n- 该内容提供了相关主题的深度见解和实用信息\n- 涵盖了技术/商业/行业的重要发展趋势\n- 为相关从业者和学习者提供了宝贵的参考价值\n\
\n---\n\n*此总结由自动工具生成*";

    assert_eq!(summary, expected);
}

/// Test the omitted-points note
#[test]
fn test_compose_detailed_withEightPoints_shouldNoteOmittedPoints() {
    let composer = SummaryComposer::default();
    let summary = composer.compose(&sample_document(8), SummaryMode::Detailed);

    assert!(summary.contains("6. Key point number 6"));
    assert!(!summary.contains("7. Key point number 7"));
    assert!(summary.contains("\n*...还有 2 个观点...*\n"));
}

/// Test that the keyword section disappears without keywords
#[test]
fn test_compose_detailed_withoutKeywords_shouldOmitSection() {
    let mut document = sample_document(1);
    document.keywords.clear();
    let summary = SummaryComposer::default().compose(&document, SummaryMode::Detailed);

    assert!(!summary.contains("### 关键词"));
    assert!(summary.contains("### 核心观点"));
}

/// Test keyword cap in the detailed layout
#[test]
fn test_compose_detailed_withManyKeywords_shouldShowTen() {
    let mut document = sample_document(1);
    document.keywords = (0..15).map(|i| format!("Keyword{}", i)).collect();
    let summary = SummaryComposer::default().compose(&document, SummaryMode::Detailed);

    assert!(summary.contains("Keyword9\n"));
    assert!(!summary.contains("Keyword10"));
}

/// Test truncation of long points in both modes
#[test]
fn test_compose_withLongPoint_shouldTruncateWithEllipsis() {
    let mut document = sample_document(0);
    document.key_points = vec!["z".repeat(200)];
    let composer = SummaryComposer::default();

    let detailed = composer.compose(&document, SummaryMode::Detailed);
    assert!(detailed.contains(&format!("1. {}...\n", "z".repeat(150))));

    let brief = composer.compose(&document, SummaryMode::Brief);
    assert!(brief.contains(&format!("1. {}...\n", "z".repeat(100))));
}

/// Test the exact brief layout
#[test]
fn test_compose_brief_withFivePoints_shouldListThree() {
    let summary = SummaryComposer::default().compose(&sample_document(5), SummaryMode::Brief);

    let expected = "# Sample Title\n\n## 文章总结\n\n\
### 简要总结\n这是一篇包含120个单词的文章，主要讨论了相关主题。\n\n\
### 主要观点\n1. Key point number 1 with enough text\n2. Key point number 2 with enough text\n3. Key point number 3 with enough text\n\
\n---\n\n*此总结由自动工具生成*";

    assert_eq!(summary, expected);
}

/// Test the brief layout without points
#[test]
fn test_compose_brief_withoutPoints_shouldSkipPointSection() {
    let summary = SummaryComposer::default().compose(&sample_document(0), SummaryMode::Brief);
    assert!(!summary.contains("### 主要观点"));
    assert!(summary.ends_with("\n\n\n---\n\n*此总结由自动工具生成*"));
}

/// Test the English labels
#[test]
fn test_compose_withEnglishLanguage_shouldUseEnglishLabels() {
    let composer = SummaryComposer::new(SummaryLanguage::English, ComposerLimits::default());
    let summary = composer.compose(&sample_document(2), SummaryMode::Detailed);

    assert!(summary.starts_with("# Sample Title\n\n## Summary\n\n### Overview\n"));
    assert!(summary.contains("- **Length**: 120 words"));
    assert!(summary.ends_with("*This summary was generated automatically*"));
    assert_eq!(composer.language(), SummaryLanguage::English);
}

/// Test custom limits
#[test]
fn test_compose_withCustomLimits_shouldHonourThem() {
    let limits = ComposerLimits { detailed_points: 2, ..ComposerLimits::default() };
    let composer = SummaryComposer::new(SummaryLanguage::Chinese, limits);
    let summary = composer.compose(&sample_document(3), SummaryMode::Detailed);

    assert!(summary.contains("2. Key point number 2"));
    assert!(!summary.contains("3. Key point number 3"));
    assert!(summary.contains("*...还有 1 个观点...*"));
}
