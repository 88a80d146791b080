/*!
 * Derived view of a text document.
 */

use super::heuristics::AnalyzerPolicy;
use super::key_points::extract_key_points;
use super::keywords::extract_keywords;
use super::title::extract_title;

/// Facts derived from one input document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalyzedDocument {
    /// Extracted or filename-derived title
    pub title: String,

    /// Sentence-like lines in document order
    pub key_points: Vec<String>,

    /// Salient tokens in first-seen order
    pub keywords: Vec<String>,

    /// Whitespace separated token count
    pub word_count: usize,

    /// Lines whose trimmed length passes the meaningful-line threshold
    pub meaningful_line_count: usize,
}

/// Runs the title, key point and keyword heuristics over a document
#[derive(Debug, Clone, Default)]
pub struct DocumentAnalyzer {
    policy: AnalyzerPolicy,
}

impl DocumentAnalyzer {
    pub fn new(policy: AnalyzerPolicy) -> Self {
        Self { policy }
    }

    /// Analyze `content`; `filename` is only used for the fallback title
    pub fn analyze(&self, content: &str, filename: &str) -> AnalyzedDocument {
        let meaningful_line_count = content
            .lines()
            .map(str::trim)
            .filter(|line| line.chars().count() > self.policy.meaningful_line_chars)
            .count();

        AnalyzedDocument {
            title: extract_title(content, filename, &self.policy),
            key_points: extract_key_points(content, self.policy.max_points, &self.policy),
            keywords: extract_keywords(content, &self.policy),
            word_count: content.split_whitespace().count(),
            meaningful_line_count,
        }
    }
}
