/*!
 * Tunable thresholds for the lexical heuristics.
 *
 * All length bounds are exclusive and measured in characters (Unicode scalar
 * values), so a title bound of (5, 200) accepts 6 to 199 characters.
 */

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Bold bracket timestamp markers written by the converter (`**[01:05]**`)
pub static TIMESTAMP_MARKER_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\*\*\[[^\]]+\]\*\*").unwrap()
});

/// Remove every bold bracket timestamp marker from `text`
pub fn strip_timestamp_markers(text: &str) -> String {
    TIMESTAMP_MARKER_REGEX.replace_all(text, "").into_owned()
}

/// Thresholds for title, key point and keyword extraction
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct AnalyzerPolicy {
    /// Number of non-empty lines inspected for a title
    #[serde(default = "default_title_scan_lines")]
    pub title_scan_lines: usize,

    /// Title length must be greater than this
    #[serde(default = "default_title_min_chars")]
    pub title_min_chars: usize,

    /// Title length must be less than this
    #[serde(default = "default_title_max_chars")]
    pub title_max_chars: usize,

    /// Key point length must be greater than this
    #[serde(default = "default_point_min_chars")]
    pub point_min_chars: usize,

    /// Key point length must be less than this
    #[serde(default = "default_point_max_chars")]
    pub point_max_chars: usize,

    /// Maximum number of key points kept
    #[serde(default = "default_max_points")]
    pub max_points: usize,

    /// Keyword length must be greater than this
    #[serde(default = "default_keyword_min_chars")]
    pub keyword_min_chars: usize,

    /// Words longer than this qualify without uppercase letters or digits
    #[serde(default = "default_keyword_long_chars")]
    pub keyword_long_chars: usize,

    /// Maximum number of keywords kept
    #[serde(default = "default_max_keywords")]
    pub max_keywords: usize,

    /// Lines longer than this count as meaningful
    #[serde(default = "default_meaningful_line_chars")]
    pub meaningful_line_chars: usize,

    /// Words never reported as keywords, compared case-insensitively
    #[serde(default = "default_stopwords")]
    pub stopwords: Vec<String>,
}

impl AnalyzerPolicy {
    pub(crate) fn is_stopword(&self, word: &str) -> bool {
        let lowered = word.to_lowercase();
        self.stopwords.iter().any(|stop| stop.to_lowercase() == lowered)
    }
}

impl Default for AnalyzerPolicy {
    fn default() -> Self {
        Self {
            title_scan_lines: default_title_scan_lines(),
            title_min_chars: default_title_min_chars(),
            title_max_chars: default_title_max_chars(),
            point_min_chars: default_point_min_chars(),
            point_max_chars: default_point_max_chars(),
            max_points: default_max_points(),
            keyword_min_chars: default_keyword_min_chars(),
            keyword_long_chars: default_keyword_long_chars(),
            max_keywords: default_max_keywords(),
            meaningful_line_chars: default_meaningful_line_chars(),
            stopwords: default_stopwords(),
        }
    }
}

fn default_title_scan_lines() -> usize {
    10
}

fn default_title_min_chars() -> usize {
    5
}

fn default_title_max_chars() -> usize {
    200
}

fn default_point_min_chars() -> usize {
    20
}

fn default_point_max_chars() -> usize {
    300
}

fn default_max_points() -> usize {
    8
}

fn default_keyword_min_chars() -> usize {
    5
}

fn default_keyword_long_chars() -> usize {
    8
}

fn default_max_keywords() -> usize {
    15
}

fn default_meaningful_line_chars() -> usize {
    10
}

fn default_stopwords() -> Vec<String> {
    ["this", "that", "about", "they", "would", "could"]
        .iter()
        .map(|word| word.to_string())
        .collect()
}
