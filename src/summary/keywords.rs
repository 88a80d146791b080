use std::collections::HashSet;

use super::heuristics::{strip_timestamp_markers, AnalyzerPolicy};

/// Characters treated as word separators in addition to whitespace
pub const KEYWORD_PUNCTUATION: [char; 12] = [',', '.', '!', '?', ':', ';', '(', ')', '"', '\'', '[', ']'];

/// Whether a single token qualifies as a keyword
pub fn is_keyword_candidate(word: &str, policy: &AnalyzerPolicy) -> bool {
    let length = word.chars().count();
    if length <= policy.keyword_min_chars || word.starts_with("http") {
        return false;
    }

    let salient = word.chars().any(char::is_uppercase)
        || word.chars().any(char::is_numeric)
        || length > policy.keyword_long_chars;

    salient && !policy.is_stopword(word)
}

/// Extract salient tokens in first-seen order, deduplicated case-sensitively
/// and capped at `max_keywords`.
pub fn extract_keywords(content: &str, policy: &AnalyzerPolicy) -> Vec<String> {
    let cleaned: String = strip_timestamp_markers(content)
        .chars()
        .map(|c| if KEYWORD_PUNCTUATION.contains(&c) { ' ' } else { c })
        .collect();

    let mut seen: HashSet<&str> = HashSet::new();
    let mut keywords = Vec::new();

    for word in cleaned.split_whitespace() {
        if keywords.len() >= policy.max_keywords {
            break;
        }
        if is_keyword_candidate(word, policy) && seen.insert(word) {
            keywords.push(word.to_string());
        }
    }

    keywords
}
