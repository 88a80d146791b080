use once_cell::sync::Lazy;
use regex::Regex;

use super::heuristics::{strip_timestamp_markers, AnalyzerPolicy};

// Leading heading/emphasis markup, e.g. "## " or "** "
static LEADING_MARKUP_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[#*]+\s*").unwrap()
});

/// Strip timestamp markers and leading markdown markup from one line
pub fn clean_point_line(line: &str) -> String {
    let without_markers = strip_timestamp_markers(line.trim());
    let without_markup = LEADING_MARKUP_REGEX.replace(without_markers.trim(), "");
    without_markup.trim().to_string()
}

/// Collect sentence-like lines in document order, without duplicates,
/// stopping at `max_points`.
pub fn extract_key_points(content: &str, max_points: usize, policy: &AnalyzerPolicy) -> Vec<String> {
    let mut points: Vec<String> = Vec::new();
    if max_points == 0 {
        return points;
    }

    for line in content.lines() {
        if line.trim().is_empty() {
            continue;
        }

        let cleaned = clean_point_line(line);
        let length = cleaned.chars().count();
        if length <= policy.point_min_chars || length >= policy.point_max_chars {
            continue;
        }

        if !points.contains(&cleaned) {
            points.push(cleaned);
            if points.len() >= max_points {
                break;
            }
        }
    }

    points
}
