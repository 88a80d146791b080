/*!
 * Title extraction.
 */

use super::heuristics::{strip_timestamp_markers, AnalyzerPolicy};

/// Pick a title from the opening lines of `content`, falling back to a title
/// derived from `filename`.
///
/// Only the first `title_scan_lines` non-empty lines are considered. Markdown
/// headings are skipped; timestamp markers are stripped before the length
/// check.
pub fn extract_title(content: &str, filename: &str, policy: &AnalyzerPolicy) -> String {
    let candidates = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .take(policy.title_scan_lines);

    for line in candidates {
        if line.starts_with('#') {
            continue;
        }

        let cleaned = strip_timestamp_markers(line);
        let cleaned = cleaned.trim();
        let length = cleaned.chars().count();
        if length > policy.title_min_chars && length < policy.title_max_chars {
            return cleaned.to_string();
        }
    }

    title_from_filename(filename)
}

/// `my_video_notes.md` becomes `my video notes`
///
/// Trailing `.md` / `.txt` extensions are stripped repeatedly, so
/// `notes.txt.md` becomes `notes`.
pub fn title_from_filename(filename: &str) -> String {
    let mut stem = filename;
    while let Some(shorter) = stem.strip_suffix(".md").or_else(|| stem.strip_suffix(".txt")) {
        stem = shorter;
    }
    stem.replace('_', " ")
}
