/*!
 * Heuristic document summarization.
 *
 * No model is involved: titles, key points and keywords are picked with
 * line- and token-level rules whose thresholds live in `heuristics`.
 *
 * - `heuristics`: tunable thresholds (`AnalyzerPolicy`)
 * - `title`, `key_points`, `keywords`: the individual extractors
 * - `document`: `DocumentAnalyzer` producing an `AnalyzedDocument`
 * - `composer`: fixed-layout summary rendering
 */

pub mod composer;
pub mod document;
pub mod heuristics;
pub mod key_points;
pub mod keywords;
pub mod title;

pub use composer::{ComposerLimits, SummaryComposer, SummaryLanguage, SummaryMode};
pub use document::{AnalyzedDocument, DocumentAnalyzer};
pub use heuristics::AnalyzerPolicy;
pub use key_points::extract_key_points;
pub use keywords::extract_keywords;
pub use title::extract_title;
