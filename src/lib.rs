/*!
 * # srtdigest - subtitle transcripts to readable notes
 *
 * A Rust library for turning SubRip subtitle files into markdown documents
 * and producing short heuristic digests of text documents.
 *
 * ## Features
 *
 * - Parse SRT files, tolerating malformed and unframed blocks
 * - Strip subtitle markup (tags, override blocks, sound labels)
 * - Render one paragraph per cue with optional `**[MM:SS]**` labels
 * - Extract titles, key points and keywords with lexical heuristics
 * - Compose detailed or brief summaries in Chinese or English
 * - Directory batch runs with success/failure/skip counters
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `subtitle_processor`: block parsing, text cleanup, timestamp labels
 * - `markdown`: paragraph rendering and merge policies
 * - `summary`: document analysis and summary composition
 * - `app_config`: Configuration management
 * - `app_controller`: single-file and batch orchestration
 * - `file_utils`: File system operations
 * - `language_utils`: summary language resolution
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

// Public modules
pub mod app_config;
pub mod app_controller;
pub mod errors;
pub mod file_utils;
pub mod language_utils;
pub mod markdown;
pub mod subtitle_processor;
pub mod summary;

// Re-export main types for easier usage
pub use app_config::Config;
pub use app_controller::{AlreadyProcessed, BatchReport, Controller, NeverProcessed, OutputExists, skip_predicate};
pub use errors::ProcessingError;
pub use markdown::{MarkdownRenderer, MergePolicy, RenderedLine};
pub use subtitle_processor::{SubtitleBlock, format_timestamp_label, parse_blocks, clean_text};
pub use summary::{AnalyzedDocument, DocumentAnalyzer, SummaryComposer, SummaryLanguage, SummaryMode};
