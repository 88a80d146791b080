/*!
 * Subtitle-to-markdown conversion.
 *
 * - `renderer`: paragraph construction and document layout
 * - `merge`: policies deciding whether a cue continues the previous paragraph
 */

pub mod merge;
pub mod renderer;

pub use merge::{ContinuationMerge, KeepSeparate, MergeDecision, MergePolicy, MergePolicyKind};
pub use renderer::{ConversionOptions, MarkdownRenderer, RenderedLine};
