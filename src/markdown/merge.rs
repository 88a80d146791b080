/*!
 * Paragraph merge policies.
 *
 * The renderer asks a policy, for each accepted cue, whether it should be
 * appended to the paragraph before it. The shipped default keeps every cue
 * as its own paragraph; `ContinuationMerge` activates the continuation-line
 * heuristic for callers that want denser output.
 */

use serde::{Deserialize, Serialize};

use super::renderer::RenderedLine;

/// Punctuation that marks a complete thought
pub const TERMINAL_PUNCTUATION: [char; 6] = ['.', '!', '?', '。', '！', '？'];

/// Paragraphs shorter than this are treated as labels or sound effects
pub const MIN_MERGE_CHARS: usize = 3;

/// Outcome of a merge decision
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergeDecision {
    /// Emit the current line as a new paragraph
    KeepSeparate,
    /// Append the current line to the previous paragraph
    Merge,
}

/// Strategy deciding whether a line continues the previous paragraph
pub trait MergePolicy {
    fn decide(&self, previous: &RenderedLine, current: &RenderedLine) -> MergeDecision;
}

/// Continuation heuristic for a single paragraph text
///
/// False when the text is shorter than [`MIN_MERGE_CHARS`] visible characters
/// or already ends in terminal punctuation.
pub fn is_continuation_candidate(text: &str) -> bool {
    let trimmed = text.trim();
    if trimmed.ends_with(TERMINAL_PUNCTUATION) {
        return false;
    }
    trimmed.chars().count() >= MIN_MERGE_CHARS
}

/// Never merges: every accepted cue stands alone
#[derive(Debug, Clone, Copy, Default)]
pub struct KeepSeparate;

impl MergePolicy for KeepSeparate {
    fn decide(&self, _previous: &RenderedLine, _current: &RenderedLine) -> MergeDecision {
        MergeDecision::KeepSeparate
    }
}

/// Merges a line into the previous paragraph when it passes the
/// continuation heuristic
#[derive(Debug, Clone, Copy, Default)]
pub struct ContinuationMerge;

impl MergePolicy for ContinuationMerge {
    fn decide(&self, _previous: &RenderedLine, current: &RenderedLine) -> MergeDecision {
        if is_continuation_candidate(&current.text) {
            MergeDecision::Merge
        } else {
            MergeDecision::KeepSeparate
        }
    }
}

/// Configurable selection of a merge policy
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum MergePolicyKind {
    #[default]
    KeepSeparate,
    Continuation,
}

impl MergePolicyKind {
    /// Build the policy object for this kind
    pub fn build(self) -> Box<dyn MergePolicy> {
        match self {
            Self::KeepSeparate => Box::new(KeepSeparate),
            Self::Continuation => Box::new(ContinuationMerge),
        }
    }
}

impl std::fmt::Display for MergePolicyKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::KeepSeparate => write!(f, "keep_separate"),
            Self::Continuation => write!(f, "continuation"),
        }
    }
}
