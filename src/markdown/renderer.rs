/*!
 * Markdown rendering of parsed subtitle blocks.
 *
 * Each accepted cue becomes one paragraph, `**[label]** text` when a label
 * is available, bare text otherwise. Paragraphs are separated by a single
 * blank line and the document ends with one newline.
 */

use std::fmt;
use std::path::Path;

use anyhow::Result;
use log::debug;

use super::merge::{KeepSeparate, MergeDecision, MergePolicy};
use crate::file_utils::FileManager;
use crate::subtitle_processor::{clean_text, parse_blocks, SubtitleBlock};

/// One output paragraph
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedLine {
    /// Display timestamp, e.g. `01:05`
    pub timestamp_label: Option<String>,

    /// Cleaned text, never empty
    pub text: String,
}

impl RenderedLine {
    pub fn new(timestamp_label: Option<String>, text: String) -> Self {
        Self { timestamp_label, text }
    }

    /// Build a line from a block, or None when the text cleans up to nothing
    pub fn from_block(block: &SubtitleBlock, include_timestamps: bool) -> Option<Self> {
        let text = clean_text(&block.payload());
        if text.is_empty() {
            return None;
        }

        let timestamp_label = if include_timestamps { block.start_label() } else { None };
        Some(Self::new(timestamp_label, text))
    }
}

impl fmt::Display for RenderedLine {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &self.timestamp_label {
            Some(label) => write!(f, "**[{}]** {}", label, self.text),
            None => write!(f, "{}", self.text),
        }
    }
}

/// Options controlling conversion output
#[derive(Debug, Clone)]
pub struct ConversionOptions {
    /// Prefix paragraphs with their start time
    pub include_timestamps: bool,
}

impl Default for ConversionOptions {
    fn default() -> Self {
        Self { include_timestamps: true }
    }
}

/// Converts SRT content into a markdown document
pub struct MarkdownRenderer {
    options: ConversionOptions,
    merge_policy: Box<dyn MergePolicy>,
}

impl MarkdownRenderer {
    /// Create a renderer with an explicit merge policy
    pub fn new(options: ConversionOptions, merge_policy: Box<dyn MergePolicy>) -> Self {
        Self { options, merge_policy }
    }

    /// Renderer with default options, every cue in its own paragraph
    pub fn with_defaults() -> Self {
        Self::new(ConversionOptions::default(), Box::new(KeepSeparate))
    }

    /// Turn parsed blocks into paragraphs, dropping blocks with no text
    pub fn render_lines(&self, blocks: &[SubtitleBlock]) -> Vec<RenderedLine> {
        let mut lines: Vec<RenderedLine> = Vec::with_capacity(blocks.len());

        for block in blocks {
            let Some(current) = RenderedLine::from_block(block, self.options.include_timestamps) else {
                debug!("Dropping block {:?}: no text after cleanup", block.sequence_index);
                continue;
            };

            if let Some(previous) = lines.last_mut() {
                if self.merge_policy.decide(previous, &current) == MergeDecision::Merge {
                    previous.text.push(' ');
                    previous.text.push_str(&current.text);
                    continue;
                }
            }

            lines.push(current);
        }

        lines
    }

    /// Join paragraphs into the final document text
    pub fn render_document(lines: &[RenderedLine]) -> String {
        let mut document = lines
            .iter()
            .map(|line| line.to_string())
            .collect::<Vec<_>>()
            .join("\n\n");
        document.push('\n');
        document
    }

    /// Parse and render raw SRT content in one step
    pub fn convert_str(&self, content: &str) -> String {
        let blocks = parse_blocks(content);
        let lines = self.render_lines(&blocks);
        debug!("Rendered {} paragraph(s) from {} block(s)", lines.len(), blocks.len());
        Self::render_document(&lines)
    }

    /// Convert an SRT file and write the markdown output, creating parent
    /// directories as needed. Returns the number of paragraphs written.
    pub fn convert_file<P1: AsRef<Path>, P2: AsRef<Path>>(&self, srt_path: P1, md_path: P2) -> Result<usize> {
        let content = FileManager::read_to_string(srt_path.as_ref())?;
        let lines = self.render_lines(&parse_blocks(&content));
        FileManager::write_to_file(md_path.as_ref(), &Self::render_document(&lines))?;
        Ok(lines.len())
    }
}

impl Default for MarkdownRenderer {
    fn default() -> Self {
        Self::with_defaults()
    }
}
