use regex::Regex;
use once_cell::sync::Lazy;
use log::debug;

// @module: Subtitle block parsing, text cleanup and timestamp labels

// @const: Blank-line block separator (tolerates whitespace-only lines)
static BLOCK_SEPARATOR_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\n\s*\n").unwrap()
});

// @const: SRT timing line, start and end captured separately
static TIMING_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(\d+):(\d+):(\d+),(\d+)\s*-->\s*(\d+):(\d+):(\d+),(\d+)").unwrap()
});

// @const: Markup removed from cue text, applied in order
static MARKUP_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    vec![
        // Angle-bracket spans
        Regex::new(r"<[^>]+>").unwrap(),
        // Curly-brace spans
        Regex::new(r"\{[^}]+\}").unwrap(),
        // Square-bracket spans
        Regex::new(r"\[[^\]]+\]").unwrap(),
    ]
});

/// Timing separator every well-formed cue carries on its second line
pub const TIMING_ARROW: &str = "-->";

/// Minimum number of lines a block needs to be considered at all
pub const MIN_BLOCK_LINES: usize = 3;

/// A single SRT time value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SrtTime {
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
    pub milliseconds: u64,
}

impl SrtTime {
    pub fn new(hours: u64, minutes: u64, seconds: u64, milliseconds: u64) -> Self {
        Self { hours, minutes, seconds, milliseconds }
    }

    /// Display label for this time, milliseconds dropped
    pub fn label(&self) -> String {
        format_timestamp_label(self.hours, self.minutes, self.seconds)
    }

    fn from_captures(caps: &regex::Captures, start_idx: usize) -> Option<Self> {
        let field = |offset: usize| -> Option<u64> {
            caps.get(start_idx + offset)?.as_str().parse().ok()
        };

        Some(Self::new(field(0)?, field(1)?, field(2)?, field(3)?))
    }
}

/// Start and end of a cue
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CueTiming {
    pub start: SrtTime,
    pub end: SrtTime,
}

impl CueTiming {
    /// Parse the first `start --> end` pair found in a timing line
    pub fn parse(line: &str) -> Option<Self> {
        let caps = TIMING_REGEX.captures(line)?;
        Some(Self {
            start: SrtTime::from_captures(&caps, 1)?,
            end: SrtTime::from_captures(&caps, 5)?,
        })
    }
}

/// One cue read from a subtitle file
///
/// Blocks whose first two lines do not look like `index` / `timing` are kept
/// as fallback blocks: no index, no timing, every line is text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubtitleBlock {
    // @field: True when the block had the index/timing framing
    pub framed: bool,

    // @field: Cue index, None for fallback blocks or indices too large for u64
    pub sequence_index: Option<u64>,

    // @field: Parsed timing, None when the timing line does not match
    pub timing: Option<CueTiming>,

    // @field: Text lines in file order
    pub raw_text_lines: Vec<String>,
}

impl SubtitleBlock {
    /// Whether the block had the standard index/timing framing
    pub fn is_framed(&self) -> bool {
        self.framed
    }

    /// Text payload, lines joined with single spaces
    pub fn payload(&self) -> String {
        self.raw_text_lines.join(" ")
    }

    /// Label derived from the start time, if the timing line parsed
    pub fn start_label(&self) -> Option<String> {
        self.timing.map(|timing| timing.start.label())
    }
}

/// Format a display timestamp: `HH:MM:SS` when hours > 0, `MM:SS` otherwise
pub fn format_timestamp_label(hours: u64, minutes: u64, seconds: u64) -> String {
    if hours > 0 {
        format!("{:02}:{:02}:{:02}", hours, minutes, seconds)
    } else {
        format!("{:02}:{:02}", minutes, seconds)
    }
}

/// Remove tag, brace and bracket spans and trim the result
pub fn clean_text(text: &str) -> String {
    let mut cleaned = text.to_string();
    for pattern in MARKUP_PATTERNS.iter() {
        cleaned = pattern.replace_all(&cleaned, "").into_owned();
    }
    cleaned.trim().to_string()
}

fn is_cue_index(line: &str) -> bool {
    !line.is_empty() && line.chars().all(|c| c.is_ascii_digit())
}

/// Split raw SRT content into blocks
///
/// Blocks with fewer than three lines are skipped. Everything else is
/// returned in file order.
pub fn parse_blocks(content: &str) -> Vec<SubtitleBlock> {
    let trimmed = content.trim();
    if trimmed.is_empty() {
        return Vec::new();
    }

    let mut blocks = Vec::new();

    for (block_no, raw_block) in BLOCK_SEPARATOR_REGEX.split(trimmed).enumerate() {
        let lines: Vec<&str> = raw_block.trim().lines().collect();

        if lines.len() < MIN_BLOCK_LINES {
            debug!("Skipping block {} with only {} line(s)", block_no + 1, lines.len());
            continue;
        }

        if is_cue_index(lines[0]) && lines[1].contains(TIMING_ARROW) {
            let timing = CueTiming::parse(lines[1]);
            if timing.is_none() {
                debug!("Block {} has an unreadable timing line: {}", block_no + 1, lines[1]);
            }

            blocks.push(SubtitleBlock {
                framed: true,
                sequence_index: lines[0].parse().ok(),
                timing,
                raw_text_lines: lines[2..].iter().map(|line| line.to_string()).collect(),
            });
        } else {
            blocks.push(SubtitleBlock {
                framed: false,
                sequence_index: None,
                timing: None,
                raw_text_lines: lines.iter().map(|line| line.to_string()).collect(),
            });
        }
    }

    blocks
}
