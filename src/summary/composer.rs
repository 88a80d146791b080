/*!
 * Summary document layout.
 *
 * The composer renders an `AnalyzedDocument` into one of two fixed layouts.
 * Detailed mode carries basic counts, keywords, up to six key points and a
 * closing remarks section; brief mode carries a one-line statement and up to
 * three points. Both end with the generated-by trailer.
 */

use serde::{Deserialize, Serialize};

use super::document::AnalyzedDocument;

/// Marker appended to truncated key points
pub const ELLIPSIS: &str = "...";

/// Output verbosity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SummaryMode {
    #[default]
    Detailed,
    Brief,
}

impl SummaryMode {
    pub fn from_detailed_flag(detailed: bool) -> Self {
        if detailed { Self::Detailed } else { Self::Brief }
    }
}

/// Language of the fixed labels in the summary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SummaryLanguage {
    #[default]
    Chinese,
    English,
}

/// Caps and truncation lengths used while composing
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct ComposerLimits {
    #[serde(default = "default_detailed_keywords")]
    pub detailed_keywords: usize,

    #[serde(default = "default_detailed_points")]
    pub detailed_points: usize,

    #[serde(default = "default_detailed_point_chars")]
    pub detailed_point_chars: usize,

    #[serde(default = "default_brief_points")]
    pub brief_points: usize,

    #[serde(default = "default_brief_point_chars")]
    pub brief_point_chars: usize,
}

impl Default for ComposerLimits {
    fn default() -> Self {
        Self {
            detailed_keywords: default_detailed_keywords(),
            detailed_points: default_detailed_points(),
            detailed_point_chars: default_detailed_point_chars(),
            brief_points: default_brief_points(),
            brief_point_chars: default_brief_point_chars(),
        }
    }
}

fn default_detailed_keywords() -> usize {
    10
}

fn default_detailed_points() -> usize {
    6
}

fn default_detailed_point_chars() -> usize {
    150
}

fn default_brief_points() -> usize {
    3
}

fn default_brief_point_chars() -> usize {
    100
}

/// Fixed strings for one summary language
struct Labels {
    heading: &'static str,
    basic_info: &'static str,
    keywords: &'static str,
    key_points: &'static str,
    insights: &'static str,
    insight_bullets: [&'static str; 3],
    brief_heading: &'static str,
    brief_points: &'static str,
    trailer: &'static str,
}

static CHINESE_LABELS: Labels = Labels {
    heading: "## 文章总结",
    basic_info: "### 基本信息",
    keywords: "### 关键词",
    key_points: "### 核心观点",
    insights: "### 主要启示",
    insight_bullets: [
        "该内容提供了相关主题的深度见解和实用信息",
        "涵盖了技术/商业/行业的重要发展趋势",
        "为相关从业者和学习者提供了宝贵的参考价值",
    ],
    brief_heading: "### 简要总结",
    brief_points: "### 主要观点",
    trailer: "*此总结由自动工具生成*",
};

static ENGLISH_LABELS: Labels = Labels {
    heading: "## Summary",
    basic_info: "### Overview",
    keywords: "### Keywords",
    key_points: "### Key Points",
    insights: "### Takeaways",
    insight_bullets: [
        "The content offers in-depth insight and practical information on its topic",
        "It covers notable trends in technology, business or industry",
        "It is a useful reference for practitioners and learners in the field",
    ],
    brief_heading: "### Brief",
    brief_points: "### Main Points",
    trailer: "*This summary was generated automatically*",
};

impl SummaryLanguage {
    fn labels(self) -> &'static Labels {
        match self {
            Self::Chinese => &CHINESE_LABELS,
            Self::English => &ENGLISH_LABELS,
        }
    }

    fn word_count_line(self, words: usize) -> String {
        match self {
            Self::Chinese => format!("- **内容长度**: {} 个单词", words),
            Self::English => format!("- **Length**: {} words", words),
        }
    }

    fn line_count_line(self, lines: usize) -> String {
        match self {
            Self::Chinese => format!("- **主要内容数**: {} 条", lines),
            Self::English => format!("- **Substantive lines**: {}", lines),
        }
    }

    fn omitted_points_line(self, omitted: usize) -> String {
        match self {
            Self::Chinese => format!("*...还有 {} 个观点...*", omitted),
            Self::English => format!("*...{} more points...*", omitted),
        }
    }

    fn brief_statement(self, words: usize) -> String {
        match self {
            Self::Chinese => format!("这是一篇包含{}个单词的文章，主要讨论了相关主题。", words),
            Self::English => format!("This article contains {} words and discusses the topics below.", words),
        }
    }
}

/// Cut `text` to `max_chars` characters, appending [`ELLIPSIS`] when cut
pub fn truncate_point(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => format!("{}{}", &text[..byte_idx], ELLIPSIS),
        None => text.to_string(),
    }
}

/// Renders analyzed documents into summary text
#[derive(Debug, Clone, Default)]
pub struct SummaryComposer {
    language: SummaryLanguage,
    limits: ComposerLimits,
}

impl SummaryComposer {
    pub fn new(language: SummaryLanguage, limits: ComposerLimits) -> Self {
        Self { language, limits }
    }

    pub fn language(&self) -> SummaryLanguage {
        self.language
    }

    /// Compose the summary for `document` in the requested mode
    pub fn compose(&self, document: &AnalyzedDocument, mode: SummaryMode) -> String {
        let labels = self.language.labels();
        let mut summary = format!("# {}\n\n{}\n\n", document.title, labels.heading);

        match mode {
            SummaryMode::Detailed => self.compose_detailed(document, &mut summary),
            SummaryMode::Brief => self.compose_brief(document, &mut summary),
        }

        summary.push_str("\n---\n\n");
        summary.push_str(labels.trailer);
        summary
    }

    fn compose_detailed(&self, document: &AnalyzedDocument, summary: &mut String) {
        let labels = self.language.labels();

        summary.push_str(labels.basic_info);
        summary.push('\n');
        summary.push_str(&self.language.word_count_line(document.word_count));
        summary.push('\n');
        summary.push_str(&self.language.line_count_line(document.meaningful_line_count));
        summary.push_str("\n\n");

        if !document.keywords.is_empty() {
            let shown: Vec<&str> = document
                .keywords
                .iter()
                .take(self.limits.detailed_keywords)
                .map(String::as_str)
                .collect();
            summary.push_str(labels.keywords);
            summary.push('\n');
            summary.push_str(&shown.join(", "));
            summary.push_str("\n\n");
        }

        summary.push_str(labels.key_points);
        summary.push('\n');
        push_numbered_points(
            summary,
            &document.key_points,
            self.limits.detailed_points,
            self.limits.detailed_point_chars,
        );

        if document.key_points.len() > self.limits.detailed_points {
            let omitted = document.key_points.len() - self.limits.detailed_points;
            summary.push('\n');
            summary.push_str(&self.language.omitted_points_line(omitted));
            summary.push('\n');
        }

        summary.push('\n');
        summary.push_str(labels.insights);
        summary.push('\n');
        for bullet in labels.insight_bullets {
            summary.push_str("- ");
            summary.push_str(bullet);
            summary.push('\n');
        }
    }

    fn compose_brief(&self, document: &AnalyzedDocument, summary: &mut String) {
        let labels = self.language.labels();

        summary.push_str(labels.brief_heading);
        summary.push('\n');
        summary.push_str(&self.language.brief_statement(document.word_count));
        summary.push_str("\n\n");

        if !document.key_points.is_empty() {
            summary.push_str(labels.brief_points);
            summary.push('\n');
            push_numbered_points(
                summary,
                &document.key_points,
                self.limits.brief_points,
                self.limits.brief_point_chars,
            );
        }
    }
}

fn push_numbered_points(summary: &mut String, points: &[String], limit: usize, max_chars: usize) {
    for (i, point) in points.iter().take(limit).enumerate() {
        summary.push_str(&format!("{}. {}\n", i + 1, truncate_point(point, max_chars)));
    }
}
