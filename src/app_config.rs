use anyhow::{anyhow, Context, Result};
use log::warn;
use serde::{Deserialize, Serialize};
use std::default::Default;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::markdown::{ConversionOptions, MarkdownRenderer, MergePolicyKind};
use crate::summary::{AnalyzerPolicy, ComposerLimits, DocumentAnalyzer, SummaryComposer, SummaryMode};

/// Application configuration module
/// This module handles the application configuration including loading,
/// validating and saving configuration settings.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct Config {
    /// Subtitle conversion settings
    #[serde(default)]
    pub converter: ConverterConfig,

    /// Thresholds for the document heuristics
    #[serde(default)]
    pub analyzer: AnalyzerPolicy,

    /// Summary output settings
    #[serde(default)]
    pub summary: SummaryConfig,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Subtitle conversion settings
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ConverterConfig {
    // @field: Prefix paragraphs with their start time
    #[serde(default = "default_true")]
    pub include_timestamps: bool,

    // @field: Paragraph merge strategy
    #[serde(default)]
    pub merge_policy: MergePolicyKind,

    // @field: Extension of subtitle inputs in directory mode
    #[serde(default = "default_subtitle_extension")]
    pub subtitle_extension: String,

    // @field: Extension of converted documents
    #[serde(default = "default_output_extension")]
    pub output_extension: String,
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            include_timestamps: true,
            merge_policy: MergePolicyKind::default(),
            subtitle_extension: default_subtitle_extension(),
            output_extension: default_output_extension(),
        }
    }
}

/// Summary output settings
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct SummaryConfig {
    /// Language of the fixed summary labels (ISO code or name)
    #[serde(default = "default_summary_language")]
    pub language: String,

    /// Detailed layout unless brief is requested
    #[serde(default = "default_true")]
    pub detailed: bool,

    /// Caps used by the composer
    #[serde(default)]
    pub limits: ComposerLimits,
}

impl Default for SummaryConfig {
    fn default() -> Self {
        Self {
            language: default_summary_language(),
            detailed: true,
            limits: ComposerLimits::default(),
        }
    }
}

impl SummaryConfig {
    pub fn mode(&self) -> SummaryMode {
        SummaryMode::from_detailed_flag(self.detailed)
    }
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_level_filter(&self) -> log::LevelFilter {
        match self {
            Self::Error => log::LevelFilter::Error,
            Self::Warn => log::LevelFilter::Warn,
            Self::Info => log::LevelFilter::Info,
            Self::Debug => log::LevelFilter::Debug,
            Self::Trace => log::LevelFilter::Trace,
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_subtitle_extension() -> String {
    "srt".to_string()
}

fn default_output_extension() -> String {
    "md".to_string()
}

fn default_summary_language() -> String {
    "zh".to_string()
}

impl Config {
    /// Load configuration from a JSON file, writing a default one when the
    /// file does not exist yet
    pub fn load_or_create<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        if path.exists() {
            let file = File::open(path)
                .with_context(|| format!("Failed to open config file: {}", path.display()))?;
            let reader = BufReader::new(file);
            let config: Config = serde_json::from_reader(reader)
                .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
            return Ok(config);
        }

        warn!("Config file not found at '{}', creating default config.", path.display());
        let config = Config::default();
        config.save(path)?;
        Ok(config)
    }

    /// Save configuration as pretty-printed JSON
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let config_json = serde_json::to_string_pretty(self)
            .context("Failed to serialize config to JSON")?;
        std::fs::write(path, config_json)
            .with_context(|| format!("Failed to write config to file: {}", path.display()))?;
        Ok(())
    }

    /// Validate the configuration for consistency and required values
    pub fn validate(&self) -> Result<()> {
        crate::language_utils::resolve_summary_language(&self.summary.language)?;

        if self.converter.subtitle_extension.trim_start_matches('.').is_empty() {
            return Err(anyhow!("converter.subtitle_extension must not be empty"));
        }
        if self.converter.output_extension.trim_start_matches('.').is_empty() {
            return Err(anyhow!("converter.output_extension must not be empty"));
        }

        let policy = &self.analyzer;
        if policy.title_min_chars >= policy.title_max_chars {
            return Err(anyhow!(
                "analyzer.title_min_chars ({}) must be below title_max_chars ({})",
                policy.title_min_chars, policy.title_max_chars
            ));
        }
        if policy.point_min_chars >= policy.point_max_chars {
            return Err(anyhow!(
                "analyzer.point_min_chars ({}) must be below point_max_chars ({})",
                policy.point_min_chars, policy.point_max_chars
            ));
        }
        if policy.title_scan_lines == 0 || policy.max_points == 0 || policy.max_keywords == 0 {
            return Err(anyhow!("analyzer scan and cap values must be greater than zero"));
        }

        Ok(())
    }

    /// Build the markdown renderer described by the converter section
    pub fn build_renderer(&self) -> MarkdownRenderer {
        MarkdownRenderer::new(
            ConversionOptions { include_timestamps: self.converter.include_timestamps },
            self.converter.merge_policy.build(),
        )
    }

    /// Build the analyzer described by the analyzer section
    pub fn build_analyzer(&self) -> DocumentAnalyzer {
        DocumentAnalyzer::new(self.analyzer.clone())
    }

    /// Build the summary composer; fails on an unsupported language
    pub fn build_composer(&self) -> Result<SummaryComposer> {
        let language = crate::language_utils::resolve_summary_language(&self.summary.language)?;
        Ok(SummaryComposer::new(language, self.summary.limits.clone()))
    }
}
