use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, error, info, warn};
use std::collections::HashSet;
use std::fmt;
use std::path::{Path, PathBuf};

use crate::app_config::Config;
use crate::errors::ProcessingError;
use crate::file_utils::FileManager;
use crate::markdown::MarkdownRenderer;
use crate::summary::{DocumentAnalyzer, SummaryComposer, SummaryMode};

// @module: Application controller for conversion and summary runs

/// Caller-supplied check for work that was already done
///
/// The identifier passed in is the planned output path. The controller never
/// scans the filesystem for this itself.
pub trait AlreadyProcessed {
    fn already_processed(&self, identifier: &str) -> bool;
}

impl<F> AlreadyProcessed for F
where
    F: Fn(&str) -> bool,
{
    fn already_processed(&self, identifier: &str) -> bool {
        self(identifier)
    }
}

/// Predicate that treats every item as new
#[derive(Debug, Clone, Copy, Default)]
pub struct NeverProcessed;

impl AlreadyProcessed for NeverProcessed {
    fn already_processed(&self, _identifier: &str) -> bool {
        false
    }
}

/// Predicate that treats an item as done when its output file exists
#[derive(Debug, Clone, Copy, Default)]
pub struct OutputExists;

impl AlreadyProcessed for OutputExists {
    fn already_processed(&self, identifier: &str) -> bool {
        Path::new(identifier).exists()
    }
}

/// Skip predicate for batch conversion: re-convert everything unless
/// `skip_existing` is set
pub fn skip_predicate(skip_existing: bool) -> &'static dyn AlreadyProcessed {
    if skip_existing { &OutputExists } else { &NeverProcessed }
}

/// Per-run counters for batch operations
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchReport {
    pub success: usize,
    pub failed: usize,
    pub skipped: usize,
}

impl BatchReport {
    /// Add another report's counters to this one
    pub fn absorb(&mut self, other: BatchReport) {
        self.success += other.success;
        self.failed += other.failed;
        self.skipped += other.skipped;
    }

    pub fn total(&self) -> usize {
        self.success + self.failed + self.skipped
    }
}

impl fmt::Display for BatchReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "success {}, failed {}, skipped {}", self.success, self.failed, self.skipped)
    }
}

/// Main application controller
pub struct Controller {
    // @field: App configuration
    config: Config,
    renderer: MarkdownRenderer,
    analyzer: DocumentAnalyzer,
    composer: SummaryComposer,
}

impl Controller {
    /// Create a new controller for test purposes with default configuration
    pub fn new_for_test() -> Result<Self> {
        Self::with_config(Config::default())
    }

    // @method: Create a new controller with the given configuration
    pub fn with_config(config: Config) -> Result<Self> {
        config.validate()?;

        Ok(Self {
            renderer: config.build_renderer(),
            analyzer: config.build_analyzer(),
            composer: config.build_composer()?,
            config,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Markdown path for a subtitle file inside `output_dir`
    pub fn markdown_output_path(&self, input_file: &Path, output_dir: &Path) -> PathBuf {
        FileManager::generate_output_path(input_file, output_dir, "", &self.config.converter.output_extension)
    }

    /// Convert one subtitle file, returning the number of paragraphs written
    pub fn convert_file(&self, input_file: &Path, output_file: &Path) -> Result<usize> {
        if !input_file.exists() {
            return Err(ProcessingError::NotFound(input_file.to_path_buf()).into());
        }

        let paragraphs = self.renderer.convert_file(input_file, output_file)?;
        debug!("{} paragraph(s) written to {}", paragraphs, output_file.display());
        Ok(paragraphs)
    }

    /// Convert every subtitle file directly inside `srt_dir` into `md_dir`
    pub fn convert_folder(&self, srt_dir: &Path, md_dir: &Path, skip: &dyn AlreadyProcessed) -> Result<BatchReport> {
        if !FileManager::dir_exists(srt_dir) {
            return Err(ProcessingError::NotFound(srt_dir.to_path_buf()).into());
        }

        let files = FileManager::find_files(srt_dir, &self.config.converter.subtitle_extension)?;
        if files.is_empty() {
            return Err(ProcessingError::NoEntries {
                kind: self.config.converter.subtitle_extension.clone(),
                dir: srt_dir.to_path_buf(),
            }.into());
        }

        let report = self.convert_files(&files, md_dir, skip);
        info!("Conversion finished for {}: {}", srt_dir.display(), report);
        Ok(report)
    }

    /// Convert every `<base>/<channel>/srt` directory into `<base>/<channel>/md`
    pub fn convert_channels(&self, base_dir: &Path, skip: &dyn AlreadyProcessed) -> Result<BatchReport> {
        if !FileManager::dir_exists(base_dir) {
            return Err(ProcessingError::NotFound(base_dir.to_path_buf()).into());
        }

        let mut total = BatchReport::default();
        let mut channels_seen = 0;

        for channel_dir in FileManager::list_subdirs(base_dir)? {
            let srt_dir = channel_dir.join("srt");
            if !FileManager::dir_exists(&srt_dir) {
                continue;
            }
            channels_seen += 1;

            let channel_name = channel_dir
                .file_name()
                .map(|name| name.to_string_lossy().to_string())
                .unwrap_or_default();
            info!("Processing channel: {}", channel_name);

            let files = FileManager::find_files(&srt_dir, &self.config.converter.subtitle_extension)?;
            let report = self.convert_files(&files, &channel_dir.join("md"), skip);
            info!("Channel {}: {}", channel_name, report);
            total.absorb(report);
        }

        if channels_seen == 0 {
            return Err(ProcessingError::NoEntries {
                kind: "channel srt".to_string(),
                dir: base_dir.to_path_buf(),
            }.into());
        }

        info!("Total: {}", total);
        Ok(total)
    }

    fn convert_files(&self, files: &[PathBuf], md_dir: &Path, skip: &dyn AlreadyProcessed) -> BatchReport {
        let mut report = BatchReport::default();
        let progress_bar = Self::batch_progress_bar(files.len(), "Converting");

        for srt_file in files {
            let file_name = display_name(srt_file);
            let md_path = self.markdown_output_path(srt_file, md_dir);

            if skip.already_processed(&md_path.to_string_lossy()) {
                debug!("Skipping {}, already converted", file_name);
                report.skipped += 1;
                progress_bar.inc(1);
                continue;
            }

            match self.convert_file(srt_file, &md_path) {
                Ok(_) => {
                    info!("Converted: {} -> {}", file_name, display_name(&md_path));
                    report.success += 1;
                }
                Err(e) => {
                    error!("Failed: {} - {:#}", file_name, e);
                    report.failed += 1;
                }
            }
            progress_bar.inc(1);
        }

        progress_bar.finish_and_clear();
        report
    }

    /// Analyze and compose a summary for in-memory content
    pub fn summarize_content(&self, content: &str, filename: &str, mode: SummaryMode) -> String {
        let document = self.analyzer.analyze(content, filename);
        debug!(
            "Analyzed '{}': {} point(s), {} keyword(s), {} word(s)",
            document.title,
            document.key_points.len(),
            document.keywords.len(),
            document.word_count
        );
        self.composer.compose(&document, mode)
    }

    /// Read and summarize one document
    pub fn summarize_file(&self, input_file: &Path, mode: SummaryMode) -> Result<String> {
        let content = FileManager::read_to_string(input_file)?;
        let filename = input_file
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_default();
        Ok(self.summarize_content(&content, &filename, mode))
    }

    /// Summarize one document and write the result to `output_file`
    pub fn summarize_to_file(&self, input_file: &Path, output_file: &Path, mode: SummaryMode) -> Result<()> {
        let summary = self.summarize_file(input_file, mode)?;
        FileManager::write_to_file(output_file, &summary)?;
        Ok(())
    }

    /// Summarize every article below `dir`
    ///
    /// Files whose name contains `summary` are counted as skipped. Outputs go
    /// next to each article, or into `output_dir` when given. Two articles
    /// never share an output: the second keeps its extension in the name,
    /// and a third clash counts as failed.
    pub fn summarize_folder(&self, dir: &Path, output_dir: Option<&Path>, mode: SummaryMode) -> Result<BatchReport> {
        if !FileManager::dir_exists(dir) {
            return Err(ProcessingError::NotFound(dir.to_path_buf()).into());
        }

        let (articles, skipped) = FileManager::find_articles(dir)?;
        if articles.is_empty() {
            return Err(ProcessingError::NoEntries {
                kind: "article".to_string(),
                dir: dir.to_path_buf(),
            }.into());
        }

        info!("Found {} article(s) to summarize", articles.len());
        for path in &skipped {
            debug!("Skipping earlier summary: {}", path.display());
        }

        let mut report = BatchReport { skipped: skipped.len(), ..Default::default() };
        let progress_bar = Self::batch_progress_bar(articles.len(), "Summarizing");

        let mut planned_outputs: HashSet<PathBuf> = HashSet::new();

        for article in &articles {
            let Some(output_path) = Self::unique_summary_path(article, output_dir, &planned_outputs) else {
                error!("Failed to summarize {}: every summary name is already used in this run", article.display());
                report.failed += 1;
                progress_bar.inc(1);
                continue;
            };
            planned_outputs.insert(output_path.clone());

            match self.summarize_to_file(article, &output_path, mode) {
                Ok(()) => {
                    info!("Summary written: {}", output_path.display());
                    report.success += 1;
                }
                Err(e) => {
                    error!("Failed to summarize {}: {:#}", article.display(), e);
                    report.failed += 1;
                }
            }
            progress_bar.inc(1);
        }

        progress_bar.finish_and_clear();

        if report.failed > 0 {
            warn!("{} article(s) could not be summarized", report.failed);
        }
        info!("Summary run finished: {}", report);
        Ok(report)
    }

    // Plain `<stem>_summary.md` first, then the extension-keeping name
    fn unique_summary_path(article: &Path, output_dir: Option<&Path>, planned: &HashSet<PathBuf>) -> Option<PathBuf> {
        let plain = FileManager::summary_output_path(article, output_dir);
        if !planned.contains(&plain) {
            return Some(plain);
        }

        let with_extension = FileManager::summary_output_path_with_extension(article, output_dir);
        if planned.contains(&with_extension) {
            return None;
        }
        warn!("Summary name {} already used, writing {}", display_name(&plain), display_name(&with_extension));
        Some(with_extension)
    }

    fn batch_progress_bar(len: usize, message: &'static str) -> ProgressBar {
        let progress_bar = ProgressBar::new(len as u64);
        let template_result = ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} files ({percent}%) {msg}")
            .or_else(|_| ProgressStyle::default_bar().template("{spinner} [{elapsed_precise}] [{bar:40}] {pos}/{len} ({percent}%) {msg}"))
            .unwrap_or_else(|_| ProgressStyle::default_bar());
        progress_bar.set_style(template_result.progress_chars("█▓▒░"));
        progress_bar.set_message(message);
        progress_bar
    }
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|f| f.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}
