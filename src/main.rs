// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{Context, Result, anyhow};
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{Shell, generate};
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError, info};
use std::io::Write;
use std::path::{Path, PathBuf};

use srtdigest::app_config::{self, Config};
use srtdigest::app_controller::{Controller, skip_predicate};
use srtdigest::errors::ProcessingError;
use srtdigest::file_utils::FileManager;
use srtdigest::markdown::MergePolicyKind;

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for app_config::LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => app_config::LogLevel::Error,
            CliLogLevel::Warn => app_config::LogLevel::Warn,
            CliLogLevel::Info => app_config::LogLevel::Info,
            CliLogLevel::Debug => app_config::LogLevel::Debug,
            CliLogLevel::Trace => app_config::LogLevel::Trace,
        }
    }
}

/// CLI Wrapper for MergePolicyKind to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliMergePolicy {
    KeepSeparate,
    Continuation,
}

impl From<CliMergePolicy> for MergePolicyKind {
    fn from(cli_policy: CliMergePolicy) -> Self {
        match cli_policy {
            CliMergePolicy::KeepSeparate => MergePolicyKind::KeepSeparate,
            CliMergePolicy::Continuation => MergePolicyKind::Continuation,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Convert SRT subtitle files into readable markdown
    Convert(ConvertArgs),

    /// Summarize a text or markdown document
    Summarize(SummarizeArgs),

    /// Generate shell completions for srtdigest
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Parser, Debug)]
struct ConvertArgs {
    /// SRT file, directory of SRT files, or channel base directory with --channels
    #[arg(value_name = "INPUT_PATH")]
    input_path: PathBuf,

    /// Output markdown file (single file) or directory (directory mode)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Remove timestamps from output
    #[arg(long)]
    no_timestamps: bool,

    /// Paragraph merge policy
    #[arg(long, value_enum)]
    merge_policy: Option<CliMergePolicy>,

    /// Treat INPUT_PATH as a base directory of <channel>/srt folders
    #[arg(long)]
    channels: bool,

    /// In directory and channel mode, skip files whose markdown output already exists
    #[arg(long)]
    skip_existing: bool,
}

#[derive(Parser, Debug)]
struct SummarizeArgs {
    /// Input file to summarize
    #[arg(value_name = "INPUT", required_unless_present = "directory")]
    input: Option<PathBuf>,

    /// Summarize every article in a directory tree
    #[arg(short, long, conflicts_with = "input")]
    directory: Option<PathBuf>,

    /// Output file or directory path
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Produce a brief summary instead of a detailed one
    #[arg(long)]
    brief: bool,

    /// Print the summary instead of writing a file
    #[arg(long)]
    print: bool,

    /// Summary language (e.g. 'zh', 'en')
    #[arg(long)]
    language: Option<String>,
}

/// srtdigest - subtitle transcripts to readable notes
///
/// Converts SRT subtitle files into markdown and writes heuristic
/// summaries of text documents.
#[derive(Parser, Debug)]
#[command(name = "srtdigest")]
#[command(version)]
#[command(about = "Subtitle-to-markdown converter and heuristic summarizer")]
#[command(long_about = "srtdigest converts SRT subtitles into markdown notes and summarizes text documents.

EXAMPLES:
    srtdigest convert talk.srt                      # Writes talk.md next to the input
    srtdigest convert subs/ -o notes/               # Converts every .srt in subs/
    srtdigest convert --channels youtube_subtitles  # <channel>/srt -> <channel>/md
    srtdigest convert subs/ --skip-existing         # Leaves existing .md outputs alone
    srtdigest convert --no-timestamps talk.srt      # Paragraphs without time labels
    srtdigest summarize notes/talk.md               # Writes notes/talk_summary.md
    srtdigest summarize notes/talk.md --brief --print
    srtdigest summarize -d notes/ -o summaries/     # Summarizes a whole tree
    srtdigest completions bash > srtdigest.bash

CONFIGURATION:
    Configuration is stored in conf.json by default. You can specify a different
    config file with --config-path. If the config file doesn't exist, a default one
    will be created automatically.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file path
    #[arg(short, long, global = true, default_value = "conf.json")]
    config_path: String,

    /// Set logging level
    #[arg(short, long, global = true, value_enum)]
    log_level: Option<CliLogLevel>,
}

// @struct: Custom logger implementation
struct CustomLogger {
    level: LevelFilter,
}

impl CustomLogger {
    // @creates: New logger with specified level
    fn new(level: LevelFilter) -> Self {
        CustomLogger { level }
    }

    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        let logger = Box::new(CustomLogger::new(level));
        log::set_boxed_logger(logger)?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: Emoji and ANSI color for log level
    fn style_for_level(level: Level) -> (&'static str, &'static str) {
        match level {
            Level::Error => ("❌ ", "1;31"),
            Level::Warn => ("🚧 ", "1;33"),
            Level::Info => (" ", "1;32"),
            Level::Debug => ("🔍 ", "1;36"),
            Level::Trace => ("📋 ", "1;35"),
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S%.3f");
            let (emoji, color) = Self::style_for_level(record.level());

            let mut stderr = std::io::stderr();
            let _ = writeln!(stderr, "\x1B[{}m{} {} {}\x1B[0m", color, now, emoji, record.args());
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

fn main() -> Result<()> {
    // Accept every level here; the effective level is set through max_level
    CustomLogger::init(LevelFilter::Trace)?;
    log::set_max_level(LevelFilter::Info);

    let cli = CommandLineOptions::parse();

    if let Commands::Completions { shell } = cli.command {
        let mut cmd = CommandLineOptions::command();
        generate(shell, &mut cmd, "srtdigest", &mut std::io::stdout());
        return Ok(());
    }

    if let Some(level) = &cli.log_level {
        let level: app_config::LogLevel = level.clone().into();
        log::set_max_level(level.to_level_filter());
    }

    let mut config = Config::load_or_create(&cli.config_path)?;

    // If log level was not set via command line, update it from config now
    if let Some(level) = &cli.log_level {
        config.log_level = level.clone().into();
    } else {
        log::set_max_level(config.log_level.to_level_filter());
    }

    match cli.command {
        Commands::Convert(args) => run_convert(config, args),
        Commands::Summarize(args) => run_summarize(config, args),
        Commands::Completions { .. } => Ok(()),
    }
}

fn run_convert(mut config: Config, args: ConvertArgs) -> Result<()> {
    if args.no_timestamps {
        config.converter.include_timestamps = false;
    }
    if let Some(policy) = args.merge_policy {
        config.converter.merge_policy = policy.into();
    }

    let controller = Controller::with_config(config).context("Configuration validation failed")?;

    let skip = skip_predicate(args.skip_existing);

    if args.channels {
        let report = controller.convert_channels(&args.input_path, skip)?;
        info!("Total converted: {} ({})", report.success, report);
        return Ok(());
    }

    if args.input_path.is_dir() {
        let md_dir = args.output.clone().unwrap_or_else(|| args.input_path.clone());
        let report = controller.convert_folder(&args.input_path, &md_dir, skip)?;
        info!("Converted {} file(s) ({})", report.success, report);
        return Ok(());
    }

    if !args.input_path.exists() {
        return Err(ProcessingError::NotFound(args.input_path.clone()).into());
    }

    let output = match args.output {
        Some(path) => path,
        None => {
            let parent = args.input_path.parent().unwrap_or(Path::new("."));
            controller.markdown_output_path(&args.input_path, parent)
        }
    };

    let paragraphs = controller.convert_file(&args.input_path, &output)?;
    info!("Converted: {} -> {} ({} paragraphs)", args.input_path.display(), output.display(), paragraphs);
    Ok(())
}

fn run_summarize(mut config: Config, args: SummarizeArgs) -> Result<()> {
    if let Some(language) = args.language {
        config.summary.language = language;
    }
    if args.brief {
        config.summary.detailed = false;
    }
    let mode = config.summary.mode();

    let controller = Controller::with_config(config).context("Configuration validation failed")?;

    if let Some(directory) = args.directory {
        let report = controller.summarize_folder(&directory, args.output.as_deref(), mode)?;
        info!("Summaries complete: {}", report);
        return Ok(());
    }

    let input = args.input.ok_or_else(|| anyhow!("INPUT or --directory is required"))?;

    if args.print {
        let summary = controller.summarize_file(&input, mode)?;
        println!("{}", summary);
        return Ok(());
    }

    let output = args
        .output
        .unwrap_or_else(|| FileManager::summary_output_path(&input, None));
    controller.summarize_to_file(&input, &output, mode)?;
    info!("Summary written: {}", output.display());
    Ok(())
}
