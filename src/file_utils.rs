use anyhow::{Result, Context};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::errors::ProcessingError;

// @module: File and directory utilities

/// Suffix added to the stem of summarized documents
pub const SUMMARY_SUFFIX: &str = "_summary";

/// Extensions the summarizer picks up in directory mode
pub const ARTICLE_EXTENSIONS: [&str; 2] = ["md", "txt"];

// @struct: File operations utility
pub struct FileManager;

impl FileManager {
    // @checks: File existence
    pub fn file_exists<P: AsRef<Path>>(path: P) -> bool {
        path.as_ref().exists() && path.as_ref().is_file()
    }

    // @checks: Directory existence
    pub fn dir_exists<P: AsRef<Path>>(path: P) -> bool {
        path.as_ref().exists() && path.as_ref().is_dir()
    }

    // @creates: Directory and parents if needed, existing directories are fine
    pub fn ensure_dir<P: AsRef<Path>>(path: P) -> Result<()> {
        let path = path.as_ref();
        if path.as_os_str().is_empty() {
            return Ok(());
        }
        fs::create_dir_all(path)
            .with_context(|| format!("Failed to create directory: {}", path.display()))?;
        Ok(())
    }

    // @generates: Output path `<output_dir>/<stem><suffix>.<extension>`
    pub fn generate_output_path<P1: AsRef<Path>, P2: AsRef<Path>>(
        input_file: P1,
        output_dir: P2,
        suffix: &str,
        extension: &str,
    ) -> PathBuf {
        let input_file = input_file.as_ref();
        let output_dir = output_dir.as_ref();

        // Get the file stem (filename without extension)
        let stem = input_file.file_stem().unwrap_or_default();

        let mut output_filename = stem.to_string_lossy().to_string();
        output_filename.push_str(suffix);
        output_filename.push('.');
        output_filename.push_str(extension);

        output_dir.join(output_filename)
    }

    /// Summary path for a document, next to it unless `output_dir` is given
    pub fn summary_output_path<P: AsRef<Path>>(input_file: P, output_dir: Option<&Path>) -> PathBuf {
        let input_file = input_file.as_ref();
        let dir = match output_dir {
            Some(dir) => dir.to_path_buf(),
            None => input_file.parent().map(Path::to_path_buf).unwrap_or_default(),
        };
        Self::generate_output_path(input_file, dir, SUMMARY_SUFFIX, "md")
    }

    /// Summary path that keeps the source extension, `talk.txt` becoming
    /// `talk.txt_summary.md`; used when the plain stem is already taken
    pub fn summary_output_path_with_extension<P: AsRef<Path>>(input_file: P, output_dir: Option<&Path>) -> PathBuf {
        let input_file = input_file.as_ref();
        let dir = match output_dir {
            Some(dir) => dir.to_path_buf(),
            None => input_file.parent().map(Path::to_path_buf).unwrap_or_default(),
        };
        let file_name = input_file.file_name().unwrap_or_default().to_string_lossy();
        dir.join(format!("{}{}.md", file_name, SUMMARY_SUFFIX))
    }

    /// Find files with a specific extension directly inside a directory
    pub fn find_files<P: AsRef<Path>>(dir: P, extension: &str) -> Result<Vec<PathBuf>> {
        let extension = extension.trim_start_matches('.');
        let mut result = Vec::new();

        for entry in WalkDir::new(dir.as_ref()).min_depth(1).max_depth(1).follow_links(true) {
            let entry = entry.context("Failed to read directory entry")?;
            let path = entry.path();

            if path.is_file() && has_extension(path, extension) {
                result.push(path.to_path_buf());
            }
        }

        result.sort();
        Ok(result)
    }

    /// Recursively find articles to summarize
    ///
    /// Returns `(articles, skipped)` where `skipped` are earlier summary
    /// outputs (file name containing `summary`).
    pub fn find_articles<P: AsRef<Path>>(dir: P) -> Result<(Vec<PathBuf>, Vec<PathBuf>)> {
        let mut articles = Vec::new();
        let mut skipped = Vec::new();

        for entry in WalkDir::new(dir.as_ref()).follow_links(true).sort_by_file_name() {
            let entry = entry.context("Failed to read directory entry")?;
            let path = entry.path();

            if !path.is_file() || !ARTICLE_EXTENSIONS.iter().any(|ext| has_extension(path, ext)) {
                continue;
            }

            let name = entry.file_name().to_string_lossy().to_lowercase();
            if name.contains("summary") {
                skipped.push(path.to_path_buf());
            } else {
                articles.push(path.to_path_buf());
            }
        }

        Ok((articles, skipped))
    }

    /// Immediate sub-directories of `dir`, sorted by name
    pub fn list_subdirs<P: AsRef<Path>>(dir: P) -> Result<Vec<PathBuf>> {
        let mut result = Vec::new();
        for entry in WalkDir::new(dir.as_ref()).min_depth(1).max_depth(1).sort_by_file_name() {
            let entry = entry.context("Failed to read directory entry")?;
            if entry.file_type().is_dir() {
                result.push(entry.into_path());
            }
        }
        Ok(result)
    }

    /// Read a file to a string
    pub fn read_to_string<P: AsRef<Path>>(path: P) -> Result<String> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ProcessingError::NotFound(path.to_path_buf()).into());
        }

        fs::read_to_string(path)
            .map_err(|source| ProcessingError::Read { path: path.to_path_buf(), source }.into())
    }

    /// Write a string to a file
    pub fn write_to_file<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
        let path = path.as_ref();

        // Ensure the parent directory exists
        if let Some(parent) = path.parent() {
            Self::ensure_dir(parent)?;
        }

        fs::write(path, content)
            .map_err(|source| ProcessingError::Write { path: path.to_path_buf(), source })?;

        Ok(())
    }
}

fn has_extension(path: &Path, extension: &str) -> bool {
    path.extension()
        .is_some_and(|ext| ext.to_string_lossy().eq_ignore_ascii_case(extension))
}
