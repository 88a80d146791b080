/*!
 * Error types for the srtdigest application.
 *
 * This module contains custom error types for the conversion and summary
 * pipelines, using the thiserror crate for ergonomic error definitions.
 *
 * Malformed subtitle blocks and blocks that clean up to nothing are not
 * errors: the parser and renderer drop them silently.
 */

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while processing a single input file or directory
#[derive(Error, Debug)]
pub enum ProcessingError {
    /// Input file or directory does not exist
    #[error("Input not found: {}", .0.display())]
    NotFound(PathBuf),

    /// Input could not be read or decoded as UTF-8
    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        /// File that failed
        path: PathBuf,
        /// Underlying IO error
        #[source]
        source: std::io::Error,
    },

    /// Output could not be written
    #[error("Failed to write {}: {source}", .path.display())]
    Write {
        /// File that failed
        path: PathBuf,
        /// Underlying IO error
        #[source]
        source: std::io::Error,
    },

    /// A batch run found nothing to process
    #[error("No {kind} files found in {}", .dir.display())]
    NoEntries {
        /// Human readable kind of file searched for
        kind: String,
        /// Directory that was searched
        dir: PathBuf,
    },
}

impl ProcessingError {
    /// True when the error means the input path is missing
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}
