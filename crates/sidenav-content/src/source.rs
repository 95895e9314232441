//! Content source trait and error types.

use std::path::{Path, PathBuf};

use crate::node::ContentTree;

/// Error returned when a content tree cannot be scanned.
#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    /// The content root does not exist.
    #[error("Content root not found: {}", .0.display())]
    RootNotFound(PathBuf),
    /// The content root exists but is not a directory.
    #[error("Content root is not a directory: {}", .0.display())]
    NotADirectory(PathBuf),
    /// An exclude pattern is not a valid glob.
    #[error("Invalid exclude pattern {pattern:?}: {source}")]
    InvalidPattern {
        /// The offending pattern.
        pattern: String,
        /// Underlying glob error.
        #[source]
        source: glob::PatternError,
    },
    /// A directory could not be listed.
    #[error("Failed to read directory {}: {source}", path.display())]
    ReadDir {
        /// Directory path.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// A page or folder name is not valid UTF-8.
    #[error("File name is not valid UTF-8: {}", .0.display())]
    InvalidFileName(PathBuf),
    /// A page file could not be read.
    #[error("Failed to read {}: {source}", path.display())]
    ReadFile {
        /// File path.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

impl ContentError {
    /// Path the error refers to, if any.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::RootNotFound(path)
            | Self::NotADirectory(path)
            | Self::InvalidFileName(path)
            | Self::ReadDir { path, .. }
            | Self::ReadFile { path, .. } => Some(path),
            Self::InvalidPattern { .. } => None,
        }
    }
}

/// Source of a content tree.
///
/// Implementations decide where documents come from (a directory on disk,
/// an in-memory fixture) and return them as a [`ContentTree`] whose sibling
/// order is deterministic for unchanged input.
pub trait ContentSource: Send + Sync {
    /// Scan and return the whole content tree.
    ///
    /// # Errors
    ///
    /// Returns [`ContentError`] if the root is missing or content cannot be read.
    fn scan(&self) -> Result<ContentTree, ContentError>;
}
