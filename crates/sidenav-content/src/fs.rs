//! Filesystem content source.

use std::path::{Path, PathBuf};

use glob::Pattern;

use crate::node::ContentTree;
use crate::scanner::Scanner;
use crate::source::{ContentError, ContentSource};

/// Content source backed by a directory on disk.
///
/// The directory is read on every [`scan`](ContentSource::scan); nothing is
/// cached between calls.
///
/// # Example
///
/// ```ignore
/// use std::path::PathBuf;
/// use sidenav_content::{ContentSource, FsContentSource};
///
/// let source = FsContentSource::with_exclude(PathBuf::from("docs"), &["drafts/**".to_owned()])?;
/// let tree = source.scan()?;
/// ```
#[derive(Debug)]
pub struct FsContentSource {
    /// Root directory of the content tree.
    source_dir: PathBuf,
    /// Scanner for document discovery.
    scanner: Scanner,
}

impl FsContentSource {
    /// Create a filesystem source without exclude patterns.
    #[must_use]
    pub fn new(source_dir: PathBuf) -> Self {
        let scanner = Scanner::new(source_dir.clone(), Vec::new());
        Self {
            source_dir,
            scanner,
        }
    }

    /// Create a filesystem source that skips paths matching `patterns`.
    ///
    /// Patterns are globs matched against `/`-separated paths relative to
    /// `source_dir` (e.g., `"drafts/**"`, `"*.draft.md"`).
    ///
    /// # Errors
    ///
    /// Returns [`ContentError::InvalidPattern`] for the first invalid glob.
    pub fn with_exclude(source_dir: PathBuf, patterns: &[String]) -> Result<Self, ContentError> {
        let exclude = patterns
            .iter()
            .map(|p| {
                Pattern::new(p).map_err(|source| ContentError::InvalidPattern {
                    pattern: p.clone(),
                    source,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let scanner = Scanner::new(source_dir.clone(), exclude);
        Ok(Self {
            source_dir,
            scanner,
        })
    }

    /// Root directory of the content tree.
    #[must_use]
    pub fn source_dir(&self) -> &Path {
        &self.source_dir
    }
}

impl ContentSource for FsContentSource {
    fn scan(&self) -> Result<ContentTree, ContentError> {
        if !self.source_dir.exists() {
            return Err(ContentError::RootNotFound(self.source_dir.clone()));
        }
        if !self.source_dir.is_dir() {
            return Err(ContentError::NotADirectory(self.source_dir.clone()));
        }

        let tree = self.scanner.scan()?;
        tracing::debug!(
            source_dir = %self.source_dir.display(),
            pages = tree.page_count(),
            "Scanned content tree"
        );
        Ok(tree)
    }
}
