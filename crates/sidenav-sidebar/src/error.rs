//! Sidebar generation errors.

use std::path::PathBuf;

use sidenav_content::ContentError;

/// Error returned when a sidebar cannot be generated.
///
/// Generation either produces a complete sidebar or fails with one of these;
/// partial output is never returned.
#[derive(Debug, thiserror::Error)]
pub enum SidebarError {
    /// Content root or generation input is missing or invalid.
    #[error("Configuration error: {message}")]
    Configuration {
        /// What is wrong.
        message: String,
        /// Offending path, if any.
        path: Option<PathBuf>,
    },
    /// A specific document cannot be turned into a sidebar entry.
    #[error("Malformed content in {}: {reason}", path.display())]
    MalformedContent {
        /// Path of the document to fix.
        path: PathBuf,
        /// What is wrong with it.
        reason: String,
    },
}

impl SidebarError {
    /// Create a malformed content error.
    #[must_use]
    pub fn malformed(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::MalformedContent {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Path the error refers to, if any.
    #[must_use]
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            Self::Configuration { path, .. } => path.as_deref(),
            Self::MalformedContent { path, .. } => Some(path),
        }
    }
}

impl From<ContentError> for SidebarError {
    fn from(e: ContentError) -> Self {
        match e {
            ContentError::ReadFile { path, source } => Self::MalformedContent {
                path,
                reason: format!("cannot be read: {source}"),
            },
            ContentError::InvalidFileName(path) => Self::MalformedContent {
                path,
                reason: "file name is not valid UTF-8".to_owned(),
            },
            _ => Self::Configuration {
                path: e.path().map(std::path::Path::to_path_buf),
                message: e.to_string(),
            },
        }
    }
}
