//! Sidebar entries.

use serde::Serialize;

/// One record of the generated sidebar.
///
/// Serializes to the shape documentation themes consume:
/// - page: `{"text": "...", "link": "/path"}`
/// - folder: `{"text": "...", "link"?: "/path/", "collapsed"?: bool, "children": [...]}`
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum SidebarEntry {
    /// Link to a single page.
    Page {
        /// Display text.
        text: String,
        /// Canonical URL path.
        link: String,
    },
    /// Group of entries built from a folder.
    Folder {
        /// Display text.
        text: String,
        /// URL path of the folder's index page, when linked.
        #[serde(skip_serializing_if = "Option::is_none")]
        link: Option<String>,
        /// Initial collapse state for themes that support it.
        #[serde(skip_serializing_if = "Option::is_none")]
        collapsed: Option<bool>,
        /// Child entries in traversal order.
        children: Vec<SidebarEntry>,
    },
}

impl SidebarEntry {
    /// Display text.
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            Self::Page { text, .. } | Self::Folder { text, .. } => text,
        }
    }

    /// Link target, if the entry has one.
    #[must_use]
    pub fn link(&self) -> Option<&str> {
        match self {
            Self::Page { link, .. } => Some(link),
            Self::Folder { link, .. } => link.as_deref(),
        }
    }

    /// Child entries (always empty for pages).
    #[must_use]
    pub fn children(&self) -> &[SidebarEntry] {
        match self {
            Self::Page { .. } => &[],
            Self::Folder { children, .. } => children,
        }
    }

    /// True for folder entries.
    #[must_use]
    pub fn is_folder(&self) -> bool {
        matches!(self, Self::Folder { .. })
    }
}
