//! Mock content source for testing.
//!
//! Provides [`MockContentSource`] for unit testing without filesystem access.

use std::collections::BTreeMap;
use std::path::PathBuf;

use crate::markdown::parse_page;
use crate::node::{ContentTree, DocumentNode, FolderNode, PageNode, join_path};
use crate::source::{ContentError, ContentSource};

/// In-memory directory used while assembling the tree.
///
/// `BTreeMap` keys give the same name ordering as the filesystem scanner;
/// pages are listed before folders there too.
#[derive(Default)]
struct MockDir {
    files: BTreeMap<String, String>,
    dirs: BTreeMap<String, MockDir>,
}

impl MockDir {
    fn insert_file(&mut self, segments: &[&str], content: String) {
        match segments {
            [] => {}
            [name] => {
                self.files.insert((*name).to_owned(), content);
            }
            [dir, rest @ ..] => self
                .dirs
                .entry((*dir).to_owned())
                .or_default()
                .insert_file(rest, content),
        }
    }

    fn insert_dir(&mut self, segments: &[&str]) {
        if let [dir, rest @ ..] = segments {
            self.dirs
                .entry((*dir).to_owned())
                .or_default()
                .insert_dir(rest);
        }
    }

    fn into_listing(self, prefix: &str) -> (Option<PageNode>, Vec<DocumentNode>) {
        let mut index = None;
        let mut nodes = Vec::new();
        for (name, content) in self.files {
            let rel_path = join_path(prefix, &name);
            let (heading, frontmatter) = parse_page(&content, &rel_path);
            let page = PageNode::new(rel_path, heading, frontmatter);
            if page.is_index() {
                index = Some(page);
            } else {
                nodes.push(DocumentNode::Page(page));
            }
        }
        for (name, dir) in self.dirs {
            let rel_path = join_path(prefix, &name);
            let (child_index, children) = dir.into_listing(&rel_path);
            nodes.push(DocumentNode::Folder(FolderNode::new(
                rel_path,
                child_index,
                children,
            )));
        }
        (index, nodes)
    }
}

/// Mock content source for testing.
///
/// Holds page contents keyed by relative path. Use the builder methods to
/// describe a tree; `scan()` parses headings and frontmatter the same way
/// the filesystem source does.
///
/// # Example
///
/// ```ignore
/// use sidenav_content::{ContentSource, MockContentSource};
///
/// let source = MockContentSource::new()
///     .with_page("intro.md", "# Getting Started")
///     .with_page("guides/setup.md", "No heading here.");
///
/// let tree = source.scan().unwrap();
/// ```
#[derive(Debug, Default)]
pub struct MockContentSource {
    pages: Vec<(String, String)>,
    folders: Vec<String>,
    missing_root: Option<PathBuf>,
}

impl MockContentSource {
    /// Create a new empty mock source.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a source whose `scan()` fails as if `root` did not exist.
    #[must_use]
    pub fn missing_root(root: impl Into<PathBuf>) -> Self {
        Self {
            missing_root: Some(root.into()),
            ..Self::default()
        }
    }

    /// Add a page with the given relative path and markdown content.
    ///
    /// Intermediate folders are created implicitly.
    #[must_use]
    pub fn with_page(mut self, path: impl Into<String>, content: impl Into<String>) -> Self {
        self.pages.push((path.into(), content.into()));
        self
    }

    /// Add a folder, which may stay empty.
    #[must_use]
    pub fn with_folder(mut self, path: impl Into<String>) -> Self {
        self.folders.push(path.into());
        self
    }
}

impl ContentSource for MockContentSource {
    fn scan(&self) -> Result<ContentTree, ContentError> {
        if let Some(root) = &self.missing_root {
            return Err(ContentError::RootNotFound(root.clone()));
        }

        let mut root = MockDir::default();
        for folder in &self.folders {
            let segments: Vec<_> = folder.split('/').filter(|s| !s.is_empty()).collect();
            root.insert_dir(&segments);
        }
        for (path, content) in &self.pages {
            let segments: Vec<_> = path.split('/').filter(|s| !s.is_empty()).collect();
            root.insert_file(&segments, content.clone());
        }

        let (index, nodes) = root.into_listing("");
        Ok(ContentTree::new(index, nodes))
    }
}
