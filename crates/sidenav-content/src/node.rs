//! Content tree model.
//!
//! # Path Convention
//!
//! Node paths are relative to the content root and always use `/` as the
//! separator, regardless of platform:
//! - `"intro.md"` - top-level page
//! - `"guides"` - folder
//! - `"guides/setup.md"` - nested page
//! - `"guides/index.md"` - folder index page

use crate::markdown::Frontmatter;

/// Name of the file that acts as a folder's own page.
pub(crate) const INDEX_FILENAME: &str = "index.md";

/// Discriminant of a [`DocumentNode`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NodeKind {
    /// A markdown document.
    Page,
    /// A directory holding further nodes.
    Folder,
}

/// A markdown document discovered in the content tree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageNode {
    /// Relative path including the `.md` extension (e.g., "guides/setup.md").
    pub path: String,
    /// Text of the first level-one heading, if the document has one.
    pub heading: Option<String>,
    /// Fields read from the YAML frontmatter block.
    pub frontmatter: Frontmatter,
    /// Position among its siblings after ordering.
    pub ordinal: usize,
}

impl PageNode {
    /// Create a page node at ordinal 0.
    #[must_use]
    pub fn new(path: impl Into<String>, heading: Option<String>, frontmatter: Frontmatter) -> Self {
        Self {
            path: path.into(),
            heading,
            frontmatter,
            ordinal: 0,
        }
    }

    /// File name component of the path (e.g., "setup.md").
    #[must_use]
    pub fn file_name(&self) -> &str {
        last_segment(&self.path)
    }

    /// File name without the `.md` extension (e.g., "setup").
    #[must_use]
    pub fn stem(&self) -> &str {
        let name = self.file_name();
        name.strip_suffix(".md").unwrap_or(name)
    }

    /// True if this page is a folder's `index.md`.
    ///
    /// The match is exact; `INDEX.md` is an ordinary page.
    #[must_use]
    pub fn is_index(&self) -> bool {
        self.file_name() == INDEX_FILENAME
    }

    /// Canonical URL path of the page.
    ///
    /// - `intro.md` -> `/intro`
    /// - `guides/setup.md` -> `/guides/setup`
    /// - `index.md` -> `/`
    /// - `guides/index.md` -> `/guides/`
    #[must_use]
    pub fn link(&self) -> String {
        if self.is_index() {
            let dir = parent_path(&self.path);
            if dir.is_empty() {
                return "/".to_owned();
            }
            return format!("/{dir}/");
        }
        let without_ext = self.path.strip_suffix(".md").unwrap_or(&self.path);
        format!("/{without_ext}")
    }
}

/// A directory in the content tree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FolderNode {
    /// Relative directory path (e.g., "guides", "guides/advanced").
    pub path: String,
    /// Position among its siblings after ordering.
    pub ordinal: usize,
    /// The folder's own `index.md`, kept apart from `children`.
    pub index: Option<PageNode>,
    /// Child nodes in traversal order.
    pub children: Vec<DocumentNode>,
}

impl FolderNode {
    /// Create a folder node at ordinal 0. Children are renumbered.
    #[must_use]
    pub fn new(
        path: impl Into<String>,
        index: Option<PageNode>,
        mut children: Vec<DocumentNode>,
    ) -> Self {
        number_siblings(&mut children);
        Self {
            path: path.into(),
            ordinal: 0,
            index,
            children,
        }
    }

    /// Directory name component of the path (e.g., "advanced").
    #[must_use]
    pub fn name(&self) -> &str {
        last_segment(&self.path)
    }
}

/// One node of the content tree: a page or a folder.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DocumentNode {
    /// Markdown document.
    Page(PageNode),
    /// Directory with nested nodes.
    Folder(FolderNode),
}

impl DocumentNode {
    /// Relative path of the node.
    #[must_use]
    pub fn path(&self) -> &str {
        match self {
            Self::Page(page) => &page.path,
            Self::Folder(folder) => &folder.path,
        }
    }

    /// Position among siblings.
    #[must_use]
    pub fn ordinal(&self) -> usize {
        match self {
            Self::Page(page) => page.ordinal,
            Self::Folder(folder) => folder.ordinal,
        }
    }

    /// Node discriminant.
    #[must_use]
    pub fn kind(&self) -> NodeKind {
        match self {
            Self::Page(_) => NodeKind::Page,
            Self::Folder(_) => NodeKind::Folder,
        }
    }

    fn set_ordinal(&mut self, ordinal: usize) {
        match self {
            Self::Page(page) => page.ordinal = ordinal,
            Self::Folder(folder) => folder.ordinal = ordinal,
        }
    }
}

/// Scanned content: the root index page and the top-level nodes.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContentTree {
    root_index: Option<PageNode>,
    nodes: Vec<DocumentNode>,
}

impl ContentTree {
    /// Create a tree. Top-level nodes are renumbered in the given order.
    #[must_use]
    pub fn new(root_index: Option<PageNode>, mut nodes: Vec<DocumentNode>) -> Self {
        number_siblings(&mut nodes);
        Self { root_index, nodes }
    }

    /// The `index.md` at the content root, if present.
    #[must_use]
    pub fn root_index(&self) -> Option<&PageNode> {
        self.root_index.as_ref()
    }

    /// Top-level nodes in traversal order.
    #[must_use]
    pub fn nodes(&self) -> &[DocumentNode] {
        &self.nodes
    }

    /// True if the tree holds no pages and no folders.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.root_index.is_none() && self.nodes.is_empty()
    }

    /// Number of pages in the whole tree, index pages included.
    #[must_use]
    pub fn page_count(&self) -> usize {
        fn count(nodes: &[DocumentNode]) -> usize {
            nodes
                .iter()
                .map(|node| match node {
                    DocumentNode::Page(_) => 1,
                    DocumentNode::Folder(folder) => {
                        usize::from(folder.index.is_some()) + count(&folder.children)
                    }
                })
                .sum()
        }
        usize::from(self.root_index.is_some()) + count(&self.nodes)
    }
}

/// Assign ordinals to siblings in their current order.
pub(crate) fn number_siblings(nodes: &mut [DocumentNode]) {
    for (ordinal, node) in nodes.iter_mut().enumerate() {
        node.set_ordinal(ordinal);
    }
}

/// Join a relative prefix and a name with `/`.
pub(crate) fn join_path(prefix: &str, name: &str) -> String {
    if prefix.is_empty() {
        name.to_owned()
    } else {
        format!("{prefix}/{name}")
    }
}

fn last_segment(path: &str) -> &str {
    path.rsplit_once('/').map_or(path, |(_, last)| last)
}

fn parent_path(path: &str) -> &str {
    path.rsplit_once('/').map_or("", |(parent, _)| parent)
}
