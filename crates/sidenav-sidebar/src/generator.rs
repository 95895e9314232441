//! Sidebar generation from a content tree.
//!
//! # Traversal
//!
//! The tree is walked depth-first in sibling order. A folder's children are
//! resolved before the folder record itself is built, so a folder knows
//! whether it has any qualifying pages when it is emitted.
//!
//! # Empty folders
//!
//! A folder qualifies when it has at least one child entry or a link to its
//! own index page. Folders that do not qualify are omitted unless
//! [`SidebarOptions::include_empty_folder`] is set, in which case they are
//! emitted with an empty child list.
//!
//! # Link uniqueness
//!
//! Every link target appears at most once in the generated tree. A second
//! occurrence fails the whole generation with
//! [`SidebarError::MalformedContent`] naming the page that repeats it.

use std::collections::HashSet;

use sidenav_content::{ContentSource, ContentTree, DocumentNode, FolderNode, PageNode};

use crate::entry::SidebarEntry;
use crate::error::SidebarError;
use crate::options::SidebarOptions;
use crate::title::{resolve_folder_title, resolve_page_title};

/// Builds sidebar entries from content trees.
///
/// A generator holds no state between calls; generating twice from the same
/// tree yields identical output.
#[derive(Clone, Debug, Default)]
pub struct SidebarGenerator {
    options: SidebarOptions,
}

impl SidebarGenerator {
    /// Create a generator with the given options.
    #[must_use]
    pub fn new(options: SidebarOptions) -> Self {
        Self { options }
    }

    /// Options in effect.
    #[must_use]
    pub fn options(&self) -> &SidebarOptions {
        &self.options
    }

    /// Generate the sidebar for an already scanned tree.
    ///
    /// # Errors
    ///
    /// Returns [`SidebarError::MalformedContent`] if a page cannot be titled
    /// or a link target repeats.
    pub fn generate(&self, tree: &ContentTree) -> Result<Vec<SidebarEntry>, SidebarError> {
        let mut walk = Walk {
            options: &self.options,
            links: HashSet::new(),
        };

        let mut entries = Vec::new();
        if self.options.include_root_index_file
            && let Some(index) = tree.root_index()
        {
            entries.push(walk.page_entry(index)?);
        }
        entries.extend(walk.resolve_nodes(tree.nodes())?);

        tracing::info!(
            entries = entries.len(),
            links = walk.links.len(),
            "Generated sidebar"
        );
        Ok(entries)
    }

    /// Scan `source` and generate its sidebar.
    ///
    /// # Errors
    ///
    /// Returns [`SidebarError::Configuration`] if the content root is missing
    /// or unreadable, and [`SidebarError::MalformedContent`] for page-level
    /// problems.
    pub fn generate_from(
        &self,
        source: &dyn ContentSource,
    ) -> Result<Vec<SidebarEntry>, SidebarError> {
        let tree = source.scan()?;
        self.generate(&tree)
    }
}

/// Scan `source` and generate its sidebar with `options`.
///
/// # Errors
///
/// See [`SidebarGenerator::generate_from`].
pub fn generate_sidebar(
    source: &dyn ContentSource,
    options: &SidebarOptions,
) -> Result<Vec<SidebarEntry>, SidebarError> {
    SidebarGenerator::new(options.clone()).generate_from(source)
}

/// State of one generation pass.
struct Walk<'a> {
    options: &'a SidebarOptions,
    /// Link targets emitted so far.
    links: HashSet<String>,
}

impl Walk<'_> {
    /// Resolve sibling nodes into entries, in sibling order.
    fn resolve_nodes(&mut self, nodes: &[DocumentNode]) -> Result<Vec<SidebarEntry>, SidebarError> {
        let mut ordered: Vec<&DocumentNode> = nodes.iter().collect();
        if self.options.sort_by_frontmatter_order {
            ordered.sort_by_key(|node| {
                let order = frontmatter_order(node);
                (order.is_none(), order.unwrap_or_default(), node.ordinal())
            });
        } else {
            ordered.sort_by_key(|node| node.ordinal());
        }

        let mut entries = Vec::with_capacity(ordered.len());
        for node in ordered {
            match node {
                DocumentNode::Page(page) => entries.push(self.page_entry(page)?),
                DocumentNode::Folder(folder) => {
                    if let Some(entry) = self.folder_entry(folder)? {
                        entries.push(entry);
                    }
                }
            }
        }
        Ok(entries)
    }

    fn page_entry(&mut self, page: &PageNode) -> Result<SidebarEntry, SidebarError> {
        let text = resolve_page_title(page, self.options).ok_or_else(|| {
            SidebarError::malformed(
                &page.path,
                "no title can be derived from frontmatter, heading, or file name",
            )
        })?;
        let link = self.claim_link(page)?;
        tracing::debug!(path = %page.path, title = %text, "Resolved page");
        Ok(SidebarEntry::Page { text, link })
    }

    /// Build a folder entry, or `None` if the folder is omitted.
    fn folder_entry(&mut self, folder: &FolderNode) -> Result<Option<SidebarEntry>, SidebarError> {
        let linked_index = self
            .options
            .use_folder_link_from_index_file
            .then_some(folder.index.as_ref())
            .flatten();
        let listed_index = (self.options.include_folder_index_file && linked_index.is_none())
            .then_some(folder.index.as_ref())
            .flatten();

        let mut children = Vec::new();
        if let Some(index) = listed_index {
            children.push(self.page_entry(index)?);
        }
        children.extend(self.resolve_nodes(&folder.children)?);

        let link = linked_index.map(|index| self.claim_link(index)).transpose()?;

        if children.is_empty() && link.is_none() && !self.options.include_empty_folder {
            tracing::debug!(path = %folder.path, "Omitting folder without pages");
            return Ok(None);
        }

        let text = resolve_folder_title(folder, self.options).ok_or_else(|| {
            SidebarError::malformed(&folder.path, "no title can be derived from folder name")
        })?;

        Ok(Some(SidebarEntry::Folder {
            text,
            link,
            collapsed: self.options.collapsed,
            children,
        }))
    }

    /// Record the page's link target, failing if it was already emitted.
    fn claim_link(&mut self, page: &PageNode) -> Result<String, SidebarError> {
        let link = page.link();
        if !self.links.insert(link.clone()) {
            return Err(SidebarError::malformed(
                &page.path,
                format!("duplicate link target {link}"),
            ));
        }
        Ok(link)
    }
}

/// Sort key from frontmatter; folders use their index page.
fn frontmatter_order(node: &DocumentNode) -> Option<i64> {
    match node {
        DocumentNode::Page(page) => page.frontmatter.order,
        DocumentNode::Folder(folder) => folder.index.as_ref()?.frontmatter.order,
    }
}
