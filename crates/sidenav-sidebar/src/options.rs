//! Sidebar generation options.

/// Options controlling how the content tree becomes a sidebar.
///
/// All flags default to `false` and `collapsed` defaults to `None`, which
/// gives filename-derived titles, no capitalization, and no index pages.
#[allow(clippy::struct_excessive_bools)]
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SidebarOptions {
    /// Use the first level-one heading as the page title.
    pub use_title_from_heading: bool,
    /// Upper-case the first character of every resolved title.
    pub capitalize_first: bool,
    /// Use the frontmatter `title` field, ahead of the heading.
    pub use_title_from_frontmatter: bool,
    /// Resolve a folder's title from its `index.md` instead of its name.
    pub use_folder_title_from_index_file: bool,
    /// Link a folder entry to its `index.md`.
    ///
    /// The index page is then not listed among the folder's children.
    pub use_folder_link_from_index_file: bool,
    /// List a folder's `index.md` as its first child page.
    pub include_folder_index_file: bool,
    /// List the content root `index.md` as the first top-level entry.
    pub include_root_index_file: bool,
    /// Keep folders without qualifying pages, with an empty child list.
    pub include_empty_folder: bool,
    /// Sort siblings by frontmatter `order` before name order.
    ///
    /// A folder takes the `order` of its `index.md`. Nodes without an order
    /// come after ordered ones.
    pub sort_by_frontmatter_order: bool,
    /// `collapsed` value attached to every folder entry.
    pub collapsed: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let options = SidebarOptions::default();

        assert!(!options.use_title_from_heading);
        assert!(!options.capitalize_first);
        assert!(!options.include_empty_folder);
        assert!(!options.include_root_index_file);
        assert_eq!(options.collapsed, None);
    }
}
