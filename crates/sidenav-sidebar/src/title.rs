//! Title resolution for pages and folders.

use sidenav_content::{FolderNode, PageNode};

use crate::options::SidebarOptions;

/// Derive a title from a file or folder name.
///
/// Replaces `-` and `_` with spaces and leaves everything else untouched.
/// The caller strips the extension.
///
/// # Examples
///
/// ```
/// use sidenav_sidebar::title_from_filename;
///
/// assert_eq!(title_from_filename("getting-started"), "getting started");
/// assert_eq!(title_from_filename("API_reference"), "API reference");
/// ```
#[must_use]
pub fn title_from_filename(stem: &str) -> String {
    stem.replace(['-', '_'], " ")
}

/// Upper-case the first character of `title`.
///
/// Other characters keep their case.
///
/// # Examples
///
/// ```
/// use sidenav_sidebar::capitalize_first;
///
/// assert_eq!(capitalize_first("getting started"), "Getting started");
/// assert_eq!(capitalize_first("iOS"), "IOS");
/// ```
#[must_use]
pub fn capitalize_first(title: &str) -> String {
    let mut chars = title.chars();
    let Some(first) = chars.next() else {
        return String::new();
    };
    let mut result = String::with_capacity(title.len());
    result.extend(first.to_uppercase());
    result.push_str(chars.as_str());
    result
}

/// Resolve the display title of a page.
///
/// Order: frontmatter title (if enabled), heading (if enabled), file name.
/// Blank candidates are skipped. Returns `None` when every candidate is blank.
pub(crate) fn resolve_page_title(page: &PageNode, options: &SidebarOptions) -> Option<String> {
    let title = explicit_title(page, options)
        .map(str::to_owned)
        .or_else(|| non_blank(title_from_filename(page.stem())))?;
    Some(apply_case(title, options))
}

/// Resolve the display title of a folder.
///
/// With `use_folder_title_from_index_file`, the index page's frontmatter
/// title or heading wins; the folder name is the fallback.
pub(crate) fn resolve_folder_title(
    folder: &FolderNode,
    options: &SidebarOptions,
) -> Option<String> {
    let from_index = options
        .use_folder_title_from_index_file
        .then(|| folder.index.as_ref())
        .flatten()
        .and_then(|index| explicit_title(index, options));

    let title = from_index
        .map(str::to_owned)
        .or_else(|| non_blank(title_from_filename(folder.name())))?;
    Some(apply_case(title, options))
}

/// Title carried by the page content itself, per the enabled policies.
fn explicit_title<'a>(page: &'a PageNode, options: &SidebarOptions) -> Option<&'a str> {
    let frontmatter = options
        .use_title_from_frontmatter
        .then_some(page.frontmatter.title.as_deref())
        .flatten();
    let heading = options
        .use_title_from_heading
        .then_some(page.heading.as_deref())
        .flatten();

    [frontmatter, heading]
        .into_iter()
        .flatten()
        .find(|t| !t.trim().is_empty())
}

fn non_blank(title: String) -> Option<String> {
    (!title.trim().is_empty()).then_some(title)
}

fn apply_case(title: String, options: &SidebarOptions) -> String {
    if options.capitalize_first {
        capitalize_first(&title)
    } else {
        title
    }
}
