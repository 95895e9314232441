//! Content discovery by filesystem walking.
//!
//! The Scanner walks the content root depth-first and builds the
//! [`ContentTree`] directly. Within a directory, pages come first and folders
//! after them, each group sorted by file name, so the same directory always
//! yields the same tree whatever order the OS lists entries in.

use std::fs;
use std::path::{Path, PathBuf};

use glob::Pattern;

use crate::markdown::parse_page;
use crate::node::{ContentTree, DocumentNode, FolderNode, PageNode, join_path};
use crate::source::ContentError;

/// Pages and folders found in one directory.
struct DirectoryListing {
    index: Option<PageNode>,
    nodes: Vec<DocumentNode>,
}

/// Walks a content directory and builds the content tree.
///
/// Skipped during the walk:
/// - hidden files and directories (name starts with `.`)
/// - files without the `.md` extension
/// - entries whose relative path matches an exclude pattern, and folders
///   whose contents are excluded wholesale by a `dir/**` pattern
///
/// Names that are not valid UTF-8 cannot become links; such a page or
/// folder fails the scan with [`ContentError::InvalidFileName`].
#[derive(Debug)]
pub(crate) struct Scanner {
    source_dir: PathBuf,
    exclude: Vec<Pattern>,
    /// Prefixes of `dir/**` patterns, matched against folder paths.
    folder_exclude: Vec<Pattern>,
}

impl Scanner {
    /// Create a new Scanner.
    ///
    /// # Arguments
    ///
    /// * `source_dir` - Root directory to scan
    /// * `exclude` - Glob patterns matched against `/`-separated relative paths
    pub fn new(source_dir: impl Into<PathBuf>, exclude: Vec<Pattern>) -> Self {
        let folder_exclude = exclude
            .iter()
            .filter_map(|p| p.as_str().strip_suffix("/**"))
            .filter_map(|prefix| Pattern::new(prefix).ok())
            .collect();
        Self {
            source_dir: source_dir.into(),
            exclude,
            folder_exclude,
        }
    }

    /// Scan the source directory.
    ///
    /// The caller is responsible for checking that the directory exists.
    pub fn scan(&self) -> Result<ContentTree, ContentError> {
        let listing = self.scan_directory(&self.source_dir, "")?;
        Ok(ContentTree::new(listing.index, listing.nodes))
    }

    /// Scan one directory level and recurse into subdirectories.
    fn scan_directory(
        &self,
        dir_path: &Path,
        rel_prefix: &str,
    ) -> Result<DirectoryListing, ContentError> {
        let read_dir_error = |source| ContentError::ReadDir {
            path: dir_path.to_path_buf(),
            source,
        };

        let mut entries = fs::read_dir(dir_path)
            .map_err(read_dir_error)?
            .collect::<Result<Vec<_>, _>>()
            .map_err(read_dir_error)?;
        entries.sort_by_key(fs::DirEntry::file_name);

        let mut index = None;
        let mut pages = Vec::new();
        let mut folders = Vec::new();

        for entry in entries {
            let path = entry.path();
            if entry.file_name().as_encoded_bytes().starts_with(b".") {
                continue;
            }

            let is_dir = entry
                .file_type()
                .map_err(|source| ContentError::ReadDir {
                    path: path.clone(),
                    source,
                })?
                .is_dir();
            let is_page = !is_dir && path.extension().is_some_and(|e| e == "md");
            if !is_dir && !is_page {
                continue;
            }

            let Ok(name) = entry.file_name().into_string() else {
                return Err(ContentError::InvalidFileName(path));
            };
            let rel_path = join_path(rel_prefix, &name);
            if self.is_excluded(&rel_path, is_dir) {
                tracing::debug!(path = %rel_path, "Excluded by pattern");
                continue;
            }

            if is_dir {
                let listing = self.scan_directory(&path, &rel_path)?;
                folders.push(DocumentNode::Folder(FolderNode::new(
                    rel_path,
                    listing.index,
                    listing.nodes,
                )));
            } else {
                let page = Self::read_page(&path, rel_path)?;
                if page.is_index() {
                    index = Some(page);
                } else {
                    pages.push(DocumentNode::Page(page));
                }
            }
        }

        pages.append(&mut folders);
        Ok(DirectoryListing {
            index,
            nodes: pages,
        })
    }

    /// Read a page file and extract its heading and frontmatter.
    fn read_page(path: &Path, rel_path: String) -> Result<PageNode, ContentError> {
        let content = fs::read_to_string(path).map_err(|source| ContentError::ReadFile {
            path: path.to_path_buf(),
            source,
        })?;
        let (heading, frontmatter) = parse_page(&content, &rel_path);
        Ok(PageNode::new(rel_path, heading, frontmatter))
    }

    fn is_excluded(&self, rel_path: &str, is_dir: bool) -> bool {
        self.exclude.iter().any(|p| p.matches(rel_path))
            || (is_dir && self.folder_exclude.iter().any(|p| p.matches(rel_path)))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::node::NodeKind;

    fn create_test_dir() -> tempfile::TempDir {
        tempfile::tempdir().unwrap()
    }

    fn paths(nodes: &[DocumentNode]) -> Vec<&str> {
        nodes.iter().map(DocumentNode::path).collect()
    }

    #[test]
    fn test_scan_finds_md_files() {
        let temp_dir = create_test_dir();
        fs::write(temp_dir.path().join("guide.md"), "# Guide").unwrap();
        fs::write(temp_dir.path().join("api.md"), "# API").unwrap();

        let tree = Scanner::new(temp_dir.path(), Vec::new()).scan().unwrap();

        assert_eq!(paths(tree.nodes()), vec!["api.md", "guide.md"]);
    }

    #[test]
    fn test_scan_extracts_heading() {
        let temp_dir = create_test_dir();
        fs::write(temp_dir.path().join("guide.md"), "# User Guide\n\nText.").unwrap();

        let tree = Scanner::new(temp_dir.path(), Vec::new()).scan().unwrap();

        let DocumentNode::Page(page) = &tree.nodes()[0] else {
            panic!("expected page");
        };
        assert_eq!(page.heading, Some("User Guide".to_owned()));
    }

    #[test]
    fn test_scan_orders_pages_before_folders_by_name() {
        let temp_dir = create_test_dir();
        for name in ["zeta.md", "alpha.md", "mid.md"] {
            fs::write(temp_dir.path().join(name), "text").unwrap();
        }
        fs::create_dir(temp_dir.path().join("gamma")).unwrap();
        fs::create_dir(temp_dir.path().join("beta")).unwrap();

        let tree = Scanner::new(temp_dir.path(), Vec::new()).scan().unwrap();

        assert_eq!(
            paths(tree.nodes()),
            vec!["alpha.md", "mid.md", "zeta.md", "beta", "gamma"]
        );
        let ordinals: Vec<_> = tree.nodes().iter().map(DocumentNode::ordinal).collect();
        assert_eq!(ordinals, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_scan_nested_structure() {
        let temp_dir = create_test_dir();
        fs::write(temp_dir.path().join("index.md"), "# Home").unwrap();

        let l1 = temp_dir.path().join("level1");
        fs::create_dir(&l1).unwrap();
        fs::write(l1.join("index.md"), "# L1").unwrap();
        fs::write(l1.join("guide.md"), "# L1 Guide").unwrap();

        let l2 = l1.join("level2");
        fs::create_dir(&l2).unwrap();
        fs::write(l2.join("deep.md"), "# Deep").unwrap();

        let tree = Scanner::new(temp_dir.path(), Vec::new()).scan().unwrap();

        assert_eq!(tree.root_index().unwrap().path, "index.md");
        let DocumentNode::Folder(level1) = &tree.nodes()[0] else {
            panic!("expected folder");
        };
        assert_eq!(level1.path, "level1");
        assert_eq!(level1.index.as_ref().unwrap().path, "level1/index.md");
        assert_eq!(
            paths(&level1.children),
            vec!["level1/guide.md", "level1/level2"]
        );

        let DocumentNode::Folder(level2) = &level1.children[1] else {
            panic!("expected folder");
        };
        assert_eq!(paths(&level2.children), vec!["level1/level2/deep.md"]);
        assert_eq!(tree.page_count(), 4);
    }

    #[test]
    fn test_scan_skips_hidden_entries() {
        let temp_dir = create_test_dir();
        fs::write(temp_dir.path().join(".hidden.md"), "# Hidden").unwrap();
        fs::write(temp_dir.path().join("visible.md"), "# Visible").unwrap();
        let hidden_dir = temp_dir.path().join(".vitepress");
        fs::create_dir(&hidden_dir).unwrap();
        fs::write(hidden_dir.join("config.md"), "# Config").unwrap();

        let tree = Scanner::new(temp_dir.path(), Vec::new()).scan().unwrap();

        assert_eq!(paths(tree.nodes()), vec!["visible.md"]);
    }

    #[test]
    fn test_scan_skips_non_markdown_files() {
        let temp_dir = create_test_dir();
        fs::write(temp_dir.path().join("logo.png"), "png").unwrap();
        fs::write(temp_dir.path().join("notes.txt"), "text").unwrap();
        fs::write(temp_dir.path().join("guide.md"), "# Guide").unwrap();

        let tree = Scanner::new(temp_dir.path(), Vec::new()).scan().unwrap();

        assert_eq!(paths(tree.nodes()), vec!["guide.md"]);
    }

    #[test]
    fn test_scan_keeps_empty_directories() {
        let temp_dir = create_test_dir();
        fs::create_dir(temp_dir.path().join("assets")).unwrap();

        let tree = Scanner::new(temp_dir.path(), Vec::new()).scan().unwrap();

        assert_eq!(tree.nodes().len(), 1);
        assert_eq!(tree.nodes()[0].kind(), NodeKind::Folder);
    }

    #[test]
    fn test_scan_applies_exclude_patterns() {
        let temp_dir = create_test_dir();
        fs::write(temp_dir.path().join("guide.md"), "# Guide").unwrap();
        fs::write(temp_dir.path().join("draft.md"), "# Draft").unwrap();
        let drafts = temp_dir.path().join("drafts");
        fs::create_dir(&drafts).unwrap();
        fs::write(drafts.join("wip.md"), "# WIP").unwrap();

        let exclude = vec![
            Pattern::new("draft.md").unwrap(),
            Pattern::new("drafts").unwrap(),
        ];
        let tree = Scanner::new(temp_dir.path(), exclude).scan().unwrap();

        assert_eq!(paths(tree.nodes()), vec!["guide.md"]);
    }

    #[test]
    fn test_scan_exclude_pattern_matches_nested_paths() {
        let temp_dir = create_test_dir();
        let guides = temp_dir.path().join("guides");
        fs::create_dir(&guides).unwrap();
        fs::write(guides.join("setup.md"), "# Setup").unwrap();
        fs::write(guides.join("internal.md"), "# Internal").unwrap();

        let exclude = vec![Pattern::new("guides/internal.md").unwrap()];
        let tree = Scanner::new(temp_dir.path(), exclude).scan().unwrap();

        let DocumentNode::Folder(folder) = &tree.nodes()[0] else {
            panic!("expected folder");
        };
        assert_eq!(paths(&folder.children), vec!["guides/setup.md"]);
    }

    #[test]
    fn test_scan_glob_star_star_drops_folder_itself() {
        let temp_dir = create_test_dir();
        fs::write(temp_dir.path().join("intro.md"), "# Intro").unwrap();
        let drafts = temp_dir.path().join("drafts");
        fs::create_dir(&drafts).unwrap();
        fs::write(drafts.join("wip.md"), "# WIP").unwrap();
        let nested = temp_dir.path().join("guides/drafts");
        fs::create_dir_all(&nested).unwrap();
        fs::write(nested.join("old.md"), "# Old").unwrap();

        let exclude = vec![
            Pattern::new("drafts/**").unwrap(),
            Pattern::new("*/drafts/**").unwrap(),
        ];
        let tree = Scanner::new(temp_dir.path(), exclude).scan().unwrap();

        assert_eq!(paths(tree.nodes()), vec!["intro.md", "guides"]);
        let DocumentNode::Folder(guides) = &tree.nodes()[1] else {
            panic!("expected folder");
        };
        assert!(guides.children.is_empty());
    }

    #[test]
    fn test_scan_glob_star_star_keeps_page_with_same_stem() {
        let temp_dir = create_test_dir();
        fs::write(temp_dir.path().join("drafts.md"), "# Drafts").unwrap();

        let exclude = vec![Pattern::new("drafts/**").unwrap()];
        let tree = Scanner::new(temp_dir.path(), exclude).scan().unwrap();

        assert_eq!(paths(tree.nodes()), vec!["drafts.md"]);
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_scan_non_utf8_page_name_is_error() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let temp_dir = create_test_dir();
        let bad = temp_dir.path().join(OsStr::from_bytes(b"bad\xff.md"));
        fs::write(&bad, "# Bad").unwrap();

        let result = Scanner::new(temp_dir.path(), Vec::new()).scan();

        assert!(matches!(result, Err(ContentError::InvalidFileName(ref p)) if *p == bad));
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_scan_non_utf8_asset_name_is_skipped() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let temp_dir = create_test_dir();
        fs::write(temp_dir.path().join(OsStr::from_bytes(b"logo\xff.png")), "png").unwrap();
        fs::write(temp_dir.path().join("guide.md"), "# Guide").unwrap();

        let tree = Scanner::new(temp_dir.path(), Vec::new()).scan().unwrap();

        assert_eq!(paths(tree.nodes()), vec!["guide.md"]);
    }

    #[test]
    fn test_scan_invalid_utf8_content_is_read_error() {
        let temp_dir = create_test_dir();
        let bad = temp_dir.path().join("latin1.md");
        fs::write(&bad, b"# Caf\xe9\n").unwrap();

        let result = Scanner::new(temp_dir.path(), Vec::new()).scan();

        assert!(matches!(result, Err(ContentError::ReadFile { ref path, .. }) if *path == bad));
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_scan_uppercase_index_is_ordinary_page() {
        let temp_dir = create_test_dir();
        let guides = temp_dir.path().join("g");
        fs::create_dir(&guides).unwrap();
        fs::write(guides.join("INDEX.md"), "# Upper").unwrap();
        fs::write(guides.join("index.md"), "# Lower").unwrap();
        fs::write(guides.join("a.md"), "# A").unwrap();

        let tree = Scanner::new(temp_dir.path(), Vec::new()).scan().unwrap();

        let DocumentNode::Folder(folder) = &tree.nodes()[0] else {
            panic!("expected folder");
        };
        assert_eq!(folder.index.as_ref().unwrap().path, "g/index.md");
        assert_eq!(paths(&folder.children), vec!["g/INDEX.md", "g/a.md"]);
        assert_eq!(tree.page_count(), 3);
    }

    #[test]
    fn test_scan_empty_dir() {
        let temp_dir = create_test_dir();

        let tree = Scanner::new(temp_dir.path(), Vec::new()).scan().unwrap();

        assert!(tree.is_empty());
    }

    #[test]
    fn test_scan_missing_dir_is_error() {
        let result = Scanner::new("/nonexistent", Vec::new()).scan();

        assert!(matches!(result, Err(ContentError::ReadDir { .. })));
    }

    #[test]
    fn test_scan_is_deterministic() {
        let temp_dir = create_test_dir();
        for name in ["c.md", "a.md", "b.md"] {
            fs::write(temp_dir.path().join(name), format!("# {name}")).unwrap();
        }

        let scanner = Scanner::new(temp_dir.path(), Vec::new());

        assert_eq!(scanner.scan().unwrap(), scanner.scan().unwrap());
    }
}
