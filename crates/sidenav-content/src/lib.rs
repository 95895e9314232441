//! Content tree discovery for sidenav.
//!
//! This crate turns a directory of markdown documents into a [`ContentTree`]:
//! an ordered tree of [`DocumentNode`]s that the sidebar generator consumes.
//!
//! The crate provides:
//! - [`ContentSource`] trait with a single `scan()` method
//! - [`FsContentSource`] reading a content directory from disk
//! - [`MockContentSource`] for tests (behind the `mock` feature flag)
//!
//! Scanning reads every page once to pick up its first-level heading and
//! its YAML frontmatter. Title policy is not applied here.
//!
//! # Example
//!
//! ```no_run
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use std::path::PathBuf;
//! use sidenav_content::{ContentSource, FsContentSource};
//!
//! let source = FsContentSource::new(PathBuf::from("docs"));
//! let tree = source.scan()?;
//! for node in tree.nodes() {
//!     println!("{}", node.path());
//! }
//! # Ok(())
//! # }
//! ```

mod fs;
mod markdown;
#[cfg(feature = "mock")]
mod mock;
mod node;
mod scanner;
mod source;

pub use fs::FsContentSource;
pub use markdown::{Frontmatter, extract_heading, parse_page};
#[cfg(feature = "mock")]
pub use mock::MockContentSource;
pub use node::{ContentTree, DocumentNode, FolderNode, NodeKind, PageNode};
pub use source::{ContentError, ContentSource};
