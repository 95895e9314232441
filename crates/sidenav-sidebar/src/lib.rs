//! Sidebar generation for sidenav.
//!
//! This crate provides:
//! - [`SidebarGenerator`]: turns a [`ContentTree`](sidenav_content::ContentTree)
//!   into an ordered tree of [`SidebarEntry`]
//! - [`SidebarOptions`]: title-inference, capitalization, and folder policies
//! - [`SidebarError`]: the two failure kinds of a build
//!
//! # Quick Start
//!
//! ```no_run
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use std::path::PathBuf;
//! use sidenav_content::FsContentSource;
//! use sidenav_sidebar::{SidebarGenerator, SidebarOptions};
//!
//! let source = FsContentSource::new(PathBuf::from("docs"));
//! let options = SidebarOptions {
//!     use_title_from_heading: true,
//!     capitalize_first: true,
//!     ..SidebarOptions::default()
//! };
//! let sidebar = SidebarGenerator::new(options).generate_from(&source)?;
//! # Ok(())
//! # }
//! ```

mod entry;
mod error;
mod generator;
mod options;
mod title;

pub use entry::SidebarEntry;
pub use error::SidebarError;
pub use generator::{SidebarGenerator, generate_sidebar};
pub use options::SidebarOptions;
pub use title::{capitalize_first, title_from_filename};
