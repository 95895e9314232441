//! Site configuration assembly for sidenav.
//!
//! This crate provides:
//! - [`SiteConfig`]: the complete configuration object handed to the
//!   rendering framework
//! - [`SiteBuilder`]: scan, generate the sidebar, and assemble in one call
//! - [`assemble`]: pure merge of [`SiteMetadata`] and a generated sidebar

mod builder;
mod site;

pub use builder::{SiteBuilder, assemble};
pub use site::{Footer, NavLink, SiteConfig, SiteMetadata, SocialLink};
