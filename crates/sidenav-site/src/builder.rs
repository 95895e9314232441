//! Site configuration assembly.
//!
//! [`assemble`] merges declarative metadata with an already generated
//! sidebar. [`SiteBuilder`] runs the whole build: scan the content source,
//! generate the sidebar, assemble. A failed generation yields no
//! [`SiteConfig`] at all.

use std::sync::Arc;

use sidenav_content::ContentSource;
use sidenav_sidebar::{SidebarEntry, SidebarError, SidebarGenerator, SidebarOptions};

use crate::site::{SiteConfig, SiteMetadata};

/// Merge static metadata and a generated sidebar into a [`SiteConfig`].
#[must_use]
pub fn assemble(metadata: SiteMetadata, sidebar: Vec<SidebarEntry>) -> SiteConfig {
    SiteConfig::new(metadata, sidebar)
}

/// Builds [`SiteConfig`] values from a content source.
///
/// # Example
///
/// ```no_run
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// use std::path::PathBuf;
/// use std::sync::Arc;
/// use sidenav_content::FsContentSource;
/// use sidenav_sidebar::SidebarOptions;
/// use sidenav_site::{SiteBuilder, SiteMetadata};
///
/// let source = Arc::new(FsContentSource::new(PathBuf::from("docs")));
/// let metadata = SiteMetadata {
///     title: "My Docs".to_owned(),
///     ..SiteMetadata::default()
/// };
/// let site = SiteBuilder::new(source, metadata)
///     .with_sidebar_options(SidebarOptions {
///         use_title_from_heading: true,
///         ..SidebarOptions::default()
///     })
///     .build()?;
/// # Ok(())
/// # }
/// ```
pub struct SiteBuilder {
    source: Arc<dyn ContentSource>,
    metadata: SiteMetadata,
    generator: SidebarGenerator,
}

impl SiteBuilder {
    /// Create a builder with default sidebar options.
    #[must_use]
    pub fn new(source: Arc<dyn ContentSource>, metadata: SiteMetadata) -> Self {
        Self {
            source,
            metadata,
            generator: SidebarGenerator::default(),
        }
    }

    /// Set the sidebar options.
    #[must_use]
    pub fn with_sidebar_options(mut self, options: SidebarOptions) -> Self {
        self.generator = SidebarGenerator::new(options);
        self
    }

    /// Declarative metadata the builder assembles with.
    #[must_use]
    pub fn metadata(&self) -> &SiteMetadata {
        &self.metadata
    }

    /// Run one build.
    ///
    /// # Errors
    ///
    /// Propagates [`SidebarError`] from sidebar generation unchanged.
    pub fn build(&self) -> Result<SiteConfig, SidebarError> {
        let sidebar = self
            .generator
            .generate_from(self.source.as_ref())
            .inspect_err(|e| tracing::warn!(error = %e, "Sidebar generation failed"))?;

        tracing::info!(
            title = %self.metadata.title,
            entries = sidebar.len(),
            "Assembled site configuration"
        );
        Ok(assemble(self.metadata.clone(), sidebar))
    }
}
