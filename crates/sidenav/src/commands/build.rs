//! `sidenav build` command implementation.

use std::sync::Arc;

use clap::Args;
use sidenav_config::Config;
use sidenav_site::{Footer, NavLink, SiteBuilder, SiteMetadata, SocialLink};

use super::{CommonArgs, content_source, sidebar_options, write_json};
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the build command.
#[derive(Args)]
pub(crate) struct BuildArgs {
    #[command(flatten)]
    pub common: CommonArgs,
}

impl BuildArgs {
    /// Execute the build command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration fails, the sidebar cannot be
    /// generated, or the output cannot be written.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let config = self.common.load_config()?;

        output.info(&format!(
            "Source: {}",
            config.sidebar.source_dir.display()
        ));

        let source = Arc::new(content_source(&config)?);
        let site = SiteBuilder::new(source, site_metadata(&config))
            .with_sidebar_options(sidebar_options(&config))
            .build()?;

        write_json(&site, self.common.output.as_deref(), &output)
    }
}

/// Declarative site fields from configuration.
fn site_metadata(config: &Config) -> SiteMetadata {
    SiteMetadata {
        title: config.site.title.clone(),
        description: config.site.description.clone(),
        nav: config
            .nav
            .iter()
            .map(|nav| NavLink::new(&nav.text, &nav.link))
            .collect(),
        social_links: config
            .social_links
            .iter()
            .map(|social| SocialLink::new(&social.platform, &social.url))
            .collect(),
        footer: Footer {
            message: config.footer.message.clone(),
            copyright: config.footer.copyright.clone(),
        },
    }
}
