//! `sidenav sidebar` command implementation.

use clap::Args;
use sidenav_sidebar::SidebarGenerator;

use super::{CommonArgs, content_source, sidebar_options, write_json};
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the sidebar command.
#[derive(Args)]
pub(crate) struct SidebarArgs {
    #[command(flatten)]
    pub common: CommonArgs,
}

impl SidebarArgs {
    /// Execute the sidebar command.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let config = self.common.load_config()?;

        let source = content_source(&config)?;
        let sidebar = SidebarGenerator::new(sidebar_options(&config)).generate_from(&source)?;

        write_json(&sidebar, self.common.output.as_deref(), &output)
    }
}
