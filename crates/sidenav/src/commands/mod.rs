//! CLI command implementations.

mod build;
mod sidebar;

use std::path::{Path, PathBuf};

use clap::Args;
use serde::Serialize;
use sidenav_config::{CliSettings, Config};
use sidenav_content::FsContentSource;
use sidenav_sidebar::{SidebarError, SidebarOptions};

use crate::error::CliError;
use crate::output::Output;

pub(crate) use build::BuildArgs;
pub(crate) use sidebar::SidebarArgs;

/// Arguments shared by every command.
#[derive(Args)]
pub(crate) struct CommonArgs {
    /// Path to configuration file (default: auto-discover sidenav.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Content source directory (overrides config).
    #[arg(short, long)]
    source_dir: Option<PathBuf>,

    /// Write JSON to this file instead of stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Take page titles from the first level-one heading (overrides config).
    #[arg(long)]
    title_from_heading: Option<bool>,

    /// Upper-case the first letter of every title (overrides config).
    #[arg(long)]
    capitalize_first: Option<bool>,

    /// Enable verbose output.
    #[arg(short, long)]
    pub verbose: bool,
}

impl CommonArgs {
    /// Load configuration with CLI overrides applied.
    fn load_config(&self) -> Result<Config, CliError> {
        let cli_settings = CliSettings {
            source_dir: self.source_dir.clone(),
            use_title_from_heading: self.title_from_heading,
            capitalize_first: self.capitalize_first,
        };
        Ok(Config::load(self.config.as_deref(), Some(&cli_settings))?)
    }
}

/// Sidebar options from the `[sidebar]` section.
fn sidebar_options(config: &Config) -> SidebarOptions {
    let sidebar = &config.sidebar;
    SidebarOptions {
        use_title_from_heading: sidebar.use_title_from_heading,
        capitalize_first: sidebar.capitalize_first,
        use_title_from_frontmatter: sidebar.use_title_from_frontmatter,
        use_folder_title_from_index_file: sidebar.use_folder_title_from_index_file,
        use_folder_link_from_index_file: sidebar.use_folder_link_from_index_file,
        include_folder_index_file: sidebar.include_folder_index_file,
        include_root_index_file: sidebar.include_root_index_file,
        include_empty_folder: sidebar.include_empty_folder,
        sort_by_frontmatter_order: sidebar.sort_by_frontmatter_order,
        collapsed: sidebar.collapsed,
    }
}

/// Content source for the configured directory and exclude patterns.
fn content_source(config: &Config) -> Result<FsContentSource, CliError> {
    FsContentSource::with_exclude(config.sidebar.source_dir.clone(), &config.sidebar.exclude)
        .map_err(|e| CliError::Sidebar(SidebarError::from(e)))
}

/// Serialize `value` as pretty JSON to `path`, or to stdout.
fn write_json<T: Serialize>(
    value: &T,
    path: Option<&Path>,
    output: &Output,
) -> Result<(), CliError> {
    let json = serde_json::to_string_pretty(value)?;
    match path {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(path, format!("{json}\n"))?;
            output.success(&format!("Wrote {}", path.display()));
        }
        None => output.data(&json)?,
    }
    Ok(())
}
