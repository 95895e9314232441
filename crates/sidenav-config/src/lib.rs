//! Configuration management for sidenav.
//!
//! Parses `sidenav.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ## Environment Variable Expansion
//!
//! String configuration values support environment variable expansion:
//!
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default
//!
//! Expanded fields:
//! - `site.title`, `site.description`
//! - `nav[].text`, `nav[].link`
//! - `social_links[].url`
//! - `footer.message`, `footer.copyright`
//! - `sidebar.source_dir`

mod expand;

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override content source directory.
    pub source_dir: Option<PathBuf>,
    /// Override heading-based page titles.
    pub use_title_from_heading: Option<bool>,
    /// Override first-letter capitalization.
    pub capitalize_first: Option<bool>,
}

/// Configuration filename to search for.
pub const CONFIG_FILENAME: &str = "sidenav.toml";

/// Application configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Site identity.
    pub site: SiteSection,
    /// Top-level navigation links, in file order.
    pub nav: Vec<NavLinkConfig>,
    /// Social links, in file order.
    pub social_links: Vec<SocialLinkConfig>,
    /// Footer text.
    pub footer: FooterConfig,
    /// Sidebar generation settings.
    pub sidebar: SidebarConfig,

    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self::default_with_base(Path::new("."))
    }
}

/// `[site]` section.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct SiteSection {
    /// Site title.
    pub title: String,
    /// Site description.
    pub description: String,
}

impl Default for SiteSection {
    fn default() -> Self {
        Self {
            title: "Documentation".to_owned(),
            description: String::new(),
        }
    }
}

/// One `[[nav]]` entry.
#[derive(Debug, Deserialize)]
pub struct NavLinkConfig {
    /// Link label.
    pub text: String,
    /// Link target.
    pub link: String,
}

/// One `[[social_links]]` entry.
#[derive(Debug, Deserialize)]
pub struct SocialLinkConfig {
    /// Platform identifier (e.g., "github").
    pub platform: String,
    /// Profile URL.
    pub url: String,
}

/// `[footer]` section.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct FooterConfig {
    pub message: String,
    pub copyright: String,
}

/// `[sidebar]` section.
///
/// `source_dir` is relative to the config file until loading resolves it.
#[derive(Debug, Deserialize)]
#[serde(default)]
#[allow(clippy::struct_excessive_bools)]
pub struct SidebarConfig {
    /// Content source directory.
    pub source_dir: PathBuf,
    /// Take page titles from the first level-one heading.
    pub use_title_from_heading: bool,
    /// Upper-case the first character of every title.
    pub capitalize_first: bool,
    /// Take page titles from frontmatter `title`.
    pub use_title_from_frontmatter: bool,
    /// Take folder titles from the folder's `index.md`.
    pub use_folder_title_from_index_file: bool,
    /// Link folders to their `index.md`.
    pub use_folder_link_from_index_file: bool,
    /// List folder `index.md` files as child pages.
    pub include_folder_index_file: bool,
    /// List the root `index.md` as the first entry.
    pub include_root_index_file: bool,
    /// Keep folders without pages as empty groups.
    pub include_empty_folder: bool,
    /// Sort siblings by frontmatter `order`.
    pub sort_by_frontmatter_order: bool,
    /// Initial collapse state of folder groups.
    pub collapsed: Option<bool>,
    /// Glob patterns of content paths to skip.
    pub exclude: Vec<String>,
}

impl Default for SidebarConfig {
    fn default() -> Self {
        Self {
            source_dir: PathBuf::from("docs"),
            use_title_from_heading: false,
            capitalize_first: false,
            use_title_from_frontmatter: false,
            use_folder_title_from_index_file: false,
            use_folder_link_from_index_file: false,
            include_folder_index_file: false,
            include_root_index_file: false,
            include_empty_folder: false,
            sort_by_frontmatter_order: false,
            collapsed: None,
            exclude: Vec::new(),
        }
    }
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`site.title`").
        field: String,
        /// Error message (e.g., "${`DOCS_TITLE`} not set").
        message: String,
    },
}

/// Require a string field to be non-empty.
fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.trim().is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

/// Require a URL field to use http:// or https:// scheme.
fn require_http_url(url: &str, field: &str) -> Result<(), ConfigError> {
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(ConfigError::Validation(format!(
            "{field} must start with http:// or https://"
        )));
    }
    Ok(())
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `sidenav.toml` in current directory and parents.
    ///
    /// CLI settings are applied after loading and path resolution, allowing CLI
    /// arguments to take precedence over config file values.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist, or if reading,
    /// parsing, expansion, or validation fails.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)?
        } else {
            Self::default_with_cwd()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
        }

        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(source_dir) = &settings.source_dir {
            self.sidebar.source_dir.clone_from(source_dir);
        }
        if let Some(use_title_from_heading) = settings.use_title_from_heading {
            self.sidebar.use_title_from_heading = use_title_from_heading;
        }
        if let Some(capitalize_first) = settings.capitalize_first {
            self.sidebar.capitalize_first = capitalize_first;
        }
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        Self::discover_from(&std::env::current_dir().ok()?)
    }

    /// Search for config file in `start` and its parents.
    fn discover_from(start: &Path) -> Option<PathBuf> {
        start
            .ancestors()
            .map(|dir| dir.join(CONFIG_FILENAME))
            .find(|candidate| candidate.is_file())
    }

    /// Create default config with paths relative to current working directory.
    fn default_with_cwd() -> Self {
        let cwd = std::env::current_dir().unwrap_or_default();
        Self::default_with_base(&cwd)
    }

    /// Create default config with paths relative to given base directory.
    fn default_with_base(base: &Path) -> Self {
        Self {
            site: SiteSection::default(),
            nav: Vec::new(),
            social_links: Vec::new(),
            footer: FooterConfig::default(),
            sidebar: SidebarConfig {
                source_dir: base.join("docs"),
                ..SidebarConfig::default()
            },
            config_path: None,
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        // Expand environment variables before path resolution
        config.expand_env_vars()?;

        let config_dir = path.parent().unwrap_or(Path::new("."));
        config.resolve_paths(config_dir);
        config.config_path = Some(path.to_path_buf());

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// Called automatically after loading from file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_non_empty(&self.site.title, "site.title")?;

        for (i, nav) in self.nav.iter().enumerate() {
            require_non_empty(&nav.text, &format!("nav[{i}].text"))?;
            require_non_empty(&nav.link, &format!("nav[{i}].link"))?;
        }

        for (i, social) in self.social_links.iter().enumerate() {
            require_non_empty(&social.platform, &format!("social_links[{i}].platform"))?;
            require_http_url(&social.url, &format!("social_links[{i}].url"))?;
        }

        Ok(())
    }

    /// Expand environment variable references in configuration strings.
    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        expand::expand_field("site.title", &mut self.site.title)?;
        expand::expand_field("site.description", &mut self.site.description)?;

        for (i, nav) in self.nav.iter_mut().enumerate() {
            expand::expand_field(&format!("nav[{i}].text"), &mut nav.text)?;
            expand::expand_field(&format!("nav[{i}].link"), &mut nav.link)?;
        }

        for (i, social) in self.social_links.iter_mut().enumerate() {
            expand::expand_field(&format!("social_links[{i}].url"), &mut social.url)?;
        }

        expand::expand_field("footer.message", &mut self.footer.message)?;
        expand::expand_field("footer.copyright", &mut self.footer.copyright)?;

        if let Some(source_dir) = self.sidebar.source_dir.to_str() {
            let mut source_dir = source_dir.to_owned();
            expand::expand_field("sidebar.source_dir", &mut source_dir)?;
            self.sidebar.source_dir = PathBuf::from(source_dir);
        }

        Ok(())
    }

    /// Resolve relative paths against the config directory.
    fn resolve_paths(&mut self, config_dir: &Path) {
        self.sidebar.source_dir = config_dir.join(&self.sidebar.source_dir);
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const FULL_CONFIG: &str = r#"
[site]
title = "docker-tui"
description = "Terminal UI for Docker"

[[nav]]
text = "Home"
link = "/"

[[nav]]
text = "Guide"
link = "/guides/setup"

[[social_links]]
platform = "github"
url = "https://github.com/org/docker-tui"

[footer]
message = "Released under the MIT License."
copyright = "Copyright © 2024"

[sidebar]
source_dir = "content"
use_title_from_heading = true
capitalize_first = true
collapsed = false
exclude = ["drafts/**"]
"#;

    #[test]
    fn test_default_config() {
        let config = Config::default_with_base(Path::new("/test"));
        assert_eq!(config.site.title, "Documentation");
        assert!(config.nav.is_empty());
        assert!(config.social_links.is_empty());
        assert_eq!(config.sidebar.source_dir, PathBuf::from("/test/docs"));
        assert!(!config.sidebar.use_title_from_heading);
        assert!(!config.sidebar.include_empty_folder);
        assert!(config.config_path.is_none());
    }

    #[test]
    fn test_parse_minimal_config() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.site.title, "Documentation");
        assert_eq!(config.sidebar.source_dir, PathBuf::from("docs"));
    }

    #[test]
    fn test_parse_full_config() {
        let config: Config = toml::from_str(FULL_CONFIG).unwrap();

        assert_eq!(config.site.title, "docker-tui");
        assert_eq!(config.site.description, "Terminal UI for Docker");
        assert_eq!(config.nav.len(), 2);
        assert_eq!(config.nav[1].text, "Guide");
        assert_eq!(config.nav[1].link, "/guides/setup");
        assert_eq!(config.social_links[0].platform, "github");
        assert_eq!(config.footer.copyright, "Copyright © 2024");
        assert_eq!(config.sidebar.source_dir, PathBuf::from("content"));
        assert!(config.sidebar.use_title_from_heading);
        assert!(config.sidebar.capitalize_first);
        assert_eq!(config.sidebar.collapsed, Some(false));
        assert_eq!(config.sidebar.exclude, vec!["drafts/**".to_owned()]);
    }

    #[test]
    fn test_parse_nav_requires_link() {
        let toml = r#"
[[nav]]
text = "Guide"
"#;
        let result: Result<Config, _> = toml::from_str(toml);
        assert!(result.is_err());
    }

    #[test]
    fn test_resolve_paths() {
        let mut config: Config = toml::from_str(FULL_CONFIG).unwrap();
        config.resolve_paths(Path::new("/project"));

        assert_eq!(config.sidebar.source_dir, PathBuf::from("/project/content"));
    }

    #[test]
    fn test_resolve_paths_keeps_absolute_source_dir() {
        let mut config: Config = toml::from_str("[sidebar]\nsource_dir = \"/srv/docs\"").unwrap();
        config.resolve_paths(Path::new("/project"));

        assert_eq!(config.sidebar.source_dir, PathBuf::from("/srv/docs"));
    }

    #[test]
    fn test_load_from_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join(CONFIG_FILENAME);
        std::fs::write(&path, FULL_CONFIG).unwrap();

        let config = Config::load(Some(&path), None).unwrap();

        assert_eq!(config.config_path, Some(path));
        assert_eq!(config.sidebar.source_dir, temp_dir.path().join("content"));
    }

    #[test]
    fn test_load_explicit_path_not_found() {
        let err = Config::load(Some(Path::new("/nonexistent/sidenav.toml")), None).unwrap_err();

        assert!(matches!(err, ConfigError::NotFound(_)));
    }

    #[test]
    fn test_load_parse_error() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join(CONFIG_FILENAME);
        std::fs::write(&path, "[site\ntitle = ").unwrap();

        let err = Config::load(Some(&path), None).unwrap_err();

        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_load_validates() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join(CONFIG_FILENAME);
        std::fs::write(&path, "[site]\ntitle = \"\"\n").unwrap();

        let err = Config::load(Some(&path), None).unwrap_err();

        assert!(matches!(err, ConfigError::Validation(_)));
        assert!(err.to_string().contains("site.title"));
    }

    #[test]
    fn test_load_applies_cli_settings_after_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join(CONFIG_FILENAME);
        std::fs::write(&path, FULL_CONFIG).unwrap();
        let settings = CliSettings {
            source_dir: Some(PathBuf::from("/override/docs")),
            capitalize_first: Some(false),
            ..CliSettings::default()
        };

        let config = Config::load(Some(&path), Some(&settings)).unwrap();

        assert_eq!(config.sidebar.source_dir, PathBuf::from("/override/docs"));
        assert!(!config.sidebar.capitalize_first);
        assert!(config.sidebar.use_title_from_heading); // Unchanged
    }

    #[test]
    fn test_discover_from_parent_directory() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join(CONFIG_FILENAME);
        std::fs::write(&path, "").unwrap();
        let nested = temp_dir.path().join("a/b");
        std::fs::create_dir_all(&nested).unwrap();

        assert_eq!(Config::discover_from(&nested), Some(path));
    }

    #[test]
    fn test_discover_ignores_directory_named_like_config() {
        let temp_dir = tempfile::tempdir().unwrap();
        let nested = temp_dir.path().join(CONFIG_FILENAME);
        std::fs::create_dir(&nested).unwrap();

        assert_eq!(Config::discover_from(&nested), None);
    }

    #[test]
    fn test_apply_cli_settings_source_dir() {
        let mut config = Config::default_with_base(Path::new("/test"));
        let overrides = CliSettings {
            source_dir: Some(PathBuf::from("/custom/docs")),
            ..Default::default()
        };

        config.apply_cli_settings(&overrides);

        assert_eq!(config.sidebar.source_dir, PathBuf::from("/custom/docs"));
        assert!(!config.sidebar.use_title_from_heading); // Unchanged
    }

    #[test]
    fn test_apply_cli_settings_flags() {
        let mut config = Config::default_with_base(Path::new("/test"));
        let overrides = CliSettings {
            use_title_from_heading: Some(true),
            capitalize_first: Some(true),
            ..Default::default()
        };

        config.apply_cli_settings(&overrides);

        assert!(config.sidebar.use_title_from_heading);
        assert!(config.sidebar.capitalize_first);
        assert_eq!(config.sidebar.source_dir, PathBuf::from("/test/docs"));
    }

    #[test]
    fn test_apply_cli_settings_empty() {
        let mut config = Config::default_with_base(Path::new("/test"));

        config.apply_cli_settings(&CliSettings::default());

        assert_eq!(config.sidebar.source_dir, PathBuf::from("/test/docs"));
        assert!(!config.sidebar.capitalize_first);
    }

    #[test]
    fn test_expand_env_vars() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::set_var("SIDENAV_TEST_CONFIG_ORG", "acme");
            std::env::set_var("SIDENAV_TEST_CONFIG_DOCS", "handbook");
        }

        let toml = r#"
[site]
title = "${SIDENAV_TEST_CONFIG_ORG} docs"

[[social_links]]
platform = "github"
url = "https://github.com/${SIDENAV_TEST_CONFIG_ORG}"

[footer]
copyright = "${SIDENAV_TEST_CONFIG_YEAR:-2024}"

[sidebar]
source_dir = "${SIDENAV_TEST_CONFIG_DOCS}"
"#;
        let mut config: Config = toml::from_str(toml).unwrap();
        config.expand_env_vars().unwrap();

        assert_eq!(config.site.title, "acme docs");
        assert_eq!(config.social_links[0].url, "https://github.com/acme");
        assert_eq!(config.footer.copyright, "2024");
        assert_eq!(config.sidebar.source_dir, PathBuf::from("handbook"));

        unsafe {
            std::env::remove_var("SIDENAV_TEST_CONFIG_ORG");
            std::env::remove_var("SIDENAV_TEST_CONFIG_DOCS");
        }
    }

    #[test]
    fn test_expand_env_vars_missing_required_var() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::remove_var("SIDENAV_TEST_CONFIG_MISSING");
        }

        let toml = r#"
[[nav]]
text = "Guide"
link = "${SIDENAV_TEST_CONFIG_MISSING}"
"#;
        let mut config: Config = toml::from_str(toml).unwrap();
        let err = config.expand_env_vars().unwrap_err();

        assert!(matches!(err, ConfigError::EnvVar { ref field, .. } if field == "nav[0].link"));
    }

    #[test]
    fn test_validate_default_config_passes() {
        let config = Config::default_with_base(Path::new("/test"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_full_config_passes() {
        let config: Config = toml::from_str(FULL_CONFIG).unwrap();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_empty_title() {
        let mut config = Config::default_with_base(Path::new("/test"));
        config.site.title = "  ".to_owned();

        let err = config.validate().unwrap_err();

        assert_eq!(err.to_string(), "Configuration error: site.title cannot be empty");
    }

    #[test]
    fn test_validate_empty_nav_link() {
        let mut config = Config::default_with_base(Path::new("/test"));
        config.nav.push(NavLinkConfig {
            text: "Guide".to_owned(),
            link: String::new(),
        });

        let err = config.validate().unwrap_err();

        assert!(err.to_string().contains("nav[0].link"));
    }

    #[test]
    fn test_validate_social_url_scheme() {
        let mut config = Config::default_with_base(Path::new("/test"));
        config.social_links.push(SocialLinkConfig {
            platform: "github".to_owned(),
            url: "github.com/org".to_owned(),
        });

        let err = config.validate().unwrap_err();

        assert_eq!(
            err.to_string(),
            "Configuration error: social_links[0].url must start with http:// or https://"
        );
    }

    #[test]
    fn test_validate_social_url_http_allowed() {
        let mut config = Config::default_with_base(Path::new("/test"));
        config.social_links.push(SocialLinkConfig {
            platform: "mastodon".to_owned(),
            url: "http://social.example.com/@docs".to_owned(),
        });

        assert!(config.validate().is_ok());
    }
}
