//! Site configuration model.

use serde::Serialize;
use sidenav_sidebar::SidebarEntry;

/// Top-level navigation link.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct NavLink {
    /// Label shown in the navigation bar.
    pub text: String,
    /// Target URL path or absolute URL.
    pub link: String,
}

impl NavLink {
    /// Create a navigation link.
    #[must_use]
    pub fn new(text: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            link: link.into(),
        }
    }
}

/// Link to an external profile (e.g., "github").
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct SocialLink {
    /// Platform identifier the theme uses to pick an icon.
    pub platform: String,
    /// Profile URL.
    pub url: String,
}

impl SocialLink {
    /// Create a social link.
    #[must_use]
    pub fn new(platform: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            platform: platform.into(),
            url: url.into(),
        }
    }
}

/// Footer text.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Footer {
    pub message: String,
    pub copyright: String,
}

/// Declarative part of the site configuration.
///
/// Everything except the sidebar, which is derived from content.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SiteMetadata {
    /// Site title.
    pub title: String,
    /// Site description.
    pub description: String,
    /// Top-level navigation links in display order.
    pub nav: Vec<NavLink>,
    /// Social links in display order.
    pub social_links: Vec<SocialLink>,
    /// Footer text.
    pub footer: Footer,
}

/// Complete configuration handed to the rendering framework.
///
/// Built once per build by [`assemble`](crate::assemble) or
/// [`SiteBuilder`](crate::SiteBuilder) and read-only afterwards.
///
/// Serializes with camelCase keys:
///
/// ```json
/// {
///   "title": "My Docs",
///   "description": "...",
///   "nav": [{"text": "Guide", "link": "/guide/"}],
///   "sidebar": [...],
///   "socialLinks": [{"platform": "github", "url": "https://..."}],
///   "footer": {"message": "...", "copyright": "..."}
/// }
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteConfig {
    title: String,
    description: String,
    nav: Vec<NavLink>,
    sidebar: Vec<SidebarEntry>,
    social_links: Vec<SocialLink>,
    footer: Footer,
}

impl SiteConfig {
    pub(crate) fn new(metadata: SiteMetadata, sidebar: Vec<SidebarEntry>) -> Self {
        let SiteMetadata {
            title,
            description,
            nav,
            social_links,
            footer,
        } = metadata;
        Self {
            title,
            description,
            nav,
            sidebar,
            social_links,
            footer,
        }
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[must_use]
    pub fn nav(&self) -> &[NavLink] {
        &self.nav
    }

    /// Generated sidebar.
    #[must_use]
    pub fn sidebar(&self) -> &[SidebarEntry] {
        &self.sidebar
    }

    #[must_use]
    pub fn social_links(&self) -> &[SocialLink] {
        &self.social_links
    }

    #[must_use]
    pub fn footer(&self) -> &Footer {
        &self.footer
    }
}
