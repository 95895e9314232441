//! Markdown inspection for scanning.
//!
//! Only two things are read from a page: the YAML frontmatter block and the
//! first level-one heading. Both come out of a single `pulldown-cmark` pass,
//! so headings inside fenced code blocks are never mistaken for titles.

use pulldown_cmark::{Event, HeadingLevel, MetadataBlockKind, Options, Parser, Tag, TagEnd};
use serde::Deserialize;

/// Fields read from a page's YAML frontmatter.
///
/// Unknown keys are ignored.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Frontmatter {
    /// Explicit page title.
    pub title: Option<String>,
    /// Sort key among siblings (ascending).
    pub order: Option<i64>,
}

/// Extract heading and frontmatter from page content.
///
/// Returns the trimmed text of the first non-empty level-one heading (ATX
/// `# Title` or setext `Title\n=====`) with inline markup flattened to text.
/// Malformed frontmatter is logged and treated as absent; `path` is only
/// used for that log message.
pub fn parse_page(content: &str, path: &str) -> (Option<String>, Frontmatter) {
    let mut frontmatter = Frontmatter::default();
    let mut meta = String::new();
    let mut in_meta = false;
    let mut heading = String::new();
    let mut in_h1 = false;

    for event in Parser::new_ext(content, Options::ENABLE_YAML_STYLE_METADATA_BLOCKS) {
        match event {
            Event::Start(Tag::MetadataBlock(MetadataBlockKind::YamlStyle)) => in_meta = true,
            Event::End(TagEnd::MetadataBlock(_)) => {
                in_meta = false;
                frontmatter = parse_frontmatter(&meta, path);
            }
            Event::Start(Tag::Heading {
                level: HeadingLevel::H1,
                ..
            }) => in_h1 = true,
            Event::End(TagEnd::Heading(HeadingLevel::H1)) => {
                let text = heading.trim();
                if !text.is_empty() {
                    return (Some(text.to_owned()), frontmatter);
                }
                in_h1 = false;
                heading.clear();
            }
            Event::Text(text) if in_meta => meta.push_str(&text),
            Event::Text(text) | Event::Code(text) if in_h1 => heading.push_str(&text),
            Event::SoftBreak | Event::HardBreak if in_h1 => heading.push(' '),
            _ => {}
        }
    }

    (None, frontmatter)
}

/// Extract the first level-one heading from markdown content.
pub fn extract_heading(content: &str) -> Option<String> {
    parse_page(content, "").0
}

/// Parse a frontmatter block, falling back to defaults on invalid YAML.
fn parse_frontmatter(yaml: &str, path: &str) -> Frontmatter {
    let trimmed = yaml.trim();
    if trimmed.is_empty() {
        return Frontmatter::default();
    }
    serde_yaml::from_str(trimmed)
        .inspect_err(|e| {
            tracing::warn!(path = %path, error = %e, "Failed to parse frontmatter, ignoring");
        })
        .unwrap_or_default()
}
