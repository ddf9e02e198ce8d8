//! Built-in minimal theme using the Tera template engine
//!
//! All templates are embedded directly in the binary, so a site needs
//! no theme directory on disk.

use anyhow::Result;
use serde::Serialize;
use std::collections::HashMap;
use tera::{Context, Tera};

use crate::content::frontmatter::parse_date_string;

/// Stylesheet for the embedded theme
pub const STYLE_CSS: &str = include_str!("minimal/style.css");

/// Template renderer with the embedded minimal theme
pub struct TemplateRenderer {
    tera: Tera,
}

impl TemplateRenderer {
    /// Create a new renderer with all templates loaded
    pub fn new() -> Result<Self> {
        let mut tera = Tera::default();

        // Disable autoescaping: post bodies arrive as rendered HTML
        tera.autoescape_on(vec![]);

        tera.add_raw_templates(vec![
            ("layout.html", include_str!("minimal/layout.html")),
            ("index.html", include_str!("minimal/index.html")),
            ("post.html", include_str!("minimal/post.html")),
            ("tags.html", include_str!("minimal/tags.html")),
            ("tag.html", include_str!("minimal/tag.html")),
            ("404.html", include_str!("minimal/404.html")),
            (
                "partials/post_list.html",
                include_str!("minimal/partials/post_list.html"),
            ),
        ])?;

        tera.register_filter("display_date", display_date_filter);

        Ok(Self { tera })
    }

    /// Render a template with given context
    pub fn render(&self, template_name: &str, context: &Context) -> Result<String> {
        Ok(self.tera.render(template_name, context)?)
    }
}

/// Tera filter: format a date string for display, e.g. "February 11, 2026".
/// Values that do not parse as a date pass through unchanged.
fn display_date_filter(
    value: &tera::Value,
    _args: &HashMap<String, tera::Value>,
) -> tera::Result<tera::Value> {
    let s = tera::try_get_value!("display_date", "value", String, value);
    if let Some(date) = parse_date_string(&s) {
        return Ok(tera::Value::String(date.format("%B %-d, %Y").to_string()));
    }
    Ok(tera::Value::String(s))
}

// Data structures for template context

/// Listing view of a post, with resolved URLs
#[derive(Debug, Clone, Serialize)]
pub struct PostView {
    pub slug: String,
    pub title: String,
    pub date: String,
    pub excerpt: String,
    pub tags: Vec<TagRef>,
    pub author: String,
    pub reading_time: String,
    pub url: String,
}

/// A tag name with its page URL
#[derive(Debug, Clone, Serialize)]
pub struct TagRef {
    pub name: String,
    pub url: String,
}

/// A tag with its post count, for the tag index
#[derive(Debug, Clone, Serialize)]
pub struct TagView {
    pub name: String,
    pub url: String,
    pub count: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_templates_parse() {
        TemplateRenderer::new().unwrap();
    }

    #[test]
    fn test_display_date_filter() {
        let value = tera::Value::String("2026-02-11".to_string());
        let out = display_date_filter(&value, &HashMap::new()).unwrap();
        assert_eq!(out, tera::Value::String("February 11, 2026".to_string()));
    }

    #[test]
    fn test_display_date_filter_passthrough() {
        let value = tera::Value::String("sometime soon".to_string());
        let out = display_date_filter(&value, &HashMap::new()).unwrap();
        assert_eq!(out, tera::Value::String("sometime soon".to_string()));
    }
}
