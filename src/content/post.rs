//! Post documents

use serde::Serialize;

use crate::content::frontmatter::FrontMatter;
use crate::content::reading_time;

/// A fully loaded post document
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Post {
    pub slug: String,
    pub title: String,
    pub date: String,
    pub excerpt: String,
    pub content: String,
    pub tags: Vec<String>,
    pub author: String,
    pub reading_time: String,
}

/// Listing projection of a post, without the body text
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PostMeta {
    pub slug: String,
    pub title: String,
    pub date: String,
    pub excerpt: String,
    pub tags: Vec<String>,
    pub author: String,
    pub reading_time: String,
}

impl Post {
    /// Build a post from a document's raw text.
    ///
    /// Missing front-matter fields fall back to empty values, except
    /// `author`, which falls back to the given default identity.
    pub fn from_document(slug: &str, raw: &str, default_author: &str) -> Self {
        let (fm, body) = FrontMatter::parse(raw);
        Self {
            slug: slug.to_string(),
            title: fm.title.unwrap_or_default(),
            date: fm.date.unwrap_or_default(),
            excerpt: fm.excerpt.unwrap_or_default(),
            content: body.to_string(),
            tags: fm.tags,
            author: fm.author.unwrap_or_else(|| default_author.to_string()),
            reading_time: reading_time::estimate(body),
        }
    }

    /// Drop the body text, keeping the fields listings need
    pub fn into_meta(self) -> PostMeta {
        PostMeta {
            slug: self.slug,
            title: self.title,
            date: self.date,
            excerpt: self.excerpt,
            tags: self.tags,
            author: self.author,
            reading_time: self.reading_time,
        }
    }
}
