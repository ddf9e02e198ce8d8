//! Generator module - renders the site into static HTML files

use anyhow::Result;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

use chrono::Datelike;
use tera::Context;

use crate::content::{markdown, PostMeta, PostStore};
use crate::helpers::url::{full_url_for, post_url, tag_slug, tag_url, url_for};
use crate::templates::{PostView, TagRef, TagView, TemplateRenderer, STYLE_CSS};
use crate::Site;

/// Static site generator using the embedded templates
pub struct Generator {
    site: Site,
    renderer: TemplateRenderer,
}

impl Generator {
    /// Create a new generator
    pub fn new(site: &Site) -> Result<Self> {
        let renderer = TemplateRenderer::new()?;

        Ok(Self {
            site: site.clone(),
            renderer,
        })
    }

    /// Generate the entire site
    pub fn generate(&self) -> Result<()> {
        // Ensure public directory exists
        fs::create_dir_all(&self.site.public_dir)?;

        let store = self.site.post_store();

        self.generate_index(&store)?;
        self.generate_post_pages(&store)?;
        self.generate_tag_pages(&store)?;
        self.generate_not_found()?;
        self.write_assets()?;

        Ok(())
    }

    /// Create a base context with common variables
    fn base_context(&self) -> Context {
        let config = &self.site.config;
        let mut context = Context::new();
        context.insert("config", config);
        context.insert("home_url", &url_for(config, ""));
        context.insert(
            "tags_url",
            &url_for(config, &format!("{}/", config.tag_dir)),
        );
        context.insert("css_url", &url_for(config, "css/style.css"));
        context.insert("year", &chrono::Utc::now().year());
        // Pages with their own address overwrite this
        context.insert("page_url", &full_url_for(config, ""));
        context
    }

    /// Build the template view of a post, with resolved URLs
    fn post_view(&self, meta: &PostMeta) -> PostView {
        let config = &self.site.config;
        PostView {
            slug: meta.slug.clone(),
            title: meta.title.clone(),
            date: meta.date.clone(),
            excerpt: meta.excerpt.clone(),
            tags: meta
                .tags
                .iter()
                .map(|t| TagRef {
                    name: t.clone(),
                    url: tag_url(config, t),
                })
                .collect(),
            author: meta.author.clone(),
            reading_time: meta.reading_time.clone(),
            url: post_url(config, &meta.slug),
        }
    }

    /// Generate the listing page
    fn generate_index(&self, store: &PostStore) -> Result<()> {
        let posts: Vec<PostView> = store
            .metadata()
            .iter()
            .map(|meta| self.post_view(meta))
            .collect();

        let mut context = self.base_context();
        context.insert("posts", &posts);

        let html = self.renderer.render("index.html", &context)?;
        self.write_page(&self.site.public_dir.join("index.html"), &html)?;

        tracing::info!("Generated index with {} posts", posts.len());
        Ok(())
    }

    /// Generate individual post pages
    fn generate_post_pages(&self, store: &PostStore) -> Result<()> {
        let metas = store.metadata();

        for meta in &metas {
            // Listing and lookup can disagree for non-canonical extensions
            let Some(post) = store.load(&meta.slug) else {
                continue;
            };

            let mut context = self.base_context();
            context.insert("post", &self.post_view(meta));
            context.insert("content", &markdown::render(&post.content));

            let page_path = format!("{}/{}/", self.site.config.blog_dir, meta.slug);
            context.insert("page_url", &full_url_for(&self.site.config, &page_path));

            let html = self.renderer.render("post.html", &context)?;
            let output_path = self
                .site
                .public_dir
                .join(&self.site.config.blog_dir)
                .join(&meta.slug)
                .join("index.html");
            self.write_page(&output_path, &html)?;
        }

        tracing::info!("Generated {} post pages", metas.len());
        Ok(())
    }

    /// Generate the tag index and one page per tag
    fn generate_tag_pages(&self, store: &PostStore) -> Result<()> {
        let metas = store.metadata();
        let mut tag_views = Vec::new();
        let mut seen = HashSet::new();

        for name in store.tags() {
            let slug = tag_slug(&name);
            // Names that collapse to the same directory share one page;
            // the first name in ascending order wins
            if slug.is_empty() || !seen.insert(slug.clone()) {
                continue;
            }

            // Membership is by directory slug, so the shared page
            // carries every colliding name's posts
            let posts: Vec<PostView> = metas
                .iter()
                .filter(|meta| meta.tags.iter().any(|t| tag_slug(t) == slug))
                .map(|meta| self.post_view(meta))
                .collect();

            let mut context = self.base_context();
            context.insert("tag", &name);
            context.insert("posts", &posts);

            let page_path = format!("{}/{}/", self.site.config.tag_dir, slug);
            context.insert("page_url", &full_url_for(&self.site.config, &page_path));

            let html = self.renderer.render("tag.html", &context)?;
            let output_path = self
                .site
                .public_dir
                .join(&self.site.config.tag_dir)
                .join(&slug)
                .join("index.html");
            self.write_page(&output_path, &html)?;

            tag_views.push(TagView {
                url: tag_url(&self.site.config, &name),
                count: posts.len(),
                name,
            });
        }

        let mut context = self.base_context();
        context.insert("tags", &tag_views);
        context.insert(
            "page_url",
            &full_url_for(&self.site.config, &format!("{}/", self.site.config.tag_dir)),
        );

        let html = self.renderer.render("tags.html", &context)?;
        let output_path = self
            .site
            .public_dir
            .join(&self.site.config.tag_dir)
            .join("index.html");
        self.write_page(&output_path, &html)?;

        tracing::info!("Generated {} tag pages", tag_views.len());
        Ok(())
    }

    /// Generate the 404 page
    fn generate_not_found(&self) -> Result<()> {
        let context = self.base_context();
        let html = self.renderer.render("404.html", &context)?;
        self.write_page(&self.site.public_dir.join("404.html"), &html)
    }

    /// Write embedded theme assets
    fn write_assets(&self) -> Result<()> {
        let css_path = self.site.public_dir.join("css").join("style.css");
        self.write_page(&css_path, STYLE_CSS)
    }

    /// Write one output file, creating parent directories as needed
    fn write_page(&self, path: &Path, content: &str) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| anyhow::anyhow!("Failed to create dir {:?}: {}", parent, e))?;
        }
        fs::write(path, content)
            .map_err(|e| anyhow::anyhow!("Failed to write {:?}: {}", path, e))?;
        tracing::debug!("Generated: {:?}", path);
        Ok(())
    }
}
