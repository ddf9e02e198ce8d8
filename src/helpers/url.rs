//! URL helper functions

use slug::slugify;

use crate::config::SiteConfig;

/// Generate a URL with the root path
///
/// # Examples
/// ```ignore
/// url_for(&config, "/css/style.css") // -> "/folio/css/style.css"
/// ```
pub fn url_for(config: &SiteConfig, path: &str) -> String {
    let root = config.root.trim_end_matches('/');
    let path = path.trim_start_matches('/');

    if path.is_empty() {
        format!("{}/", root)
    } else {
        format!("{}/{}", root, path)
    }
}

/// Generate a full URL including the domain
///
/// # Examples
/// ```ignore
/// full_url_for(&config, "/blog/hello/") // -> "https://example.com/blog/hello/"
/// ```
pub fn full_url_for(config: &SiteConfig, path: &str) -> String {
    let base = config.url.trim_end_matches('/');
    format!("{}{}", base, url_for(config, path))
}

/// URL of a single post page. The slug is used verbatim, since it is
/// also the lookup key.
pub fn post_url(config: &SiteConfig, slug: &str) -> String {
    url_for(config, &format!("{}/{}/", config.blog_dir, slug))
}

/// URL of a tag page. Tag names are slugified, so "Web Development"
/// lands at `tags/web-development/`.
pub fn tag_url(config: &SiteConfig, tag: &str) -> String {
    url_for(config, &format!("{}/{}/", config.tag_dir, slugify(tag)))
}

/// Directory-safe form of a tag name
pub fn tag_slug(tag: &str) -> String {
    slugify(tag)
}
