//! Post storage: locating, loading and querying documents on disk

use std::cmp::Reverse;
use std::collections::BTreeSet;
use std::io::ErrorKind;
use std::path::PathBuf;

use walkdir::WalkDir;

use crate::content::frontmatter::parse_date_string;
use crate::content::post::{Post, PostMeta};

/// File extensions recognized when enumerating post documents
const POST_EXTENSIONS: [&str; 2] = ["mdx", "md"];

/// The single extension consulted for direct slug lookup
const CANONICAL_EXTENSION: &str = "mdx";

/// Read-only accessor over a directory of post documents.
///
/// Every operation scans storage afresh. The store keeps no state
/// between calls, so concurrent readers are safe by construction.
#[derive(Debug, Clone)]
pub struct PostStore {
    dir: PathBuf,
    default_author: String,
}

impl PostStore {
    /// Create a store reading from `dir`, with `default_author` as the
    /// fallback identity for posts that declare none.
    pub fn new(dir: impl Into<PathBuf>, default_author: impl Into<String>) -> Self {
        Self {
            dir: dir.into(),
            default_author: default_author.into(),
        }
    }

    /// Enumerate the slug of every post document in storage.
    ///
    /// Order is storage enumeration order, no semantic ranking. The slug
    /// is the filename minus its extension, with no further
    /// normalization. A missing directory yields an empty collection
    /// rather than an error.
    pub fn list_slugs(&self) -> Vec<String> {
        let mut slugs = Vec::new();
        for entry in WalkDir::new(&self.dir)
            .min_depth(1)
            .max_depth(1)
            .into_iter()
            .filter_map(|e| e.ok())
        {
            if !entry.file_type().is_file() {
                continue;
            }
            let path = entry.path();
            let Some(ext) = path.extension().and_then(|e| e.to_str()) else {
                continue;
            };
            if !POST_EXTENSIONS.contains(&ext) {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                slugs.push(stem.to_string());
            }
        }
        slugs
    }

    /// Load a single post by slug.
    ///
    /// The slug is used verbatim and resolves to exactly `<slug>.mdx`
    /// in the store directory. Only the canonical extension is
    /// consulted: a document stored under another recognized extension
    /// is enumerable but not directly loadable. `None` means absent; an
    /// unreadable file degrades to absence rather than an error.
    pub fn load(&self, slug: &str) -> Option<Post> {
        let path = self.dir.join(format!("{slug}.{CANONICAL_EXTENSION}"));
        let raw = match std::fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(e) => {
                if e.kind() != ErrorKind::NotFound {
                    tracing::warn!("Failed to read {}: {}", path.display(), e);
                }
                return None;
            }
        };
        Some(Post::from_document(slug, &raw, &self.default_author))
    }

    /// Load every post in storage, most recent first.
    ///
    /// Slugs that do not resolve to a loadable document are dropped
    /// silently. Posts without a parseable date sort after dated ones,
    /// stable with respect to enumeration order.
    pub fn posts(&self) -> Vec<Post> {
        let mut posts: Vec<Post> = self
            .list_slugs()
            .iter()
            .filter_map(|slug| self.load(slug))
            .collect();
        posts.sort_by_cached_key(|post| Reverse(parse_date_string(&post.date)));
        posts
    }

    /// Listing projection of every post, most recent first
    pub fn metadata(&self) -> Vec<PostMeta> {
        self.posts().into_iter().map(Post::into_meta).collect()
    }

    /// Listing projection filtered to posts carrying `tag`, compared
    /// case-insensitively. Order is preserved from [`PostStore::metadata`].
    pub fn metadata_with_tag(&self, tag: &str) -> Vec<PostMeta> {
        let needle = tag.to_lowercase();
        self.metadata()
            .into_iter()
            .filter(|meta| meta.tags.iter().any(|t| t.to_lowercase() == needle))
            .collect()
    }

    /// Every distinct tag across all posts, in ascending order. Values
    /// keep the case they were declared with; only the membership test
    /// in [`PostStore::metadata_with_tag`] folds case.
    pub fn tags(&self) -> Vec<String> {
        let mut tags = BTreeSet::new();
        for meta in self.metadata() {
            tags.extend(meta.tags);
        }
        tags.into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::Path;
    use tempfile::tempdir;

    const AUTHOR: &str = "Spencer Larsen";

    fn write_post(dir: &Path, name: &str, content: &str) {
        fs::write(dir.join(name), content).unwrap();
    }

    fn store(dir: &Path) -> PostStore {
        PostStore::new(dir, AUTHOR)
    }

    #[test]
    fn test_list_slugs_strips_extensions() {
        let tmp = tempdir().unwrap();
        write_post(tmp.path(), "first.mdx", "First.");
        write_post(tmp.path(), "second.md", "Second.");
        write_post(tmp.path(), "notes.txt", "Not a post.");
        fs::create_dir(tmp.path().join("drafts")).unwrap();

        let mut slugs = store(tmp.path()).list_slugs();
        slugs.sort();
        assert_eq!(slugs, vec!["first", "second"]);
    }

    #[test]
    fn test_slug_is_filename_unmodified() {
        let tmp = tempdir().unwrap();
        write_post(tmp.path(), "My First Post.mdx", "Body.");

        let slugs = store(tmp.path()).list_slugs();
        assert_eq!(slugs, vec!["My First Post"]);
    }

    #[test]
    fn test_load_by_slug() {
        let tmp = tempdir().unwrap();
        write_post(
            tmp.path(),
            "welcome.mdx",
            "---\ntitle: Welcome\ndate: \"2026-02-11\"\ntags:\n  - Portfolio\n---\n\nHello.\n",
        );

        let store = store(tmp.path());
        let post = store.load("welcome").unwrap();
        assert_eq!(post.slug, "welcome");
        assert_eq!(post.title, "Welcome");
        assert_eq!(post.tags, vec!["Portfolio"]);
        assert_eq!(post.content, "Hello.\n");
    }

    #[test]
    fn test_extension_suffixed_slug_is_absent() {
        let tmp = tempdir().unwrap();
        write_post(tmp.path(), "welcome.mdx", "---\ntitle: Welcome\n---\nHi.");

        let store = store(tmp.path());
        assert!(store.load("welcome").is_some());
        // "welcome.mdx" resolves to welcome.mdx.mdx, which does not exist
        assert!(store.load("welcome.mdx").is_none());
    }

    #[test]
    fn test_double_extension_slug_round_trips() {
        let tmp = tempdir().unwrap();
        write_post(tmp.path(), "notes.mdx.mdx", "---\ntitle: Notes\n---\nBody.");

        let store = store(tmp.path());
        assert_eq!(store.list_slugs(), vec!["notes.mdx"]);

        // Only the final extension is stripped, and lookup appends it
        // back, so the enumerated slug loads
        let post = store.load("notes.mdx").unwrap();
        assert_eq!(post.slug, "notes.mdx");
        assert_eq!(post.title, "Notes");
    }

    #[test]
    fn test_load_missing_returns_none() {
        let tmp = tempdir().unwrap();
        assert!(store(tmp.path()).load("no-such-post").is_none());
    }

    #[test]
    fn test_load_is_idempotent() {
        let tmp = tempdir().unwrap();
        write_post(tmp.path(), "stable.mdx", "---\ntitle: Stable\n---\nSame.");

        let store = store(tmp.path());
        assert_eq!(store.load("stable"), store.load("stable"));
    }

    #[test]
    fn test_md_files_are_listed_but_not_loadable() {
        let tmp = tempdir().unwrap();
        write_post(tmp.path(), "plain.md", "---\ntitle: Plain\n---\nBody.");

        let store = store(tmp.path());
        assert_eq!(store.list_slugs(), vec!["plain"]);
        assert!(store.load("plain").is_none());
        assert!(store.posts().is_empty());
    }

    #[test]
    fn test_posts_sorted_most_recent_first() {
        let tmp = tempdir().unwrap();
        write_post(tmp.path(), "old.mdx", "---\ntitle: Old\ndate: \"2024-01-15\"\n---\nA.");
        write_post(tmp.path(), "new.mdx", "---\ntitle: New\ndate: \"2026-02-11\"\n---\nB.");
        write_post(
            tmp.path(),
            "mid.mdx",
            "---\ntitle: Mid\ndate: \"June 1, 2025\"\n---\nC.",
        );

        let titles: Vec<String> = store(tmp.path())
            .posts()
            .into_iter()
            .map(|p| p.title)
            .collect();
        assert_eq!(titles, vec!["New", "Mid", "Old"]);
    }

    #[test]
    fn test_undated_posts_sort_last() {
        let tmp = tempdir().unwrap();
        write_post(tmp.path(), "dated.mdx", "---\ntitle: Dated\ndate: \"2024-01-15\"\n---\nA.");
        write_post(tmp.path(), "undated.mdx", "---\ntitle: Undated\n---\nB.");

        let titles: Vec<String> = store(tmp.path())
            .posts()
            .into_iter()
            .map(|p| p.title)
            .collect();
        assert_eq!(titles, vec!["Dated", "Undated"]);
    }

    #[test]
    fn test_metadata_with_tag_is_case_insensitive() {
        let tmp = tempdir().unwrap();
        write_post(
            tmp.path(),
            "site.mdx",
            "---\ntitle: Site\ndate: \"2026-02-11\"\ntags:\n  - Next.js\n  - Web Development\n---\nA.",
        );
        write_post(
            tmp.path(),
            "lang.mdx",
            "---\ntitle: Lang\ndate: \"2025-05-01\"\ntags:\n  - Rust\n---\nB.",
        );

        let store = store(tmp.path());
        let matched = store.metadata_with_tag("web development");
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].title, "Site");

        let matched = store.metadata_with_tag("RUST");
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].title, "Lang");

        assert!(store.metadata_with_tag("ruby").is_empty());
    }

    #[test]
    fn test_tags_deduplicated_and_sorted() {
        let tmp = tempdir().unwrap();
        write_post(
            tmp.path(),
            "a.mdx",
            "---\ntags:\n  - Web Development\n  - Next.js\n---\nA.",
        );
        write_post(
            tmp.path(),
            "b.mdx",
            "---\ntags:\n  - Next.js\n  - Portfolio\n---\nB.",
        );

        let tags = store(tmp.path()).tags();
        assert_eq!(tags, vec!["Next.js", "Portfolio", "Web Development"]);
    }

    #[test]
    fn test_missing_directory_is_empty() {
        let tmp = tempdir().unwrap();
        let store = store(&tmp.path().join("does-not-exist"));
        assert!(store.list_slugs().is_empty());
        assert!(store.metadata().is_empty());
        assert!(store.tags().is_empty());
    }

    #[test]
    fn test_malformed_frontmatter_degrades_to_defaults() {
        let tmp = tempdir().unwrap();
        let raw = "---\ntitle: [broken\n---\nStill readable.\n";
        write_post(tmp.path(), "broken.mdx", raw);

        let post = store(tmp.path()).load("broken").unwrap();
        assert_eq!(post.title, "");
        assert_eq!(post.author, AUTHOR);
        assert_eq!(post.content, raw);
    }

    #[test]
    fn test_non_utf8_document_degrades_to_absence() {
        let tmp = tempdir().unwrap();
        fs::write(tmp.path().join("bin.mdx"), [0xFF, 0xFE, 0x00, 0x41]).unwrap();

        let store = store(tmp.path());
        assert_eq!(store.list_slugs(), vec!["bin"]);
        assert!(store.load("bin").is_none());
        assert!(store.posts().is_empty());
    }

    #[test]
    fn test_round_trip_reading_time() {
        let tmp = tempdir().unwrap();
        let body = vec!["word"; 500].join(" ");
        let raw = format!(
            "---\ntitle: Welcome to My Portfolio\ndate: \"2026-02-11\"\ntags:\n  - Next.js\n  - Web Development\n  - Portfolio\n---\n\n{body}\n"
        );
        write_post(tmp.path(), "welcome-post.mdx", &raw);

        let post = store(tmp.path()).load("welcome-post").unwrap();
        assert_eq!(post.title, "Welcome to My Portfolio");
        assert_eq!(post.date, "2026-02-11");
        assert_eq!(post.tags, vec!["Next.js", "Web Development", "Portfolio"]);
        assert_eq!(post.reading_time, "3 min read");
    }
}
