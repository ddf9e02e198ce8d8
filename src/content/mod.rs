//! Content pipeline: front-matter, post documents, storage, markdown

pub mod frontmatter;
pub mod markdown;
pub mod post;
pub mod reading_time;
pub mod store;

pub use frontmatter::FrontMatter;
pub use post::{Post, PostMeta};
pub use store::PostStore;
