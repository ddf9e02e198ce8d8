//! Show a single post

use anyhow::Result;

use crate::Site;

/// Print one post by slug
pub fn run(site: &Site, slug: &str) -> Result<()> {
    let store = site.post_store();

    let Some(post) = store.load(slug) else {
        anyhow::bail!("Post not found: {}", slug);
    };

    println!("Title:        {}", post.title);
    println!("Date:         {}", post.date);
    println!("Author:       {}", post.author);
    println!("Tags:         {}", post.tags.join(", "));
    println!("Reading time: {}", post.reading_time);
    if !post.excerpt.is_empty() {
        println!("Excerpt:      {}", post.excerpt);
    }
    println!();
    println!("{}", post.content);

    Ok(())
}
