//! Query exported artifacts: show a post, search the index

use anyhow::Result;

use crate::content::render::{Block, ContentRenderer, Span};
use crate::loader::StaticLoader;
use crate::Site;

/// Load one exported post and print its rendered block structure
pub async fn show(site: &Site, id: &str) -> Result<()> {
    let loader = StaticLoader::new(&site.content_dir);

    let Some(post) = loader.get_one(id).await else {
        anyhow::bail!("post `{}` not found under {:?}", id, site.content_dir);
    };

    println!("{}", post.title);
    println!(
        "{} | {} | {}",
        post.published_at.format("%Y-%m-%d"),
        post.author,
        post.category
    );
    if let Some(tags) = &post.tags {
        println!("tags: {}", tags.join(", "));
    }
    println!();

    let renderer = ContentRenderer::with_asset_prefix(&site.config.asset_prefix);
    for block in renderer.render(&post.content) {
        match block {
            Block::Heading { level, text } => {
                println!("{} {}", "#".repeat(level as usize), text);
            }
            Block::Paragraph { spans } => println!("{}", spans_to_text(&spans)),
            Block::List { items } => {
                for item in items {
                    println!("  - {}", spans_to_text(&item));
                }
            }
            Block::Image { alt, src } => println!("[image: {} ({})]", alt, src),
        }
        println!();
    }

    Ok(())
}

/// Search the exported metadata index
pub async fn search(site: &Site, query: &str) -> Result<()> {
    let loader = StaticLoader::new(&site.content_dir);
    let hits = loader.search(query).await;

    println!("Matches for `{}` ({}):", query, hits.len());
    for post in hits {
        println!(
            "  {} - {} [{}]",
            post.published_at.format("%Y-%m-%d"),
            post.title,
            post.id
        );
    }

    Ok(())
}

fn spans_to_text(spans: &[Span]) -> String {
    spans
        .iter()
        .map(|span| match span {
            Span::Text(text) => text.clone(),
            Span::Strong(text) => format!("**{}**", text),
        })
        .collect()
}
