//! List store content

use anyhow::Result;

use crate::store::ContentStore;

/// List store content by type
pub fn run(content_type: &str) -> Result<()> {
    let store = ContentStore::seeded();

    match content_type {
        "post" | "posts" => {
            let posts = store.posts();
            println!("Posts ({}):", posts.len());
            for post in posts {
                println!(
                    "  {} - {} [{}]",
                    post.published_at.format("%Y-%m-%d"),
                    post.title,
                    post.id
                );
            }
        }
        "featured" => {
            let posts = store.featured_posts();
            println!("Featured posts ({}):", posts.len());
            for post in posts {
                println!(
                    "  {} - {} [{}]",
                    post.published_at.format("%Y-%m-%d"),
                    post.title,
                    post.id
                );
            }
        }
        "tag" | "tags" => {
            let posts = store.posts();
            let mut tags: std::collections::HashMap<String, usize> =
                std::collections::HashMap::new();
            for post in &posts {
                for tag in post.tags.iter().flatten() {
                    *tags.entry(tag.clone()).or_insert(0) += 1;
                }
            }
            println!("Tags ({}):", tags.len());
            let mut tags: Vec<_> = tags.into_iter().collect();
            tags.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
            for (tag, count) in tags {
                println!("  {} ({})", tag, count);
            }
        }
        "category" | "categories" => {
            let posts = store.posts();
            let mut categories: std::collections::HashMap<String, usize> =
                std::collections::HashMap::new();
            for post in &posts {
                *categories.entry(post.category.clone()).or_insert(0) += 1;
            }
            println!("Categories ({}):", categories.len());
            let mut categories: Vec<_> = categories.into_iter().collect();
            categories.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
            for (category, count) in categories {
                println!("  {} ({})", category, count);
            }
        }
        "submission" | "submissions" => {
            let submissions = store.submissions();
            println!("Contact submissions ({}):", submissions.len());
            for s in submissions {
                println!(
                    "  {} - {} {} <{}>",
                    s.submitted_at.format("%Y-%m-%d %H:%M"),
                    s.first_name,
                    s.last_name,
                    s.email
                );
            }
        }
        _ => {
            anyhow::bail!(
                "Unknown type: {}. Available: post, featured, tag, category, submission",
                content_type
            );
        }
    }

    Ok(())
}
