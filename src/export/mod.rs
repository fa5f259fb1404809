//! Static artifact exporter
//!
//! One-shot batch transformation of the content store into a static
//! artifact set: a metadata index, a featured-id index, and one document
//! per post. Re-running over an unchanged store overwrites the previous
//! artifacts byte for byte. Any write failure aborts the whole export.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use crate::content::model::PostMeta;
use crate::store::ContentStore;

/// Metadata index artifact, relative to the content root
pub const POSTS_INDEX: &str = "posts.json";
/// Featured-id index artifact, relative to the content root
pub const FEATURED_INDEX: &str = "featured.json";
/// Directory of per-post documents, relative to the content root
pub const POSTS_DIR: &str = "posts";

/// Counts reported after a successful export
#[derive(Debug, Clone, Copy)]
pub struct ExportSummary {
    pub posts: usize,
    pub featured: usize,
}

/// Writes the store's static artifact set under a content root
pub struct Exporter {
    content_dir: PathBuf,
}

impl Exporter {
    pub fn new<P: AsRef<Path>>(content_dir: P) -> Self {
        Self {
            content_dir: content_dir.as_ref().to_path_buf(),
        }
    }

    pub fn export(&self, store: &ContentStore) -> Result<ExportSummary> {
        let posts = store.posts();
        let featured = store.featured_posts();

        let posts_dir = self.content_dir.join(POSTS_DIR);
        fs::create_dir_all(&posts_dir)
            .with_context(|| format!("creating output directory {:?}", posts_dir))?;

        let metadata: Vec<PostMeta> = posts.iter().map(|p| p.meta()).collect();
        let index_path = self.content_dir.join(POSTS_INDEX);
        fs::write(&index_path, serde_json::to_string_pretty(&metadata)?)
            .with_context(|| format!("writing {:?}", index_path))?;

        let featured_ids: Vec<&str> = featured.iter().map(|p| p.id.as_str()).collect();
        let featured_path = self.content_dir.join(FEATURED_INDEX);
        fs::write(&featured_path, serde_json::to_string_pretty(&featured_ids)?)
            .with_context(|| format!("writing {:?}", featured_path))?;

        for post in &posts {
            let path = posts_dir.join(format!("{}.md", post.id));
            fs::write(&path, post.to_document())
                .with_context(|| format!("writing {:?}", path))?;
            tracing::debug!("Exported {}.md", post.id);
        }

        Ok(ExportSummary {
            posts: posts.len(),
            featured: featured_ids.len(),
        })
    }
}
