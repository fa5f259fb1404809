//! Static artifact loader
//!
//! Client-side counterpart of the exporter: reconstitutes typed posts from
//! the artifact tree under a content root. Each artifact is fetched at most
//! once per loader lifetime; concurrent first calls converge on a single
//! underlying read through `OnceCell` slots. Fetch and parse failures are
//! logged and degrade to empty or absent results, never errors.

use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use serde::de::DeserializeOwned;
use tokio::sync::OnceCell;

use crate::content::model::{BlogPost, PostMeta};
use crate::export::{FEATURED_INDEX, POSTS_DIR, POSTS_INDEX};

/// Fetches and caches the static artifact set
pub struct StaticLoader {
    root: PathBuf,
    metadata: OnceCell<Vec<PostMeta>>,
    featured: OnceCell<Vec<String>>,
    documents: Mutex<HashMap<String, Arc<OnceCell<Option<BlogPost>>>>>,
}

impl StaticLoader {
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
            metadata: OnceCell::new(),
            featured: OnceCell::new(),
            documents: Mutex::new(HashMap::new()),
        }
    }

    /// All post metadata, newest first
    pub async fn get_all(&self) -> Vec<PostMeta> {
        let mut posts = self.fetch_metadata().await.clone();
        posts.sort_by(|a, b| b.published_at.cmp(&a.published_at));
        posts
    }

    /// Featured post metadata, newest first. The two index artifacts are
    /// fetched concurrently.
    pub async fn get_featured(&self) -> Vec<PostMeta> {
        let (posts, featured) = tokio::join!(self.fetch_metadata(), self.fetch_featured());
        let featured: HashSet<&str> = featured.iter().map(String::as_str).collect();
        let mut out: Vec<PostMeta> = posts
            .iter()
            .filter(|p| featured.contains(p.id.as_str()))
            .cloned()
            .collect();
        out.sort_by(|a, b| b.published_at.cmp(&a.published_at));
        out
    }

    /// One post with its body, or `None` if it cannot be fetched or parsed
    pub async fn get_one(&self, id: &str) -> Option<BlogPost> {
        // ids are slugs; anything path-like is not ours to resolve
        if id.contains(['/', '\\']) {
            tracing::warn!("Rejected post id with path separators: {}", id);
            return None;
        }

        let cell = {
            let mut documents = match self.documents.lock() {
                Ok(guard) => guard,
                Err(poisoned) => poisoned.into_inner(),
            };
            documents
                .entry(id.to_string())
                .or_insert_with(|| Arc::new(OnceCell::new()))
                .clone()
        };

        cell.get_or_init(|| self.fetch_document(id)).await.clone()
    }

    pub async fn get_by_category(&self, category: &str) -> Vec<PostMeta> {
        self.get_all()
            .await
            .into_iter()
            .filter(|p| p.category == category)
            .collect()
    }

    pub async fn get_by_tag(&self, tag: &str) -> Vec<PostMeta> {
        self.get_all()
            .await
            .into_iter()
            .filter(|p| {
                p.tags
                    .as_ref()
                    .is_some_and(|tags| tags.iter().any(|t| t == tag))
            })
            .collect()
    }

    /// Case-insensitive match against title, excerpt, and tags
    pub async fn search(&self, query: &str) -> Vec<PostMeta> {
        let query = query.to_lowercase();
        self.get_all()
            .await
            .into_iter()
            .filter(|p| {
                p.title.to_lowercase().contains(&query)
                    || p.excerpt.to_lowercase().contains(&query)
                    || p.tags.as_ref().is_some_and(|tags| {
                        tags.iter().any(|t| t.to_lowercase().contains(&query))
                    })
            })
            .collect()
    }

    async fn fetch_metadata(&self) -> &Vec<PostMeta> {
        self.metadata
            .get_or_init(|| self.fetch_index(POSTS_INDEX))
            .await
    }

    async fn fetch_featured(&self) -> &Vec<String> {
        self.featured
            .get_or_init(|| self.fetch_index(FEATURED_INDEX))
            .await
    }

    /// Fetch and decode a JSON index artifact, degrading to empty
    async fn fetch_index<T: DeserializeOwned>(&self, name: &str) -> Vec<T> {
        let path = self.root.join(name);
        let text = match tokio::fs::read_to_string(&path).await {
            Ok(text) => text,
            Err(e) => {
                tracing::warn!("Failed to fetch {:?}: {}", path, e);
                return Vec::new();
            }
        };
        match serde_json::from_str(&text) {
            Ok(items) => items,
            Err(e) => {
                tracing::warn!("Failed to parse {:?}: {}", path, e);
                Vec::new()
            }
        }
    }

    async fn fetch_document(&self, id: &str) -> Option<BlogPost> {
        let path = self.root.join(POSTS_DIR).join(format!("{}.md", id));
        let text = match tokio::fs::read_to_string(&path).await {
            Ok(text) => text,
            Err(e) => {
                tracing::warn!("Failed to fetch post {:?}: {}", path, e);
                return None;
            }
        };
        match BlogPost::from_document(&text) {
            Ok(post) => Some(post),
            Err(e) => {
                tracing::warn!("Failed to parse post {}: {}", id, e);
                None
            }
        }
    }
}
