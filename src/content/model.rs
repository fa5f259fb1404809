//! Content entity models

use anyhow::{anyhow, Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::frontmatter::{FrontMatter, Value};

/// A blog post with its full body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    /// Slug identifier, unique within a store
    pub id: String,

    pub title: String,
    pub excerpt: String,

    /// Raw body in the site's markdown subset
    pub content: String,

    pub author: String,
    pub category: String,

    /// Ordered tags, or absent
    pub tags: Option<Vec<String>>,

    /// Set at creation, immutable afterwards
    pub published_at: DateTime<Utc>,

    /// Marks the post for promotional placement
    pub featured: bool,
}

/// Post metadata - every field of a post except the body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostMeta {
    pub id: String,
    pub title: String,
    pub excerpt: String,
    pub author: String,
    pub category: String,
    pub tags: Option<Vec<String>>,
    pub published_at: DateTime<Utc>,
    pub featured: bool,
}

impl BlogPost {
    /// Strip the body, keeping the metadata record
    pub fn meta(&self) -> PostMeta {
        PostMeta {
            id: self.id.clone(),
            title: self.title.clone(),
            excerpt: self.excerpt.clone(),
            author: self.author.clone(),
            category: self.category.clone(),
            tags: self.tags.clone(),
            published_at: self.published_at,
            featured: self.featured,
        }
    }

    /// Render the post as an exportable document: front-matter block,
    /// blank line, raw body
    pub fn to_document(&self) -> String {
        let mut fm = FrontMatter::new();
        fm.insert("id", Value::Str(self.id.clone()));
        fm.insert("title", Value::Str(self.title.clone()));
        fm.insert("excerpt", Value::Str(self.excerpt.clone()));
        fm.insert("author", Value::Str(self.author.clone()));
        fm.insert("category", Value::Str(self.category.clone()));
        fm.insert(
            "tags",
            match &self.tags {
                Some(tags) => Value::List(tags.clone()),
                None => Value::Null,
            },
        );
        fm.insert("publishedAt", Value::Str(self.published_at.to_rfc3339()));
        fm.insert("featured", Value::Bool(self.featured));

        format!("{}\n{}", fm.to_block(), self.content)
    }

    /// Reconstitute a post from an exported document
    pub fn from_document(text: &str) -> Result<Self> {
        let (fm, body) = FrontMatter::parse(text)?;

        let published_at = required_str(&fm, "publishedAt")?;
        let published_at = DateTime::parse_from_rfc3339(&published_at)
            .map(|dt| dt.with_timezone(&Utc))
            .with_context(|| format!("invalid publishedAt timestamp `{}`", published_at))?;

        let tags = match fm.get("tags") {
            Some(Value::List(items)) => Some(items.clone()),
            Some(Value::Null) | None => None,
            Some(_) => return Err(anyhow!("field `tags` has unexpected type")),
        };

        Ok(Self {
            id: required_str(&fm, "id")?,
            title: required_str(&fm, "title")?,
            excerpt: required_str(&fm, "excerpt")?,
            content: body.to_string(),
            author: required_str(&fm, "author")?,
            category: required_str(&fm, "category")?,
            tags,
            published_at,
            featured: required_bool(&fm, "featured")?,
        })
    }
}

fn required_str(fm: &FrontMatter, key: &'static str) -> Result<String> {
    match fm.get(key) {
        Some(Value::Str(s)) => Ok(s.clone()),
        Some(_) => Err(anyhow!("field `{}` has unexpected type", key)),
        None => Err(anyhow!("missing field `{}`", key)),
    }
}

fn required_bool(fm: &FrontMatter, key: &'static str) -> Result<bool> {
    match fm.get(key) {
        Some(Value::Bool(b)) => Ok(*b),
        Some(_) => Err(anyhow!("field `{}` has unexpected type", key)),
        None => Err(anyhow!("missing field `{}`", key)),
    }
}

/// A site user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub username: String,
    pub password: String,
}

/// A stored contact-form submission
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactSubmission {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub company: Option<String>,
    pub project_type: String,
    pub budget: String,
    pub description: String,
    pub agreed_to_terms: bool,

    /// Set at creation, immutable afterwards
    pub submitted_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample_post() -> BlogPost {
        BlogPost {
            id: "rust-in-production".to_string(),
            title: "Rust in Production".to_string(),
            excerpt: "Notes from the trenches.".to_string(),
            content: "## Why Rust\n\nSome **bold** text.".to_string(),
            author: "Maya Tran".to_string(),
            category: "Engineering".to_string(),
            tags: Some(vec!["rust".to_string(), "ops".to_string()]),
            published_at: Utc.with_ymd_and_hms(2026, 3, 14, 9, 30, 0).unwrap(),
            featured: true,
        }
    }

    #[test]
    fn test_document_round_trip() {
        let post = sample_post();
        let parsed = BlogPost::from_document(&post.to_document()).unwrap();
        assert_eq!(parsed, post);
    }

    #[test]
    fn test_round_trip_without_tags_and_empty_content() {
        let mut post = sample_post();
        post.tags = None;
        post.content = String::new();
        let doc = post.to_document();
        assert!(doc.contains("tags: null"));
        let parsed = BlogPost::from_document(&doc).unwrap();
        assert_eq!(parsed, post);
    }

    #[test]
    fn test_missing_field_is_an_error() {
        let doc = "---\nid: \"x\"\n---\n\nbody";
        let err = BlogPost::from_document(doc).unwrap_err();
        assert!(err.to_string().contains("publishedAt"));
    }

    #[test]
    fn test_invalid_timestamp_is_an_error() {
        let doc = "---\nid: \"x\"\ntitle: \"t\"\nexcerpt: \"e\"\nauthor: \"a\"\ncategory: \"c\"\ntags: null\npublishedAt: \"yesterday\"\nfeatured: false\n---\n\nbody";
        let err = BlogPost::from_document(doc).unwrap_err();
        assert!(err.to_string().contains("publishedAt"));
    }

    #[test]
    fn test_meta_drops_body_only() {
        let post = sample_post();
        let meta = post.meta();
        assert_eq!(meta.id, post.id);
        assert_eq!(meta.published_at, post.published_at);
        assert_eq!(meta.tags, post.tags);
    }
}
