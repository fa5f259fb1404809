//! In-memory content store
//!
//! Single source of truth during the authoring/export phase. Entities are
//! created once and then only read or listed; there are no update or delete
//! operations. Registries are insertion-ordered so that listing ties on
//! equal timestamps break by creation order.

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::content::model::{BlogPost, ContactSubmission, User};

mod seed;

/// Slug ids are capped to keep artifact filenames manageable
const MAX_SLUG_LEN: usize = 100;

/// Fields supplied when creating a blog post
#[derive(Debug, Clone)]
pub struct NewPost {
    pub title: String,
    pub excerpt: String,
    pub content: String,
    pub author: String,
    pub category: String,
    pub tags: Option<Vec<String>>,
    pub featured: bool,
}

/// Fields supplied when creating a user
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub password: String,
}

/// Fields accepted at the contact-form boundary.
///
/// Validation happens in the `contact` module before creation; the store
/// itself accepts whatever it is handed.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NewSubmission {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub company: Option<String>,
    pub project_type: String,
    pub budget: String,
    pub description: String,
    pub agreed_to_terms: bool,
}

impl Default for NewSubmission {
    fn default() -> Self {
        Self {
            first_name: String::new(),
            last_name: String::new(),
            email: String::new(),
            company: None,
            project_type: String::new(),
            budget: String::new(),
            description: String::new(),
            agreed_to_terms: false,
        }
    }
}

/// Authoritative in-memory registry of site content
#[derive(Debug, Default)]
pub struct ContentStore {
    posts: IndexMap<String, BlogPost>,
    users: IndexMap<String, User>,
    submissions: IndexMap<String, ContactSubmission>,
}

impl ContentStore {
    /// An empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// A store populated with the site's sample articles
    pub fn seeded() -> Self {
        let mut store = Self::new();
        seed::populate(&mut store);
        store
    }

    /// All posts, newest first; ties keep insertion order
    pub fn posts(&self) -> Vec<BlogPost> {
        let mut posts: Vec<BlogPost> = self.posts.values().cloned().collect();
        posts.sort_by(|a, b| b.published_at.cmp(&a.published_at));
        posts
    }

    /// Posts flagged as featured, same ordering as `posts`
    pub fn featured_posts(&self) -> Vec<BlogPost> {
        self.posts().into_iter().filter(|p| p.featured).collect()
    }

    pub fn post(&self, id: &str) -> Option<&BlogPost> {
        self.posts.get(id)
    }

    /// Create a post with a slug id derived from the title and a creation
    /// timestamp of now
    pub fn create_post(&mut self, new: NewPost) -> BlogPost {
        self.create_post_at(new, Utc::now())
    }

    fn create_post_at(&mut self, new: NewPost, published_at: DateTime<Utc>) -> BlogPost {
        let id = self.free_slug(&new.title);
        let post = BlogPost {
            id: id.clone(),
            title: new.title,
            excerpt: new.excerpt,
            content: new.content,
            author: new.author,
            category: new.category,
            tags: new.tags,
            published_at,
            featured: new.featured,
        };
        self.posts.insert(id, post.clone());
        post
    }

    /// First free slug for a title: the bare slug, then `-2`, `-3`, ...
    fn free_slug(&self, title: &str) -> String {
        let base = slug_id(title);
        if !self.posts.contains_key(&base) {
            return base;
        }
        let mut n = 2;
        loop {
            let candidate = format!("{}-{}", base, n);
            if !self.posts.contains_key(&candidate) {
                return candidate;
            }
            n += 1;
        }
    }

    pub fn create_user(&mut self, new: NewUser) -> User {
        let user = User {
            id: uuid::Uuid::new_v4().to_string(),
            username: new.username,
            password: new.password,
        };
        self.users.insert(user.id.clone(), user.clone());
        user
    }

    pub fn user(&self, id: &str) -> Option<&User> {
        self.users.get(id)
    }

    pub fn user_by_username(&self, username: &str) -> Option<&User> {
        self.users.values().find(|u| u.username == username)
    }

    /// Store a contact submission, assigning its id and timestamp
    pub fn create_submission(&mut self, new: NewSubmission) -> ContactSubmission {
        let submission = ContactSubmission {
            id: uuid::Uuid::new_v4().to_string(),
            first_name: new.first_name,
            last_name: new.last_name,
            email: new.email,
            company: new.company,
            project_type: new.project_type,
            budget: new.budget,
            description: new.description,
            agreed_to_terms: new.agreed_to_terms,
            submitted_at: Utc::now(),
        };
        self.submissions.insert(submission.id.clone(), submission.clone());
        submission
    }

    /// All submissions, newest first
    pub fn submissions(&self) -> Vec<ContactSubmission> {
        let mut submissions: Vec<ContactSubmission> =
            self.submissions.values().cloned().collect();
        submissions.sort_by(|a, b| b.submitted_at.cmp(&a.submitted_at));
        submissions
    }
}

/// Slug id for a title: lowercased, non-alphanumeric runs collapsed to
/// hyphens, trimmed, capped in length
pub fn slug_id(title: &str) -> String {
    let mut s = slug::slugify(title);
    if s.len() > MAX_SLUG_LEN {
        // slugify output is ASCII, so the cut is always on a char boundary
        s.truncate(MAX_SLUG_LEN);
        s = s.trim_end_matches('-').to_string();
    }
    if s.is_empty() {
        s = "untitled".to_string();
    }
    s
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn post(title: &str, featured: bool) -> NewPost {
        NewPost {
            title: title.to_string(),
            excerpt: format!("{} excerpt", title),
            content: "Body.".to_string(),
            author: "Maya Tran".to_string(),
            category: "Engineering".to_string(),
            tags: None,
            featured,
        }
    }

    fn submission(agreed: bool) -> NewSubmission {
        NewSubmission {
            first_name: "Ada".to_string(),
            last_name: "Byron".to_string(),
            email: "ada@example.com".to_string(),
            company: None,
            project_type: "ML Platform".to_string(),
            budget: "$10k-$50k".to_string(),
            description: "Build a thing.".to_string(),
            agreed_to_terms: agreed,
        }
    }

    #[test]
    fn test_slug_id() {
        assert_eq!(slug_id("RAG Systems That Actually Work"), "rag-systems-that-actually-work");
        assert_eq!(slug_id("  Hello,   World!  "), "hello-world");
        assert_eq!(slug_id("???"), "untitled");
        let long = "word ".repeat(40);
        let id = slug_id(&long);
        assert!(id.len() <= 100);
        assert!(!id.ends_with('-'));
    }

    #[test]
    fn test_create_assigns_unique_nonempty_ids() {
        let mut store = ContentStore::new();
        let a = store.create_post(post("Same Title", false));
        let b = store.create_post(post("Same Title", false));
        let c = store.create_post(post("Same Title", false));
        assert_eq!(a.id, "same-title");
        assert_eq!(b.id, "same-title-2");
        assert_eq!(c.id, "same-title-3");
        assert_eq!(store.posts().len(), 3);
    }

    #[test]
    fn test_posts_sorted_newest_first_with_stable_ties() {
        let mut store = ContentStore::new();
        let now = Utc::now();
        store.create_post_at(post("Old", false), now - Duration::days(2));
        store.create_post_at(post("Tie A", false), now);
        store.create_post_at(post("Tie B", false), now);

        let posts = store.posts();
        let titles: Vec<&str> = posts.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["Tie A", "Tie B", "Old"]);
        for pair in posts.windows(2) {
            assert!(pair[0].published_at >= pair[1].published_at);
        }
    }

    #[test]
    fn test_featured_is_an_order_preserving_subset() {
        let store = ContentStore::seeded();
        let all = store.posts();
        let featured = store.featured_posts();
        assert!(!featured.is_empty());
        assert!(featured.iter().all(|p| p.featured));

        let expected: Vec<&str> = all
            .iter()
            .filter(|p| p.featured)
            .map(|p| p.id.as_str())
            .collect();
        let actual: Vec<&str> = featured.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_get_missing_post_is_none() {
        let store = ContentStore::seeded();
        assert!(store.post("does-not-exist").is_none());
    }

    #[test]
    fn test_seeded_store_has_sample_articles() {
        let store = ContentStore::seeded();
        assert!(store.posts().len() >= 5);
        assert!(store.post("rag-systems-that-actually-work-combining-retrieval-and-generation-for-enterprise-ai").is_some());
    }

    #[test]
    fn test_submissions_sorted_newest_first() {
        let mut store = ContentStore::new();
        let a = store.create_submission(submission(true));
        let b = store.create_submission(submission(true));
        assert_ne!(a.id, b.id);
        let listed = store.submissions();
        assert_eq!(listed.len(), 2);
        for pair in listed.windows(2) {
            assert!(pair[0].submitted_at >= pair[1].submitted_at);
        }
    }

    #[test]
    fn test_submission_gets_fresh_timestamp_and_id() {
        let mut store = ContentStore::new();
        let before = Utc::now();
        let stored = store.create_submission(submission(true));
        assert!(!stored.id.is_empty());
        assert!(stored.submitted_at >= before);
    }

    #[test]
    fn test_users() {
        let mut store = ContentStore::new();
        let user = store.create_user(NewUser {
            username: "maya".to_string(),
            password: "hunter2".to_string(),
        });
        assert_eq!(store.user(&user.id), Some(&user));
        assert_eq!(store.user_by_username("maya"), Some(&user));
        assert!(store.user_by_username("nobody").is_none());
    }
}
