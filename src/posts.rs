use crate::errors::{AppError, StoreError};
use crate::models::{BlogPost, PostDraft};
use crate::storage::KeyValueStore;
use chrono::NaiveDate;
use std::collections::HashSet;
use std::sync::Arc;

pub const POSTS_KEY: &str = "blog_posts";

/// Blog posts kept as one JSON array under [`POSTS_KEY`].
#[derive(Clone)]
pub struct PostStore {
    store: Arc<dyn KeyValueStore>,
}

impl PostStore {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Stored posts in stored order. An absent key is an empty list; a value
    /// that does not parse is an error.
    pub async fn list(&self) -> Result<Vec<BlogPost>, StoreError> {
        match self.store.get(POSTS_KEY).await? {
            Some(raw) => serde_json::from_str(&raw).map_err(|source| StoreError::Malformed {
                key: POSTS_KEY.to_string(),
                source,
            }),
            None => Ok(Vec::new()),
        }
    }

    /// Replaces the whole collection with `posts`.
    pub async fn save(&self, posts: &[BlogPost]) -> Result<(), StoreError> {
        let raw = serde_json::to_string(posts).map_err(StoreError::Encode)?;
        self.store.set(POSTS_KEY, raw).await
    }
}

/// Lowercases `title` and collapses every run of characters outside `[a-z0-9]`
/// into a single hyphen, with none at either end.
pub fn slugify(title: &str) -> String {
    let lowered = title.to_lowercase();
    let mut slug = String::with_capacity(lowered.len());
    let mut pending_hyphen = false;

    for ch in lowered.chars() {
        if ch.is_ascii_lowercase() || ch.is_ascii_digit() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.push(ch);
        } else {
            pending_hyphen = true;
        }
    }

    slug
}

/// Builds the collection that results from saving `draft`: an edit replaces
/// the post with the draft's slug (keeping slug and date), a new post is
/// prepended with today's date. Returns the new list and the saved post.
pub fn upsert_post(
    posts: Vec<BlogPost>,
    draft: &PostDraft,
    today: NaiveDate,
) -> Result<(Vec<BlogPost>, BlogPost), AppError> {
    let title = draft.title.trim();
    let summary = draft.summary.trim();
    if title.is_empty() || summary.is_empty() {
        return Err(AppError::bad_request("title and summary are required"));
    }

    match draft.slug.as_deref().map(str::trim).filter(|slug| !slug.is_empty()) {
        Some(slug) => {
            let Some(existing) = posts.iter().find(|post| post.slug == slug) else {
                return Err(AppError::not_found(format!("no post with slug '{slug}'")));
            };
            let saved = BlogPost {
                slug: existing.slug.clone(),
                title: title.to_string(),
                date: existing.date.clone(),
                summary: summary.to_string(),
            };
            let updated = posts
                .into_iter()
                .map(|post| if post.slug == saved.slug { saved.clone() } else { post })
                .collect();
            Ok((updated, saved))
        }
        None => {
            let slug = slugify(title);
            if slug.is_empty() {
                return Err(AppError::bad_request(
                    "title needs at least one letter or digit",
                ));
            }
            if posts.iter().any(|post| post.slug == slug) {
                return Err(AppError::conflict(format!("a post with slug '{slug}' already exists")));
            }
            let saved = BlogPost {
                slug,
                title: title.to_string(),
                date: today.format("%Y-%m-%d").to_string(),
                summary: summary.to_string(),
            };
            let mut updated = Vec::with_capacity(posts.len() + 1);
            updated.push(saved.clone());
            updated.extend(posts);
            Ok((updated, saved))
        }
    }
}

/// Drops the post with `slug`. Returns `None` when no such post exists.
pub fn remove_post(posts: Vec<BlogPost>, slug: &str) -> Option<Vec<BlogPost>> {
    let before = posts.len();
    let remaining: Vec<BlogPost> = posts.into_iter().filter(|post| post.slug != slug).collect();
    (remaining.len() != before).then_some(remaining)
}

/// Stored posts first, then built-ins whose slug is not taken, newest first.
pub fn merge_posts(stored: Vec<BlogPost>, builtin: &[BlogPost]) -> Vec<BlogPost> {
    let taken: HashSet<&str> = stored.iter().map(|post| post.slug.as_str()).collect();
    let extra: Vec<BlogPost> = builtin
        .iter()
        .filter(|post| !taken.contains(post.slug.as_str()))
        .cloned()
        .collect();

    let mut merged = stored;
    merged.extend(extra);
    // ISO dates are zero-padded, so string order is date order.
    merged.sort_by(|a, b| b.date.cmp(&a.date));
    merged
}
