//! In-memory post model - used when no database is configured.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use inkpost_core::domain::{NewPost, Post, PostFields, PostId};
use inkpost_core::error::ModelError;
use inkpost_core::ports::PostModel;

/// In-memory post store using a HashMap with async RwLock.
///
/// Note: Data is lost on process restart.
pub struct InMemoryPostModel {
    store: RwLock<HashMap<PostId, Post>>,
}

impl InMemoryPostModel {
    pub fn new() -> Self {
        Self {
            store: RwLock::new(HashMap::new()),
        }
    }

    /// Number of stored posts.
    pub async fn len(&self) -> usize {
        self.store.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.store.read().await.is_empty()
    }
}

impl Default for InMemoryPostModel {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PostModel for InMemoryPostModel {
    async fn create(&self, attrs: NewPost) -> Result<Post, ModelError> {
        attrs.validate()?;

        let post = Post::new(attrs);
        let mut store = self.store.write().await;
        if store.contains_key(&post.id) {
            return Err(ModelError::Constraint("Entity already exists".to_string()));
        }
        store.insert(post.id.clone(), post.clone());

        tracing::debug!(post_id = %post.id, "Stored post in memory");
        Ok(post)
    }

    async fn update(&self, id: &PostId, attrs: &PostFields) -> Result<Post, ModelError> {
        let mut store = self.store.write().await;
        let post = store.get_mut(id).ok_or(ModelError::NotFound)?;

        // Validate against a copy so a rejected update leaves the stored post untouched
        let mut updated = post.clone();
        updated.apply(attrs)?;
        *post = updated.clone();

        Ok(updated)
    }

    async fn delete(&self, id: &PostId) -> Result<(), ModelError> {
        let mut store = self.store.write().await;
        store.remove(id).map(|_| ()).ok_or(ModelError::NotFound)
    }

    async fn find_by_id(&self, id: &PostId) -> Result<Option<Post>, ModelError> {
        let store = self.store.read().await;
        Ok(store.get(id).cloned())
    }

    async fn list(&self) -> Result<Vec<Post>, ModelError> {
        let store = self.store.read().await;
        let mut posts: Vec<Post> = store.values().cloned().collect();
        posts.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(posts)
    }
}
