//! Post model port - the persistence abstraction for posts.

use async_trait::async_trait;

use crate::domain::{NewPost, Post, PostFields, PostId};
use crate::error::ModelError;

/// Persistence operations for posts.
///
/// Every call completes exactly once with either the result or a `ModelError`.
#[async_trait]
pub trait PostModel: Send + Sync {
    /// Persist a new post, assigning its id and date.
    async fn create(&self, attrs: NewPost) -> Result<Post, ModelError>;

    /// Apply submitted fields to an existing post.
    /// The model decides which fields are mutable.
    async fn update(&self, id: &PostId, attrs: &PostFields) -> Result<Post, ModelError>;

    /// Remove a post.
    async fn delete(&self, id: &PostId) -> Result<(), ModelError>;

    /// Find a post by its id.
    async fn find_by_id(&self, id: &PostId) -> Result<Option<Post>, ModelError>;

    /// All posts, newest first.
    async fn list(&self) -> Result<Vec<Post>, ModelError>;
}
