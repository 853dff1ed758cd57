//! Post deletion.
//!
//! `PostDeleter::delete` has no working default: a deleter that does not
//! override it fails with [`NotImplementedError`] before touching the model or
//! the response.

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::{ControllerError, ModelError, NotImplementedError};
use crate::ports::{FLASH_ERROR, PostModel, ResponseContext};

use super::paths;
use super::request::PostRequest;

/// Flash message shown when a post could not be deleted.
pub const DELETE_FAILED_MESSAGE: &str = "Could not delete post. Please try again.";

/// Deletes the post named by a request.
#[async_trait]
pub trait PostDeleter: Send + Sync {
    /// Delete the post named by `req.params.id`.
    ///
    /// Implementors must override this.
    async fn delete(
        &self,
        _req: &PostRequest,
        _res: &mut dyn ResponseContext,
    ) -> Result<(), ControllerError> {
        Err(NotImplementedError::default().into())
    }
}

/// Deleter without an override.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnimplementedPostDeleter;

impl PostDeleter for UnimplementedPostDeleter {}

/// Deleter backed by a post model.
pub struct ModelPostDeleter<M: ?Sized> {
    model: Arc<M>,
}

impl<M: ?Sized> ModelPostDeleter<M> {
    pub fn new(model: Arc<M>) -> Self {
        Self { model }
    }
}

#[async_trait]
impl<M> PostDeleter for ModelPostDeleter<M>
where
    M: PostModel + ?Sized,
{
    async fn delete(
        &self,
        req: &PostRequest,
        res: &mut dyn ResponseContext,
    ) -> Result<(), ControllerError> {
        let id = req.id()?;

        match self.model.delete(id).await {
            Ok(()) => {
                tracing::info!(post_id = %id, user = %req.session.user, "Post deleted");
                res.redirect(paths::POSTS);
            }
            Err(ModelError::NotFound) => {
                tracing::debug!(post_id = %id, "Delete of unknown post");
                res.status(404);
                res.end();
            }
            Err(e) => {
                tracing::warn!(post_id = %id, error = %e, "Post deletion failed");
                res.flash(FLASH_ERROR, DELETE_FAILED_MESSAGE);
                res.redirect(&paths::post(id));
            }
        }
        Ok(())
    }
}
