//! Post controller - create, edit and read operations.

use std::sync::Arc;

use crate::domain::{NewPost, Post, PostId};
use crate::error::{ControllerError, ModelError};
use crate::ports::{FLASH_ERROR, PostModel, ResponseContext};

use super::paths;
use super::request::{PostRequest, RouteParams};

/// Flash message shown when a post could not be created.
pub const CREATE_FAILED_MESSAGE: &str = "Could not create post. Please try again.";

/// Post controller over a post model.
///
/// Holds no per-request state; every operation makes at most one model call
/// and takes exactly one terminal response branch.
pub struct PostController<M: ?Sized> {
    model: Arc<M>,
}

impl<M: ?Sized> Clone for PostController<M> {
    fn clone(&self) -> Self {
        Self {
            model: self.model.clone(),
        }
    }
}

impl<M> PostController<M>
where
    M: PostModel + ?Sized,
{
    pub fn new(model: Arc<M>) -> Self {
        Self { model }
    }

    /// Create a post authored by the session user.
    ///
    /// Success sends the post as JSON and redirects to `/posts`.
    /// Failure flashes an error and redirects back to `/posts/add`.
    pub async fn add_post<R>(&self, req: &PostRequest, res: &mut R)
    where
        R: ResponseContext + ?Sized,
    {
        if let Some(claimed) = req.body.author() {
            if claimed != req.session.user {
                tracing::warn!(
                    claimed_author = %claimed,
                    session_user = %req.session.user,
                    "Ignoring submitted author on post creation"
                );
            }
        }

        let attrs = NewPost {
            title: req.body.title().unwrap_or_default().to_string(),
            content: req.body.content().unwrap_or_default().to_string(),
            author: req.session.user.clone(),
        };

        match self.model.create(attrs).await {
            Ok(post) => {
                tracing::info!(post_id = %post.id, author = %post.author, "Post created");
                res.json(&post);
                res.redirect(paths::POSTS);
            }
            Err(e) => {
                tracing::warn!(error = %e, author = %req.session.user, "Post creation failed");
                res.flash(FLASH_ERROR, CREATE_FAILED_MESSAGE);
                res.redirect(paths::ADD_POST);
            }
        }
    }

    /// Forward the submitted body to the model as an update of `params.id`.
    ///
    /// Success redirects to the post, failure back to its edit form.
    pub async fn edit_post<R>(
        &self,
        req: &PostRequest,
        res: &mut R,
    ) -> Result<(), ControllerError>
    where
        R: ResponseContext + ?Sized,
    {
        let id = req.id()?;

        match self.model.update(id, &req.body).await {
            Ok(_) => {
                tracing::info!(post_id = %id, "Post updated");
                res.redirect(&paths::post(id));
            }
            Err(e) => {
                tracing::warn!(post_id = %id, error = %e, "Post update failed");
                res.redirect(&paths::edit_post(id));
            }
        }
        Ok(())
    }

    /// Send the post named by `params.id` as JSON.
    ///
    /// Reading needs no session, so this takes the route parameters only.
    pub async fn show_post<R>(
        &self,
        params: &RouteParams,
        res: &mut R,
    ) -> Result<(), ControllerError>
    where
        R: ResponseContext + ?Sized,
    {
        let id = params.id()?;

        match self.model.find_by_id(id).await {
            Ok(Some(post)) => res.json(&post),
            Ok(None) => {
                res.status(404);
                res.end();
            }
            Err(e) => {
                tracing::error!(post_id = %id, error = %e, "Post lookup failed");
                res.status(500);
                res.end();
            }
        }
        Ok(())
    }

    /// All posts, newest first.
    pub async fn list_posts(&self) -> Result<Vec<Post>, ModelError> {
        self.model.list().await
    }

    /// A single post, if stored.
    pub async fn find_post(&self, id: &PostId) -> Result<Option<Post>, ModelError> {
        self.model.find_by_id(id).await
    }
}
