//! PostgreSQL post model.

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, ActiveValue, DbConn, DbErr, EntityTrait, QueryOrder};

use inkpost_core::domain::{NewPost, Post, PostFields, PostId};
use inkpost_core::error::ModelError;
use inkpost_core::ports::PostModel;

use super::entity::post::{self, Entity as PostEntity};

/// Post model backed by the `posts` table.
pub struct PostgresPostModel {
    db: DbConn,
}

impl PostgresPostModel {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }
}

fn map_db_err(err: DbErr) -> ModelError {
    match err {
        DbErr::RecordNotFound(_) | DbErr::RecordNotUpdated => ModelError::NotFound,
        DbErr::Conn(e) => ModelError::Connection(e.to_string()),
        other => {
            let err_str = other.to_string();
            if err_str.contains("duplicate") || err_str.contains("unique") {
                ModelError::Constraint("Entity already exists".to_string())
            } else {
                ModelError::Query(err_str)
            }
        }
    }
}

#[async_trait]
impl PostModel for PostgresPostModel {
    async fn create(&self, attrs: NewPost) -> Result<Post, ModelError> {
        attrs.validate()?;

        let active_model: post::ActiveModel = Post::new(attrs).into();
        let model = active_model.insert(&self.db).await.map_err(map_db_err)?;

        tracing::debug!(post_id = %model.id, "Inserted post");
        Ok(model.into())
    }

    async fn update(&self, id: &PostId, attrs: &PostFields) -> Result<Post, ModelError> {
        let mut post: Post = PostEntity::find_by_id(id.as_str().to_string())
            .one(&self.db)
            .await
            .map_err(map_db_err)?
            .ok_or(ModelError::NotFound)?
            .into();

        post.apply(attrs)?;

        // Only title and content are written back
        let active_model = post::ActiveModel {
            id: ActiveValue::Unchanged(post.id.as_str().to_string()),
            title: ActiveValue::Set(post.title),
            content: ActiveValue::Set(post.content),
            author: ActiveValue::Unchanged(post.author),
            date: ActiveValue::Unchanged(post.date.into()),
        };

        let model = active_model.update(&self.db).await.map_err(map_db_err)?;
        Ok(model.into())
    }

    async fn delete(&self, id: &PostId) -> Result<(), ModelError> {
        let result = PostEntity::delete_by_id(id.as_str().to_string())
            .exec(&self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(ModelError::NotFound);
        }

        Ok(())
    }

    async fn find_by_id(&self, id: &PostId) -> Result<Option<Post>, ModelError> {
        let result = PostEntity::find_by_id(id.as_str().to_string())
            .one(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(result.map(Into::into))
    }

    async fn list(&self) -> Result<Vec<Post>, ModelError> {
        let result = PostEntity::find()
            .order_by_desc(post::Column::Date)
            .all(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(result.into_iter().map(Into::into).collect())
    }
}
