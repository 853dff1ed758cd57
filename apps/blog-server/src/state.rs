//! Application state - shared across all handlers.

use std::sync::Arc;

use inkpost_core::PostController;
use inkpost_core::controller::{ModelPostDeleter, PostDeleter, UnimplementedPostDeleter};
use inkpost_core::ports::{PostModel, TokenService};
use inkpost_infra::{InMemoryPostModel, JwtTokenService};

#[cfg(feature = "postgres")]
use inkpost_infra::PostgresPostModel;

use crate::config::AppConfig;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub posts: PostController<dyn PostModel>,
    pub deleter: Arc<dyn PostDeleter>,
    pub tokens: Arc<dyn TokenService>,
}

impl AppState {
    /// Build the application state with appropriate implementations.
    pub async fn new(config: &AppConfig) -> Self {
        let model = Self::init_model(config).await;
        let tokens: Arc<dyn TokenService> = Arc::new(JwtTokenService::new(config.jwt.clone()));

        let state = Self::with_model(model, tokens, config.delete_enabled);
        tracing::info!(
            delete_enabled = config.delete_enabled,
            "Application state initialized"
        );
        state
    }

    /// Assemble state around an already-built model.
    pub fn with_model(
        model: Arc<dyn PostModel>,
        tokens: Arc<dyn TokenService>,
        delete_enabled: bool,
    ) -> Self {
        let deleter: Arc<dyn PostDeleter> = if delete_enabled {
            Arc::new(ModelPostDeleter::new(model.clone()))
        } else {
            Arc::new(UnimplementedPostDeleter)
        };

        Self {
            posts: PostController::new(model),
            deleter,
            tokens,
        }
    }

    #[cfg(feature = "postgres")]
    async fn init_model(config: &AppConfig) -> Arc<dyn PostModel> {
        let Some(db_config) = config.database.as_ref() else {
            tracing::warn!("DATABASE_URL not set. Running without database (in-memory mode).");
            return Arc::new(InMemoryPostModel::new());
        };

        match inkpost_infra::database::connect(db_config).await {
            Ok(conn) => Arc::new(PostgresPostModel::new(conn)),
            Err(e) => {
                tracing::error!(
                    "Failed to connect to database: {}. Using in-memory fallback.",
                    e
                );
                Arc::new(InMemoryPostModel::new())
            }
        }
    }

    #[cfg(not(feature = "postgres"))]
    async fn init_model(_config: &AppConfig) -> Arc<dyn PostModel> {
        tracing::info!("Running without postgres feature - using in-memory post model");
        Arc::new(InMemoryPostModel::new())
    }
}
