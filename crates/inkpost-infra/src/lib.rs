//! # Inkpost Infrastructure
//!
//! Concrete implementations of the ports defined in `inkpost-core`.
//!
//! ## Feature Flags
//!
//! - `full` (default) - All features enabled
//! - `minimal` - No external dependencies, in-memory only
//! - `postgres` - PostgreSQL post model via SeaORM
//! - `auth` - JWT session tokens

pub mod database;
pub mod model;

#[cfg(feature = "auth")]
pub mod auth;

pub use database::DatabaseConfig;
pub use model::InMemoryPostModel;

#[cfg(feature = "postgres")]
pub use database::PostgresPostModel;

#[cfg(feature = "auth")]
pub use auth::{JwtConfig, JwtTokenService};
