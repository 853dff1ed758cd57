//! Ports - trait definitions for external dependencies.
//! These are the "interfaces" that infrastructure must implement.

mod auth;
mod model;
mod response;

pub use auth::{AuthError, TokenClaims, TokenService};
pub use model::PostModel;
pub use response::{FLASH_ERROR, ResponseContext};
