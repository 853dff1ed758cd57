//! # Inkpost Shared
//!
//! Wire types shared between the blog server and its clients.

pub mod dto;
pub mod response;

pub use response::{ApiResponse, ErrorResponse};
