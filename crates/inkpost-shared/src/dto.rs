//! Data Transfer Objects - request/response types for the HTTP surface.

use serde::{Deserialize, Serialize};

/// Body of `POST /posts/add`.
///
/// `author` is accepted for form compatibility but the server always uses the
/// session user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePostForm {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    pub title: String,
    #[serde(default)]
    pub content: String,
}

/// Body of `POST /posts/edit/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EditPostForm {
    pub title: String,
    pub content: String,
}

/// Response of `GET /api/health`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: String,
}
