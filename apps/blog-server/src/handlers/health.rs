//! Health check endpoint.

use actix_web::HttpResponse;

use inkpost_shared::dto::HealthResponse;

use crate::observability::RequestId;

/// Health check endpoint - returns server status.
///
/// GET /api/health
pub async fn health_check(request_id: RequestId) -> HttpResponse {
    tracing::trace!(request_id = %request_id.as_str(), "Health check");

    HttpResponse::Ok().json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
    })
}
