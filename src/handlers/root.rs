use actix_web::HttpResponse;
use chrono::Utc;

use crate::responses::HealthResponse;

pub const SERVICE_NAME: &str = "deckhand";

/// GET /
pub async fn index() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "service": SERVICE_NAME,
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "health": "GET /health",
            "generate": "POST /api/presentations/generate",
            "list": "GET /api/presentations/list",
            "download": "GET /api/presentations/download/{filename}",
            "delete": "DELETE /api/presentations/delete/{filename}",
            "cleanup": "POST /api/presentations/cleanup",
            "storageHealth": "GET /api/presentations/health",
            "templates": "GET /api/presentations/templates",
        }
    }))
}

/// GET /health
pub async fn health() -> HttpResponse {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy",
        service: SERVICE_NAME,
        timestamp: Utc::now(),
    })
}
