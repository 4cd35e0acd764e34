use actix_web::{web, HttpResponse};
use chrono::Utc;

use crate::errors::AppError;
use crate::models::theme::Brand;
use crate::responses::{StorageHealthResponse, Template, TemplatesResponse};
use crate::state::AppState;

/// GET /api/presentations/health
pub async fn health(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let output = state.output.clone();
    let stats = web::block(move || output.stats()).await??;

    Ok(HttpResponse::Ok().json(StorageHealthResponse {
        success: true,
        status: "healthy",
        generated_dir: state.output.path().display().to_string(),
        presentation_count: stats.presentation_count,
        timestamp: Utc::now(),
    }))
}

/// GET /api/presentations/templates
pub async fn templates() -> HttpResponse {
    HttpResponse::Ok().json(TemplatesResponse {
        success: true,
        templates: Brand::ALL.into_iter().map(Template::for_brand).collect(),
    })
}
