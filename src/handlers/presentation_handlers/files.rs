use actix_files::NamedFile;
use actix_web::http::header::{self, ContentDisposition, DispositionParam, DispositionType, HeaderValue};
use actix_web::{web, HttpRequest, HttpResponse};
use chrono::Utc;

use crate::errors::AppError;
use crate::responses::{CleanupRequest, CleanupResponse, ListResponse, MessageResponse, PresentationEntry};
use crate::state::AppState;
use crate::writer::DECK_CONTENT_TYPE;

/// GET /api/presentations/list
pub async fn list(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let output = state.output.clone();
    let files = web::block(move || output.list()).await??;
    let presentations: Vec<PresentationEntry> = files.into_iter().map(PresentationEntry::from).collect();

    Ok(HttpResponse::Ok().json(ListResponse {
        success: true,
        count: presentations.len(),
        presentations,
    }))
}

/// GET /api/presentations/download/{filename}
pub async fn download(
    req: HttpRequest,
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let filename = path.into_inner();
    let file_path = state.output.resolve(&filename)?;

    let file = NamedFile::open_async(file_path).await?.set_content_disposition(ContentDisposition {
        disposition: DispositionType::Attachment,
        parameters: vec![DispositionParam::Filename(filename)],
    });
    let mut response = file.into_response(&req);
    response
        .headers_mut()
        .insert(header::CONTENT_TYPE, HeaderValue::from_static(DECK_CONTENT_TYPE));
    Ok(response)
}

/// DELETE /api/presentations/delete/{filename}
pub async fn delete(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let filename = path.into_inner();
    let output = state.output.clone();
    let name = filename.clone();
    web::block(move || output.delete(&name)).await??;

    Ok(HttpResponse::Ok().json(MessageResponse {
        success: true,
        message: format!("Presentation {filename} deleted successfully"),
    }))
}

/// POST /api/presentations/cleanup
/// Body `{maxAgeDays?}`; the configured age applies when the body is empty
/// or the field is absent. Anything unreadable is rejected.
pub async fn cleanup(
    state: web::Data<AppState>,
    body: web::Bytes,
) -> Result<HttpResponse, AppError> {
    let request = parse_cleanup_request(&body)?;
    let days = request.max_age_days.unwrap_or(state.config.cleanup_max_age_days);
    let max_age = chrono::Duration::days(i64::from(days));
    let output = state.output.clone();
    let deleted = web::block(move || output.cleanup(max_age, Utc::now())).await??;

    log::info!("Manual cleanup removed {} presentations older than {} days", deleted, days);
    Ok(HttpResponse::Ok().json(CleanupResponse {
        success: true,
        deleted_count: deleted,
        message: format!("Deleted {deleted} presentations older than {days} days"),
    }))
}

fn parse_cleanup_request(body: &[u8]) -> Result<CleanupRequest, AppError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(CleanupRequest::default());
    }
    serde_json::from_slice(body).map_err(|e| AppError::InvalidBody(e.to_string()))
}
