pub mod presentation_handlers;
pub mod root;

use actix_web::{
    web, Error, HttpRequest, HttpResponse,
    body::MessageBody,
    dev::{ServiceRequest, ServiceResponse},
    error::{InternalError, JsonPayloadError},
    middleware::Next,
};

use actix_cors::Cors;

use crate::config::ANY_ORIGIN;
use crate::responses::ErrorResponse;

/// Rejects POST requests whose Content-Type is not application/json.
async fn require_json_content_type(
    req: ServiceRequest,
    next: Next<impl MessageBody + 'static>,
) -> Result<ServiceResponse<impl MessageBody>, Error> {
    if req.method() == actix_web::http::Method::POST {
        let content_type = req
            .headers()
            .get("content-type")
            .and_then(|v| v.to_str().ok())
            .unwrap_or("");

        if !content_type.starts_with("application/json") {
            let body = ErrorResponse::new("UnsupportedContentType", "Content-Type must be application/json");
            let response = HttpResponse::BadRequest().json(body);
            return Ok(req.into_response(response).map_into_right_body());
        }
    }

    next.call(req).await.map(|res| res.map_into_left_body())
}

/// JSON extractor settings: body limit plus a JSON 400 for unreadable bodies.
pub fn json_config(limit: usize) -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(limit)
        .error_handler(|err: JsonPayloadError, _req: &HttpRequest| {
            log::error!("Rejected request body: {err}");
            let response = HttpResponse::BadRequest().json(ErrorResponse::new("InvalidRequestBody", err.to_string()));
            InternalError::from_response(err, response).into()
        })
}

/// Cross-origin policy for browser clients. `*` in `origins` allows any origin.
pub fn cors(origins: &[String]) -> Cors {
    let cors = Cors::default()
        .allowed_methods(["GET", "POST", "DELETE", "OPTIONS"])
        .allow_any_header()
        .max_age(3600);
    if origins.iter().any(|o| o == ANY_ORIGIN) {
        cors.allow_any_origin().send_wildcard()
    } else {
        origins.iter().fold(cors, |cors, origin| cors.allowed_origin(origin))
    }
}

/// Fallback for unknown routes.
pub async fn not_found(req: HttpRequest) -> HttpResponse {
    HttpResponse::NotFound().json(ErrorResponse::new(
        "NotFound",
        format!("No route for {} {}", req.method(), req.path()),
    ))
}

/// Configure every route of the service.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(root::index));
    cfg.route("/health", web::get().to(root::health));
    cfg.service(
        web::scope("/api/presentations")
            .wrap(actix_web::middleware::from_fn(require_json_content_type))
            .route("/generate", web::post().to(presentation_handlers::generate))
            .route("/list", web::get().to(presentation_handlers::list))
            .route("/download/{filename}", web::get().to(presentation_handlers::download))
            .route("/delete/{filename}", web::delete().to(presentation_handlers::delete))
            .route("/cleanup", web::post().to(presentation_handlers::cleanup))
            .route("/health", web::get().to(presentation_handlers::health))
            .route("/templates", web::get().to(presentation_handlers::templates))
    );
}
