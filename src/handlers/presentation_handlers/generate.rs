use actix_web::{web, HttpResponse};
use chrono::Utc;
use serde::Deserialize;

use crate::errors::AppError;
use crate::models::dispatch::{self, Instruction};
use crate::models::presentation::PresentationConfig;
use crate::responses::GenerateResponse;
use crate::state::AppState;

#[derive(Deserialize, Debug)]
pub struct GenerateRequest {
    #[serde(rename = "type")]
    pub presentation_type: Option<String>,
    #[serde(default)]
    pub config: Option<PresentationConfig>,
    pub slides: Option<Vec<Instruction>>,
}

/// POST /api/presentations/generate
/// Renders the instruction list into a deck and stores it.
pub async fn generate(
    state: web::Data<AppState>,
    body: web::Json<GenerateRequest>,
) -> Result<HttpResponse, AppError> {
    let request = body.into_inner();
    let (Some(presentation_type), Some(slides)) = (request.presentation_type, request.slides) else {
        return Err(AppError::BadRequest("Missing required fields: type and slides".to_string()));
    };
    let config = request.config.unwrap_or_default();

    log::info!("Generating {} presentation with {} slides", presentation_type, slides.len());

    let policy = state.config.dispatch_policy;
    let writer = state.writer.clone();
    let output = state.output.clone();
    let generated = web::block(move || {
        dispatch::generate(
            &presentation_type,
            &config,
            &slides,
            policy,
            writer.as_ref(),
            &output,
            Utc::now(),
        )
    })
    .await??;

    Ok(HttpResponse::Ok().json(GenerateResponse::from(generated)))
}
