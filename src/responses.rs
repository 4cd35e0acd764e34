//! JSON bodies returned by the HTTP handlers.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::dispatch::{DispatchWarning, Generated, methods_for};
use crate::models::theme::{Brand, theme_for};
use crate::storage::StoredFile;

pub const DOWNLOAD_PREFIX: &str = "/api/presentations/download/";

pub fn download_url(filename: &str) -> String {
    format!("{DOWNLOAD_PREFIX}{filename}")
}

#[derive(Serialize, Debug, Clone)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
    pub code: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn new(code: &'static str, error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: error.into(),
            code,
            details: None,
        }
    }
}

#[derive(Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct GenerateResponse {
    pub success: bool,
    pub filename: String,
    pub slide_count: usize,
    pub size: u64,
    pub download_url: String,
    pub warnings: Vec<DispatchWarning>,
}

impl From<Generated> for GenerateResponse {
    fn from(g: Generated) -> Self {
        GenerateResponse {
            success: true,
            download_url: download_url(&g.filename),
            filename: g.filename,
            slide_count: g.slide_count,
            size: g.size,
            warnings: g.warnings,
        }
    }
}

#[derive(Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct PresentationEntry {
    pub filename: String,
    pub size: u64,
    pub created: DateTime<Utc>,
    pub modified: DateTime<Utc>,
    pub download_url: String,
}

impl From<StoredFile> for PresentationEntry {
    fn from(f: StoredFile) -> Self {
        PresentationEntry {
            download_url: download_url(&f.filename),
            filename: f.filename,
            size: f.size,
            created: f.created,
            modified: f.modified,
        }
    }
}

#[derive(Serialize, Debug, Clone)]
pub struct ListResponse {
    pub success: bool,
    pub count: usize,
    pub presentations: Vec<PresentationEntry>,
}

#[derive(Serialize, Debug, Clone)]
pub struct MessageResponse {
    pub success: bool,
    pub message: String,
}

#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct CleanupRequest {
    pub max_age_days: Option<u32>,
}

#[derive(Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct CleanupResponse {
    pub success: bool,
    pub deleted_count: usize,
    pub message: String,
}

#[derive(Serialize, Debug, Clone)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
    pub timestamp: DateTime<Utc>,
}

#[derive(Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct StorageHealthResponse {
    pub success: bool,
    pub status: &'static str,
    pub generated_dir: String,
    pub presentation_count: usize,
    pub timestamp: DateTime<Utc>,
}

#[derive(Serialize, Debug, Clone)]
pub struct Template {
    pub name: &'static str,
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub description: &'static str,
    pub methods: Vec<&'static str>,
}

impl Template {
    pub fn for_brand(brand: Brand) -> Self {
        let theme = theme_for(brand);
        Template {
            name: theme.name,
            kind: brand.key(),
            description: theme.description,
            methods: methods_for(brand).map(|m| m.name).collect(),
        }
    }
}

#[derive(Serialize, Debug, Clone)]
pub struct TemplatesResponse {
    pub success: bool,
    pub templates: Vec<Template>,
}
