use chrono::{DateTime, Utc};
use rand::Rng;

use crate::models::theme::Brand;
use crate::writer::DECK_EXTENSION;

const MAX_ORG_LEN: usize = 48;

/// `{brand}_{org}_{YYYYMMDD-HHMMSS}_{8 hex}.pptx`
///
/// The random suffix keeps names unique for concurrent requests within the
/// same second.
pub fn generate_filename(brand: Brand, organisation: &str, now: DateTime<Utc>) -> String {
    let mut org = sanitize(organisation);
    if org.is_empty() {
        org = brand.key().to_string();
    }
    let token: [u8; 4] = rand::rng().random();
    format!(
        "{}_{}_{}_{}.{}",
        brand.key(),
        org,
        now.format("%Y%m%d-%H%M%S"),
        hex::encode(token),
        DECK_EXTENSION
    )
}

/// Keep `[A-Za-z0-9_]`, replace everything else with `_`, cap the length.
fn sanitize(organisation: &str) -> String {
    organisation
        .trim()
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '_' { c } else { '_' })
        .take(MAX_ORG_LEN)
        .collect()
}

/// Accept only plain `.pptx` names that resolve inside the output directory.
pub fn validate_filename(name: &str) -> Result<(), String> {
    if name.is_empty() {
        return Err("Filename is empty".to_string());
    }
    if name.contains('/') || name.contains('\\') || name.contains('\0') {
        return Err("Filename must not contain path separators".to_string());
    }
    if name.contains("..") {
        return Err("Filename must not contain '..'".to_string());
    }
    if name.starts_with('.') {
        return Err("Filename must not start with '.'".to_string());
    }
    let has_extension = name
        .rsplit_once('.')
        .is_some_and(|(stem, ext)| !stem.is_empty() && ext == DECK_EXTENSION);
    if !has_extension {
        return Err(format!("Only .{DECK_EXTENSION} files are allowed"));
    }
    Ok(())
}
