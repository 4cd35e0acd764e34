//! Process configuration, read once from the environment at startup.

use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use crate::models::dispatch::DispatchPolicy;

const DEFAULT_JSON_LIMIT: usize = 50 * 1024 * 1024;
pub const ANY_ORIGIN: &str = "*";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub generated_dir: PathBuf,
    pub dispatch_policy: DispatchPolicy,
    pub cleanup_max_age_days: u32,
    /// Zero disables the background cleanup task.
    pub cleanup_interval_secs: u64,
    pub json_limit_bytes: usize,
    /// Browser origins allowed to call the API. `*` allows any origin.
    pub cors_allowed_origins: Vec<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            generated_dir: PathBuf::from("./generated"),
            dispatch_policy: DispatchPolicy::Strict,
            cleanup_max_age_days: 7,
            cleanup_interval_secs: 3600,
            json_limit_bytes: DEFAULT_JSON_LIMIT,
            cors_allowed_origins: vec![ANY_ORIGIN.to_string()],
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup. Unparseable values keep their default.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            host: lookup("HOST")
                .filter(|h| !h.trim().is_empty())
                .unwrap_or(defaults.host),
            port: parsed(&lookup, "PORT", defaults.port),
            generated_dir: lookup("GENERATED_DIR")
                .filter(|d| !d.trim().is_empty())
                .map(PathBuf::from)
                .unwrap_or(defaults.generated_dir),
            dispatch_policy: parsed(&lookup, "DISPATCH_POLICY", defaults.dispatch_policy),
            cleanup_max_age_days: parsed(&lookup, "CLEANUP_MAX_AGE_DAYS", defaults.cleanup_max_age_days),
            cleanup_interval_secs: parsed(&lookup, "CLEANUP_INTERVAL_SECS", defaults.cleanup_interval_secs),
            json_limit_bytes: parsed(&lookup, "JSON_LIMIT_BYTES", defaults.json_limit_bytes),
            cors_allowed_origins: lookup("CORS_ALLOWED_ORIGINS")
                .and_then(|raw| origins(&raw))
                .unwrap_or(defaults.cors_allowed_origins),
        }
    }

    pub fn bind_address(&self) -> (String, u16) {
        (self.host.clone(), self.port)
    }

    pub fn cleanup_max_age(&self) -> chrono::Duration {
        chrono::Duration::days(i64::from(self.cleanup_max_age_days))
    }

    pub fn cleanup_interval(&self) -> Option<Duration> {
        (self.cleanup_interval_secs > 0).then(|| Duration::from_secs(self.cleanup_interval_secs))
    }
}

fn parsed<T: FromStr>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> T {
    match lookup(key) {
        None => default,
        Some(raw) => match raw.trim().parse() {
            Ok(value) => value,
            Err(_) => {
                log::warn!("Ignoring invalid {}={:?}, using default", key, raw);
                default
            }
        },
    }
}

/// Comma-separated origins. Entries that are not `*` or an absolute
/// `scheme://host[:port]` are dropped; `None` when nothing usable remains.
fn origins(raw: &str) -> Option<Vec<String>> {
    let mut kept = Vec::new();
    for entry in raw.split(',').map(str::trim).filter(|e| !e.is_empty()) {
        let valid = entry == ANY_ORIGIN
            || entry
                .parse::<actix_web::http::Uri>()
                .is_ok_and(|uri| uri.scheme().is_some() && uri.host().is_some());
        if valid {
            kept.push(entry.trim_end_matches('/').to_string());
        } else {
            log::warn!("Ignoring invalid CORS origin {:?}", entry);
        }
    }
    if kept.is_empty() {
        log::warn!("CORS_ALLOWED_ORIGINS has no usable origin, using default");
        return None;
    }
    Some(kept)
}
