use std::sync::Arc;

use crate::config::AppConfig;
use crate::storage::OutputDir;
use crate::writer::{DocumentWriter, PptxWriter};

/// Shared, read-only application state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub output: OutputDir,
    pub writer: Arc<dyn DocumentWriter>,
}

impl AppState {
    pub fn new(config: AppConfig, output: OutputDir) -> Self {
        Self::with_writer(config, output, Arc::new(PptxWriter::new()))
    }

    pub fn with_writer(config: AppConfig, output: OutputDir, writer: Arc<dyn DocumentWriter>) -> Self {
        Self {
            config: Arc::new(config),
            output,
            writer,
        }
    }
}
