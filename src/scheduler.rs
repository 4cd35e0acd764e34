use std::time::Duration;

use chrono::Utc;

use crate::storage::OutputDir;

/// Periodically delete decks older than `max_age`.
pub fn spawn_cleanup(output: OutputDir, max_age: chrono::Duration, every: Duration) {
    actix_web::rt::spawn(async move {
        let mut interval = tokio::time::interval(every);
        loop {
            interval.tick().await;
            log::info!("Running presentation cleanup in {}", output.path().display());
            let dir = output.clone();
            match actix_web::web::block(move || dir.cleanup(max_age, Utc::now())).await {
                Ok(Ok(deleted)) => log::info!("Cleanup removed {} old presentations", deleted),
                Ok(Err(e)) => log::error!("Presentation cleanup failed: {}", e),
                Err(e) => log::error!("Presentation cleanup task failed: {}", e),
            }
        }
    });
}
