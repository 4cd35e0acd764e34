use actix_web::{App, HttpServer, middleware, web};

use deckhand::config::AppConfig;
use deckhand::handlers;
use deckhand::scheduler;
use deckhand::state::AppState;
use deckhand::storage::OutputDir;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();

    let config = AppConfig::from_env();
    let output = OutputDir::create(&config.generated_dir)?;
    log::info!(
        "Storing presentations in {} (dispatch policy: {})",
        output.path().display(),
        config.dispatch_policy
    );

    match config.cleanup_interval() {
        Some(every) => scheduler::spawn_cleanup(output.clone(), config.cleanup_max_age(), every),
        None => log::warn!("CLEANUP_INTERVAL_SECS is 0, background cleanup disabled"),
    }

    let bind = config.bind_address();
    let json_limit = config.json_limit_bytes;
    let cors_origins = config.cors_allowed_origins.clone();
    log::info!("CORS allowed origins: {}", cors_origins.join(", "));
    let state = web::Data::new(AppState::new(config, output));

    log::info!("Starting server at http://{}:{}", bind.0, bind.1);

    HttpServer::new(move || {
        App::new()
            .wrap(handlers::cors(&cors_origins))
            .wrap(middleware::Logger::default())
            .app_data(state.clone())
            .app_data(handlers::json_config(json_limit))
            .configure(handlers::configure)
            // Default 404 handler (must be registered last)
            .default_service(web::to(handlers::not_found))
    })
    .bind(bind)?
    .run()
    .await
}
