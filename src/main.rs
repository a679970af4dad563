use actix_cors::Cors;
use actix_web::{web, App, HttpServer, middleware};
use octava_match::config::{LogFormat, Settings};
use octava_match::core::CollaboratorRanker;
use octava_match::routes::{self, collaborators::AppState};
use octava_match::services::{CachedProfileStore, RestProfileStore};
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, error};
use tracing_subscriber::EnvFilter;

fn init_logging(level: &str, format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true);

    match format {
        LogFormat::Json => subscriber.json().init(),
        LogFormat::Pretty => subscriber.pretty().init(),
        LogFormat::Compact => subscriber.compact().init(),
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    let settings = Settings::load().map_err(|e| {
        eprintln!("Failed to load configuration: {}", e);
        std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string())
    })?;

    init_logging(&settings.logging.level, settings.logging.log_format());

    info!("Starting Octava collaborator ranking service...");

    let timeout = Duration::from_secs(settings.backend.timeout_secs.unwrap_or(30));
    let rest = RestProfileStore::new(
        settings.backend.url.clone(),
        settings.backend.api_key.clone(),
        settings.backend.profiles_table.clone(),
        settings.backend.visibility_column.clone(),
        timeout,
    )
    .map_err(|e| {
        error!("Failed to create backend client: {}", e);
        std::io::Error::new(std::io::ErrorKind::Other, e.to_string())
    })?;

    info!("Profile store initialized (table: {})", settings.backend.profiles_table);

    let store = CachedProfileStore::new(rest, settings.cache.max_entries, settings.cache.ttl_secs);

    info!(
        "Requester cache initialized ({} entries, TTL: {}s)",
        settings.cache.max_entries, settings.cache.ttl_secs
    );

    let app_state = AppState {
        store: Arc::new(store),
        ranker: CollaboratorRanker::new(),
        ranking: settings.ranking.clone(),
    };

    let host = settings.server.host.clone();
    let port = settings.server.port;
    let workers = settings.server.workers.unwrap_or(4);

    info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .app_data(routes::json_config())
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            .configure(routes::configure_routes)
    })
    .workers(workers)
    .bind((host, port))?
    .run()
    .await
}
