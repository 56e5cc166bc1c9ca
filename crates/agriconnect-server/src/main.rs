//! AgriConnect server - Entry point.

use agri_assistant::{Assistant, Connectivity};
use agriconnect_server::{
    api::{create_router, AppState},
    config::Config,
};
use session_store::{FileStorage, MemoryStorage, SessionStore};
use tokio::net::TcpListener;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() {
    // Load configuration
    let config = match Config::load() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {:#}", e);
            std::process::exit(1);
        }
    };

    // Initialize logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log.level));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting AgriConnect server");

    // Initialize session storage
    let policy = config.credentials.policy();
    let session = if config.storage.persist {
        SessionStore::with_policy(FileStorage::new(config.storage.path.clone()), policy)
    } else {
        info!("Persistence disabled, using in-memory storage");
        SessionStore::with_policy(MemoryStorage::new(), policy)
    };

    // Initialize assistant
    let connectivity = if config.assistant.offline {
        Connectivity::Offline
    } else {
        Connectivity::Online
    };
    let assistant = Assistant::new(connectivity).with_reply_delay(config.assistant.reply_delay);

    let app = create_router(AppState::new(session, assistant));

    // Bind to address
    let addr = config.server.socket_addr();

    info!("Listening on {}", addr);

    let listener = match TcpListener::bind(addr).await {
        Ok(l) => l,
        Err(e) => {
            error!("Failed to bind to {}: {}", addr, e);
            std::process::exit(1);
        }
    };

    let shutdown = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("Failed to listen for shutdown signal: {}", e);
        }
        info!("Shutdown signal received");
    };

    // Run server
    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
    {
        error!("Server error: {}", e);
        std::process::exit(1);
    }
}
