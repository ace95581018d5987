use api::store::CheckStore;
use api::telemetry::{get_subscriber, init_subscriber};
use api::{Config, build};
use tracing::info;

/// VHC API Server
///
/// Environment variables can be set directly or loaded from a .env file in the project root.
///
/// - IP_ADDRESS: Server bind address (127.0.0.1 for local, 0.0.0.0 for public)
/// - PORT: Server port
/// - ALLOWED_ORIGINS: CORS origins ("*" for any origin in development, or comma-separated list for production)
/// - ASSETS_DIR: Directory of built UI assets to serve at the root (optional)
///
/// Example .env file:
/// IP_ADDRESS=127.0.0.1
/// PORT=8000
/// ALLOWED_ORIGINS=*
/// ASSETS_DIR=ui/dist
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load environment variables from .env file if available
    // This will silently ignore if the file doesn't exist
    let _ = dotenvy::dotenv();

    let subscriber = get_subscriber("info".into());
    init_subscriber(subscriber);

    let mut config = Config::from_env();
    let store = CheckStore::default();

    let server = build(&mut config, store)?;
    info!("listening on {}:{}", config.ip, config.port);
    server.await
}
