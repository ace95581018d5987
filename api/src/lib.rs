pub mod headers;
pub mod routes;
pub mod store;
pub mod telemetry;

use std::net::TcpListener;
use std::path::PathBuf;

use actix_cors::Cors;
use actix_web::dev::Server;
use actix_web::middleware::{DefaultHeaders, from_fn};
use actix_web::{App, HttpServer, web};

use crate::store::CheckStore;

/// Runtime configuration, loaded from the environment.
pub struct Config {
    /// set to "0.0.0.0" for public access, "127.0.0.1" for local dev
    pub ip: String,
    /// set to 0 to get an os-assigned port
    pub port: u16,
    /// List of allowed CORS origins. Use "*" to allow any origin (development only)
    pub allowed_origins: Vec<String>,
    /// Directory of built UI assets to serve at the root, if any
    pub assets_dir: Option<PathBuf>,
}

impl Config {
    pub fn from_env() -> Self {
        use std::env::var;

        let allowed_origins = var("ALLOWED_ORIGINS")
            .unwrap_or_else(|_| "*".to_string()) // Default to allow any origin for development
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        Config {
            ip: var("IP_ADDRESS").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: var("PORT")
                .ok()
                .and_then(|port| port.parse().ok())
                .unwrap_or(8000),
            allowed_origins,
            assets_dir: var("ASSETS_DIR").ok().map(PathBuf::from),
        }
    }
}

/// Build the server, but not await it.
///
/// Returns the port that the server has bound to by modifying the config.
pub fn build(
    config: &mut Config,
    store: CheckStore,
) -> std::io::Result<Server> {
    let store = web::Data::new(store);

    // Clone config values for use in closure
    let allowed_origins = config.allowed_origins.clone();
    let assets_dir = config.assets_dir.clone();

    // OS assigns the port if binding to 0
    let listener = TcpListener::bind(format!("{}:{}", config.ip, config.port))?;
    config.port = listener.local_addr()?.port();
    let server = HttpServer::new(move || {
        // Configure CORS based on allowed origins
        let cors = if allowed_origins.contains(&"*".to_string()) {
            // Allow any origin (for development)
            Cors::default()
                .allow_any_origin()
                .allow_any_method()
                .allow_any_header()
                .supports_credentials()
        } else {
            // Production: Only allow specified origins
            let mut cors = Cors::default()
                .allow_any_method()
                .allow_any_header()
                .supports_credentials();

            for origin in &allowed_origins {
                cors = cors.allowed_origin(origin);
            }
            cors
        };

        let mut app = App::new()
            .wrap(cors)
            // Every path carries the permissions policy
            .wrap(
                DefaultHeaders::new()
                    .add(("Permissions-Policy", headers::PERMISSIONS_POLICY)),
            )
            .wrap(from_fn(headers::asset_cache_headers))
            .service(routes::api_services())
            .app_data(store.clone());
        if let Some(dir) = &assets_dir {
            app = app.service(
                actix_files::Files::new("/", dir).index_file("index.html"),
            );
        }
        app
    })
    .listen(listener)?
    .run();
    Ok(server)
}
