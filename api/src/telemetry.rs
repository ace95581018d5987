//! Tracing setup shared by the server binary, the dev-server, and tests.

use tracing::Subscriber;
use tracing_log::LogTracer;
use tracing_subscriber::{EnvFilter, Registry, fmt, layer::SubscriberExt};

/// Compose a subscriber with env-filterable console output.
///
/// `RUST_LOG` overrides `default_filter` when set.
pub fn get_subscriber(
    default_filter: String,
) -> impl Subscriber + Send + Sync {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter));
    Registry::default().with(env_filter).with(fmt::layer())
}

/// Register a subscriber as the global default, routing `log` records
/// through it as well. Should only be called once.
pub fn init_subscriber(subscriber: impl Subscriber + Send + Sync) {
    LogTracer::init().expect("Failed to set logger");
    tracing::subscriber::set_global_default(subscriber)
        .expect("Failed to set subscriber");
}
