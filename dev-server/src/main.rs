//! Development server for VHC UI development
//!
//! This binary starts a persistent API server with a seeded spread of
//! check reports so the frontend has realistic data to page and filter
//! through.
//!
//! Usage: cargo run -p dev-server

use anyhow::Result;
use test_helpers::mock::DevDataset;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    let subscriber = api::telemetry::get_subscriber("info".into());
    api::telemetry::init_subscriber(subscriber);

    info!("🚀 Starting VHC development server");

    let app = test_helpers::spawn_app().await;
    info!("✅ API server running on http://127.0.0.1:{}", app.port);

    info!("📊 Seeding development check reports...");
    let dataset = DevDataset::create(&app);

    info!("🎯 Development server ready!");
    info!("   API: http://127.0.0.1:{}", app.port);
    info!(
        "   UI:  cd ui && BACKEND_URL=http://127.0.0.1:{} trunk serve",
        app.port
    );
    info!("");
    dataset.print_summary();
    info!("");
    info!("👋 Press Ctrl+C to shutdown");

    // Keep server running until Ctrl+C
    tokio::signal::ctrl_c().await?;
    info!("🛑 Shutting down development server");
    Ok(())
}
