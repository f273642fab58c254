//! Development server for UI work
//!
//! Runs the stand-in search api with the demo catalog on a fixed port, so the
//! UI can be built against it without a real api key.
//!
//! Usage: cargo run -p dev-server

use anyhow::Result;
use search_api::{
    Catalog, Config,
    telemetry::{get_subscriber, init_subscriber, log_error},
};
use secrecy::{ExposeSecret, SecretString};
use tracing::info;

const DEFAULT_PORT: u16 = 8001;
const DEFAULT_API_KEY: &str = "dev-key";

#[tokio::main]
async fn main() -> Result<()> {
    let _ = dotenvy::dotenv();
    init_subscriber(get_subscriber("info"))?;

    info!("🚀 Starting image search development server");

    let api_key = std::env::var("API_KEY")
        .unwrap_or_else(|_| DEFAULT_API_KEY.to_string());
    let mut config = Config {
        ip: "127.0.0.1".into(),
        port: DEFAULT_PORT,
        api_key: SecretString::from(api_key),
        allowed_origins: vec!["*".to_string()],
    };

    let catalog = Catalog::demo();
    let server = search_api::build(&mut config, catalog.clone())?;
    tokio::spawn(async move {
        if let Err(e) = server.await {
            log_error(e);
        }
    });

    info!("🎯 Development server ready!");
    info!("   API: http://127.0.0.1:{}/api/", config.port);
    info!(
        "   UI:  cd ui && SEARCH_API_URL=http://127.0.0.1:{} SEARCH_API_KEY={} trunk serve",
        config.port,
        config.api_key.expose_secret()
    );
    info!("");
    test_helpers::mock::print_summary(&catalog);
    info!("");
    info!("👋 Press Ctrl+C to shutdown");

    tokio::signal::ctrl_c().await?;
    info!("🛑 Shutting down development server");
    Ok(())
}
