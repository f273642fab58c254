use search_api::{
    Catalog, Config, build,
    telemetry::{get_subscriber, init_subscriber},
};

/// Stand-in image search API
///
/// Environment variables can be set directly or loaded from a .env file in the
/// project root.
///
/// Required environment variables:
/// - PORT: Server port
/// - API_KEY: Key clients must pass as the `key` query parameter
///
/// Optional environment variables:
/// - IP_ADDRESS: Server bind address (defaults to 127.0.0.1)
/// - ALLOWED_ORIGINS: CORS origins ("*" for any origin, or a comma-separated
///   list)
///
/// Example development command:
/// PORT=8001 API_KEY=dev-key cargo run -p search-api
#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Silently ignored if the file doesn't exist
    let _ = dotenvy::dotenv();

    init_subscriber(get_subscriber("info"))?;

    let mut config = Config::from_env()?;
    let server = build(&mut config, Catalog::demo())?;
    tracing::info!("Serving demo catalog on {}:{}", config.ip, config.port);
    server.await?;
    Ok(())
}
