pub mod catalog;
pub mod routes;
pub mod telemetry;

use actix_cors::Cors;
use actix_web::dev::Server;
use actix_web::{App, HttpServer, web};
use anyhow::Context;
use secrecy::SecretString;
use std::net::TcpListener;

pub use catalog::Catalog;

/// Build the server, but not await it.
///
/// Returns the port that the server has bound to by modifying the config.
pub fn build(config: &mut Config, catalog: Catalog) -> std::io::Result<Server> {
    let catalog = web::Data::new(catalog);
    let api_key = web::Data::new(routes::ApiKey(config.api_key.clone()));

    let allowed_origins = config.allowed_origins.clone();

    // OS assigns the port if binding to 0
    let listener = TcpListener::bind(format!("{}:{}", config.ip, config.port))?;
    config.port = listener.local_addr()?.port();
    let server = HttpServer::new(move || {
        let cors = if allowed_origins.iter().any(|origin| origin == "*") {
            Cors::default()
                .allow_any_origin()
                .allowed_methods(vec!["GET"])
                .allow_any_header()
        } else {
            let mut cors =
                Cors::default().allowed_methods(vec!["GET"]).allow_any_header();
            for origin in &allowed_origins {
                cors = cors.allowed_origin(origin);
            }
            cors
        };

        App::new()
            .wrap(cors)
            .service(routes::api_services())
            .app_data(catalog.clone())
            .app_data(api_key.clone())
    })
    .listen(listener)?
    .run();
    Ok(server)
}

pub struct Config {
    /// set to "0.0.0.0" for public access, "127.0.0.1" for local dev
    pub ip: String,
    /// set to 0 to get an os-assigned port
    pub port: u16,
    /// Key clients must send as the `key` query parameter
    pub api_key: SecretString,
    /// List of allowed CORS origins. Use "*" to allow any origin (development only)
    pub allowed_origins: Vec<String>,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        use std::env::var;

        let allowed_origins = var("ALLOWED_ORIGINS")
            .unwrap_or_else(|_| "*".to_string())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        Ok(Config {
            ip: var("IP_ADDRESS").unwrap_or_else(|_| "127.0.0.1".into()),
            port: var("PORT")
                .context("PORT must be set")?
                .parse()
                .context("PORT must be a valid port number")?,
            api_key: SecretString::from(
                var("API_KEY").context("API_KEY must be set")?,
            ),
            allowed_origins,
        })
    }
}
