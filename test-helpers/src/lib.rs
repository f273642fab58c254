pub mod mock;

pub use search_api::Catalog;

use payloads::{APIClient, ClientError};
use reqwest::StatusCode;
use search_api::{
    Config,
    telemetry::{get_subscriber, init_subscriber, log_error},
};
use secrecy::SecretString;

/// Key the spawned api accepts.
pub const TEST_API_KEY: &str = "test-api-key";

pub struct TestApp {
    /// Port the OS assigned to this app.
    pub port: u16,
    pub client: APIClient,
}

impl TestApp {
    /// A client pointed at this app but sending the wrong key.
    pub fn client_with_key(&self, key: &str) -> APIClient {
        APIClient {
            address: self.client.address.clone(),
            api_key: SecretString::from(key.to_string()),
            inner_client: reqwest::Client::new(),
        }
    }
}

pub async fn spawn_app_on_port(port: u16, catalog: Catalog) -> TestApp {
    // Only the first app in a test binary gets to install the subscriber
    let _ = init_subscriber(get_subscriber("error"));

    let mut config = Config {
        ip: "127.0.0.1".into(),
        port,
        api_key: SecretString::from(TEST_API_KEY.to_string()),
        allowed_origins: vec!["*".to_string()],
    };

    let server = search_api::build(&mut config, catalog)
        .expect("Failed to bind test server");
    tokio::spawn(async move {
        if let Err(e) = server.await {
            log_error(e);
        }
    });

    TestApp {
        port: config.port,
        client: APIClient {
            address: format!("http://127.0.0.1:{}", config.port),
            api_key: SecretString::from(TEST_API_KEY.to_string()),
            inner_client: reqwest::Client::new(),
        },
    }
}

/// Use OS-assigned port for parallel testing.
pub async fn spawn_app() -> TestApp {
    spawn_app_on_port(0, Catalog::demo()).await
}

/// Spawn an app serving a specific catalog.
pub async fn spawn_app_with(catalog: Catalog) -> TestApp {
    spawn_app_on_port(0, catalog).await
}

/// Assert that the result of an API action results in a specific status code.
pub fn assert_status_code<T>(
    result: Result<T, ClientError>,
    expected: StatusCode,
) {
    match result {
        Err(ClientError::APIError(code, _)) => {
            assert_eq!(code, expected)
        }
        _ => panic!("Expected APIError"),
    };
}
