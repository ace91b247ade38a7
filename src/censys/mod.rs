pub mod auth;
pub mod client;
pub mod models;

use reqwest::Client;

/// Base URL of the Censys search API (v1)
pub const DEFAULT_API_URL: &str = "https://search.censys.io/api/v1";

/// HTTP client shared by the search and account calls; neither is retried
pub fn create_http_client() -> Result<Client, reqwest::Error> {
    Client::builder()
        .timeout(std::time::Duration::from_secs(30))
        .user_agent(concat!("cert-index/", env!("CARGO_PKG_VERSION")))
        .use_rustls_tls()
        .build()
}
