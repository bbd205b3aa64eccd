use comicdeck_types::{CatalogQuery, Comic};
use reqwest::Url;
use reqwest::blocking::Client;
use std::time::Duration;

use crate::config::ApiConfig;
use crate::{Error, Result};

/// Path of the catalog listing relative to the backend base address
pub const COMICS_PATH: &str = "/api/comics";

/// Anything that can answer a catalog query.
///
/// The HTTP implementation is the only production one; tests and the
/// browsing controller depend on this seam instead.
pub trait CatalogSource: Send + Sync {
    fn fetch(&self, query: &CatalogQuery) -> Result<Vec<Comic>>;

    /// Human-readable location of the catalog (for banners and logs)
    fn describe(&self) -> String;
}

/// Blocking HTTP client for `GET {base}/api/comics`
pub struct HttpCatalog {
    client: Client,
    endpoint: Url,
}

impl HttpCatalog {
    pub fn new(base_url: &str, api: &ApiConfig) -> Result<Self> {
        let endpoint = comics_endpoint(base_url)?;
        let client = Client::builder()
            .user_agent(concat!("comicdeck/", env!("CARGO_PKG_VERSION")))
            .timeout(api.timeout_secs.map(Duration::from_secs))
            .build()?;

        Ok(Self { client, endpoint })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

impl CatalogSource for HttpCatalog {
    fn fetch(&self, query: &CatalogQuery) -> Result<Vec<Comic>> {
        let pairs = query.query_pairs();
        tracing::debug!(endpoint = %self.endpoint, ?pairs, "requesting catalog");

        let response = self
            .client
            .get(self.endpoint.clone())
            .query(&pairs)
            .send()?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            tracing::warn!(status = status.as_u16(), "catalog returned an error status");
            return Err(Error::Status {
                status: status.as_u16(),
                message: server_message(&body),
            });
        }

        let body = response.bytes()?;
        let comics: Vec<Comic> =
            serde_json::from_slice(&body).map_err(|e| Error::Decode(e.to_string()))?;
        tracing::debug!(count = comics.len(), "catalog response decoded");
        Ok(comics)
    }

    fn describe(&self) -> String {
        self.endpoint.to_string()
    }
}

/// Build the listing URL from a base address, keeping any path prefix
pub fn comics_endpoint(base_url: &str) -> Result<Url> {
    let base = base_url.trim().trim_end_matches('/');
    if base.is_empty() {
        return Err(Error::InvalidUrl("backend address is empty".to_string()));
    }

    let url = Url::parse(&format!("{}{}", base, COMICS_PATH))
        .map_err(|e| Error::InvalidUrl(format!("{}: {}", base, e)))?;

    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(Error::InvalidUrl(format!(
            "unsupported scheme '{}' in {}",
            other, base
        ))),
    }
}

/// Pull a message out of a JSON error body (`error`, `message` or `detail`)
fn server_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    ["error", "message", "detail"]
        .iter()
        .find_map(|key| value.get(*key).and_then(|v| v.as_str()))
        .map(str::trim)
        .filter(|msg| !msg.is_empty())
        .map(str::to_string)
}
