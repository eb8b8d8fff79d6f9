use reqwest::Client;

use storefront_core::Catalog;

use crate::config::CatalogConfig;
use crate::error::FetchError;

/// HTTP client for catalog document endpoints.
///
/// One GET per call; non-2xx statuses and body or shape failures come back
/// as typed [`FetchError`]s. Retry and fallback policy live in
/// [`crate::service::CatalogService`].
#[derive(Debug, Clone)]
pub struct CatalogClient {
    client: Client,
}

impl CatalogClient {
    /// Creates a `CatalogClient` with the config's timeouts and `User-Agent`.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed (e.g., invalid TLS config).
    pub fn new(config: &CatalogConfig) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(config.request_timeout)
            .connect_timeout(config.connect_timeout)
            .user_agent(&config.user_agent)
            .build()?;
        Ok(Self { client })
    }

    /// Fetches and decodes one catalog document from `url`.
    ///
    /// # Errors
    ///
    /// - [`FetchError::Http`] for network, TLS, or timeout failures.
    /// - [`FetchError::UnexpectedStatus`] for any non-2xx status.
    /// - [`FetchError::Deserialize`] when the body is not a valid catalog
    ///   document.
    pub async fn fetch_document(&self, url: &str) -> Result<Catalog, FetchError> {
        let response = self.client.get(url).send().await?;
        let status = response.status();

        if !status.is_success() {
            return Err(FetchError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_owned(),
            });
        }

        let body = response.text().await?;
        serde_json::from_str::<Catalog>(&body).map_err(|e| FetchError::Deserialize {
            url: url.to_owned(),
            source: e,
        })
    }
}
