use std::time::Duration;

/// Transport and retry policy for the catalog fetch pipeline.
///
/// Constructed programmatically by the embedding application; this crate
/// reads no environment variables.
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    /// Primary catalog document URL.
    pub primary_url: String,
    /// Fallback URL tried once the primary exhausts its attempts.
    pub fallback_url: String,
    /// Additional attempts after the first failure against the primary.
    pub primary_retries: u32,
    /// Additional attempts after the first failure against the fallback.
    pub fallback_retries: u32,
    /// Fixed pause between attempts against the same source.
    pub retry_delay: Duration,
    /// Per-request timeout.
    pub request_timeout: Duration,
    /// TCP connect timeout.
    pub connect_timeout: Duration,
    /// `User-Agent` header sent with every request.
    pub user_agent: String,
}

impl CatalogConfig {
    /// Extra attempts against the primary source after its first failure.
    pub const DEFAULT_PRIMARY_RETRIES: u32 = 2;
    /// Extra attempts against the fallback source after its first failure.
    pub const DEFAULT_FALLBACK_RETRIES: u32 = 1;
    /// Pause between attempts against the same source.
    pub const DEFAULT_RETRY_DELAY: Duration = Duration::from_millis(500);

    /// Creates a config with the default policy: two extra attempts against
    /// the primary, one against the fallback, 500 ms between attempts.
    #[must_use]
    pub fn new(primary_url: &str, fallback_url: &str) -> Self {
        Self {
            primary_url: primary_url.to_owned(),
            fallback_url: fallback_url.to_owned(),
            primary_retries: Self::DEFAULT_PRIMARY_RETRIES,
            fallback_retries: Self::DEFAULT_FALLBACK_RETRIES,
            retry_delay: Self::DEFAULT_RETRY_DELAY,
            request_timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
            user_agent: "storefront/0.1 (catalog-loader)".to_owned(),
        }
    }

    /// Replaces the retry budgets for both sources.
    #[must_use]
    pub fn with_retries(mut self, primary_retries: u32, fallback_retries: u32) -> Self {
        self.primary_retries = primary_retries;
        self.fallback_retries = fallback_retries;
        self
    }

    /// Replaces the pause between attempts. Tests pass `Duration::ZERO` so
    /// retry-heavy scenarios do not sleep.
    #[must_use]
    pub fn with_retry_delay(mut self, delay: Duration) -> Self {
        self.retry_delay = delay;
        self
    }

    /// Replaces the per-request timeout.
    #[must_use]
    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    /// Replaces the `User-Agent` header value.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: &str) -> Self {
        self.user_agent = user_agent.to_owned();
        self
    }
}
