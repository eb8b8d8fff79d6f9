//! Cached, single-flight catalog loading and the lookup surface over it.
//!
//! The first caller starts one fetch sequence (primary with retries, then
//! fallback with retries) in a spawned task; every concurrent caller waits
//! on the same outcome through a `watch` channel. A successful document is
//! cached for the life of the service, a failed sequence reports
//! [`CatalogUnavailable`] once and re-arms so the next caller tries again.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tokio::sync::watch;

use storefront_core::{Catalog, Product};

use crate::client::CatalogClient;
use crate::config::CatalogConfig;
use crate::error::{CatalogUnavailable, FetchError};
use crate::retry::retry_fixed;

/// Lifecycle of the cached catalog document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CachePhase {
    /// No document yet; the next caller starts (or joins) a fetch sequence.
    Unresolved,
    /// A document is cached and replayed to every caller without I/O.
    Resolved,
    /// The last sequence exhausted both sources; the next caller re-arms.
    Broken,
}

type FetchOutcome = Result<Arc<Catalog>, CatalogUnavailable>;

#[derive(Debug)]
enum FetchState {
    Idle,
    /// A spawned sequence is running; waiters clone this receiver.
    InFlight(watch::Receiver<Option<FetchOutcome>>),
    Resolved(Arc<Catalog>),
    Broken,
}

#[derive(Debug)]
struct ServiceInner {
    client: CatalogClient,
    config: CatalogConfig,
    state: Mutex<FetchState>,
}

/// Loads the catalog document once and replays it to every caller.
///
/// Cloning the service is cheap; clones share one cached document and one
/// in-flight fetch sequence.
#[derive(Debug, Clone)]
pub struct CatalogService {
    inner: Arc<ServiceInner>,
}

impl CatalogService {
    /// Creates a service around `config`. No request is made until the
    /// first [`Self::catalog`] call.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Http`] if the HTTP client cannot be
    /// constructed.
    pub fn new(config: CatalogConfig) -> Result<Self, FetchError> {
        let client = CatalogClient::new(&config)?;
        Ok(Self {
            inner: Arc::new(ServiceInner {
                client,
                config,
                state: Mutex::new(FetchState::Idle),
            }),
        })
    }

    /// Current phase of the cached document.
    #[must_use]
    pub fn phase(&self) -> CachePhase {
        match *self.lock_state() {
            FetchState::Idle | FetchState::InFlight(_) => CachePhase::Unresolved,
            FetchState::Resolved(_) => CachePhase::Resolved,
            FetchState::Broken => CachePhase::Broken,
        }
    }

    /// Returns the catalog document, fetching it on first use.
    ///
    /// Concurrent callers share one fetch sequence and receive the same
    /// cached `Arc`. Abandoning a call (dropping the future, wrapping it in
    /// a timeout) never cancels the shared sequence; it keeps running and
    /// may still populate the cache for later callers.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogUnavailable`] when the primary and the fallback
    /// both exhaust their attempt budgets. The failure is not sticky: the
    /// next call starts a fresh sequence from the primary.
    pub async fn catalog(&self) -> Result<Arc<Catalog>, CatalogUnavailable> {
        let mut rx = {
            let mut state = self.lock_state();
            match &*state {
                FetchState::Resolved(catalog) => return Ok(Arc::clone(catalog)),
                FetchState::InFlight(rx) => rx.clone(),
                FetchState::Idle | FetchState::Broken => {
                    let rx = self.spawn_fetch_sequence();
                    *state = FetchState::InFlight(rx.clone());
                    rx
                }
            }
        };

        loop {
            let published = rx.borrow_and_update().clone();
            if let Some(outcome) = published {
                return outcome;
            }
            rx.changed()
                .await
                .expect("catalog fetch task exited without publishing an outcome");
        }
    }

    /// Spawns the fetch sequence as a detached task and returns the channel
    /// its outcome will be published on. The task updates the shared state
    /// before notifying waiters.
    fn spawn_fetch_sequence(&self) -> watch::Receiver<Option<FetchOutcome>> {
        let (tx, rx) = watch::channel(None);
        let inner = Arc::clone(&self.inner);
        tokio::spawn(async move {
            let outcome = run_fetch_sequence(&inner).await;
            {
                let mut state = inner
                    .state
                    .lock()
                    .unwrap_or_else(PoisonError::into_inner);
                *state = match &outcome {
                    Ok(catalog) => FetchState::Resolved(Arc::clone(catalog)),
                    Err(_) => FetchState::Broken,
                };
            }
            if tx.send(Some(outcome)).is_err() {
                tracing::trace!("no catalog waiters left to notify");
            }
        });
        rx
    }

    fn lock_state(&self) -> MutexGuard<'_, FetchState> {
        // Recover the guard if a holder panicked; the state is a plain enum
        // and stays structurally valid.
        self.inner
            .state
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// All products in catalog order.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogUnavailable`] if the document cannot be fetched.
    pub async fn products(&self) -> Result<Vec<Product>, CatalogUnavailable> {
        Ok(self.catalog().await?.products.clone())
    }

    /// Looks up a product by numeric id.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogUnavailable`] if the document cannot be fetched.
    pub async fn product_by_id(&self, id: u32) -> Result<Option<Product>, CatalogUnavailable> {
        let catalog = self.catalog().await?;
        Ok(catalog.products.iter().find(|p| p.id == id).cloned())
    }

    /// Looks up a product by id or uuid from one route parameter.
    ///
    /// The key is trimmed first. When it is the canonical base-10 rendering
    /// of a `u32` (`"7"`, but not `"007"` or `"7.0"`), an id match anywhere
    /// in the collection wins over a product whose uuid happens to look
    /// numeric; otherwise the key is matched against uuids byte-for-byte.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogUnavailable`] if the document cannot be fetched.
    pub async fn product_by_id_or_uuid(
        &self,
        key: &str,
    ) -> Result<Option<Product>, CatalogUnavailable> {
        let catalog = self.catalog().await?;
        let key = key.trim();
        if let Some(id) = parse_canonical_id(key) {
            if let Some(product) = catalog.products.iter().find(|p| p.id == id) {
                return Ok(Some(product.clone()));
            }
        }
        Ok(catalog.products.iter().find(|p| p.uuid == key).cloned())
    }

    /// Looks up a product by slug.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogUnavailable`] if the document cannot be fetched.
    pub async fn product_by_slug(
        &self,
        slug: &str,
    ) -> Result<Option<Product>, CatalogUnavailable> {
        let catalog = self.catalog().await?;
        Ok(catalog.products.iter().find(|p| p.slug == slug).cloned())
    }

    /// Resolves `ids` against the collection, in catalog order. Ids with no
    /// matching product are silently dropped.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogUnavailable`] if the document cannot be fetched.
    pub async fn products_by_ids(&self, ids: &[u32]) -> Result<Vec<Product>, CatalogUnavailable> {
        let catalog = self.catalog().await?;
        Ok(catalog
            .products
            .iter()
            .filter(|p| ids.contains(&p.id))
            .cloned()
            .collect())
    }

    /// All products belonging to the given category id.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogUnavailable`] if the document cannot be fetched.
    pub async fn products_by_category(
        &self,
        category_id: &str,
    ) -> Result<Vec<Product>, CatalogUnavailable> {
        let catalog = self.catalog().await?;
        Ok(catalog
            .products
            .iter()
            .filter(|p| p.in_category(category_id))
            .cloned()
            .collect())
    }

    /// All products of the given brand id.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogUnavailable`] if the document cannot be fetched.
    pub async fn products_by_brand(
        &self,
        brand_id: &str,
    ) -> Result<Vec<Product>, CatalogUnavailable> {
        let catalog = self.catalog().await?;
        Ok(catalog
            .products
            .iter()
            .filter(|p| p.brand == brand_id)
            .cloned()
            .collect())
    }

    /// Products related to the given anchor product, in catalog order.
    ///
    /// Returns an empty vec when the anchor id is unknown. Related ids with
    /// no matching product are silently dropped.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogUnavailable`] if the document cannot be fetched.
    pub async fn related_products(&self, id: u32) -> Result<Vec<Product>, CatalogUnavailable> {
        let catalog = self.catalog().await?;
        let Some(anchor) = catalog.products.iter().find(|p| p.id == id) else {
            return Ok(Vec::new());
        };
        Ok(catalog
            .products
            .iter()
            .filter(|p| anchor.related_products.contains(&p.id))
            .cloned()
            .collect())
    }

    /// Case-insensitive substring search over name, description, and tags.
    /// An empty term matches every product.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogUnavailable`] if the document cannot be fetched.
    pub async fn search_products(&self, term: &str) -> Result<Vec<Product>, CatalogUnavailable> {
        let catalog = self.catalog().await?;
        let needle = term.to_lowercase();
        Ok(catalog
            .products
            .iter()
            .filter(|p| p.matches_search(&needle))
            .cloned()
            .collect())
    }

    /// All featured products, in catalog order.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogUnavailable`] if the document cannot be fetched.
    pub async fn featured_products(&self) -> Result<Vec<Product>, CatalogUnavailable> {
        self.products_where(|p| p.featured).await
    }

    /// All new arrivals, in catalog order.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogUnavailable`] if the document cannot be fetched.
    pub async fn new_arrivals(&self) -> Result<Vec<Product>, CatalogUnavailable> {
        self.products_where(|p| p.new_arrival).await
    }

    /// All hot-sale products, in catalog order.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogUnavailable`] if the document cannot be fetched.
    pub async fn hot_sales(&self) -> Result<Vec<Product>, CatalogUnavailable> {
        self.products_where(|p| p.hot_sale).await
    }

    /// All best sellers, in catalog order.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogUnavailable`] if the document cannot be fetched.
    pub async fn best_sellers(&self) -> Result<Vec<Product>, CatalogUnavailable> {
        self.products_where(|p| p.best_seller).await
    }

    /// All products currently on sale, in catalog order.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogUnavailable`] if the document cannot be fetched.
    pub async fn sale_products(&self) -> Result<Vec<Product>, CatalogUnavailable> {
        self.products_where(|p| p.sale).await
    }

    async fn products_where(
        &self,
        keep: impl Fn(&Product) -> bool,
    ) -> Result<Vec<Product>, CatalogUnavailable> {
        let catalog = self.catalog().await?;
        Ok(catalog
            .products
            .iter()
            .filter(|p| keep(p))
            .cloned()
            .collect())
    }
}

/// Runs the full fetch sequence: primary with retries, then fallback with
/// retries. Only the terminal per-source errors survive into the result.
async fn run_fetch_sequence(inner: &ServiceInner) -> FetchOutcome {
    let config = &inner.config;
    tracing::debug!(url = %config.primary_url, "fetching catalog document");

    let client = inner.client.clone();
    let url = config.primary_url.clone();
    let primary_err = match retry_fixed(
        config.primary_retries,
        config.retry_delay,
        "primary",
        || {
            let client = client.clone();
            let url = url.clone();
            async move { client.fetch_document(&url).await }
        },
    )
    .await
    {
        Ok(catalog) => return Ok(cache_document(catalog, &config.primary_url)),
        Err(err) => err,
    };

    tracing::warn!(
        error = %primary_err,
        fallback = %config.fallback_url,
        "primary catalog source exhausted; trying fallback"
    );

    let client = inner.client.clone();
    let url = config.fallback_url.clone();
    match retry_fixed(
        config.fallback_retries,
        config.retry_delay,
        "fallback",
        || {
            let client = client.clone();
            let url = url.clone();
            async move { client.fetch_document(&url).await }
        },
    )
    .await
    {
        Ok(catalog) => Ok(cache_document(catalog, &config.fallback_url)),
        Err(fallback_err) => {
            tracing::error!(
                primary_error = %primary_err,
                fallback_error = %fallback_err,
                "catalog unavailable: both sources exhausted"
            );
            Err(CatalogUnavailable {
                primary: Arc::new(primary_err),
                fallback: Arc::new(fallback_err),
            })
        }
    }
}

fn cache_document(catalog: Catalog, url: &str) -> Arc<Catalog> {
    tracing::info!(
        url,
        products = catalog.products.len(),
        categories = catalog.categories.len(),
        "catalog document cached"
    );
    Arc::new(catalog)
}

/// Parses `key` as a product id when it is the canonical base-10 rendering
/// of a `u32`: no sign, no leading zeros, no fractional part.
fn parse_canonical_id(key: &str) -> Option<u32> {
    let id = key.parse::<u32>().ok()?;
    (id.to_string() == key).then_some(id)
}
