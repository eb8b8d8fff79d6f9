pub mod client;
pub mod config;
pub mod error;
mod retry;
pub mod service;

pub use client::CatalogClient;
pub use config::CatalogConfig;
pub use error::{CatalogUnavailable, FetchError};
pub use service::{CachePhase, CatalogService};
