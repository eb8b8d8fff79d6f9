//! Bounded fixed-delay retry for catalog fetch attempts.
//!
//! Every [`FetchError`] counts as transient here: the upstream document is
//! static JSON served by dumb file hosts, and the attempt budget is small
//! either way. There is no back-off or jitter, only a fixed pause between
//! attempts against the same source.

use std::future::Future;
use std::time::Duration;

use crate::error::FetchError;

/// Runs `operation` with up to `max_retries` additional attempts, sleeping
/// `delay` between attempts.
///
/// `source` labels the log events (e.g. `"primary"`). The final error is
/// returned once the attempt budget is spent.
pub(crate) async fn retry_fixed<T, F, Fut>(
    max_retries: u32,
    delay: Duration,
    source: &str,
    mut operation: F,
) -> Result<T, FetchError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, FetchError>>,
{
    let mut attempt = 0u32;
    loop {
        match operation().await {
            Ok(value) => return Ok(value),
            Err(err) => {
                if attempt >= max_retries {
                    return Err(err);
                }
                attempt += 1;
                tracing::warn!(
                    attempt,
                    max_retries,
                    source,
                    error = %err,
                    "catalog fetch attempt failed; retrying after fixed delay"
                );
                if !delay.is_zero() {
                    tokio::time::sleep(delay).await;
                }
            }
        }
    }
}
