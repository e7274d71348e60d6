//! Time-budgeted wrappers around fallible async operations.
//!
//! Every remote read on a latency-sensitive path runs under a budget so a
//! single stalled dependency can never wedge the whole response. On expiry
//! the underlying future is dropped, which cancels the in-flight work
//! rather than letting it run to completion unobserved.

use std::fmt::Display;
use std::time::Duration;

/// Why a guarded operation produced no value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    /// The time budget elapsed before the operation settled.
    #[error("Timeout")]
    Timeout,
    /// The operation settled with an error of its own.
    #[error("{0}")]
    Remote(String),
}

impl FetchError {
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout)
    }
}

/// Run `op` under `budget`. Expiry yields [`FetchError::Timeout`] and drops
/// the future; an inner error is carried through as [`FetchError::Remote`].
pub async fn guarded<T, E, F>(op: F, budget: Duration) -> Result<T, FetchError>
where
    E: Display,
    F: Future<Output = Result<T, E>>,
{
    match tokio::time::timeout(budget, op).await {
        Ok(Ok(v)) => Ok(v),
        Ok(Err(e)) => Err(FetchError::Remote(e.to_string())),
        Err(_) => Err(FetchError::Timeout),
    }
}
