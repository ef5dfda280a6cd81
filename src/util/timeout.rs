//! Deadline for a single provider round trip.

use std::future::Future;
use std::time::Duration;

use tracing::warn;

use crate::error::KonnectError;

/// Run `future` under `deadline`, naming `operation` in the log when it elapses.
///
/// The elapsed case becomes [`KonnectError::Timeout`] so adapters classify it
/// like any other transport failure.
pub async fn with_timeout<T>(
    operation: &str,
    deadline: Duration,
    future: impl Future<Output = Result<T, KonnectError>>,
) -> Result<T, KonnectError> {
    tokio::time::timeout(deadline, future)
        .await
        .unwrap_or_else(|_| {
            let millis = u64::try_from(deadline.as_millis()).unwrap_or(u64::MAX);
            warn!(operation, timeout_ms = millis, "provider call exceeded its deadline");
            Err(KonnectError::Timeout(millis))
        })
}
