//! Remote nth-prime lookup.

mod client;
mod error;
mod types;

pub use client::{nth_prime_query, PrimeLookup, WolframAlphaClient};
pub use error::LookupError;
pub use types::{Pod, QueryResponse, QueryResult, SubPod};

/// Look up the `n`th prime, folding every failure into `None`.
///
/// The error is still recorded through `tracing`; use
/// [`PrimeLookup::nth_prime`] directly to inspect it.
pub async fn lookup_nth_prime(lookup: &dyn PrimeLookup, n: i64) -> Option<i64> {
    match lookup.nth_prime(n).await {
        Ok(answer) => answer,
        Err(err) => {
            tracing::warn!(n, error = %err, "Nth prime lookup failed");
            None
        }
    }
}
