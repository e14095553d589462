use thiserror::Error;

/// Why a lookup produced no answer.
///
/// Callers that only care about the answer go through
/// [`lookup_nth_prime`](super::lookup_nth_prime), which folds all of these
/// into `None`.
#[derive(Debug, Error)]
pub enum LookupError {
    #[error("Invalid lookup endpoint '{endpoint}': {message}")]
    InvalidEndpoint { endpoint: String, message: String },

    #[error("Failed to build HTTP client: {source}")]
    Client {
        #[source]
        source: reqwest::Error,
    },

    #[error("Request for '{query}' failed: {source}")]
    Request {
        query: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Lookup service returned HTTP {status}")]
    Status { status: u16 },

    #[error("Lookup timed out after {seconds}s")]
    Timeout { seconds: u64 },

    #[error("Failed to decode lookup response: {source}")]
    Decode {
        #[source]
        source: serde_json::Error,
    },
}
