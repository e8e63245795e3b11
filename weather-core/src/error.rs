use thiserror::Error;

/// Why a single fetch attempt failed. None of these are retried.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// Transport failure: DNS, refused connection, timeout, broken body stream.
    #[error("Network error: {0}")]
    NetworkError(String),

    /// The provider was reachable but rejected the query or reported an error.
    #[error("{0}")]
    ProviderError(String),

    /// The provider answered with structured data that does not match the snapshot schema.
    #[error("Malformed weather data: {0}")]
    MalformedResponse(String),
}
