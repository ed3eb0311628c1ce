use thiserror::Error;

/// A request that did not produce a usable response.
///
/// Callers treat every variant the same way; the split only exists so the
/// console line says what went wrong.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("network error: {0}")]
    Network(String),
    #[error("unexpected HTTP status {0}")]
    Status(u16),
    #[error("failed to decode response: {0}")]
    Decode(String),
}

impl From<gloo_net::Error> for FetchError {
    fn from(e: gloo_net::Error) -> Self {
        FetchError::Network(e.to_string())
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(e: serde_json::Error) -> Self {
        FetchError::Decode(e.to_string())
    }
}
