use thiserror::Error;

/// Failure of a catalog fetch, a playlist submission or a proxy call.
///
/// A failed call never yields partial data. Nothing in this crate retries;
/// callers decide what to do with the error.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// No response: connection refused, DNS failure, timeout, broken body.
    #[error("network error: {0}")]
    Network(#[source] reqwest::Error),

    /// The credential was rejected (401/403).
    #[error("authorization rejected ({status}): {body}")]
    Auth { status: u16, body: String },

    /// Non-2xx response from the streaming service or the proxy.
    #[error("upstream returned {status}: {body}")]
    Upstream { status: u16, body: String },

    /// The request was refused before or by the backend.
    #[error("request rejected: {0}")]
    Validation(String),

    /// A 2xx response whose body is not the expected entity shape.
    #[error("unexpected response shape: {0}")]
    Shape(String),

    #[error("missing configuration: {0}")]
    Config(String),

    #[error("credentials unavailable: {0}")]
    Credentials(String),
}

/// Errors surfaced by playlist submission share the catalog taxonomy.
pub type SubmissionError = CatalogError;

pub type Result<T> = std::result::Result<T, CatalogError>;

impl CatalogError {
    /// HTTP status carried by the error, if the upstream answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            CatalogError::Auth { status, .. } | CatalogError::Upstream { status, .. } => {
                Some(*status)
            }
            _ => None,
        }
    }
}
