//! Error types for imagecheck

/// Result type alias using imagecheck's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for classification operations.
///
/// Every variant is recoverable at the boundary: each maps to a distinct
/// user-facing message and the caller retries by re-submitting an image.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// No API token was configured; the request is never attempted
    #[error("no API token configured (set HUGGINGFACE_API_KEY)")]
    MissingCredential,

    /// The endpoint did not respond within the configured window
    #[error("request timed out waiting for the inference endpoint")]
    Timeout,

    /// HTTP 503: the hosted model is cold-starting
    #[error("model is still loading, retry shortly")]
    ModelLoading,

    /// Any other non-200 response from the endpoint
    #[error("endpoint returned HTTP {status}: {body}")]
    Http { status: u16, body: String },

    /// 200 response whose body is not a JSON array of predictions
    #[error("malformed response from endpoint: {0}")]
    ParseFailure(String),

    /// The endpoint returned an empty prediction list
    #[error("no meaningful prediction")]
    EmptyResult,

    /// Image decode/encode errors
    #[error("image error: {0}")]
    Image(String),

    /// Configuration errors
    #[error("configuration error: {0}")]
    Config(String),

    /// Network/IO errors
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create a new parse-failure error
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::ParseFailure(msg.into())
    }

    /// Create a new image error
    pub fn image(msg: impl Into<String>) -> Self {
        Self::Image(msg.into())
    }

    /// Create a new configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create an HTTP status error
    pub fn http(status: u16, body: impl Into<String>) -> Self {
        Self::Http {
            status,
            body: body.into(),
        }
    }
}
