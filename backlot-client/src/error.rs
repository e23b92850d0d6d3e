//! API error types.
//!
//! Classification mirrors what the console needs to render: transport
//! failures, auth rejections, backend-side validation, and server
//! faults. Local form validation never reaches this module.

use thiserror::Error;

/// Errors surfaced by [`crate::ApiClient`] operations.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never completed (DNS, connect, timeout, TLS).
    #[error("request could not complete: {0}")]
    Network(#[source] reqwest::Error),

    /// A protected call was rejected. There is no re-authentication
    /// flow; the operator must supply a fresh token out of band.
    #[error("access token rejected - re-authenticate and retry")]
    Auth,

    /// The backend refused an otherwise well-formed request (4xx).
    #[error("request rejected ({status}): {message}")]
    Rejected { status: u16, message: String },

    /// The backend failed on its side (5xx).
    #[error("server error ({status}): {message}")]
    Server { status: u16, message: String },

    /// A 2xx response whose body did not decode into the expected
    /// shape. Treated as a backend defect, not a client state.
    #[error("malformed response body: {0}")]
    Decode(#[source] reqwest::Error),

    /// An attachment could not be staged as a multipart part.
    #[error("attachment `{name}` has an unusable MIME type")]
    InvalidAttachment {
        name: String,
        #[source]
        source: reqwest::Error,
    },

    /// The configured base origin is not a valid URL.
    #[error("invalid API base URL: {0}")]
    BaseUrl(#[from] url::ParseError),
}

/// Result type alias for API operations.
pub type ApiResult<T> = Result<T, ApiError>;
