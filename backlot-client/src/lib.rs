//! HTTP client for the Backlot admin API.
//!
//! Wraps the fixed-origin backend behind typed per-resource operations.
//! Every protected call carries the operator's access token as the
//! `x-access-protected` header; failures map onto a small taxonomy the
//! console renders either as a screen-level error (list fetches) or a
//! blocking notice (mutations).

pub mod api;
pub mod error;
pub mod token;

pub use api::ApiClient;
pub use error::{ApiError, ApiResult};
pub use token::AccessToken;
