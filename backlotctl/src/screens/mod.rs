//! Per-resource instantiations of the administration workflow.
//!
//! Each screen is a plain controller: it owns its list state, its
//! form draft and the API client, and exposes the operations the
//! shell drives. No terminal I/O happens here, which keeps the
//! screens testable against a mock server.

pub mod advertisements;
pub mod carousel;
pub mod video_ads;

pub use advertisements::AdvertisementScreen;
pub use carousel::CarouselScreen;
pub use video_ads::VideoAdScreen;

use backlot_client::ApiError;
use thiserror::Error;

/// Why a create submission did not go through.
#[derive(Debug, Error)]
pub enum SubmitError {
    /// The draft fails validation; nothing was sent.
    #[error("{0}")]
    Blocked(String),

    /// The request was sent and failed; the draft is left intact so
    /// the operator can retry without re-entering anything.
    #[error(transparent)]
    Api(#[from] ApiError),
}
