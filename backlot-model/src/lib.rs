//! Core data model definitions shared across Backlot crates.
#![allow(missing_docs)]

pub mod advertisement;
pub mod carousel;
pub mod dates;
pub mod error;
pub mod ids;
pub mod kind;
pub mod media;
pub mod movie;
pub mod status;
pub mod video_ad;

// Intentionally curated re-exports for downstream consumers.
pub use advertisement::{AdPosition, Advertisement, NewAdvertisement};
pub use carousel::{CarouselImage, NewCarouselEntry};
pub use dates::{WIRE_DATE_FORMAT, default_campaign_window, format_wire_date, parse_wire_date};
pub use error::{ModelError, Result as ModelResult};
pub use ids::ResourceId;
pub use kind::ResourceKind;
pub use media::{MediaAttachment, MediaCategory, mime_for_path};
pub use movie::Movie;
pub use status::ResourceStatus;
pub use video_ad::{NewVideoAd, VideoAd, VideoAdType};
