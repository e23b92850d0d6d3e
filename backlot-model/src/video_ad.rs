use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::error::ModelError;
use crate::ids::ResourceId;
use crate::media::MediaAttachment;
use crate::status::ResourceStatus;

/// The two video-ad formats the player schedules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VideoAdType {
    #[serde(rename = "trailer")]
    Trailer,
    #[serde(rename = "full-length")]
    FullLength,
}

impl VideoAdType {
    pub const ALL: [VideoAdType; 2] = [VideoAdType::Trailer, VideoAdType::FullLength];

    pub fn as_str(self) -> &'static str {
        match self {
            VideoAdType::Trailer => "trailer",
            VideoAdType::FullLength => "full-length",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            VideoAdType::Trailer => "Trailer",
            VideoAdType::FullLength => "Full Length",
        }
    }

    /// Guidance shown on the upload form once a type is chosen.
    pub fn upload_hint(self) -> &'static str {
        match self {
            VideoAdType::Trailer => {
                "Please add a short video which is not longer than 6 seconds"
            }
            VideoAdType::FullLength => {
                "Please add a longer video which is not longer than 15 seconds"
            }
        }
    }
}

impl Display for VideoAdType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for VideoAdType {
    type Err = ModelError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw {
            "trailer" => Ok(VideoAdType::Trailer),
            "full-length" => Ok(VideoAdType::FullLength),
            other => Err(ModelError::UnknownVideoAdType(other.to_owned())),
        }
    }
}

/// Video advertisement as returned by the admin listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VideoAd {
    #[serde(rename = "_id")]
    pub id: ResourceId,
    #[serde(rename = "adTitle")]
    pub title: String,
    #[serde(rename = "adType", default)]
    pub ad_type: Option<VideoAdType>,
    #[serde(rename = "adURL", default)]
    pub url: String,
    pub status: ResourceStatus,
    #[serde(rename = "adFrequency", default)]
    pub frequency: u32,
}

/// Draft of a video advertisement about to be created.
#[derive(Debug, Clone)]
pub struct NewVideoAd {
    pub title: String,
    pub ad_type: VideoAdType,
    pub redirect_url: String,
    pub video: MediaAttachment,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ad_type_uses_hyphenated_wire_value() {
        let parsed: VideoAdType = serde_json::from_str("\"full-length\"").unwrap();
        assert_eq!(parsed, VideoAdType::FullLength);
        assert_eq!(serde_json::to_string(&VideoAdType::Trailer).unwrap(), "\"trailer\"");
    }

    #[test]
    fn listing_entry_tolerates_missing_optionals() {
        let raw = r#"{
            "_id": "v9",
            "adTitle": "Diwali spot",
            "status": "disabled"
        }"#;
        let ad: VideoAd = serde_json::from_str(raw).unwrap();
        assert_eq!(ad.status, ResourceStatus::Disabled);
        assert!(ad.ad_type.is_none());
        assert_eq!(ad.frequency, 0);
    }
}
