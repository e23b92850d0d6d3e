use std::fmt::{Display, Formatter};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::ModelError;
use crate::ids::ResourceId;
use crate::media::MediaAttachment;
use crate::status::ResourceStatus;

/// Placement slot a display advertisement occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AdPosition {
    Trending,
    Upcoming,
    Topfive,
}

impl AdPosition {
    pub const ALL: [AdPosition; 3] = [AdPosition::Trending, AdPosition::Upcoming, AdPosition::Topfive];

    pub fn as_str(self) -> &'static str {
        match self {
            AdPosition::Trending => "trending",
            AdPosition::Upcoming => "upcoming",
            AdPosition::Topfive => "topfive",
        }
    }

    /// Human label for the selector.
    pub fn label(self) -> &'static str {
        match self {
            AdPosition::Trending => "Trending",
            AdPosition::Upcoming => "Upcoming",
            AdPosition::Topfive => "Top Five",
        }
    }
}

impl Display for AdPosition {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for AdPosition {
    type Err = ModelError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw {
            "trending" => Ok(AdPosition::Trending),
            "upcoming" => Ok(AdPosition::Upcoming),
            "topfive" => Ok(AdPosition::Topfive),
            other => Err(ModelError::UnknownAdPosition(other.to_owned())),
        }
    }
}

/// Display advertisement as returned by the admin listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Advertisement {
    #[serde(rename = "_id")]
    pub id: ResourceId,
    #[serde(rename = "adTitle")]
    pub title: String,
    #[serde(rename = "adURL")]
    pub url: String,
    #[serde(rename = "adStatus")]
    pub status: ResourceStatus,
    #[serde(rename = "adPosition")]
    pub position: AdPosition,
    #[serde(rename = "adClickCount", default)]
    pub click_count: u64,
    #[serde(rename = "clientName", default)]
    pub client_name: String,
    #[serde(rename = "clientAddress", default)]
    pub client_address: String,
    #[serde(rename = "clientContact", default)]
    pub client_contact: String,
    /// `DD/MM/YYYY`, as stored by the backend.
    #[serde(rename = "startDate", default)]
    pub start_date: Option<String>,
    #[serde(rename = "endDate", default)]
    pub end_date: Option<String>,
    #[serde(rename = "mobileImage", default)]
    pub mobile_image: String,
    #[serde(rename = "desktopImage", default)]
    pub desktop_image: String,
}

/// Draft of a display advertisement about to be created.
///
/// The client email collected on the form is validated locally but is
/// not part of the payload; the create endpoint does not accept it.
#[derive(Debug, Clone)]
pub struct NewAdvertisement {
    pub title: String,
    pub url: String,
    pub client_name: String,
    pub client_address: String,
    pub client_contact: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub position: AdPosition,
    pub mobile_image: MediaAttachment,
    pub desktop_image: MediaAttachment,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn listing_entry_decodes_wire_names() {
        let raw = r#"{
            "_id": "a1",
            "adTitle": "Festival teaser",
            "adURL": "https://client.example/landing",
            "adStatus": "active",
            "adPosition": "topfive",
            "adClickCount": 41,
            "clientName": "Moonlight Media",
            "clientAddress": "12 Canal Road",
            "clientContact": "9876543210"
        }"#;
        let ad: Advertisement = serde_json::from_str(raw).unwrap();
        assert_eq!(ad.status, ResourceStatus::Active);
        assert_eq!(ad.position, AdPosition::Topfive);
        assert_eq!(ad.click_count, 41);
        assert!(ad.start_date.is_none());
    }

    #[test]
    fn unknown_position_is_a_decode_error() {
        let raw = r#"{
            "_id": "a2",
            "adTitle": "x",
            "adURL": "y",
            "adStatus": "active",
            "adPosition": "sidebar"
        }"#;
        assert!(serde_json::from_str::<Advertisement>(raw).is_err());
    }
}
