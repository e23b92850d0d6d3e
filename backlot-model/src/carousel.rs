use serde::{Deserialize, Serialize};

use crate::ids::ResourceId;
use crate::media::MediaAttachment;

/// One banner entry as returned by the carousel listing.
///
/// Carousel entries carry no lifecycle status; they are visible while
/// they exist and removed by deletion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CarouselImage {
    #[serde(rename = "_id")]
    pub id: ResourceId,
    pub title: String,
    #[serde(default)]
    pub cast: String,
    #[serde(default)]
    pub description: String,
    pub url: String,
    #[serde(default)]
    pub rating: String,
    /// Relative path under the server's `/public` static prefix.
    #[serde(rename = "mobileImage", default)]
    pub mobile_image: String,
    /// Relative path under the server's `/public` static prefix.
    #[serde(rename = "desktopImage", default)]
    pub desktop_image: String,
}

/// Draft of a carousel entry about to be created.
///
/// `url` is the linked movie's URL, resolved locally from the cached
/// movie list at submit time. Both creatives travel as multipart
/// binary parts.
#[derive(Debug, Clone)]
pub struct NewCarouselEntry {
    pub title: String,
    pub cast: String,
    pub description: String,
    pub url: String,
    pub rating: String,
    pub mobile_image: MediaAttachment,
    pub desktop_image: MediaAttachment,
}
