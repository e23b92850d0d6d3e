use serde::{Deserialize, Serialize};

use crate::ids::ResourceId;

/// Movie summary as returned by the admin movie listing.
///
/// Only the fields the console consumes are modeled; the listing
/// carries more and serde skips the rest. The `url` is the canonical
/// reference other resources link by; the id is purely a local
/// selection key.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Movie {
    #[serde(rename = "_id")]
    pub id: ResourceId,
    #[serde(rename = "movieName")]
    pub name: String,
    pub url: String,
}
