use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// Lifecycle flag carried by advertisements and video ads.
///
/// Movies and carousel entries have no status. The wire values are
/// exactly `active` and `disabled`; deserialization of anything else
/// fails rather than producing a client-side state the backend never
/// defined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceStatus {
    Active,
    Disabled,
}

impl ResourceStatus {
    /// The full option set, in the order the selector presents it.
    pub const ALL: [ResourceStatus; 2] = [ResourceStatus::Active, ResourceStatus::Disabled];

    /// Wire representation, also used as the JSON body value on status
    /// update calls.
    pub fn as_str(self) -> &'static str {
        match self {
            ResourceStatus::Active => "active",
            ResourceStatus::Disabled => "disabled",
        }
    }
}

impl Display for ResourceStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ResourceStatus {
    type Err = ModelError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw {
            "active" => Ok(ResourceStatus::Active),
            "disabled" => Ok(ResourceStatus::Disabled),
            other => Err(ModelError::UnknownStatus(other.to_owned())),
        }
    }
}
