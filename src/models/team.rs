//! Team identity.

use serde::{Deserialize, Serialize};

/// Team identifier. Kept as a string so seed ids like `"2"` round-trip unchanged.
pub type TeamId = String;

/// A club's team taking part in a championship.
#[derive(Clone, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub struct Team {
    #[serde(alias = "teamId")]
    pub id: TeamId,
    pub name: String,
}

impl Team {
    pub fn new(id: impl Into<TeamId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}
