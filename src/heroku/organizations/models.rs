//! Organization data models

use serde::{Deserialize, Serialize};

/// Organization data from the Platform API
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Organization {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub role: Option<String>,
}
