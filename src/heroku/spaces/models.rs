//! Team, space and IP list data models

use serde::{Deserialize, Serialize};

use crate::heroku::traits::HerokuResource;
use crate::heroku::Reference;

/// Team type that is entitled to private spaces
pub const TEAM_TYPE_ENTERPRISE: &str = "enterprise";

/// Team data from the Platform API
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct Team {
    pub id: String,
    pub name: String,
    #[serde(rename = "type", default)]
    pub team_type: Option<String>,
}

impl Team {
    /// Whether the team belongs to an enterprise account
    pub fn is_enterprise(&self) -> bool {
        self.team_type.as_deref() == Some(TEAM_TYPE_ENTERPRISE)
    }
}

/// Private space data from the Platform API
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct Space {
    pub id: String,
    pub name: String,
    pub team: Reference,
    #[serde(default)]
    pub region: Option<Reference>,
    #[serde(default)]
    pub state: Option<String>,
}

/// Outbound NAT configuration of a space
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct SpaceNat {
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub sources: Vec<String>,
}

/// Exported IP list document
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct IpList {
    pub name: String,
    pub description: String,
    pub items: Vec<IpListItem>,
}

/// Egress IPs of one space
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct IpListItem {
    pub name: String,
    pub description: String,
    pub ips: Vec<String>,
}

impl IpListItem {
    /// Build the item for a space, named "<team>/<space>"
    pub fn for_space(space: &Space, ips: Vec<String>) -> Self {
        Self {
            name: format!("{}/{}", space.team.name, space.name),
            description: format!("IP list from `{} > {}`", space.team.name, space.name),
            ips,
        }
    }
}

impl HerokuResource for IpListItem {
    fn name(&self) -> &str {
        &self.name
    }
}
