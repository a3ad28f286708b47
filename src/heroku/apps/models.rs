//! App, dyno and add-on data models

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::heroku::Reference;

/// Dyno units per dyno size name
pub type DynoSizeTable = HashMap<String, u32>;

/// Organization app from the Platform API
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct App {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub released_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
    #[serde(default)]
    pub stack: Option<Reference>,
    #[serde(default)]
    pub region: Option<Reference>,
    #[serde(default)]
    pub web_url: Option<String>,
}

impl App {
    /// Get the stack name, defaulting to empty string if not available
    pub fn stack_name(&self) -> &str {
        self.stack.as_ref().map(|s| s.name.as_str()).unwrap_or("")
    }
}

/// Dyno (running process) of an app
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct Dyno {
    pub id: String,
    pub name: String,
    /// Size class, e.g. "standard-1x"
    pub size: String,
    #[serde(rename = "type", default)]
    pub dyno_type: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub command: Option<String>,
}

/// Add-on attached to an app
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct AddOn {
    pub id: String,
    pub name: String,
    pub addon_service: Reference,
    #[serde(default)]
    pub plan: Option<Reference>,
    #[serde(default)]
    pub state: Option<String>,
}

impl AddOn {
    /// Name of the service backing this add-on, e.g. "heroku-redis"
    pub fn service_name(&self) -> &str {
        &self.addon_service.name
    }
}

/// Dyno size with its unit cost
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct DynoSize {
    pub name: String,
    #[serde(default)]
    pub dyno_units: u32,
}
