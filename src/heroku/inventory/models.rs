//! Aggregated inventory records

use serde::Serialize;

use crate::heroku::traits::HerokuResource;
use crate::heroku::{AddOn, App, Dyno, DynoSizeTable, Organization};

use super::summary::{count_by_type, summary_list, total_unit_cost, TypeCount};

/// Organization with every app it owns
#[derive(Serialize, Debug, Clone)]
pub struct OrganizationInventory {
    pub organization: Organization,
    pub applications: Vec<AppInventory>,
}

/// App with its dynos and add-ons
#[derive(Serialize, Debug, Clone)]
pub struct AppInventory {
    pub application: App,
    pub dynos: Vec<Dyno>,
    pub addons: Vec<AddOn>,
}

impl AppInventory {
    /// Dyno counts grouped by size
    pub fn dyno_summary(&self) -> Vec<TypeCount> {
        summary_list(count_by_type(&self.dynos, |d| d.size.as_str()))
    }

    /// Add-on counts grouped by service
    pub fn addon_summary(&self) -> Vec<TypeCount> {
        summary_list(count_by_type(&self.addons, |a| a.service_name()))
    }

    /// Dyno units consumed by all dynos of the app
    pub fn dyno_units(&self, sizes: &DynoSizeTable) -> u64 {
        total_unit_cost(&self.dyno_summary(), sizes)
    }

    /// Whether the app has any dyno
    pub fn is_running(&self) -> bool {
        !self.dynos.is_empty()
    }
}

impl HerokuResource for OrganizationInventory {
    fn name(&self) -> &str {
        &self.organization.name
    }
}

impl HerokuResource for AppInventory {
    fn name(&self) -> &str {
        &self.application.name
    }
}
