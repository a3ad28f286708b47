//! Heroku Platform API module
//!
//! This module provides the API client, the rate-limited aggregation engine,
//! and the two inventory pipelines built on top of it.

mod account;
pub mod aggregate;
pub mod apps;
mod client;
mod credentials;
pub mod inventory;
pub mod organizations;
pub mod rate_limit;
pub mod spaces;
pub mod traits;

use serde::{Deserialize, Serialize};

pub use account::RateLimit;
pub use aggregate::{AggregationPass, Partial};
pub use apps::{AddOn, App, Dyno, DynoSize, DynoSizeTable};
pub use client::HerokuClient;
pub use credentials::{Credentials, CredentialsResolver};
pub use inventory::{
    count_by_type, format_price, merge_parallel, run_cloud_command, summary_list,
    total_unit_cost, AppInventory, OrganizationInventory, TypeCount,
};
pub use organizations::Organization;
pub use rate_limit::RateLimiter;
pub use spaces::{run_ips_command, IpList, IpListItem, Space, SpaceNat, Team};
pub use traits::HerokuResource;

/// Embedded reference to another resource (stack, team, add-on service, ...)
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct Reference {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
}

/// Error body returned by the API on non-success responses
#[derive(Deserialize, Debug)]
pub(crate) struct ApiErrorBody {
    #[allow(dead_code)]
    #[serde(default)]
    pub id: Option<String>,
    pub message: String,
}
