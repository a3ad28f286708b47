//! Team, private space and egress IP module

mod api;
mod collect;
mod commands;
mod models;

pub use commands::run_ips_command;
pub use models::{IpList, IpListItem, Space, SpaceNat, Team, TEAM_TYPE_ENTERPRISE};
