//! Cloud inventory: organizations, apps, dynos and add-ons

mod collect;
mod commands;
mod models;
mod summary;

pub use commands::run_cloud_command;
pub use models::{AppInventory, OrganizationInventory};
pub use summary::{
    count_by_type, format_price, merge_parallel, summary_list, total_unit_cost, TypeCount,
};
