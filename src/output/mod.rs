//! Output formatting module
//!
//! Renders the cloud inventory as a table, JSON or YAML and writes the IP
//! list export.

mod common;
mod inventory;
mod ip_list;

pub use common::{format_date, print_json, print_yaml};
pub use inventory::output_inventory;
pub use ip_list::write_ip_list;
