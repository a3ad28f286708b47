//! heroku-listing - Inventory of Heroku organizations and private spaces
//!
//! A CLI tool that walks every organization the account can see, collects
//! apps, dynos and add-ons with a rate-limited fan-out, and reports them. It
//! can also export the egress IPs of enterprise private spaces to YAML.
//!
//! # Example
//!
//! ```bash
//! # Inventory as a table, pricing dyno units at 25$
//! heroku-listing cloud --dyno-unit-price 25
//!
//! # Inventory as indented JSON
//! heroku-listing cloud -o pretty-json
//!
//! # Write the private space IP list
//! heroku-listing ips -o ips-listing.yml
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod heroku;
pub mod output;
pub mod ui;

pub use cli::{Cli, CloudArgs, Command, IpsArgs, OutputFormat};
pub use error::{HerokuError, Result};
pub use heroku::{
    run_cloud_command, run_ips_command, AggregationPass, Credentials, CredentialsResolver,
    HerokuClient, HerokuResource, IpList, OrganizationInventory, Partial, RateLimiter,
};
pub use output::{output_inventory, write_ip_list};
