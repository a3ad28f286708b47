//! CLI argument parsing

mod cloud;
mod common;
mod ips;

use clap::{Parser, Subcommand};

use crate::config::{api, credentials, defaults};

pub use cloud::CloudArgs;
pub use common::OutputFormat;
pub use ips::IpsArgs;

/// Heroku inventory CLI
#[derive(Parser, Debug)]
#[command(name = "heroku-listing")]
#[command(version)]
#[command(about = "List Heroku organizations, apps, dynos, add-ons and private space IPs", long_about = None)]
pub struct Cli {
    /// Account email for basic auth
    #[arg(long, global = true, env = credentials::USERNAME_ENV_VAR)]
    pub username: Option<String>,

    /// Account password for basic auth
    #[arg(long, global = true, env = credentials::PASSWORD_ENV_VAR, hide_env_values = true)]
    pub password: Option<String>,

    /// API token (takes precedence over username/password and ~/.netrc)
    #[arg(short = 't', long, global = true, env = credentials::TOKEN_ENV_VAR, hide_env_values = true)]
    pub token: Option<String>,

    /// Platform API base URL
    #[arg(long, global = true, env = "HEROKU_API_URL", default_value = api::BASE_URL)]
    pub api_url: String,

    /// Log level (error, warn, info, debug, trace)
    #[arg(short, long, global = true, default_value = defaults::LOG_LEVEL)]
    pub log_level: String,

    /// Batch mode (no progress spinner)
    #[arg(long, global = true, default_value_t = false)]
    pub batch: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Top-level commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Inventory of organizations, apps, dynos and add-ons
    Cloud(CloudArgs),

    /// Export egress IPs of enterprise private spaces to a YAML file
    Ips(IpsArgs),
}
