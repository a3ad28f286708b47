//! Ips command arguments

use clap::Parser;
use std::path::PathBuf;

use crate::config::defaults;

/// Arguments for 'ips' command
#[derive(Parser, Debug)]
pub struct IpsArgs {
    /// YAML file to write
    #[arg(short = 'o', long, default_value = defaults::IP_LIST_FILE)]
    pub output: PathBuf,

    /// Name of the IP list
    #[arg(long, default_value = defaults::IP_LIST_NAME)]
    pub name: String,

    /// Description of the IP list
    #[arg(long, default_value = defaults::IP_LIST_DESCRIPTION)]
    pub description: String,
}
