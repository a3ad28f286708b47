//! Cloud command arguments

use clap::Parser;

use super::common::OutputFormat;
use crate::config::defaults;

/// Arguments for 'cloud' command
#[derive(Parser, Debug)]
pub struct CloudArgs {
    /// Output format
    #[arg(
        short = 'o',
        long = "format",
        env = "OUTPUT_FORMAT",
        value_enum,
        default_value_t = OutputFormat::Table
    )]
    pub format: OutputFormat,

    /// Price of one dyno unit, used for the cost column
    #[arg(long, env = "HEROKU_DYNO_PRICE", default_value_t = defaults::DYNO_UNIT_PRICE)]
    pub dyno_unit_price: u32,
}
