//! heroku-listing - Main entry point

use clap::Parser;
use log::{debug, info};
use std::process::exit;

use heroku_listing::{
    run_cloud_command, run_ips_command, Cli, Command, CredentialsResolver, HerokuClient,
};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&cli.log_level))
        .init();

    info!("Starting heroku-listing v{}", env!("CARGO_PKG_VERSION"));

    if let Err(e) = run(cli).await {
        eprintln!("Error: {}", e);
        exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let credentials = CredentialsResolver::new().resolve(
        cli.token.as_deref(),
        cli.username.as_deref(),
        cli.password.as_deref(),
    )?;

    debug!("Using API at {}", cli.api_url);
    let client = HerokuClient::new(credentials, cli.api_url.clone());

    let result = match &cli.command {
        Command::Cloud(args) => run_cloud_command(&client, args, cli.batch).await,
        Command::Ips(args) => run_ips_command(&client, args, cli.batch).await,
    };

    if result.is_ok() {
        info!("Completed successfully");
    }
    result
}
