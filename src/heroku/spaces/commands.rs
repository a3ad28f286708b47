//! IP list command handler

use log::info;

use crate::cli::IpsArgs;
use crate::heroku::{HerokuClient, Partial};
use crate::output::write_ip_list;
use crate::ui::{create_spinner, finish_spinner};

/// Run the ips command
///
/// The file is only written when every NAT lookup succeeded.
pub async fn run_ips_command(
    client: &HerokuClient,
    args: &IpsArgs,
    quiet: bool,
) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let spinner = create_spinner("Collecting enterprise teams, spaces and NAT sources...", quiet);

    let result = client
        .collect_ip_list(&args.name, &args.description)
        .await
        .and_then(Partial::into_result);
    finish_spinner(spinner);
    let ip_list = result?;

    info!("Collected {} IP list items", ip_list.items.len());

    write_ip_list(&ip_list, &args.output)?;
    println!("Success! Created file: {}", args.output.display());
    Ok(())
}
