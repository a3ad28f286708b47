//! Cloud inventory command handler

use log::{debug, info, log_enabled, warn, Level};

use crate::cli::CloudArgs;
use crate::heroku::{DynoSizeTable, HerokuClient, Partial};
use crate::output::output_inventory;
use crate::ui::{create_spinner, finish_spinner};

/// Run the cloud inventory command
///
/// Any aggregation failure aborts before rendering. A failing dyno size
/// lookup only degrades the report to zero cost.
pub async fn run_cloud_command(
    client: &HerokuClient,
    args: &CloudArgs,
    quiet: bool,
) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let spinner = create_spinner("Collecting organizations, apps, dynos and add-ons...", quiet);

    let organizations = match client
        .collect_inventory()
        .await
        .and_then(Partial::into_result)
    {
        Ok(organizations) => organizations,
        Err(e) => {
            finish_spinner(spinner);
            return Err(e.into());
        }
    };

    let dyno_sizes = match client.get_dyno_sizes().await {
        Ok(sizes) => sizes,
        Err(e) => {
            warn!("Could not fetch dyno sizes, reporting zero cost: {}", e);
            DynoSizeTable::new()
        }
    };

    finish_spinner(spinner);

    if log_enabled!(Level::Debug) {
        match client.get_rate_limit_remaining().await {
            Ok(remaining) => debug!("{} API requests remaining", remaining),
            Err(e) => debug!("Could not fetch rate limit: {}", e),
        }
    }

    info!(
        "Collected {} organizations, {} apps",
        organizations.len(),
        organizations
            .iter()
            .map(|o| o.applications.len())
            .sum::<usize>()
    );

    output_inventory(&organizations, &dyno_sizes, args.dyno_unit_price, &args.format)?;
    Ok(())
}
