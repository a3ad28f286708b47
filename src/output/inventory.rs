//! Cloud inventory renderers

use comfy_table::{presets::NOTHING, Table};
use serde::Serialize;

use super::common::{format_date, print_json, print_yaml};
use crate::cli::OutputFormat;
use crate::error::Result;
use crate::heroku::{
    format_price, merge_parallel, AddOn, App, AppInventory, Dyno, DynoSizeTable, Organization,
    OrganizationInventory, TypeCount,
};

const NOT_RUNNING: &str = "NOT RUNNING";

/// Serializable organization for JSON/YAML output
#[derive(Serialize)]
struct OrganizationReport<'a> {
    organization: &'a Organization,
    applications: Vec<AppReport<'a>>,
}

/// Serializable app with its computed summaries
#[derive(Serialize)]
struct AppReport<'a> {
    application: &'a App,
    dynos: &'a [Dyno],
    addons: &'a [AddOn],
    dyno_summary: Vec<TypeCount>,
    addon_summary: Vec<TypeCount>,
    dyno_units: u64,
}

impl<'a> AppReport<'a> {
    fn new(inventory: &'a AppInventory, sizes: &DynoSizeTable) -> Self {
        Self {
            application: &inventory.application,
            dynos: &inventory.dynos,
            addons: &inventory.addons,
            dyno_summary: inventory.dyno_summary(),
            addon_summary: inventory.addon_summary(),
            dyno_units: inventory.dyno_units(sizes),
        }
    }
}

fn build_report<'a>(
    organizations: &'a [OrganizationInventory],
    sizes: &DynoSizeTable,
) -> Vec<OrganizationReport<'a>> {
    organizations
        .iter()
        .map(|org| OrganizationReport {
            organization: &org.organization,
            applications: org
                .applications
                .iter()
                .map(|app| AppReport::new(app, sizes))
                .collect(),
        })
        .collect()
}

/// Build the inventory table: one row per app followed by its dyno/add-on rows
fn build_table(
    organizations: &[OrganizationInventory],
    sizes: &DynoSizeTable,
    dyno_unit_price: u32,
) -> Table {
    let mut table = Table::new();
    table.load_preset(NOTHING).set_header(vec![
        "Org", "Name", "Released", "Updated", "Dynos", "D.Units", "Addons", "Stack",
    ]);

    for org in organizations {
        for app in &org.applications {
            let status = if app.is_running() { "" } else { NOT_RUNNING };
            let price = format_price(app.dyno_units(sizes), dyno_unit_price);
            table.add_row(vec![
                org.organization.name.clone(),
                app.application.name.clone(),
                format_date(app.application.released_at.as_deref()),
                format_date(app.application.updated_at.as_deref()),
                status.to_string(),
                price,
                String::new(),
                app.application.stack_name().to_string(),
            ]);

            for [dyno, addon] in merge_parallel(&app.dyno_summary(), &app.addon_summary()) {
                let mut row = vec![String::new(); 8];
                row[4] = dyno;
                row[6] = addon;
                table.add_row(row);
            }
        }
    }

    table
}

fn price_caption(dyno_unit_price: u32) -> String {
    format!(
        "Price by dyno unit is {} a month. Total price is for a full time running dyno.",
        dyno_unit_price
    )
}

/// Render the collected inventory in the requested format
pub fn output_inventory(
    organizations: &[OrganizationInventory],
    sizes: &DynoSizeTable,
    dyno_unit_price: u32,
    format: &OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Table => {
            println!("{}", build_table(organizations, sizes, dyno_unit_price));
            println!("{}", price_caption(dyno_unit_price));
            Ok(())
        }
        OutputFormat::Json => print_json(&build_report(organizations, sizes), false),
        OutputFormat::PrettyJson => print_json(&build_report(organizations, sizes), true),
        OutputFormat::Yaml => print_yaml(&build_report(organizations, sizes)),
    }
}
