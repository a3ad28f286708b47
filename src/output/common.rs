//! Common utilities for output formatters

use chrono::DateTime;
use serde::Serialize;

use crate::error::Result;

/// Print any serializable value as JSON
pub fn print_json<T: Serialize + ?Sized>(data: &T, pretty: bool) -> Result<()> {
    let json = if pretty {
        serde_json::to_string_pretty(data)?
    } else {
        serde_json::to_string(data)?
    };
    println!("{}", json);
    Ok(())
}

/// Print any serializable value as YAML
pub fn print_yaml<T: Serialize + ?Sized>(data: &T) -> Result<()> {
    print!("{}", serde_yml::to_string(data)?);
    Ok(())
}

/// Format an RFC 3339 timestamp as a date (YYYY-MM-DD)
///
/// Unparseable values are shown as-is, missing ones as an empty cell.
pub fn format_date(timestamp: Option<&str>) -> String {
    match timestamp {
        Some(ts) => DateTime::parse_from_rfc3339(ts)
            .map(|dt| dt.format("%Y-%m-%d").to_string())
            .unwrap_or_else(|_| ts.to_string()),
        None => String::new(),
    }
}
