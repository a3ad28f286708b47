//! Counting and merging helpers applied after aggregation

use serde::Serialize;
use std::collections::BTreeMap;

use crate::heroku::DynoSizeTable;

/// Occurrences of one type key (dyno size or add-on service)
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct TypeCount {
    pub key: String,
    pub count: usize,
}

impl TypeCount {
    /// Table cell text, e.g. "standard-1x 2"
    pub fn label(&self) -> String {
        format!("{} {}", self.key, self.count)
    }
}

/// Count items grouped by the key returned from `key_fn`
pub fn count_by_type<T, F>(items: &[T], key_fn: F) -> BTreeMap<String, usize>
where
    F: Fn(&T) -> &str,
{
    let mut counts = BTreeMap::new();
    for item in items {
        *counts.entry(key_fn(item).to_string()).or_insert(0) += 1;
    }
    counts
}

/// Turn a count mapping into a list ordered by key
pub fn summary_list(counts: BTreeMap<String, usize>) -> Vec<TypeCount> {
    counts
        .into_iter()
        .map(|(key, count)| TypeCount { key, count })
        .collect()
}

/// Zip two summaries row by row
///
/// Produces `max(dynos.len(), addons.len())` rows of `[dyno, addon]`; the
/// shorter side is padded with empty cells.
pub fn merge_parallel(dynos: &[TypeCount], addons: &[TypeCount]) -> Vec<[String; 2]> {
    let rows = dynos.len().max(addons.len());
    (0..rows)
        .map(|i| {
            let dyno = dynos.get(i).map(TypeCount::label).unwrap_or_default();
            let addon = addons.get(i).map(TypeCount::label).unwrap_or_default();
            [dyno, addon]
        })
        .collect()
}

/// Total dyno units of a dyno summary; unknown sizes cost nothing
pub fn total_unit_cost(dynos: &[TypeCount], sizes: &DynoSizeTable) -> u64 {
    dynos
        .iter()
        .map(|d| {
            let units = u64::from(sizes.get(&d.key).copied().unwrap_or(0));
            (d.count as u64).saturating_mul(units)
        })
        .fold(0u64, u64::saturating_add)
}

/// Price cell for a number of dyno units, empty when nothing runs
pub fn format_price(units: u64, unit_price: u32) -> String {
    if units == 0 {
        return String::new();
    }
    format!("{} ({}$)", units, units.saturating_mul(u64::from(unit_price)))
}
