//! Common traits for Heroku resources

/// Common trait for named records that are rendered in name order
pub trait HerokuResource {
    /// Get the human-readable name
    fn name(&self) -> &str;
}

/// Sort resources by name ascending
///
/// Aggregation collects results in completion order; this restores a
/// deterministic order before rendering.
pub fn sort_by_name<T: HerokuResource>(items: &mut [T]) {
    items.sort_by(|a, b| a.name().cmp(b.name()));
}
