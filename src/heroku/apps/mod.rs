//! App, dyno and add-on module

mod api;
mod models;

pub use models::{AddOn, App, Dyno, DynoSize, DynoSizeTable};
