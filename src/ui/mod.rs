//! UI utilities for terminal output
//!
//! Progress feedback shown on stderr while the aggregation runs.

mod spinner;

pub use spinner::{create_spinner, finish_spinner};
