//! Command-line argument parsing and handling.

pub mod definition;
pub mod render;
pub mod utils;

pub use definition::Args;
pub use render::{RunError, run};
pub use utils::determine_log_level;
