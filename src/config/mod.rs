//! Wage table configuration.
//!
//! The wage table is read-only data built once at start-up: either the
//! built-in [`WageTable::default`] or a table loaded from YAML.
//!
//! # Example
//!
//! ```no_run
//! use weekly_payroll::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/wage_table.yaml").unwrap();
//! for band in config.table().bands() {
//!     println!("{}: {}-{}", band.name, band.from, band.to);
//! }
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{MINUTES_PER_DAY, MINUTES_PER_HOUR, WageBand, WageTable, WageTableConfig};
