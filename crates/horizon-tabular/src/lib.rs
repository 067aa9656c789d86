//! Horizon Tabular - toolkit-independent table models.
//!
//! This is the main crate that re-exports the core notification plumbing
//! alongside the model layer.
//!
//! # Example
//!
//! ```no_run
//! use horizon_tabular::config::DatasetConfig;
//! use horizon_tabular::model::{FooModel, TabularModel};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = DatasetConfig::load_toml("dataset.toml")?;
//!     let model = FooModel::new(config);
//!     // Bind `model` to a table control here...
//!     println!("{} rows", model.row_count());
//!     Ok(())
//! }
//! ```

pub use horizon_tabular_core::*;

pub mod config;
mod error;
pub mod model;
pub mod prelude;

pub use error::{ModelError, Result};
