//! Table models for Horizon Tabular.
//!
//! This module separates tabular data from the control that displays it. A
//! host table control binds to a [`TabularModel`] and:
//!
//! - reads static column metadata ([`ColumnSpec`])
//! - pulls typed cell values ([`CellValue`]) lazily, by row and column
//! - reads and toggles per-row check state
//! - shows per-row image annotations ([`ImageHandle`])
//! - requests sorts by column ([`SortOrder`])
//! - listens to [`ModelSignals`] to stay in sync
//!
//! # Model Implementations
//!
//! - [`TableModel`]: generic model over any [`TableRow`] type
//! - [`FooModel`]: the randomly generated example dataset
//!
//! # Example
//!
//! ```
//! use horizon_tabular::config::DatasetConfig;
//! use horizon_tabular::model::{FooModel, SortOrder, TabularModel};
//!
//! let model = FooModel::new(DatasetConfig::default().with_seed(7).with_max_rows(10));
//!
//! model.signals().model_reset.connect(|_| {
//!     println!("rows replaced, drop cached indices");
//! });
//!
//! model.sort(0, SortOrder::Descending).unwrap();
//! for row in 0..model.row_count() {
//!     println!("{}", model.display_text(row, 2).unwrap());
//! }
//! ```
//!
//! # Architecture Overview
//!
//! ```text
//! ┌──────────────┐     ┌──────────────┐     ┌──────────────┐
//! │ TableModel<R>│────>│ ModelSignals │────>│     Host     │
//! │  (TableRow)  │     │              │     │              │
//! └──────────────┘     └──────────────┘     └──────────────┘
//!        ^                                         │
//!        │        value / checked / image / sort   │
//!        └─────────────────────────────────────────┘
//! ```

mod column;
mod decoration;
mod foo;
mod sort;
mod table_model;
mod traits;
mod value;

pub use column::{ColumnSpec, HorizontalAlignment};
pub use decoration::{DecorationKind, ImageHandle, RowImages};
pub use foo::{Foo, FooGenerator, FooModel, COLUMN_BAR, COLUMN_BAZ, COLUMN_INDEX, COLUMN_QUUX};
pub use sort::{RowComparator, SortOrder, SortState};
pub use table_model::{TableModel, TableRow};
pub use traits::{ModelSignals, TabularModel};
pub use value::{CellKind, CellValue, DEFAULT_TIMESTAMP_FORMAT};
