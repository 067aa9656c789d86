//! Prelude module for Horizon Tabular.
//!
//! This module re-exports the most commonly used types for convenient importing:
//!
//! ```ignore
//! use horizon_tabular::prelude::*;
//! ```

// ============================================================================
// Signal/Slot System
// ============================================================================

pub use crate::signal::{ConnectionId, Signal};

// ============================================================================
// Table Models
// ============================================================================

pub use crate::model::{
    CellKind, CellValue, ColumnSpec, HorizontalAlignment, ImageHandle, ModelSignals, RowImages,
    SortOrder, SortState, TableModel, TableRow, TabularModel,
};

// ============================================================================
// Example Dataset
// ============================================================================

pub use crate::model::{COLUMN_BAR, COLUMN_BAZ, COLUMN_INDEX, COLUMN_QUUX, Foo, FooModel};

// ============================================================================
// Errors and Configuration
// ============================================================================

pub use crate::config::DatasetConfig;
pub use crate::{ModelError, Result};
