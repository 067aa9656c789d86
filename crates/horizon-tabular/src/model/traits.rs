//! The host-facing table model contract.
//!
//! This module defines the trait a host table control binds to, and the
//! signals models emit to keep the host in sync.

use horizon_tabular_core::Signal;

use super::column::ColumnSpec;
use super::decoration::ImageHandle;
use super::sort::{SortOrder, SortState};
use super::value::CellValue;
use crate::error::Result;

/// The contract between a table model and the host control displaying it.
///
/// A host typically:
///
/// - queries [`columns`](TabularModel::columns) once at bind time to build headers;
/// - queries [`row_count`](TabularModel::row_count) after every reset;
/// - queries [`value`](TabularModel::value) lazily for visible cells only;
/// - reads and writes check state via [`checked`](TabularModel::checked) and
///   [`set_checked`](TabularModel::set_checked);
/// - queries [`image`](TabularModel::image) for leading icons;
/// - calls [`sort`](TabularModel::sort) (or [`toggle_sort`](TabularModel::toggle_sort))
///   when the user clicks a header;
/// - connects to [`ModelSignals::model_reset`] and drops every cached row
///   index when it fires.
///
/// Row indices are positional. Sorting and resets change which row an index
/// refers to.
///
/// # Example
///
/// ```ignore
/// use horizon_tabular::model::TabularModel;
///
/// fn print_first_row(model: &dyn TabularModel) -> horizon_tabular::Result<()> {
///     if model.row_count() == 0 {
///         return Ok(());
///     }
///     for column in 0..model.column_count() {
///         print!("{}\t", model.display_text(0, column)?);
///     }
///     println!();
///     Ok(())
/// }
/// ```
pub trait TabularModel: Send + Sync {
    /// Returns the static column metadata.
    fn columns(&self) -> &[ColumnSpec];

    /// Returns the current number of rows.
    fn row_count(&self) -> usize;

    /// Returns the value of a cell.
    ///
    /// The value's kind always matches the column's declared kind. Fails with
    /// an out-of-range error for an invalid row or column.
    fn value(&self, row: usize, column: usize) -> Result<CellValue>;

    /// Returns whether a row is checked.
    fn checked(&self, row: usize) -> Result<bool>;

    /// Sets the check state of a row.
    fn set_checked(&self, row: usize, checked: bool) -> Result<()>;

    /// Returns the image annotation for a row, if the model has any.
    fn image(&self, row: usize) -> Result<Option<ImageHandle>>;

    /// Reorders the rows by `column` in the given direction.
    ///
    /// On error (unknown column) neither the row order nor the recorded sort
    /// state change.
    fn sort(&self, column: usize, order: SortOrder) -> Result<()>;

    /// Returns the most recently applied sort, or `None` if never sorted.
    fn sort_state(&self) -> Option<SortState>;

    /// Returns the signals for this model.
    fn signals(&self) -> &ModelSignals;

    // -------------------------------------------------------------------------
    // Convenience methods
    // -------------------------------------------------------------------------

    /// Returns the number of columns.
    fn column_count(&self) -> usize {
        self.columns().len()
    }

    /// Returns `true` if the model has no rows.
    fn is_empty(&self) -> bool {
        self.row_count() == 0
    }

    /// Sorts in response to a header click.
    ///
    /// Clicking the active sort column flips its direction; any other column
    /// sorts ascending. Returns the order that was applied.
    fn toggle_sort(&self, column: usize) -> Result<SortOrder> {
        let order = SortState::next_order_for(self.sort_state(), column);
        self.sort(column, order)?;
        Ok(order)
    }

    /// Returns the cell value formatted with its column's format string.
    fn display_text(&self, row: usize, column: usize) -> Result<String> {
        let value = self.value(row, column)?;
        Ok(self.columns()[column].display_text(&value))
    }

    /// Returns the indices of all checked rows, in row order.
    fn checked_rows(&self) -> Vec<usize> {
        (0..self.row_count())
            .filter(|&row| self.checked(row).unwrap_or(false))
            .collect()
    }
}

/// Collection of signals emitted by table models.
///
/// # Signal Usage
///
/// - **Bulk replacement**: `model_about_to_reset`, then `model_reset`
/// - **Reordering**: `layout_about_to_change`, then `layout_changed`, then `sort_changed`
/// - **Check state**: `row_changed`
///
/// All signals are delivered synchronously, in connection order, with no
/// model lock held, so slots may query the model.
pub struct ModelSignals {
    /// Emitted just before the row collection is replaced.
    pub model_about_to_reset: Signal<()>,

    /// Emitted after the row collection has been replaced. Every previously
    /// reported row index is invalid from here on.
    pub model_reset: Signal<()>,

    /// Emitted before rows are reordered. The new sort state is already
    /// visible through `sort_state()`.
    pub layout_about_to_change: Signal<()>,

    /// Emitted after rows have been reordered.
    pub layout_changed: Signal<()>,

    /// Emitted after a successful sort.
    /// Args: (column, order)
    pub sort_changed: Signal<(usize, SortOrder)>,

    /// Emitted when a single row's state (its check flag) changed.
    /// Args: row index
    pub row_changed: Signal<usize>,
}

impl Default for ModelSignals {
    fn default() -> Self {
        Self::new()
    }
}

impl ModelSignals {
    /// Creates a new set of model signals.
    pub fn new() -> Self {
        Self {
            model_about_to_reset: Signal::new(),
            model_reset: Signal::new(),
            layout_about_to_change: Signal::new(),
            layout_changed: Signal::new(),
            sort_changed: Signal::new(),
            row_changed: Signal::new(),
        }
    }

    /// Emits signals for a model reset.
    ///
    /// Calls the provided function between the about_to_reset and reset signals.
    pub fn emit_reset<F>(&self, reset_fn: F)
    where
        F: FnOnce(),
    {
        self.model_about_to_reset.emit(());
        reset_fn();
        self.model_reset.emit(());
    }

    /// Emits signals for a layout change.
    ///
    /// Calls the provided function between the about_to_change and changed signals.
    pub fn emit_layout_changed<F>(&self, change_fn: F)
    where
        F: FnOnce(),
    {
        self.layout_about_to_change.emit(());
        change_fn();
        self.layout_changed.emit(());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;
    use std::sync::Arc;

    #[test]
    fn test_model_signals_creation() {
        let signals = ModelSignals::new();
        assert_eq!(signals.model_reset.connection_count(), 0);
        assert_eq!(signals.row_changed.connection_count(), 0);
    }

    #[test]
    fn test_emit_reset() {
        let signals = ModelSignals::new();
        let events = Arc::new(Mutex::new(Vec::new()));

        let about = events.clone();
        signals.model_about_to_reset.connect(move |_| about.lock().push("about"));
        let done = events.clone();
        signals.model_reset.connect(move |_| done.lock().push("reset"));

        let inside = events.clone();
        signals.emit_reset(|| inside.lock().push("replace"));

        assert_eq!(*events.lock(), vec!["about", "replace", "reset"]);
    }

    #[test]
    fn test_emit_layout_changed() {
        let signals = ModelSignals::new();
        let counter = Arc::new(Mutex::new(0));

        let c1 = counter.clone();
        signals.layout_about_to_change.connect(move |_| *c1.lock() += 1);
        let c2 = counter.clone();
        signals.layout_changed.connect(move |_| *c2.lock() += 10);

        signals.emit_layout_changed(|| {});
        assert_eq!(*counter.lock(), 11);
    }
}
