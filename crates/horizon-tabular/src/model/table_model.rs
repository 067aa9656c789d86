//! Table model implementation over typed rows.
//!
//! `TableModel<R>` owns a collection of rows of some [`TableRow`] type and
//! implements the [`TabularModel`] contract on top of it: positional cell
//! access, per-row check state, parity-based row images, per-column sorting
//! and reset notification.

use parking_lot::RwLock;
use tracing::{debug, trace, warn};

use horizon_tabular_core::PerfSpan;
use horizon_tabular_core::logging::targets;

use super::column::ColumnSpec;
use super::decoration::{ImageHandle, RowImages};
use super::sort::{RowComparator, SortOrder, SortState};
use super::traits::{ModelSignals, TabularModel};
use super::value::CellValue;
use crate::error::{ModelError, Result};

/// A row type that can be shown by a [`TableModel`].
///
/// The column set and the comparator table are properties of the row type,
/// not of a model instance.
///
/// # Comparators
///
/// `comparators()[c]` orders rows by column `c`, ascending. Comparators must
/// be strict total orders (ties broken by a unique key) so that a sort has
/// exactly one result: re-sorting is then idempotent and the descending order
/// is the exact reverse of the ascending one.
///
/// # Example
///
/// ```
/// use std::cmp::Ordering;
/// use horizon_tabular::model::{CellKind, CellValue, ColumnSpec, RowComparator, TableRow};
///
/// struct Person {
///     id: i64,
///     name: String,
/// }
///
/// fn by_id(a: &Person, b: &Person) -> Ordering {
///     a.id.cmp(&b.id)
/// }
///
/// fn by_name(a: &Person, b: &Person) -> Ordering {
///     a.name.cmp(&b.name).then_with(|| a.id.cmp(&b.id))
/// }
///
/// impl TableRow for Person {
///     fn columns() -> Vec<ColumnSpec> {
///         vec![
///             ColumnSpec::new("Id", CellKind::Int),
///             ColumnSpec::new("Name", CellKind::Text),
///         ]
///     }
///
///     fn value(&self, column: usize) -> Option<CellValue> {
///         match column {
///             0 => Some(CellValue::Int(self.id)),
///             1 => Some(CellValue::from(self.name.as_str())),
///             _ => None,
///         }
///     }
///
///     fn comparators() -> &'static [RowComparator<Self>] {
///         const COMPARATORS: &[RowComparator<Person>] = &[by_id, by_name];
///         COMPARATORS
///     }
/// }
/// ```
pub trait TableRow: Send + Sync + 'static {
    /// Returns the column metadata for this row type.
    fn columns() -> Vec<ColumnSpec>
    where
        Self: Sized;

    /// Returns the value of `column`, or `None` if the column does not exist.
    fn value(&self, column: usize) -> Option<CellValue>;

    /// Returns the ascending comparator for each column, indexed by column.
    fn comparators() -> &'static [RowComparator<Self>]
    where
        Self: Sized;
}

/// A stored row together with its check flag.
///
/// The flag lives next to the row so it travels with it when rows are
/// reordered.
#[derive(Debug, Clone)]
struct RowEntry<R> {
    item: R,
    checked: bool,
}

impl<R> RowEntry<R> {
    fn new(item: R) -> Self {
        Self {
            item,
            checked: false,
        }
    }
}

/// A sortable, checkable table model over rows of type `R`.
///
/// # Example
///
/// ```ignore
/// use horizon_tabular::model::{SortOrder, TableModel, TabularModel};
///
/// let model = TableModel::new(people);
/// model.signals().model_reset.connect(|_| println!("rows replaced"));
///
/// model.sort(1, SortOrder::Ascending)?;
/// model.set_checked(0, true)?;
/// println!("{}", model.display_text(0, 1)?);
/// ```
pub struct TableModel<R> {
    rows: RwLock<Vec<RowEntry<R>>>,
    columns: Vec<ColumnSpec>,
    images: Option<RowImages>,
    sort_state: RwLock<Option<SortState>>,
    signals: ModelSignals,
}

impl<R: TableRow> TableModel<R> {
    /// Creates a new, unsorted table model owning `rows`.
    pub fn new(rows: Vec<R>) -> Self {
        Self {
            rows: RwLock::new(rows.into_iter().map(RowEntry::new).collect()),
            columns: R::columns(),
            images: None,
            sort_state: RwLock::new(None),
            signals: ModelSignals::new(),
        }
    }

    /// Creates an empty table model.
    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    /// Adds alternating row images to the model.
    pub fn with_images(mut self, images: RowImages) -> Self {
        self.images = Some(images);
        self
    }

    /// Replaces the whole row collection.
    ///
    /// Publishes exactly one reset notification, then reapplies the active
    /// sort (if any), so hosts are told about the new collection before they
    /// consume values in the new order. Check flags start cleared.
    pub fn replace_rows(&self, rows: Vec<R>) {
        let row_count = rows.len();
        self.signals.emit_reset(|| {
            *self.rows.write() = rows.into_iter().map(RowEntry::new).collect();
        });
        debug!(target: targets::MODEL, row_count, "rows reset");

        let state = *self.sort_state.read();
        if let Some(state) = state {
            // The recorded column came from a successful sort, so it is valid.
            if let Err(err) = self.sort(state.column, state.order) {
                warn!(target: targets::MODEL, %err, "failed to reapply sort after reset");
            }
        }
    }

    /// Removes all rows.
    pub fn clear(&self) {
        self.replace_rows(Vec::new());
    }

    /// Calls `f` with the row at `row`.
    pub fn with_row<F, T>(&self, row: usize, f: F) -> Result<T>
    where
        F: FnOnce(&R) -> T,
    {
        let rows = self.rows.read();
        rows.get(row)
            .map(|entry| f(&entry.item))
            .ok_or_else(|| ModelError::row_out_of_range(row, rows.len()))
    }

    /// Maps every row, in current row order.
    pub fn map_rows<F, T>(&self, mut f: F) -> Vec<T>
    where
        F: FnMut(&R) -> T,
    {
        self.rows.read().iter().map(|entry| f(&entry.item)).collect()
    }

    fn check_row(&self, row: usize, row_count: usize) -> Result<()> {
        if row < row_count {
            Ok(())
        } else {
            Err(ModelError::row_out_of_range(row, row_count))
        }
    }
}

impl<R: TableRow> TabularModel for TableModel<R> {
    fn columns(&self) -> &[ColumnSpec] {
        &self.columns
    }

    fn row_count(&self) -> usize {
        self.rows.read().len()
    }

    fn value(&self, row: usize, column: usize) -> Result<CellValue> {
        let rows = self.rows.read();
        self.check_row(row, rows.len())?;

        let Some(spec) = self.columns.get(column) else {
            return Err(ModelError::column_out_of_range(column, self.columns.len()));
        };

        let value = rows[row]
            .item
            .value(column)
            .ok_or_else(|| ModelError::column_out_of_range(column, self.columns.len()))?;
        debug_assert_eq!(value.kind(), spec.kind(), "column {column} returned wrong kind");
        Ok(value)
    }

    fn checked(&self, row: usize) -> Result<bool> {
        let rows = self.rows.read();
        self.check_row(row, rows.len())?;
        Ok(rows[row].checked)
    }

    fn set_checked(&self, row: usize, checked: bool) -> Result<()> {
        let mut rows = self.rows.write();
        self.check_row(row, rows.len())?;

        let changed = rows[row].checked != checked;
        rows[row].checked = checked;
        drop(rows);

        trace!(target: targets::MODEL, row, checked, changed, "set check state");
        if changed {
            self.signals.row_changed.emit(row);
        }
        Ok(())
    }

    fn image(&self, row: usize) -> Result<Option<ImageHandle>> {
        self.check_row(row, self.row_count())?;
        Ok(self.images.as_ref().map(|images| images.for_row(row)))
    }

    fn sort(&self, column: usize, order: SortOrder) -> Result<()> {
        let compare = match R::comparators().get(column) {
            Some(&compare) if column < self.columns.len() => compare,
            _ => {
                warn!(target: targets::SORT, column, "rejected sort on unknown column");
                return Err(ModelError::invalid_sort_target(column, self.columns.len()));
            }
        };

        // Record the new state first so observers of the reorder see it.
        *self.sort_state.write() = Some(SortState::new(column, order));

        let _span = PerfSpan::new("sort");
        self.signals.emit_layout_changed(|| {
            self.rows
                .write()
                .sort_by(|a, b| order.apply(compare(&a.item, &b.item)));
        });
        debug!(target: targets::SORT, column, ?order, "rows sorted");

        self.signals.sort_changed.emit((column, order));
        Ok(())
    }

    fn sort_state(&self) -> Option<SortState> {
        *self.sort_state.read()
    }

    fn signals(&self) -> &ModelSignals {
        &self.signals
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::value::CellKind;
    use parking_lot::Mutex;
    use std::cmp::Ordering;
    use std::sync::Arc;

    #[derive(Debug, Clone, PartialEq)]
    struct TestRow {
        id: i64,
        name: &'static str,
        score: f64,
    }

    fn by_id(a: &TestRow, b: &TestRow) -> Ordering {
        a.id.cmp(&b.id)
    }

    fn by_name(a: &TestRow, b: &TestRow) -> Ordering {
        a.name.cmp(b.name).then_with(|| a.id.cmp(&b.id))
    }

    fn by_score(a: &TestRow, b: &TestRow) -> Ordering {
        a.score.total_cmp(&b.score).then_with(|| a.id.cmp(&b.id))
    }

    impl TableRow for TestRow {
        fn columns() -> Vec<ColumnSpec> {
            vec![
                ColumnSpec::new("#", CellKind::Int),
                ColumnSpec::new("Name", CellKind::Text),
                ColumnSpec::new("Score", CellKind::Number).with_format("%.1f"),
            ]
        }

        fn value(&self, column: usize) -> Option<CellValue> {
            match column {
                0 => Some(CellValue::Int(self.id)),
                1 => Some(CellValue::from(self.name)),
                2 => Some(CellValue::Number(self.score)),
                _ => None,
            }
        }

        fn comparators() -> &'static [RowComparator<Self>] {
            const COMPARATORS: &[RowComparator<TestRow>] = &[by_id, by_name, by_score];
            COMPARATORS
        }
    }

    fn row(id: i64, name: &'static str, score: f64) -> TestRow {
        TestRow { id, name, score }
    }

    fn sample() -> TableModel<TestRow> {
        TableModel::new(vec![row(1, "b", 2.0), row(2, "a", 1.0), row(3, "c", 3.0)])
    }

    fn ids(model: &TableModel<TestRow>) -> Vec<i64> {
        model.map_rows(|r| r.id)
    }

    #[test]
    fn test_basic_access() {
        let model = sample();

        assert_eq!(model.row_count(), 3);
        assert_eq!(model.column_count(), 3);
        assert_eq!(model.value(0, 0).unwrap(), CellValue::Int(1));
        assert_eq!(model.value(1, 1).unwrap().as_text(), Some("a"));
        assert_eq!(model.display_text(2, 2).unwrap(), "3.0");
        assert_eq!(model.sort_state(), None);
    }

    #[test]
    fn test_out_of_range() {
        let model = sample();

        assert!(matches!(
            model.value(3, 0),
            Err(ModelError::RowOutOfRange { row: 3, row_count: 3 })
        ));
        assert!(matches!(
            model.value(0, 3),
            Err(ModelError::ColumnOutOfRange { column: 3, column_count: 3 })
        ));
        assert!(model.checked(3).unwrap_err().is_out_of_range());
        assert!(model.set_checked(3, true).unwrap_err().is_out_of_range());
        assert!(model.image(3).unwrap_err().is_out_of_range());
    }

    #[test]
    fn test_check_state() {
        let model = sample();
        let changed = Arc::new(Mutex::new(Vec::new()));

        let changed_clone = changed.clone();
        model
            .signals()
            .row_changed
            .connect(move |&row| changed_clone.lock().push(row));

        model.set_checked(1, true).unwrap();
        assert!(model.checked(1).unwrap());
        assert!(!model.checked(0).unwrap());
        assert!(!model.checked(2).unwrap());

        // Setting the same value again is not a change.
        model.set_checked(1, true).unwrap();
        assert_eq!(*changed.lock(), vec![1]);
        assert_eq!(model.checked_rows(), vec![1]);
    }

    #[test]
    fn test_check_state_follows_row_through_sort() {
        let model = sample();
        model.set_checked(0, true).unwrap(); // id 1, name "b"

        model.sort(1, SortOrder::Ascending).unwrap();
        assert_eq!(ids(&model), vec![2, 1, 3]);
        assert_eq!(model.checked_rows(), vec![1]);
    }

    #[test]
    fn test_sort_by_name() {
        let model = sample();

        model.sort(1, SortOrder::Ascending).unwrap();
        assert_eq!(ids(&model), vec![2, 1, 3]);

        model.sort(1, SortOrder::Descending).unwrap();
        assert_eq!(ids(&model), vec![3, 1, 2]);
        assert_eq!(
            model.sort_state(),
            Some(SortState::new(1, SortOrder::Descending))
        );
    }

    #[test]
    fn test_invalid_sort_leaves_state() {
        let model = sample();
        model.sort(2, SortOrder::Descending).unwrap();
        let before = ids(&model);

        let err = model.sort(7, SortOrder::Ascending).unwrap_err();
        assert!(matches!(
            err,
            ModelError::InvalidSortTarget { column: 7, column_count: 3 }
        ));
        assert_eq!(ids(&model), before);
        assert_eq!(
            model.sort_state(),
            Some(SortState::new(2, SortOrder::Descending))
        );
    }

    #[test]
    fn test_sort_empty_and_single() {
        let model = TableModel::<TestRow>::empty();
        model.sort(0, SortOrder::Descending).unwrap();
        assert_eq!(model.row_count(), 0);

        let model = TableModel::new(vec![row(5, "x", 0.0)]);
        model.sort(1, SortOrder::Ascending).unwrap();
        assert_eq!(ids(&model), vec![5]);
    }

    #[test]
    fn test_sort_state_visible_during_reorder() {
        let model = Arc::new(sample());
        let observed = Arc::new(Mutex::new(None));

        let inner = model.clone();
        let observed_clone = observed.clone();
        model.signals().layout_about_to_change.connect(move |_| {
            *observed_clone.lock() = inner.sort_state();
        });

        model.sort(2, SortOrder::Ascending).unwrap();
        assert_eq!(
            *observed.lock(),
            Some(SortState::new(2, SortOrder::Ascending))
        );
    }

    #[test]
    fn test_toggle_sort() {
        let model = sample();

        assert_eq!(model.toggle_sort(1).unwrap(), SortOrder::Ascending);
        assert_eq!(model.toggle_sort(1).unwrap(), SortOrder::Descending);
        assert_eq!(model.toggle_sort(1).unwrap(), SortOrder::Ascending);
        assert_eq!(model.toggle_sort(0).unwrap(), SortOrder::Ascending);
        assert!(model.toggle_sort(9).is_err());
        assert_eq!(
            model.sort_state(),
            Some(SortState::new(0, SortOrder::Ascending))
        );
    }

    #[test]
    fn test_replace_rows_resets_then_resorts() {
        let model = Arc::new(sample());
        model.sort(1, SortOrder::Descending).unwrap();
        model.set_checked(0, true).unwrap();

        let events = Arc::new(Mutex::new(Vec::new()));

        let inner = model.clone();
        let reset_events = events.clone();
        model.signals().model_reset.connect(move |_| {
            reset_events
                .lock()
                .push(format!("reset:{}", inner.row_count()));
        });
        let sort_events = events.clone();
        model
            .signals()
            .sort_changed
            .connect(move |(column, order)| {
                sort_events.lock().push(format!("sort:{column}:{order:?}"));
            });

        model.replace_rows(vec![
            row(10, "m", 0.5),
            row(11, "z", 0.1),
            row(12, "a", 0.9),
            row(13, "q", 0.3),
        ]);

        assert_eq!(
            *events.lock(),
            vec!["reset:4".to_string(), "sort:1:Descending".to_string()]
        );
        assert_eq!(ids(&model), vec![11, 13, 10, 12]);
        assert!(model.checked_rows().is_empty());
    }

    #[test]
    fn test_replace_rows_unsorted_keeps_order() {
        let model = sample();
        model.replace_rows(vec![row(9, "z", 0.0), row(8, "y", 0.0)]);
        assert_eq!(ids(&model), vec![9, 8]);
        assert_eq!(model.sort_state(), None);
    }

    #[test]
    fn test_images() {
        let model = sample();
        assert!(model.image(0).unwrap().is_none());

        let model = sample().with_images(RowImages::new(
            ImageHandle::bitmap("open.png"),
            ImageHandle::icon("x.ico"),
        ));
        let even = model.image(0).unwrap().unwrap();
        assert!(even.same(&model.image(2).unwrap().unwrap()));
        assert!(!even.same(&model.image(1).unwrap().unwrap()));
    }

    #[test]
    fn test_with_row() {
        let model = sample();
        assert_eq!(model.with_row(2, |r| r.name).unwrap(), "c");
        assert!(model.with_row(3, |r| r.name).is_err());
    }
}
