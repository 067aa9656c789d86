//! The example dataset: randomly generated `Foo` rows.
//!
//! `FooModel` is what the `tableview` example binds to. It wraps a
//! [`TableModel<Foo>`] and adds the population hook
//! [`reset_rows`](FooModel::reset_rows), which regenerates the data.

use std::cmp::Ordering;
use std::ops::Deref;

use chrono::{DateTime, TimeZone, Utc};
use horizon_tabular_core::logging::targets;
use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, warn};

use super::column::{ColumnSpec, HorizontalAlignment};
use super::decoration::{ImageHandle, RowImages};
use super::sort::{RowComparator, SortOrder, SortState};
use super::table_model::{TableModel, TableRow};
use super::traits::{ModelSignals, TabularModel};
use super::value::{CellKind, CellValue, DEFAULT_TIMESTAMP_FORMAT};
use crate::config::DatasetConfig;
use crate::error::Result;

/// Column of the generation index.
pub const COLUMN_INDEX: usize = 0;
/// Column of the asterisk string.
pub const COLUMN_BAR: usize = 1;
/// Column of the random number.
pub const COLUMN_BAZ: usize = 2;
/// Column of the random timestamp.
pub const COLUMN_QUUX: usize = 3;

/// One row of the example dataset.
#[derive(Debug, Clone, PartialEq)]
pub struct Foo {
    /// Position at generation time; unique within a dataset.
    pub index: i64,
    /// One to five asterisks.
    pub bar: String,
    /// A number in `[0, 1000)`.
    pub baz: f64,
    /// A whole-second point in time between the Unix epoch and now.
    pub quux: DateTime<Utc>,
}

impl Foo {
    /// Creates a row.
    pub fn new(index: i64, bar: impl Into<String>, baz: f64, quux: DateTime<Utc>) -> Self {
        Self {
            index,
            bar: bar.into(),
            baz,
            quux,
        }
    }
}

// Ties on the keyed column fall back to `index`, which is unique, so every
// comparator is a strict total order.

fn by_index(a: &Foo, b: &Foo) -> Ordering {
    a.index.cmp(&b.index)
}

fn by_bar(a: &Foo, b: &Foo) -> Ordering {
    a.bar.cmp(&b.bar).then_with(|| by_index(a, b))
}

fn by_baz(a: &Foo, b: &Foo) -> Ordering {
    a.baz.total_cmp(&b.baz).then_with(|| by_index(a, b))
}

fn by_quux(a: &Foo, b: &Foo) -> Ordering {
    a.quux.cmp(&b.quux).then_with(|| by_index(a, b))
}

const FOO_COMPARATORS: &[RowComparator<Foo>] = &[by_index, by_bar, by_baz, by_quux];

impl TableRow for Foo {
    fn columns() -> Vec<ColumnSpec> {
        vec![
            ColumnSpec::new("#", CellKind::Int),
            ColumnSpec::new("Bar", CellKind::Text),
            ColumnSpec::new("Baz", CellKind::Number)
                .with_format("%.2f")
                .with_alignment(HorizontalAlignment::Right),
            ColumnSpec::new("Quux", CellKind::Timestamp)
                .with_format(DEFAULT_TIMESTAMP_FORMAT)
                .with_width(150),
        ]
    }

    fn value(&self, column: usize) -> Option<CellValue> {
        match column {
            COLUMN_INDEX => Some(CellValue::Int(self.index)),
            COLUMN_BAR => Some(CellValue::Text(self.bar.clone())),
            COLUMN_BAZ => Some(CellValue::Number(self.baz)),
            COLUMN_QUUX => Some(CellValue::Timestamp(self.quux)),
            _ => None,
        }
    }

    fn comparators() -> &'static [RowComparator<Self>] {
        FOO_COMPARATORS
    }
}

/// Random source of `Foo` datasets.
pub struct FooGenerator {
    config: DatasetConfig,
    rng: StdRng,
}

impl FooGenerator {
    /// Creates a generator, seeded from the config or from entropy.
    pub fn new(config: DatasetConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self { config, rng }
    }

    /// Returns the generator's configuration.
    pub fn config(&self) -> &DatasetConfig {
        &self.config
    }

    /// Generates a fresh dataset.
    pub fn generate(&mut self) -> Vec<Foo> {
        let count = self.rng.gen_range(0..self.config.max_rows.max(1));
        let now = Utc::now().timestamp().max(1);

        (0..count)
            .map(|index| {
                let bar_len = self.rng.gen_range(1..=self.config.max_bar_len.max(1));
                let baz = self.rng.r#gen::<f64>() * self.config.baz_scale;
                let secs = self.rng.gen_range(0..now);
                let quux = Utc.timestamp_opt(secs, 0).single().unwrap_or_default();
                Foo::new(index as i64, "*".repeat(bar_len), baz, quux)
            })
            .collect()
    }
}

/// The example model: a `TableModel<Foo>` with a regenerating data source.
///
/// Even rows are decorated with a bitmap (`open.png`), odd rows with an icon
/// (`x.ico`), both resolved from the configured image directory.
///
/// A new model is sorted ascending by the `#` column, so the first click on
/// that header sorts it descending.
///
/// # Example
///
/// ```
/// use horizon_tabular::config::DatasetConfig;
/// use horizon_tabular::model::{FooModel, SortOrder, TabularModel};
///
/// let model = FooModel::new(DatasetConfig::default().with_seed(1).with_max_rows(100));
/// model.sort(1, SortOrder::Ascending).unwrap();
///
/// model.reset_rows();
/// // Still sorted by "Bar" after the reset.
/// assert_eq!(model.sort_state().map(|s| s.column), Some(1));
/// ```
pub struct FooModel {
    model: TableModel<Foo>,
    generator: Mutex<FooGenerator>,
}

impl FooModel {
    /// Creates the model and generates its first dataset, sorted by `#`.
    pub fn new(config: DatasetConfig) -> Self {
        let images = RowImages::new(
            ImageHandle::bitmap(config.image_dir.join("open.png")),
            ImageHandle::icon(config.image_dir.join("x.ico")),
        );
        let model = Self {
            model: TableModel::empty().with_images(images),
            generator: Mutex::new(FooGenerator::new(config)),
        };
        // Sorting the empty model only records the state; the first reset
        // below then reapplies it to the generated rows.
        if let Err(err) = model.model.sort(COLUMN_INDEX, SortOrder::Ascending) {
            warn!(target: targets::MODEL, %err, "failed to apply initial sort");
        }
        model.reset_rows();
        model
    }

    /// Discards all rows and generates a new dataset.
    ///
    /// Hosts receive the reset notification first; the previously active
    /// sort is then reapplied to the new rows.
    pub fn reset_rows(&self) {
        let rows = self.generator.lock().generate();
        debug!(target: targets::MODEL, row_count = rows.len(), "generated dataset");
        self.model.replace_rows(rows);
    }
}

impl TabularModel for FooModel {
    fn columns(&self) -> &[ColumnSpec] {
        self.model.columns()
    }

    fn row_count(&self) -> usize {
        self.model.row_count()
    }

    fn value(&self, row: usize, column: usize) -> Result<CellValue> {
        self.model.value(row, column)
    }

    fn checked(&self, row: usize) -> Result<bool> {
        self.model.checked(row)
    }

    fn set_checked(&self, row: usize, checked: bool) -> Result<()> {
        self.model.set_checked(row, checked)
    }

    fn image(&self, row: usize) -> Result<Option<ImageHandle>> {
        self.model.image(row)
    }

    fn sort(&self, column: usize, order: SortOrder) -> Result<()> {
        self.model.sort(column, order)
    }

    fn sort_state(&self) -> Option<SortState> {
        self.model.sort_state()
    }

    fn signals(&self) -> &ModelSignals {
        self.model.signals()
    }
}

impl Deref for FooModel {
    type Target = TableModel<Foo>;

    fn deref(&self) -> &Self::Target {
        &self.model
    }
}
