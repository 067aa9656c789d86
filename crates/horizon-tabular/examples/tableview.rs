//! TableView example: a console host bound to the random `Foo` dataset.
//!
//! Run with `cargo run -p horizon-tabular --example tableview [dataset.toml]`.
//! Set `RUST_LOG=horizon_tabular=debug` to watch the model's lifecycle.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use horizon_tabular::config::DatasetConfig;
use horizon_tabular::model::{
    DecorationKind, FooModel, HorizontalAlignment, TabularModel, COLUMN_BAR, COLUMN_BAZ,
};
use tracing_subscriber::EnvFilter;

/// Number of rows the "viewport" shows.
const VISIBLE_ROWS: usize = 8;

/// A minimal text host: renders headers once and visible rows on demand.
struct ConsoleHost<'a> {
    model: &'a dyn TabularModel,
    widths: Vec<usize>,
    stale: Arc<AtomicBool>,
}

impl<'a> ConsoleHost<'a> {
    fn bind(model: &'a dyn TabularModel) -> Self {
        let widths = model
            .columns()
            .iter()
            .map(|c| c.width().map(|w| w as usize / 8).unwrap_or(10).max(c.title().len()))
            .collect();

        // Cached row indices are invalid after a reset.
        let stale = Arc::new(AtomicBool::new(false));
        let flag = stale.clone();
        model.signals().model_reset.connect(move |_| {
            flag.store(true, Ordering::SeqCst);
        });

        Self {
            model,
            widths,
            stale,
        }
    }

    fn pad(&self, column: usize, text: &str) -> String {
        let width = self.widths[column];
        match self.model.columns()[column].effective_alignment() {
            HorizontalAlignment::Right => format!("{text:>width$}"),
            HorizontalAlignment::Center => format!("{text:^width$}"),
            HorizontalAlignment::Left => format!("{text:<width$}"),
        }
    }

    fn render(&self) -> horizon_tabular::Result<()> {
        if self.stale.swap(false, Ordering::SeqCst) {
            println!("(model reset, {} rows)", self.model.row_count());
        }

        let indicator = |column: usize| match self.model.sort_state() {
            Some(state) if state.column == column => match state.order {
                horizon_tabular::model::SortOrder::Ascending => " ^",
                horizon_tabular::model::SortOrder::Descending => " v",
            },
            _ => "",
        };

        let header: Vec<String> = (0..self.model.column_count())
            .map(|c| {
                let title = format!("{}{}", self.model.columns()[c].title(), indicator(c));
                self.pad(c, &title)
            })
            .collect();
        println!("      {}", header.join(" | "));

        for row in 0..self.model.row_count().min(VISIBLE_ROWS) {
            let check = if self.model.checked(row)? { "[x]" } else { "[ ]" };
            let image = match self.model.image(row)?.map(|i| i.kind()) {
                Some(DecorationKind::Bitmap) => "B",
                Some(DecorationKind::Icon) => "I",
                None => " ",
            };
            let cells: Vec<String> = (0..self.model.column_count())
                .map(|c| self.model.display_text(row, c).map(|text| self.pad(c, &text)))
                .collect::<horizon_tabular::Result<_>>()?;
            println!("{check} {image} {}", cells.join(" | "));
        }
        println!();
        Ok(())
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = match std::env::args().nth(1) {
        Some(path) => DatasetConfig::load_toml(path)?,
        None => DatasetConfig::default(),
    };

    let model = FooModel::new(config);
    let host = ConsoleHost::bind(&model);

    println!("== initial dataset");
    host.render()?;

    println!("== header click on \"Bar\"");
    host.model.toggle_sort(COLUMN_BAR)?;
    host.render()?;

    println!("== header click on \"Bar\" again");
    host.model.toggle_sort(COLUMN_BAR)?;
    host.render()?;

    if host.model.row_count() > 1 {
        println!("== toggle check boxes of rows 0 and 1");
        for row in [0, 1] {
            let checked = host.model.checked(row)?;
            host.model.set_checked(row, !checked)?;
        }
        host.render()?;
    }

    println!("== sort by \"Baz\", then reset rows");
    host.model.toggle_sort(COLUMN_BAZ)?;
    model.reset_rows();
    host.render()?;

    Ok(())
}
