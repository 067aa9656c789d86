//! Static column metadata.

use super::value::{CellKind, CellValue};

/// Horizontal alignment of a column's cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HorizontalAlignment {
    /// Align to the leading (left) edge.
    #[default]
    Left,
    /// Align to the center.
    Center,
    /// Align to the trailing (right) edge.
    Right,
}

/// Metadata describing one column of a table model.
///
/// Columns are defined once, when the model is created, and never change.
/// Hosts query them at bind time to build their headers.
///
/// # Example
///
/// ```
/// use horizon_tabular::model::{CellKind, ColumnSpec, HorizontalAlignment};
///
/// let column = ColumnSpec::new("Baz", CellKind::Number)
///     .with_format("%.2f")
///     .with_alignment(HorizontalAlignment::Right);
/// assert_eq!(column.title(), "Baz");
/// assert_eq!(column.width(), None);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnSpec {
    title: String,
    kind: CellKind,
    format: Option<String>,
    alignment: Option<HorizontalAlignment>,
    width: Option<u32>,
}

impl ColumnSpec {
    /// Creates a column with the given title and value kind.
    pub fn new(title: impl Into<String>, kind: CellKind) -> Self {
        Self {
            title: title.into(),
            kind,
            format: None,
            alignment: None,
            width: None,
        }
    }

    /// Sets the display format string.
    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.format = Some(format.into());
        self
    }

    /// Sets the cell alignment.
    pub fn with_alignment(mut self, alignment: HorizontalAlignment) -> Self {
        self.alignment = Some(alignment);
        self
    }

    /// Sets the preferred column width in pixels.
    pub fn with_width(mut self, width: u32) -> Self {
        self.width = Some(width);
        self
    }

    /// Returns the header title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the kind every value of this column has.
    pub fn kind(&self) -> CellKind {
        self.kind
    }

    /// Returns the display format string, if any.
    pub fn format(&self) -> Option<&str> {
        self.format.as_deref()
    }

    /// Returns the declared alignment, if any.
    pub fn alignment(&self) -> Option<HorizontalAlignment> {
        self.alignment
    }

    /// Returns the alignment hosts should use when none is declared.
    pub fn effective_alignment(&self) -> HorizontalAlignment {
        self.alignment.unwrap_or_default()
    }

    /// Returns the preferred width, if any.
    pub fn width(&self) -> Option<u32> {
        self.width
    }

    /// Formats a value of this column for display.
    pub fn display_text(&self, value: &CellValue) -> String {
        value.format(self.format())
    }
}
