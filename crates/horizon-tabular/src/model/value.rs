//! Typed cell values.
//!
//! A table cell holds one of a fixed set of value kinds. Hosts match on
//! [`CellValue`] and format it with the column's format string, see
//! [`CellValue::format`].

use std::cmp::Ordering;
use std::fmt;

use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Utc};

/// Format used for timestamps when a column declares none (or an invalid one).
pub const DEFAULT_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// The semantic type a column declares for its cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellKind {
    /// Signed integer.
    Int,
    /// Text.
    Text,
    /// Floating point number.
    Number,
    /// Point in time (UTC).
    Timestamp,
}

/// The value of a single table cell.
///
/// # Example
///
/// ```
/// use horizon_tabular::model::{CellKind, CellValue};
///
/// let value = CellValue::from(12.3456);
/// assert_eq!(value.kind(), CellKind::Number);
/// assert_eq!(value.format(Some("%.2f")), "12.35");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    /// Integer data.
    Int(i64),
    /// String data.
    Text(String),
    /// Floating point data.
    Number(f64),
    /// Timestamp data.
    Timestamp(DateTime<Utc>),
}

impl CellValue {
    /// Returns the kind of this value.
    pub fn kind(&self) -> CellKind {
        match self {
            CellValue::Int(_) => CellKind::Int,
            CellValue::Text(_) => CellKind::Text,
            CellValue::Number(_) => CellKind::Number,
            CellValue::Timestamp(_) => CellKind::Timestamp,
        }
    }

    /// Attempts to get the value as an integer.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            CellValue::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// Attempts to get the value as a string slice.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            CellValue::Text(s) => Some(s.as_str()),
            _ => None,
        }
    }

    /// Attempts to get the value as a float.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            CellValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Attempts to get the value as a timestamp.
    pub fn as_timestamp(&self) -> Option<DateTime<Utc>> {
        match self {
            CellValue::Timestamp(t) => Some(*t),
            _ => None,
        }
    }

    /// Compares two values of the same kind.
    ///
    /// Integers and numbers compare numerically (numbers by IEEE total order,
    /// so NaN sorts consistently), text lexicographically, and timestamps
    /// chronologically. Values of different kinds are incomparable.
    pub fn compare(&self, other: &CellValue) -> Option<Ordering> {
        match (self, other) {
            (CellValue::Int(a), CellValue::Int(b)) => Some(a.cmp(b)),
            (CellValue::Text(a), CellValue::Text(b)) => Some(a.cmp(b)),
            (CellValue::Number(a), CellValue::Number(b)) => Some(a.total_cmp(b)),
            (CellValue::Timestamp(a), CellValue::Timestamp(b)) => Some(a.cmp(b)),
            _ => None,
        }
    }

    /// Formats the value for display.
    ///
    /// - Integers substitute `%d`, text substitutes `%s`.
    /// - Numbers substitute `%f` or `%.Nf` (precision `N`).
    /// - Timestamps treat the format as a `strftime` pattern.
    ///
    /// Text around the directive is kept. Without a format, or when the format
    /// has no directive for the value's kind, the default rendering is used.
    pub fn format(&self, format: Option<&str>) -> String {
        match (self, format) {
            (CellValue::Int(n), Some(fmt)) => {
                substitute(fmt, "%d", &n.to_string()).unwrap_or_else(|| n.to_string())
            }
            (CellValue::Text(s), Some(fmt)) => {
                substitute(fmt, "%s", s).unwrap_or_else(|| s.clone())
            }
            (CellValue::Number(n), Some(fmt)) => format_float(*n, fmt),
            (CellValue::Timestamp(t), Some(fmt)) => format_timestamp(t, fmt),
            (CellValue::Timestamp(t), None) => format_timestamp(t, DEFAULT_TIMESTAMP_FORMAT),
            (value, None) => value.to_string(),
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Int(n) => write!(f, "{n}"),
            CellValue::Text(s) => f.write_str(s),
            CellValue::Number(n) => write!(f, "{n}"),
            CellValue::Timestamp(t) => write!(f, "{}", t.format(DEFAULT_TIMESTAMP_FORMAT)),
        }
    }
}

/// Replaces the first occurrence of `directive` in `fmt`.
fn substitute(fmt: &str, directive: &str, value: &str) -> Option<String> {
    fmt.find(directive).map(|pos| {
        let mut out = String::with_capacity(fmt.len() + value.len());
        out.push_str(&fmt[..pos]);
        out.push_str(value);
        out.push_str(&fmt[pos + directive.len()..]);
        out
    })
}

/// Largest `%.Nf` precision honored; beyond it f64 has no more digits.
const MAX_FLOAT_PRECISION: usize = 17;

/// Formats a float with a printf-style `%f` / `%.Nf` directive.
fn format_float(value: f64, fmt: &str) -> String {
    let Some(start) = fmt.find('%') else {
        return value.to_string();
    };
    let rest = &fmt[start + 1..];

    let (precision, spec_len) = if let Some(digits) = rest.strip_prefix('.') {
        let count = digits.bytes().take_while(u8::is_ascii_digit).count();
        match (digits[..count].parse::<usize>(), digits[count..].starts_with('f')) {
            (Ok(precision), true) if precision <= MAX_FLOAT_PRECISION => {
                (precision, 1 + count + 1)
            }
            _ => return value.to_string(),
        }
    } else if rest.starts_with('f') {
        (6, 1)
    } else {
        return value.to_string();
    };

    format!(
        "{}{:.*}{}",
        &fmt[..start],
        precision,
        value,
        &rest[spec_len..]
    )
}

fn format_timestamp(value: &DateTime<Utc>, fmt: &str) -> String {
    // chrono panics when displaying a pattern with bad specifiers.
    let valid = !StrftimeItems::new(fmt).any(|item| matches!(item, Item::Error));
    if valid {
        value.format(fmt).to_string()
    } else {
        value.format(DEFAULT_TIMESTAMP_FORMAT).to_string()
    }
}

impl From<i64> for CellValue {
    fn from(n: i64) -> Self {
        CellValue::Int(n)
    }
}

impl From<i32> for CellValue {
    fn from(n: i32) -> Self {
        CellValue::Int(n as i64)
    }
}

impl From<usize> for CellValue {
    fn from(n: usize) -> Self {
        CellValue::Int(n as i64)
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        CellValue::Text(s)
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::Text(s.to_string())
    }
}

impl From<f64> for CellValue {
    fn from(n: f64) -> Self {
        CellValue::Number(n)
    }
}

impl From<DateTime<Utc>> for CellValue {
    fn from(t: DateTime<Utc>) -> Self {
        CellValue::Timestamp(t)
    }
}
