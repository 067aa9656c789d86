//! Logging facilities for Horizon Tabular.
//!
//! Horizon Tabular uses the `tracing` crate for instrumentation. To see logs,
//! install a tracing subscriber in your application:
//!
//! ```ignore
//! fn main() {
//!     tracing_subscriber::fmt::init();
//!
//!     // Bind a model to your table control...
//! }
//! ```
//!
//! Every event is emitted under one of the [`targets`], so subsystems can be
//! filtered individually, e.g. `RUST_LOG=horizon_tabular::sort=debug`.

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Core crate target.
    pub const CORE: &str = "horizon_tabular_core";
    /// Signal/slot system target.
    pub const SIGNAL: &str = "horizon_tabular_core::signal";
    /// Model lifecycle target (resets, check state, population).
    pub const MODEL: &str = "horizon_tabular::model";
    /// Sorting target.
    pub const SORT: &str = "horizon_tabular::sort";
    /// Dataset configuration target.
    pub const CONFIG: &str = "horizon_tabular::config";
    /// Performance spans.
    pub const PERF: &str = "horizon_tabular::perf";
}

/// A guard that records how long an operation took.
///
/// The span stays entered until the guard is dropped.
///
/// # Example
///
/// ```
/// use horizon_tabular_core::PerfSpan;
///
/// {
///     let _span = PerfSpan::new("sort");
///     // ... expensive work ...
/// }
/// ```
pub struct PerfSpan {
    #[allow(dead_code)]
    span: tracing::span::EnteredSpan,
}

impl PerfSpan {
    /// Create and enter a new performance span.
    pub fn new(name: &'static str) -> Self {
        let span = tracing::debug_span!(target: targets::PERF, "perf", operation = name);
        Self {
            span: span.entered(),
        }
    }
}
