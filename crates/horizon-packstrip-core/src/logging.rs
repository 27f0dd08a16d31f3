//! Logging facilities for Horizon Packstrip.
//!
//! Horizon Packstrip uses the `tracing` crate for instrumentation. The
//! library never installs a subscriber; to see logs, install one in your
//! application:
//!
//! ```ignore
//! tracing_subscriber::fmt()
//!     .with_env_filter("horizon_packstrip=debug")
//!     .init();
//! ```
//!
//! Every subsystem logs under its own target (see [`targets`]), so a filter
//! such as `horizon_packstrip::navigator=trace` isolates one of them.

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Expand/collapse transitions.
    pub const CONTROLLER: &str = "horizon_packstrip::controller";
    /// Next/previous and tap selection.
    pub const NAVIGATOR: &str = "horizon_packstrip::navigator";
    /// Leading-section tracking during user scrolling.
    pub const SCROLL: &str = "horizon_packstrip::scroll";
    /// Render-host commands and batch bookkeeping.
    pub const BINDING: &str = "horizon_packstrip::binding";
    /// Widget-level events: taps, batch completion, reloads.
    pub const STRIP: &str = "horizon_packstrip::strip";
    /// Configuration loading.
    pub const CONFIG: &str = "horizon_packstrip::config";
    /// Signal/slot system.
    pub const SIGNAL: &str = "horizon_packstrip_core::signal";
    /// Performance spans.
    pub const PERF: &str = "horizon_packstrip::perf";
}

/// A guard for timing an operation.
///
/// Creates an `info` span under [`targets::PERF`] that stays entered until
/// the guard is dropped.
///
/// # Example
///
/// ```ignore
/// use horizon_packstrip_core::PerfSpan;
///
/// fn apply_batch() {
///     let _span = PerfSpan::new("apply_batch");
///     // ... work ...
/// }
/// ```
#[derive(Debug)]
pub struct PerfSpan {
    #[allow(dead_code)]
    span: tracing::span::EnteredSpan,
}

impl PerfSpan {
    /// Create a new performance span.
    pub fn new(name: &'static str) -> Self {
        let span = tracing::info_span!(target: "horizon_packstrip::perf", "perf", operation = name);
        Self {
            span: span.entered(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_perf_span() {
        // Without a subscriber the span is a no-op, but entering and
        // leaving it must not panic.
        let _span = PerfSpan::new("test_operation");
    }

    #[test]
    fn test_targets_share_prefix() {
        for target in [
            targets::CONTROLLER,
            targets::NAVIGATOR,
            targets::SCROLL,
            targets::BINDING,
            targets::STRIP,
            targets::CONFIG,
            targets::PERF,
        ] {
            assert!(target.starts_with("horizon_packstrip::"));
        }
    }
}
