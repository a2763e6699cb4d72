//! Logging facilities for Horizon Sortable.
//!
//! Horizon Sortable uses the `tracing` crate for instrumentation. Nothing is
//! printed unless the application installs a subscriber:
//!
//! ```ignore
//! fn main() {
//!     tracing_subscriber::fmt()
//!         .with_env_filter("horizon_sortable::sort=debug")
//!         .init();
//! }
//! ```
//!
//! Every event is emitted under one of the [`targets`], so a single subsystem
//! (the date parser, say) can be switched on without the rest.

use std::time::Instant;

/// Span names used throughout Horizon Sortable for tracing.
pub mod span_names {
    /// One complete `SortEngine::sort` activation.
    pub const SORT: &str = "horizon_sortable::sort";
    /// Key extraction for all rows of a column.
    pub const EXTRACT: &str = "horizon_sortable::extract";
}

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Signal/slot system target.
    pub const SIGNAL: &str = "horizon_sortable_core::signal";
    /// Operation timings from [`PerfSpan`](super::PerfSpan).
    pub const PERF: &str = "horizon_sortable::perf";
    /// Sort engine target.
    pub const SORT: &str = "horizon_sortable::sort";
    /// Date format parser target.
    pub const DATE: &str = "horizon_sortable::date";
    /// Header and presentation binding target.
    pub const VIEW: &str = "horizon_sortable::view";
}

/// A guard that keeps a tracing span entered until dropped.
///
/// On drop it logs the elapsed time at `trace` on [`targets::PERF`], inside
/// the span.
#[derive(Debug)]
pub struct PerfSpan {
    operation: &'static str,
    started: Instant,
    #[allow(dead_code)]
    span: tracing::span::EnteredSpan,
}

impl PerfSpan {
    /// Create and enter a new performance span.
    pub fn new(operation: &'static str) -> Self {
        let span = tracing::info_span!(target: targets::PERF, "perf", operation);
        Self {
            operation,
            started: Instant::now(),
            span: span.entered(),
        }
    }
}

impl Drop for PerfSpan {
    fn drop(&mut self) {
        tracing::trace!(
            target: targets::PERF,
            operation = self.operation,
            elapsed_us = self.started.elapsed().as_micros() as u64,
            "finished"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;
    use std::io;
    use std::sync::Arc;

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl io::Write for Captured {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_targets_share_prefix() {
        for target in [targets::PERF, targets::SORT, targets::DATE, targets::VIEW] {
            assert!(target.starts_with("horizon_sortable::"));
        }
        assert!(targets::SIGNAL.starts_with("horizon_sortable_core::"));
    }

    #[test]
    fn test_perf_span_wraps_events_and_reports_elapsed() {
        let captured = Captured::default();
        let writer = captured.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::TRACE)
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .finish();

        tracing::subscriber::with_default(subscriber, || {
            let _span = PerfSpan::new(span_names::SORT);
            tracing::debug!(target: targets::SORT, column = 0, "inside perf span");
        });

        let output = String::from_utf8_lossy(&captured.0.lock()).into_owned();
        let inside = output
            .lines()
            .find(|line| line.contains("inside perf span"))
            .unwrap();
        assert!(inside.contains("perf{operation=\"horizon_sortable::sort\"}"));

        let finished = output
            .lines()
            .find(|line| line.contains("finished"))
            .unwrap();
        assert!(finished.contains(targets::PERF));
        assert!(finished.contains("elapsed_us="));
    }
}
