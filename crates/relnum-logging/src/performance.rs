// ABOUTME: Timing helpers built on tracing spans
// ABOUTME: A drop guard that flags slow render passes and a per-operation tally

use std::collections::HashMap;
use std::time::{Duration, Instant};
use tracing::{Level, Span, field, span, warn};

/// Records the time between creation and drop on a `perf_timer` span
pub struct PerfTimer {
    span: Span,
    start: Instant,
    operation: &'static str,
    warn_threshold: Option<Duration>,
}

impl PerfTimer {
    pub fn new(operation: &'static str) -> Self {
        let span = span!(Level::DEBUG, "perf_timer", operation, elapsed_ms = field::Empty);

        Self {
            span,
            start: Instant::now(),
            operation,
            warn_threshold: None,
        }
    }

    /// Operations slower than `threshold` log a warning when the timer drops
    pub fn with_warn_threshold(mut self, threshold: Duration) -> Self {
        self.warn_threshold = Some(threshold);
        self
    }
}

impl Drop for PerfTimer {
    fn drop(&mut self) {
        let elapsed = self.start.elapsed();
        let elapsed_ms = elapsed.as_secs_f64() * 1000.0;

        self.span.record("elapsed_ms", elapsed_ms);

        if let Some(threshold) = self.warn_threshold
            && elapsed > threshold
        {
            warn!(
                operation = self.operation,
                elapsed_ms,
                threshold_ms = threshold.as_secs_f64() * 1000.0,
                "Slow operation detected"
            );
        }
    }
}

/// Call counts and durations keyed by operation name
#[derive(Debug, Default, Clone)]
pub struct PerfStats {
    operations: HashMap<String, OperationStats>,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct OperationStats {
    pub count: u64,
    pub total: Duration,
    pub max: Duration,
}

impl PerfStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_operation(&mut self, operation: &str, duration: Duration) {
        let stats = self.operations.entry(operation.to_string()).or_default();
        stats.count += 1;
        stats.total += duration;
        stats.max = stats.max.max(duration);
    }

    pub fn get(&self, operation: &str) -> Option<OperationStats> {
        self.operations.get(operation).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;
    use tracing_mock::{expect, subscriber};

    #[test]
    fn test_perf_stats() {
        let mut stats = PerfStats::new();
        stats.record_operation("render", Duration::from_millis(100));
        stats.record_operation("render", Duration::from_millis(200));
        stats.record_operation("closed", Duration::from_millis(5));

        let render = stats.get("render").unwrap();
        assert_eq!(render.count, 2);
        assert_eq!(render.total, Duration::from_millis(300));
        assert_eq!(render.max, Duration::from_millis(200));
        assert_eq!(stats.get("closed").unwrap().count, 1);
        assert!(stats.get("missing").is_none());
    }

    #[test]
    fn test_perf_timer_span_creation() {
        let (subscriber, handle) = subscriber::mock()
            .new_span(expect::span().named("perf_timer"))
            .drop_span(expect::span().named("perf_timer"))
            .only()
            .run_with_handle();

        tracing::subscriber::with_default(subscriber, || {
            let timer = PerfTimer::new("test_operation");
            drop(timer);
        });

        handle.assert_finished();
    }

    #[test]
    fn test_perf_timer_with_warn_threshold() {
        let (subscriber, handle) = subscriber::mock()
            .new_span(expect::span().named("perf_timer"))
            .event(expect::event().with_fields(expect::msg("Slow operation detected")))
            .drop_span(expect::span().named("perf_timer"))
            .only()
            .run_with_handle();

        tracing::subscriber::with_default(subscriber, || {
            let timer =
                PerfTimer::new("slow_operation").with_warn_threshold(Duration::from_millis(1));
            thread::sleep(Duration::from_millis(10));
            drop(timer);
        });

        handle.assert_finished();
    }
}
