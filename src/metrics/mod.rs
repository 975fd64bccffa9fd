use crate::logging::{LogEvent, LogFields, LogLevel};
use serde_json::json;

/// Counters accumulated across layer draws.
#[derive(Debug, Default, Clone)]
pub struct DrawMetrics {
    layer_draws: u64,
    containers_drawn: u64,
    cells_written: u64,
    cells_clipped: u64,
    dynamic_flushes: u64,
}

impl DrawMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_layer_draw(&mut self) {
        self.layer_draws = self.layer_draws.saturating_add(1);
    }

    pub fn record_container(&mut self, stats: &DrawStats) {
        self.containers_drawn = self.containers_drawn.saturating_add(1);
        self.cells_written = self.cells_written.saturating_add(stats.written as u64);
        self.cells_clipped = self.cells_clipped.saturating_add(stats.clipped as u64);
        if stats.flushed > 0 {
            self.dynamic_flushes = self.dynamic_flushes.saturating_add(1);
        }
    }

    pub fn snapshot(&self) -> MetricSnapshot {
        MetricSnapshot {
            layer_draws: self.layer_draws,
            containers_drawn: self.containers_drawn,
            cells_written: self.cells_written,
            cells_clipped: self.cells_clipped,
            dynamic_flushes: self.dynamic_flushes,
        }
    }
}

/// Outcome of drawing one container.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DrawStats {
    /// Element cells handed to the backend (the region clear is not counted).
    pub written: usize,
    /// Element cells dropped by clipping.
    pub clipped: usize,
    /// Elements dropped after the draw (dynamic container or ephemeral element).
    pub flushed: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricSnapshot {
    pub layer_draws: u64,
    pub containers_drawn: u64,
    pub cells_written: u64,
    pub cells_clipped: u64,
    pub dynamic_flushes: u64,
}

impl MetricSnapshot {
    pub fn to_log_event(&self, target: &str) -> LogEvent {
        LogEvent::with_fields(LogLevel::Info, target, "draw_metrics", self.as_fields())
    }

    pub fn as_fields(&self) -> LogFields {
        let mut map = LogFields::new();
        map.insert("layer_draws".to_string(), json!(self.layer_draws));
        map.insert("containers_drawn".to_string(), json!(self.containers_drawn));
        map.insert("cells_written".to_string(), json!(self.cells_written));
        map.insert("cells_clipped".to_string(), json!(self.cells_clipped));
        map.insert("dynamic_flushes".to_string(), json!(self.dynamic_flushes));
        map
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn container_stats_accumulate() {
        let mut metrics = DrawMetrics::new();
        metrics.record_layer_draw();
        metrics.record_container(&DrawStats {
            written: 5,
            clipped: 2,
            flushed: 0,
        });
        metrics.record_container(&DrawStats {
            written: 1,
            clipped: 0,
            flushed: 3,
        });

        let snapshot = metrics.snapshot();
        assert_eq!(snapshot.layer_draws, 1);
        assert_eq!(snapshot.containers_drawn, 2);
        assert_eq!(snapshot.cells_written, 6);
        assert_eq!(snapshot.cells_clipped, 2);
        assert_eq!(snapshot.dynamic_flushes, 1);
    }

    #[test]
    fn snapshot_becomes_log_event() {
        let event = DrawMetrics::new().snapshot().to_log_event("layerdraw::metrics");
        assert_eq!(event.message, "draw_metrics");
        assert_eq!(event.target, "layerdraw::metrics");
        assert_eq!(event.fields.len(), 5);
    }
}
