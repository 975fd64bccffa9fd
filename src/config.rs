use std::sync::{Arc, Mutex};

use crossterm::style::Color;

use crate::logging::Logger;
use crate::metrics::DrawMetrics;

/// Configuration knobs shared by every container a layer draws.
#[derive(Clone)]
pub struct DrawConfig {
    /// Character written when a container clears its region.
    pub blank: char,
    /// Colours used for cleared cells.
    pub clear_fg: Color,
    pub clear_bg: Color,
    /// Optional structured logger.
    pub logger: Option<Logger>,
    /// Metrics accumulator; a snapshot is logged after every layer draw.
    pub metrics: Option<Arc<Mutex<DrawMetrics>>>,
    /// Target field used when emitting metrics snapshots.
    pub metrics_target: String,
}

impl Default for DrawConfig {
    fn default() -> Self {
        Self {
            blank: ' ',
            clear_fg: Color::Reset,
            clear_bg: Color::Reset,
            logger: None,
            metrics: None,
            metrics_target: "layerdraw::metrics".to_string(),
        }
    }
}

impl DrawConfig {
    pub fn with_logger(mut self, logger: Logger) -> Self {
        self.logger = Some(logger);
        self
    }

    /// Enable metrics collection if it has not already been configured.
    pub fn enable_metrics(&mut self) {
        if self.metrics.is_none() {
            self.metrics = Some(Arc::new(Mutex::new(DrawMetrics::new())));
        }
    }

    pub fn disable_metrics(&mut self) {
        self.metrics = None;
    }

    pub fn metrics_handle(&self) -> Option<Arc<Mutex<DrawMetrics>>> {
        self.metrics.as_ref().map(Arc::clone)
    }
}
