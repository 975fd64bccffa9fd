use serde_json::json;

use crate::backend::CellBackend;
use crate::config::DrawConfig;
use crate::container::Container;
use crate::error::{LayoutError, Result};
use crate::logging::{LogLevel, event_with_fields, json_kv};
use crate::metrics::DrawStats;

const LOG_TARGET: &str = "layerdraw::layer";

/// Handle to a container owned by a [`Layer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ContainerId(usize);

impl ContainerId {
    pub fn index(&self) -> usize {
        self.0
    }
}

/// Ordered set of containers painted in insertion order; later containers
/// overdraw earlier ones where regions overlap.
#[derive(Default)]
pub struct Layer {
    containers: Vec<Container>,
    config: DrawConfig,
}

impl Layer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: DrawConfig) -> Self {
        Self {
            containers: Vec::new(),
            config,
        }
    }

    pub fn config(&self) -> &DrawConfig {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut DrawConfig {
        &mut self.config
    }

    pub fn add(&mut self, container: Container) -> ContainerId {
        self.containers.push(container);
        ContainerId(self.containers.len() - 1)
    }

    pub fn container(&self, id: ContainerId) -> Result<&Container> {
        self.containers
            .get(id.0)
            .ok_or(LayoutError::ContainerNotFound(id.0))
    }

    pub fn container_mut(&mut self, id: ContainerId) -> Result<&mut Container> {
        self.containers
            .get_mut(id.0)
            .ok_or(LayoutError::ContainerNotFound(id.0))
    }

    pub fn containers(&self) -> &[Container] {
        &self.containers
    }

    pub fn len(&self) -> usize {
        self.containers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.containers.is_empty()
    }

    /// Draw every container in order, then flush the backend.
    pub fn draw(&mut self, backend: &mut impl CellBackend) -> Result<DrawStats> {
        let mut total = DrawStats::default();

        for (idx, container) in self.containers.iter_mut().enumerate() {
            let stats = container.draw_with(backend, &self.config);
            total.written += stats.written;
            total.clipped += stats.clipped;
            total.flushed += stats.flushed;

            if let Some(metrics) = self.config.metrics.as_ref() {
                if let Ok(mut guard) = metrics.lock() {
                    guard.record_container(&stats);
                }
            }
            log_event(
                &self.config,
                LogLevel::Trace,
                "container_drawn",
                [
                    json_kv("container", json!(idx)),
                    json_kv("written", json!(stats.written)),
                    json_kv("clipped", json!(stats.clipped)),
                    json_kv("flushed", json!(stats.flushed)),
                ],
            );
        }

        let flushed = backend.flush();
        self.record_layer_draw();
        log_event(
            &self.config,
            LogLevel::Debug,
            "layer_drawn",
            [
                json_kv("containers", json!(self.containers.len())),
                json_kv("written", json!(total.written)),
                json_kv("clipped", json!(total.clipped)),
            ],
        );
        self.emit_metrics();
        flushed?;
        Ok(total)
    }

    fn record_layer_draw(&self) {
        if let Some(metrics) = self.config.metrics.as_ref() {
            if let Ok(mut guard) = metrics.lock() {
                guard.record_layer_draw();
            }
        }
    }

    fn emit_metrics(&self) {
        if let (Some(logger), Some(metrics)) =
            (self.config.logger.as_ref(), self.config.metrics.as_ref())
        {
            if let Ok(guard) = metrics.lock() {
                let event = guard
                    .snapshot()
                    .to_log_event(self.config.metrics_target.as_str());
                let _ = logger.log_event(event);
            }
        }
    }
}

fn log_event<I>(config: &DrawConfig, level: LogLevel, message: &str, fields: I)
where
    I: IntoIterator<Item = (String, serde_json::Value)>,
{
    if let Some(logger) = config.logger.as_ref() {
        if logger.enabled(level) {
            let event = event_with_fields(level, LOG_TARGET, message, fields);
            let _ = logger.log_event(event);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::GridBuffer;
    use crate::container::ContainerOptions;
    use crate::element::{LineBreak, Word};
    use crate::logging::{Logger, MemorySink};
    use crossterm::style::Color;

    #[test]
    fn containers_draw_in_insertion_order() {
        let mut layer = Layer::new();
        let mut below = Container::new(0, 0, 6, 1);
        below.add(Word::plain("bottom", 6));
        let mut above = Container::new(2, 0, 2, 1);
        above.add(Word::plain("UP", 2));
        layer.add(below);
        layer.add(above);

        let mut grid = GridBuffer::new(6, 1);
        layer.draw(&mut grid).unwrap();
        assert_eq!(grid.row_text(0), "boUPom");
    }

    #[test]
    fn container_handles_resolve() {
        let mut layer = Layer::new();
        let id = layer.add(Container::new(0, 0, 4, 1));
        layer.container_mut(id).unwrap().add(Word::plain("x", 1));
        assert_eq!(layer.container(id).unwrap().len(), 1);
        assert_eq!(id.index(), 0);

        let missing = ContainerId(3);
        assert!(matches!(
            layer.container(missing),
            Err(LayoutError::ContainerNotFound(3))
        ));
    }

    #[test]
    fn draw_reports_totals_and_metrics() {
        let mut layer = Layer::new();
        layer.config_mut().enable_metrics();
        let mut status = Container::new(0, 0, 3, 1).with_options(ContainerOptions::DYNAMIC);
        status.add(Word::plain("abcdef", 6));
        layer.add(status);

        let mut grid = GridBuffer::new(10, 1);
        let stats = layer.draw(&mut grid).unwrap();
        assert_eq!(stats.written, 4);
        assert_eq!(stats.clipped, 2);
        assert_eq!(stats.flushed, 1);

        let snapshot = layer.config().metrics_handle().unwrap().lock().unwrap().snapshot();
        assert_eq!(snapshot.layer_draws, 1);
        assert_eq!(snapshot.containers_drawn, 1);
        assert_eq!(snapshot.cells_written, 4);
        assert_eq!(snapshot.dynamic_flushes, 1);
    }

    #[test]
    fn draw_logs_through_configured_logger() {
        let sink = MemorySink::new();
        let config = DrawConfig::default().with_logger(Logger::new(sink.clone()));
        let mut layer = Layer::with_config(config);
        layer.config_mut().enable_metrics();
        let mut container = Container::new(0, 0, 5, 2);
        container.add(Word::plain("hi", 2));
        container.add(LineBreak);
        layer.add(container);

        let mut grid = GridBuffer::new(5, 2);
        layer.draw(&mut grid).unwrap();

        assert_eq!(
            sink.messages(),
            vec!["container_drawn", "layer_drawn", "draw_metrics"]
        );
        let events = sink.events();
        assert_eq!(events[1].target, LOG_TARGET);
        assert_eq!(events[1].fields.get("written"), Some(&json!(2)));
    }

    struct FailingFlush(GridBuffer);

    impl CellBackend for FailingFlush {
        fn set_cell(&mut self, x: u16, y: u16, ch: char, fg: Color, bg: Color) {
            self.0.set_cell(x, y, ch, fg, bg);
        }

        fn flush(&mut self) -> Result<()> {
            Err(std::io::Error::other("terminal gone").into())
        }
    }

    #[test]
    fn flush_failure_still_records_the_layer_draw() {
        let sink = MemorySink::new();
        let mut layer = Layer::with_config(DrawConfig::default().with_logger(Logger::new(sink.clone())));
        layer.config_mut().enable_metrics();
        let mut status = Container::new(0, 0, 5, 1).with_options(ContainerOptions::DYNAMIC);
        status.add(Word::plain("tick", 4));
        layer.add(status);

        let err = layer.draw(&mut FailingFlush(GridBuffer::new(5, 1))).unwrap_err();
        assert!(matches!(err, LayoutError::Io(_)));

        let snapshot = layer.config().metrics_handle().unwrap().lock().unwrap().snapshot();
        assert_eq!(snapshot.layer_draws, 1);
        assert_eq!(snapshot.containers_drawn, 1);
        assert_eq!(snapshot.dynamic_flushes, 1);
        assert_eq!(
            sink.messages(),
            vec!["container_drawn", "layer_drawn", "draw_metrics"]
        );
    }

    #[test]
    fn quiet_logger_skips_trace_events() {
        let sink = MemorySink::new();
        let logger = Logger::new(sink.clone()).with_min_level(LogLevel::Debug);
        let mut layer = Layer::with_config(DrawConfig::default().with_logger(logger));
        layer.add(Container::new(0, 0, 1, 1));

        layer.draw(&mut GridBuffer::new(1, 1)).unwrap();
        assert_eq!(sink.messages(), vec!["layer_drawn"]);
    }
}
