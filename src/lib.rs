//! Terminal-grid text layout engine.
//!
//! Elements (words, line breaks, tables) are added to rectangular
//! [`Container`]s, laid out left to right with explicit line breaks, and drawn
//! cell by cell through a [`CellBackend`]. A [`Layer`] paints its containers in
//! order.
//!
//! ```
//! use layerdraw::{Container, GridBuffer, Layer, LineBreak, Word, space};
//!
//! let mut container = Container::new(0, 0, 20, 5);
//! container.add(Word::plain("AB", 2));
//! container.add(space());
//! container.add(Word::plain("CD", 2));
//! container.add(LineBreak);
//! container.add(Word::plain("EF", 2));
//!
//! let mut layer = Layer::new();
//! layer.add(container);
//!
//! let mut grid = GridBuffer::new(20, 5);
//! layer.draw(&mut grid)?;
//! assert_eq!(grid.row_text(0), "AB CD");
//! assert_eq!(grid.row_text(1), "EF");
//! # Ok::<(), layerdraw::LayoutError>(())
//! ```

pub mod backend;
pub mod config;
pub mod container;
pub mod element;
pub mod error;
pub mod geometry;
pub mod layer;
pub mod logging;
pub mod metrics;
pub mod selection;
pub mod table;

pub use backend::{Cell, CellBackend, GridBuffer, TerminalBackend};
pub use config::DrawConfig;
pub use container::{
    Container, ContainerElement, ContainerOptions, DEFAULT_GROUP, ElementOptions, GroupId,
};
pub use element::{
    ContentSource, Element, LineBreak, RuneMatrix, RunePos, VisibleElement, Word, space,
};
pub use error::{LayoutError, Result};
pub use geometry::{Rect, Size};
pub use layer::{ContainerId, Layer};
pub use logging::{
    FileSink, LogEvent, LogFields, LogLevel, LogSink, Logger, LoggingError, LoggingResult,
    MemorySink,
};
pub use metrics::{DrawMetrics, DrawStats, MetricSnapshot};
pub use selection::{Node, NodeHash, SelectionRegistry};
pub use table::{Table, TableRow};

pub use crossterm::style::Color;
