//! Terminal-drawing collaborators.
//!
//! The layout engine only ever talks to a [`CellBackend`]: one call to set a
//! cell and one to blank a region. [`GridBuffer`] keeps the cells in memory,
//! [`TerminalBackend`] forwards them to a real terminal through crossterm.

mod grid;
mod terminal;

use crossterm::style::Color;

use crate::error::Result;
use crate::geometry::Rect;

pub use grid::{Cell, GridBuffer};
pub use terminal::TerminalBackend;

/// Minimal drawing surface consumed by containers.
pub trait CellBackend {
    /// Write one cell at an absolute grid position.
    fn set_cell(&mut self, x: u16, y: u16, ch: char, fg: Color, bg: Color);

    /// Blank every cell of `rect`.
    fn clear_region(&mut self, rect: Rect, blank: char, fg: Color, bg: Color) {
        for (x, y) in rect.cells() {
            self.set_cell(x, y, blank, fg, bg);
        }
    }

    fn flush(&mut self) -> Result<()> {
        Ok(())
    }
}
