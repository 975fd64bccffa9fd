use crossterm::style::Color;

use super::CellBackend;
use crate::geometry::Size;

/// One grid cell as last written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub fg: Color,
    pub bg: Color,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            ch: ' ',
            fg: Color::Reset,
            bg: Color::Reset,
        }
    }
}

/// In-memory cell grid with row-major storage. Writes outside the grid are
/// ignored.
#[derive(Debug, Clone)]
pub struct GridBuffer {
    size: Size,
    cells: Vec<Cell>,
    writes: u64,
}

impl GridBuffer {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            size: Size::new(width, height),
            cells: vec![Cell::default(); width as usize * height as usize],
            writes: 0,
        }
    }

    pub fn size(&self) -> Size {
        self.size
    }

    /// Number of `set_cell` calls received, including ignored ones.
    pub fn writes(&self) -> u64 {
        self.writes
    }

    pub fn cell(&self, x: u16, y: u16) -> Option<&Cell> {
        self.index(x, y).map(|idx| &self.cells[idx])
    }

    /// Characters of row `y` with trailing blanks removed.
    pub fn row_text(&self, y: u16) -> String {
        if y >= self.size.height {
            return String::new();
        }
        let start = y as usize * self.size.width as usize;
        let end = start + self.size.width as usize;
        let row: String = self.cells[start..end].iter().map(|cell| cell.ch).collect();
        row.trim_end().to_string()
    }

    /// Whole grid as newline separated rows.
    pub fn to_text(&self) -> String {
        (0..self.size.height)
            .map(|y| self.row_text(y))
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn index(&self, x: u16, y: u16) -> Option<usize> {
        if x < self.size.width && y < self.size.height {
            Some(y as usize * self.size.width as usize + x as usize)
        } else {
            None
        }
    }
}

impl CellBackend for GridBuffer {
    fn set_cell(&mut self, x: u16, y: u16, ch: char, fg: Color, bg: Color) {
        self.writes = self.writes.saturating_add(1);
        if let Some(idx) = self.index(x, y) {
            self.cells[idx] = Cell { ch, fg, bg };
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Rect;

    #[test]
    fn set_cell_and_read_back() {
        let mut grid = GridBuffer::new(4, 2);
        grid.set_cell(1, 1, 'x', Color::Red, Color::Reset);
        let cell = grid.cell(1, 1).unwrap();
        assert_eq!(cell.ch, 'x');
        assert_eq!(cell.fg, Color::Red);
        assert_eq!(grid.row_text(1), " x");
    }

    #[test]
    fn out_of_bounds_writes_are_ignored() {
        let mut grid = GridBuffer::new(2, 2);
        grid.set_cell(5, 0, 'x', Color::Reset, Color::Reset);
        assert_eq!(grid.writes(), 1);
        assert_eq!(grid.to_text(), "\n");
        assert!(grid.cell(5, 0).is_none());
    }

    #[test]
    fn clear_region_blanks_only_the_region() {
        let mut grid = GridBuffer::new(3, 2);
        for (x, y) in Rect::new(0, 0, 3, 2).cells() {
            grid.set_cell(x, y, '#', Color::Reset, Color::Reset);
        }
        grid.clear_region(Rect::new(1, 0, 2, 1), ' ', Color::Reset, Color::Reset);
        assert_eq!(grid.row_text(0), "#");
        assert_eq!(grid.row_text(1), "###");
    }
}
