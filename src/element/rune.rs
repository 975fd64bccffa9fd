use crossterm::style::Color;

/// A single character positioned on the grid with its colour pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunePos {
    pub x: i32,
    pub y: i32,
    pub ch: char,
    pub fg: Color,
    pub bg: Color,
}

impl RunePos {
    pub const fn new(x: i32, y: i32, ch: char, fg: Color, bg: Color) -> Self {
        Self { x, y, ch, fg, bg }
    }
}

/// Ordered output of a visible element.
pub type RuneMatrix = Vec<RunePos>;

/// Shift every position of `matrix` by `(dx, dy)`.
pub fn translate(mut matrix: RuneMatrix, dx: i32, dy: i32) -> RuneMatrix {
    for rune in matrix.iter_mut() {
        rune.x += dx;
        rune.y += dy;
    }
    matrix
}
