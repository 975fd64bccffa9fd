use std::io::{self, Write};

use crossterm::cursor::MoveTo;
use crossterm::queue;
use crossterm::style::{Color, Print, SetBackgroundColor, SetForegroundColor};

use super::CellBackend;
use crate::error::Result;

/// Backend queueing crossterm commands on any writer (usually stdout).
///
/// `set_cell` cannot fail, so the first I/O error is held back and returned by
/// the next [`CellBackend::flush`].
pub struct TerminalBackend<W: Write> {
    writer: W,
    colors: Option<(Color, Color)>,
    pending_error: Option<io::Error>,
}

impl<W: Write> TerminalBackend<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            colors: None,
            pending_error: None,
        }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    fn queue_cell(&mut self, x: u16, y: u16, ch: char, fg: Color, bg: Color) -> io::Result<()> {
        if self.colors != Some((fg, bg)) {
            queue!(self.writer, SetForegroundColor(fg), SetBackgroundColor(bg))?;
            self.colors = Some((fg, bg));
        }
        queue!(self.writer, MoveTo(x, y), Print(ch))
    }
}

impl<W: Write> CellBackend for TerminalBackend<W> {
    fn set_cell(&mut self, x: u16, y: u16, ch: char, fg: Color, bg: Color) {
        if self.pending_error.is_some() {
            return;
        }
        if let Err(err) = self.queue_cell(x, y, ch, fg, bg) {
            self.pending_error = Some(err);
        }
    }

    fn flush(&mut self) -> Result<()> {
        if let Some(err) = self.pending_error.take() {
            return Err(err.into());
        }
        self.writer.flush()?;
        Ok(())
    }
}
