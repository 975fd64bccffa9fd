use std::fmt;
use std::iter;
use std::sync::mpsc::Receiver;

use crossterm::style::Color;

use super::core::VisibleElement;
use super::rune::{RuneMatrix, RunePos};

/// Non-blocking supplier of fresh text for a [`Word`].
///
/// Polled once per layout pass; `None` keeps the current text.
pub trait ContentSource {
    fn poll_latest(&mut self) -> Option<String>;
}

impl ContentSource for Receiver<String> {
    fn poll_latest(&mut self) -> Option<String> {
        self.try_iter().last()
    }
}

/// Fixed-width run of text. Always occupies exactly `width` cells: longer text
/// is truncated, shorter text padded with spaces.
pub struct Word {
    text: String,
    width: usize,
    fg: Color,
    bg: Color,
    source: Option<Box<dyn ContentSource>>,
}

impl Word {
    pub fn new(text: impl Into<String>, width: usize, fg: Color, bg: Color) -> Self {
        Self {
            text: text.into(),
            width,
            fg,
            bg,
            source: None,
        }
    }

    /// Word drawn with the terminal's default colours.
    pub fn plain(text: impl Into<String>, width: usize) -> Self {
        Self::new(text, width, Color::Reset, Color::Reset)
    }

    /// Word whose text is refreshed from `source` before every layout pass.
    pub fn with_source<S>(
        text: impl Into<String>,
        width: usize,
        fg: Color,
        bg: Color,
        source: S,
    ) -> Self
    where
        S: ContentSource + 'static,
    {
        Self {
            source: Some(Box::new(source)),
            ..Self::new(text, width, fg, bg)
        }
    }

    /// Plain word built from text that may carry ANSI styling; escape sequences
    /// are stripped so no control byte reaches a grid cell.
    pub fn sanitized(text: &str, width: usize) -> Self {
        let clean = strip_ansi_escapes::strip(text);
        Self::plain(String::from_utf8_lossy(&clean).into_owned(), width)
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn colors(&self) -> (Color, Color) {
        (self.fg, self.bg)
    }

    pub fn set_colors(&mut self, fg: Color, bg: Color) {
        self.fg = fg;
        self.bg = bg;
    }

    pub fn has_source(&self) -> bool {
        self.source.is_some()
    }

    fn refresh(&mut self) {
        if let Some(latest) = self.source.as_mut().and_then(|source| source.poll_latest()) {
            self.text = latest;
        }
    }
}

impl VisibleElement for Word {
    fn matrix(&mut self) -> RuneMatrix {
        self.refresh();
        self.text
            .chars()
            .chain(iter::repeat(' '))
            .take(self.width)
            .enumerate()
            .map(|(idx, ch)| RunePos::new(idx as i32, 0, ch, self.fg, self.bg))
            .collect()
    }
}

impl fmt::Debug for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Word")
            .field("text", &self.text)
            .field("width", &self.width)
            .field("fg", &self.fg)
            .field("bg", &self.bg)
            .field("source", &self.source.is_some())
            .finish()
    }
}

/// One-cell blank separator.
pub fn space() -> Word {
    Word::plain(" ", 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc;

    fn chars(matrix: &RuneMatrix) -> String {
        matrix.iter().map(|rune| rune.ch).collect()
    }

    #[test]
    fn pads_to_declared_width() {
        let mut word = Word::plain("Name", 6);
        let matrix = word.matrix();
        assert_eq!(matrix.len(), 6);
        assert_eq!(chars(&matrix), "Name  ");
        assert!(matrix.iter().enumerate().all(|(idx, rune)| rune.x == idx as i32 && rune.y == 0));
    }

    #[test]
    fn truncates_text_longer_than_width() {
        let mut word = Word::plain("overflow", 4);
        assert_eq!(chars(&word.matrix()), "over");
    }

    #[test]
    fn zero_width_word_acts_like_line_break() {
        let mut word = Word::plain("hidden", 0);
        assert!(word.matrix().is_empty());
    }

    #[test]
    fn carries_colours_on_every_cell() {
        let mut word = Word::new("ok", 3, Color::Green, Color::Black);
        assert!(
            word.matrix()
                .iter()
                .all(|rune| rune.fg == Color::Green && rune.bg == Color::Black)
        );
    }

    #[test]
    fn source_supplies_latest_value_without_blocking() {
        let (tx, rx) = mpsc::channel();
        let mut word = Word::with_source("idle", 6, Color::Reset, Color::Reset, rx);
        assert_eq!(chars(&word.matrix()), "idle  ");

        tx.send("busy".to_string()).unwrap();
        tx.send("done".to_string()).unwrap();
        assert_eq!(chars(&word.matrix()), "done  ");

        // Nothing new published: text is kept.
        assert_eq!(word.text(), "done");
        assert_eq!(chars(&word.matrix()), "done  ");
    }

    #[test]
    fn sanitized_strips_escape_sequences() {
        let word = Word::sanitized("\x1b[31mred\x1b[0m", 3);
        assert_eq!(word.text(), "red");
    }
}
