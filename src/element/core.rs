use super::rune::RuneMatrix;
use super::word::Word;

/// Anything that can produce a rune matrix relative to `(0, 0)`.
///
/// An empty matrix means "no drawable content, advance to the next line".
pub trait VisibleElement {
    fn matrix(&mut self) -> RuneMatrix;
}

/// Explicit line break; never drawn.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LineBreak;

impl VisibleElement for LineBreak {
    fn matrix(&mut self) -> RuneMatrix {
        RuneMatrix::new()
    }
}

/// Element variants a container can hold.
pub enum Element {
    Word(Word),
    LineBreak(LineBreak),
    Custom(Box<dyn VisibleElement>),
}

impl Element {
    pub fn is_line_break(&self) -> bool {
        matches!(self, Element::LineBreak(_))
    }

    pub fn as_word(&self) -> Option<&Word> {
        match self {
            Element::Word(word) => Some(word),
            _ => None,
        }
    }

    pub fn as_word_mut(&mut self) -> Option<&mut Word> {
        match self {
            Element::Word(word) => Some(word),
            _ => None,
        }
    }
}

impl VisibleElement for Element {
    fn matrix(&mut self) -> RuneMatrix {
        match self {
            Element::Word(word) => word.matrix(),
            Element::LineBreak(line_break) => line_break.matrix(),
            Element::Custom(custom) => custom.matrix(),
        }
    }
}

impl std::fmt::Debug for Element {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Element::Word(word) => f.debug_tuple("Word").field(word).finish(),
            Element::LineBreak(_) => f.write_str("LineBreak"),
            Element::Custom(_) => f.write_str("Custom"),
        }
    }
}

impl From<Word> for Element {
    fn from(word: Word) -> Self {
        Element::Word(word)
    }
}

impl From<LineBreak> for Element {
    fn from(line_break: LineBreak) -> Self {
        Element::LineBreak(line_break)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::RunePos;
    use crossterm::style::Color;

    struct Bar(usize);

    impl VisibleElement for Bar {
        fn matrix(&mut self) -> RuneMatrix {
            (0..self.0)
                .map(|x| RunePos::new(x as i32, 0, '#', Color::Reset, Color::Reset))
                .collect()
        }
    }

    #[test]
    fn line_break_is_always_empty() {
        let mut line_break = LineBreak;
        assert!(line_break.matrix().is_empty());
        assert!(line_break.matrix().is_empty());
        assert!(Element::from(LineBreak).matrix().is_empty());
    }

    #[test]
    fn element_delegates_to_variant() {
        let mut word: Element = Word::plain("hi", 2).into();
        assert_eq!(word.matrix().len(), 2);
        assert_eq!(word.as_word().map(Word::text), Some("hi"));

        let mut custom = Element::Custom(Box::new(Bar(3)));
        assert_eq!(custom.matrix().len(), 3);
        assert!(custom.as_word().is_none());
        assert!(!custom.is_line_break());
    }
}
