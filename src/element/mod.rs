//! Visible elements and the rune-matrix protocol they share.
//!
//! Every element produces its characters relative to a local origin of `(0, 0)`;
//! containers translate them into absolute grid coordinates. An empty matrix is
//! the line-break signal.

mod core;
mod rune;
mod word;

pub use self::core::{Element, LineBreak, VisibleElement};
pub use rune::{RuneMatrix, RunePos, translate};
pub use word::{ContentSource, Word, space};
