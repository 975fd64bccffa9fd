//! Selectable spans for keyboard navigation.

mod core;

pub use self::core::{Node, NodeHash, SelectionRegistry};
