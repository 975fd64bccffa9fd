//! Table builder expanding headers and rows into padded words.

mod core;

pub use self::core::{Table, TableRow};
