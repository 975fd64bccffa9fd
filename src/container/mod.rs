//! Container module orchestrator.
//!
//! A container flows its elements left to right inside a rectangle, breaking
//! lines only where a [`LineBreak`](crate::element::LineBreak) says so, and
//! repaints the whole rectangle on every draw.

mod core;
mod entry;

pub use self::core::Container;
pub use entry::{ContainerElement, ContainerOptions, DEFAULT_GROUP, ElementOptions, GroupId};
