use bitflags::bitflags;

use crate::element::{Element, RuneMatrix, RunePos};

/// Caller-chosen tag shared by a run of elements.
pub type GroupId = String;

/// Group active when no explicit group has been started.
pub const DEFAULT_GROUP: &str = "default";

bitflags! {
    /// Behaviour flags for a whole container.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct ContainerOptions: u32 {
        /// Drop every element after each draw; content must be re-added per frame.
        const DYNAMIC = 0x2;
    }
}

bitflags! {
    /// Behaviour flags for a single element.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct ElementOptions: u32 {
        /// Drop this element after the next draw.
        const EPHEMERAL = 0x1;
    }
}

/// An element owned by a container, with its group tag and the absolute
/// positions computed by the last layout pass.
#[derive(Debug)]
pub struct ContainerElement {
    pub(crate) element: Element,
    pub(crate) group: GroupId,
    pub(crate) options: ElementOptions,
    pub(crate) placed: RuneMatrix,
}

impl ContainerElement {
    pub(crate) fn new(element: Element, group: GroupId, options: ElementOptions) -> Self {
        Self {
            element,
            group,
            options,
            placed: RuneMatrix::new(),
        }
    }

    pub fn element(&self) -> &Element {
        &self.element
    }

    pub fn element_mut(&mut self) -> &mut Element {
        &mut self.element
    }

    pub fn group(&self) -> &str {
        &self.group
    }

    pub fn options(&self) -> ElementOptions {
        self.options
    }

    /// Absolute positions from the most recent layout pass.
    pub fn placed(&self) -> &[RunePos] {
        &self.placed
    }
}
