use crossterm::style::Color;

use super::entry::{ContainerElement, ContainerOptions, DEFAULT_GROUP, ElementOptions, GroupId};
use crate::backend::CellBackend;
use crate::config::DrawConfig;
use crate::element::{Element, RunePos, VisibleElement, translate};
use crate::geometry::Rect;
use crate::metrics::DrawStats;

/// Rectangular region of the grid holding an ordered run of elements.
#[derive(Debug)]
pub struct Container {
    rect: Rect,
    options: ContainerOptions,
    elements: Vec<ContainerElement>,
    current_group: GroupId,
}

impl Container {
    pub fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self {
            rect: Rect::new(x, y, width, height),
            options: ContainerOptions::empty(),
            elements: Vec::new(),
            current_group: DEFAULT_GROUP.to_string(),
        }
    }

    pub fn with_options(mut self, options: ContainerOptions) -> Self {
        self.options = options;
        self
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }

    pub fn set_rect(&mut self, rect: Rect) {
        self.rect = rect;
    }

    pub fn options(&self) -> ContainerOptions {
        self.options
    }

    pub fn is_dynamic(&self) -> bool {
        self.options.contains(ContainerOptions::DYNAMIC)
    }

    pub fn elements(&self) -> &[ContainerElement] {
        &self.elements
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Append an element under the currently active group.
    pub fn add(&mut self, element: impl Into<Element>) {
        self.add_with(element, ElementOptions::empty());
    }

    pub fn add_with(&mut self, element: impl Into<Element>, options: ElementOptions) {
        let entry = ContainerElement::new(element.into(), self.current_group.clone(), options);
        self.elements.push(entry);
    }

    pub fn current_group(&self) -> &str {
        &self.current_group
    }

    /// Tag every following `add` with `group` until [`Container::stop_group`].
    pub fn start_group(&mut self, group: impl Into<GroupId>) {
        self.current_group = group.into();
    }

    pub fn stop_group(&mut self) {
        self.current_group = DEFAULT_GROUP.to_string();
    }

    /// Remove every element tagged `group`, keeping the order of the rest.
    /// Returns how many elements were removed.
    pub fn delete_group(&mut self, group: &str) -> usize {
        let before = self.elements.len();
        self.elements.retain(|entry| entry.group != group);
        before - self.elements.len()
    }

    pub fn group_len(&self, group: &str) -> usize {
        self.elements
            .iter()
            .filter(|entry| entry.group == group)
            .count()
    }

    /// Recolour every word tagged `group`, separators included, so a
    /// highlighted row reads as one band. Returns how many words changed.
    pub fn restyle_group(&mut self, group: &str, fg: Color, bg: Color) -> usize {
        let mut changed = 0;
        for entry in self.elements.iter_mut().filter(|entry| entry.group == group) {
            if let Some(word) = entry.element.as_word_mut() {
                word.set_colors(fg, bg);
                changed += 1;
            }
        }
        changed
    }

    pub fn remove(&mut self, index: usize) -> Option<ContainerElement> {
        if index < self.elements.len() {
            Some(self.elements.remove(index))
        } else {
            None
        }
    }

    pub fn clear(&mut self) {
        self.elements.clear();
    }

    /// Recompute the absolute position of every element.
    ///
    /// The cursor starts one cell left of the origin; each element begins in
    /// the column after the cursor and leaves the cursor on its last cell. An
    /// element with an empty matrix moves the cursor to the start of the next
    /// line.
    pub fn recalculate(&mut self) {
        let origin_x = self.rect.x as i32;
        let origin_y = self.rect.y as i32;
        let mut last = (origin_x - 1, origin_y);
        let mut line_breaks = 0;

        for entry in self.elements.iter_mut() {
            let matrix = entry.element.matrix();
            if matrix.is_empty() {
                line_breaks += 1;
                last = (origin_x - 1, origin_y + line_breaks);
                entry.placed.clear();
                continue;
            }

            let placed = translate(matrix, last.0 + 1, last.1);
            if let Some(end) = placed.last() {
                last = (end.x, end.y);
            }
            entry.placed = placed;
        }
    }

    /// Draw with the default blank cell.
    pub fn draw(&mut self, backend: &mut impl CellBackend) -> DrawStats {
        self.draw_with(backend, &DrawConfig::default())
    }

    /// Recalculate, repaint the region blank, then draw every placed cell
    /// inside the clip bounds.
    pub fn draw_with(&mut self, backend: &mut impl CellBackend, config: &DrawConfig) -> DrawStats {
        self.recalculate();
        backend.clear_region(self.rect, config.blank, config.clear_fg, config.clear_bg);

        let mut stats = DrawStats::default();
        for entry in &self.elements {
            for rune in &entry.placed {
                match self.clip(rune) {
                    Some((x, y)) => {
                        backend.set_cell(x, y, rune.ch, rune.fg, rune.bg);
                        stats.written += 1;
                    }
                    None => stats.clipped += 1,
                }
            }
        }

        let before = self.elements.len();
        if self.is_dynamic() {
            self.elements.clear();
        } else {
            self.elements
                .retain(|entry| !entry.options.contains(ElementOptions::EPHEMERAL));
        }
        stats.flushed = before - self.elements.len();
        stats
    }

    // The far edge is inclusive: a rune on column `x + width` or row
    // `y + height` is still drawn.
    fn clip(&self, rune: &RunePos) -> Option<(u16, u16)> {
        let right = self.rect.x as i32 + self.rect.width as i32;
        let bottom = self.rect.y as i32 + self.rect.height as i32;
        if rune.x > right || rune.y > bottom {
            return None;
        }
        let x = u16::try_from(rune.x).ok()?;
        let y = u16::try_from(rune.y).ok()?;
        Some((x, y))
    }
}
