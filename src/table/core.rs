use crossterm::style::Color;

use crate::container::{Container, GroupId};
use crate::element::{LineBreak, Word, space};
use crate::error::{LayoutError, Result};
use crate::selection::{NodeHash, SelectionRegistry};

/// Column headers plus the width of each column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    columns: Vec<String>,
    widths: Vec<usize>,
}

impl Table {
    pub fn new<I, S>(columns: I, widths: Vec<usize>) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let columns: Vec<String> = columns.into_iter().map(Into::into).collect();
        if columns.len() != widths.len() {
            return Err(LayoutError::ColumnMismatch {
                columns: columns.len(),
                widths: widths.len(),
            });
        }
        Ok(Self { columns, widths })
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn widths(&self) -> &[usize] {
        &self.widths
    }

    /// Cells a rendered line occupies: every column plus its trailing space.
    pub fn line_width(&self) -> usize {
        self.widths.iter().map(|width| width + 1).sum()
    }

    fn check_row(&self, row: &TableRow) -> Result<()> {
        if row.cells.len() > self.columns.len() {
            return Err(LayoutError::RowTooWide {
                cells: row.cells.len(),
                columns: self.columns.len(),
            });
        }
        Ok(())
    }
}

/// One table row; rows may be shorter than the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow {
    pub cells: Vec<String>,
    pub fg: Color,
    pub bg: Color,
}

impl TableRow {
    pub fn new<I, S>(cells: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            cells: cells.into_iter().map(Into::into).collect(),
            fg: Color::Reset,
            bg: Color::Reset,
        }
    }

    pub fn with_colors(mut self, fg: Color, bg: Color) -> Self {
        self.fg = fg;
        self.bg = bg;
        self
    }
}

impl Container {
    /// Build a table and emit its header line.
    pub fn new_table_with_header<I, S>(&mut self, columns: I, widths: Vec<usize>) -> Result<Table>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let table = Table::new(columns, widths)?;
        self.add_table_header(&table);
        Ok(table)
    }

    /// Emit one padded word plus a space per column, then a line break.
    pub fn add_table_header(&mut self, table: &Table) {
        for (column, width) in table.columns.iter().zip(&table.widths) {
            self.add(Word::plain(column.as_str(), *width));
            self.add(space());
        }
        self.add(LineBreak);
    }

    /// Emit a row under `group` so it can later be removed with
    /// [`Container::delete_group`]. Rows wider than the table are rejected
    /// before anything is added.
    pub fn add_table_row(
        &mut self,
        table: &Table,
        row: &TableRow,
        group: impl Into<GroupId>,
    ) -> Result<()> {
        table.check_row(row)?;
        self.start_group(group);
        for (cell, width) in row.cells.iter().zip(&table.widths) {
            self.add(Word::new(cell.as_str(), *width, row.fg, row.bg));
            self.add(space());
        }
        self.add(LineBreak);
        self.stop_group();
        Ok(())
    }

    /// Emit the header, every row and a closing blank line. Row `n` is tagged
    /// `{prefix}-{n}`; the prefix must not be reused within one container.
    pub fn add_table(&mut self, table: &Table, rows: &[TableRow], prefix: &str) -> Result<()> {
        for row in rows {
            table.check_row(row)?;
        }
        self.add_table_header(table);
        for (idx, row) in rows.iter().enumerate() {
            self.add_table_row(table, row, format!("{prefix}-{idx}"))?;
        }
        self.add(LineBreak);
        Ok(())
    }

    /// Emit a row and register it as a selectable span keyed by its first
    /// and last cell. The span hash doubles as the row's group tag, so a row
    /// whose span is already registered is rejected before anything is added.
    pub fn add_selectable_row(
        &mut self,
        table: &Table,
        row: &TableRow,
        registry: &mut SelectionRegistry,
    ) -> Result<NodeHash> {
        table.check_row(row)?;
        let first = row.cells.first().map(String::as_str).unwrap_or_default();
        let last = row.cells.last().map(String::as_str).unwrap_or_default();
        if registry.contains(NodeHash::of(first, last)) {
            return Err(LayoutError::DuplicateSpan {
                start: first.to_string(),
                end: last.to_string(),
            });
        }
        let hash = registry.register_span(first, last);
        self.add_table_row(table, row, hash.to_group())?;
        Ok(hash)
    }
}
