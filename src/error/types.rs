use thiserror::Error;

/// Unified result type for the layerdraw crate.
pub type Result<T> = std::result::Result<T, LayoutError>;

/// Errors surfaced by the layout engine.
#[derive(Debug, Error)]
pub enum LayoutError {
    #[error("table declares {columns} columns but {widths} widths")]
    ColumnMismatch { columns: usize, widths: usize },
    #[error("table row has {cells} cells but the table only has {columns} columns")]
    RowTooWide { cells: usize, columns: usize },
    #[error("container #{0} not found")]
    ContainerNotFound(usize),
    #[error("a selectable span from `{start}` to `{end}` is already registered")]
    DuplicateSpan { start: String, end: String },
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
