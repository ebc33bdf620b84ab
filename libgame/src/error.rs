use derive_more::{Display, Error};

/// Failures surfaced by [`Grid`](crate::grid::Grid) operations.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum GridError {
    #[display("position ({row}, {col}) is outside a {height}x{width} grid")]
    OutOfRange {
        row: usize,
        col: usize,
        height: usize,
        width: usize,
    },

    #[display("a {height}x{width} grid has too many cells")]
    TooLarge { width: usize, height: usize },

    #[display("expected {expected} cells for the grid, got {actual}")]
    CellCountMismatch { expected: usize, actual: usize },

    #[display("unknown glyph {glyph:?} at line {line}")]
    UnknownGlyph { glyph: char, line: usize },

    #[display("line {line} has {actual} cells, expected {expected}")]
    RaggedRow {
        line: usize,
        expected: usize,
        actual: usize,
    },
}
