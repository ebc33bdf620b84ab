use std::{fmt, iter, str::FromStr};

use itertools::Itertools;
use rand::Rng;
use tracing::trace;

use crate::{cell::Cell, error::GridError, pos::Position, rule};

pub const DEFAULT_WIDTH: usize = 20;
pub const DEFAULT_HEIGHT: usize = 10;

/// Offsets (`[d_row, d_col]`) of the cells counted as neighbors.
///
/// Only six directions are considered: the above-right and below-left
/// diagonals are not part of the neighborhood.
pub const NEIGHBOR_RELATIVE_POSITIONS: &[[isize; 2]] = &[
    [-1, 0],
    [0, -1],
    [-1, -1],
    [1, 0],
    [0, 1],
    [1, 1],
];

/// A fixed-size rectangular grid of cells, stored row-major.
///
/// `cells` always holds exactly `width * height` entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// A grid where every cell is independently alive or dead, using the thread-local generator.
    pub fn new(width: usize, height: usize) -> Result<Self, GridError> {
        Self::new_with_rng(width, height, &mut rand::rng())
    }

    pub fn new_with_rng<R>(width: usize, height: usize, rng: &mut R) -> Result<Self, GridError>
    where
        R: Rng + ?Sized,
    {
        let cell_count = cell_count(width, height)?;
        Ok(Self::random_cells(width, height, cell_count, rng))
    }

    pub fn filled(width: usize, height: usize, cell: Cell) -> Result<Self, GridError> {
        let cell_count = cell_count(width, height)?;

        Ok(Self {
            width,
            height,
            cells: vec![cell; cell_count],
        })
    }

    pub fn with_cells(width: usize, height: usize, cells: Vec<Cell>) -> Result<Self, GridError> {
        let expected = cell_count(width, height)?;
        if cells.len() != expected {
            return Err(GridError::CellCountMismatch {
                expected,
                actual: cells.len(),
            });
        }

        Ok(Self {
            width,
            height,
            cells,
        })
    }

    fn random_cells<R>(width: usize, height: usize, cell_count: usize, rng: &mut R) -> Self
    where
        R: Rng + ?Sized,
    {
        let cells = iter::repeat_with(|| Cell::random(&mut *rng))
            .take(cell_count)
            .collect();

        Self {
            width,
            height,
            cells,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Whether the cell at `(row, col)` is alive.
    ///
    /// Any `row >= height` or `col >= width` is rejected with [`GridError::OutOfRange`].
    pub fn is_alive(&self, row: usize, col: usize) -> Result<bool, GridError> {
        self.cell((row, col))
            .map(Cell::is_alive)
            .ok_or(GridError::OutOfRange {
                row,
                col,
                height: self.height,
                width: self.width,
            })
    }

    pub fn cell<P>(&self, pos: P) -> Option<Cell>
    where
        P: Into<Position>,
    {
        let index = self.pos_to_index(pos)?;
        self.cells.get(index).copied()
    }

    pub fn enumerate_cells(&self) -> impl Iterator<Item = (Position, Cell)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(index, cell)| (self.index_to_pos(index), *cell))
    }

    /// Number of alive cells.
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// The in-bounds members of the neighbor set of `pos`.
    pub fn neighbors(&self, pos: Position) -> impl Iterator<Item = Cell> + '_ {
        NEIGHBOR_RELATIVE_POSITIONS
            .iter()
            .filter_map(move |offset| self.cell(pos.offset(*offset)?))
    }

    pub fn alive_neighbors(&self, pos: Position) -> usize {
        self.neighbors(pos).filter(|cell| cell.is_alive()).count()
    }

    /// Moves the grid to its next generation.
    ///
    /// Every new state is computed from the current cells, and the result replaces them in one go.
    pub fn advance(&mut self) {
        let next_cells = self
            .enumerate_cells()
            .map(|(pos, cell)| rule::next_state(cell, self.alive_neighbors(pos)))
            .collect();

        self.cells = next_cells;

        trace!(
            width = self.width,
            height = self.height,
            population = self.population(),
            "advanced grid"
        );
    }

    /// One line of glyphs per row, each line newline-terminated.
    pub fn render(&self) -> String {
        (0..self.height)
            .map(|row| {
                let line = self.row(row).iter().map(|cell| cell.glyph()).join("");
                line + "\n"
            })
            .collect()
    }

    fn row(&self, row: usize) -> &[Cell] {
        let start = row * self.width;
        &self.cells[start..start + self.width]
    }

    fn pos_to_index<P>(&self, pos: P) -> Option<usize>
    where
        P: Into<Position>,
    {
        let Position { row, col } = pos.into();

        if row >= self.height {
            return None;
        }

        if col >= self.width {
            return None;
        }

        Some(col + (row * self.width))
    }

    fn index_to_pos(&self, index: usize) -> Position {
        let row = index / self.width;
        let col = index % self.width;
        Position { row, col }
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::random_cells(
            DEFAULT_WIDTH,
            DEFAULT_HEIGHT,
            DEFAULT_WIDTH * DEFAULT_HEIGHT,
            &mut rand::rng(),
        )
    }
}

/// `width * height`, as long as a grid of that many cells can be allocated.
fn cell_count(width: usize, height: usize) -> Result<usize, GridError> {
    width
        .checked_mul(height)
        .filter(|count| *count <= isize::MAX as usize)
        .ok_or(GridError::TooLarge { width, height })
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

impl FromStr for Grid {
    type Err = GridError;

    /// Parses the [`Grid::render`] format. Surrounding whitespace and blank lines are ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows = s
            .lines()
            .enumerate()
            .map(|(line, text)| (line + 1, text.trim()))
            .filter(|(_, text)| !text.is_empty())
            .map(|(line, text)| {
                let row = text
                    .chars()
                    .map(|glyph| Cell::from_glyph(glyph).ok_or(GridError::UnknownGlyph { glyph, line }))
                    .collect::<Result<Vec<_>, _>>()?;
                Ok::<_, GridError>((line, row))
            })
            .collect::<Result<Vec<_>, GridError>>()?;

        let width = rows.first().map_or(0, |(_, row)| row.len());
        let height = rows.len();

        if let Some((line, row)) = rows.iter().find(|(_, row)| row.len() != width) {
            return Err(GridError::RaggedRow {
                line: *line,
                expected: width,
                actual: row.len(),
            });
        }

        let cells = rows.into_iter().flat_map(|(_, row)| row).collect();
        Self::with_cells(width, height, cells)
    }
}
