pub use cell::Cell;
pub use error::GridError;
pub use grid::Grid;
pub use pos::Position;

pub mod cell;
pub mod error;
pub mod grid;
pub mod pos;
pub mod rule;
