pub mod cell;
pub mod grid;

pub use cell::{Color, Symbol};
pub use grid::Grid;
