//! The grid describes which tiles of a room can be walked through. It is owned
//! and mutated by whatever builds the world, the fields only ever read from it
//! through the [BlockingGrid] trait.
//!
//! A grid of `5x3` with a wall running down the middle may look like:
//!
//! ```text
//!  _____________________________
//! |     |     |     |     |     |
//! |     |     |  #  |     |     |   row 2
//! |_____|_____|_____|_____|_____|
//! |     |     |     |     |     |
//! |     |     |  #  |     |     |   row 1
//! |_____|_____|_____|_____|_____|
//! |     |     |     |     |     |
//! |     |     |     |     |     |   row 0
//! |_____|_____|_____|_____|_____|
//! ```
//!

use bevy::prelude::*;

/// Read-only access to a tile grid. Callers must only query coordinates
/// within `0..width` and `0..height`
pub trait BlockingGrid {
	/// Number of columns
	fn width(&self) -> u32;
	/// Number of rows
	fn height(&self) -> u32;
	/// Whether the tile at `(x, y)` cannot be walked through
	fn is_blocking(&self, x: u32, y: u32) -> bool;
}

/// A row-major grid of blocking flags
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[derive(Component, Clone, Debug, Default, PartialEq, Eq)]
pub struct TileGrid {
	/// Number of columns
	width: u32,
	/// Number of rows
	height: u32,
	/// `true` marks a blocking tile, indexed by `row * width + column`
	blocking: Vec<bool>,
}

impl BlockingGrid for TileGrid {
	fn width(&self) -> u32 {
		self.width
	}
	fn height(&self) -> u32 {
		self.height
	}
	fn is_blocking(&self, x: u32, y: u32) -> bool {
		self.blocking[self.index(x, y)]
	}
}

impl TileGrid {
	/// Create a new instance of [TileGrid] where every tile can be walked through
	pub fn new(width: u32, height: u32) -> Self {
		TileGrid {
			width,
			height,
			blocking: vec![false; width as usize * height as usize],
		}
	}
	/// Build a grid from rows of characters where `#` marks a blocking tile.
	/// The first string is row `0`. Rows shorter than the longest one are
	/// padded with walkable tiles
	pub fn from_rows(rows: &[&str]) -> Self {
		let width = rows.iter().map(|r| r.chars().count()).max().unwrap_or(0) as u32;
		let mut grid = TileGrid::new(width, rows.len() as u32);
		for (row, line) in rows.iter().enumerate() {
			for (column, c) in line.chars().enumerate() {
				if c == '#' {
					grid.set_blocking(column as u32, row as u32, true);
				}
			}
		}
		grid
	}
	/// Mark a tile as blocking or walkable
	pub fn set_blocking(&mut self, x: u32, y: u32, blocking: bool) {
		let index = self.index(x, y);
		self.blocking[index] = blocking;
	}
	/// Change the dimensions of the grid, every tile becomes walkable
	pub fn resize(&mut self, width: u32, height: u32) {
		*self = TileGrid::new(width, height);
	}
	/// Swap in the layout of a different room
	pub fn replace(&mut self, other: TileGrid) {
		debug!(
			"Replacing {}x{} grid with {}x{}",
			self.width, self.height, other.width, other.height
		);
		*self = other;
	}
	/// Flattened index of a tile
	fn index(&self, x: u32, y: u32) -> usize {
		if x >= self.width || y >= self.height {
			panic!(
				"Cannot access a TileGrid value, index out of bounds. Asked for column {}, row {}, grid width is {}, grid height is {}",
				x, y, self.width, self.height
			)
		}
		y as usize * self.width as usize + x as usize
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	#[test]
	fn new_grid_is_open() {
		let grid = TileGrid::new(4, 3);
		assert_eq!(4, grid.width());
		assert_eq!(3, grid.height());
		for y in 0..3 {
			for x in 0..4 {
				assert!(!grid.is_blocking(x, y));
			}
		}
	}
	#[test]
	fn rows_become_blocking_tiles() {
		let grid = TileGrid::from_rows(&["..#..", "..#..", "....."]);
		assert_eq!(5, grid.width());
		assert_eq!(3, grid.height());
		assert!(grid.is_blocking(2, 0));
		assert!(grid.is_blocking(2, 1));
		assert!(!grid.is_blocking(2, 2));
		assert!(!grid.is_blocking(1, 0));
	}
	#[test]
	fn short_rows_are_padded() {
		let grid = TileGrid::from_rows(&["#", "..."]);
		assert_eq!(3, grid.width());
		assert!(grid.is_blocking(0, 0));
		assert!(!grid.is_blocking(2, 0));
	}
	#[test]
	fn resize_clears_layout() {
		let mut grid = TileGrid::from_rows(&["##", "##"]);
		grid.resize(3, 1);
		assert_eq!(TileGrid::new(3, 1), grid);
	}
	#[test]
	fn replace_room() {
		let mut grid = TileGrid::new(10, 10);
		grid.replace(TileGrid::from_rows(&["#."]));
		assert_eq!(2, grid.width());
		assert!(grid.is_blocking(0, 0));
	}
	#[test]
	#[should_panic]
	fn out_of_bounds_set() {
		let mut grid = TileGrid::new(2, 2);
		grid.set_blocking(2, 0, true);
	}
}
