//! Useful structures and tools used by the fields
//!

use bevy::prelude::*;

/// Size of a single tile in world units
pub const TILE_SIZE: f32 = 0.2;
/// Minimum time between the starts of two consecutive search epochs, in milliseconds
pub const EPOCH_INTERVAL_MS: u64 = 300;
/// Maximum number of frontier cells expanded by a single update
pub const EXPANSION_BUDGET: usize = 2048;
/// Magnitude of a non-zero steering vector
pub const STEERING_SPEED: f32 = 0.8;

/// The 4 orthogonal directions of movement stored in a
/// [crate::prelude::VectorField] entry. Tile rows grow with world `y` so
/// [Ordinal::North] points towards `+y`
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Ordinal {
	/// Towards `+y`
	North,
	/// Towards `+x`
	East,
	/// Towards `-y`
	South,
	/// Towards `-x`
	West,
	/// Special case, only ever found on the cell containing the target
	Zero,
}

impl Ordinal {
	/// Unit step `(dx, dy)` described by the [Ordinal]
	pub fn delta(&self) -> (i32, i32) {
		match self {
			Ordinal::North => (0, 1),
			Ordinal::East => (1, 0),
			Ordinal::South => (0, -1),
			Ordinal::West => (-1, 0),
			Ordinal::Zero => (0, 0),
		}
	}
	/// The step as a world space vector
	pub fn as_vec2(&self) -> Vec2 {
		let (dx, dy) = self.delta();
		Vec2::new(dx as f32, dy as f32)
	}
	/// Returns the opposite [Ordinal] of the current
	pub fn inverse(&self) -> Ordinal {
		match self {
			Ordinal::North => Ordinal::South,
			Ordinal::East => Ordinal::West,
			Ordinal::South => Ordinal::North,
			Ordinal::West => Ordinal::East,
			Ordinal::Zero => Ordinal::Zero,
		}
	}
	/// Based on a cells `(column, row)` position find its orthogonal neighbours within `width` and `height` (up to 4). Each neighbour is paired with the [Ordinal] pointing from the neighbour back to `cell`
	pub fn get_orthogonal_cell_neighbours(
		cell: FieldCell,
		width: u32,
		height: u32,
	) -> Vec<(FieldCell, Ordinal)> {
		let mut neighbours = Vec::with_capacity(4);
		for ordinal in [Ordinal::North, Ordinal::East, Ordinal::South, Ordinal::West] {
			if let Some(n) = cell.step(ordinal) {
				if n.get_column() < width && n.get_row() < height {
					neighbours.push((n, ordinal.inverse()));
				}
			}
		}
		neighbours
	}
}

/// ID of a tile within the grid
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug, Default, Hash)]
pub struct FieldCell((u32, u32));

impl FieldCell {
	/// Create a new instance of [FieldCell]
	pub fn new(column: u32, row: u32) -> Self {
		FieldCell((column, row))
	}
	/// Get the `(column, row)` tuple
	pub fn get_column_row(&self) -> (u32, u32) {
		self.0
	}
	/// Get the column
	pub fn get_column(&self) -> u32 {
		self.0 .0
	}
	/// Get the row
	pub fn get_row(&self) -> u32 {
		self.0 .1
	}
	/// Find the cell containing a world `position`. Returns [None] when the
	/// position lies outside of a `width` by `height` grid
	pub fn from_world_position(position: Vec2, tile_size: f32, width: u32, height: u32) -> Option<Self> {
		let column = (position.x / tile_size).floor();
		let row = (position.y / tile_size).floor();
		if !column.is_finite() || !row.is_finite() || column < 0.0 || row < 0.0 {
			return None;
		}
		if column >= width as f32 || row >= height as f32 {
			return None;
		}
		Some(FieldCell::new(column as u32, row as u32))
	}
	/// Manhattan distance between two cells
	pub fn manhattan_distance(&self, other: &FieldCell) -> u32 {
		self.get_column().abs_diff(other.get_column()) + self.get_row().abs_diff(other.get_row())
	}
	/// Step one cell in the direction of `ordinal`. Returns [None] if the step would leave the positive quadrant
	pub fn step(&self, ordinal: Ordinal) -> Option<FieldCell> {
		let (dx, dy) = ordinal.delta();
		let column = self.get_column().checked_add_signed(dx)?;
		let row = self.get_row().checked_add_signed(dy)?;
		Some(FieldCell::new(column, row))
	}
}
