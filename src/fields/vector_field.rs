//! The [VectorField] holds, for every tile of the grid, the single step an
//! actor should take to get closer to the target along with the number of
//! steps remaining. The field is rebuilt from scratch every epoch but is never
//! cleared between epochs: each tile also records the generation in which it
//! was last visited and an entry is only readable when that generation is the
//! current one.
//!
//! For an open `5x5` grid with the target in the middle the path lengths of a
//! fully drained field look like:
//!
//! ```text
//!  _____________________________
//! |     |     |     |     |     |
//! |  4  |  3  |  2  |  3  |  4  |
//! |_____|_____|_____|_____|_____|
//! |     |     |     |     |     |
//! |  3  |  2  |  1  |  2  |  3  |
//! |_____|_____|_____|_____|_____|
//! |     |     |     |     |     |
//! |  2  |  1  |  0  |  1  |  2  |
//! |_____|_____|_____|_____|_____|
//! |     |     |     |     |     |
//! |  3  |  2  |  1  |  2  |  3  |
//! |_____|_____|_____|_____|_____|
//! |     |     |     |     |     |
//! |  4  |  3  |  2  |  3  |  4  |
//! |_____|_____|_____|_____|_____|
//! ```
//!

use crate::prelude::*;

/// A step towards the target and the number of steps left to reach it
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldEntry {
	/// Direction of the next cell on the shortest known path
	direction: Ordinal,
	/// Number of steps from this cell to the target
	path_length: u32,
}

impl FieldEntry {
	/// Create a new instance of [FieldEntry]
	pub fn new(direction: Ordinal, path_length: u32) -> Self {
		FieldEntry {
			direction,
			path_length,
		}
	}
	/// Get the direction of the next step
	pub fn get_direction(&self) -> Ordinal {
		self.direction
	}
	/// Get the number of steps left to the target
	pub fn get_path_length(&self) -> u32 {
		self.path_length
	}
}

/// Per tile directions and path lengths paired with the visited generation store
#[derive(Clone, Debug, Default)]
pub struct VectorField {
	/// Number of columns the arrays were allocated for
	width: u32,
	/// Number of rows the arrays were allocated for
	height: u32,
	/// Entries indexed by `row * width + column`
	entries: Vec<Option<FieldEntry>>,
	/// Generation in which each cell was last visited
	visited: Vec<u32>,
	/// Current generation, a cell is visited iff its `visited` value matches
	generation: u32,
}

impl VectorField {
	/// Create a new instance of [VectorField] sized for a `width` by `height` grid
	pub fn new(width: u32, height: u32) -> Self {
		let mut field = VectorField::default();
		field.ensure_capacity(width, height);
		field
	}
	/// Reallocate the field and visited store when the dimensions differ from
	/// the ones requested, resetting the generation. Returns `true` when a
	/// reallocation took place
	pub fn ensure_capacity(&mut self, width: u32, height: u32) -> bool {
		if self.width == width && self.height == height && self.entries.len() == Self::area(width, height) {
			return false;
		}
		let area = Self::area(width, height);
		self.width = width;
		self.height = height;
		self.entries = vec![None; area];
		self.visited = vec![0; area];
		self.generation = 0;
		true
	}
	/// Move on to a new generation, invalidating every entry written so far
	pub fn begin_generation(&mut self) {
		if self.generation == u32::MAX {
			self.visited.fill(0);
			self.generation = 0;
		}
		self.generation += 1;
	}
	/// Get the current generation
	pub fn get_generation(&self) -> u32 {
		self.generation
	}
	/// Get the `(width, height)` the field is allocated for
	pub fn get_dimensions(&self) -> (u32, u32) {
		(self.width, self.height)
	}
	/// Whether a cell sits within the field
	pub fn contains(&self, cell: FieldCell) -> bool {
		cell.get_column() < self.width && cell.get_row() < self.height
	}
	/// Flag a cell as visited in the current generation
	pub fn mark_visited(&mut self, cell: FieldCell) {
		if let Some(i) = self.index(cell) {
			self.visited[i] = self.generation;
		}
	}
	/// Whether a cell has been visited in the current generation
	pub fn is_visited(&self, cell: FieldCell) -> bool {
		self.index(cell)
			.is_some_and(|i| self.visited[i] == self.generation)
	}
	/// Record the step and path length of a cell
	pub fn set(&mut self, cell: FieldCell, direction: Ordinal, path_length: u32) {
		if let Some(i) = self.index(cell) {
			self.entries[i] = Some(FieldEntry::new(direction, path_length));
		}
	}
	/// Retrieve the entry of a cell. Returns [None] for cells outside of the
	/// field and for cells that have not been reached in the current generation
	pub fn get(&self, cell: FieldCell) -> Option<FieldEntry> {
		let i = self.index(cell)?;
		if self.visited[i] != self.generation {
			return None;
		}
		self.entries[i]
	}
	/// Iterate over every readable entry of the current generation
	pub fn iter_entries(&self) -> impl Iterator<Item = (FieldCell, FieldEntry)> + '_ {
		(0..self.height).flat_map(move |row| {
			(0..self.width).filter_map(move |column| {
				let cell = FieldCell::new(column, row);
				self.get(cell).map(|e| (cell, e))
			})
		})
	}
	/// Follow the stored directions from `start` until the target is reached,
	/// returning the visited cells including `start` and the target. Returns
	/// [None] if `start` has no entry or the chain is broken
	pub fn trace_path(&self, start: FieldCell) -> Option<Vec<FieldCell>> {
		let mut entry = self.get(start)?;
		let mut current = start;
		let mut path = vec![current];
		while entry.get_direction() != Ordinal::Zero {
			current = current.step(entry.get_direction())?;
			let next = self.get(current)?;
			// lengths must strictly decrease, which also bounds the walk
			if next.get_path_length() >= entry.get_path_length() {
				return None;
			}
			entry = next;
			path.push(current);
		}
		Some(path)
	}
	/// Number of cells in a `width` by `height` grid
	fn area(width: u32, height: u32) -> usize {
		width as usize * height as usize
	}
	/// Flattened index of a cell
	fn index(&self, cell: FieldCell) -> Option<usize> {
		if !self.contains(cell) {
			return None;
		}
		Some(cell.get_row() as usize * self.width as usize + cell.get_column() as usize)
	}
}
