//! FIFO queue of cells waiting to be expanded during an epoch
//!

use std::collections::VecDeque;

use crate::prelude::*;

/// Cells of the current epoch that still need their neighbours processing.
/// First in first out so the search expands in layers of equal path length
#[derive(Clone, Debug, Default)]
pub struct Frontier(VecDeque<(FieldCell, u32)>);

impl Frontier {
	/// Queue a cell along with its path length
	pub fn push(&mut self, cell: FieldCell, path_length: u32) {
		self.0.push_back((cell, path_length));
	}
	/// Take the oldest queued cell
	pub fn pop(&mut self) -> Option<(FieldCell, u32)> {
		self.0.pop_front()
	}
	/// Discard every queued cell
	pub fn clear(&mut self) {
		self.0.clear();
	}
	/// Number of queued cells
	pub fn len(&self) -> usize {
		self.0.len()
	}
	/// Whether every queued cell has been expanded
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}
}
