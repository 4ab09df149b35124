//! The [FieldScheduler] owns a [VectorField] and decides when it gets rebuilt.
//!
//! Every call to [FieldScheduler::update]:
//!
//! 1. Compares the grid dimensions with the field, a mismatch reallocates the
//! field and forces a new epoch straight away
//! 2. Starts a new epoch once the epoch interval has elapsed, provided the
//! previous epoch has finished. An epoch seeds the cell containing the target
//! and bumps the generation so every older entry becomes unreadable
//! 3. Expands at most `expansion_budget` cells of the frontier as a
//! breadth-first search outwards from the target, so a large grid is spread
//! over several frames instead of stalling one
//!
//! If the interval elapses while cells are still queued the epoch has overrun
//! its budget, the new epoch is declined and a warning raised. Seeing this
//! regularly means the grid is too large for the budget and interval.
//!

use std::time::Duration;

use crate::prelude::*;
use bevy::prelude::*;

/// Whether the scheduler has work left in the current epoch
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SchedulerState {
	/// The frontier is empty, waiting for the next epoch
	Idle,
	/// Cells are queued and will be expanded by subsequent updates
	Expanding,
}

/// Summary of a single [FieldScheduler::update]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UpdateReport {
	/// The grid dimensions changed and the field was reallocated
	pub resized: bool,
	/// A new epoch was started
	pub epoch_started: bool,
	/// The epoch interval elapsed while the current epoch was still expanding.
	/// Only raised on the first update of an epoch to overrun
	pub overran: bool,
	/// Number of cells taken off the frontier
	pub cells_expanded: usize,
}

/// Running totals of the scheduler's activity
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FieldDiagnostics {
	/// Epochs that seeded or tried to seed a target
	pub epochs_started: u64,
	/// Epochs whose frontier fully drained
	pub epochs_completed: u64,
	/// Times the field was reallocated for new grid dimensions
	pub resizes: u64,
	/// Epochs that were still expanding when the next one was due
	pub overruns: u64,
	/// Cells taken off the frontier across all epochs
	pub cells_expanded: u64,
}

/// Incrementally builds a [VectorField] flowing towards a target. Actors read
/// the field through [FieldScheduler::steer]
#[derive(Component, Clone, Debug, Default)]
pub struct FieldScheduler {
	/// Field shared by every actor
	field: VectorField,
	/// Cells queued for expansion in the current epoch
	frontier: Frontier,
	/// Tuning values
	settings: FieldSettings,
	/// When the current epoch started
	last_epoch_start: Option<Duration>,
	/// Whether the current epoch has already reported an overrun
	overrun_reported: bool,
	/// Running totals
	diagnostics: FieldDiagnostics,
}

impl FieldScheduler {
	/// Create a new instance of [FieldScheduler]
	pub fn new(settings: FieldSettings) -> Self {
		FieldScheduler {
			settings,
			..default()
		}
	}
	/// Get a reference to the field
	pub fn get_field(&self) -> &VectorField {
		&self.field
	}
	/// Get the tuning values
	pub fn get_settings(&self) -> &FieldSettings {
		&self.settings
	}
	/// Get the running totals
	pub fn get_diagnostics(&self) -> &FieldDiagnostics {
		&self.diagnostics
	}
	/// Generation of the current epoch, 0 before the first
	pub fn get_generation(&self) -> u32 {
		self.field.get_generation()
	}
	/// Number of cells waiting in the frontier
	pub fn get_frontier_len(&self) -> usize {
		self.frontier.len()
	}
	/// Whether the current epoch still has cells to expand
	pub fn get_state(&self) -> SchedulerState {
		if self.frontier.is_empty() {
			SchedulerState::Idle
		} else {
			SchedulerState::Expanding
		}
	}
	/// Advance the field by one frame's worth of work. `target_position` is in
	/// world units and `now` is the time elapsed since the app started
	pub fn update<G: BlockingGrid>(
		&mut self,
		grid: &G,
		target_position: Vec2,
		now: Duration,
	) -> UpdateReport {
		let mut report = UpdateReport::default();
		let (width, height) = (grid.width(), grid.height());
		if self.field.ensure_capacity(width, height) {
			debug!(
				"Grid dimensions changed to {}x{}, rebuilding vector field",
				width, height
			);
			self.frontier.clear();
			self.diagnostics.resizes += 1;
			report.resized = true;
		}

		let interval_elapsed = match self.last_epoch_start {
			Some(start) => now.saturating_sub(start) >= self.settings.get_epoch_interval(),
			None => true,
		};
		if report.resized || interval_elapsed {
			if self.frontier.is_empty() {
				self.begin_epoch(grid, target_position, now);
				report.epoch_started = true;
			} else if !self.overrun_reported {
				warn!(
					"Vector field epoch {} overran its budget, {} cells still queued",
					self.field.get_generation(),
					self.frontier.len()
				);
				self.overrun_reported = true;
				self.diagnostics.overruns += 1;
				report.overran = true;
			}
		}

		report.cells_expanded = self.expand(grid);
		report
	}
	/// Start a new search from the cell containing `target_position`. A
	/// target outside of the grid or on a blocking tile leaves the field empty
	fn begin_epoch<G: BlockingGrid>(&mut self, grid: &G, target_position: Vec2, now: Duration) {
		self.field.begin_generation();
		self.last_epoch_start = Some(now);
		self.overrun_reported = false;
		self.diagnostics.epochs_started += 1;
		let (width, height) = self.field.get_dimensions();
		match FieldCell::from_world_position(
			target_position,
			self.settings.get_tile_size(),
			width,
			height,
		) {
			Some(target) if !grid.is_blocking(target.get_column(), target.get_row()) => {
				self.field.set(target, Ordinal::Zero, 0);
				self.field.mark_visited(target);
				self.frontier.push(target, 0);
				trace!(
					"Epoch {} seeded at {:?}",
					self.field.get_generation(),
					target
				);
			}
			Some(target) => {
				debug!("Target cell {:?} is blocking, field left empty", target);
				self.diagnostics.epochs_completed += 1;
			}
			None => {
				debug!(
					"Target {:?} lies outside of the grid, field left empty",
					target_position
				);
				self.diagnostics.epochs_completed += 1;
			}
		}
	}
	/// Pop cells off the frontier until it empties or the budget is spent,
	/// returning how many cells were expanded
	fn expand<G: BlockingGrid>(&mut self, grid: &G) -> usize {
		if self.frontier.is_empty() {
			return 0;
		}
		let (width, height) = self.field.get_dimensions();
		let mut expanded = 0;
		while expanded < self.settings.get_expansion_budget() {
			let Some((cell, path_length)) = self.frontier.pop() else {
				break;
			};
			expanded += 1;
			let next_length = path_length + 1;
			for (neighbour, towards_cell) in Ordinal::get_orthogonal_cell_neighbours(cell, width, height) {
				if grid.is_blocking(neighbour.get_column(), neighbour.get_row()) {
					continue;
				}
				// don't overwrite an entry with an equal or better path
				if self.field.is_visited(neighbour) {
					match self.field.get(neighbour) {
						Some(entry) if entry.get_path_length() > next_length => {}
						_ => continue,
					}
				}
				self.field.set(neighbour, towards_cell, next_length);
				self.field.mark_visited(neighbour);
				self.frontier.push(neighbour, next_length);
			}
		}
		self.diagnostics.cells_expanded += expanded as u64;
		if self.frontier.is_empty() {
			self.diagnostics.epochs_completed += 1;
			trace!("Epoch {} complete", self.field.get_generation());
		}
		expanded
	}
}
