//! Logic relating to advancing the [VectorField] each frame
//!

use crate::prelude::*;
use bevy::prelude::*;

/// Sent when a grid has changed dimensions and its field had to be rebuilt
/// from nothing
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct EventGridResized {
	/// New number of columns
	width: u32,
	/// New number of rows
	height: u32,
}

impl EventGridResized {
	/// Create a new instance of [EventGridResized]
	pub fn new(width: u32, height: u32) -> Self {
		EventGridResized { width, height }
	}
	/// New number of columns
	pub fn get_width(&self) -> u32 {
		self.width
	}
	/// New number of rows
	pub fn get_height(&self) -> u32 {
		self.height
	}
}

/// Sent when a new epoch was due but the previous one was still expanding,
/// a sign that the grid is too large for the expansion budget
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct EventEpochOverrun {
	/// Generation of the epoch that overran
	generation: u32,
}

impl EventEpochOverrun {
	/// Create a new instance of [EventEpochOverrun]
	pub fn new(generation: u32) -> Self {
		EventEpochOverrun { generation }
	}
	/// Generation of the epoch that overran
	pub fn get_generation(&self) -> u32 {
		self.generation
	}
}

/// Advance the [FieldScheduler] towards the [NavTarget]. Does nothing until
/// both a navigation entity and a target exist
#[cfg(not(tarpaulin_include))]
pub fn update_vector_field(
	mut nav_q: Query<(&TileGrid, &mut FieldScheduler)>,
	target_q: Query<&BoundingBox, With<NavTarget>>,
	time: Res<Time>,
	mut event_resized: EventWriter<EventGridResized>,
	mut event_overrun: EventWriter<EventEpochOverrun>,
) {
	let Ok(target) = target_q.single() else {
		return;
	};
	let Ok((grid, mut scheduler)) = nav_q.single_mut() else {
		return;
	};
	let report = scheduler.update(grid, target.get_centre(), time.elapsed());
	if report.resized {
		event_resized.write(EventGridResized::new(grid.width(), grid.height()));
	}
	if report.overran {
		event_overrun.write(EventEpochOverrun::new(scheduler.get_generation()));
	}
	trace!("Expanded {} cells", report.cells_expanded);
}
