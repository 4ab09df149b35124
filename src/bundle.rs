//! Groups the grid of a room with the scheduler that builds a vector field over it
//!

use crate::prelude::*;
use bevy::prelude::*;

/// Spawn one of these per navigable room. The world keeps ownership of the
/// [TileGrid] and is free to mutate or replace it between frames, the
/// [FieldScheduler] picks up any change of dimensions on its next update
#[derive(Bundle)]
pub struct NavFieldBundle {
	/// Layout of the room
	grid: TileGrid,
	/// Builds and owns the vector field
	scheduler: FieldScheduler,
}

impl NavFieldBundle {
	/// Create a new instance of [NavFieldBundle] with default [FieldSettings]
	pub fn new(grid: TileGrid) -> Self {
		NavFieldBundle::with_settings(grid, FieldSettings::default())
	}
	/// Create a new instance of [NavFieldBundle] with custom tuning
	pub fn with_settings(grid: TileGrid, settings: FieldSettings) -> Self {
		NavFieldBundle {
			grid,
			scheduler: FieldScheduler::new(settings),
		}
	}
	/// Create a new instance of [NavFieldBundle] where the [FieldSettings] are derived from disk
	#[cfg(feature = "ron")]
	pub fn from_ron(grid: TileGrid, path: &str) -> Self {
		NavFieldBundle::with_settings(grid, FieldSettings::from_ron(path.to_string()))
	}
}
