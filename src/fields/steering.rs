//! Turns the discrete directions of a [VectorField] into a continuous steering
//! vector for an actor.
//!
//! Rather than only looking at the tile under an actor's origin the field is
//! sampled at the four corners and the centre of the actor's bounding box:
//!
//! ```text
//!  x---------x
//!  |         |
//!  |    x    |
//!  |         |
//!  x---------x
//! ```
//!
//! The unit directions found are summed and normalised, which smooths out the
//! flip between two directions as an actor crosses a tile boundary and lets a
//! large actor feel the field across its whole footprint. Samples outside of
//! the grid, or over tiles the current epoch hasn't reached yet, are skipped.
//!

use crate::prelude::*;
use bevy::prelude::*;

/// Axis aligned bounding box in world units, `(x, y)` is the minimum corner
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[derive(Component, Clone, Copy, Debug, Default, PartialEq)]
pub struct BoundingBox {
	/// Minimum x
	x: f32,
	/// Minimum y
	y: f32,
	/// Extent along x
	width: f32,
	/// Extent along y
	height: f32,
}

impl BoundingBox {
	/// Create a new instance of [BoundingBox]
	pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
		BoundingBox {
			x,
			y,
			width,
			height,
		}
	}
	/// Minimum x
	pub fn get_x(&self) -> f32 {
		self.x
	}
	/// Minimum y
	pub fn get_y(&self) -> f32 {
		self.y
	}
	/// Extent along x
	pub fn get_width(&self) -> f32 {
		self.width
	}
	/// Extent along y
	pub fn get_height(&self) -> f32 {
		self.height
	}
	/// Midpoint of the box
	pub fn get_centre(&self) -> Vec2 {
		Vec2::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
	}
	/// Move the box so its minimum corner sits at `position`
	pub fn set_position(&mut self, position: Vec2) {
		self.x = position.x;
		self.y = position.y;
	}
	/// The four corners followed by the centre
	pub fn sample_points(&self) -> [Vec2; 5] {
		[
			Vec2::new(self.x, self.y),
			Vec2::new(self.x + self.width, self.y),
			Vec2::new(self.x, self.y + self.height),
			Vec2::new(self.x + self.width, self.y + self.height),
			self.get_centre(),
		]
	}
	/// Whether the two boxes share some area, boxes that only touch along an
	/// edge do not overlap
	pub fn overlaps(&self, other: &BoundingBox) -> bool {
		self.x < other.x + other.width
			&& self.x + self.width > other.x
			&& self.y < other.y + other.height
			&& self.y + self.height > other.y
	}
}

/// Sample `field` across the footprint of `bounding_box` and reduce the
/// directions found into a single vector of length `speed`, or zero when
/// nothing was found or the box already overlaps `target_box`
pub fn steer(
	field: &VectorField,
	settings: &FieldSettings,
	bounding_box: &BoundingBox,
	target_box: &BoundingBox,
) -> Vec2 {
	if bounding_box.overlaps(target_box) {
		return Vec2::ZERO;
	}
	let (width, height) = field.get_dimensions();
	let mut direction = Vec2::ZERO;
	for point in bounding_box.sample_points() {
		let Some(cell) =
			FieldCell::from_world_position(point, settings.get_tile_size(), width, height)
		else {
			continue;
		};
		if let Some(entry) = field.get(cell) {
			direction += entry.get_direction().as_vec2();
		}
	}
	if direction == Vec2::ZERO {
		return Vec2::ZERO;
	}
	direction.normalize() * settings.get_steering_speed()
}

impl FieldScheduler {
	/// Steering vector for an actor occupying `bounding_box` chasing a target
	/// occupying `target_box`
	pub fn steer(&self, bounding_box: &BoundingBox, target_box: &BoundingBox) -> Vec2 {
		steer(self.get_field(), self.get_settings(), bounding_box, target_box)
	}
}
