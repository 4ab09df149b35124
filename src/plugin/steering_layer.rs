//! Logic relating to reading the [VectorField] for each actor
//!

use crate::prelude::*;
use bevy::prelude::*;

/// Labels the entity every actor chases, it needs a [BoundingBox] too
#[derive(Component, Default, Debug, Clone, Copy)]
pub struct NavTarget;

/// Direction and speed an actor should move in this frame, written by
/// [steer_actors]. Applying it to a transform or velocity is up to the game
#[derive(Component, Default, Debug, Clone, Copy, PartialEq)]
pub struct Steering(Vec2);

impl Steering {
	/// Current steering vector
	pub fn get(&self) -> Vec2 {
		self.0
	}
	/// Replace the steering vector
	pub fn set(&mut self, steering: Vec2) {
		self.0 = steering;
	}
}

/// Write the [Steering] of every actor from the current field. Actors whose
/// [Behaviour] doesn't follow the field, or any actor when there's no target
/// or field, get zero
#[cfg(not(tarpaulin_include))]
pub fn steer_actors(
	nav_q: Query<&FieldScheduler>,
	target_q: Query<&BoundingBox, With<NavTarget>>,
	mut actor_q: Query<(&BoundingBox, &Behaviour, &mut Steering), Without<NavTarget>>,
) {
	let scheduler = nav_q.single().ok();
	let target = target_q.single().ok();
	for (bounding_box, behaviour, mut steering) in &mut actor_q {
		let next = match (scheduler, target) {
			(Some(s), Some(t)) if behaviour.follows_field() => s.steer(bounding_box, t),
			_ => Vec2::ZERO,
		};
		// avoid triggering change detection every frame
		if steering.get() != next {
			steering.set(next);
		}
	}
}
