//! Defines the Bevy [Plugin] for the chase vector field
//!

use bevy::prelude::*;

pub mod field_layer;
pub mod steering_layer;

/// The field is always advanced before any actor reads it so every actor sees
/// the same field within a frame
#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub enum OrderingSet {
	/// Advance the vector field
	Field,
	/// Read the field for each actor
	Steer,
}

/// Adds the events and systems which maintain the field and steer actors
pub struct NavFieldPlugin;

impl Plugin for NavFieldPlugin {
	#[cfg(not(tarpaulin_include))]
	fn build(&self, app: &mut App) {
		app.add_event::<field_layer::EventGridResized>()
			.add_event::<field_layer::EventEpochOverrun>()
			.configure_sets(Update, (OrderingSet::Field, OrderingSet::Steer).chain())
			.add_systems(
				Update,
				(
					field_layer::update_vector_field.in_set(OrderingSet::Field),
					steering_layer::steer_actors.in_set(OrderingSet::Steer),
				),
			);
	}
}
