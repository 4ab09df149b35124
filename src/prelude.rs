//! `use bevy_chase_field_plugin::prelude::*;` to import common structures and methods
//!

#[doc(hidden)]
pub use crate::fields::{
	frontier::*, grid::*, scheduler::*, settings::*, steering::*, utilities::*, vector_field::*,
};

#[doc(hidden)]
pub use crate::{
	behaviour::*,
	bundle::*,
	plugin::{field_layer::*, steering_layer::*, *},
};
