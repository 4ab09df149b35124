//! This is a plugin for Bevy game engine which maintains a single vector field
//! leading to a moving target and steers any number of actors along it
//!

pub mod behaviour;
pub mod bundle;
pub mod fields;
pub mod plugin;

pub mod prelude;
