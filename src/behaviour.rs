//! Behaviours an actor can be assigned when a world is loaded. Identifiers
//! found in world data are resolved into a [Behaviour] once, at load time, so
//! systems can filter actors by variant instead of looking anything up by name
//! each frame.
//!

use std::str::FromStr;

use bevy::prelude::*;

/// What an actor does with the shared vector field
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[derive(Component, Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Behaviour {
	/// Steer along the vector field towards the target
	#[default]
	ChaseTarget,
	/// Ignore the field, steering stays at zero
	Idle,
}

impl Behaviour {
	/// Resolve a behaviour from its identifier, accepts either snake_case or
	/// CamelCase. Returns [None] for unknown identifiers
	pub fn from_identifier(identifier: &str) -> Option<Self> {
		match identifier {
			"chase_target" | "ChaseTarget" => Some(Behaviour::ChaseTarget),
			"idle" | "Idle" => Some(Behaviour::Idle),
			_ => None,
		}
	}
	/// The canonical identifier
	pub fn identifier(&self) -> &'static str {
		match self {
			Behaviour::ChaseTarget => "chase_target",
			Behaviour::Idle => "idle",
		}
	}
	/// Whether actors with this behaviour read the vector field
	pub fn follows_field(&self) -> bool {
		matches!(self, Behaviour::ChaseTarget)
	}
}

/// Raised when a behaviour identifier isn't known
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownBehaviour(pub String);

impl std::fmt::Display for UnknownBehaviour {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "unknown behaviour identifier `{}`", self.0)
	}
}

impl std::error::Error for UnknownBehaviour {}

impl FromStr for Behaviour {
	type Err = UnknownBehaviour;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Behaviour::from_identifier(s).ok_or_else(|| UnknownBehaviour(s.to_string()))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	#[test]
	fn resolve_identifiers() {
		assert_eq!(Some(Behaviour::ChaseTarget), Behaviour::from_identifier("chase_target"));
		assert_eq!(Some(Behaviour::ChaseTarget), Behaviour::from_identifier("ChaseTarget"));
		assert_eq!(Some(Behaviour::Idle), Behaviour::from_identifier("idle"));
		assert_eq!(None, Behaviour::from_identifier("FlyAway"));
	}
	#[test]
	fn identifier_round_trip() {
		for b in [Behaviour::ChaseTarget, Behaviour::Idle] {
			assert_eq!(Ok(b), b.identifier().parse::<Behaviour>());
		}
	}
	#[test]
	fn unknown_parse_error() {
		let err = "wander".parse::<Behaviour>().unwrap_err();
		assert_eq!("unknown behaviour identifier `wander`", err.to_string());
	}
	#[test]
	fn only_chasers_follow() {
		assert!(Behaviour::ChaseTarget.follows_field());
		assert!(!Behaviour::Idle.follows_field());
	}
}
