//! Tuning values used when building and reading a [crate::prelude::VectorField]
//!

use std::time::Duration;

use crate::prelude::*;

/// Controls the cadence and cost of rebuilding the field and the strength of
/// the resulting steering
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(try_from = "UncheckedSettings"))]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FieldSettings {
	/// Size of a tile in world units
	tile_size: f32,
	/// Minimum time between the starts of two epochs
	epoch_interval_ms: u64,
	/// Maximum number of frontier cells expanded by one update
	expansion_budget: usize,
	/// Magnitude of a non-zero steering vector
	steering_speed: f32,
}

impl Default for FieldSettings {
	fn default() -> Self {
		FieldSettings {
			tile_size: TILE_SIZE,
			epoch_interval_ms: EPOCH_INTERVAL_MS,
			expansion_budget: EXPANSION_BUDGET,
			steering_speed: STEERING_SPEED,
		}
	}
}

/// Raised when [FieldSettings] could never produce a usable field
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InvalidSettings {
	/// Tile size is zero, negative or not finite
	TileSize(f32),
	/// No cell could ever be expanded
	ZeroBudget,
}

impl std::fmt::Display for InvalidSettings {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			InvalidSettings::TileSize(size) => {
				write!(f, "Tile size must be a positive number, got {}", size)
			}
			InvalidSettings::ZeroBudget => {
				f.write_str("Expansion budget must allow at least one cell per update")
			}
		}
	}
}

impl std::error::Error for InvalidSettings {}

impl FieldSettings {
	/// Create a new instance of [FieldSettings]. Panics if `tile_size` is not
	/// a positive number or `expansion_budget` is zero
	pub fn new(
		tile_size: f32,
		epoch_interval_ms: u64,
		expansion_budget: usize,
		steering_speed: f32,
	) -> Self {
		match FieldSettings::try_new(tile_size, epoch_interval_ms, expansion_budget, steering_speed) {
			Ok(settings) => settings,
			Err(e) => panic!("{}", e),
		}
	}
	/// Create a new instance of [FieldSettings], returning an error instead of
	/// panicking on an unusable `tile_size` or `expansion_budget`
	pub fn try_new(
		tile_size: f32,
		epoch_interval_ms: u64,
		expansion_budget: usize,
		steering_speed: f32,
	) -> Result<Self, InvalidSettings> {
		if !(tile_size.is_finite() && tile_size > 0.0) {
			return Err(InvalidSettings::TileSize(tile_size));
		}
		if expansion_budget == 0 {
			return Err(InvalidSettings::ZeroBudget);
		}
		Ok(FieldSettings {
			tile_size,
			epoch_interval_ms,
			expansion_budget,
			steering_speed,
		})
	}
	/// Size of a tile in world units
	pub fn get_tile_size(&self) -> f32 {
		self.tile_size
	}
	/// Minimum time between the starts of two epochs
	pub fn get_epoch_interval(&self) -> Duration {
		Duration::from_millis(self.epoch_interval_ms)
	}
	/// Maximum number of cells expanded by one update
	pub fn get_expansion_budget(&self) -> usize {
		self.expansion_budget
	}
	/// Magnitude of a non-zero steering vector
	pub fn get_steering_speed(&self) -> f32 {
		self.steering_speed
	}
	/// Parse [FieldSettings] from a `ron` string, missing fields take their
	/// default value. Values rejected by [FieldSettings::try_new] are an error
	#[cfg(feature = "ron")]
	pub fn from_ron_str(s: &str) -> Result<Self, ron::error::SpannedError> {
		ron::from_str(s)
	}
	/// From a `ron` file generate the [FieldSettings]
	#[cfg(feature = "ron")]
	pub fn from_ron(path: String) -> Self {
		let contents = match std::fs::read_to_string(&path) {
			Ok(c) => c,
			Err(e) => panic!("Failed opening FieldSettings file {}: {}", path, e),
		};
		match Self::from_ron_str(&contents) {
			Ok(settings) => settings,
			Err(e) => panic!("Failed deserializing FieldSettings: {}", e),
		}
	}
}

/// Deserialized fields of [FieldSettings] before they are checked
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
#[serde(default)]
struct UncheckedSettings {
	/// Size of a tile in world units
	tile_size: f32,
	/// Minimum time between the starts of two epochs
	epoch_interval_ms: u64,
	/// Maximum number of frontier cells expanded by one update
	expansion_budget: usize,
	/// Magnitude of a non-zero steering vector
	steering_speed: f32,
}

#[cfg(feature = "serde")]
impl Default for UncheckedSettings {
	fn default() -> Self {
		UncheckedSettings {
			tile_size: TILE_SIZE,
			epoch_interval_ms: EPOCH_INTERVAL_MS,
			expansion_budget: EXPANSION_BUDGET,
			steering_speed: STEERING_SPEED,
		}
	}
}

#[cfg(feature = "serde")]
impl TryFrom<UncheckedSettings> for FieldSettings {
	type Error = InvalidSettings;

	fn try_from(raw: UncheckedSettings) -> Result<Self, Self::Error> {
		FieldSettings::try_new(
			raw.tile_size,
			raw.epoch_interval_ms,
			raw.expansion_budget,
			raw.steering_speed,
		)
	}
}
