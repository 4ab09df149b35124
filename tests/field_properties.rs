//! Check the guarantees of a drained vector field on a variety of grids
//!

use std::time::Duration;

use bevy::prelude::*;
use bevy_chase_field_plugin::prelude::*;

/// Walls with a few dead ends, target in the top left
const MAZE: [&str; 8] = [
	"....#.....",
	".##.#.###.",
	".#..#...#.",
	".#.###.#..",
	".#.....#.#",
	".#####.#..",
	".......#.#",
	"######....",
];

/// World position in the middle of a tile
fn tile_centre(column: u32, row: u32) -> Vec2 {
	Vec2::new(
		(column as f32 + 0.5) * TILE_SIZE,
		(row as f32 + 0.5) * TILE_SIZE,
	)
}

/// Box covering the middle of a single tile
fn box_in_tile(column: u32, row: u32) -> BoundingBox {
	BoundingBox::new(
		column as f32 * TILE_SIZE + 0.05,
		row as f32 * TILE_SIZE + 0.05,
		0.1,
		0.1,
	)
}

/// Update without advancing time until the current epoch has finished
fn drain(scheduler: &mut FieldScheduler, grid: &TileGrid, target: Vec2, now: Duration) {
	let mut guard = 0;
	while scheduler.get_state() == SchedulerState::Expanding {
		scheduler.update(grid, target, now);
		guard += 1;
		assert!(guard < 100_000, "field never finished expanding");
	}
}

/// Build a fully drained field towards `target`
fn build(grid: &TileGrid, target: FieldCell) -> FieldScheduler {
	let mut scheduler = FieldScheduler::default();
	let position = tile_centre(target.get_column(), target.get_row());
	scheduler.update(grid, position, Duration::ZERO);
	drain(&mut scheduler, grid, position, Duration::ZERO);
	scheduler
}

#[test]
fn open_grid_lengths_are_manhattan() {
	let grid = TileGrid::new(17, 11);
	let target = FieldCell::new(3, 7);
	let scheduler = build(&grid, target);
	let field = scheduler.get_field();
	for row in 0..11 {
		for column in 0..17 {
			let cell = FieldCell::new(column, row);
			let entry = field.get(cell).expect("open grid cell was not reached");
			assert_eq!(cell.manhattan_distance(&target), entry.get_path_length(), "cell {:?}", cell);
		}
	}
}

#[test]
fn layers_are_monotonic() {
	let grid = TileGrid::from_rows(&MAZE);
	let scheduler = build(&grid, FieldCell::new(0, 0));
	let field = scheduler.get_field();
	let mut reached = 0;
	for (cell, entry) in field.iter_entries() {
		reached += 1;
		if entry.get_path_length() == 0 {
			assert_eq!(FieldCell::new(0, 0), cell);
			assert_eq!(Ordinal::Zero, entry.get_direction());
			continue;
		}
		let next = cell
			.step(entry.get_direction())
			.and_then(|n| field.get(n))
			.expect("direction must lead to a reached cell");
		assert_eq!(entry.get_path_length() - 1, next.get_path_length());
	}
	assert!(reached > 30);
}

#[test]
fn blocking_tiles_are_respected() {
	let grid = TileGrid::from_rows(&MAZE);
	let scheduler = build(&grid, FieldCell::new(0, 0));
	let field = scheduler.get_field();
	for row in 0..grid.height() {
		for column in 0..grid.width() {
			let cell = FieldCell::new(column, row);
			if grid.is_blocking(column, row) {
				assert_eq!(None, field.get(cell), "wall {:?} has an entry", cell);
				continue;
			}
			if let Some(entry) = field.get(cell) {
				let path = field.trace_path(cell).expect("path should reach the target");
				assert_eq!(entry.get_path_length() as usize, path.len() - 1);
				for step in path.iter() {
					assert!(!grid.is_blocking(step.get_column(), step.get_row()));
				}
				assert_eq!(Some(&FieldCell::new(0, 0)), path.last());
			}
		}
	}
}

#[test]
fn sealed_room_is_never_reached() {
	let grid = TileGrid::from_rows(&[
		".....",
		".###.",
		".#.#.",
		".###.",
		".....",
	]);
	let scheduler = build(&grid, FieldCell::new(0, 0));
	assert_eq!(None, scheduler.get_field().get(FieldCell::new(2, 2)));
	assert_eq!(Vec2::ZERO, scheduler.steer(&box_in_tile(2, 2), &box_in_tile(0, 0)));
}

#[test]
fn steering_is_idempotent() {
	let grid = TileGrid::from_rows(&MAZE);
	let scheduler = build(&grid, FieldCell::new(0, 0));
	let target = box_in_tile(0, 0);
	let actor = BoundingBox::new(1.13, 0.52, 0.15, 0.09);
	let first = scheduler.steer(&actor, &target);
	let second = scheduler.steer(&actor, &target);
	assert_eq!(first, second);
}

#[test]
fn single_update_respects_budget() {
	let grid = TileGrid::new(64, 64);
	let mut scheduler = FieldScheduler::default();
	let position = tile_centre(10, 40);
	let first = scheduler.update(&grid, position, Duration::ZERO);
	assert_eq!(EXPANSION_BUDGET, first.cells_expanded);
	let mut total = first.cells_expanded;
	while scheduler.get_state() == SchedulerState::Expanding {
		let report = scheduler.update(&grid, position, Duration::ZERO);
		assert!(report.cells_expanded <= EXPANSION_BUDGET);
		total += report.cells_expanded;
	}
	assert_eq!(64 * 64, total);
}

#[test]
fn resize_discards_old_field() {
	let settings = FieldSettings::new(TILE_SIZE, 300, 1, STEERING_SPEED);
	let small = TileGrid::new(10, 10);
	let mut scheduler = FieldScheduler::new(settings);
	let old_target = tile_centre(2, 2);
	scheduler.update(&small, old_target, Duration::ZERO);
	drain(&mut scheduler, &small, old_target, Duration::ZERO);
	assert_eq!(100, scheduler.get_field().iter_entries().count());

	let large = TileGrid::new(20, 15);
	let new_target = FieldCell::new(15, 10);
	let position = tile_centre(15, 10);
	// well within the epoch interval, the resize forces a new epoch anyway
	let report = scheduler.update(&large, position, Duration::from_millis(20));
	assert!(report.resized);
	assert!(report.epoch_started);
	assert_eq!(1, report.cells_expanded);
	// only the target and its neighbours are readable, nothing from the old field
	let visible: Vec<(FieldCell, FieldEntry)> = scheduler.get_field().iter_entries().collect();
	assert_eq!(5, visible.len());
	for (cell, entry) in visible.iter() {
		assert_eq!(cell.manhattan_distance(&new_target), entry.get_path_length());
	}

	drain(&mut scheduler, &large, position, Duration::from_millis(20));
	let field = scheduler.get_field();
	assert_eq!((20, 15), field.get_dimensions());
	for row in 0..15 {
		for column in 0..20 {
			let cell = FieldCell::new(column, row);
			let entry = field.get(cell).unwrap();
			assert_eq!(cell.manhattan_distance(&new_target), entry.get_path_length());
		}
	}
}

#[test]
fn five_by_five_scenario() {
	let grid = TileGrid::new(5, 5);
	let scheduler = build(&grid, FieldCell::new(2, 2));
	let field = scheduler.get_field();
	let actor = box_in_tile(0, 0);
	let entry = field.get(FieldCell::new(0, 0)).unwrap();
	assert_eq!(4, entry.get_path_length());
	let path = field.trace_path(FieldCell::new(0, 0)).unwrap();
	assert_eq!(4, path.len() - 1);
	assert_eq!(Some(&FieldCell::new(2, 2)), path.last());
	for step in path.iter() {
		assert!(!grid.is_blocking(step.get_column(), step.get_row()));
	}
	let steering = scheduler.steer(&actor, &box_in_tile(2, 2));
	assert!((steering.length() - STEERING_SPEED).abs() < 1e-5);
}

#[test]
fn overlapping_target_never_steers() {
	let grid = TileGrid::from_rows(&MAZE);
	let scheduler = build(&grid, FieldCell::new(0, 0));
	let target = BoundingBox::new(0.0, 0.0, 0.5, 0.5);
	for actor in [
		BoundingBox::new(0.1, 0.1, 0.1, 0.1),
		BoundingBox::new(0.45, 0.3, 0.4, 0.4),
		BoundingBox::new(-0.1, -0.1, 1.0, 1.0),
	] {
		assert_eq!(Vec2::ZERO, scheduler.steer(&actor, &target));
	}
}

#[test]
fn quick_updates_keep_generation() {
	let grid = TileGrid::new(100, 100);
	let mut scheduler = FieldScheduler::default();
	let position = tile_centre(50, 50);
	scheduler.update(&grid, position, Duration::from_millis(1000));
	assert_eq!(SchedulerState::Expanding, scheduler.get_state());
	let generation = scheduler.get_generation();
	let report = scheduler.update(&grid, position, Duration::from_millis(1100));
	assert!(!report.epoch_started);
	assert!(!report.overran);
	assert_eq!(generation, scheduler.get_generation());
}
