//! Vector fields are a means of handling pathfinding for a crowd of actors all
//! chasing the same target.
//!
//! [Fixing Pathfinding Once and For All](https://web.archive.org/web/20150905073624/http://www.ai-blog.net/archives/000152.html)
//!
//! [leifnode](https://leifnode.com/2013/12/flow-field-pathfinding/)
//!
//! Instead of every actor searching for a path to the target a single
//! breadth-first search is run outwards from the target. Each tile it reaches
//! records the step to take towards the target and how many steps remain, so
//! any number of actors can look up their next move from the one shared result.
//!
//! Definitions:
//!
//! * Grid - a `width x height` arrangement of tiles, each either blocking or walkable. Owned by the world, the fields only read it
//! * Vector field - one optional entry per tile holding a direction ([Ordinal]) and a path length
//! * Epoch - one complete search seeded from the target, a new one starts every `300ms` or when the grid changes size
//! * Generation - counter distinguishing entries of the current epoch from those of older epochs without clearing the field
//! * Frontier - tiles queued for expansion in the current epoch, drained a fixed number at a time each frame
//!
//! [Ordinal]: crate::prelude::Ordinal
//!

pub mod frontier;
pub mod grid;
pub mod scheduler;
pub mod settings;
pub mod steering;
pub mod utilities;
pub mod vector_field;
