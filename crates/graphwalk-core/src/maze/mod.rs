//! Maze exploration with local knowledge only
//!
//! The walker never sees the whole graph: at each room it learns the room's
//! id and exits from a [`RoomOracle`], remembers which exits are still
//! unexplored, and retreats along a backtrack stack of reverse directions
//! once a room is exhausted.

pub mod coverage;
pub mod direction;
pub mod oracle;
pub mod walker;

pub use coverage::{verify_coverage, Coverage};
pub use direction::Direction;
pub use oracle::RoomOracle;
pub use walker::{explore, MazeWalker, Step, Termination, WalkReport};
