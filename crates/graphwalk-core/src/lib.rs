//! Graphwalk Core Library
//!
//! In-memory directed graphs with breadth-first and depth-first traversal,
//! path search, and an incremental maze walker that discovers rooms through
//! local exit information only.

pub mod ancestry;
pub mod config;
pub mod error;
pub mod format;
pub mod graph;
pub mod logging;
pub mod maze;
pub mod world;
