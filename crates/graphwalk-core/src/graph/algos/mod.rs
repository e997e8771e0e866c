//! Graph algorithm implementations
//!
//! - `bfs`: Breadth-first enumeration and shortest-path search
//! - `dfs`: Depth-first enumeration and path search, iterative and recursive
//! - `path`: Path reconstruction from predecessor maps

pub mod bfs;
pub mod dfs;
pub mod path;

pub use dfs::MAX_RECURSION_DEPTH;
pub use path::reconstruct_path;
