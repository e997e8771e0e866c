//! Command implementations for graphwalk

pub mod ancestor;
pub mod dispatch;
pub mod explore;
pub mod path;
pub mod traverse;

use graphwalk_core::error::{GraphError, Result};
use graphwalk_core::world::{RoomId, RoomMap};

/// Explicit start room, or the map's lowest room id
pub(crate) fn start_room(map: &RoomMap, start: Option<RoomId>) -> Result<RoomId> {
    match start {
        Some(id) => Ok(id),
        None => map
            .room_ids()
            .next()
            .ok_or_else(|| GraphError::invalid_map("map has no rooms")),
    }
}

/// Render ids as a space-separated list
pub(crate) fn join_ids<T: std::fmt::Display>(ids: &[T]) -> String {
    ids.iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}
