//! Simulated maze: a room map plus a player position
//!
//! [`World`] is the room oracle used by the CLI and tests. It answers the
//! walker's local questions from a fully known [`RoomMap`].

pub mod map;

use std::collections::BTreeSet;

pub use map::{Room, RoomId, RoomMap};

use crate::error::{GraphError, Result};
use crate::maze::{Direction, RoomOracle};

#[derive(Debug, Clone)]
pub struct World {
    map: RoomMap,
    start: RoomId,
    current: RoomId,
}

impl World {
    /// World starting at the lowest room id
    pub fn new(map: RoomMap) -> Result<Self> {
        let start = map
            .room_ids()
            .next()
            .ok_or_else(|| GraphError::invalid_map("map has no rooms"))?;
        Self::with_start(map, start)
    }

    pub fn with_start(map: RoomMap, start: RoomId) -> Result<Self> {
        map.validate()?;
        if map.get(start).is_none() {
            return Err(GraphError::unknown_vertex(start));
        }
        Ok(Self {
            map,
            start,
            current: start,
        })
    }

    pub fn map(&self) -> &RoomMap {
        &self.map
    }

    pub fn start(&self) -> RoomId {
        self.start
    }

    /// Put the player back in the starting room
    pub fn reset(&mut self) {
        self.current = self.start;
    }
}

impl RoomOracle for World {
    type RoomId = RoomId;

    fn current_id(&self) -> RoomId {
        self.current
    }

    fn local_exits(&self) -> BTreeSet<Direction> {
        self.map
            .get(self.current)
            .map(|room| room.exits.keys().copied().collect())
            .unwrap_or_default()
    }

    fn travel(&mut self, direction: Direction) -> Result<RoomId> {
        let next = self
            .map
            .get(self.current)
            .and_then(|room| room.exits.get(&direction))
            .copied()
            .ok_or_else(|| GraphError::blocked_exit(self.current, direction))?;
        self.current = next;
        Ok(next)
    }
}
