//! Room map loading
//!
//! A map is a JSON object keyed by room id:
//!
//! ```json
//! { "0": { "coords": [3, 5], "exits": { "n": 1 } },
//!   "1": { "coords": [3, 6], "exits": { "s": 0 } } }
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{GraphError, Result};
use crate::graph::Graph;
use crate::maze::Direction;

pub type RoomId = u32;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    /// Grid position, used only for display
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coords: Option<(i32, i32)>,
    #[serde(default)]
    pub exits: BTreeMap<Direction, RoomId>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoomMap {
    rooms: BTreeMap<RoomId, Room>,
}

impl RoomMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load and validate a map file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let map: RoomMap = content.parse()?;
        debug!(path = %path.display(), rooms = map.len(), "map loaded");
        Ok(map)
    }

    /// Insert or replace a room
    pub fn insert(&mut self, id: RoomId, room: Room) {
        self.rooms.insert(id, room);
    }

    /// Join two rooms in both directions, creating either room if needed
    pub fn connect(&mut self, from: RoomId, direction: Direction, to: RoomId) {
        self.rooms
            .entry(from)
            .or_default()
            .exits
            .insert(direction, to);
        self.rooms
            .entry(to)
            .or_default()
            .exits
            .insert(direction.inverse(), from);
    }

    pub fn get(&self, id: RoomId) -> Option<&Room> {
        self.rooms.get(&id)
    }

    pub fn room_ids(&self) -> impl Iterator<Item = RoomId> + '_ {
        self.rooms.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    /// Every exit must lead to a room the map defines
    pub fn validate(&self) -> Result<()> {
        for (id, room) in &self.rooms {
            for (direction, target) in &room.exits {
                if !self.rooms.contains_key(target) {
                    return Err(GraphError::invalid_map(format!(
                        "room {} exit {} leads to undefined room {}",
                        id, direction, target
                    )));
                }
            }
        }
        Ok(())
    }

    /// Graph with one vertex per room and one directed edge per exit
    pub fn to_graph(&self) -> Result<Graph<RoomId>> {
        let mut graph = Graph::new();
        for &id in self.rooms.keys() {
            graph.add_vertex(id);
        }
        for (id, room) in &self.rooms {
            for target in room.exits.values() {
                graph.add_edge(id, target)?;
            }
        }
        Ok(graph)
    }
}

impl FromStr for RoomMap {
    type Err = GraphError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let map: RoomMap = serde_json::from_str(s)?;
        map.validate()?;
        Ok(map)
    }
}
