use std::collections::BTreeSet;

use crate::error::Result;
use crate::graph::VertexId;
use crate::maze::Direction;

/// Local view of a maze from the current position.
///
/// The walker only ever calls [`RoomOracle::travel`] with a direction it saw
/// in [`RoomOracle::local_exits`] or the reverse of a move it made.
pub trait RoomOracle {
    type RoomId: VertexId;

    fn current_id(&self) -> Self::RoomId;

    fn local_exits(&self) -> BTreeSet<Direction>;

    /// Move through `direction`, returning the id of the room entered
    fn travel(&mut self, direction: Direction) -> Result<Self::RoomId>;
}
