use std::collections::BTreeSet;

use serde::Serialize;
use tracing::debug;

use crate::error::{GraphError, Result};
use crate::maze::{Direction, RoomOracle};

/// Rooms seen while replaying a recorded path
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Coverage<Id: Ord> {
    pub visited: BTreeSet<Id>,
    /// Expected rooms the replay never entered
    pub unvisited: BTreeSet<Id>,
}

impl<Id: Ord> Coverage<Id> {
    pub fn is_complete(&self) -> bool {
        self.unvisited.is_empty()
    }

    /// Number of expected rooms left unvisited
    pub fn shortfall(&self) -> usize {
        self.unvisited.len()
    }

    /// Escalate a coverage shortfall to an error
    pub fn ensure_complete(&self) -> Result<()> {
        if self.is_complete() {
            Ok(())
        } else {
            Err(GraphError::IncompleteCoverage {
                shortfall: self.shortfall(),
            })
        }
    }
}

/// Replay `path` from the oracle's current room and compare the rooms
/// entered against `expected`.
pub fn verify_coverage<O, I>(
    oracle: &mut O,
    path: &[Direction],
    expected: I,
) -> Result<Coverage<O::RoomId>>
where
    O: RoomOracle,
    I: IntoIterator<Item = O::RoomId>,
{
    let mut visited = BTreeSet::from([oracle.current_id()]);
    for &direction in path {
        visited.insert(oracle.travel(direction)?);
    }

    let unvisited: BTreeSet<_> = expected
        .into_iter()
        .filter(|room| !visited.contains(room))
        .collect();

    debug!(
        visited = visited.len(),
        unvisited = unvisited.len(),
        "coverage replay"
    );
    Ok(Coverage { visited, unvisited })
}
