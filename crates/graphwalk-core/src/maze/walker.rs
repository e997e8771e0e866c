use std::collections::btree_map::Entry;
use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;
use tracing::{debug, trace};

use crate::error::Result;
use crate::graph::VertexId;
use crate::maze::{Direction, RoomOracle};

/// When the walker stops
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// Stop once this many distinct rooms are known. Used when the full map
    /// is available to the caller (simulation and tests).
    KnownTotal(usize),
    /// Stop when no known room has an unexplored exit and the backtrack
    /// stack is empty, i.e. the walker is back at the start.
    Exhaustive,
}

/// Outcome of a single walker step
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step<Id> {
    /// Current room registered in the knowledge map
    Discovered(Id),
    /// Moved through an unexplored exit
    Advanced(Direction),
    /// Retreated along the backtrack stack
    Retreated(Direction),
    Finished,
}

/// Summary of a completed walk
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WalkReport {
    /// Every move made, forward and backtracking, in order
    pub path: Vec<Direction>,
    pub rooms_discovered: usize,
    pub backtracks: usize,
}

impl WalkReport {
    pub fn moves(&self) -> usize {
        self.path.len()
    }
}

/// Iterative depth-first explorer with explicit backtracking.
///
/// Owns its knowledge map (room -> unexplored exits) and backtrack stack
/// for the duration of one walk.
#[derive(Debug, Clone)]
pub struct MazeWalker<Id> {
    termination: Termination,
    knowledge: BTreeMap<Id, BTreeSet<Direction>>,
    backtrack: Vec<Direction>,
    path: Vec<Direction>,
    backtracks: usize,
}

impl<Id: VertexId> MazeWalker<Id> {
    pub fn new(termination: Termination) -> Self {
        Self {
            termination,
            knowledge: BTreeMap::new(),
            backtrack: Vec::new(),
            path: Vec::new(),
            backtracks: 0,
        }
    }

    /// Unexplored exits per known room
    pub fn knowledge(&self) -> &BTreeMap<Id, BTreeSet<Direction>> {
        &self.knowledge
    }

    /// Reverse directions of the forward moves not yet undone, oldest first
    pub fn backtrack_stack(&self) -> &[Direction] {
        &self.backtrack
    }

    /// Moves recorded so far
    pub fn path(&self) -> &[Direction] {
        &self.path
    }

    /// Advance the walk by one action
    pub fn step<O>(&mut self, oracle: &mut O) -> Result<Step<Id>>
    where
        O: RoomOracle<RoomId = Id>,
    {
        if let Termination::KnownTotal(total) = self.termination {
            if self.knowledge.len() >= total {
                return Ok(Step::Finished);
            }
        }

        let unexplored = match self.knowledge.entry(oracle.current_id()) {
            Entry::Vacant(slot) => {
                let mut exits = oracle.local_exits();
                // The way back is already explored.
                if let Some(entry) = self.backtrack.last() {
                    exits.remove(entry);
                }
                trace!(room = %slot.key(), exits = exits.len(), "discovered");
                let room = slot.key().clone();
                slot.insert(exits);
                return Ok(Step::Discovered(room));
            }
            Entry::Occupied(slot) => slot.into_mut(),
        };

        // Moves are recorded only once the oracle has made them.
        if let Some(&direction) = unexplored.last() {
            oracle.travel(direction)?;
            unexplored.remove(&direction);
            self.path.push(direction);
            self.backtrack.push(direction.inverse());
            return Ok(Step::Advanced(direction));
        }

        match self.backtrack.last().copied() {
            Some(direction) => {
                oracle.travel(direction)?;
                self.backtrack.pop();
                self.path.push(direction);
                self.backtracks += 1;
                Ok(Step::Retreated(direction))
            }
            None => Ok(Step::Finished),
        }
    }

    /// Step until finished and report the recorded path
    pub fn walk<O>(mut self, oracle: &mut O) -> Result<WalkReport>
    where
        O: RoomOracle<RoomId = Id>,
    {
        while self.step(oracle)? != Step::Finished {}

        debug!(
            moves = self.path.len(),
            rooms = self.knowledge.len(),
            backtracks = self.backtracks,
            "walk finished"
        );
        Ok(WalkReport {
            path: self.path,
            rooms_discovered: self.knowledge.len(),
            backtracks: self.backtracks,
        })
    }
}

/// Explore everything reachable from the oracle's current room
#[tracing::instrument(level = "debug", skip(oracle))]
pub fn explore<O: RoomOracle>(oracle: &mut O, termination: Termination) -> Result<WalkReport> {
    MazeWalker::new(termination).walk(oracle)
}
