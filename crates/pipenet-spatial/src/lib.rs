//! Sparse in-memory block world for pipe placement and capability queries.
//!
//! Provides [`GridWorld`], a 3D grid that stores pipes and machines keyed by
//! [`BlockPos`] and implements [`PipeWorld`] so network scans can walk it.
//! A cell holds at most one occupant: a pipe or a machine.

use std::collections::{BTreeMap, BTreeSet};

use pipenet_core::destination::DestinationKind;
use pipenet_core::pipe::Pipe;
use pipenet_core::pos::{BlockPos, Direction};
use pipenet_core::world::{BlockEntity, PipeWorld};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// A block entity exposing a fixed set of capabilities on every side except
/// the sealed ones.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Machine {
    pub capabilities: BTreeSet<DestinationKind>,
    #[serde(default)]
    pub sealed: BTreeSet<Direction>,
}

impl Machine {
    pub fn new(capabilities: impl IntoIterator<Item = DestinationKind>) -> Self {
        Self {
            capabilities: capabilities.into_iter().collect(),
            sealed: BTreeSet::new(),
        }
    }

    /// A machine exposing only an item handler.
    pub fn chest() -> Self {
        Self::new([DestinationKind::ItemHandler])
    }

    /// A machine exposing only a fluid handler.
    pub fn tank() -> Self {
        Self::new([DestinationKind::FluidHandler])
    }

    /// A machine exposing only energy storage.
    pub fn battery() -> Self {
        Self::new([DestinationKind::EnergyStorage])
    }

    /// Stop exposing anything on `side`.
    pub fn sealed_on(mut self, side: Direction) -> Self {
        self.sealed.insert(side);
        self
    }
}

impl BlockEntity for Machine {
    fn has_capability(&self, kind: DestinationKind, side: Direction) -> bool {
        !self.sealed.contains(&side) && self.capabilities.contains(&kind)
    }
}

/// Errors from world placement.
#[derive(Debug, thiserror::Error)]
pub enum SpatialError {
    #[error("position {0:?} is occupied")]
    Occupied(BlockPos),
    #[error("nothing of that kind is placed at {0:?}")]
    NotPlaced(BlockPos),
}

// ---------------------------------------------------------------------------
// GridWorld
// ---------------------------------------------------------------------------

/// A sparse block world holding pipes and machines.
#[derive(Debug, Clone, Default)]
pub struct GridWorld {
    pipes: BTreeMap<BlockPos, Pipe>,
    machines: BTreeMap<BlockPos, Machine>,
}

impl GridWorld {
    pub fn new() -> Self {
        Self::default()
    }

    // -- Placement --

    /// Place a pipe at its own position.
    pub fn place_pipe(&mut self, pipe: Pipe) -> Result<(), SpatialError> {
        let pos = pipe.pos();
        if self.is_occupied(pos) {
            return Err(SpatialError::Occupied(pos));
        }
        self.pipes.insert(pos, pipe);
        Ok(())
    }

    /// Remove and return the pipe at `pos`.
    pub fn remove_pipe(&mut self, pos: BlockPos) -> Result<Pipe, SpatialError> {
        self.pipes.remove(&pos).ok_or(SpatialError::NotPlaced(pos))
    }

    pub fn place_machine(&mut self, pos: BlockPos, machine: Machine) -> Result<(), SpatialError> {
        if self.is_occupied(pos) {
            return Err(SpatialError::Occupied(pos));
        }
        self.machines.insert(pos, machine);
        Ok(())
    }

    pub fn remove_machine(&mut self, pos: BlockPos) -> Result<Machine, SpatialError> {
        self.machines.remove(&pos).ok_or(SpatialError::NotPlaced(pos))
    }

    // -- Point queries --

    pub fn pipe(&self, pos: BlockPos) -> Option<&Pipe> {
        self.pipes.get(&pos)
    }

    /// Mutable access to a placed pipe, e.g. to change its attachments.
    pub fn pipe_mut(&mut self, pos: BlockPos) -> Result<&mut Pipe, SpatialError> {
        self.pipes.get_mut(&pos).ok_or(SpatialError::NotPlaced(pos))
    }

    pub fn machine(&self, pos: BlockPos) -> Option<&Machine> {
        self.machines.get(&pos)
    }

    pub fn is_occupied(&self, pos: BlockPos) -> bool {
        self.pipes.contains_key(&pos) || self.machines.contains_key(&pos)
    }

    pub fn pipes(&self) -> impl Iterator<Item = &Pipe> {
        self.pipes.values()
    }

    // -- Stats --

    pub fn pipe_count(&self) -> usize {
        self.pipes.len()
    }

    pub fn machine_count(&self) -> usize {
        self.machines.len()
    }
}

impl PipeWorld for GridWorld {
    fn pipe_at(&self, pos: BlockPos) -> Option<&Pipe> {
        self.pipes.get(&pos)
    }

    fn block_entity_at(&self, pos: BlockPos) -> Option<&dyn BlockEntity> {
        self.machines.get(&pos).map(|m| m as &dyn BlockEntity)
    }
}
