use serde::{Deserialize, Serialize};

use crate::pos::{BlockPos, Direction};

/// The capability a destination offers to the network.
///
/// Also used as the capability key when querying a
/// [`BlockEntity`](crate::world::BlockEntity).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DestinationKind {
    ItemHandler,
    FluidHandler,
    EnergyStorage,
}

impl DestinationKind {
    pub fn all() -> [DestinationKind; 3] {
        [
            DestinationKind::ItemHandler,
            DestinationKind::FluidHandler,
            DestinationKind::EnergyStorage,
        ]
    }
}

/// A non-pipe endpoint discovered next to a pipe.
///
/// Destinations are recomputed on every scan and compare by value: the same
/// block reached from two different pipes, or through two different faces,
/// is two destinations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Destination {
    pub kind: DestinationKind,
    /// Where the endpoint sits.
    pub pos: BlockPos,
    /// Direction travelled from the source pipe to reach `pos`. `None` only
    /// when the endpoint was the scan's seed position.
    pub direction: Option<Direction>,
    /// Position of the pipe that discovered this endpoint.
    pub source: BlockPos,
}

impl Destination {
    pub fn new(
        kind: DestinationKind,
        pos: BlockPos,
        direction: Option<Direction>,
        source: BlockPos,
    ) -> Self {
        Self {
            kind,
            pos,
            direction,
            source,
        }
    }

    /// True when the destination is the discovering pipe itself.
    pub fn is_self_referential(&self) -> bool {
        self.pos == self.source
    }
}
