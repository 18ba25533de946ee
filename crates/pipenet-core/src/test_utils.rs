//! Shared test helpers for integration tests and benchmarks.
//!
//! Gated behind `#[cfg(any(test, feature = "test-utils"))]` so these helpers
//! are available in unit tests, integration tests, and benchmarks (via the
//! `test-utils` feature).

use crate::id::NetworkTypeId;
use crate::pipe::*;
use crate::pos::BlockPos;

// ===========================================================================
// Network types
// ===========================================================================

pub fn item() -> NetworkTypeId {
    NetworkTypeId(0)
}
pub fn fluid() -> NetworkTypeId {
    NetworkTypeId(1)
}
pub fn energy() -> NetworkTypeId {
    NetworkTypeId(2)
}

// ===========================================================================
// Pipe constructors
// ===========================================================================

pub fn pos(x: i32, y: i32, z: i32) -> BlockPos {
    BlockPos::new(x, y, z)
}

pub fn item_pipe(at: BlockPos) -> Pipe {
    Pipe::new(at, item(), PipeKind::Item)
}

pub fn fluid_pipe(at: BlockPos) -> Pipe {
    Pipe::new(at, fluid(), PipeKind::Fluid)
}

/// Energy pipe bound to a network, so its storage accessor is present.
pub fn energy_pipe(at: BlockPos) -> Pipe {
    Pipe::new(
        at,
        energy(),
        PipeKind::Energy(EnergyConduit::new(Some(EnergyStorage::new(1_000)))),
    )
}

/// Energy pipe whose storage accessor has not been bound yet.
pub fn unbound_energy_pipe(at: BlockPos) -> Pipe {
    Pipe::new(at, energy(), PipeKind::Energy(EnergyConduit::new(None)))
}

pub fn extractor() -> AttachmentKind {
    AttachmentKind::Extractor(ExtractorTier::Basic)
}

/// Positions of a straight line of `len` cells along +x starting at `start`.
pub fn line_x(start: BlockPos, len: i32) -> Vec<BlockPos> {
    (0..len)
        .map(|i| BlockPos::new(start.x + i, start.y, start.z))
        .collect()
}

/// Positions of the border of a `side` x `side` square in the y = 0 plane,
/// which forms a closed ring of pipes.
pub fn ring(side: i32) -> Vec<BlockPos> {
    let mut out = Vec::new();
    for x in 0..side {
        for z in 0..side {
            if x == 0 || z == 0 || x == side - 1 || z == side - 1 {
                out.push(BlockPos::new(x, 0, z));
            }
        }
    }
    out
}
