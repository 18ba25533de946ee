//! Read-only world accessors consumed by the network scanner.

use crate::destination::DestinationKind;
use crate::pipe::Pipe;
use crate::pos::{BlockPos, Direction};

/// A block entity that may expose capabilities to adjacent pipes.
pub trait BlockEntity {
    /// Whether this entity exposes `kind` on the given side. `side` is the
    /// face of the entity being queried, i.e. the face looking at the pipe.
    fn has_capability(&self, kind: DestinationKind, side: Direction) -> bool;
}

/// A snapshot view of the world a scan walks over.
///
/// Implementations must not change while a scan borrows them.
pub trait PipeWorld {
    /// The pipe at `pos`, if any.
    fn pipe_at(&self, pos: BlockPos) -> Option<&Pipe>;

    /// The block entity at `pos`, if any.
    fn block_entity_at(&self, pos: BlockPos) -> Option<&dyn BlockEntity>;

    fn has_pipe(&self, pos: BlockPos) -> bool {
        self.pipe_at(pos).is_some()
    }
}
