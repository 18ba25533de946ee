use pipenet_core::pos::{BlockPos, Direction};
use serde::{Deserialize, Serialize};

/// Index of a request in a scan's trace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RequestId(pub usize);

/// One position visited by a network scan.
///
/// The seed request has neither a direction nor a parent. Every other request
/// was issued by a successful pipe request one step back along `direction`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanRequest {
    pos: BlockPos,
    direction: Option<Direction>,
    parent: Option<RequestId>,
    successful: bool,
}

impl ScanRequest {
    pub(crate) fn seed(pos: BlockPos) -> Self {
        Self {
            pos,
            direction: None,
            parent: None,
            successful: false,
        }
    }

    pub(crate) fn child(pos: BlockPos, direction: Direction, parent: RequestId) -> Self {
        Self {
            pos,
            direction: Some(direction),
            parent: Some(parent),
            successful: false,
        }
    }

    pub(crate) fn mark_successful(&mut self) {
        self.successful = true;
    }

    pub fn pos(&self) -> BlockPos {
        self.pos
    }

    /// Direction travelled from the parent to reach this position.
    pub fn direction(&self) -> Option<Direction> {
        self.direction
    }

    pub fn parent(&self) -> Option<RequestId> {
        self.parent
    }

    /// Whether this position was confirmed as a pipe of the scanned network.
    pub fn is_successful(&self) -> bool {
        self.successful
    }

    pub fn is_seed(&self) -> bool {
        self.parent.is_none()
    }
}
