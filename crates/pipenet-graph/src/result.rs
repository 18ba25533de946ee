use std::collections::BTreeSet;

use pipenet_core::destination::{Destination, DestinationKind};
use pipenet_core::pos::BlockPos;

use crate::request::{RequestId, ScanRequest};

/// The outcome of one network scan.
///
/// Pipes are referred to by position. For the `known` set the scanner was
/// built with, `found == (known - removed) + new_pipes` and
/// `new_pipes` never intersects `known`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanResult {
    found: BTreeSet<BlockPos>,
    new_pipes: BTreeSet<BlockPos>,
    removed: BTreeSet<BlockPos>,
    destinations: BTreeSet<Destination>,
    requests: Vec<ScanRequest>,
}

impl ScanResult {
    pub(crate) fn new(
        found: BTreeSet<BlockPos>,
        new_pipes: BTreeSet<BlockPos>,
        removed: BTreeSet<BlockPos>,
        destinations: BTreeSet<Destination>,
        requests: Vec<ScanRequest>,
    ) -> Self {
        Self {
            found,
            new_pipes,
            removed,
            destinations,
            requests,
        }
    }

    /// Every pipe reached by this scan.
    pub fn found(&self) -> &BTreeSet<BlockPos> {
        &self.found
    }

    /// Pipes reached by this scan that were not previously known.
    pub fn new_pipes(&self) -> &BTreeSet<BlockPos> {
        &self.new_pipes
    }

    /// Previously known pipes this scan could not reach.
    pub fn removed(&self) -> &BTreeSet<BlockPos> {
        &self.removed
    }

    pub fn destinations(&self) -> &BTreeSet<Destination> {
        &self.destinations
    }

    pub fn destinations_of(&self, kind: DestinationKind) -> impl Iterator<Item = &Destination> {
        self.destinations.iter().filter(move |d| d.kind == kind)
    }

    /// All requests issued, in the order they were issued. The seed is first.
    pub fn requests(&self) -> &[ScanRequest] {
        &self.requests
    }

    pub fn request(&self, id: RequestId) -> Option<&ScanRequest> {
        self.requests.get(id.0)
    }

    pub fn parent_of(&self, id: RequestId) -> Option<&ScanRequest> {
        self.request(id)?.parent().and_then(|p| self.request(p))
    }

    pub fn successful_requests(&self) -> impl Iterator<Item = &ScanRequest> {
        self.requests.iter().filter(|r| r.is_successful())
    }

    /// Positions from the seed down to request `id`, following parents.
    /// Empty if `id` is not in the trace.
    pub fn path_to(&self, id: RequestId) -> Vec<BlockPos> {
        let mut path = Vec::new();
        let mut cursor = self.request(id);
        while let Some(request) = cursor {
            path.push(request.pos());
            cursor = request.parent().and_then(|p| self.request(p));
        }
        path.reverse();
        path
    }

    /// True when the scan neither added nor lost any pipe.
    pub fn is_unchanged(&self) -> bool {
        self.new_pipes.is_empty() && self.removed.is_empty()
    }
}
