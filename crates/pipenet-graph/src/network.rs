use std::collections::BTreeSet;

use pipenet_core::destination::{Destination, DestinationKind};
use pipenet_core::id::NetworkTypeId;
use pipenet_core::pos::BlockPos;
use pipenet_core::world::PipeWorld;
use tracing::debug;

use crate::result::ScanResult;
use crate::scanner::NetworkGraphScanner;

/// The persistent topology of one pipe network.
///
/// Holds the pipe set and destination index from the most recent scan.
/// Deciding what to do with pipes a rescan reports as new or removed
/// (merging with or splitting off other networks) is up to the caller.
#[derive(Debug, Clone)]
pub struct NetworkGraph {
    network_type: NetworkTypeId,
    pipes: BTreeSet<BlockPos>,
    destinations: BTreeSet<Destination>,
}

impl NetworkGraph {
    pub fn new(network_type: NetworkTypeId) -> Self {
        Self {
            network_type,
            pipes: BTreeSet::new(),
            destinations: BTreeSet::new(),
        }
    }

    /// Rescan from `origin`, adopt the discovered topology, and return the
    /// diff against the previous one.
    pub fn scan<W: PipeWorld + ?Sized>(&mut self, world: &W, origin: BlockPos) -> ScanResult {
        let known = std::mem::take(&mut self.pipes);
        let result = NetworkGraphScanner::new(known, self.network_type).scan(world, origin);

        self.pipes = result.found().clone();
        self.destinations = result.destinations().clone();

        if !result.is_unchanged() {
            debug!(
                ?origin,
                added = result.new_pipes().len(),
                removed = result.removed().len(),
                "network topology changed"
            );
        }
        result
    }

    pub fn network_type(&self) -> NetworkTypeId {
        self.network_type
    }

    pub fn pipes(&self) -> &BTreeSet<BlockPos> {
        &self.pipes
    }

    pub fn contains(&self, pos: BlockPos) -> bool {
        self.pipes.contains(&pos)
    }

    pub fn destinations(&self) -> &BTreeSet<Destination> {
        &self.destinations
    }

    pub fn destinations_of(&self, kind: DestinationKind) -> impl Iterator<Item = &Destination> {
        self.destinations.iter().filter(move |d| d.kind == kind)
    }

    pub fn is_empty(&self) -> bool {
        self.pipes.is_empty()
    }
}
