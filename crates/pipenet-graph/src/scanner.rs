//! Breadth-first network discovery and diffing.

use std::collections::{BTreeSet, VecDeque};

use pipenet_core::destination::{Destination, DestinationKind};
use pipenet_core::id::NetworkTypeId;
use pipenet_core::pos::BlockPos;
use pipenet_core::world::PipeWorld;
use tracing::{debug, debug_span, trace};

use crate::request::{RequestId, ScanRequest};
use crate::result::ScanResult;

/// Discovers the pipes connected to a start position and diffs them against
/// the pipes a network previously held.
///
/// A scanner performs exactly one scan: [`scan`](Self::scan) consumes it.
/// Every known pipe starts out as a removal candidate and is struck from
/// that set once the scan reaches it again.
#[derive(Debug)]
pub struct NetworkGraphScanner {
    required_type: NetworkTypeId,
    known: BTreeSet<BlockPos>,
    found: BTreeSet<BlockPos>,
    new_pipes: BTreeSet<BlockPos>,
    removed: BTreeSet<BlockPos>,
    destinations: BTreeSet<Destination>,
    requests: Vec<ScanRequest>,
    queue: VecDeque<RequestId>,
}

impl NetworkGraphScanner {
    pub fn new(known: BTreeSet<BlockPos>, required_type: NetworkTypeId) -> Self {
        Self {
            required_type,
            removed: known.clone(),
            known,
            found: BTreeSet::new(),
            new_pipes: BTreeSet::new(),
            destinations: BTreeSet::new(),
            requests: Vec::new(),
            queue: VecDeque::new(),
        }
    }

    /// Flood-fill from `start` and return the diff.
    ///
    /// `start` should hold a pipe of the required type. If it holds nothing,
    /// the scan ends after the seed request and every known pipe is reported
    /// removed.
    pub fn scan<W: PipeWorld + ?Sized>(mut self, world: &W, start: BlockPos) -> ScanResult {
        let span = debug_span!("network_scan", ?start, network_type = self.required_type.0);
        let _guard = span.enter();

        self.push(ScanRequest::seed(start));
        while let Some(id) = self.queue.pop_front() {
            self.visit(world, id);
        }

        debug!(
            found = self.found.len(),
            new = self.new_pipes.len(),
            removed = self.removed.len(),
            destinations = self.destinations.len(),
            requests = self.requests.len(),
            "network scan complete"
        );

        ScanResult::new(
            self.found,
            self.new_pipes,
            self.removed,
            self.destinations,
            self.requests,
        )
    }

    fn push(&mut self, request: ScanRequest) {
        let id = RequestId(self.requests.len());
        self.requests.push(request);
        self.queue.push_back(id);
    }

    fn visit<W: PipeWorld + ?Sized>(&mut self, world: &W, id: RequestId) {
        let request = &self.requests[id.0];
        let (pos, direction, parent) = (request.pos(), request.direction(), request.parent());
        trace!(?pos, ?direction, "visit");

        if let Some(pipe) = world.pipe_at(pos) {
            if pipe.network_type() == self.required_type {
                if !self.found.insert(pos) {
                    return;
                }
                if !self.known.contains(&pos) {
                    self.new_pipes.insert(pos);
                }
                self.removed.remove(&pos);
                self.requests[id.0].mark_successful();

                for (dir, neighbor) in pos.neighbors() {
                    self.push(ScanRequest::child(neighbor, dir, id));
                }
            } else if pipe.energy_storage().is_some() {
                // A foreign energy pipe still acts as a power sink for this network.
                self.destinations.insert(Destination::new(
                    DestinationKind::EnergyStorage,
                    pos,
                    direction,
                    pos,
                ));
            }
            return;
        }

        // The seed must never probe block entities: doing so can make a
        // freshly placed entity revalidate itself and trigger another scan.
        let (Some(parent), Some(direction)) = (parent, direction) else {
            return;
        };
        let source = self.requests[parent.0].pos();
        let Some(source_pipe) = world.pipe_at(source) else {
            return;
        };
        if source_pipe.attachments().has_attachment(direction) {
            return;
        }
        let Some(entity) = world.block_entity_at(pos) else {
            return;
        };

        let side = direction.opposite();
        for kind in DestinationKind::all() {
            if entity.has_capability(kind, side) {
                trace!(?pos, ?kind, ?source, "destination");
                self.destinations
                    .insert(Destination::new(kind, pos, Some(direction), source));
            }
        }
    }
}
