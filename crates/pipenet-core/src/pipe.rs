//! Pipes, their per-face attachments, and the optional energy conduit.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::id::NetworkTypeId;
use crate::pos::{BlockPos, Direction};

// ---------------------------------------------------------------------------
// Attachments
// ---------------------------------------------------------------------------

/// Extractor upgrade tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExtractorTier {
    #[default]
    Basic,
    Improved,
    Advanced,
    Elite,
    Ultimate,
}

/// What is mounted on a pipe face.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttachmentKind {
    Extractor(ExtractorTier),
}

/// Per-face attachments on a pipe. At most one attachment per face.
///
/// A face with an attachment does not expose the neighbouring block as a
/// destination during a network scan.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttachmentManager {
    attachments: BTreeMap<Direction, AttachmentKind>,
}

impl AttachmentManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has_attachment(&self, dir: Direction) -> bool {
        self.attachments.contains_key(&dir)
    }

    pub fn get(&self, dir: Direction) -> Option<AttachmentKind> {
        self.attachments.get(&dir).copied()
    }

    /// Mount an attachment, returning whatever was on that face before.
    pub fn attach(&mut self, dir: Direction, kind: AttachmentKind) -> Option<AttachmentKind> {
        self.attachments.insert(dir, kind)
    }

    /// Remove the attachment on a face, if any.
    pub fn detach(&mut self, dir: Direction) -> Option<AttachmentKind> {
        self.attachments.remove(&dir)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Direction, AttachmentKind)> + '_ {
        self.attachments.iter().map(|(&d, &k)| (d, k))
    }

    pub fn len(&self) -> usize {
        self.attachments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attachments.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Energy conduit
// ---------------------------------------------------------------------------

/// Energy buffer exposed by an energy pipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnergyStorage {
    pub capacity: u64,
}

impl EnergyStorage {
    pub fn new(capacity: u64) -> Self {
        Self { capacity }
    }
}

/// The power-conduit side of an energy pipe.
///
/// The storage accessor is absent until the pipe has been bound to a
/// network that provides one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnergyConduit {
    storage: Option<EnergyStorage>,
}

impl EnergyConduit {
    pub fn new(storage: Option<EnergyStorage>) -> Self {
        Self { storage }
    }

    pub fn storage(&self) -> Option<&EnergyStorage> {
        self.storage.as_ref()
    }

    pub fn set_storage(&mut self, storage: Option<EnergyStorage>) {
        self.storage = storage;
    }
}

/// The variant of a pipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PipeKind {
    Item,
    Fluid,
    Energy(EnergyConduit),
}

// ---------------------------------------------------------------------------
// Pipe
// ---------------------------------------------------------------------------

/// A pipe placed in the world. Identified by its position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pipe {
    pos: BlockPos,
    network_type: NetworkTypeId,
    kind: PipeKind,
    attachments: AttachmentManager,
}

impl Pipe {
    pub fn new(pos: BlockPos, network_type: NetworkTypeId, kind: PipeKind) -> Self {
        Self {
            pos,
            network_type,
            kind,
            attachments: AttachmentManager::new(),
        }
    }

    pub fn pos(&self) -> BlockPos {
        self.pos
    }

    pub fn network_type(&self) -> NetworkTypeId {
        self.network_type
    }

    pub fn kind(&self) -> &PipeKind {
        &self.kind
    }

    pub fn attachments(&self) -> &AttachmentManager {
        &self.attachments
    }

    pub fn attachments_mut(&mut self) -> &mut AttachmentManager {
        &mut self.attachments
    }

    /// The energy conduit of this pipe, if it is a power-carrying pipe.
    pub fn as_energy_conduit(&self) -> Option<&EnergyConduit> {
        match &self.kind {
            PipeKind::Energy(conduit) => Some(conduit),
            PipeKind::Item | PipeKind::Fluid => None,
        }
    }

    pub fn as_energy_conduit_mut(&mut self) -> Option<&mut EnergyConduit> {
        match &mut self.kind {
            PipeKind::Energy(conduit) => Some(conduit),
            PipeKind::Item | PipeKind::Fluid => None,
        }
    }

    /// Shorthand for the energy storage accessor of an energy pipe.
    pub fn energy_storage(&self) -> Option<&EnergyStorage> {
        self.as_energy_conduit().and_then(EnergyConduit::storage)
    }
}
