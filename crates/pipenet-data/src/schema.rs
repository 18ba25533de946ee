//! Serde data file structs for world layouts.
//!
//! A layout declares the network-type names it uses, then lists pipes and
//! machines by position. Pipes refer to network types by name; the loader
//! resolves names into ids.

use pipenet_core::destination::DestinationKind;
use pipenet_core::pipe::ExtractorTier;
use pipenet_core::pos::Direction;
use serde::Deserialize;

/// A whole layout file.
#[derive(Debug, Clone, Deserialize)]
pub struct LayoutData {
    pub network_types: Vec<String>,
    #[serde(default)]
    pub pipes: Vec<PipeData>,
    #[serde(default)]
    pub machines: Vec<MachineData>,
}

/// The variant of a pipe in a data file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PipeKindData {
    Item,
    Fluid,
    Energy,
}

/// A pipe placement.
#[derive(Debug, Clone, Deserialize)]
pub struct PipeData {
    pub pos: [i32; 3],
    #[serde(rename = "network")]
    pub network_type: String,
    pub kind: PipeKindData,
    #[serde(default)]
    pub attachments: Vec<AttachmentData>,
    /// Energy pipes only. Omitted means the pipe has no storage bound yet.
    #[serde(default)]
    pub energy_capacity: Option<u64>,
}

/// An extractor mounted on one face of a pipe.
#[derive(Debug, Clone, Deserialize)]
pub struct AttachmentData {
    pub side: Direction,
    #[serde(default)]
    pub tier: ExtractorTier,
}

/// A machine placement.
#[derive(Debug, Clone, Deserialize)]
pub struct MachineData {
    pub pos: [i32; 3],
    pub capabilities: Vec<DestinationKind>,
    #[serde(default)]
    pub sealed: Vec<Direction>,
}
