//! Layout loading: reads a data file, resolves network-type names, and
//! builds a [`GridWorld`].
//!
//! Provides format detection (RON/JSON/TOML), file discovery, and
//! deserialization helpers used by [`load_layout`].

use std::path::{Path, PathBuf};

use pipenet_core::id::{NetworkTypeId, NetworkTypeRegistry};
use pipenet_core::pipe::{AttachmentKind, EnergyConduit, EnergyStorage, Pipe, PipeKind};
use pipenet_core::pos::BlockPos;
use pipenet_spatial::{GridWorld, Machine, SpatialError};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::schema::{LayoutData, PipeData, PipeKindData};

// ===========================================================================
// Errors
// ===========================================================================

/// Errors that can occur during layout loading.
#[derive(Debug, thiserror::Error)]
pub enum DataLoadError {
    /// A required data file was not found in the given directory.
    #[error("required file '{file}' not found in {dir}")]
    MissingRequired { file: String, dir: PathBuf },

    /// The file has an extension we don't support.
    #[error("unsupported format for file: {file}")]
    UnsupportedFormat { file: PathBuf },

    /// Two files with the same base name but different formats exist.
    #[error("conflicting formats: {a} and {b}")]
    ConflictingFormats { a: PathBuf, b: PathBuf },

    /// A deserialization error occurred.
    #[error("parse error in {file}: {detail}")]
    Parse { file: PathBuf, detail: String },

    /// A name reference could not be resolved.
    #[error("unresolved {expected_kind} reference '{name}' in {file}")]
    UnresolvedRef {
        file: PathBuf,
        name: String,
        expected_kind: &'static str,
    },

    /// A duplicate name was found.
    #[error("duplicate name '{name}' in {file}")]
    DuplicateName { file: PathBuf, name: String },

    /// More network types were declared than ids exist.
    #[error("too many network types in {file}")]
    TooManyNetworkTypes { file: PathBuf },

    /// Two entries claim the same cell.
    #[error(transparent)]
    Spatial(#[from] SpatialError),

    /// An I/O error occurred.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

// ===========================================================================
// Format detection
// ===========================================================================

/// Supported data file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Ron,
    Toml,
    Json,
}

/// Detect the format of a file based on its extension.
pub fn detect_format(path: &Path) -> Result<Format, DataLoadError> {
    match path.extension().and_then(|e| e.to_str()) {
        Some("ron") => Ok(Format::Ron),
        Some("toml") => Ok(Format::Toml),
        Some("json") => Ok(Format::Json),
        _ => Err(DataLoadError::UnsupportedFormat {
            file: path.to_path_buf(),
        }),
    }
}

// ===========================================================================
// File discovery
// ===========================================================================

/// Scan a directory for a data file with the given base name.
///
/// Returns `Ok(None)` if no file is found, or `Err(ConflictingFormats)` if
/// multiple formats exist for the same base name.
pub fn find_data_file(dir: &Path, base_name: &str) -> Result<Option<PathBuf>, DataLoadError> {
    let mut found: Option<PathBuf> = None;

    for ext in ["ron", "toml", "json"] {
        let candidate = dir.join(format!("{base_name}.{ext}"));
        if candidate.exists() {
            if let Some(existing) = found {
                return Err(DataLoadError::ConflictingFormats {
                    a: existing,
                    b: candidate,
                });
            }
            found = Some(candidate);
        }
    }

    Ok(found)
}

/// Like [`find_data_file`], but returns an error if no file is found.
pub fn require_data_file(dir: &Path, base_name: &str) -> Result<PathBuf, DataLoadError> {
    find_data_file(dir, base_name)?.ok_or_else(|| DataLoadError::MissingRequired {
        file: base_name.to_string(),
        dir: dir.to_path_buf(),
    })
}

// ===========================================================================
// Deserialization
// ===========================================================================

/// Read a file and deserialize it according to its format.
pub fn deserialize_file<T: DeserializeOwned>(path: &Path) -> Result<T, DataLoadError> {
    let format = detect_format(path)?;
    let content = std::fs::read_to_string(path)?;
    let parse_err = |detail: String| DataLoadError::Parse {
        file: path.to_path_buf(),
        detail,
    };

    match format {
        Format::Ron => ron::from_str(&content).map_err(|e| parse_err(e.to_string())),
        Format::Json => serde_json::from_str(&content).map_err(|e| parse_err(e.to_string())),
        Format::Toml => toml::from_str(&content).map_err(|e| parse_err(e.to_string())),
    }
}

// ===========================================================================
// Layout resolution
// ===========================================================================

/// A loaded world plus the network-type names it was declared with.
#[derive(Debug, Clone)]
pub struct Layout {
    pub world: GridWorld,
    pub network_types: NetworkTypeRegistry,
}

/// Load `layout.{ron,toml,json}` from a directory.
pub fn load_layout(dir: &Path) -> Result<Layout, DataLoadError> {
    let path = require_data_file(dir, "layout")?;
    load_layout_file(&path)
}

/// Load a layout from a specific file.
pub fn load_layout_file(path: &Path) -> Result<Layout, DataLoadError> {
    let data: LayoutData = deserialize_file(path)?;
    let layout = resolve_layout(data, path)?;
    debug!(
        file = %path.display(),
        pipes = layout.world.pipe_count(),
        machines = layout.world.machine_count(),
        "loaded layout"
    );
    Ok(layout)
}

/// Resolve names in already-parsed layout data. `file` is only used for
/// error messages.
pub fn resolve_layout(data: LayoutData, file: &Path) -> Result<Layout, DataLoadError> {
    let mut network_types = NetworkTypeRegistry::new();
    for name in &data.network_types {
        check_duplicate(&network_types, name, file)?;
        network_types
            .register(name)
            .ok_or_else(|| DataLoadError::TooManyNetworkTypes {
                file: file.to_path_buf(),
            })?;
    }

    let mut world = GridWorld::new();
    for pipe in &data.pipes {
        let network_type = resolve_name(&network_types, &pipe.network_type, file)?;
        world.place_pipe(build_pipe(pipe, network_type))?;
    }
    for machine in data.machines {
        let [x, y, z] = machine.pos;
        world.place_machine(
            BlockPos::new(x, y, z),
            Machine {
                capabilities: machine.capabilities.into_iter().collect(),
                sealed: machine.sealed.into_iter().collect(),
            },
        )?;
    }

    Ok(Layout {
        world,
        network_types,
    })
}

fn build_pipe(data: &PipeData, network_type: NetworkTypeId) -> Pipe {
    let [x, y, z] = data.pos;
    let kind = match data.kind {
        PipeKindData::Item => PipeKind::Item,
        PipeKindData::Fluid => PipeKind::Fluid,
        PipeKindData::Energy => {
            PipeKind::Energy(EnergyConduit::new(data.energy_capacity.map(EnergyStorage::new)))
        }
    };
    let mut pipe = Pipe::new(BlockPos::new(x, y, z), network_type, kind);
    for attachment in &data.attachments {
        pipe.attachments_mut()
            .attach(attachment.side, AttachmentKind::Extractor(attachment.tier));
    }
    pipe
}

// ===========================================================================
// Name resolution helpers
// ===========================================================================

/// Look up a network-type name, returning an `UnresolvedRef` error if it was
/// never declared.
pub fn resolve_name(
    registry: &NetworkTypeRegistry,
    name: &str,
    file: &Path,
) -> Result<NetworkTypeId, DataLoadError> {
    registry.id(name).ok_or_else(|| DataLoadError::UnresolvedRef {
        file: file.to_path_buf(),
        name: name.to_string(),
        expected_kind: "network type",
    })
}

/// Check whether a network-type name is already declared, returning a
/// `DuplicateName` error if so.
pub fn check_duplicate(
    registry: &NetworkTypeRegistry,
    name: &str,
    file: &Path,
) -> Result<(), DataLoadError> {
    if registry.id(name).is_some() {
        Err(DataLoadError::DuplicateName {
            file: file.to_path_buf(),
            name: name.to_string(),
        })
    } else {
        Ok(())
    }
}

// ===========================================================================
// Tests
// ===========================================================================
