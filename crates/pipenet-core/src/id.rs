use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Identifies a pipe network type (item, fluid, energy, ...). Cheap to copy
/// and compare. Pipes with different type ids never share a network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct NetworkTypeId(pub u32);

/// Interns network-type names into [`NetworkTypeId`]s.
///
/// Ids are handed out densely in registration order. Registering a name
/// twice returns the existing id.
///
/// The id space is `u32`; once it is exhausted, new names are refused.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NetworkTypeRegistry {
    by_name: BTreeMap<String, NetworkTypeId>,
    names: Vec<String>,
}

impl NetworkTypeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a name, returning its id, or `None` if no id is left.
    pub fn register(&mut self, name: &str) -> Option<NetworkTypeId> {
        if let Some(&id) = self.by_name.get(name) {
            return Some(id);
        }
        let id = NetworkTypeId(u32::try_from(self.names.len()).ok()?);
        self.names.push(name.to_string());
        self.by_name.insert(name.to_string(), id);
        Some(id)
    }

    /// Look up the id for a name.
    pub fn id(&self, name: &str) -> Option<NetworkTypeId> {
        self.by_name.get(name).copied()
    }

    /// Look up the name for an id.
    pub fn name(&self, id: NetworkTypeId) -> Option<&str> {
        self.names.get(id.0 as usize).map(String::as_str)
    }

    /// All registered ids with their names, in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (NetworkTypeId, &str)> + '_ {
        self.names
            .iter()
            .filter_map(|name| self.by_name.get(name).map(|&id| (id, name.as_str())))
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
