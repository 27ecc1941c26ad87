//! Extension registry: the process-wide catalog of installed capabilities.
//!
//! Installed components register entries under named groups; the bootstrap
//! only ever reads the catalog. Enumeration order within a group is
//! registration order, which keeps discovery deterministic.

use dashmap::DashMap;
use once_cell::sync::Lazy;
use smol_str::SmolStr;
use std::sync::Arc;

/// One registered capability: `name` advertises the module `target` under
/// `group`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PluginEntry {
    pub name: SmolStr,
    pub target: SmolStr,
    pub group: SmolStr,
}

impl PluginEntry {
    pub fn new(
        name: impl Into<SmolStr>,
        target: impl Into<SmolStr>,
        group: impl Into<SmolStr>,
    ) -> Self {
        Self {
            name: name.into(),
            target: target.into(),
            group: group.into(),
        }
    }
}

/// Group-keyed catalog of [`PluginEntry`] records.
pub struct ExtensionRegistry {
    groups: DashMap<SmolStr, Vec<PluginEntry>>,
}

impl ExtensionRegistry {
    pub fn new() -> Self {
        Self {
            groups: DashMap::new(),
        }
    }

    /// The process-wide catalog.
    pub fn global() -> Arc<ExtensionRegistry> {
        static GLOBAL: Lazy<Arc<ExtensionRegistry>> =
            Lazy::new(|| Arc::new(ExtensionRegistry::new()));
        Arc::clone(&GLOBAL)
    }

    pub fn register(&self, entry: PluginEntry) {
        self.groups
            .entry(entry.group.clone())
            .or_default()
            .push(entry);
    }

    /// All entries registered under `group`, in registration order. Empty
    /// when the group is unknown.
    pub fn entries(&self, group: &str) -> Vec<PluginEntry> {
        self.groups
            .get(group)
            .map(|entries| entries.value().clone())
            .unwrap_or_default()
    }
}

impl Default for ExtensionRegistry {
    fn default() -> Self {
        Self::new()
    }
}
