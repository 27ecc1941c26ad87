//! Plugin discovery: turn extension-registry entries into module handles.
//!
//! Discovery is deliberately best-effort: one broken optional plugin must
//! never take down the application that would otherwise boot fine without
//! it. Failures are returned as data; the caller decides how to surface
//! them.

use crate::extension::ExtensionRegistry;
use crate::registry::ModuleRegistry;
use bootlace_api::{BOOT_MODULE, BootError, CONTAINER_MODULE, Module};
use indexmap::IndexMap;
use smol_str::SmolStr;
use std::sync::Arc;

/// A plugin entry that could not be resolved, with the failure that
/// skipped it.
#[derive(Debug)]
pub struct PluginWarning {
    pub entry: SmolStr,
    pub target: SmolStr,
    pub reason: BootError,
}

/// What a discovery pass found: resolved modules in first-seen order and
/// per-entry warnings for everything that was skipped.
#[derive(Debug, Default)]
pub struct Discovery {
    pub modules: Vec<Arc<Module>>,
    pub warnings: Vec<PluginWarning>,
}

/// Resolve every entry registered under `group`.
///
/// Entries targeting the container core or the bootstrap layer itself are
/// infrastructure and skipped outright. Remaining targets resolve through
/// the module registry; a failing entry becomes a warning and discovery
/// moves on. Duplicate targets collapse to the first occurrence.
pub fn discover(
    registry: &ModuleRegistry,
    extensions: &ExtensionRegistry,
    group: &str,
) -> Discovery {
    let mut seen: IndexMap<SmolStr, Arc<Module>> = IndexMap::new();
    let mut warnings = Vec::new();

    for entry in extensions.entries(group) {
        if entry.target == CONTAINER_MODULE || entry.target == BOOT_MODULE {
            continue;
        }
        match registry.load(&entry.target) {
            Ok(module) => {
                seen.entry(SmolStr::new(module.name())).or_insert(module);
            }
            Err(reason) => warnings.push(PluginWarning {
                entry: entry.name,
                target: entry.target,
                reason,
            }),
        }
    }

    Discovery {
        modules: seen.into_values().collect(),
        warnings,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extension::PluginEntry;
    use crate::registry::ModuleDef;

    const GROUP: &str = "bootlace.modules";

    fn setup(targets: &[&str]) -> (ModuleRegistry, ExtensionRegistry) {
        let registry = ModuleRegistry::new();
        for target in targets {
            registry.register(ModuleDef::new(*target)).unwrap();
        }
        (registry, ExtensionRegistry::new())
    }

    #[test]
    fn empty_group_discovers_nothing() {
        let (registry, extensions) = setup(&[]);
        let found = discover(&registry, &extensions, GROUP);
        assert!(found.modules.is_empty());
        assert!(found.warnings.is_empty());
    }

    #[test]
    fn resolves_registered_entries_in_order() {
        let (registry, extensions) = setup(&["plug.metrics", "plug.tracing"]);
        extensions.register(PluginEntry::new("metrics", "plug.metrics", GROUP));
        extensions.register(PluginEntry::new("tracing", "plug.tracing", GROUP));

        let found = discover(&registry, &extensions, GROUP);
        let names: Vec<_> = found.modules.iter().map(|m| m.name()).collect();
        assert_eq!(names, ["plug.metrics", "plug.tracing"]);
        assert!(found.warnings.is_empty());
    }

    #[test]
    fn reserved_targets_are_never_plugins() {
        let (registry, extensions) = setup(&[CONTAINER_MODULE, BOOT_MODULE, "plug.real"]);
        extensions.register(PluginEntry::new("sneaky_core", CONTAINER_MODULE, GROUP));
        extensions.register(PluginEntry::new("sneaky_boot", BOOT_MODULE, GROUP));
        extensions.register(PluginEntry::new("real", "plug.real", GROUP));

        let found = discover(&registry, &extensions, GROUP);
        let names: Vec<_> = found.modules.iter().map(|m| m.name()).collect();
        assert_eq!(names, ["plug.real"]);
        // Reserved entries are skipped silently, not warned about.
        assert!(found.warnings.is_empty());
    }

    #[test]
    fn broken_entry_does_not_abort_siblings() {
        let (registry, extensions) = setup(&["plug.good"]);
        extensions.register(PluginEntry::new("broken", "plug.broken", GROUP));
        extensions.register(PluginEntry::new("good", "plug.good", GROUP));

        let found = discover(&registry, &extensions, GROUP);
        assert_eq!(found.modules.len(), 1);
        assert_eq!(found.modules[0].name(), "plug.good");

        assert_eq!(found.warnings.len(), 1);
        let warning = &found.warnings[0];
        assert_eq!(warning.entry, "broken");
        assert_eq!(warning.target, "plug.broken");
        assert!(matches!(&warning.reason, BootError::ModuleNotFound(n) if n == "plug.broken"));
    }

    #[test]
    fn duplicate_targets_collapse() {
        let (registry, extensions) = setup(&["plug.one"]);
        extensions.register(PluginEntry::new("first", "plug.one", GROUP));
        extensions.register(PluginEntry::new("second", "plug.one", GROUP));

        let found = discover(&registry, &extensions, GROUP);
        assert_eq!(found.modules.len(), 1);
    }
}
