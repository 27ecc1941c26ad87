//! Reference resolution and list normalization.

use crate::registry::ModuleRegistry;
use bootlace_api::{BootError, BootResult, Module, ModuleRef};
use indexmap::IndexMap;
use smol_str::SmolStr;
use std::sync::Arc;

/// Resolve one reference to a module handle.
///
/// Handles pass through unchanged. Names are looked up (and loaded on first
/// use) in the registry. Owned references derive the owning identifier,
/// preferring the direct owner over the value's own declared name; a value
/// with neither fails with [`BootError::InvalidReference`].
pub fn resolve(registry: &ModuleRegistry, reference: &ModuleRef) -> BootResult<Arc<Module>> {
    match reference {
        ModuleRef::Handle(module) => Ok(Arc::clone(module)),
        ModuleRef::Name(name) => registry.load(name),
        ModuleRef::Owned(owned) => {
            let name = owned
                .owner
                .as_ref()
                .or(owned.declared_name.as_ref())
                .ok_or_else(|| BootError::InvalidReference(owned.display.clone()))?;
            registry.load(name)
        }
    }
}

/// Resolve a sequence of references into a deduplicated module list.
///
/// References resolve in input order; the first resolution per identity is
/// kept, later duplicates are dropped. Any resolution failure fails the
/// whole normalization.
pub fn normalize(
    registry: &ModuleRegistry,
    refs: impl IntoIterator<Item = ModuleRef>,
) -> BootResult<Vec<Arc<Module>>> {
    let mut seen: IndexMap<SmolStr, Arc<Module>> = IndexMap::new();
    for reference in refs {
        let module = resolve(registry, &reference)?;
        seen.entry(SmolStr::new(module.name())).or_insert(module);
    }
    Ok(seen.into_values().collect())
}
