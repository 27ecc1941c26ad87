//! Module registry: the process-wide loading cache.
//!
//! Modules are registered as definitions and turned into resolved
//! [`Module`] handles on first use. The init function of a definition runs
//! exactly once per identity, no matter how many references resolve to it.

use bootlace_api::{BootError, BootResult, Module, Scanner};
use dashmap::DashMap;
use once_cell::sync::{Lazy, OnceCell};
use smol_str::SmolStr;
use std::sync::Arc;
use tracing::debug;

type InitFn = Box<dyn Fn(&mut ModuleBuilder) + Send + Sync>;

/// Collects what a module contributes while its init function runs.
pub struct ModuleBuilder {
    scanners: Vec<Arc<dyn Scanner>>,
}

impl ModuleBuilder {
    fn seeded(scanners: Vec<Arc<dyn Scanner>>) -> Self {
        Self { scanners }
    }

    pub fn add_scanner(&mut self, scanner: Arc<dyn Scanner>) -> &mut Self {
        self.scanners.push(scanner);
        self
    }

    fn build(self, name: SmolStr) -> Module {
        Module::with_scanners(name, self.scanners)
    }
}

/// A registered but not necessarily loaded module definition.
pub struct ModuleDef {
    name: SmolStr,
    scanners: Vec<Arc<dyn Scanner>>,
    init: Option<InitFn>,
}

impl ModuleDef {
    pub fn new(name: impl Into<SmolStr>) -> Self {
        Self {
            name: name.into(),
            scanners: Vec::new(),
            init: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Attach a scanner declared alongside the definition.
    pub fn scanner(mut self, scanner: Arc<dyn Scanner>) -> Self {
        self.scanners.push(scanner);
        self
    }

    /// Set the one-time init function. It runs on first load and may carry
    /// arbitrary third-party initialization side effects.
    pub fn init(mut self, f: impl Fn(&mut ModuleBuilder) + Send + Sync + 'static) -> Self {
        self.init = Some(Box::new(f));
        self
    }
}

struct ModuleSlot {
    def: ModuleDef,
    cell: OnceCell<Arc<Module>>,
}

/// Identity-keyed registry of module definitions and their loaded handles.
///
/// Shared across bootstrap calls; all operations are safe under concurrent
/// use. [`ModuleRegistry::global`] is the process-wide instance the drop-in
/// entrypoint uses, tests construct their own.
pub struct ModuleRegistry {
    slots: DashMap<SmolStr, Arc<ModuleSlot>>,
}

impl ModuleRegistry {
    pub fn new() -> Self {
        Self {
            slots: DashMap::new(),
        }
    }

    /// The process-wide registry.
    pub fn global() -> Arc<ModuleRegistry> {
        static GLOBAL: Lazy<Arc<ModuleRegistry>> = Lazy::new(|| Arc::new(ModuleRegistry::new()));
        Arc::clone(&GLOBAL)
    }

    /// Register a module definition.
    ///
    /// Re-registering a name that has not been loaded yet replaces the
    /// definition; once a module is loaded its identity is settled and
    /// re-registration fails with [`BootError::AlreadyLoaded`].
    pub fn register(&self, def: ModuleDef) -> BootResult<()> {
        use dashmap::mapref::entry::Entry;

        match self.slots.entry(def.name.clone()) {
            Entry::Occupied(mut occupied) => {
                if occupied.get().cell.get().is_some() {
                    return Err(BootError::AlreadyLoaded(def.name.to_string()));
                }
                occupied.insert(Arc::new(ModuleSlot {
                    def,
                    cell: OnceCell::new(),
                }));
            }
            Entry::Vacant(vacant) => {
                vacant.insert(Arc::new(ModuleSlot {
                    def,
                    cell: OnceCell::new(),
                }));
            }
        }
        Ok(())
    }

    /// Resolve `name` to its module handle, running the definition's init
    /// function if this is the first load. Repeated loads return the cached
    /// handle and never re-run init.
    pub fn load(&self, name: &str) -> BootResult<Arc<Module>> {
        // Clone the slot out so the map shard is not held while init runs;
        // init may register or load further modules.
        let slot = self
            .slots
            .get(name)
            .map(|entry| Arc::clone(entry.value()))
            .ok_or_else(|| BootError::ModuleNotFound(name.to_string()))?;

        let module = slot.cell.get_or_init(|| {
            debug!(module = name, "loading module");
            let mut builder = ModuleBuilder::seeded(slot.def.scanners.clone());
            if let Some(init) = &slot.def.init {
                init(&mut builder);
            }
            Arc::new(builder.build(slot.def.name.clone()))
        });

        Ok(Arc::clone(module))
    }

    pub fn is_loaded(&self, name: &str) -> bool {
        self.slots
            .get(name)
            .is_some_and(|entry| entry.cell.get().is_some())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.slots.contains_key(name)
    }
}

impl Default for ModuleRegistry {
    fn default() -> Self {
        Self::new()
    }
}
