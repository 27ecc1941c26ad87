use crate::scanner::Scanner;
use smol_str::SmolStr;
use std::sync::Arc;

/// Module identity of the container core. Extension registry entries that
/// target it are infrastructure, never application plugins.
pub const CONTAINER_MODULE: &str = "lattice";

/// Module identity of the bootstrap layer itself, filtered for the same
/// reason as [`CONTAINER_MODULE`].
pub const BOOT_MODULE: &str = "bootlace";

/// The extension-registry group queried for auto-discovered modules.
pub const PLUGIN_GROUP: &str = "bootlace.modules";

/// A fully resolved module: a uniquely identified, loadable unit of
/// configuration. Two handles with the same name are the same module.
///
/// Handles are shared as `Arc<Module>`; the module registry owns the
/// per-identity singleton.
#[derive(Debug)]
pub struct Module {
    name: SmolStr,
    scanners: Vec<Arc<dyn Scanner>>,
}

impl Module {
    pub fn new(name: impl Into<SmolStr>) -> Self {
        Self {
            name: name.into(),
            scanners: Vec::new(),
        }
    }

    pub fn with_scanners(name: impl Into<SmolStr>, scanners: Vec<Arc<dyn Scanner>>) -> Self {
        Self {
            name: name.into(),
            scanners,
        }
    }

    /// Stable identity (dotted path).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Scanners declared by this module, in declaration order. Empty means
    /// the module contributes none.
    pub fn scanners(&self) -> &[Arc<dyn Scanner>] {
        &self.scanners
    }
}

impl PartialEq for Module {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Module {}

/// A reference to a module as supplied by the caller, before resolution.
///
/// The three kinds are a closed union; callers construct the variant
/// explicitly instead of relying on runtime type probing.
#[derive(Debug, Clone)]
pub enum ModuleRef {
    /// A dotted identifier to be looked up (and loaded on first use).
    Name(SmolStr),
    /// An already-resolved handle, passed through unchanged.
    Handle(Arc<Module>),
    /// An arbitrary value that belongs to some module; the owning
    /// identifier is derived from its declared owner information.
    Owned(OwnedRef),
}

impl ModuleRef {
    pub fn name(name: impl Into<SmolStr>) -> Self {
        Self::Name(name.into())
    }

    pub fn handle(module: Arc<Module>) -> Self {
        Self::Handle(module)
    }
}

/// Owner information carried by an [`ModuleRef::Owned`] reference.
///
/// Resolution prefers `owner` and falls back to `declared_name`; a value
/// with neither cannot be resolved and fails with
/// [`BootError::InvalidReference`](crate::BootError::InvalidReference)
/// naming `display`.
#[derive(Debug, Clone)]
pub struct OwnedRef {
    pub owner: Option<SmolStr>,
    pub declared_name: Option<SmolStr>,
    /// Human-readable description of the referenced value, used in errors.
    pub display: String,
}

impl OwnedRef {
    pub fn new(display: impl Into<String>) -> Self {
        Self {
            owner: None,
            declared_name: None,
            display: display.into(),
        }
    }

    pub fn owner(mut self, owner: impl Into<SmolStr>) -> Self {
        self.owner = Some(owner.into());
        self
    }

    pub fn declared_name(mut self, name: impl Into<SmolStr>) -> Self {
        self.declared_name = Some(name.into());
        self
    }
}

impl From<OwnedRef> for ModuleRef {
    fn from(owned: OwnedRef) -> Self {
        ModuleRef::Owned(owned)
    }
}

/// The `modules` init parameter: one reference or a collection of them.
///
/// The `From` impls are the coercion boundary: a single textual value
/// always becomes exactly one element, never a sequence of characters,
/// and an already-built list passes through as-is.
#[derive(Debug, Clone, Default)]
pub struct Modules(Vec<ModuleRef>);

impl Modules {
    pub fn new(refs: Vec<ModuleRef>) -> Self {
        Self(refs)
    }

    pub fn as_slice(&self) -> &[ModuleRef] {
        &self.0
    }

    pub fn into_refs(self) -> Vec<ModuleRef> {
        self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<ModuleRef> for Modules {
    fn from(reference: ModuleRef) -> Self {
        Self(vec![reference])
    }
}

impl From<&str> for Modules {
    fn from(name: &str) -> Self {
        Self(vec![ModuleRef::name(name)])
    }
}

impl From<String> for Modules {
    fn from(name: String) -> Self {
        Self(vec![ModuleRef::name(name)])
    }
}

impl From<SmolStr> for Modules {
    fn from(name: SmolStr) -> Self {
        Self(vec![ModuleRef::Name(name)])
    }
}

impl From<Arc<Module>> for Modules {
    fn from(module: Arc<Module>) -> Self {
        Self(vec![ModuleRef::Handle(module)])
    }
}

impl From<Vec<ModuleRef>> for Modules {
    fn from(refs: Vec<ModuleRef>) -> Self {
        Self(refs)
    }
}

impl<const N: usize> From<[&str; N]> for Modules {
    fn from(names: [&str; N]) -> Self {
        names.into_iter().map(ModuleRef::name).collect()
    }
}

impl FromIterator<ModuleRef> for Modules {
    fn from_iter<I: IntoIterator<Item = ModuleRef>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for Modules {
    type Item = ModuleRef;
    type IntoIter = std::vec::IntoIter<ModuleRef>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
