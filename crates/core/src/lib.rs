pub mod discovery;
pub mod extension;
pub mod harvest;
pub mod logging;
pub mod registry;
pub mod resolve;

pub use discovery::{Discovery, PluginWarning, discover};
pub use extension::{ExtensionRegistry, PluginEntry};
pub use harvest::harvest;
pub use registry::{ModuleBuilder, ModuleDef, ModuleRegistry};
pub use resolve::{normalize, resolve};
