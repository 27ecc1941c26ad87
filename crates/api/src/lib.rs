pub mod container;
pub mod error;
pub mod module;
pub mod params;
pub mod scanner;

// Re-export commonly used types
pub use container::{ContainerBackend, ContainerError, ContainerHandle, ContainerObserver};
pub use error::{BootError, BootResult};
pub use module::{BOOT_MODULE, CONTAINER_MODULE, PLUGIN_GROUP};
pub use module::{Module, ModuleRef, Modules, OwnedRef};
pub use params::{InitParams, Override};
pub use scanner::Scanner;
