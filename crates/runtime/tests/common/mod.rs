use bootlace_api::{
    ContainerBackend, ContainerError, ContainerHandle, InitParams, Scanner,
};
use bootlace_core::{ExtensionRegistry, ModuleDef, ModuleRegistry};
use bootlace_runtime::{BootConfig, Bootstrap};
use std::any::Any;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

/// Container handle that only remembers whether it was shut down.
#[derive(Default)]
pub struct StubHandle {
    shut_down: AtomicBool,
}

impl ContainerHandle for StubHandle {
    fn get(&self, _key: &str) -> Option<Arc<dyn Any + Send + Sync>> {
        None
    }

    fn has(&self, _key: &str) -> bool {
        false
    }

    fn shutdown(&self) {
        self.shut_down.store(true, Ordering::SeqCst);
    }
}

/// Backend that records the delegated parameters, or fails on demand.
pub struct RecordingBackend {
    pub delegated: Mutex<Option<InitParams>>,
    pub fail: bool,
}

impl RecordingBackend {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            delegated: Mutex::new(None),
            fail: false,
        })
    }

    pub fn failing() -> Arc<Self> {
        Arc::new(Self {
            delegated: Mutex::new(None),
            fail: true,
        })
    }

    /// The parameters of the last delegation. Panics if none happened.
    pub fn params(&self) -> InitParams {
        self.delegated
            .lock()
            .unwrap()
            .clone()
            .expect("backend was never called")
    }

    pub fn was_called(&self) -> bool {
        self.delegated.lock().unwrap().is_some()
    }
}

impl ContainerBackend for RecordingBackend {
    fn init(&self, params: InitParams) -> Result<Arc<dyn ContainerHandle>, ContainerError> {
        if self.fail {
            return Err(ContainerError::Internal("backend rejected init".into()));
        }
        *self.delegated.lock().unwrap() = Some(params);
        Ok(Arc::new(StubHandle::default()))
    }
}

pub struct NamedScanner(pub &'static str);

impl Scanner for NamedScanner {
    fn name(&self) -> &str {
        self.0
    }
}

pub fn scanner(name: &'static str) -> Arc<dyn Scanner> {
    Arc::new(NamedScanner(name))
}

/// Fresh registries with plain (scanner-less) modules registered.
pub fn registries(modules: &[&str]) -> (Arc<ModuleRegistry>, Arc<ExtensionRegistry>) {
    let registry = Arc::new(ModuleRegistry::new());
    for name in modules {
        registry.register(ModuleDef::new(*name)).unwrap();
    }
    (registry, Arc::new(ExtensionRegistry::new()))
}

pub fn bootstrap(
    registry: Arc<ModuleRegistry>,
    extensions: Arc<ExtensionRegistry>,
    backend: Arc<RecordingBackend>,
    auto_plugins: bool,
) -> Bootstrap {
    Bootstrap::new(
        registry,
        extensions,
        backend,
        BootConfig {
            auto_plugins,
            ..BootConfig::default()
        },
    )
}

/// Names of the delegated module handles, in delegation order.
pub fn module_names(params: &InitParams) -> Vec<String> {
    params
        .modules
        .as_slice()
        .iter()
        .map(|reference| match reference {
            bootlace_api::ModuleRef::Handle(module) => module.name().to_string(),
            other => panic!("backend received an unresolved reference: {other:?}"),
        })
        .collect()
}
