use crate::params::InitParams;
use std::any::Any;
use std::sync::Arc;

/// Handle to an initialized container, as returned by the init entrypoint.
pub trait ContainerHandle: Send + Sync {
    /// Look up a component by key.
    fn get(&self, key: &str) -> Option<Arc<dyn Any + Send + Sync>>;

    /// Whether a component is registered under `key`.
    fn has(&self, key: &str) -> bool;

    /// Tear the container down, running component shutdown hooks.
    fn shutdown(&self);
}

impl std::fmt::Debug for dyn ContainerHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("ContainerHandle")
    }
}

/// Container lifecycle observer, forwarded opaquely through the bootstrap.
pub trait ContainerObserver: Send + Sync {
    fn on_init(&self, _container_id: &str) {}

    fn on_shutdown(&self, _container_id: &str) {}
}

/// Errors raised by the container's own init entrypoint. Bootlace passes
/// them through unchanged.
#[derive(Debug, thiserror::Error)]
pub enum ContainerError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
    #[error("Internal container error: {0}")]
    Internal(String),
}

/// The container's init entrypoint.
///
/// The bootstrap orchestrator accepts the same [`InitParams`] surface and
/// delegates here after rewriting the module and scanner parameters, so a
/// `Bootstrap` can stand in wherever a raw backend is expected.
pub trait ContainerBackend: Send + Sync {
    fn init(&self, params: InitParams) -> Result<Arc<dyn ContainerHandle>, ContainerError>;
}
