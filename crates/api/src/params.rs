use crate::container::ContainerObserver;
use crate::module::Modules;
use crate::scanner::Scanner;
use smol_str::SmolStr;
use std::any::Any;
use std::fmt;
use std::sync::Arc;

/// A component override: the container substitutes `value` for whatever it
/// would otherwise build under `key`. Useful for testing.
#[derive(Clone)]
pub struct Override {
    pub key: SmolStr,
    pub value: Arc<dyn Any + Send + Sync>,
}

impl Override {
    pub fn new(key: impl Into<SmolStr>, value: Arc<dyn Any + Send + Sync>) -> Self {
        Self {
            key: key.into(),
            value,
        }
    }
}

impl fmt::Debug for Override {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Override")
            .field("key", &self.key)
            .finish_non_exhaustive()
    }
}

/// Parameters of the container init entrypoint.
///
/// This struct is the shared contract between the bootstrap layer and the
/// container client library: every default is declared once, here, via
/// [`Default`]. The orchestrator rewrites `modules` (and possibly
/// `custom_scanners`) and forwards everything else untouched.
#[derive(Clone, Default)]
pub struct InitParams {
    /// Modules to scan for components. Rewritten to resolved handles
    /// before delegation.
    pub modules: Modules,
    /// Active profiles for conditional component activation.
    pub profiles: Vec<SmolStr>,
    /// Component overrides applied after scanning.
    pub overrides: Vec<Override>,
    /// Opaque configuration tree consumed by the container.
    pub config: Option<serde_json::Value>,
    /// Additional scope names recognized by the container.
    pub custom_scopes: Vec<SmolStr>,
    /// Lifecycle observers.
    pub observers: Vec<Arc<dyn ContainerObserver>>,
    /// Validate the configuration without instantiating components.
    pub validate_only: bool,
    /// Identifier of the container instance.
    pub container_id: Option<SmolStr>,
    /// Additional component scanners. `None` means the caller did not set
    /// the parameter; harvested scanners are appended only when there are
    /// any, so an untouched `None` reaches the backend as `None`.
    pub custom_scanners: Option<Vec<Arc<dyn Scanner>>>,
}

impl InitParams {
    pub fn new(modules: impl Into<Modules>) -> Self {
        Self {
            modules: modules.into(),
            ..Default::default()
        }
    }

    pub fn with_profiles<I, S>(mut self, profiles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<SmolStr>,
    {
        self.profiles = profiles.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_config(mut self, config: serde_json::Value) -> Self {
        self.config = Some(config);
        self
    }

    pub fn with_custom_scanners(mut self, scanners: Vec<Arc<dyn Scanner>>) -> Self {
        self.custom_scanners = Some(scanners);
        self
    }

    pub fn with_container_id(mut self, id: impl Into<SmolStr>) -> Self {
        self.container_id = Some(id.into());
        self
    }
}

impl fmt::Debug for InitParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InitParams")
            .field("modules", &self.modules)
            .field("profiles", &self.profiles)
            .field("overrides", &self.overrides)
            .field("config", &self.config)
            .field("custom_scopes", &self.custom_scopes)
            .field("observers", &self.observers.len())
            .field("validate_only", &self.validate_only)
            .field("container_id", &self.container_id)
            .field("custom_scanners", &self.custom_scanners)
            .finish()
    }
}
