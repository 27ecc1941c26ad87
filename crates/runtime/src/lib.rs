//! Bootstrap orchestrator for the Lattice container.
//!
//! This crate assembles the bootstrap sequence: normalize the caller's
//! module references, merge in modules advertised through the extension
//! registry, harvest component scanners, and delegate the rewritten
//! parameter set to the container backend. [`init`] is the drop-in
//! entrypoint wired to the process-wide registries; [`Bootstrap`] is the
//! same sequence with every collaborator injected explicitly.

use bootlace_api::{
    BootResult, ContainerBackend, ContainerHandle, InitParams, ModuleRef, PLUGIN_GROUP,
};
use bootlace_core::{ExtensionRegistry, ModuleRegistry, discover, harvest, normalize};
use smol_str::SmolStr;
use std::sync::Arc;
use tracing::{debug, warn};

/// Environment toggle for automatic plugin discovery.
pub const AUTO_PLUGINS_ENV: &str = "BOOTLACE_AUTO_PLUGINS";

/// Parse an auto-plugins flag value. `"0"`, `"false"` and `"no"` disable
/// discovery, case-insensitively; every other value enables it.
pub fn auto_plugins_enabled(value: &str) -> bool {
    !matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "0" | "false" | "no"
    )
}

/// Bootstrap configuration. Defaults to plugin discovery enabled against
/// the reserved [`PLUGIN_GROUP`].
#[derive(Debug, Clone)]
pub struct BootConfig {
    pub auto_plugins: bool,
    pub plugin_group: SmolStr,
}

impl Default for BootConfig {
    fn default() -> Self {
        Self {
            auto_plugins: true,
            plugin_group: SmolStr::new_static(PLUGIN_GROUP),
        }
    }
}

impl BootConfig {
    /// Read the configuration from the environment. Unset means enabled.
    pub fn from_env() -> Self {
        match std::env::var(AUTO_PLUGINS_ENV) {
            Ok(value) => Self {
                auto_plugins: auto_plugins_enabled(&value),
                ..Self::default()
            },
            Err(_) => Self::default(),
        }
    }
}

/// The bootstrap sequence with explicit collaborators.
pub struct Bootstrap {
    registry: Arc<ModuleRegistry>,
    extensions: Arc<ExtensionRegistry>,
    backend: Arc<dyn ContainerBackend>,
    config: BootConfig,
}

impl Bootstrap {
    pub fn new(
        registry: Arc<ModuleRegistry>,
        extensions: Arc<ExtensionRegistry>,
        backend: Arc<dyn ContainerBackend>,
        config: BootConfig,
    ) -> Self {
        Self {
            registry,
            extensions,
            backend,
            config,
        }
    }

    /// Initialize a container.
    ///
    /// Accepts the container's own parameter surface unchanged. Module
    /// resolution failures are fatal; a plugin entry that fails to resolve
    /// is logged and skipped; whatever the backend returns, handle or
    /// error, passes through as-is.
    pub fn init(&self, mut params: InitParams) -> BootResult<Arc<dyn ContainerHandle>> {
        let base = normalize(&self.registry, std::mem::take(&mut params.modules))?;

        let all = if self.config.auto_plugins {
            let found = discover(&self.registry, &self.extensions, &self.config.plugin_group);
            for warning in &found.warnings {
                warn!(
                    entry = %warning.entry,
                    target = %warning.target,
                    reason = %warning.reason,
                    "skipping plugin that failed to load"
                );
            }
            // User-supplied modules come first; a plugin advertising one of
            // them collapses into the user's position.
            let merged = base
                .into_iter()
                .chain(found.modules)
                .map(ModuleRef::Handle);
            normalize(&self.registry, merged)?
        } else {
            base
        };

        debug!(modules = all.len(), "bootstrap module list assembled");

        let harvested = harvest(&all);
        if !harvested.is_empty() {
            let mut scanners = params.custom_scanners.take().unwrap_or_default();
            scanners.extend(harvested);
            params.custom_scanners = Some(scanners);
        }

        params.modules = all.into_iter().map(ModuleRef::Handle).collect();

        Ok(self.backend.init(params)?)
    }
}

/// Drop-in container init: process-wide registries, environment-driven
/// configuration, then the full bootstrap sequence.
pub fn init(
    backend: Arc<dyn ContainerBackend>,
    params: InitParams,
) -> BootResult<Arc<dyn ContainerHandle>> {
    Bootstrap::new(
        ModuleRegistry::global(),
        ExtensionRegistry::global(),
        backend,
        BootConfig::from_env(),
    )
    .init(params)
}

/// Install logging for a host component. Delegates to the core logging
/// module; keep the returned guard alive.
pub fn init_logging(component: &str) -> impl Drop {
    bootlace_core::logging::init_logging(component, false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flag_spellings() {
        for disabled in ["0", "false", "no", "FALSE", "No", " false "] {
            assert!(!auto_plugins_enabled(disabled), "{disabled:?}");
        }
        for enabled in ["1", "true", "yes", "", "anything", "off"] {
            assert!(auto_plugins_enabled(enabled), "{enabled:?}");
        }
    }

    #[test]
    fn default_config_discovers() {
        let config = BootConfig::default();
        assert!(config.auto_plugins);
        assert_eq!(config.plugin_group, PLUGIN_GROUP);
    }
}
