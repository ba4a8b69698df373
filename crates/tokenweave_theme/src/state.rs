//! Registry and active-system state.
//!
//! A [`ThemeManager`] owns the custom-system registry and the single active
//! configuration. Loads replace the active configuration wholesale and then
//! reflect it into the style host (remove the old style element first, then
//! inject the new one) before notifying the change listener. Failed
//! operations never partially mutate anything.

use std::sync::{Mutex, RwLock};

use rustc_hash::FxHashMap;
use serde_json::Value;
use tokenweave_codegen::GenerateOptions;
use tokenweave_core::{validate_config, DesignSystemConfig, TokenweaveError};

use crate::host::StyleHost;
use crate::presets::SystemPreset;

type ChangeListener = Box<dyn Fn(&DesignSystemConfig) + Send + Sync>;

/// Names known to [`ThemeManager::list_available`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AvailableSystems {
    /// Built-in preset ids (fixed).
    pub built_in: Vec<&'static str>,
    /// Registered custom ids, sorted.
    pub custom: Vec<String>,
}

/// Registry of custom design systems plus the currently active one.
///
/// All operations take `&self`; interior locks keep the type shareable
/// across threads, though concurrent loads should be serialized by the
/// caller since a load is not atomic with the generators reading it.
pub struct ThemeManager {
    active: RwLock<DesignSystemConfig>,
    custom: RwLock<FxHashMap<String, DesignSystemConfig>>,
    host: Mutex<Option<Box<dyn StyleHost>>>,
    on_change: RwLock<Option<ChangeListener>>,
}

impl ThemeManager {
    /// Create a manager with the default built-in system active.
    pub fn new() -> Self {
        Self::with_preset(SystemPreset::Default)
    }

    /// Create a manager with a chosen built-in system active.
    ///
    /// No reflection happens at construction; a host installed later sees
    /// the active system on the next load.
    pub fn with_preset(preset: SystemPreset) -> Self {
        Self {
            active: RwLock::new(preset.config()),
            custom: RwLock::new(FxHashMap::default()),
            host: Mutex::new(None),
            on_change: RwLock::new(None),
        }
    }

    /// Install the style host used for DOM reflection.
    pub fn set_host(&self, host: Box<dyn StyleHost>) {
        *self.host.lock().unwrap() = Some(host);
    }

    /// Register a listener invoked with the new configuration after every
    /// load.
    pub fn set_change_listener(
        &self,
        listener: impl Fn(&DesignSystemConfig) + Send + Sync + 'static,
    ) {
        *self.on_change.write().unwrap() = Some(Box::new(listener));
    }

    // ========== Registry ==========

    /// Validate and store a custom system under `id`, overwriting any prior
    /// entry. On validation failure the registry is left untouched.
    pub fn register_custom(
        &self,
        id: impl Into<String>,
        raw: &Value,
    ) -> Result<(), TokenweaveError> {
        let id = id.into();
        let config = validate_config(raw)?;
        tracing::debug!(%id, system = %config.name, "registering custom design system");
        self.custom.write().unwrap().insert(id, config);
        Ok(())
    }

    /// Built-in preset ids plus currently registered custom ids.
    pub fn list_available(&self) -> AvailableSystems {
        let mut custom: Vec<String> = self.custom.read().unwrap().keys().cloned().collect();
        custom.sort_unstable();
        AvailableSystems {
            built_in: SystemPreset::all().iter().map(|p| p.id()).collect(),
            custom,
        }
    }

    // ========== Active system ==========

    /// Activate a built-in preset. Built-ins are a closed set, so this
    /// cannot fail.
    pub fn load_built_in(&self, preset: SystemPreset) {
        tracing::debug!(preset = preset.id(), "loading built-in design system");
        self.activate(preset.config());
    }

    /// Activate a registered custom system by id.
    ///
    /// An unknown id fails with [`TokenweaveError::NotFound`] and leaves the
    /// active system unchanged.
    pub fn load_custom(&self, id: &str) -> Result<(), TokenweaveError> {
        let config = self
            .custom
            .read()
            .unwrap()
            .get(id)
            .cloned()
            .ok_or_else(|| TokenweaveError::NotFound(id.to_string()))?;
        tracing::debug!(%id, "loading custom design system");
        self.activate(config);
        Ok(())
    }

    /// Replace the active configuration wholesale and reflect it.
    pub fn activate(&self, config: DesignSystemConfig) {
        *self.active.write().unwrap() = config.clone();
        self.reflect(&config);
    }

    /// The active configuration.
    pub fn current(&self) -> DesignSystemConfig {
        self.active.read().unwrap().clone()
    }

    /// Serialize the active configuration to its transportable JSON form.
    pub fn export_current(&self) -> Result<String, TokenweaveError> {
        self.current().to_json()
    }

    /// Parse and validate a serialized configuration.
    ///
    /// Activation is a separate, explicit [`activate`](Self::activate) call;
    /// importing alone never changes the active system.
    pub fn import_system(&self, text: &str) -> Result<DesignSystemConfig, TokenweaveError> {
        DesignSystemConfig::from_json(text)
    }

    fn reflect(&self, config: &DesignSystemConfig) {
        {
            let mut host = self.host.lock().unwrap();
            if let Some(host) = host.as_mut() {
                // Old style element goes first so two conflicting variable
                // blocks are never active at once.
                host.remove_style();
                host.inject_style(&tokenweave_codegen::css_variables(config));
            }
        }
        if let Some(listener) = self.on_change.read().unwrap().as_ref() {
            listener(config);
        }
    }

    // ========== Generators against the active system ==========

    pub fn css_variables(&self) -> String {
        tokenweave_codegen::css_variables(&self.current())
    }

    pub fn framework_theme(&self) -> Value {
        tokenweave_codegen::framework_theme(&self.current())
    }

    pub fn framework_config(&self, options: &GenerateOptions) -> Value {
        tokenweave_codegen::framework_config(&self.current(), options)
    }

    pub fn layered_css(&self) -> String {
        tokenweave_codegen::layered_css(&self.current())
    }

    pub fn type_declarations(&self) -> String {
        tokenweave_codegen::type_declarations(&self.current())
    }

    pub fn css_in_js_theme(&self) -> Value {
        tokenweave_codegen::css_in_js_theme(&self.current())
    }

    /// Compose a component class string against the active system.
    pub fn resolve(
        &self,
        component: &str,
        variant: Option<&str>,
        size: Option<&str>,
        state: Option<&str>,
    ) -> String {
        tokenweave_codegen::resolve_component_class(
            &self.current(),
            component,
            variant,
            size,
            state,
        )
    }
}

impl Default for ThemeManager {
    fn default() -> Self {
        Self::new()
    }
}
