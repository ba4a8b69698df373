//! Tokenweave theme management
//!
//! The stateful half of the compiler: built-in presets, a registry of
//! user-supplied custom systems, and the single "currently active" system.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use tokenweave_theme::{SystemPreset, ThemeManager};
//!
//! let manager = ThemeManager::new();
//! manager.register_custom("acme", &raw_json_value)?;
//! manager.load_custom("acme")?;
//!
//! let css = manager.css_variables();
//! let class = manager.resolve("button", Some("ghost"), None, None);
//! ```
//!
//! # Architecture
//!
//! - [`SystemPreset`]: the closed catalog of built-in design systems
//! - [`ThemeManager`]: registry + active-system state; every load replaces
//!   the active configuration wholesale, never merges
//! - [`StyleHost`]: optional seam for reflecting the active system into a
//!   live document (remove the old style element, inject the new one, then
//!   notify the change listener). Without a host the reflection step is
//!   skipped entirely.
//!
//! The manager is an owned instance rather than a process-wide global, so
//! tests and embedders can run independent instances side by side.

pub mod host;
pub mod presets;
pub mod state;

pub use host::StyleHost;
pub use presets::SystemPreset;
pub use state::{AvailableSystems, ThemeManager};

// Re-export the core model and generator options alongside the manager.
pub use tokenweave_codegen::GenerateOptions;
pub use tokenweave_core::{DesignSystemConfig, DesignTokenSet, SchemaError, TokenweaveError};
