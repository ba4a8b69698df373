//! Tokenweave core
//!
//! The data model for a design system and its validation entry points.
//!
//! A [`DesignSystemConfig`] bundles a named vocabulary of design tokens
//! (colors, spacing, typography, borders, shadows, breakpoints, animations)
//! with optional component style recipes and utility classes. Configurations
//! arrive as arbitrary JSON, are validated structurally against the schema in
//! [`validate`], and from then on flow through the generators as typed values.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use tokenweave_core::DesignSystemConfig;
//!
//! let config = DesignSystemConfig::from_json(raw_text)?;
//! assert_eq!(config.version, "1.0.0"); // defaulted when omitted
//! ```
//!
//! Validation is structural only: it checks presence and primitive types, not
//! whether a color string is a legal color. Absent token categories are not
//! errors; generators treat them as contributing nothing.

pub mod config;
pub mod error;
pub mod validate;

pub use config::{
    AnimationSpec, BorderTokens, ComponentStyle, DesignSystemConfig, DesignTokenSet, TokenMap,
    TypographyTokens,
};
pub use error::{SchemaError, SchemaIssue, TokenweaveError};
pub use validate::validate_config;
