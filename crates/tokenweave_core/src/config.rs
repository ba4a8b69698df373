//! Typed model of a design system configuration.
//!
//! Token categories are insertion-ordered string maps so that every generated
//! artifact lists entries in declaration order. Optional composites stay
//! `Option` (rather than defaulting to an empty map) so that a configuration
//! survives an export/import round trip without gaining fields it never had.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::TokenweaveError;

/// Insertion-ordered name -> value mapping used by every token category.
pub type TokenMap = IndexMap<String, String>;

/// The token vocabulary for one design system.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DesignTokenSet {
    /// Semantic name -> opaque color string.
    pub colors: TokenMap,
    /// Scale name -> length string.
    pub spacing: TokenMap,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub typography: Option<TypographyTokens>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub borders: Option<BorderTokens>,
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub shadows: TokenMap,
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub breakpoints: TokenMap,
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub animations: IndexMap<String, AnimationSpec>,
}

/// Typography sub-maps. Each defaults to empty; an empty map contributes
/// nothing to any artifact.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypographyTokens {
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub font_families: TokenMap,
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub font_sizes: TokenMap,
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub font_weights: TokenMap,
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub line_heights: TokenMap,
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub letter_spacing: TokenMap,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BorderTokens {
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub radius: TokenMap,
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub width: TokenMap,
}

/// One named animation: opaque keyframes plus timing parameters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnimationSpec {
    /// Keyframe table, passed through to artifacts unchanged.
    pub keyframes: Value,
    pub duration: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timing_function: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fill_mode: Option<String>,
}

/// Style recipe for one named UI component. `base` is mandatory; the
/// variant/size/state maps are independently optional.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentStyle {
    pub base: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variants: Option<TokenMap>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sizes: Option<TokenMap>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub states: Option<TokenMap>,
}

/// One complete, named design system.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DesignSystemConfig {
    pub name: String,
    #[serde(default = "default_version")]
    pub version: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub tokens: DesignTokenSet,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub components: Option<IndexMap<String, ComponentStyle>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub utilities: Option<TokenMap>,
    /// Raw CSS appended verbatim after the generated variable block.
    #[serde(default, rename = "customCSS", skip_serializing_if = "Option::is_none")]
    pub custom_css: Option<String>,
}

fn default_version() -> String {
    "1.0.0".to_string()
}

impl DesignSystemConfig {
    /// Parse and validate a configuration from its transportable JSON form.
    ///
    /// Malformed JSON surfaces as [`TokenweaveError::Parse`]; well-formed JSON
    /// of the wrong shape surfaces as [`TokenweaveError::Schema`].
    pub fn from_json(text: &str) -> Result<Self, TokenweaveError> {
        let value: Value = serde_json::from_str(text)?;
        let config = crate::validate::validate_config(&value)?;
        Ok(config)
    }

    /// Serialize to the transportable JSON form.
    pub fn to_json(&self) -> Result<String, TokenweaveError> {
        let text = serde_json::to_string_pretty(self)?;
        Ok(text)
    }

    /// Style recipe for a named component, if declared.
    pub fn component(&self, name: &str) -> Option<&ComponentStyle> {
        self.components.as_ref()?.get(name)
    }
}
