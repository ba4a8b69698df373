//! Structural schema validation.
//!
//! The walk collects every offending field path before failing, so a caller
//! gets the whole list of problems in one pass instead of fixing them one at
//! a time. Checks are shape-only: presence and primitive types. Nothing here
//! inspects the meaning of a value string.

use serde_json::Value;

use crate::config::DesignSystemConfig;
use crate::error::{SchemaError, SchemaIssue};

/// Validate an arbitrary JSON value against the design-system schema.
///
/// On success the typed configuration is returned with defaults applied
/// (`version` falls back to `"1.0.0"`). On failure every offending path is
/// reported and nothing is constructed.
pub fn validate_config(value: &Value) -> Result<DesignSystemConfig, SchemaError> {
    let mut v = Validator::default();
    v.check_config(value);
    if !v.issues.is_empty() {
        return Err(SchemaError::new(v.issues));
    }
    // The walk above guarantees the typed deserialization succeeds; a failure
    // here means the walker and the derives drifted apart.
    serde_json::from_value(value.clone())
        .map_err(|e| SchemaError::new(vec![SchemaIssue::new("", e.to_string())]))
}

#[derive(Default)]
struct Validator {
    issues: Vec<SchemaIssue>,
}

impl Validator {
    fn issue(&mut self, path: &str, message: impl Into<String>) {
        self.issues.push(SchemaIssue::new(path, message));
    }

    fn check_config(&mut self, value: &Value) {
        let Some(obj) = value.as_object() else {
            self.issue("", "expected an object");
            return;
        };

        self.require_string(obj.get("name"), "name");
        self.optional_string(obj.get("version"), "version");
        self.optional_string(obj.get("description"), "description");
        self.optional_string(obj.get("customCSS"), "customCSS");

        match obj.get("tokens") {
            Some(tokens) => self.check_tokens(tokens, "tokens"),
            None => self.issue("tokens", "required field is missing"),
        }

        if let Some(components) = obj.get("components") {
            match components.as_object() {
                Some(map) => {
                    for (name, component) in map {
                        self.check_component(component, &join("components", name));
                    }
                }
                None => self.issue("components", "expected an object"),
            }
        }

        self.optional_string_map(obj.get("utilities"), "utilities");
    }

    fn check_tokens(&mut self, value: &Value, path: &str) {
        let Some(obj) = value.as_object() else {
            self.issue(path, "expected an object");
            return;
        };

        self.require_string_map(obj.get("colors"), &join(path, "colors"));
        self.require_string_map(obj.get("spacing"), &join(path, "spacing"));

        if let Some(typography) = obj.get("typography") {
            let typo_path = join(path, "typography");
            match typography.as_object() {
                Some(map) => {
                    for key in [
                        "fontFamilies",
                        "fontSizes",
                        "fontWeights",
                        "lineHeights",
                        "letterSpacing",
                    ] {
                        self.optional_string_map(map.get(key), &join(&typo_path, key));
                    }
                }
                None => self.issue(&typo_path, "expected an object"),
            }
        }

        if let Some(borders) = obj.get("borders") {
            let borders_path = join(path, "borders");
            match borders.as_object() {
                Some(map) => {
                    self.optional_string_map(map.get("radius"), &join(&borders_path, "radius"));
                    self.optional_string_map(map.get("width"), &join(&borders_path, "width"));
                }
                None => self.issue(&borders_path, "expected an object"),
            }
        }

        self.optional_string_map(obj.get("shadows"), &join(path, "shadows"));
        self.optional_string_map(obj.get("breakpoints"), &join(path, "breakpoints"));

        if let Some(animations) = obj.get("animations") {
            let anim_path = join(path, "animations");
            match animations.as_object() {
                Some(map) => {
                    for (name, spec) in map {
                        self.check_animation(spec, &join(&anim_path, name));
                    }
                }
                None => self.issue(&anim_path, "expected an object"),
            }
        }
    }

    fn check_animation(&mut self, value: &Value, path: &str) {
        let Some(obj) = value.as_object() else {
            self.issue(path, "expected an object");
            return;
        };
        // Keyframes are opaque; only presence is checked.
        if obj.get("keyframes").is_none() {
            self.issue(&join(path, "keyframes"), "required field is missing");
        }
        self.require_string(obj.get("duration"), &join(path, "duration"));
        self.optional_string(obj.get("timingFunction"), &join(path, "timingFunction"));
        self.optional_string(obj.get("fillMode"), &join(path, "fillMode"));
    }

    fn check_component(&mut self, value: &Value, path: &str) {
        let Some(obj) = value.as_object() else {
            self.issue(path, "expected an object");
            return;
        };
        self.require_string(obj.get("base"), &join(path, "base"));
        for key in ["variants", "sizes", "states"] {
            self.optional_string_map(obj.get(key), &join(path, key));
        }
    }

    fn require_string(&mut self, value: Option<&Value>, path: &str) {
        match value {
            Some(Value::String(_)) => {}
            Some(_) => self.issue(path, "expected a string"),
            None => self.issue(path, "required field is missing"),
        }
    }

    fn optional_string(&mut self, value: Option<&Value>, path: &str) {
        if let Some(value) = value {
            if !value.is_string() {
                self.issue(path, "expected a string");
            }
        }
    }

    fn require_string_map(&mut self, value: Option<&Value>, path: &str) {
        match value {
            Some(value) => self.string_map(value, path),
            None => self.issue(path, "required field is missing"),
        }
    }

    fn optional_string_map(&mut self, value: Option<&Value>, path: &str) {
        if let Some(value) = value {
            self.string_map(value, path);
        }
    }

    fn string_map(&mut self, value: &Value, path: &str) {
        match value.as_object() {
            Some(map) => {
                for (key, entry) in map {
                    if !entry.is_string() {
                        self.issue(&join(path, key), "expected a string");
                    }
                }
            }
            None => self.issue(path, "expected an object"),
        }
    }
}

fn join(path: &str, key: &str) -> String {
    if path.is_empty() {
        key.to_string()
    } else {
        format!("{path}.{key}")
    }
}
