//! Nested `theme.extend` object for a utility-first CSS framework.

use serde_json::{json, Map, Value};
use tokenweave_core::{DesignSystemConfig, TokenMap};

/// Switches for [`framework_config`]. Defaults include every section.
#[derive(Clone, Debug)]
pub struct GenerateOptions {
    pub include_dark_mode: bool,
    pub include_animations: bool,
    pub include_utilities: bool,
    /// Class prefix forwarded to the build tool (e.g. `tw-`).
    pub prefix: Option<String>,
    pub important: bool,
    /// Variant separator forwarded to the build tool (e.g. `_`).
    pub separator: Option<String>,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            include_dark_mode: true,
            include_animations: true,
            include_utilities: true,
            prefix: None,
            important: false,
            separator: None,
        }
    }
}

/// Compile a configuration into a `{ theme: { extend: … } }` object.
pub fn framework_theme(config: &DesignSystemConfig) -> Value {
    json!({ "theme": { "extend": extend_section(config, true) } })
}

/// Compile the full build-tool configuration object, ready to hand to the
/// framework's configuration loader.
pub fn framework_config(config: &DesignSystemConfig, options: &GenerateOptions) -> Value {
    tracing::debug!(system = %config.name, ?options, "generating framework config");

    let mut root = Map::new();
    if let Some(prefix) = &options.prefix {
        root.insert("prefix".into(), json!(prefix));
    }
    if options.important {
        root.insert("important".into(), json!(true));
    }
    if let Some(separator) = &options.separator {
        root.insert("separator".into(), json!(separator));
    }
    if options.include_dark_mode {
        root.insert("darkMode".into(), json!("class"));
    }

    let extend = extend_section(config, options.include_animations);
    root.insert("theme".into(), json!({ "extend": extend }));

    if options.include_utilities {
        if let Some(utilities) = &config.utilities {
            root.insert("utilities".into(), map_value(utilities));
        }
    }

    Value::Object(root)
}

fn extend_section(config: &DesignSystemConfig, include_animations: bool) -> Value {
    let tokens = &config.tokens;
    let mut extend = Map::new();

    if !tokens.colors.is_empty() {
        let colors: Map<String, Value> = tokens
            .colors
            .iter()
            .map(|(key, value)| (key.clone(), json!(format_color(key, value))))
            .collect();
        extend.insert("colors".into(), Value::Object(colors));
    }
    if !tokens.spacing.is_empty() {
        extend.insert("spacing".into(), map_value(&tokens.spacing));
    }

    if let Some(typography) = &tokens.typography {
        if !typography.font_families.is_empty() {
            extend.insert("fontFamily".into(), map_value(&typography.font_families));
        }
        if !typography.font_sizes.is_empty() {
            let sizes: Map<String, Value> = typography
                .font_sizes
                .iter()
                .map(|(key, value)| (key.clone(), font_size_value(value)))
                .collect();
            extend.insert("fontSize".into(), Value::Object(sizes));
        }
        if !typography.font_weights.is_empty() {
            extend.insert("fontWeight".into(), map_value(&typography.font_weights));
        }
        if !typography.line_heights.is_empty() {
            extend.insert("lineHeight".into(), map_value(&typography.line_heights));
        }
        if !typography.letter_spacing.is_empty() {
            extend.insert("letterSpacing".into(), map_value(&typography.letter_spacing));
        }
    }

    if let Some(borders) = &tokens.borders {
        if !borders.radius.is_empty() {
            extend.insert("borderRadius".into(), map_value(&borders.radius));
        }
        if !borders.width.is_empty() {
            extend.insert("borderWidth".into(), map_value(&borders.width));
        }
    }

    if !tokens.shadows.is_empty() {
        extend.insert("boxShadow".into(), map_value(&tokens.shadows));
        extend.insert("dropShadow".into(), map_value(&tokens.shadows));
    }
    if !tokens.breakpoints.is_empty() {
        extend.insert("screens".into(), map_value(&tokens.breakpoints));
    }

    if include_animations && !tokens.animations.is_empty() {
        let mut keyframes = Map::new();
        let mut animation = Map::new();
        for (name, spec) in &tokens.animations {
            keyframes.insert(name.clone(), spec.keyframes.clone());
            let timing = spec.timing_function.as_deref().unwrap_or("ease");
            let fill = spec.fill_mode.as_deref().unwrap_or("both");
            animation.insert(
                name.clone(),
                json!(format!("{name} {} {timing} {fill}", spec.duration)),
            );
        }
        extend.insert("keyframes".into(), Value::Object(keyframes));
        extend.insert("animation".into(), Value::Object(animation));
    }

    Value::Object(extend)
}

/// Color values in a recognized literal notation pass through unchanged;
/// anything else is treated as a bare custom-property reference.
fn format_color(key: &str, value: &str) -> String {
    if value.starts_with("oklch(")
        || value.starts_with("hsl(")
        || value.starts_with("rgb(")
        || value.starts_with('#')
    {
        value.to_string()
    } else {
        format!("var(--{key}, {value})")
    }
}

/// Pair a rem-valued font size with a bucketed line height; other units are
/// emitted bare. The buckets are fixed policy, pinned by tests.
fn font_size_value(value: &str) -> Value {
    match line_height_for(value) {
        Some(line_height) => json!([value, { "lineHeight": line_height }]),
        None => json!(value),
    }
}

fn line_height_for(font_size: &str) -> Option<&'static str> {
    let rem: f64 = font_size.strip_suffix("rem")?.trim().parse().ok()?;
    Some(if rem <= 0.875 {
        "1.5"
    } else if rem <= 1.125 {
        "1.4"
    } else if rem <= 1.5 {
        "1.3"
    } else {
        "1.2"
    })
}

fn map_value(map: &TokenMap) -> Value {
    Value::Object(
        map.iter()
            .map(|(key, value)| (key.clone(), json!(value)))
            .collect(),
    )
}
