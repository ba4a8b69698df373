//! Plain nested theme object for CSS-in-JS consumers.

use serde_json::{json, Map, Value};
use tokenweave_core::{DesignSystemConfig, TokenMap};

/// Compile a configuration into a generic nested theme object.
///
/// Values pass through verbatim; no custom-property rewriting happens here.
/// Absent categories are omitted.
pub fn css_in_js_theme(config: &DesignSystemConfig) -> Value {
    let tokens = &config.tokens;
    let mut theme = Map::new();

    insert_map(&mut theme, "colors", &tokens.colors);
    insert_map(&mut theme, "spacing", &tokens.spacing);

    if let Some(typography) = &tokens.typography {
        let mut section = Map::new();
        insert_map(&mut section, "fontFamilies", &typography.font_families);
        insert_map(&mut section, "fontSizes", &typography.font_sizes);
        insert_map(&mut section, "fontWeights", &typography.font_weights);
        insert_map(&mut section, "lineHeights", &typography.line_heights);
        insert_map(&mut section, "letterSpacing", &typography.letter_spacing);
        theme.insert("typography".into(), Value::Object(section));
    }

    if let Some(borders) = &tokens.borders {
        let mut section = Map::new();
        insert_map(&mut section, "radius", &borders.radius);
        insert_map(&mut section, "width", &borders.width);
        theme.insert("borders".into(), Value::Object(section));
    }

    insert_map(&mut theme, "shadows", &tokens.shadows);
    insert_map(&mut theme, "breakpoints", &tokens.breakpoints);

    if !tokens.animations.is_empty() {
        // AnimationSpec serializes to its transportable shape, which is
        // exactly what a runtime styling library expects here.
        let animations = serde_json::to_value(&tokens.animations).unwrap_or(Value::Null);
        theme.insert("animations".into(), animations);
    }

    Value::Object(theme)
}

fn insert_map(section: &mut Map<String, Value>, key: &str, map: &TokenMap) {
    if map.is_empty() {
        return;
    }
    let object: Map<String, Value> = map
        .iter()
        .map(|(name, value)| (name.clone(), json!(value)))
        .collect();
    section.insert(key.into(), Value::Object(object));
}
