//! Flat `:root` custom-property block.

use tokenweave_core::{DesignSystemConfig, TokenMap};

/// Generate the flat CSS custom-property block for a configuration.
///
/// Output always starts with `:root {\n` and closes with `}\n`; categories
/// absent from the configuration contribute zero lines. `customCSS`, when
/// present, is appended verbatim after the closing brace.
pub fn css_variables(config: &DesignSystemConfig) -> String {
    let tokens = &config.tokens;
    let mut css = String::from(":root {\n");

    push_vars(&mut css, "color", &tokens.colors);
    push_vars(&mut css, "spacing", &tokens.spacing);
    if let Some(typography) = &tokens.typography {
        push_vars(&mut css, "font", &typography.font_families);
        push_vars(&mut css, "text", &typography.font_sizes);
    }
    if let Some(borders) = &tokens.borders {
        push_vars(&mut css, "radius", &borders.radius);
    }
    push_vars(&mut css, "shadow", &tokens.shadows);

    css.push_str("}\n");

    if let Some(custom) = &config.custom_css {
        css.push('\n');
        css.push_str(custom);
    }

    css
}

fn push_vars(css: &mut String, prefix: &str, map: &TokenMap) {
    for (key, value) in map {
        css.push_str("  --");
        css.push_str(prefix);
        css.push('-');
        css.push_str(key);
        css.push_str(": ");
        css.push_str(value);
        css.push_str(";\n");
    }
}
