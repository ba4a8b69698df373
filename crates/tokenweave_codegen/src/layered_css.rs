//! Layered CSS document: base variables, utility classes, component classes.

use tokenweave_core::{DesignSystemConfig, TokenMap};

/// Generate the `@layer` document for a configuration.
///
/// The base layer carries the same variable set as
/// [`css_variables`](crate::css_variables), wrapped in `@layer base`. The
/// utilities layer emits one `@apply` rule per utility entry, the components
/// layer one rule per component `base` plus `.component--suffix` rules for
/// variants, sizes, and states. The three suffix maps share one namespace per
/// component; a later rule with the same selector overrides an earlier one.
///
/// A declared-but-empty `utilities`/`components` map still emits its (empty)
/// layer block; an absent map omits the directive entirely.
pub fn layered_css(config: &DesignSystemConfig) -> String {
    let mut css = String::new();

    base_layer(&mut css, config);

    if let Some(utilities) = &config.utilities {
        css.push('\n');
        css.push_str("@layer utilities {\n");
        for (class, style) in utilities {
            apply_rule(&mut css, class, style);
        }
        css.push_str("}\n");
    }

    if let Some(components) = &config.components {
        css.push('\n');
        css.push_str("@layer components {\n");
        for (name, component) in components {
            apply_rule(&mut css, name, &component.base);
            suffix_rules(&mut css, name, component.variants.as_ref());
            suffix_rules(&mut css, name, component.sizes.as_ref());
            suffix_rules(&mut css, name, component.states.as_ref());
        }
        css.push_str("}\n");
    }

    css
}

fn base_layer(css: &mut String, config: &DesignSystemConfig) {
    let tokens = &config.tokens;
    css.push_str("@layer base {\n  :root {\n");

    push_vars(css, "color", &tokens.colors);
    push_vars(css, "spacing", &tokens.spacing);
    if let Some(typography) = &tokens.typography {
        push_vars(css, "font", &typography.font_families);
        push_vars(css, "text", &typography.font_sizes);
    }
    if let Some(borders) = &tokens.borders {
        push_vars(css, "radius", &borders.radius);
    }
    push_vars(css, "shadow", &tokens.shadows);

    css.push_str("  }\n}\n");
}

fn push_vars(css: &mut String, prefix: &str, map: &TokenMap) {
    for (key, value) in map {
        css.push_str(&format!("    --{prefix}-{key}: {value};\n"));
    }
}

fn apply_rule(css: &mut String, class: &str, style: &str) {
    css.push_str(&format!("  .{class} {{\n    @apply {style};\n  }}\n"));
}

fn suffix_rules(css: &mut String, component: &str, map: Option<&TokenMap>) {
    let Some(map) = map else { return };
    for (suffix, style) in map {
        apply_rule(css, &format!("{component}--{suffix}"), style);
    }
}
