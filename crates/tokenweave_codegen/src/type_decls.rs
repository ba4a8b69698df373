//! TypeScript declarations enumerating the token vocabulary.

use tokenweave_core::{DesignSystemConfig, TokenMap};

/// Generate type declaration text for a configuration.
///
/// One string-literal union per populated category, then an aggregate
/// interface whose fields reference only the unions that were emitted. A
/// category with no entries contributes neither a union nor a field.
pub fn type_declarations(config: &DesignSystemConfig) -> String {
    let tokens = &config.tokens;
    let mut out = String::from("// Generated by tokenweave. Do not edit.\n\n");
    let mut fields: Vec<(&str, &str)> = Vec::new();

    union(&mut out, &mut fields, "colors", "ColorKey", &tokens.colors);
    union(&mut out, &mut fields, "spacing", "SpacingKey", &tokens.spacing);
    if let Some(typography) = &tokens.typography {
        union(
            &mut out,
            &mut fields,
            "fontFamilies",
            "FontFamilyKey",
            &typography.font_families,
        );
        union(
            &mut out,
            &mut fields,
            "fontSizes",
            "FontSizeKey",
            &typography.font_sizes,
        );
    }

    out.push_str("export interface DesignTokens {\n");
    for (field, type_name) in &fields {
        out.push_str(&format!("  {field}: {type_name};\n"));
    }
    out.push_str("}\n");
    out
}

fn union(
    out: &mut String,
    fields: &mut Vec<(&'static str, &'static str)>,
    field: &'static str,
    type_name: &'static str,
    map: &TokenMap,
) {
    if map.is_empty() {
        return;
    }
    let literals: Vec<String> = map.keys().map(|key| format!("'{key}'")).collect();
    out.push_str(&format!(
        "export type {type_name} = {};\n\n",
        literals.join(" | ")
    ));
    fields.push((field, type_name));
}
