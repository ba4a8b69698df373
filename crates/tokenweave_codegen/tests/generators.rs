use pretty_assertions::assert_eq;
use serde_json::json;
use tokenweave_codegen::{
    css_in_js_theme, css_variables, framework_config, framework_theme, layered_css,
    resolve_component_class, type_declarations, GenerateOptions,
};
use tokenweave_core::{validate_config, DesignSystemConfig};

fn config(value: serde_json::Value) -> DesignSystemConfig {
    validate_config(&value).unwrap()
}

fn fixture() -> DesignSystemConfig {
    config(json!({
        "name": "fixture",
        "tokens": {
            "colors": { "brand": "#112233", "surface": "surfaceLight" },
            "spacing": { "sm": "0.5rem", "md": "1rem" },
            "typography": {
                "fontFamilies": { "sans": "Inter, sans-serif" },
                "fontSizes": { "sm": "0.875rem", "base": "1rem", "2xl": "1.5rem", "4xl": "2rem" }
            },
            "borders": { "radius": { "md": "0.5rem" }, "width": { "thin": "1px" } },
            "shadows": { "md": "0 4px 6px rgb(0 0 0 / 0.1)" },
            "breakpoints": { "md": "768px" },
            "animations": {
                "fade": {
                    "keyframes": { "from": { "opacity": "0" }, "to": { "opacity": "1" } },
                    "duration": "200ms"
                },
                "slide": {
                    "keyframes": { "from": { "left": "-100%" } },
                    "duration": "300ms",
                    "timingFunction": "ease-in-out",
                    "fillMode": "forwards"
                }
            }
        },
        "components": {
            "button": {
                "base": "inline-flex items-center rounded-md bg-primary",
                "variants": { "ghost": "bg-transparent" },
                "sizes": { "sm": "px-2 py-1" },
                "states": { "disabled": "opacity-50 bg-muted" }
            }
        },
        "utilities": { "text-balance": "text-wrap: balance" }
    }))
}

// ---- CSS variables ----

#[test]
fn css_variables_envelope_invariant() {
    let css = css_variables(&fixture());
    assert!(css.starts_with(":root {\n"), "css: {css}");
    assert!(css.ends_with("}\n"), "css: {css}");
}

#[test]
fn css_variables_emits_every_populated_category() {
    let css = css_variables(&fixture());
    assert!(css.contains("  --color-brand: #112233;\n"));
    assert!(css.contains("  --spacing-md: 1rem;\n"));
    assert!(css.contains("  --font-sans: Inter, sans-serif;\n"));
    assert!(css.contains("  --text-base: 1rem;\n"));
    assert!(css.contains("  --radius-md: 0.5rem;\n"));
    assert!(css.contains("  --shadow-md: 0 4px 6px rgb(0 0 0 / 0.1);\n"));
}

#[test]
fn absent_typography_contributes_no_lines() {
    let css = css_variables(&config(json!({
        "name": "bare",
        "tokens": {
            "colors": { "brand": "#112233" },
            "spacing": { "md": "1rem" }
        }
    })));
    assert!(!css.contains("--font-"));
    assert!(!css.contains("--text-"));
}

#[test]
fn custom_css_is_appended_verbatim_after_the_block() {
    let cfg = config(json!({
        "name": "custom",
        "tokens": { "colors": {}, "spacing": {} },
        "customCSS": ".legacy { color: red; }"
    }));
    assert_eq!(css_variables(&cfg), ":root {\n}\n\n.legacy { color: red; }");
}

// ---- Framework theme ----

#[test]
fn literal_colors_pass_through_and_bare_names_are_wrapped() {
    let theme = framework_theme(&config(json!({
        "name": "colors",
        "tokens": {
            "colors": { "brand": "#112233", "blue": "brandBlue" },
            "spacing": {}
        }
    })));
    let colors = &theme["theme"]["extend"]["colors"];
    assert_eq!(colors["brand"], "#112233");
    assert_eq!(colors["blue"], "var(--blue, brandBlue)");
}

#[test]
fn line_height_buckets_are_pinned_at_their_boundaries() {
    let theme = framework_theme(&config(json!({
        "name": "sizes",
        "tokens": {
            "colors": {},
            "spacing": {},
            "typography": {
                "fontSizes": {
                    "sm": "0.875rem",
                    "base": "1.0rem",
                    "2xl": "1.5rem",
                    "4xl": "2rem"
                }
            }
        }
    })));
    let sizes = &theme["theme"]["extend"]["fontSize"];
    assert_eq!(sizes["sm"], json!(["0.875rem", { "lineHeight": "1.5" }]));
    assert_eq!(sizes["base"], json!(["1.0rem", { "lineHeight": "1.4" }]));
    assert_eq!(sizes["2xl"], json!(["1.5rem", { "lineHeight": "1.3" }]));
    assert_eq!(sizes["4xl"], json!(["2rem", { "lineHeight": "1.2" }]));
}

#[test]
fn non_rem_font_sizes_are_emitted_bare() {
    let theme = framework_theme(&config(json!({
        "name": "px-sizes",
        "tokens": {
            "colors": {},
            "spacing": {},
            "typography": { "fontSizes": { "base": "16px" } }
        }
    })));
    assert_eq!(theme["theme"]["extend"]["fontSize"]["base"], "16px");
}

#[test]
fn animation_shorthand_defaults_to_ease_and_both() {
    let theme = framework_theme(&fixture());
    let extend = &theme["theme"]["extend"];
    assert_eq!(extend["animation"]["fade"], "fade 200ms ease both");
    assert_eq!(extend["animation"]["slide"], "slide 300ms ease-in-out forwards");
    assert_eq!(extend["keyframes"]["fade"]["from"]["opacity"], "0");
}

#[test]
fn shadows_feed_both_box_and_drop_shadow_and_breakpoints_become_screens() {
    let theme = framework_theme(&fixture());
    let extend = &theme["theme"]["extend"];
    assert_eq!(extend["boxShadow"]["md"], "0 4px 6px rgb(0 0 0 / 0.1)");
    assert_eq!(extend["dropShadow"]["md"], "0 4px 6px rgb(0 0 0 / 0.1)");
    assert_eq!(extend["screens"]["md"], "768px");
}

#[test]
fn absent_categories_are_omitted_from_the_extend_object() {
    let theme = framework_theme(&config(json!({
        "name": "bare",
        "tokens": { "colors": { "brand": "#112233" }, "spacing": {} }
    })));
    let extend = theme["theme"]["extend"].as_object().unwrap();
    assert_eq!(extend.keys().collect::<Vec<_>>(), vec!["colors"]);
}

// ---- Factory ----

#[test]
fn factory_defaults_include_every_section() {
    let cfg = framework_config(&fixture(), &GenerateOptions::default());
    assert_eq!(cfg["darkMode"], "class");
    assert!(cfg["theme"]["extend"]["animation"].is_object());
    assert_eq!(cfg["utilities"]["text-balance"], "text-wrap: balance");
    assert!(cfg.get("prefix").is_none());
    assert!(cfg.get("important").is_none());
}

#[test]
fn factory_switches_exclude_sections_and_rename_the_namespace() {
    let options = GenerateOptions {
        include_dark_mode: false,
        include_animations: false,
        include_utilities: false,
        prefix: Some("tw-".into()),
        important: true,
        separator: Some("_".into()),
    };
    let cfg = framework_config(&fixture(), &options);
    assert_eq!(cfg["prefix"], "tw-");
    assert_eq!(cfg["important"], true);
    assert_eq!(cfg["separator"], "_");
    assert!(cfg.get("darkMode").is_none());
    assert!(cfg.get("utilities").is_none());
    assert!(cfg["theme"]["extend"].get("animation").is_none());
    assert!(cfg["theme"]["extend"].get("keyframes").is_none());
}

// ---- Layered CSS ----

#[test]
fn layered_css_wraps_variables_in_the_base_layer() {
    let css = layered_css(&fixture());
    assert!(css.starts_with("@layer base {\n  :root {\n"));
    assert!(css.contains("    --color-brand: #112233;\n"));
}

#[test]
fn utilities_layer_applies_the_style_string() {
    let css = layered_css(&fixture());
    assert!(css.contains("@layer utilities {\n  .text-balance {\n    @apply text-wrap: balance;\n  }\n}\n"));
}

#[test]
fn component_suffixes_share_one_namespace() {
    let css = layered_css(&fixture());
    assert!(css.contains("  .button {\n    @apply inline-flex items-center rounded-md bg-primary;\n  }\n"));
    assert!(css.contains("  .button--ghost {"));
    assert!(css.contains("  .button--sm {"));
    assert!(css.contains("  .button--disabled {"));
}

#[test]
fn declared_but_empty_utilities_emit_an_empty_layer_block() {
    let css = layered_css(&config(json!({
        "name": "empty-utils",
        "tokens": { "colors": {}, "spacing": {} },
        "utilities": {}
    })));
    assert!(css.contains("@layer utilities {\n}\n"));
    assert!(!css.contains("@layer components"));
}

// ---- Type declarations ----

#[test]
fn type_declarations_enumerate_populated_categories() {
    let decls = type_declarations(&fixture());
    assert!(decls.contains("export type ColorKey = 'brand' | 'surface';\n"));
    assert!(decls.contains("export type SpacingKey = 'sm' | 'md';\n"));
    assert!(decls.contains("export type FontFamilyKey = 'sans';\n"));
    assert!(decls.contains("export type FontSizeKey = 'sm' | 'base' | '2xl' | '4xl';\n"));
    assert!(decls.contains("  colors: ColorKey;\n"));
    assert!(decls.contains("  fontSizes: FontSizeKey;\n"));
}

#[test]
fn empty_categories_contribute_neither_union_nor_field() {
    let decls = type_declarations(&config(json!({
        "name": "spacing-only",
        "tokens": { "colors": {}, "spacing": { "md": "1rem" } }
    })));
    assert!(!decls.contains("ColorKey"));
    assert!(!decls.contains("FontFamilyKey"));
    assert!(decls.contains("export type SpacingKey = 'md';\n"));
    assert_eq!(
        decls.matches("SpacingKey").count(),
        2,
        "union declaration plus one interface field"
    );
}

// ---- CSS-in-JS theme ----

#[test]
fn css_in_js_theme_nests_categories_verbatim() {
    let theme = css_in_js_theme(&fixture());
    assert_eq!(theme["colors"]["surface"], "surfaceLight");
    assert_eq!(theme["typography"]["fontSizes"]["base"], "1rem");
    assert_eq!(theme["borders"]["radius"]["md"], "0.5rem");
    assert_eq!(theme["breakpoints"]["md"], "768px");
    assert_eq!(theme["animations"]["fade"]["duration"], "200ms");
}

// ---- Component resolver ----

#[test]
fn unknown_component_resolves_to_empty_string() {
    assert_eq!(
        resolve_component_class(&fixture(), "doesNotExist", None, None, None),
        ""
    );
}

#[test]
fn resolver_appends_variant_size_state_in_order() {
    let class = resolve_component_class(&fixture(), "button", Some("ghost"), Some("sm"), None);
    assert_eq!(class, "inline-flex items-center rounded-md bg-transparent px-2 py-1");
}

#[test]
fn resolver_lets_later_styles_override_conflicting_utilities() {
    let class = resolve_component_class(&fixture(), "button", None, None, Some("disabled"));
    assert_eq!(class, "inline-flex items-center rounded-md opacity-50 bg-muted");
}

#[test]
fn unmatched_selector_keys_are_ignored() {
    let class = resolve_component_class(&fixture(), "button", Some("nope"), None, None);
    assert_eq!(class, "inline-flex items-center rounded-md bg-primary");
}
