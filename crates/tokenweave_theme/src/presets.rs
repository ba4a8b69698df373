//! Built-in design system presets.
//!
//! Three presets ship with the compiler: a shadcn-inspired neutral default,
//! a Material-flavored system, and a deliberately small minimal system.
//! Presets are immutable; callers extend the catalog by registering custom
//! systems instead.

use std::fmt::{Display, Formatter};

use indexmap::IndexMap;
use serde_json::json;
use tokenweave_core::{
    AnimationSpec, BorderTokens, ComponentStyle, DesignSystemConfig, DesignTokenSet, TokenMap,
    TypographyTokens,
};

/// Built-in design system catalog.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SystemPreset {
    /// Neutral default system.
    Default,
    /// Material-flavored system.
    Material,
    /// Small monochrome system with a reduced vocabulary.
    Minimal,
}

impl SystemPreset {
    /// Stable preset id for config/serialization.
    pub fn id(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Material => "material",
            Self::Minimal => "minimal",
        }
    }

    /// User-facing display name.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Default => "Default",
            Self::Material => "Material",
            Self::Minimal => "Minimal",
        }
    }

    /// Full preset list.
    pub fn all() -> &'static [SystemPreset] {
        const PRESETS: [SystemPreset; 3] = [
            SystemPreset::Default,
            SystemPreset::Material,
            SystemPreset::Minimal,
        ];
        &PRESETS
    }

    /// Build the complete configuration for this preset.
    pub fn config(self) -> DesignSystemConfig {
        match self {
            Self::Default => default_system(),
            Self::Material => material_system(),
            Self::Minimal => minimal_system(),
        }
    }
}

impl Display for SystemPreset {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

fn map(entries: &[(&str, &str)]) -> TokenMap {
    entries
        .iter()
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .collect()
}

fn default_system() -> DesignSystemConfig {
    let mut animations = IndexMap::new();
    animations.insert(
        "fade-in".to_string(),
        AnimationSpec {
            keyframes: json!({
                "from": { "opacity": "0" },
                "to": { "opacity": "1" }
            }),
            duration: "200ms".to_string(),
            timing_function: Some("ease-out".to_string()),
            fill_mode: None,
        },
    );
    animations.insert(
        "slide-up".to_string(),
        AnimationSpec {
            keyframes: json!({
                "from": { "transform": "translateY(8px)", "opacity": "0" },
                "to": { "transform": "translateY(0)", "opacity": "1" }
            }),
            duration: "300ms".to_string(),
            timing_function: Some("cubic-bezier(0.16, 1, 0.3, 1)".to_string()),
            fill_mode: Some("forwards".to_string()),
        },
    );

    let mut components = IndexMap::new();
    components.insert(
        "button".to_string(),
        ComponentStyle {
            base: "inline-flex items-center justify-center rounded-md text-sm font-medium"
                .to_string(),
            variants: Some(map(&[
                ("primary", "bg-primary text-primary-foreground"),
                ("secondary", "bg-secondary text-secondary-foreground"),
                ("ghost", "bg-transparent"),
                ("destructive", "bg-destructive text-destructive-foreground"),
            ])),
            sizes: Some(map(&[
                ("sm", "h-8 px-3"),
                ("md", "h-9 px-4"),
                ("lg", "h-10 px-6"),
            ])),
            states: Some(map(&[
                ("disabled", "opacity-50 pointer-events-none"),
                ("loading", "opacity-80 cursor-wait"),
            ])),
        },
    );
    components.insert(
        "card".to_string(),
        ComponentStyle {
            base: "rounded-lg border bg-card text-card-foreground shadow-sm".to_string(),
            variants: Some(map(&[("elevated", "shadow-md border-transparent")])),
            sizes: None,
            states: None,
        },
    );

    DesignSystemConfig {
        name: "default".to_string(),
        version: "1.0.0".to_string(),
        description: Some("Neutral default design system".to_string()),
        tokens: DesignTokenSet {
            colors: map(&[
                ("primary", "#171717"),
                ("primary-foreground", "#fafafa"),
                ("secondary", "#f5f5f5"),
                ("secondary-foreground", "#171717"),
                ("background", "#ffffff"),
                ("foreground", "#0a0a0a"),
                ("muted", "#f5f5f5"),
                ("muted-foreground", "#737373"),
                ("accent", "#f5f5f5"),
                ("destructive", "#ef4444"),
                ("destructive-foreground", "#fafafa"),
                ("border", "#e5e5e5"),
                ("ring", "#0a0a0a"),
            ]),
            spacing: map(&[
                ("xs", "0.25rem"),
                ("sm", "0.5rem"),
                ("md", "1rem"),
                ("lg", "1.5rem"),
                ("xl", "2rem"),
                ("2xl", "3rem"),
            ]),
            typography: Some(TypographyTokens {
                font_families: map(&[
                    ("sans", "Inter, ui-sans-serif, system-ui, sans-serif"),
                    ("mono", "'JetBrains Mono', ui-monospace, monospace"),
                ]),
                font_sizes: map(&[
                    ("xs", "0.75rem"),
                    ("sm", "0.875rem"),
                    ("base", "1rem"),
                    ("lg", "1.125rem"),
                    ("xl", "1.25rem"),
                    ("2xl", "1.5rem"),
                    ("3xl", "1.875rem"),
                ]),
                font_weights: map(&[
                    ("normal", "400"),
                    ("medium", "500"),
                    ("semibold", "600"),
                    ("bold", "700"),
                ]),
                line_heights: map(&[("tight", "1.25"), ("normal", "1.5"), ("relaxed", "1.75")]),
                letter_spacing: map(&[("tight", "-0.025em"), ("wide", "0.025em")]),
            }),
            borders: Some(BorderTokens {
                radius: map(&[
                    ("sm", "0.375rem"),
                    ("md", "0.5rem"),
                    ("lg", "0.75rem"),
                    ("full", "9999px"),
                ]),
                width: map(&[("thin", "1px"), ("thick", "2px")]),
            }),
            shadows: map(&[
                ("sm", "0 1px 2px 0 rgb(0 0 0 / 0.05)"),
                ("md", "0 4px 6px -1px rgb(0 0 0 / 0.1)"),
                ("lg", "0 10px 15px -3px rgb(0 0 0 / 0.1)"),
            ]),
            breakpoints: map(&[
                ("sm", "640px"),
                ("md", "768px"),
                ("lg", "1024px"),
                ("xl", "1280px"),
            ]),
            animations,
        },
        components: Some(components),
        utilities: Some(map(&[
            ("text-balance", "text-wrap: balance"),
            ("scrollbar-none", "scrollbar-width: none"),
        ])),
        custom_css: None,
    }
}

fn material_system() -> DesignSystemConfig {
    let mut components = IndexMap::new();
    components.insert(
        "button".to_string(),
        ComponentStyle {
            base: "inline-flex items-center justify-center rounded-full text-sm font-medium"
                .to_string(),
            variants: Some(map(&[
                ("filled", "bg-primary text-on-primary"),
                ("tonal", "bg-secondary-container text-on-secondary-container"),
                ("outlined", "bg-transparent border border-outline"),
            ])),
            sizes: Some(map(&[("sm", "h-8 px-4"), ("md", "h-10 px-6")])),
            states: Some(map(&[("disabled", "opacity-40 pointer-events-none")])),
        },
    );
    components.insert(
        "card".to_string(),
        ComponentStyle {
            base: "rounded-xl bg-surface text-on-surface shadow-elevation-1".to_string(),
            variants: None,
            sizes: None,
            states: None,
        },
    );

    DesignSystemConfig {
        name: "material".to_string(),
        version: "1.0.0".to_string(),
        description: Some("Material-flavored design system".to_string()),
        tokens: DesignTokenSet {
            colors: map(&[
                ("primary", "#6750a4"),
                ("on-primary", "#ffffff"),
                ("primary-container", "#eaddff"),
                ("secondary", "#625b71"),
                ("secondary-container", "#e8def8"),
                ("on-secondary-container", "#1d192b"),
                ("surface", "#fef7ff"),
                ("on-surface", "#1d1b20"),
                ("outline", "#79747e"),
                ("error", "#b3261e"),
            ]),
            spacing: map(&[
                ("xs", "0.25rem"),
                ("sm", "0.5rem"),
                ("md", "1rem"),
                ("lg", "1.5rem"),
                ("xl", "2.5rem"),
            ]),
            typography: Some(TypographyTokens {
                font_families: map(&[("sans", "Roboto, system-ui, sans-serif")]),
                font_sizes: map(&[
                    ("label", "0.875rem"),
                    ("body", "1rem"),
                    ("title", "1.375rem"),
                    ("headline", "2rem"),
                ]),
                font_weights: map(&[("regular", "400"), ("medium", "500")]),
                line_heights: IndexMap::new(),
                letter_spacing: map(&[("label", "0.1px")]),
            }),
            borders: Some(BorderTokens {
                radius: map(&[
                    ("sm", "0.5rem"),
                    ("md", "0.75rem"),
                    ("lg", "1rem"),
                    ("full", "9999px"),
                ]),
                width: map(&[("thin", "1px")]),
            }),
            shadows: map(&[
                ("elevation-1", "0 1px 3px 1px rgb(0 0 0 / 0.15)"),
                ("elevation-2", "0 2px 6px 2px rgb(0 0 0 / 0.15)"),
            ]),
            breakpoints: map(&[("compact", "600px"), ("medium", "840px"), ("expanded", "1200px")]),
            animations: IndexMap::new(),
        },
        components: Some(components),
        utilities: None,
        custom_css: None,
    }
}

fn minimal_system() -> DesignSystemConfig {
    let mut components = IndexMap::new();
    components.insert(
        "button".to_string(),
        ComponentStyle {
            base: "inline-block border border-black px-4 py-2".to_string(),
            variants: None,
            sizes: None,
            states: Some(map(&[("disabled", "opacity-50")])),
        },
    );

    DesignSystemConfig {
        name: "minimal".to_string(),
        version: "1.0.0".to_string(),
        description: Some("Monochrome system with a reduced vocabulary".to_string()),
        tokens: DesignTokenSet {
            colors: map(&[
                ("black", "#000000"),
                ("white", "#ffffff"),
                ("gray", "#6b7280"),
            ]),
            spacing: map(&[("sm", "0.5rem"), ("md", "1rem"), ("lg", "2rem")]),
            typography: None,
            borders: None,
            shadows: IndexMap::new(),
            breakpoints: map(&[("md", "768px")]),
            animations: IndexMap::new(),
        },
        components: Some(components),
        utilities: None,
        custom_css: None,
    }
}
