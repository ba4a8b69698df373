//! Render-time component class resolution.

use tokenweave_core::DesignSystemConfig;

use crate::class_merge::merge_classes;

/// Compose the class string for a component at render time.
///
/// Starts from the component's `base` and appends the matching variant, size,
/// and state styles in that fixed order, then resolves conflicting utilities
/// via [`merge_classes`]. An undeclared component resolves to an empty string
/// rather than an error.
pub fn resolve_component_class(
    config: &DesignSystemConfig,
    name: &str,
    variant: Option<&str>,
    size: Option<&str>,
    state: Option<&str>,
) -> String {
    let Some(component) = config.component(name) else {
        return String::new();
    };

    let mut classes = component.base.clone();
    let lookups = [
        (variant, component.variants.as_ref()),
        (size, component.sizes.as_ref()),
        (state, component.states.as_ref()),
    ];
    for (key, map) in lookups {
        let (Some(key), Some(map)) = (key, map) else {
            continue;
        };
        if let Some(style) = map.get(key) {
            classes.push(' ');
            classes.push_str(style);
        }
    }

    merge_classes(&classes)
}
