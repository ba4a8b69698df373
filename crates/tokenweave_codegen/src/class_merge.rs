//! Utility-class merging.
//!
//! A lightweight take on tailwind-merge: when two classes target the same
//! utility group, the later one wins and the earlier one is dropped. Grouping
//! is heuristic — a class is split at its first hyphen into a stem and a
//! value, variant prefixes (`hover:` etc.) are part of the group key, and the
//! value is classified so that e.g. `text-sm` (a size) and `text-white` (a
//! color) land in different groups.

use rustc_hash::FxHashMap;

/// Merge a whitespace-separated class list, resolving conflicting utilities.
///
/// Surviving classes keep their relative order; for a conflicting group the
/// last occurrence survives at its own position.
pub fn merge_classes(input: &str) -> String {
    let classes: Vec<&str> = input.split_whitespace().collect();

    let mut last_for_group: FxHashMap<String, usize> = FxHashMap::default();
    for (index, class) in classes.iter().enumerate() {
        last_for_group.insert(conflict_group(class), index);
    }

    let mut merged = Vec::with_capacity(classes.len());
    for (index, class) in classes.iter().enumerate() {
        if last_for_group[&conflict_group(class)] == index {
            merged.push(*class);
        }
    }
    merged.join(" ")
}

/// Conflict-group key for one class: variant prefixes + stem + value kind.
fn conflict_group(class: &str) -> String {
    let (prefix, utility) = match class.rfind(':') {
        Some(pos) => (&class[..=pos], &class[pos + 1..]),
        None => ("", class),
    };
    match utility.split_once('-') {
        Some((stem, value)) => format!("{prefix}{stem}#{}", value_kind(value)),
        None => format!("{prefix}{utility}"),
    }
}

fn value_kind(value: &str) -> &'static str {
    const SCALE_WORDS: &[&str] = &[
        "xs", "sm", "md", "lg", "xl", "2xl", "3xl", "4xl", "5xl", "none", "full", "auto", "px",
    ];
    const WEIGHT_WORDS: &[&str] = &[
        "thin", "extralight", "light", "normal", "medium", "semibold", "bold", "extrabold",
        "black",
    ];

    if SCALE_WORDS.contains(&value)
        || value.chars().all(|c| c.is_ascii_digit() || c == '.' || c == '/')
    {
        "size"
    } else if WEIGHT_WORDS.contains(&value) {
        "weight"
    } else {
        "other"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn later_conflicting_class_wins() {
        assert_eq!(merge_classes("px-2 py-1 px-4"), "py-1 px-4");
    }

    #[test]
    fn color_and_size_do_not_conflict() {
        assert_eq!(merge_classes("text-sm text-white"), "text-sm text-white");
    }

    #[test]
    fn colors_conflict_with_colors() {
        assert_eq!(merge_classes("bg-primary bg-secondary"), "bg-secondary");
    }

    #[test]
    fn variant_prefix_scopes_the_group() {
        assert_eq!(
            merge_classes("bg-primary hover:bg-secondary"),
            "bg-primary hover:bg-secondary"
        );
    }

    #[test]
    fn duplicate_classes_collapse() {
        assert_eq!(merge_classes("rounded-md rounded-md"), "rounded-md");
    }

    #[test]
    fn font_weight_and_family_are_separate_groups() {
        assert_eq!(merge_classes("font-sans font-medium"), "font-sans font-medium");
    }
}
