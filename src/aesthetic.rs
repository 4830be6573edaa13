//! Aesthetic names recognised by the downstream plot engine
//!
//! Label builders accept any aesthetic key; this catalogue only backs the
//! advisory checks in [`crate::validate`].

/// Canonical aesthetic names
///
/// The lowercased names of the plot engine's `Aes` enum, which is how the
/// engine spells aesthetics in a spec. Newer engine releases add more; an
/// unlisted name only produces a validation warning.
pub const AESTHETICS: &[&str] = &[
    // Position
    "x",
    "y",
    "z",
    "xmin",
    "xmax",
    "ymin",
    "ymax",
    "xend",
    "yend",
    "xintercept",
    "yintercept",
    "intercept",
    "slope",
    "lower",
    "middle",
    "upper",
    "sample",
    // Color
    "color",
    "fill",
    "alpha",
    // Shape and size
    "shape",
    "linetype",
    "size",
    "width",
    "height",
    "weight",
    "binwidth",
    // Text
    "label",
    "family",
    "fontface",
    "hjust",
    "vjust",
    "angle",
    // Geo and animation
    "map_id",
    "frame",
    "speed",
    "flow",
];

/// Alternate spellings and their canonical aesthetic
const ALIASES: &[(&str, &str)] = &[("colour", "color"), ("col", "color")];

/// Resolve an alias to its canonical aesthetic name
pub fn canonical_name(name: &str) -> &str {
    for (alias, canonical) in ALIASES {
        if *alias == name {
            return *canonical;
        }
    }
    name
}

/// Whether the name (or an alias of it) is a known aesthetic
pub fn is_known_aesthetic(name: &str) -> bool {
    AESTHETICS.contains(&canonical_name(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positional_aesthetics_known() {
        assert!(is_known_aesthetic("x"));
        assert!(is_known_aesthetic("y"));
        assert!(is_known_aesthetic("yend"));
    }

    #[test]
    fn test_aliases() {
        assert_eq!(canonical_name("colour"), "color");
        assert_eq!(canonical_name("col"), "color");
        assert_eq!(canonical_name("fill"), "fill");
        assert!(is_known_aesthetic("colour"));
    }

    #[test]
    fn test_names_outside_engine_are_unknown() {
        for name in ["paint_a", "violinwidth", "explode", "linewidth", "stroke"] {
            assert!(!is_known_aesthetic(name), "{} should not be known", name);
        }
    }

    #[test]
    fn test_unknown_aesthetic() {
        assert!(!is_known_aesthetic("title"));
        assert!(!is_known_aesthetic("X"));
        assert!(!is_known_aesthetic(""));
    }

    #[test]
    fn test_catalogue_has_no_duplicates() {
        let mut names = AESTHETICS.to_vec();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), AESTHETICS.len());
    }
}
