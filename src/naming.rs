//! Centralized naming for specification kinds and attribute keys
//!
//! The downstream plot engine identifies features by these exact strings,
//! so every builder goes through the constants here rather than spelling
//! them inline.

/// Feature kind of a plot title
pub const KIND_TITLE: &str = "ggtitle";

/// Feature kind of a scale
pub const KIND_SCALE: &str = "scale";

/// `labs` key that produces a title instead of a scale label
pub const TITLE_KEY: &str = "title";

/// Title attribute holding the display text
pub const TEXT_PROP: &str = "text";

/// Scale attribute naming the aesthetic the scale applies to
pub const AESTHETIC_PROP: &str = "aesthetic";

/// Reserved key holding a feature's kind; never stored as an attribute
pub const KIND_FIELD: &str = "kind";

/// Reserved key holding a feature's name; never stored as an attribute
pub const NAME_FIELD: &str = "name";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kinds_are_distinct() {
        assert_ne!(KIND_TITLE, KIND_SCALE);
    }

    #[test]
    fn test_title_key_differs_from_kind() {
        // labs() keys on "title" while the emitted feature is "ggtitle"
        assert_ne!(TITLE_KEY, KIND_TITLE);
    }
}
