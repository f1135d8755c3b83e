use std::fmt::Debug;
use std::hash::Hash;

/// Label token used on both sides of an evaluation.
///
/// Tokens only need equality, hashing and a total order (for sorted class
/// derivation). The two associated constructors name the placeholder labels
/// used when nothing better is supplied by the caller.
pub trait Label: Clone + Eq + Hash + Ord + Debug {
    /// Placeholder substituted for missing (`None`) labels.
    fn missing() -> Self;

    /// Catch-all label for values outside a requested class subset.
    fn other() -> Self;
}

pub const DEFAULT_MISSING: &str = "(none)";
pub const DEFAULT_OTHER: &str = "(other)";

impl Label for String {
    fn missing() -> Self {
        DEFAULT_MISSING.to_string()
    }

    fn other() -> Self {
        DEFAULT_OTHER.to_string()
    }
}

impl Label for &'static str {
    fn missing() -> Self {
        DEFAULT_MISSING
    }

    fn other() -> Self {
        DEFAULT_OTHER
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn string_placeholders() {
        assert_eq!(<String as Label>::missing(), "(none)");
        assert_eq!(<String as Label>::other(), "(other)");
    }

    #[test]
    fn str_placeholders_match_string() {
        assert_eq!(<&str as Label>::missing(), <String as Label>::missing());
        assert_eq!(<&str as Label>::other(), <String as Label>::other());
    }
}
