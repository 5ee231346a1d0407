//! Release series derived from milestone titles.

/// Milestone title prefix used when none is configured.
pub const DEFAULT_MILESTONE_PREFIX: &str = "Gutenberg ";

/// The version key a milestone title maps to, e.g. `"16.2"` for `"Gutenberg 16.2"`.
///
/// Titles lacking the prefix are kept whole but marked, so callers can tell
/// a derived key apart from a fallback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Series {
    /// The prefix was present and stripped.
    Prefixed(String),
    /// The prefix was absent; the key is the full title.
    Unprefixed(String),
}

impl Series {
    /// Derive the series from a milestone title.
    pub fn derive(title: &str, prefix: &str) -> Self {
        match title.strip_prefix(prefix) {
            Some(rest) => Series::Prefixed(rest.to_string()),
            None => Series::Unprefixed(title.to_string()),
        }
    }

    /// The string release names are matched against.
    pub fn key(&self) -> &str {
        match self {
            Series::Prefixed(key) | Series::Unprefixed(key) => key,
        }
    }

    pub fn is_prefixed(&self) -> bool {
        matches!(self, Series::Prefixed(_))
    }

    /// Whether a release name belongs to this series (prefix match).
    pub fn matches(&self, release_name: &str) -> bool {
        release_name.starts_with(self.key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_default_prefix() {
        let series = Series::derive("Gutenberg 16.2", DEFAULT_MILESTONE_PREFIX);
        assert_eq!(series, Series::Prefixed("16.2".to_string()));
        assert_eq!(series.key(), "16.2");
    }

    #[test]
    fn test_missing_prefix_keeps_title() {
        let series = Series::derive("16.2", DEFAULT_MILESTONE_PREFIX);
        assert_eq!(series, Series::Unprefixed("16.2".to_string()));
        assert_eq!(series.key(), "16.2");
        assert!(!series.is_prefixed());
    }

    #[test]
    fn test_custom_prefix() {
        let series = Series::derive("WordPress 6.5", "WordPress ");
        assert!(series.is_prefixed());
        assert_eq!(series.key(), "6.5");
    }

    #[test]
    fn test_prefix_is_case_sensitive() {
        let series = Series::derive("gutenberg 16.2", DEFAULT_MILESTONE_PREFIX);
        assert_eq!(series.key(), "gutenberg 16.2");
    }

    #[test]
    fn test_matches_is_prefix_match() {
        let series = Series::derive("Gutenberg 16.2", DEFAULT_MILESTONE_PREFIX);
        assert!(series.matches("16.2.1"));
        assert!(series.matches("16.2"));
        assert!(series.matches("16.20"));
        assert!(!series.matches("16.1"));
        assert!(!series.matches("Gutenberg 16.2"));
    }
}
