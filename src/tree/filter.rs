//! Extension-based filtering for the walk

use std::collections::BTreeSet;

use super::config::TraversalConfig;

/// Include/exclude rules keyed on lowercase `.ext` suffixes.
///
/// A file must pass inclusion AND not match exclusion.
#[derive(Debug, Clone, Default)]
pub struct ExtensionFilter {
    include: Option<BTreeSet<String>>,
    exclude: Option<BTreeSet<String>>,
}

impl ExtensionFilter {
    pub fn new(include: Option<BTreeSet<String>>, exclude: Option<BTreeSet<String>>) -> Self {
        // An empty include set means "no restriction", not "include nothing"
        let include = include.filter(|set| !set.is_empty());
        Self { include, exclude }
    }

    pub fn from_config(config: &TraversalConfig) -> Self {
        Self::new(config.include.clone(), config.exclude.clone())
    }

    /// Check if a file with this (already lowercased) extension should be included.
    pub fn is_included(&self, extension: &str) -> bool {
        if let Some(include) = &self.include {
            if !include.contains(extension) {
                return false;
            }
        }
        !self.is_excluded(extension)
    }

    /// Check if an extension, or a directory name, is in the exclude set.
    pub fn is_excluded(&self, name: &str) -> bool {
        self.exclude
            .as_ref()
            .is_some_and(|exclude| exclude.contains(&name.to_lowercase()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(items: &[&str]) -> Option<BTreeSet<String>> {
        Some(items.iter().map(|s| s.to_string()).collect())
    }

    #[test]
    fn test_no_rules_includes_everything() {
        let filter = ExtensionFilter::default();
        assert!(filter.is_included(".rs"));
        assert!(filter.is_included(""));
    }

    #[test]
    fn test_include_restricts() {
        let filter = ExtensionFilter::new(set(&[".py"]), None);
        assert!(filter.is_included(".py"));
        assert!(!filter.is_included(".bin"));
        assert!(!filter.is_included(""));
    }

    #[test]
    fn test_empty_include_is_no_restriction() {
        let filter = ExtensionFilter::new(set(&[]), None);
        assert!(filter.is_included(".anything"));
    }

    #[test]
    fn test_exclude_wins_over_include() {
        let filter = ExtensionFilter::new(set(&[".py", ".txt"]), set(&[".txt"]));
        assert!(filter.is_included(".py"));
        assert!(!filter.is_included(".txt"));
    }

    #[test]
    fn test_excluded_directory_name_is_case_insensitive() {
        let filter = ExtensionFilter::new(None, set(&[".git"]));
        assert!(filter.is_excluded(".git"));
        assert!(filter.is_excluded(".GIT"));
        assert!(!filter.is_excluded("src"));
    }
}
