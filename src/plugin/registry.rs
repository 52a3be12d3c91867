//! Read-only plugin registry and query engine.
//!
//! A registry is a snapshot of the host's loaded plugins taken for one
//! query. Results borrow from the snapshot.

use crate::plugin::filter::{eq_ignore_case, PluginFilter};
use crate::plugin::interface::{Plugin, PluginRecord};
use std::sync::Arc;
use tracing::debug;

/// Supplies the plugins currently loaded by the host.
pub trait PluginSource: Send + Sync {
    /// Loaded plugins, in host order.
    fn loaded_plugins(&self) -> Vec<Arc<dyn Plugin>>;
}

/// A fixed list of records acting as a plugin source.
#[derive(Clone, Debug, Default)]
pub struct StaticPluginSource {
    records: Vec<PluginRecord>,
}

impl StaticPluginSource {
    /// Create a source over the given records.
    pub fn new(records: Vec<PluginRecord>) -> Self {
        Self { records }
    }
}

impl PluginSource for StaticPluginSource {
    fn loaded_plugins(&self) -> Vec<Arc<dyn Plugin>> {
        self.records
            .iter()
            .cloned()
            .map(|r| Arc::new(r) as Arc<dyn Plugin>)
            .collect()
    }
}

/// Plugin registry snapshot.
#[derive(Clone, Debug, Default)]
pub struct PluginRegistry {
    /// Records in host order
    records: Vec<PluginRecord>,
}

impl PluginRegistry {
    /// Create a registry over already extracted records.
    pub fn new(records: Vec<PluginRecord>) -> Self {
        Self { records }
    }

    /// Snapshot the plugins currently offered by a source.
    pub fn snapshot(source: &dyn PluginSource) -> Self {
        let records: Vec<PluginRecord> = source
            .loaded_plugins()
            .iter()
            .map(|p| PluginRecord::extract(p.as_ref()))
            .collect();
        debug!(count = records.len(), "Snapshotted plugin registry");
        Self { records }
    }

    /// Find plugins whose author and name start with the given prefixes.
    ///
    /// Matching is case-insensitive and an empty prefix matches everything.
    /// Results keep host order.
    pub fn find_by_prefix(&self, author_prefix: &str, name_prefix: &str) -> Vec<&PluginRecord> {
        let filter = PluginFilter::new()
            .by_author(author_prefix)
            .by_name(name_prefix);
        self.search(&filter)
    }

    /// Find plugins matching a filter, in host order.
    pub fn search(&self, filter: &PluginFilter) -> Vec<&PluginRecord> {
        let results: Vec<&PluginRecord> =
            self.records.iter().filter(|r| filter.matches(r)).collect();
        debug!(?filter, matches = results.len(), "Searched plugins");
        results
    }

    /// All plugins sorted by name, optionally restricted to debug builds.
    ///
    /// Names are compared ordinally, so uppercase sorts before lowercase.
    pub fn list_all(&self, debug_only: bool) -> Vec<&PluginRecord> {
        let mut results: Vec<&PluginRecord> = self
            .records
            .iter()
            .filter(|r| !debug_only || r.is_debug())
            .collect();
        results.sort_by(|a, b| a.name.cmp(&b.name));
        results
    }

    /// First plugin whose name equals `name`, ignoring case.
    pub fn get_by_exact_name(&self, name: &str) -> Option<&PluginRecord> {
        self.records.iter().find(|r| eq_ignore_case(&r.name, name))
    }

    /// All records in host order.
    pub fn records(&self) -> &[PluginRecord] {
        &self.records
    }

    /// Get plugin count.
    pub fn plugin_count(&self) -> usize {
        self.records.len()
    }

    /// Check for an empty snapshot.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plugin::interface::{BuildConfiguration, PluginVersion};

    fn sample() -> PluginRegistry {
        PluginRegistry::new(vec![
            PluginRecord::new("Alpha", PluginVersion::new(&[1, 0])).with_author("Bob"),
            PluginRecord::new("beta", PluginVersion::new(&[2, 0]))
                .with_author("bob")
                .with_build_configuration(BuildConfiguration::Debug),
        ])
    }

    fn names(records: &[&PluginRecord]) -> Vec<String> {
        records.iter().map(|r| r.name.clone()).collect()
    }

    #[test]
    fn test_registry_creation() {
        let registry = PluginRegistry::default();
        assert_eq!(registry.plugin_count(), 0);
        assert!(registry.is_empty());
        assert!(registry.list_all(false).is_empty());
        assert!(registry.find_by_prefix("", "").is_empty());
        assert!(registry.get_by_exact_name("x").is_none());
    }

    #[test]
    fn test_find_by_prefix() {
        let registry = sample();

        assert_eq!(names(&registry.find_by_prefix("", "b")), vec!["beta"]);
        assert_eq!(names(&registry.find_by_prefix("BO", "")), vec!["Alpha", "beta"]);
        assert_eq!(names(&registry.find_by_prefix("", "")), vec!["Alpha", "beta"]);
        assert!(registry.find_by_prefix("alice", "").is_empty());
    }

    #[test]
    fn test_find_keeps_host_order() {
        let registry = PluginRegistry::new(vec![
            PluginRecord::new("zeta", PluginVersion::default()),
            PluginRecord::new("Zed", PluginVersion::default()),
        ]);

        assert_eq!(names(&registry.find_by_prefix("", "z")), vec!["zeta", "Zed"]);
    }

    #[test]
    fn test_list_all_ordinal_sort() {
        let registry = sample();

        assert_eq!(names(&registry.list_all(false)), vec!["Alpha", "beta"]);
        assert_eq!(names(&registry.list_all(true)), vec!["beta"]);
    }

    #[test]
    fn test_debug_list_is_subset() {
        let registry = PluginRegistry::new(vec![
            PluginRecord::new("c", PluginVersion::default())
                .with_build_configuration(BuildConfiguration::Debug),
            PluginRecord::new("B", PluginVersion::default()),
            PluginRecord::new("a", PluginVersion::default())
                .with_build_configuration(BuildConfiguration::Debug),
        ]);

        let all = registry.list_all(false);
        let debug = registry.list_all(true);

        assert_eq!(names(&all), vec!["B", "a", "c"]);
        assert_eq!(names(&debug), vec!["a", "c"]);
        assert!(debug.iter().all(|r| r.is_debug() && all.contains(r)));
    }

    #[test]
    fn test_get_by_exact_name() {
        let registry = sample();

        let found = registry.get_by_exact_name("ALPHA").unwrap();
        assert_eq!(found.author, "Bob");
        assert!(registry.get_by_exact_name("alp").is_none());
    }

    #[test]
    fn test_duplicate_names_first_match_wins() {
        let registry = PluginRegistry::new(vec![
            PluginRecord::new("Dup", PluginVersion::default()).with_author("first"),
            PluginRecord::new("dup", PluginVersion::default()).with_author("second"),
        ]);

        assert_eq!(registry.get_by_exact_name("DUP").unwrap().author, "first");
        assert_eq!(registry.find_by_prefix("", "dup").len(), 2);
    }

    #[test]
    fn test_snapshot_from_source() {
        let source = StaticPluginSource::new(vec![
            PluginRecord::new("One", PluginVersion::default()),
            PluginRecord::new("Two", PluginVersion::default()),
        ]);
        let registry = PluginRegistry::snapshot(&source);

        assert_eq!(registry.plugin_count(), 2);
        assert_eq!(registry.records()[1].name, "Two");
    }
}
