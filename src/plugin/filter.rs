//! Query filters for plugin records.
//!
//! Prefix matching is case-insensitive; an absent prefix matches everything.

use crate::plugin::interface::PluginRecord;
use serde::{Deserialize, Serialize};

/// Filter for querying plugin records.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PluginFilter {
    /// Author must start with this prefix
    pub author_prefix: Option<String>,
    /// Name must start with this prefix
    pub name_prefix: Option<String>,
    /// Only debug-configured plugins
    pub debug_only: bool,
}

impl PluginFilter {
    /// Create a new empty filter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a search filter from command input.
    ///
    /// When neither an author nor a name prefix is given, the free-text
    /// terms joined by single spaces become the name prefix.
    pub fn from_search(author: Option<&str>, name: Option<&str>, terms: &[String]) -> Self {
        let author = author.filter(|a| !a.trim().is_empty());
        let name = name.filter(|n| !n.trim().is_empty());

        let mut filter = Self::new();
        match (author, name) {
            (None, None) => {
                filter.name_prefix = Some(terms.join(" "));
            }
            (author, name) => {
                filter.author_prefix = author.map(str::to_string);
                filter.name_prefix = name.map(str::to_string);
            }
        }
        filter
    }

    /// Filter by author prefix.
    pub fn by_author(mut self, prefix: &str) -> Self {
        self.author_prefix = Some(prefix.to_string());
        self
    }

    /// Filter by name prefix.
    pub fn by_name(mut self, prefix: &str) -> Self {
        self.name_prefix = Some(prefix.to_string());
        self
    }

    /// Keep debug builds only.
    pub fn debug_only(mut self) -> Self {
        self.debug_only = true;
        self
    }

    /// Check if a record matches this filter.
    pub fn matches(&self, record: &PluginRecord) -> bool {
        if self.debug_only && !record.is_debug() {
            return false;
        }

        if let Some(prefix) = &self.author_prefix {
            if !starts_with_ignore_case(&record.author, prefix) {
                return false;
            }
        }

        if let Some(prefix) = &self.name_prefix {
            if !starts_with_ignore_case(&record.name, prefix) {
                return false;
            }
        }

        true
    }
}

/// Case-insensitive `starts_with`.
pub fn starts_with_ignore_case(haystack: &str, prefix: &str) -> bool {
    let mut hay = haystack.chars().flat_map(char::to_lowercase);
    prefix
        .chars()
        .flat_map(char::to_lowercase)
        .all(|p| hay.next() == Some(p))
}

/// Case-insensitive string equality.
pub fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.chars()
        .flat_map(char::to_lowercase)
        .eq(b.chars().flat_map(char::to_lowercase))
}
