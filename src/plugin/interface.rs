//! Plugin interface and metadata extraction.
//!
//! Hosts expose their loaded extensions through the [`Plugin`] trait; the
//! query engine only ever works on [`PluginRecord`] snapshots built from it.

use crate::core::{Error, Result};
use serde::{Deserialize, Deserializer, Serialize};
use std::str::FromStr;

/// Build configuration of a plugin's compiled artifact.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BuildConfiguration {
    /// Built without optimizations, with debug assertions
    Debug,
    /// Optimized build
    #[default]
    Release,
}

impl BuildConfiguration {
    /// Configuration of the artifact this code was compiled into.
    pub fn of_current_build() -> Self {
        if cfg!(debug_assertions) {
            BuildConfiguration::Debug
        } else {
            BuildConfiguration::Release
        }
    }

    /// Check for the debug configuration.
    pub fn is_debug(&self) -> bool {
        *self == BuildConfiguration::Debug
    }
}

impl std::fmt::Display for BuildConfiguration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BuildConfiguration::Debug => write!(f, "Debug"),
            BuildConfiguration::Release => write!(f, "Release"),
        }
    }
}

/// Dotted numeric plugin version (`major.minor.patch...`).
///
/// Components are kept exactly as given, so `1.0` displays as `1.0` and
/// `1.0.0.0` as `1.0.0.0`.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PluginVersion(Vec<u64>);

impl PluginVersion {
    /// Create a version from its components.
    pub fn new(components: &[u64]) -> Self {
        if components.is_empty() {
            return Self(vec![0]);
        }
        Self(components.to_vec())
    }

    /// Version components, most significant first.
    pub fn components(&self) -> &[u64] {
        &self.0
    }

    /// Major component.
    pub fn major(&self) -> u64 {
        self.0[0]
    }
}

impl Default for PluginVersion {
    fn default() -> Self {
        Self(vec![1, 0])
    }
}

impl FromStr for PluginVersion {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(Error::InvalidVersion("empty version string".to_string()));
        }

        let components = trimmed
            .split('.')
            .map(|part| {
                part.parse::<u64>()
                    .map_err(|_| Error::InvalidVersion(format!("'{}' in '{}'", part, trimmed)))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self(components))
    }
}

impl TryFrom<String> for PluginVersion {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<PluginVersion> for String {
    fn from(version: PluginVersion) -> Self {
        version.to_string()
    }
}

impl std::fmt::Display for PluginVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let parts: Vec<String> = self.0.iter().map(u64::to_string).collect();
        write!(f, "{}", parts.join("."))
    }
}

/// Capability every host-loaded plugin exposes.
pub trait Plugin: Send + Sync {
    /// Display name.
    fn name(&self) -> &str;

    /// Author or team.
    fn author(&self) -> &str;

    /// Plugin version.
    fn version(&self) -> PluginVersion;

    /// Short description.
    fn description(&self) -> &str;

    /// Build configuration, if the host can tell.
    fn build_configuration(&self) -> Option<BuildConfiguration> {
        None
    }
}

/// Immutable snapshot of one plugin's metadata.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PluginRecord {
    /// Plugin name (primary sort and display key)
    #[serde(deserialize_with = "non_empty_name")]
    pub name: String,
    /// Author
    #[serde(default)]
    pub author: String,
    /// Version
    pub version: PluginVersion,
    /// Description
    #[serde(default)]
    pub description: String,
    /// Build configuration
    #[serde(default)]
    pub build_configuration: BuildConfiguration,
}

fn non_empty_name<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let name = String::deserialize(deserializer)?;
    if name.trim().is_empty() {
        return Err(serde::de::Error::custom("plugin name must not be empty"));
    }
    Ok(name)
}

impl PluginRecord {
    /// Create a new record.
    pub fn new(name: &str, version: PluginVersion) -> Self {
        Self {
            name: name.to_string(),
            author: String::new(),
            version,
            description: String::new(),
            build_configuration: BuildConfiguration::Release,
        }
    }

    /// Extract the metadata of a loaded plugin.
    ///
    /// Never fails: an undeterminable build configuration is reported as
    /// [`BuildConfiguration::Release`].
    pub fn extract(plugin: &dyn Plugin) -> Self {
        Self {
            name: plugin.name().to_string(),
            author: plugin.author().to_string(),
            version: plugin.version(),
            description: plugin.description().to_string(),
            build_configuration: plugin.build_configuration().unwrap_or_default(),
        }
    }

    /// Set author.
    pub fn with_author(mut self, author: &str) -> Self {
        self.author = author.to_string();
        self
    }

    /// Set description.
    pub fn with_description(mut self, desc: &str) -> Self {
        self.description = desc.to_string();
        self
    }

    /// Set build configuration.
    pub fn with_build_configuration(mut self, config: BuildConfiguration) -> Self {
        self.build_configuration = config;
        self
    }

    /// Check whether the plugin was built in the debug configuration.
    pub fn is_debug(&self) -> bool {
        self.build_configuration.is_debug()
    }
}

impl Plugin for PluginRecord {
    fn name(&self) -> &str {
        &self.name
    }

    fn author(&self) -> &str {
        &self.author
    }

    fn version(&self) -> PluginVersion {
        self.version.clone()
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn build_configuration(&self) -> Option<BuildConfiguration> {
        Some(self.build_configuration)
    }
}

/// The plugin-info command's own metadata, shown by `info` without a name.
pub struct PluginInfoPlugin {
    version: PluginVersion,
}

impl PluginInfoPlugin {
    /// Create the self-describing plugin.
    pub fn new() -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").parse().unwrap_or_default(),
        }
    }
}

impl Default for PluginInfoPlugin {
    fn default() -> Self {
        Self::new()
    }
}

impl Plugin for PluginInfoPlugin {
    fn name(&self) -> &str {
        "Plugin Information"
    }

    fn author(&self) -> &str {
        env!("CARGO_PKG_AUTHORS")
    }

    fn version(&self) -> PluginVersion {
        self.version.clone()
    }

    fn description(&self) -> &str {
        "Get information about installed plugins."
    }

    fn build_configuration(&self) -> Option<BuildConfiguration> {
        Some(BuildConfiguration::of_current_build())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct OpaquePlugin;

    impl Plugin for OpaquePlugin {
        fn name(&self) -> &str {
            "Opaque"
        }

        fn author(&self) -> &str {
            "Nobody"
        }

        fn version(&self) -> PluginVersion {
            PluginVersion::new(&[2, 1])
        }

        fn description(&self) -> &str {
            "No build metadata"
        }
    }

    #[test]
    fn test_extract_defaults_to_release() {
        let record = PluginRecord::extract(&OpaquePlugin);

        assert_eq!(record.name, "Opaque");
        assert_eq!(record.author, "Nobody");
        assert_eq!(record.version.to_string(), "2.1");
        assert_eq!(record.build_configuration, BuildConfiguration::Release);
    }

    #[test]
    fn test_extract_keeps_reported_configuration() {
        let source = PluginRecord::new("Dbg", PluginVersion::new(&[0, 3]))
            .with_build_configuration(BuildConfiguration::Debug);
        let record = PluginRecord::extract(&source);

        assert!(record.is_debug());
        assert_eq!(record, source);
    }

    #[test]
    fn test_version_parse_and_display() {
        let v: PluginVersion = "1.2.3.4".parse().unwrap();
        assert_eq!(v.components(), &[1, 2, 3, 4]);
        assert_eq!(v.major(), 1);
        assert_eq!(v.to_string(), "1.2.3.4");

        assert!("".parse::<PluginVersion>().is_err());
        assert!("1.x".parse::<PluginVersion>().is_err());
        assert!("1..2".parse::<PluginVersion>().is_err());
    }

    #[test]
    fn test_record_json() {
        let json = r#"{"name":"Alpha","author":"Bob","version":"1.0"}"#;
        let record: PluginRecord = serde_json::from_str(json).unwrap();

        assert_eq!(record.version, PluginVersion::new(&[1, 0]));
        assert_eq!(record.build_configuration, BuildConfiguration::Release);
        assert!(record.description.is_empty());

        let out = serde_json::to_value(&record).unwrap();
        assert_eq!(out["version"], "1.0");
        assert_eq!(out["build_configuration"], "Release");
    }

    #[test]
    fn test_record_json_rejects_blank_name() {
        for json in [
            r#"{"name":"","version":"1.0"}"#,
            r#"{"name":"   ","version":"1.0"}"#,
        ] {
            let err = serde_json::from_str::<PluginRecord>(json).unwrap_err();
            assert!(err.to_string().contains("plugin name must not be empty"));
        }
    }

    #[test]
    fn test_self_plugin_metadata() {
        let own = PluginRecord::extract(&PluginInfoPlugin::new());

        assert_eq!(own.name, "Plugin Information");
        assert_eq!(own.version.to_string(), env!("CARGO_PKG_VERSION"));
        assert_eq!(own.build_configuration, BuildConfiguration::of_current_build());
    }
}
