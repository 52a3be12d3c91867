//! Plugin Module
//!
//! Read-only view over the host's loaded plugins:
//! - Plugin interface and metadata extraction
//! - Search filters
//! - Registry snapshot and queries

pub mod filter;
pub mod interface;
pub mod registry;

pub use filter::PluginFilter;
pub use interface::{BuildConfiguration, Plugin, PluginInfoPlugin, PluginRecord, PluginVersion};
pub use registry::{PluginRegistry, PluginSource, StaticPluginSource};
