//! # plugin-info - Plugin registry introspection
//!
//! Query and report the plugins a server has loaded:
//! - **Plugin**: metadata extraction, filters and the registry query engine
//! - **Report**: console tables, paginated chat and raw lists
//! - **Command**: the `plugin <find/info/list/listdebug>` dispatcher
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use plugin_info::command::{CommandConfig, CommandDispatcher};
//! use plugin_info::plugin::{PluginRecord, PluginVersion, StaticPluginSource};
//! use plugin_info::report::{ReceiverKind, StdoutReceiver};
//!
//! #[tokio::main]
//! async fn main() {
//!     let source = StaticPluginSource::new(vec![
//!         PluginRecord::new("Essentials", PluginVersion::new(&[1, 4])).with_author("Team"),
//!     ]);
//!     let dispatcher = Arc::new(CommandDispatcher::new(Arc::new(source), CommandConfig::default()));
//!     let receiver = Arc::new(StdoutReceiver::new(ReceiverKind::Console));
//!
//!     let args = vec!["list".to_string()];
//!     let invocation = dispatcher.dispatch(args, receiver).await.unwrap();
//!     println!("{:?}", invocation.status);
//! }
//! ```

pub mod command;
pub mod core;
pub mod monitoring;
pub mod plugin;
pub mod report;

pub use crate::core::error::{Error, Result};
