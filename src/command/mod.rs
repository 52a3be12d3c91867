//! Command Module
//!
//! The `plugin` chat/console command:
//! - Subcommand aliases and option parsing
//! - Configuration
//! - Dispatch onto the blocking pool

pub mod config;
pub mod dispatcher;
pub mod options;

pub use config::CommandConfig;
pub use dispatcher::{CommandDispatcher, Invocation, InvocationStatus};
pub use options::Subcommand;
