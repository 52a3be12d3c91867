//! Console host for the plugin command.
//!
//! Loads plugin records from a JSON file and runs one `plugin` invocation
//! against them, printing the result as the chosen receiver kind would
//! see it.

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use tracing::info;

use plugin_info::command::{CommandConfig, CommandDispatcher};
use plugin_info::monitoring::logging::{self, LogFormat, LogLevel, LoggerConfig};
use plugin_info::plugin::{PluginRecord, StaticPluginSource};
use plugin_info::report::{ReceiverKind, StdoutReceiver};
use plugin_info::{Error, Result};

#[derive(Debug, Parser)]
#[command(name = "plugin-info", version, about = "Query loaded server plugins")]
struct Cli {
    /// JSON file holding an array of plugin records
    #[arg(long)]
    plugins: PathBuf,

    /// Receiver kind to render for (console, paged, raw)
    #[arg(long, default_value = "console")]
    receiver: ReceiverKind,

    /// JSON command configuration
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log level
    #[arg(long, default_value = "warn")]
    log_level: LogLevel,

    /// Log format (text or json)
    #[arg(long, default_value = "text")]
    log_format: LogFormat,

    /// Plugin command arguments, e.g. `find --author=bob`
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    command: Vec<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    logging::init(
        &LoggerConfig::default()
            .with_level(cli.log_level)
            .with_format(cli.log_format),
    )?;

    let config = match &cli.config {
        Some(path) => CommandConfig::from_file(path)?,
        None => CommandConfig::default(),
    };

    let content = std::fs::read_to_string(&cli.plugins)?;
    let records: Vec<PluginRecord> = serde_json::from_str(&content)?;
    info!(count = records.len(), path = %cli.plugins.display(), "Loaded plugin records");

    let source = Arc::new(StaticPluginSource::new(records));
    let dispatcher = Arc::new(CommandDispatcher::new(source, config));
    let receiver = Arc::new(StdoutReceiver::new(cli.receiver));

    let invocation = dispatcher
        .dispatch(cli.command, receiver)
        .await
        .map_err(|e| Error::Internal(e.to_string()))?;
    info!(id = %invocation.id, status = ?invocation.status, "Invocation finished");

    Ok(())
}
