//! Plugin command dispatcher.
//!
//! Parses `plugin <subcommand> [params...]`, runs the query against a fresh
//! snapshot of the host's plugins and sends the rendered result to the
//! receiver. Every failure ends as a message to the receiver; nothing
//! propagates to the host.

use crate::command::config::CommandConfig;
use crate::command::options::{parse_options, FindArgs, InfoArgs, ListArgs, Subcommand};
use crate::core::{now, Error, InvocationId, Result, Timestamp};
use crate::plugin::{Plugin, PluginFilter, PluginInfoPlugin, PluginRecord, PluginRegistry, PluginSource};
use crate::report::paging::parse_page_number;
use crate::report::{Message, Receiver, ReceiverKind, ReportFormatter};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::{debug, info, info_span, warn};

/// Outcome of one invocation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum InvocationStatus {
    /// Output was sent
    Handled,
    /// Input was rejected with the given message
    Rejected(String),
}

/// Record of one command invocation.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Invocation {
    /// Invocation ID
    pub id: InvocationId,
    /// Start time
    pub started_at: Timestamp,
    /// Subcommand token as typed, if any
    pub subcommand: Option<String>,
    /// Receiver kind the output went to
    pub receiver: ReceiverKind,
    /// Outcome
    pub status: InvocationStatus,
}

impl Invocation {
    /// Whether the invocation produced its normal output.
    pub fn is_handled(&self) -> bool {
        self.status == InvocationStatus::Handled
    }
}

/// Executes plugin commands.
pub struct CommandDispatcher {
    source: Arc<dyn PluginSource>,
    config: CommandConfig,
    formatter: ReportFormatter,
    own: PluginRecord,
}

impl CommandDispatcher {
    /// Create a dispatcher over a host plugin source.
    pub fn new(source: Arc<dyn PluginSource>, config: CommandConfig) -> Self {
        let formatter = config.formatter();
        Self {
            source,
            config,
            formatter,
            own: PluginRecord::extract(&PluginInfoPlugin::new()),
        }
    }

    /// Replace the plugin shown when `info` is given no name.
    pub fn with_own_plugin(mut self, plugin: &dyn Plugin) -> Self {
        self.own = PluginRecord::extract(plugin);
        self
    }

    /// Get the configuration.
    pub fn config(&self) -> &CommandConfig {
        &self.config
    }

    /// Run an invocation on the blocking pool and return immediately.
    pub fn dispatch(
        self: &Arc<Self>,
        args: Vec<String>,
        receiver: Arc<dyn Receiver>,
    ) -> JoinHandle<Invocation> {
        let dispatcher = Arc::clone(self);
        tokio::task::spawn_blocking(move || dispatcher.execute(&args, receiver.as_ref()))
    }

    /// Run an invocation to completion on the current thread.
    pub fn execute(&self, args: &[String], receiver: &dyn Receiver) -> Invocation {
        let id = InvocationId::generate();
        let kind = receiver.kind();
        let span = info_span!("plugin_command", invocation = %id, receiver = %kind);
        let _guard = span.enter();

        let started_at = now();
        let status = match self.run(args, receiver) {
            Ok(messages) => {
                info!(lines = messages.len(), "Plugin command handled");
                receiver.send_all(messages);
                InvocationStatus::Handled
            }
            Err(err) => {
                warn!(error = %err, "Plugin command rejected");
                receiver.send_all(self.error_messages(&err));
                InvocationStatus::Rejected(err.to_string())
            }
        };

        Invocation {
            id,
            started_at,
            subcommand: args.first().cloned(),
            receiver: kind,
            status,
        }
    }

    fn run(&self, args: &[String], receiver: &dyn Receiver) -> Result<Vec<Message>> {
        let Some((token, params)) = args.split_first() else {
            return Ok(self.usage());
        };

        let subcommand =
            Subcommand::from_token(token).ok_or_else(|| Error::UnknownSubcommand(token.clone()))?;
        debug!(%subcommand, params = params.len(), "Running plugin subcommand");

        match subcommand {
            Subcommand::Find => self.find(params, receiver),
            Subcommand::Info => self.info(params, receiver),
            Subcommand::List => self.list(Subcommand::List, params, receiver),
            Subcommand::ListDebug => self.list(Subcommand::ListDebug, params, receiver),
        }
    }

    fn find(&self, params: &[String], receiver: &dyn Receiver) -> Result<Vec<Message>> {
        if params.is_empty() {
            return Err(Error::MissingSearchTerm);
        }

        let opts: FindArgs = parse_options(params)?;
        if opts.help {
            return Ok(self.help(Subcommand::Find));
        }

        let (page, terms) = match receiver.kind() {
            ReceiverKind::InteractivePaged => opts.page_and_terms(),
            ReceiverKind::Console | ReceiverKind::RawList => (None, opts.terms.as_slice()),
        };
        let page = self.page_for(receiver.kind(), page.as_slice())?;
        let filter = PluginFilter::from_search(opts.author.as_deref(), opts.name.as_deref(), terms);

        let registry = PluginRegistry::snapshot(self.source.as_ref());
        let results = registry.find_by_prefix(
            filter.author_prefix.as_deref().unwrap_or_default(),
            filter.name_prefix.as_deref().unwrap_or_default(),
        );
        self.formatter.render_list(receiver.kind(), &results, page)
    }

    fn info(&self, params: &[String], receiver: &dyn Receiver) -> Result<Vec<Message>> {
        let opts: InfoArgs = parse_options(params)?;
        if opts.help {
            return Ok(self.help(Subcommand::Info));
        }

        let rich = receiver.supports_rich_text();
        let Some(name) = opts.plugin_name() else {
            let mut out = vec![Message::info(
                "No plugin name was provided, so own info will be displayed.",
            )];
            out.extend(self.formatter.render_detail(&self.own, rich));
            return Ok(out);
        };

        let registry = PluginRegistry::snapshot(self.source.as_ref());
        let plugin = registry
            .get_by_exact_name(&name)
            .ok_or(Error::NotFound(name))?;
        Ok(self.formatter.render_detail(plugin, rich))
    }

    fn list(
        &self,
        subcommand: Subcommand,
        params: &[String],
        receiver: &dyn Receiver,
    ) -> Result<Vec<Message>> {
        let opts: ListArgs = parse_options(params)?;
        if opts.help {
            return Ok(self.help(subcommand));
        }

        let page = self.page_for(receiver.kind(), &opts.args)?;
        let registry = PluginRegistry::snapshot(self.source.as_ref());
        let results = registry.list_all(subcommand == Subcommand::ListDebug);
        self.formatter.render_list(receiver.kind(), &results, page)
    }

    /// Page numbers only matter to paged receivers; others ignore them.
    fn page_for(&self, kind: ReceiverKind, args: &[String]) -> Result<usize> {
        match kind {
            ReceiverKind::InteractivePaged => parse_page_number(args, 0),
            ReceiverKind::Console | ReceiverKind::RawList => Ok(1),
        }
    }

    fn usage(&self) -> Vec<Message> {
        let prefix = self.config.command_prefix();
        vec![
            Message::info(format!(
                "Syntax: {} <find/info/list/listdebug> [params...]",
                prefix
            )),
            self.help_hint(),
        ]
    }

    fn help_hint(&self) -> Message {
        Message::info(format!(
            "Type {} <find/info/list/listdebug> -? OR -h OR --help for command details.",
            self.config.command_prefix()
        ))
    }

    fn help(&self, subcommand: Subcommand) -> Vec<Message> {
        vec![
            Message::info(subcommand.syntax(&self.config.command_prefix())),
            Message::info(subcommand.description()),
        ]
    }

    fn error_messages(&self, err: &Error) -> Vec<Message> {
        match err {
            Error::UnknownSubcommand(_) => vec![
                Message::error(format!(
                    "Invalid syntax! Proper syntax: {} <find/info/list/listdebug> [params...]",
                    self.config.command_prefix()
                )),
                self.help_hint(),
            ],
            err if err.is_user_error() => vec![Message::error(err.to_string())],
            _ => vec![Message::error(
                "The plugin command failed; check the server log for details.",
            )],
        }
    }
}
