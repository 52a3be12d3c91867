//! Subcommand names and option parsing.

use crate::core::{Error, Result};
use clap::Parser;

/// The four plugin subcommands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Subcommand {
    /// Search by author and name prefix
    Find,
    /// Details of one plugin
    Info,
    /// Every plugin
    List,
    /// Debug-built plugins only
    ListDebug,
}

impl Subcommand {
    /// Resolve a subcommand name or alias, ignoring case.
    pub fn from_token(token: &str) -> Option<Self> {
        match token.to_lowercase().as_str() {
            "-f" | "-s" | "find" | "search" => Some(Subcommand::Find),
            "-i" | "info" | "information" | "version" => Some(Subcommand::Info),
            "-l" | "all" | "list" | "ls" => Some(Subcommand::List),
            "-ld" | "alldebug" | "listdebug" | "lsdebug" => Some(Subcommand::ListDebug),
            _ => None,
        }
    }

    /// Canonical name.
    pub fn name(&self) -> &'static str {
        match self {
            Subcommand::Find => "find",
            Subcommand::Info => "info",
            Subcommand::List => "list",
            Subcommand::ListDebug => "listdebug",
        }
    }

    /// Usage line, given the full command prefix such as `/plugin`.
    pub fn syntax(&self, prefix: &str) -> String {
        let params = match self {
            Subcommand::Find => {
                "[-a|--author=<author>] [-n|--name=<name>] [-p|--page=<page>] [search term...] [page]"
            }
            Subcommand::Info => "[plugin name]",
            Subcommand::List | Subcommand::ListDebug => "[page]",
        };
        format!("Syntax: {} {} {}", prefix, self.name(), params)
    }

    /// One-line description shown by `--help`.
    pub fn description(&self) -> &'static str {
        match self {
            Subcommand::Find => {
                "Lists plugins whose author and name start with the given text. A bare search term matches names."
            }
            Subcommand::Info => {
                "Shows the version, build configuration, author and description of a plugin. Without a name, shows this plugin's own info."
            }
            Subcommand::List => "Lists every installed plugin, sorted by name.",
            Subcommand::ListDebug => {
                "Lists installed plugins built in the Debug configuration, sorted by name."
            }
        }
    }
}

impl std::fmt::Display for Subcommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Options of `find`.
#[derive(Debug, Parser)]
#[command(no_binary_name = true, disable_help_flag = true, disable_version_flag = true)]
pub struct FindArgs {
    /// Author prefix
    #[arg(short, long)]
    pub author: Option<String>,

    /// Name prefix
    #[arg(short, long)]
    pub name: Option<String>,

    /// Page to show to interactive receivers
    #[arg(short, long)]
    pub page: Option<String>,

    /// Show usage
    #[arg(short = 'h', short_alias = '?', long)]
    pub help: bool,

    /// Free-text search term
    pub terms: Vec<String>,
}

impl FindArgs {
    /// Page requested by an interactive receiver, and the free text left
    /// for the search term.
    ///
    /// Without `--page`, a trailing number is the page as long as some
    /// search text or an `--author`/`--name` option remains, so
    /// `find plug 2` shows page 2 of the `plug` results.
    pub fn page_and_terms(&self) -> (Option<String>, &[String]) {
        if self.page.is_some() {
            return (self.page.clone(), &self.terms);
        }

        let has_option = [&self.author, &self.name]
            .iter()
            .any(|opt| opt.as_deref().is_some_and(|v| !v.trim().is_empty()));
        match self.terms.split_last() {
            Some((last, rest)) if is_page_token(last) && (has_option || !rest.is_empty()) => {
                (Some(last.clone()), rest)
            }
            _ => (None, &self.terms),
        }
    }
}

fn is_page_token(token: &str) -> bool {
    !token.is_empty() && token.chars().all(|c| c.is_ascii_digit())
}

/// Options of `info`.
#[derive(Debug, Parser)]
#[command(no_binary_name = true, disable_help_flag = true, disable_version_flag = true)]
pub struct InfoArgs {
    /// Show usage
    #[arg(short = 'h', short_alias = '?', long)]
    pub help: bool,

    /// Plugin name, possibly several words
    pub name: Vec<String>,
}

impl InfoArgs {
    /// Requested plugin name, if any.
    pub fn plugin_name(&self) -> Option<String> {
        if self.name.is_empty() {
            None
        } else {
            Some(self.name.join(" "))
        }
    }
}

/// Options of `list` and `listdebug`.
#[derive(Debug, Parser)]
#[command(no_binary_name = true, disable_help_flag = true, disable_version_flag = true)]
pub struct ListArgs {
    /// Show usage
    #[arg(short = 'h', short_alias = '?', long)]
    pub help: bool,

    /// Page number first, anything after it is ignored
    #[arg(allow_negative_numbers = true)]
    pub args: Vec<String>,
}

/// Parse subcommand options, reporting problems as [`Error::MalformedOptions`].
pub fn parse_options<T: Parser>(args: &[String]) -> Result<T> {
    T::try_parse_from(args).map_err(|err| Error::MalformedOptions(describe(&err)))
}

/// First line of a clap error without its `error: ` prefix.
fn describe(err: &clap::Error) -> String {
    let rendered = err.to_string();
    let line = rendered.lines().next().unwrap_or_default();
    line.trim_start_matches("error:").trim().to_string()
}
