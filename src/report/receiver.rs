//! Output destinations.
//!
//! The host classifies every destination into one [`ReceiverKind`]; the
//! formatter never looks further into it.

use crate::core::{Error, Result};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use std::sync::{Mutex, PoisonError};

/// Destination kind, selecting the list rendering strategy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReceiverKind {
    /// Server console operator
    Console,
    /// Connected player reading paginated chat
    InteractivePaged,
    /// Remote or API caller wanting a flat list
    RawList,
}

impl std::fmt::Display for ReceiverKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReceiverKind::Console => write!(f, "console"),
            ReceiverKind::InteractivePaged => write!(f, "paged"),
            ReceiverKind::RawList => write!(f, "raw"),
        }
    }
}

impl FromStr for ReceiverKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "console" => Ok(ReceiverKind::Console),
            "paged" | "player" => Ok(ReceiverKind::InteractivePaged),
            "raw" | "rest" => Ok(ReceiverKind::RawList),
            other => Err(Error::Config(format!("unknown receiver kind '{}'", other))),
        }
    }
}

/// How a message should be presented.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MessageKind {
    /// Informational chat line
    Info,
    /// Error chat line
    Error,
    /// Unadorned console text
    Plain,
}

/// A single line of output.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Presentation kind
    pub kind: MessageKind,
    /// Text
    pub text: String,
}

impl Message {
    /// Informational message.
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            kind: MessageKind::Info,
            text: text.into(),
        }
    }

    /// Error message.
    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: MessageKind::Error,
            text: text.into(),
        }
    }

    /// Plain console line.
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            kind: MessageKind::Plain,
            text: text.into(),
        }
    }
}

/// A destination for formatted output.
pub trait Receiver: Send + Sync {
    /// Kind of this destination.
    fn kind(&self) -> ReceiverKind;

    /// Deliver one message.
    fn send(&self, message: Message);

    /// Whether color markup is understood.
    fn supports_rich_text(&self) -> bool {
        self.kind() == ReceiverKind::InteractivePaged
    }

    /// Deliver an informational line.
    fn send_info(&self, text: &str) {
        self.send(Message::info(text));
    }

    /// Deliver an error line.
    fn send_error(&self, text: &str) {
        self.send(Message::error(text));
    }

    /// Deliver several messages in order.
    fn send_all(&self, messages: Vec<Message>) {
        for message in messages {
            self.send(message);
        }
    }
}

/// Receiver that keeps every message in memory.
pub struct BufferedReceiver {
    kind: ReceiverKind,
    rich_text: bool,
    messages: Mutex<Vec<Message>>,
}

impl BufferedReceiver {
    /// Create a buffered receiver of the given kind.
    pub fn new(kind: ReceiverKind) -> Self {
        Self {
            kind,
            rich_text: kind == ReceiverKind::InteractivePaged,
            messages: Mutex::new(Vec::new()),
        }
    }

    /// Override rich text support.
    pub fn with_rich_text(mut self, rich_text: bool) -> Self {
        self.rich_text = rich_text;
        self
    }

    /// Get buffered messages.
    pub fn messages(&self) -> Vec<Message> {
        self.messages
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Get buffered message texts.
    pub fn lines(&self) -> Vec<String> {
        self.messages().into_iter().map(|m| m.text).collect()
    }

    /// Clear the buffer.
    pub fn clear(&self) {
        self.messages
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}

impl Receiver for BufferedReceiver {
    fn kind(&self) -> ReceiverKind {
        self.kind
    }

    fn send(&self, message: Message) {
        self.messages
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(message);
    }

    fn supports_rich_text(&self) -> bool {
        self.rich_text
    }
}

/// Receiver writing to the process's stdout and stderr.
pub struct StdoutReceiver {
    kind: ReceiverKind,
}

impl StdoutReceiver {
    /// Create a terminal receiver posing as the given kind.
    pub fn new(kind: ReceiverKind) -> Self {
        Self { kind }
    }
}

impl Receiver for StdoutReceiver {
    fn kind(&self) -> ReceiverKind {
        self.kind
    }

    fn send(&self, message: Message) {
        match message.kind {
            MessageKind::Error => eprintln!("{}", message.text),
            MessageKind::Info | MessageKind::Plain => println!("{}", message.text),
        }
    }
}
