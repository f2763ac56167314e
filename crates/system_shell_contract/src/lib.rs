//! Shared shell command contracts used by the terminal engine, the desktop runtime command table,
//! and native hosts.
//!
//! This crate is intentionally runtime-agnostic. It defines serializable command metadata,
//! history entries, command results, and error payloads without depending on the interpreter or
//! desktop runtime internals.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

use std::fmt;

use serde::{Deserialize, Serialize};

/// Stable lowercase command name, such as `whoami`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CommandName(String);

impl CommandName {
    /// Creates a command name, folding it to lowercase.
    pub fn new(raw: impl AsRef<str>) -> Self {
        Self(raw.as_ref().to_lowercase())
    }

    /// Returns the name text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CommandName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Positional argument specification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandArgSpec {
    /// Human-readable argument label.
    pub name: String,
    /// Short description.
    pub summary: String,
    /// Whether this argument is required.
    pub required: bool,
    /// Whether this argument consumes remaining values.
    pub repeatable: bool,
}

impl CommandArgSpec {
    /// Optional single-value argument.
    pub fn optional(name: impl Into<String>, summary: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            summary: summary.into(),
            required: false,
            repeatable: false,
        }
    }
}

/// Example invocation rendered in help output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandExample {
    /// Example command line.
    pub command: String,
    /// Example explanation.
    pub summary: String,
}

/// Complete help metadata for a registered command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HelpDoc {
    /// Summary sentence shown in command listings.
    pub summary: String,
    /// Usage string displayed in help output.
    pub usage: String,
    /// Example invocations.
    pub examples: Vec<CommandExample>,
}

/// Full command registration metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandDescriptor {
    /// Canonical command name.
    pub name: CommandName,
    /// Alternate names resolving to the same command.
    pub aliases: Vec<String>,
    /// Positional argument metadata.
    pub args: Vec<CommandArgSpec>,
    /// Help metadata.
    pub help: HelpDoc,
}

impl CommandDescriptor {
    /// Returns whether `token` names this command or one of its aliases (case-insensitive).
    pub fn matches(&self, token: &str) -> bool {
        let folded = token.to_lowercase();
        self.name.as_str() == folded
            || self
                .aliases
                .iter()
                .any(|alias| alias.eq_ignore_ascii_case(&folded))
    }
}

/// Classification of a terminal history entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HistoryEntryKind {
    /// Command ran and produced output.
    Success,
    /// Unknown command or failed handler.
    Error,
    /// Informational line not produced by a command (for example, a greeting).
    Info,
    /// Echo of an input line that was not executed (for example, `^C`).
    Command,
}

/// One input/output pair in the terminal transcript.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TerminalHistoryEntry {
    /// Raw input line as submitted.
    pub input: String,
    /// Rendered output text.
    pub output: String,
    /// Unix timestamp in milliseconds.
    pub timestamp_ms: u64,
    /// Entry classification.
    pub kind: HistoryEntryKind,
}

/// Direction for command-history recall.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HistoryDirection {
    /// Towards older commands.
    Up,
    /// Towards newer commands and finally the empty line.
    Down,
}

/// Terminal color scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TerminalTheme {
    /// Default dark scheme.
    #[default]
    Dark,
    /// Green-on-black scheme.
    Matrix,
    /// Amber CRT scheme.
    Retro,
    /// Neon scheme.
    Synthwave,
}

impl TerminalTheme {
    /// Every theme in cycle order.
    pub const ALL: [TerminalTheme; 4] = [Self::Dark, Self::Matrix, Self::Retro, Self::Synthwave];

    /// Canonical theme id.
    pub fn id(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Matrix => "matrix",
            Self::Retro => "retro",
            Self::Synthwave => "synthwave",
        }
    }

    /// Parses a theme id case-insensitively.
    pub fn from_id(raw: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|theme| theme.id().eq_ignore_ascii_case(raw))
    }

    /// Next theme in cycle order, wrapping back to [`TerminalTheme::Dark`].
    pub fn next(self) -> Self {
        match self {
            Self::Dark => Self::Matrix,
            Self::Matrix => Self::Retro,
            Self::Retro => Self::Synthwave,
            Self::Synthwave => Self::Dark,
        }
    }
}

/// Output of a successful command handler.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandResult {
    /// Text recorded as the entry output.
    pub output: String,
    /// Optional session theme change requested by the command.
    pub theme: Option<TerminalTheme>,
}

impl CommandResult {
    /// Plain text result.
    pub fn text(output: impl Into<String>) -> Self {
        Self {
            output: output.into(),
            theme: None,
        }
    }

    /// Attaches a theme change to the result.
    pub fn with_theme(mut self, theme: TerminalTheme) -> Self {
        self.theme = Some(theme);
        self
    }
}

/// Structured shell error classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ShellErrorCode {
    /// User input violated command usage.
    Usage,
    /// The command or referenced item was not found.
    NotFound,
    /// The command is unavailable in this host context.
    Unavailable,
    /// Internal command failure.
    Internal,
}

/// Error emitted by command lookup or handlers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShellError {
    /// Error category.
    pub code: ShellErrorCode,
    /// Human-readable message.
    pub message: String,
}

impl ShellError {
    /// Creates a new shell error.
    pub fn new(code: ShellErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Usage error shorthand.
    pub fn usage(message: impl Into<String>) -> Self {
        Self::new(ShellErrorCode::Usage, message)
    }
}

impl fmt::Display for ShellError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for ShellError {}

/// One completion candidate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletionItem {
    /// Text inserted into the input line.
    pub value: String,
    /// Human-readable label.
    pub label: String,
    /// Optional short description.
    pub detail: Option<String>,
}
