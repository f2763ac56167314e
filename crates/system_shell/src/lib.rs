//! Runtime-agnostic terminal engine: command registry, line interpreter, transcript log, command
//! recall, and prompt line editing.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod editor;
pub mod history;
pub mod time;

use std::rc::Rc;

use system_shell_contract::{
    CommandDescriptor, CommandResult, CompletionItem, HistoryDirection, HistoryEntryKind,
    ShellError, TerminalHistoryEntry, TerminalTheme,
};

pub use editor::{KeyInput, KeyModifiers, LineEditor};
pub use history::{CommandHistory, MAX_COMMAND_HISTORY};
pub use time::EntryClock;

/// Command name intercepted by the interpreter to wipe the transcript.
pub const CLEAR_COMMAND: &str = "clear";

/// Synchronous command handler.
pub type CommandHandler = Rc<dyn Fn(&CommandContext<'_>) -> Result<CommandResult, ShellError>>;

/// Read-only execution context passed to handlers.
pub struct CommandContext<'a> {
    /// Resolved canonical command name.
    pub name: &'a str,
    /// Positional arguments after the command name, verbatim.
    pub args: &'a [String],
    /// Session theme at the time of execution.
    pub theme: TerminalTheme,
    registry: &'a CommandRegistry,
}

impl CommandContext<'_> {
    /// Registered command descriptors in table order.
    pub fn descriptors(&self) -> impl Iterator<Item = &CommandDescriptor> {
        self.registry.descriptors()
    }

    /// Looks up a descriptor by name or alias.
    pub fn descriptor(&self, token: &str) -> Option<&CommandDescriptor> {
        self.registry.descriptor(token)
    }
}

#[derive(Clone)]
struct RegisteredCommand {
    descriptor: CommandDescriptor,
    handler: CommandHandler,
}

/// Order-preserving command table keyed by lowercase name.
#[derive(Clone, Default)]
pub struct CommandRegistry {
    commands: Vec<RegisteredCommand>,
}

impl CommandRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers one command. A command with the same name is replaced in place.
    pub fn register(&mut self, descriptor: CommandDescriptor, handler: CommandHandler) {
        let registered = RegisteredCommand {
            descriptor,
            handler,
        };
        match self
            .commands
            .iter_mut()
            .find(|existing| existing.descriptor.name == registered.descriptor.name)
        {
            Some(existing) => {
                tracing::debug!(command = %registered.descriptor.name, "replacing command registration");
                *existing = registered;
            }
            None => self.commands.push(registered),
        }
    }

    /// Looks up a descriptor by name or alias, case-insensitively.
    pub fn descriptor(&self, token: &str) -> Option<&CommandDescriptor> {
        self.resolve(token).map(|registered| &registered.descriptor)
    }

    /// Registered descriptors in registration order.
    pub fn descriptors(&self) -> impl Iterator<Item = &CommandDescriptor> {
        self.commands.iter().map(|registered| &registered.descriptor)
    }

    /// Number of registered commands.
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Whether no command is registered.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Commands whose canonical name starts with `prefix`, in table order.
    pub fn complete(&self, prefix: &str) -> Vec<CompletionItem> {
        let prefix = prefix.to_lowercase();
        self.descriptors()
            .filter(|descriptor| descriptor.name.as_str().starts_with(&prefix))
            .map(|descriptor| CompletionItem {
                value: descriptor.name.to_string(),
                label: descriptor.name.to_string(),
                detail: Some(descriptor.help.summary.clone()),
            })
            .collect()
    }

    fn resolve(&self, token: &str) -> Option<&RegisteredCommand> {
        self.commands
            .iter()
            .find(|registered| registered.descriptor.matches(token))
    }
}

/// Output line used for unknown commands.
pub fn command_not_found_message(name: &str) -> String {
    format!("Command not found: {name}. Type 'help' to see available commands.")
}

/// Result of submitting one input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Blank input; nothing changed.
    Ignored,
    /// The transcript was cleared.
    Cleared,
    /// A transcript entry was appended.
    Recorded(TerminalHistoryEntry),
}

/// Result of routing one key through [`TerminalSession::handle_key`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyOutcome {
    /// The prompt line changed.
    Edited,
    /// The prompt line was submitted.
    Submitted(SubmitOutcome),
    /// A history entry (or the empty line) was recalled into the prompt.
    Recalled(String),
    /// The completion suffix was appended to the prompt.
    Completed(String),
    /// The transcript was cleared.
    Cleared,
    /// The prompt line was abandoned.
    Interrupted,
    /// The terminal theme changed.
    ThemeChanged(TerminalTheme),
    /// The key had no effect.
    Ignored,
}

/// One interactive terminal: transcript log, command recall, prompt editor, and theme.
pub struct TerminalSession {
    registry: Rc<CommandRegistry>,
    log: Vec<TerminalHistoryEntry>,
    history: CommandHistory,
    editor: LineEditor,
    theme: TerminalTheme,
    clock: EntryClock,
}

impl TerminalSession {
    /// Creates a session over a shared command table.
    pub fn new(registry: Rc<CommandRegistry>) -> Self {
        Self {
            registry,
            log: Vec::new(),
            history: CommandHistory::default(),
            editor: LineEditor::default(),
            theme: TerminalTheme::default(),
            clock: EntryClock::default(),
        }
    }

    /// Sets the initial theme.
    pub fn with_theme(mut self, theme: TerminalTheme) -> Self {
        self.theme = theme;
        self
    }

    /// Transcript entries in insertion order.
    pub fn log(&self) -> &[TerminalHistoryEntry] {
        &self.log
    }

    /// Recall list and cursor.
    pub fn command_history(&self) -> &CommandHistory {
        &self.history
    }

    /// Prompt line editor.
    pub fn editor(&self) -> &LineEditor {
        &self.editor
    }

    /// Shared command table.
    pub fn registry(&self) -> &CommandRegistry {
        &self.registry
    }

    /// Active terminal theme.
    pub fn theme(&self) -> TerminalTheme {
        self.theme
    }

    /// Switches the terminal theme.
    pub fn set_theme(&mut self, theme: TerminalTheme) {
        self.theme = theme;
    }

    /// Switches to the next theme in cycle order and returns it.
    pub fn cycle_theme(&mut self) -> TerminalTheme {
        self.theme = self.theme.next();
        self.theme
    }

    /// Appends an informational entry that did not come from a command (for example, a greeting).
    pub fn info(&mut self, text: impl Into<String>) {
        self.append(String::new(), text.into(), HistoryEntryKind::Info);
    }

    /// Empties the transcript. Command recall is untouched.
    pub fn clear(&mut self) {
        self.log.clear();
    }

    /// Parses and executes one input line.
    ///
    /// Never fails: unknown commands and handler errors are recorded as error entries.
    pub fn submit(&mut self, line: &str) -> SubmitOutcome {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return SubmitOutcome::Ignored;
        }

        let mut tokens = trimmed.split_whitespace();
        let name = tokens.next().unwrap_or_default().to_lowercase();
        let args = tokens.map(str::to_string).collect::<Vec<_>>();

        let outcome = if name == CLEAR_COMMAND {
            self.clear();
            SubmitOutcome::Cleared
        } else {
            let (output, kind) = self.execute(&name, &args);
            tracing::debug!(command = %name, ?kind, "terminal command executed");
            SubmitOutcome::Recorded(self.append(line.to_string(), output, kind))
        };

        self.history.push(line);
        outcome
    }

    /// Moves the recall cursor and returns the recalled line.
    pub fn navigate_history(&mut self, direction: HistoryDirection) -> String {
        self.history.navigate(direction)
    }

    /// Records an abandoned prompt line (`^C`) and clears the editor.
    pub fn interrupt(&mut self) {
        let line = self.editor.take();
        self.history.reset_cursor();
        self.append(format!("{line}^C"), String::new(), HistoryEntryKind::Command);
    }

    /// Completion candidates for a command-name prefix.
    pub fn complete(&self, prefix: &str) -> Vec<CompletionItem> {
        self.registry.complete(prefix)
    }

    /// Remaining suffix of the single command that completes `line`, if unambiguous.
    pub fn completion_hint(&self, line: &str) -> Option<String> {
        let prefix = line.trim_start();
        if prefix.is_empty() || prefix.contains(char::is_whitespace) {
            return None;
        }
        let folded = prefix.to_lowercase();
        let mut matches = self.registry.complete(&folded).into_iter();
        match (matches.next(), matches.next()) {
            (Some(only), None) if only.value != folded => {
                Some(only.value[folded.len()..].to_string())
            }
            _ => None,
        }
    }

    /// Routes one decoded key to the editor, interpreter, or recall list.
    pub fn handle_key(&mut self, key: KeyInput) -> KeyOutcome {
        match key {
            KeyInput::Enter => {
                let line = self.editor.take();
                KeyOutcome::Submitted(self.submit(&line))
            }
            KeyInput::Up | KeyInput::Down => {
                let direction = if key == KeyInput::Up {
                    HistoryDirection::Up
                } else {
                    HistoryDirection::Down
                };
                let recalled = self.history.navigate(direction);
                self.editor.replace(&recalled);
                KeyOutcome::Recalled(recalled)
            }
            KeyInput::Tab => match self.completion_hint(&self.editor.text()) {
                Some(suffix) => {
                    self.editor.move_end();
                    self.editor.insert_str(&suffix);
                    KeyOutcome::Completed(suffix)
                }
                None => KeyOutcome::Ignored,
            },
            KeyInput::ClearScreen => {
                self.clear();
                KeyOutcome::Cleared
            }
            KeyInput::Interrupt => {
                self.interrupt();
                KeyOutcome::Interrupted
            }
            KeyInput::CycleTheme => KeyOutcome::ThemeChanged(self.cycle_theme()),
            other => {
                if self.editor.apply(other) {
                    KeyOutcome::Edited
                } else {
                    KeyOutcome::Ignored
                }
            }
        }
    }

    fn execute(&mut self, name: &str, args: &[String]) -> (String, HistoryEntryKind) {
        let Some(registered) = self.registry.resolve(name).cloned() else {
            return (command_not_found_message(name), HistoryEntryKind::Error);
        };

        let context = CommandContext {
            name: registered.descriptor.name.as_str(),
            args,
            theme: self.theme,
            registry: &self.registry,
        };
        match (registered.handler)(&context) {
            Ok(result) => {
                if let Some(theme) = result.theme {
                    self.theme = theme;
                }
                (result.output, HistoryEntryKind::Success)
            }
            Err(err) => (
                format!("Error executing command: {}", err.message),
                HistoryEntryKind::Error,
            ),
        }
    }

    fn append(
        &mut self,
        input: String,
        output: String,
        kind: HistoryEntryKind,
    ) -> TerminalHistoryEntry {
        let entry = TerminalHistoryEntry {
            input,
            output,
            timestamp_ms: self.clock.stamp(),
            kind,
        };
        self.log.push(entry.clone());
        entry
    }
}
