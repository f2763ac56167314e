//! Portfolio terminal: command table registration and session bootstrap.

use std::rc::Rc;

use system_shell::{CommandHandler, CommandRegistry, TerminalSession};
use system_shell_contract::{
    CommandArgSpec, CommandDescriptor, CommandExample, CommandName, HelpDoc, ShellError,
    ShellErrorCode, TerminalTheme,
};

use crate::profile::ProfileData;

mod commands;

/// One command ready to be registered.
pub(crate) struct CommandRegistration {
    pub(crate) descriptor: CommandDescriptor,
    pub(crate) handler: CommandHandler,
}

/// Builds the portfolio command table in listing order.
pub fn build_command_registry(profile: Rc<ProfileData>) -> CommandRegistry {
    let mut registry = CommandRegistry::new();
    for registration in commands::builtin_registrations(profile) {
        registry.register(registration.descriptor, registration.handler);
    }
    tracing::debug!(commands = registry.len(), "terminal command table built");
    registry
}

/// Text shown when a terminal window first opens.
pub fn greeting(profile: &ProfileData) -> String {
    format!(
        "Welcome to {}'s Interactive Terminal\nType 'help' for commands | Ctrl+T to change theme | Ctrl+L to clear",
        profile.bio.name
    )
}

/// Creates a greeted terminal session over the portfolio commands.
pub fn new_terminal_session(profile: Rc<ProfileData>, theme: TerminalTheme) -> TerminalSession {
    let greeting = greeting(&profile);
    let mut session =
        TerminalSession::new(Rc::new(build_command_registry(profile))).with_theme(theme);
    session.info(greeting);
    session
}

fn descriptor(
    name: &str,
    aliases: &[&str],
    summary: &str,
    usage: &str,
    args: Vec<CommandArgSpec>,
    examples: Vec<CommandExample>,
) -> CommandDescriptor {
    CommandDescriptor {
        name: CommandName::new(name),
        aliases: aliases.iter().map(|alias| alias.to_string()).collect(),
        args,
        help: HelpDoc {
            summary: summary.to_string(),
            usage: usage.to_string(),
            examples,
        },
    }
}

fn example(command: &str, summary: &str) -> CommandExample {
    CommandExample {
        command: command.to_string(),
        summary: summary.to_string(),
    }
}

fn usage_error(message: impl Into<String>) -> ShellError {
    ShellError::new(ShellErrorCode::Usage, message)
}

fn unavailable(message: impl Into<String>) -> ShellError {
    ShellError::new(ShellErrorCode::Unavailable, message)
}
