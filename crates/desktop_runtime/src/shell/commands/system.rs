use std::rc::Rc;

use chrono::{Local, NaiveDateTime};
use system_shell::CommandContext;
use system_shell_contract::{CommandArgSpec, CommandDescriptor, CommandResult, ShellError};

use super::super::{descriptor, example, usage_error, CommandRegistration};

/// Column width of command names in the `help` listing.
const HELP_NAME_WIDTH: usize = 12;

pub(super) fn help_registration() -> CommandRegistration {
    CommandRegistration {
        descriptor: descriptor(
            "help",
            &["?"],
            "List available commands",
            "help [command]",
            vec![CommandArgSpec::optional(
                "command",
                "Command name or alias to describe.",
            )],
            vec![example("help theme", "Show usage for the theme command.")],
        ),
        handler: Rc::new(help),
    }
}

fn help(context: &CommandContext<'_>) -> Result<CommandResult, ShellError> {
    match context.args {
        [] => {
            let listing = context
                .descriptors()
                .map(|descriptor| {
                    format!(
                        "{:<width$} - {}",
                        descriptor.name.as_str(),
                        descriptor.help.summary,
                        width = HELP_NAME_WIDTH
                    )
                })
                .collect::<Vec<_>>()
                .join("\n");
            Ok(CommandResult::text(format!(
                "Available commands:\n\n{listing}"
            )))
        }
        [target] => context
            .descriptor(target)
            .map(|descriptor| CommandResult::text(render_help(descriptor)))
            .ok_or_else(|| usage_error(format!("No help entry for '{target}'"))),
        _ => Err(usage_error("usage: help [command]")),
    }
}

fn render_help(descriptor: &CommandDescriptor) -> String {
    let mut out = format!(
        "{} - {}\n\nUsage: {}",
        descriptor.name, descriptor.help.summary, descriptor.help.usage
    );
    if !descriptor.aliases.is_empty() {
        out.push_str(&format!("\nAliases: {}", descriptor.aliases.join(", ")));
    }
    if !descriptor.help.examples.is_empty() {
        out.push_str("\n\nExamples:");
        for example in &descriptor.help.examples {
            out.push_str(&format!("\n  {:<22} {}", example.command, example.summary));
        }
    }
    out
}

pub(super) fn clear_registration() -> CommandRegistration {
    CommandRegistration {
        descriptor: descriptor(
            "clear",
            &[],
            "Clear the terminal screen",
            "clear",
            Vec::new(),
            Vec::new(),
        ),
        // The session intercepts `clear` before dispatch.
        handler: Rc::new(|_: &CommandContext<'_>| Ok(CommandResult::text(""))),
    }
}

pub(super) fn time_registration() -> CommandRegistration {
    CommandRegistration {
        descriptor: descriptor(
            "time",
            &["date"],
            "Show the current date and time",
            "time",
            Vec::new(),
            Vec::new(),
        ),
        handler: Rc::new(|_: &CommandContext<'_>| {
            Ok(CommandResult::text(format_time(Local::now().naive_local())))
        }),
    }
}

fn format_time(now: NaiveDateTime) -> String {
    now.format("%A, %B %-d, %Y %H:%M:%S").to_string()
}
