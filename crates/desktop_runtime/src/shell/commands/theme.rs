use std::rc::Rc;

use system_shell::CommandContext;
use system_shell_contract::{CommandArgSpec, CommandResult, ShellError, TerminalTheme};

use super::super::{descriptor, example, usage_error, CommandRegistration};

pub(super) fn theme_registration() -> CommandRegistration {
    CommandRegistration {
        descriptor: descriptor(
            "theme",
            &[],
            "Show or change the terminal theme",
            "theme [dark|matrix|retro|synthwave]",
            vec![CommandArgSpec::optional("name", "Theme to switch to.")],
            vec![example("theme matrix", "Switch to the green-on-black theme.")],
        ),
        handler: Rc::new(theme),
    }
}

fn available_themes() -> String {
    TerminalTheme::ALL
        .into_iter()
        .map(TerminalTheme::id)
        .collect::<Vec<_>>()
        .join(", ")
}

fn theme(context: &CommandContext<'_>) -> Result<CommandResult, ShellError> {
    match context.args {
        [] => Ok(CommandResult::text(format!(
            "Current theme: {}\nAvailable themes: {}\nUsage: theme <name>",
            context.theme.id(),
            available_themes()
        ))),
        [name] => {
            let theme = TerminalTheme::from_id(name).ok_or_else(|| {
                usage_error(format!(
                    "Unknown theme '{name}'. Available themes: {}",
                    available_themes()
                ))
            })?;
            Ok(CommandResult::text(format!("Theme set to {}", theme.id())).with_theme(theme))
        }
        _ => Err(usage_error("usage: theme [name]")),
    }
}
