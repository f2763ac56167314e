use std::rc::Rc;

use rand::seq::SliceRandom;
use system_shell::CommandContext;
use system_shell_contract::{CommandArgSpec, CommandResult, ShellError};

use super::super::{descriptor, example, unavailable, usage_error, CommandRegistration};
use crate::profile::ProfileData;

/// Reports the simulated `weather` command picks from.
pub(crate) const WEATHER_REPORTS: [&str; 5] = [
    "Sunny, 24°C. Perfect weather for coding by the window.",
    "Cloudy, 18°C. Good day to refactor something.",
    "Light rain, 15°C. Ideal for reading documentation.",
    "Thunderstorms, 21°C. Remember to commit often.",
    "Clear night, 12°C. The stars align for a bug-free deploy.",
];

const ASCII_ART: &str = r"
   ____            _    __       _ _
  |  _ \ ___  _ __| |_ / _| ___ | (_) ___
  | |_) / _ \| '__| __| |_ / _ \| | |/ _ \
  |  __/ (_) | |  | |_|  _| (_) | | | (_) |
  |_|   \___/|_|   \__|_|  \___/|_|_|\___/
";

/// Longest text `banner` accepts.
const MAX_BANNER_CHARS: usize = 60;

fn pick<'a>(pool: &'a [String], empty_message: &str) -> Result<&'a str, ShellError> {
    pool.choose(&mut rand::thread_rng())
        .map(String::as_str)
        .ok_or_else(|| unavailable(empty_message))
}

pub(super) fn weather_registration() -> CommandRegistration {
    CommandRegistration {
        descriptor: descriptor(
            "weather",
            &[],
            "Check the (simulated) weather",
            "weather",
            Vec::new(),
            Vec::new(),
        ),
        handler: Rc::new(|_: &CommandContext<'_>| {
            let report = WEATHER_REPORTS
                .choose(&mut rand::thread_rng())
                .copied()
                .unwrap_or_default();
            Ok(CommandResult::text(report))
        }),
    }
}

pub(super) fn quote_registration(profile: Rc<ProfileData>) -> CommandRegistration {
    CommandRegistration {
        descriptor: descriptor(
            "quote",
            &[],
            "Show a random programming quote",
            "quote",
            Vec::new(),
            Vec::new(),
        ),
        handler: Rc::new(move |_: &CommandContext<'_>| {
            pick(&profile.quotes, "No quotes configured.").map(CommandResult::text)
        }),
    }
}

pub(super) fn fact_registration(profile: Rc<ProfileData>) -> CommandRegistration {
    CommandRegistration {
        descriptor: descriptor(
            "fact",
            &[],
            "Show a random tech fact",
            "fact",
            Vec::new(),
            Vec::new(),
        ),
        handler: Rc::new(move |_: &CommandContext<'_>| {
            pick(&profile.facts, "No facts configured.").map(CommandResult::text)
        }),
    }
}

pub(super) fn funfact_registration(profile: Rc<ProfileData>) -> CommandRegistration {
    CommandRegistration {
        descriptor: descriptor(
            "funfact",
            &[],
            "Show a random fun fact about me",
            "funfact",
            Vec::new(),
            Vec::new(),
        ),
        handler: Rc::new(move |_: &CommandContext<'_>| {
            pick(&profile.fun_facts, "No fun facts configured.").map(CommandResult::text)
        }),
    }
}

pub(super) fn ascii_art_registration() -> CommandRegistration {
    CommandRegistration {
        descriptor: descriptor(
            "ascii-art",
            &["ascii"],
            "Display ASCII art",
            "ascii-art",
            Vec::new(),
            Vec::new(),
        ),
        handler: Rc::new(|_: &CommandContext<'_>| {
            Ok(CommandResult::text(ASCII_ART.trim_matches('\n')))
        }),
    }
}

pub(super) fn fortune_registration(profile: Rc<ProfileData>) -> CommandRegistration {
    CommandRegistration {
        descriptor: descriptor(
            "fortune",
            &[],
            "Get your fortune told",
            "fortune",
            Vec::new(),
            Vec::new(),
        ),
        handler: Rc::new(move |_: &CommandContext<'_>| {
            pick(&profile.fortunes, "No fortunes configured.").map(CommandResult::text)
        }),
    }
}

pub(super) fn banner_registration(profile: Rc<ProfileData>) -> CommandRegistration {
    CommandRegistration {
        descriptor: descriptor(
            "banner",
            &[],
            "Display a text banner",
            "banner [text...]",
            vec![CommandArgSpec {
                name: "text".to_string(),
                summary: "Words to display; defaults to my name.".to_string(),
                required: false,
                repeatable: true,
            }],
            vec![example("banner hello world", "Box the words 'hello world'.")],
        ),
        handler: Rc::new(move |context: &CommandContext<'_>| {
            let text = if context.args.is_empty() {
                profile.bio.name.clone()
            } else {
                context.args.join(" ")
            };
            if text.chars().count() > MAX_BANNER_CHARS {
                return Err(usage_error(format!(
                    "Banner text is limited to {MAX_BANNER_CHARS} characters."
                )));
            }
            Ok(CommandResult::text(render_banner(&text)))
        }),
    }
}

fn render_banner(text: &str) -> String {
    let border = format!("+{}+", "-".repeat(text.chars().count() + 4));
    format!("{border}\n|  {text}  |\n{border}")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use system_shell::TerminalSession;
    use system_shell_contract::HistoryEntryKind;

    use super::*;
    use crate::shell::build_command_registry;

    fn session_with(profile: ProfileData) -> TerminalSession {
        TerminalSession::new(Rc::new(build_command_registry(Rc::new(profile))))
    }

    fn last_output(session: &mut TerminalSession, line: &str) -> (String, HistoryEntryKind) {
        session.submit(line);
        let entry = session.log().last().expect("entry");
        (entry.output.clone(), entry.kind)
    }

    #[test]
    fn random_commands_pick_from_their_pools() {
        let profile = ProfileData::default();
        let mut session = session_with(profile.clone());
        for _ in 0..10 {
            let (quote, _) = last_output(&mut session, "quote");
            assert!(profile.quotes.contains(&quote));
            let (fact, _) = last_output(&mut session, "fact");
            assert!(profile.facts.contains(&fact));
            let (fun_fact, _) = last_output(&mut session, "funfact");
            assert!(profile.fun_facts.contains(&fun_fact));
            let (fortune, _) = last_output(&mut session, "fortune");
            assert!(profile.fortunes.contains(&fortune));
            let (weather, _) = last_output(&mut session, "weather");
            assert!(WEATHER_REPORTS.contains(&weather.as_str()));
        }
    }

    #[test]
    fn empty_pool_reports_error_entry() {
        let profile = ProfileData {
            quotes: Vec::new(),
            ..ProfileData::default()
        };
        let mut session = session_with(profile);
        assert_eq!(
            last_output(&mut session, "quote"),
            (
                "Error executing command: No quotes configured.".to_string(),
                HistoryEntryKind::Error
            )
        );
    }

    #[test]
    fn banner_boxes_text_and_defaults_to_name() {
        let mut session = session_with(ProfileData::default());
        let (output, _) = last_output(&mut session, "banner hi there");
        assert_eq!(output, "+------------+\n|  hi there  |\n+------------+");
        let (output, _) = last_output(&mut session, "banner");
        assert!(output.contains("|  John Doe  |"));
    }

    #[test]
    fn banner_rejects_long_text() {
        let mut session = session_with(ProfileData::default());
        let long = "x".repeat(MAX_BANNER_CHARS + 1);
        let (_, kind) = last_output(&mut session, &format!("banner {long}"));
        assert_eq!(kind, HistoryEntryKind::Error);
    }

    #[test]
    fn ascii_alias_renders_art() {
        let mut session = session_with(ProfileData::default());
        let (output, kind) = last_output(&mut session, "ascii");
        assert_eq!(kind, HistoryEntryKind::Success);
        assert!(output.contains("|_|   \\___/"));
    }
}
