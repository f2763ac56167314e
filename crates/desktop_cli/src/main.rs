//! Native host for the portfolio desktop: boots an OS skin, opens the Terminal window and drives
//! the terminal session over stdin/stdout.

use std::{
    fs,
    io::{self, BufRead, Write},
    path::{Path, PathBuf},
    thread,
};

use anyhow::{bail, Context, Result};
use clap::Parser;
use desktop_runtime::{
    boot::{self, ShellLayout},
    run_queued_effects, AppId, DesktopAction, DesktopPreferences, DesktopRuntime,
    DesktopState, EffectHost, OsType, PreferredOs, ProfileData, RuntimeEffect,
};
use system_shell::SubmitOutcome;
use system_shell_contract::TerminalTheme;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

const EXIT_COMMAND: &str = "exit";

#[derive(Debug, Parser)]
#[command(
    name = "desktop_cli",
    version,
    about = "Portfolio desktop with an interactive terminal"
)]
struct Args {
    /// OS skin to boot: auto, mac, windows, ios or android
    #[arg(long)]
    os: Option<PreferredOs>,

    /// Profile JSON replacing the built-in portfolio data
    #[arg(long)]
    profile: Option<PathBuf>,

    /// Preferences JSON, rewritten whenever a preference changes (for example via --os)
    #[arg(long)]
    prefs: Option<PathBuf>,

    /// Skip the boot screen delay
    #[arg(long)]
    skip_boot: bool,

    /// Initial terminal theme: dark, matrix, retro or synthwave
    #[arg(long, value_parser = parse_theme)]
    theme: Option<TerminalTheme>,
}

fn parse_theme(raw: &str) -> std::result::Result<TerminalTheme, String> {
    TerminalTheme::from_id(raw).ok_or_else(|| {
        let known: Vec<&str> = TerminalTheme::ALL.iter().map(|theme| theme.id()).collect();
        format!("unknown theme '{raw}' (expected {})", known.join(", "))
    })
}

/// Skin reported by the host platform, if it maps to one.
fn detect_os() -> Option<OsType> {
    match std::env::consts::OS {
        "macos" => Some(OsType::Mac),
        "windows" => Some(OsType::Windows),
        "ios" => Some(OsType::Ios),
        "android" => Some(OsType::Android),
        _ => None,
    }
}

/// Missing file means first run; unreadable or malformed JSON is an error.
fn load_preferences(path: Option<&Path>) -> Result<DesktopPreferences> {
    let Some(path) = path else {
        return Ok(DesktopPreferences::default());
    };
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no stored preferences");
        return Ok(DesktopPreferences::default());
    }
    let raw = fs::read_to_string(path)
        .with_context(|| format!("reading preferences {}", path.display()))?;
    DesktopPreferences::from_json(&raw)
        .with_context(|| format!("parsing preferences {}", path.display()))
}

fn load_profile(path: Option<&Path>) -> Result<ProfileData> {
    let Some(path) = path else {
        return Ok(ProfileData::default());
    };
    let raw =
        fs::read_to_string(path).with_context(|| format!("reading profile {}", path.display()))?;
    ProfileData::from_json(&raw).with_context(|| format!("parsing profile {}", path.display()))
}

/// Carries out runtime effects for a text host: sounds and focus become log lines, preference
/// changes are written back to the preferences file.
struct StdioHost {
    prefs_path: Option<PathBuf>,
}

impl StdioHost {
    fn persist(&self, preferences: &DesktopPreferences) -> Result<()> {
        let Some(path) = self.prefs_path.as_deref() else {
            return Ok(());
        };
        let json = preferences.to_json().context("encoding preferences")?;
        fs::write(path, json).with_context(|| format!("writing preferences {}", path.display()))
    }
}

impl EffectHost for StdioHost {
    fn run_runtime_effect(&mut self, state: &DesktopState, effect: RuntimeEffect) {
        match effect {
            RuntimeEffect::FocusWindowInput(app_id) => {
                tracing::debug!(app = %app_id, "focus window input");
            }
            RuntimeEffect::PlaySound(sound) => {
                tracing::debug!(sound, "play sound");
            }
            RuntimeEffect::PersistPreferences => {
                if let Err(err) = self.persist(&state.preferences) {
                    tracing::warn!("failed to persist preferences: {err:#}");
                }
            }
        }
    }
}

/// Stores an OS preference given on the command line; the host writes it back to `--prefs`.
fn apply_os_preference(
    runtime: &mut DesktopRuntime,
    host: &mut impl EffectHost,
    preferred_os: PreferredOs,
) -> Result<()> {
    runtime.dispatch(DesktopAction::SetPreferredOs {
        preferred_os,
        detected: detect_os(),
    })?;
    run_queued_effects(runtime, host);
    Ok(())
}

/// Boots the resolved skin, waiting out the boot screen unless `skip_boot` is set.
fn boot_desktop(runtime: &mut DesktopRuntime, skip_boot: bool) -> Result<()> {
    runtime.start_boot(detect_os())?;
    let state = runtime.state();
    let delay = boot::boot_delay(state.os_type, state.preferences.motion_reduced);
    if !skip_boot && !delay.is_zero() {
        tracing::debug!(os = %state.os_type, ?delay, "showing boot screen");
        thread::sleep(delay);
    }
    runtime.dispatch(DesktopAction::CompleteBoot)?;
    Ok(())
}

/// Reads lines until EOF or `exit`, echoing each recorded entry's output.
fn run_repl(
    runtime: &mut DesktopRuntime,
    host: &mut impl EffectHost,
    mut input: impl BufRead,
    mut out: impl Write,
) -> Result<()> {
    loop {
        write!(out, "{} ", runtime.prompt())?;
        out.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            writeln!(out)?;
            return Ok(());
        }
        let line = line.trim_end_matches(['\r', '\n']);
        if line.trim() == EXIT_COMMAND {
            return Ok(());
        }

        let Some(terminal) = runtime.terminal_mut() else {
            bail!("terminal session is not running");
        };
        match terminal.submit(line) {
            SubmitOutcome::Recorded(entry) if !entry.output.is_empty() => {
                writeln!(out, "{}", entry.output)?;
            }
            SubmitOutcome::Cleared => {
                // ANSI clear screen and home cursor.
                write!(out, "\x1b[2J\x1b[H")?;
            }
            SubmitOutcome::Recorded(_) | SubmitOutcome::Ignored => {}
        }
        run_queued_effects(runtime, host);
    }
}

/// Opens the Terminal window and prints the session greeting.
fn open_terminal(runtime: &mut DesktopRuntime, out: &mut impl Write) -> Result<()> {
    runtime.dispatch(DesktopAction::OpenWindow {
        app_id: AppId::Terminal,
    })?;
    let Some(terminal) = runtime.terminal() else {
        bail!("terminal session did not start");
    };
    for entry in terminal.log() {
        writeln!(out, "{}", entry.output)?;
    }
    writeln!(out)?;
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let args = Args::parse();

    let preferences = load_preferences(args.prefs.as_deref())?;
    let profile = load_profile(args.profile.as_deref())?;

    let mut runtime = DesktopRuntime::new(preferences, profile)
        .with_terminal_theme(args.theme.unwrap_or_default());
    let mut host = StdioHost {
        prefs_path: args.prefs,
    };

    if let Some(preferred_os) = args.os {
        apply_os_preference(&mut runtime, &mut host, preferred_os)?;
    }
    boot_desktop(&mut runtime, args.skip_boot)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    writeln!(out, "{}", ShellLayout::for_os(runtime.state().os_type).launcher_line())?;
    open_terminal(&mut runtime, &mut out)?;
    run_queued_effects(&mut runtime, &mut host);

    run_repl(&mut runtime, &mut host, io::stdin().lock(), &mut out)
}
