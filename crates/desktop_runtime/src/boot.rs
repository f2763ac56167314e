//! Boot sequencing, per-skin shell layout, and terminal prompt selection.

use std::time::Duration;

use crate::apps::dock_apps;
use crate::model::{DesktopState, InteractionState, OsType, PreferredOs};
use crate::reducer::{reduce_desktop, DesktopAction, ReducerError, RuntimeEffect};

/// How long the skin's boot screen is shown.
pub fn boot_screen_duration(os_type: OsType) -> Duration {
    Duration::from_millis(match os_type {
        OsType::Mac | OsType::Ios => 3000,
        OsType::Android => 3500,
        OsType::Windows => 4000,
    })
}

/// Delay before boot completes. Reduced motion skips the boot screen.
pub fn boot_delay(os_type: OsType, motion_reduced: bool) -> Duration {
    if motion_reduced {
        Duration::ZERO
    } else {
        boot_screen_duration(os_type)
    }
}

/// Chrome drawn around the windows for a skin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellLayout {
    /// Desktop with a bottom dock (macOS).
    DesktopWithDock,
    /// Desktop with a taskbar (Windows).
    DesktopWithTaskbar,
    /// App grid with full-screen windows (iOS, Android).
    HomeScreen,
}

impl ShellLayout {
    pub fn for_os(os_type: OsType) -> Self {
        match os_type {
            OsType::Mac => Self::DesktopWithDock,
            OsType::Windows => Self::DesktopWithTaskbar,
            OsType::Ios | OsType::Android => Self::HomeScreen,
        }
    }

    /// Whether windows fill the screen and cannot be dragged or resized.
    pub fn full_screen_windows(self) -> bool {
        matches!(self, Self::HomeScreen)
    }

    pub fn launcher_name(self) -> &'static str {
        match self {
            Self::DesktopWithDock => "Dock",
            Self::DesktopWithTaskbar => "Taskbar",
            Self::HomeScreen => "Home screen",
        }
    }

    /// Launcher strip: pinned app titles in catalog order.
    pub fn launcher_line(self) -> String {
        let titles = dock_apps()
            .iter()
            .map(|manifest| manifest.title)
            .collect::<Vec<_>>()
            .join(" | ");
        format!("{}: {titles}", self.launcher_name())
    }
}

/// Terminal prompt for a skin.
pub fn prompt(os_type: OsType, handle: &str) -> String {
    match os_type {
        OsType::Windows => "C:\\>".to_string(),
        other => format!("{handle}@{other} ~ $"),
    }
}

/// Resolves the skin from preferences and host detection and enters the boot screen.
///
/// The host completes boot with [`DesktopAction::CompleteBoot`] after [`boot_delay`].
pub fn start_boot(
    state: &mut DesktopState,
    interaction: &mut InteractionState,
    detected: Option<OsType>,
) -> Result<Vec<RuntimeEffect>, ReducerError> {
    let os_type = resolve_os(state.preferences.preferred_os, detected);
    let mut effects = reduce_desktop(state, interaction, DesktopAction::SetOsType { os_type })?;
    effects.extend(reduce_desktop(state, interaction, DesktopAction::StartBoot)?);
    Ok(effects)
}

fn resolve_os(preferred: PreferredOs, detected: Option<OsType>) -> OsType {
    let os_type = preferred.resolve(detected);
    tracing::debug!(?preferred, ?detected, %os_type, "resolved os skin");
    os_type
}
