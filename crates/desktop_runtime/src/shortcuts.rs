//! Desktop keyboard shortcuts resolved to reducer actions.

use crate::apps::app_catalog;
use crate::model::{AppId, DesktopState, OsType};
use crate::reducer::DesktopAction;

/// Modifier state of a desktop key press. Shortcuts match modifiers exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ShortcutModifiers {
    pub ctrl: bool,
    pub alt: bool,
    pub shift: bool,
    pub meta: bool,
}

impl ShortcutModifiers {
    /// Primary modifier for a skin: Meta on macOS, Ctrl elsewhere.
    pub fn primary(os_type: OsType) -> Self {
        if os_type == OsType::Mac {
            Self {
                meta: true,
                ..Self::default()
            }
        } else {
            Self {
                ctrl: true,
                ..Self::default()
            }
        }
    }

    fn with_shift(self) -> Self {
        Self {
            shift: true,
            ..self
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShortcutTarget {
    CloseFocused,
    MinimizeFocused,
    MaximizeFocused,
    ToggleApp(AppId),
}

/// One registered binding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shortcut {
    pub id: String,
    pub description: String,
    pub key: String,
    pub modifiers: ShortcutModifiers,
    pub target: ShortcutTarget,
}

impl Shortcut {
    fn matches(&self, key: &str, modifiers: ShortcutModifiers) -> bool {
        self.key.eq_ignore_ascii_case(key) && self.modifiers == modifiers
    }
}

/// Bindings active for a skin, in match priority order.
pub fn shortcuts(os_type: OsType) -> Vec<Shortcut> {
    let primary = ShortcutModifiers::primary(os_type);
    let mut bindings = vec![Shortcut {
        id: "close-window".to_string(),
        description: "Close active window".to_string(),
        key: "Escape".to_string(),
        modifiers: ShortcutModifiers::default(),
        target: ShortcutTarget::CloseFocused,
    }];

    bindings.extend(app_catalog().iter().filter_map(|manifest| {
        manifest.shortcut.map(|key| Shortcut {
            id: format!("open-{}", manifest.app_id),
            description: format!("Open {}", manifest.title),
            key: key.to_string(),
            modifiers: primary,
            target: ShortcutTarget::ToggleApp(manifest.app_id),
        })
    }));

    bindings.push(Shortcut {
        id: "minimize-window".to_string(),
        description: "Minimize active window".to_string(),
        key: "m".to_string(),
        modifiers: primary,
        target: ShortcutTarget::MinimizeFocused,
    });
    bindings.push(Shortcut {
        id: "maximize-window".to_string(),
        description: "Maximize active window".to_string(),
        key: "m".to_string(),
        modifiers: primary.with_shift(),
        target: ShortcutTarget::MaximizeFocused,
    });
    bindings
}

/// Resolves a key press against the skin's bindings.
///
/// Window-targeting shortcuts resolve to nothing when no open window is focused.
pub fn resolve_shortcut(
    state: &DesktopState,
    key: &str,
    modifiers: ShortcutModifiers,
) -> Option<DesktopAction> {
    let shortcut = shortcuts(state.os_type)
        .into_iter()
        .find(|shortcut| shortcut.matches(key, modifiers))?;
    let focused = state.focused_window().map(|window| window.id);
    let action = match shortcut.target {
        ShortcutTarget::ToggleApp(app_id) => DesktopAction::ToggleWindow { app_id },
        ShortcutTarget::CloseFocused => DesktopAction::CloseWindow { app_id: focused? },
        ShortcutTarget::MinimizeFocused => DesktopAction::MinimizeWindow { app_id: focused? },
        ShortcutTarget::MaximizeFocused => DesktopAction::MaximizeWindow { app_id: focused? },
    };
    tracing::debug!(shortcut = %shortcut.id, "shortcut matched");
    Some(action)
}
