//! Desktop window registry, OS skin, boot, and preference state.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::apps::{app_manifest, AppManifest};

/// Stable identity of a registered application window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AppId {
    /// Terminal REPL.
    Terminal,
    /// Project showcase.
    Projects,
    /// Biography.
    About,
    /// Contact details.
    Contact,
    /// Desktop preferences.
    Settings,
}

impl AppId {
    /// Every app id in catalog order.
    pub const ALL: [AppId; 5] = [
        Self::Terminal,
        Self::Projects,
        Self::About,
        Self::Contact,
        Self::Settings,
    ];

    /// Canonical string id.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Terminal => "terminal",
            Self::Projects => "projects",
            Self::About => "about",
            Self::Contact => "contact",
            Self::Settings => "settings",
        }
    }
}

impl fmt::Display for AppId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing a string that names no registered app.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown app id: {0}")]
pub struct UnknownAppId(pub String);

impl FromStr for AppId {
    type Err = UnknownAppId;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|app_id| app_id.as_str().eq_ignore_ascii_case(raw.trim()))
            .ok_or_else(|| UnknownAppId(raw.to_string()))
    }
}

/// Top-left window offset in screen pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct WindowPosition {
    pub x: i32,
    pub y: i32,
}

impl WindowPosition {
    /// Returns the position translated by a pointer delta.
    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// Window extent in screen pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct WindowSize {
    pub width: i32,
    pub height: i32,
}

impl WindowSize {
    pub fn clamped_min(self, min_width: i32, min_height: i32) -> Self {
        Self {
            width: self.width.max(min_width),
            height: self.height.max(min_height),
        }
    }
}

/// One registry entry describing an application's window state.
///
/// A window that is not open is never focused, maximized, or minimized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppWindow {
    pub id: AppId,
    pub title: String,
    pub icon: String,
    /// Content component rendered inside the window frame.
    pub component: String,
    pub is_open: bool,
    pub is_focused: bool,
    pub is_maximized: bool,
    pub is_minimized: bool,
    pub z_index: u32,
    /// Meaningful only while not maximized.
    pub position: WindowPosition,
    /// Meaningful only while not maximized.
    pub size: WindowSize,
}

impl AppWindow {
    /// Creates a closed window from its catalog manifest.
    pub fn from_manifest(manifest: &AppManifest) -> Self {
        Self {
            id: manifest.app_id,
            title: manifest.title.to_string(),
            icon: manifest.icon.to_string(),
            component: manifest.component.to_string(),
            is_open: false,
            is_focused: false,
            is_maximized: false,
            is_minimized: false,
            z_index: 0,
            position: manifest.default_position,
            size: manifest.default_size,
        }
    }

    /// Open and not minimized.
    pub fn is_visible(&self) -> bool {
        self.is_open && !self.is_minimized
    }
}

/// Resolved OS skin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OsType {
    /// macOS desktop with a dock.
    #[default]
    Mac,
    /// Windows desktop with a taskbar and `C:\>` prompt.
    Windows,
    /// iOS home screen.
    Ios,
    /// Android home screen.
    Android,
}

impl OsType {
    /// Every skin, desktop skins first.
    pub const ALL: [OsType; 4] = [Self::Mac, Self::Windows, Self::Ios, Self::Android];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Mac => "mac",
            Self::Windows => "windows",
            Self::Ios => "ios",
            Self::Android => "android",
        }
    }

    /// Home-screen skins with full-screen windows.
    pub fn is_mobile(self) -> bool {
        matches!(self, Self::Ios | Self::Android)
    }
}

impl fmt::Display for OsType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// User-selected OS skin; `Auto` defers to host detection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PreferredOs {
    #[default]
    Auto,
    Mac,
    Windows,
    Ios,
    Android,
}

impl PreferredOs {
    /// Resolves the skin to boot. A fixed choice wins; `Auto` uses `detected` and falls back to
    /// macOS.
    pub fn resolve(self, detected: Option<OsType>) -> OsType {
        match self {
            Self::Auto => detected.unwrap_or_default(),
            Self::Mac => OsType::Mac,
            Self::Windows => OsType::Windows,
            Self::Ios => OsType::Ios,
            Self::Android => OsType::Android,
        }
    }
}

/// Error returned when parsing an unknown OS preference.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown os preference: {0} (expected auto, mac, windows, ios or android)")]
pub struct UnknownOsPreference(pub String);

impl FromStr for PreferredOs {
    type Err = UnknownOsPreference;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "auto" => Ok(Self::Auto),
            "mac" | "macos" => Ok(Self::Mac),
            "windows" => Ok(Self::Windows),
            "ios" => Ok(Self::Ios),
            "android" => Ok(Self::Android),
            _ => Err(UnknownOsPreference(raw.to_string())),
        }
    }
}

/// Base text size for window content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FontSize {
    Small,
    #[default]
    Medium,
    Large,
}

/// Desktop color scheme preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ThemeMode {
    Light,
    Dark,
    /// Follow the host color scheme.
    #[default]
    System,
}

/// Persisted user preferences. Serialized with the host storage key names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DesktopPreferences {
    pub preferred_os: PreferredOs,
    pub motion_reduced: bool,
    pub sound_enabled: bool,
    pub font_size: FontSize,
    pub theme: ThemeMode,
}

impl Default for DesktopPreferences {
    fn default() -> Self {
        Self {
            preferred_os: PreferredOs::Auto,
            motion_reduced: false,
            sound_enabled: true,
            font_size: FontSize::Medium,
            theme: ThemeMode::System,
        }
    }
}

impl DesktopPreferences {
    /// Parses a stored preference payload. Missing keys take their defaults.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    /// Serializes the preferences for the host store.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

/// Boot sequence progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BootPhase {
    /// Skin not resolved yet.
    #[default]
    Idle,
    /// Boot screen showing.
    Booting,
    /// Desktop or home screen showing.
    Complete,
}

/// Global window-manager state.
///
/// `max_z_index` only grows and is never below any window's `z_index`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DesktopState {
    /// Active skin.
    pub os_type: OsType,
    pub boot: BootPhase,
    /// Window registry in catalog order; stacking lives in each window's `z_index`.
    pub windows: Vec<AppWindow>,
    /// Highest z-index handed out so far.
    pub max_z_index: u32,
    pub preferences: DesktopPreferences,
    /// Host-reported dark color scheme; not persisted.
    pub system_dark: bool,
}

impl Default for DesktopState {
    fn default() -> Self {
        Self::with_apps(&AppId::ALL)
    }
}

impl DesktopState {
    /// Builds a registry containing only `apps`, in the given order.
    pub fn with_apps(apps: &[AppId]) -> Self {
        Self {
            os_type: OsType::default(),
            boot: BootPhase::default(),
            windows: apps
                .iter()
                .map(|app_id| AppWindow::from_manifest(app_manifest(*app_id)))
                .collect(),
            max_z_index: 0,
            preferences: DesktopPreferences::default(),
            system_dark: false,
        }
    }

    pub fn window(&self, app_id: AppId) -> Option<&AppWindow> {
        self.windows.iter().find(|w| w.id == app_id)
    }

    /// The focused open window, if any.
    pub fn focused_window(&self) -> Option<&AppWindow> {
        self.windows.iter().find(|w| w.is_open && w.is_focused)
    }

    /// Open windows ordered bottom to top.
    pub fn open_windows(&self) -> Vec<&AppWindow> {
        let mut open = self.windows.iter().filter(|w| w.is_open).collect::<Vec<_>>();
        open.sort_by_key(|w| w.z_index);
        open
    }

    /// Whether the desktop renders dark, resolving `ThemeMode::System` against the host.
    pub fn is_dark(&self) -> bool {
        match self.preferences.theme {
            ThemeMode::Light => false,
            ThemeMode::Dark => true,
            ThemeMode::System => self.system_dark,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PointerPosition {
    pub x: i32,
    pub y: i32,
}

/// Window frame handle being dragged during a resize.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ResizeEdge {
    East,
    South,
    SouthEast,
}

/// In-flight window move. Only `preview` changes until the gesture ends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragSession {
    pub app_id: AppId,
    pub pointer_start: PointerPosition,
    pub position_start: WindowPosition,
    pub preview: WindowPosition,
}

/// In-flight window resize. Only `preview` changes until the gesture ends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResizeSession {
    pub app_id: AppId,
    pub edge: ResizeEdge,
    pub pointer_start: PointerPosition,
    pub size_start: WindowSize,
    pub preview: WindowSize,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct InteractionState {
    pub dragging: Option<DragSession>,
    pub resizing: Option<ResizeSession>,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn app_ids_parse_case_insensitively() {
        assert_eq!("Terminal".parse::<AppId>(), Ok(AppId::Terminal));
        assert_eq!(
            "paint".parse::<AppId>(),
            Err(UnknownAppId("paint".to_string()))
        );
    }

    #[test]
    fn auto_preference_uses_detection_then_mac() {
        assert_eq!(PreferredOs::Auto.resolve(Some(OsType::Android)), OsType::Android);
        assert_eq!(PreferredOs::Auto.resolve(None), OsType::Mac);
        assert_eq!(PreferredOs::Windows.resolve(Some(OsType::Ios)), OsType::Windows);
    }

    #[test]
    fn preferences_fill_missing_keys_with_defaults() {
        let prefs = DesktopPreferences::from_json(r#"{"preferredOs":"windows","soundEnabled":false}"#)
            .expect("parse prefs");
        assert_eq!(prefs.preferred_os, PreferredOs::Windows);
        assert!(!prefs.sound_enabled);
        assert_eq!(prefs.font_size, FontSize::Medium);
        assert_eq!(prefs.theme, ThemeMode::System);
    }

    #[test]
    fn default_registry_follows_catalog() {
        let state = DesktopState::default();
        let ids = state.windows.iter().map(|w| w.id).collect::<Vec<_>>();
        assert_eq!(ids, AppId::ALL.to_vec());
        let about = state.window(AppId::About).expect("about window");
        assert_eq!(about.title, "About Me");
        assert_eq!(about.position, WindowPosition { x: 200, y: 200 });
        assert_eq!(about.size, WindowSize { width: 500, height: 400 });
        assert!(state.windows.iter().all(|w| !w.is_open && w.z_index == 0));
    }

    #[test]
    fn system_theme_follows_host() {
        let mut state = DesktopState::default();
        assert!(!state.is_dark());
        state.system_dark = true;
        assert!(state.is_dark());
        state.preferences.theme = ThemeMode::Light;
        assert!(!state.is_dark());
    }
}
