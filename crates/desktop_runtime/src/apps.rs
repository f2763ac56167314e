//! Static app catalog compiled from `manifests/*.toml`.

use crate::model::{AppId, WindowPosition, WindowSize};

/// Build-time metadata for one registered application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppManifest {
    pub app_id: AppId,
    pub title: &'static str,
    pub icon: &'static str,
    pub component: &'static str,
    /// Key toggled together with the primary modifier.
    pub shortcut: Option<char>,
    pub show_in_dock: bool,
    pub default_position: WindowPosition,
    pub default_size: WindowSize,
}

include!(concat!(env!("OUT_DIR"), "/app_catalog_generated.rs"));

/// Every manifest in registry order.
pub fn app_catalog() -> &'static [AppManifest] {
    &APP_CATALOG
}

pub fn app_manifest(app_id: AppId) -> &'static AppManifest {
    let index = match app_id {
        AppId::Terminal => 0,
        AppId::Projects => 1,
        AppId::About => 2,
        AppId::Contact => 3,
        AppId::Settings => 4,
    };
    &APP_CATALOG[index]
}

/// Apps pinned to the dock, taskbar, or home screen.
pub fn dock_apps() -> Vec<&'static AppManifest> {
    app_catalog()
        .iter()
        .filter(|manifest| manifest.show_in_dock)
        .collect()
}

/// App toggled by `primary + key`, if any.
pub fn shortcut_app(key: char) -> Option<AppId> {
    let key = key.to_ascii_lowercase();
    app_catalog()
        .iter()
        .find(|manifest| manifest.shortcut == Some(key))
        .map(|manifest| manifest.app_id)
}
