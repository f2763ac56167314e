use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

const MANIFEST_SCHEMA_VERSION: u32 = 1;

/// Catalog order; also the order windows appear in the registry.
const APP_IDS: [(&str, &str); 5] = [
    ("terminal", "Terminal"),
    ("projects", "Projects"),
    ("about", "About"),
    ("contact", "Contact"),
    ("settings", "Settings"),
];

#[derive(Debug, Clone, Serialize, Deserialize)]
struct WindowDefaults {
    x: i32,
    y: i32,
    width: i32,
    height: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct AppManifest {
    schema_version: u32,
    app_id: String,
    title: String,
    icon: String,
    component: String,
    #[serde(default)]
    shortcut: Option<String>,
    #[serde(default = "default_true")]
    show_in_dock: bool,
    window_defaults: WindowDefaults,
}

fn default_true() -> bool {
    true
}

fn manifest_path(root: &Path, app_id: &str) -> PathBuf {
    root.join("manifests").join(format!("{app_id}.toml"))
}

fn load_manifest(path: &Path, expected_id: &str) -> AppManifest {
    println!("cargo:rerun-if-changed={}", path.display());
    let raw = fs::read_to_string(path)
        .unwrap_or_else(|err| panic!("failed to read {}: {err}", path.display()));
    let manifest: AppManifest = toml::from_str(&raw)
        .unwrap_or_else(|err| panic!("failed to parse {}: {err}", path.display()));
    if manifest.schema_version != MANIFEST_SCHEMA_VERSION {
        panic!(
            "manifest schema mismatch in {}: expected {MANIFEST_SCHEMA_VERSION} found {}",
            path.display(),
            manifest.schema_version
        );
    }
    if manifest.app_id != expected_id {
        panic!(
            "app id mismatch in {}: expected {expected_id} found {}",
            path.display(),
            manifest.app_id
        );
    }
    if let Some(shortcut) = &manifest.shortcut {
        if shortcut.chars().count() != 1 {
            panic!(
                "shortcut in {} must be a single character, found {shortcut:?}",
                path.display()
            );
        }
    }
    manifest
}

fn render_entry(out: &mut String, variant: &str, manifest: &AppManifest) {
    let shortcut = match manifest.shortcut.as_deref().and_then(|key| key.chars().next()) {
        Some(key) => format!("Some({key:?})"),
        None => "None".to_string(),
    };
    let defaults = &manifest.window_defaults;
    let _ = writeln!(
        out,
        "    AppManifest {{\n        app_id: AppId::{variant},\n        title: {:?},\n        icon: {:?},\n        component: {:?},\n        shortcut: {shortcut},\n        show_in_dock: {},\n        default_position: WindowPosition {{ x: {}, y: {} }},\n        default_size: WindowSize {{ width: {}, height: {} }},\n    }},",
        manifest.title,
        manifest.icon,
        manifest.component,
        manifest.show_in_dock,
        defaults.x,
        defaults.y,
        defaults.width,
        defaults.height,
    );
}

fn main() {
    let crate_root = PathBuf::from(std::env::var("CARGO_MANIFEST_DIR").expect("manifest dir"));
    let mut manifests = Vec::<(&str, AppManifest)>::new();
    for (app_id, variant) in APP_IDS {
        let manifest = load_manifest(&manifest_path(&crate_root, app_id), app_id);
        manifests.push((variant, manifest));
    }

    let json = serde_json::to_string_pretty(
        &manifests
            .iter()
            .map(|(_, manifest)| manifest)
            .collect::<Vec<_>>(),
    )
    .expect("serialize app manifest catalog");

    let mut generated = String::new();
    let _ = writeln!(
        generated,
        "/// Build-time generated app catalog, in registry order.\npub const APP_CATALOG: [AppManifest; {}] = [",
        manifests.len()
    );
    for (variant, manifest) in &manifests {
        render_entry(&mut generated, variant, manifest);
    }
    generated.push_str("];\n\n");
    let _ = writeln!(
        generated,
        "/// Build-time generated app manifest catalog JSON.\npub const APP_MANIFEST_CATALOG_JSON: &str = r##\"{json}\"##;"
    );

    let out_dir = PathBuf::from(std::env::var("OUT_DIR").expect("OUT_DIR"));
    let out_file = out_dir.join("app_catalog_generated.rs");
    fs::write(&out_file, generated)
        .unwrap_or_else(|err| panic!("failed to write {}: {err}", out_file.display()));
}
