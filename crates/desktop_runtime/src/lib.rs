//! Portfolio desktop runtime: window registry and reducer, boot and OS skins, keyboard shortcuts,
//! and the portfolio terminal command table.

pub mod apps;
pub mod boot;
pub mod effect_executor;
pub mod model;
pub mod profile;
pub mod reducer;
pub mod runtime_context;
pub mod shell;
pub mod shortcuts;
pub mod window_manager;

pub use effect_executor::{run_queued_effects, EffectHost};
pub use model::*;
pub use profile::ProfileData;
pub use reducer::{reduce_desktop, DesktopAction, ReducerError, RuntimeEffect};
pub use runtime_context::DesktopRuntime;
pub use shell::{build_command_registry, new_terminal_session};
pub use shortcuts::{resolve_shortcut, ShortcutModifiers};
