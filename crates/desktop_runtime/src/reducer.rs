//! Reducer actions, side-effect intents, and transition logic for the desktop runtime.

use thiserror::Error;

use crate::model::{
    AppId, AppWindow, BootPhase, DesktopState, DragSession, FontSize, InteractionState, OsType,
    PointerPosition, PreferredOs, ResizeEdge, ResizeSession, ThemeMode, WindowPosition,
    WindowSize,
};
use crate::window_manager::{close_window, raise_window, resize_size, window_mut};

/// Sound played when a window opens.
pub const SOUND_WINDOW_OPEN: &str = "window-open";
/// Sound played when an open window closes.
pub const SOUND_WINDOW_CLOSE: &str = "window-close";

#[derive(Debug, Clone, PartialEq, Eq)]
/// Actions accepted by [`reduce_desktop`] to mutate [`DesktopState`].
pub enum DesktopAction {
    /// Open (or re-open) a window and raise it.
    OpenWindow {
        /// Window to open.
        app_id: AppId,
    },
    /// Close a window, keeping its geometry and stacking value.
    CloseWindow {
        /// Window to close.
        app_id: AppId,
    },
    /// Close the window if open, otherwise open it.
    ToggleWindow {
        /// Window to toggle.
        app_id: AppId,
    },
    /// Focus and raise a window without changing whether it is open.
    FocusWindow {
        /// Window to focus.
        app_id: AppId,
    },
    /// Minimize an open window.
    MinimizeWindow {
        /// Window to minimize.
        app_id: AppId,
    },
    /// Maximize an open window. Stored geometry is kept for restore.
    MaximizeWindow {
        /// Window to maximize.
        app_id: AppId,
    },
    /// Clear the maximized and minimized flags.
    RestoreWindow {
        /// Window to restore.
        app_id: AppId,
    },
    /// Maximize, or restore when already maximized (title bar double-click).
    ToggleMaximize {
        /// Window whose title bar was activated.
        app_id: AppId,
    },
    /// Overwrite the stored position.
    MoveWindow {
        /// Window to move.
        app_id: AppId,
        /// New top-left offset.
        position: WindowPosition,
    },
    /// Overwrite the stored size.
    ResizeWindow {
        /// Window to resize.
        app_id: AppId,
        /// New extent.
        size: WindowSize,
    },
    /// Begin dragging a window by its title bar.
    BeginMove {
        /// Window being dragged.
        app_id: AppId,
        /// Pointer position at drag start.
        pointer: PointerPosition,
    },
    /// Update the staged drag preview.
    UpdateMove {
        /// Current pointer position.
        pointer: PointerPosition,
    },
    /// Commit the staged drag preview.
    EndMove,
    /// Begin resizing a window from one of its handles.
    BeginResize {
        /// Window being resized.
        app_id: AppId,
        /// Handle being dragged.
        edge: ResizeEdge,
        /// Pointer position at resize start.
        pointer: PointerPosition,
    },
    /// Update the staged resize preview.
    UpdateResize {
        /// Current pointer position.
        pointer: PointerPosition,
    },
    /// Commit the staged resize preview.
    EndResize,
    /// Drop any in-flight gesture without committing it.
    CancelGesture,
    /// Switch the active OS skin.
    SetOsType {
        /// Resolved skin.
        os_type: OsType,
    },
    /// Enter the boot screen.
    StartBoot,
    /// Leave the boot screen for the desktop.
    CompleteBoot,
    /// Change the preferred skin and re-resolve the active one.
    SetPreferredOs {
        /// New preference.
        preferred_os: PreferredOs,
        /// Host-detected skin used when the preference is `auto`.
        detected: Option<OsType>,
    },
    /// Toggle reduced motion.
    SetMotionReduced {
        /// Whether reduced motion is enabled.
        enabled: bool,
    },
    /// Toggle UI sounds.
    SetSoundEnabled {
        /// Whether sounds are enabled.
        enabled: bool,
    },
    /// Change the UI font size.
    SetFontSize {
        /// New font size.
        font_size: FontSize,
    },
    /// Change the desktop color scheme preference.
    SetThemeMode {
        /// New scheme preference.
        theme: ThemeMode,
    },
    /// Record the host color scheme.
    SetSystemDark {
        /// Whether the host prefers dark.
        dark: bool,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Side-effect intents emitted by [`reduce_desktop`] for the host to execute.
pub enum RuntimeEffect {
    /// Move keyboard focus into the window's primary input.
    FocusWindowInput(AppId),
    /// Play a named UI sound effect.
    PlaySound(&'static str),
    /// Persist the current preferences.
    PersistPreferences,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Reducer errors for invalid actions.
pub enum ReducerError {
    /// The target window is not part of this registry.
    #[error("window not found: {0}")]
    WindowNotFound(AppId),
}

/// Applies a [`DesktopAction`] to the desktop state and collects resulting side effects.
///
/// Gesture updates only touch `interaction`; the registry changes when a gesture ends.
///
/// # Errors
///
/// Returns [`ReducerError::WindowNotFound`] when an action names a window missing from the
/// registry. State is left untouched in that case.
pub fn reduce_desktop(
    state: &mut DesktopState,
    interaction: &mut InteractionState,
    action: DesktopAction,
) -> Result<Vec<RuntimeEffect>, ReducerError> {
    let mut effects = Vec::new();
    match action {
        DesktopAction::OpenWindow { app_id } => {
            let window = find_window_mut(state, app_id)?;
            window.is_open = true;
            window.is_minimized = false;
            raise_window(state, app_id);
            tracing::debug!(%app_id, z_index = state.max_z_index, "window opened");
            effects.push(RuntimeEffect::FocusWindowInput(app_id));
            if state.preferences.sound_enabled {
                effects.push(RuntimeEffect::PlaySound(SOUND_WINDOW_OPEN));
            }
        }
        DesktopAction::CloseWindow { app_id } => {
            let window = find_window_mut(state, app_id)?;
            let was_open = window.is_open;
            close_window(window);
            drop_gestures_for(interaction, app_id);
            tracing::debug!(%app_id, "window closed");
            if was_open && state.preferences.sound_enabled {
                effects.push(RuntimeEffect::PlaySound(SOUND_WINDOW_CLOSE));
            }
        }
        DesktopAction::ToggleWindow { app_id } => {
            let action = if find_window(state, app_id)?.is_open {
                DesktopAction::CloseWindow { app_id }
            } else {
                DesktopAction::OpenWindow { app_id }
            };
            effects.extend(reduce_desktop(state, interaction, action)?);
        }
        DesktopAction::FocusWindow { app_id } => {
            // Focus leaves `is_open` alone.
            find_window(state, app_id)?;
            raise_window(state, app_id);
            tracing::debug!(%app_id, z_index = state.max_z_index, "window focused");
            effects.push(RuntimeEffect::FocusWindowInput(app_id));
        }
        DesktopAction::MinimizeWindow { app_id } => {
            let window = find_window_mut(state, app_id)?;
            window.is_minimized = true;
            window.is_focused = false;
            drop_gestures_for(interaction, app_id);
        }
        DesktopAction::MaximizeWindow { app_id } => {
            find_window_mut(state, app_id)?.is_maximized = true;
            drop_gestures_for(interaction, app_id);
        }
        DesktopAction::RestoreWindow { app_id } => {
            let window = find_window_mut(state, app_id)?;
            window.is_maximized = false;
            window.is_minimized = false;
        }
        DesktopAction::ToggleMaximize { app_id } => {
            let action = if find_window(state, app_id)?.is_maximized {
                DesktopAction::RestoreWindow { app_id }
            } else {
                DesktopAction::MaximizeWindow { app_id }
            };
            effects.extend(reduce_desktop(state, interaction, action)?);
        }
        DesktopAction::MoveWindow { app_id, position } => {
            find_window_mut(state, app_id)?.position = position;
        }
        DesktopAction::ResizeWindow { app_id, size } => {
            find_window_mut(state, app_id)?.size = size;
        }
        DesktopAction::BeginMove { app_id, pointer } => {
            let window = find_window(state, app_id)?;
            if accepts_gesture(state.os_type, window) {
                let position_start = window.position;
                raise_window(state, app_id);
                interaction.resizing = None;
                interaction.dragging = Some(DragSession {
                    app_id,
                    pointer_start: pointer,
                    position_start,
                    preview: position_start,
                });
                effects.push(RuntimeEffect::FocusWindowInput(app_id));
            }
        }
        DesktopAction::UpdateMove { pointer } => {
            if let Some(session) = interaction.dragging.as_mut() {
                let dx = pointer.x - session.pointer_start.x;
                let dy = pointer.y - session.pointer_start.y;
                session.preview = session.position_start.offset(dx, dy);
            }
        }
        DesktopAction::EndMove => {
            if let Some(session) = interaction.dragging.take() {
                tracing::debug!(app_id = %session.app_id, x = session.preview.x, y = session.preview.y, "drag committed");
                effects.extend(reduce_desktop(
                    state,
                    interaction,
                    DesktopAction::MoveWindow {
                        app_id: session.app_id,
                        position: session.preview,
                    },
                )?);
            }
        }
        DesktopAction::BeginResize {
            app_id,
            edge,
            pointer,
        } => {
            let window = find_window(state, app_id)?;
            if accepts_gesture(state.os_type, window) {
                let size_start = window.size;
                raise_window(state, app_id);
                interaction.dragging = None;
                interaction.resizing = Some(ResizeSession {
                    app_id,
                    edge,
                    pointer_start: pointer,
                    size_start,
                    preview: size_start,
                });
                effects.push(RuntimeEffect::FocusWindowInput(app_id));
            }
        }
        DesktopAction::UpdateResize { pointer } => {
            if let Some(session) = interaction.resizing.as_mut() {
                let dx = pointer.x - session.pointer_start.x;
                let dy = pointer.y - session.pointer_start.y;
                session.preview = resize_size(session.size_start, session.edge, dx, dy);
            }
        }
        DesktopAction::EndResize => {
            if let Some(session) = interaction.resizing.take() {
                tracing::debug!(app_id = %session.app_id, width = session.preview.width, height = session.preview.height, "resize committed");
                effects.extend(reduce_desktop(
                    state,
                    interaction,
                    DesktopAction::ResizeWindow {
                        app_id: session.app_id,
                        size: session.preview,
                    },
                )?);
            }
        }
        DesktopAction::CancelGesture => {
            interaction.dragging = None;
            interaction.resizing = None;
        }
        DesktopAction::SetOsType { os_type } => {
            set_os_type(state, interaction, os_type);
        }
        DesktopAction::StartBoot => {
            state.boot = BootPhase::Booting;
            tracing::debug!(os = %state.os_type, "boot started");
        }
        DesktopAction::CompleteBoot => {
            state.boot = BootPhase::Complete;
            tracing::debug!(os = %state.os_type, "boot complete");
        }
        DesktopAction::SetPreferredOs {
            preferred_os,
            detected,
        } => {
            state.preferences.preferred_os = preferred_os;
            set_os_type(state, interaction, preferred_os.resolve(detected));
            effects.push(RuntimeEffect::PersistPreferences);
        }
        DesktopAction::SetMotionReduced { enabled } => {
            state.preferences.motion_reduced = enabled;
            effects.push(RuntimeEffect::PersistPreferences);
        }
        DesktopAction::SetSoundEnabled { enabled } => {
            state.preferences.sound_enabled = enabled;
            effects.push(RuntimeEffect::PersistPreferences);
        }
        DesktopAction::SetFontSize { font_size } => {
            state.preferences.font_size = font_size;
            effects.push(RuntimeEffect::PersistPreferences);
        }
        DesktopAction::SetThemeMode { theme } => {
            state.preferences.theme = theme;
            effects.push(RuntimeEffect::PersistPreferences);
        }
        DesktopAction::SetSystemDark { dark } => {
            state.system_dark = dark;
        }
    }

    Ok(effects)
}

fn find_window(state: &DesktopState, app_id: AppId) -> Result<&AppWindow, ReducerError> {
    state.window(app_id).ok_or_else(|| {
        tracing::warn!(%app_id, "action rejected: window not registered");
        ReducerError::WindowNotFound(app_id)
    })
}

fn find_window_mut(
    state: &mut DesktopState,
    app_id: AppId,
) -> Result<&mut AppWindow, ReducerError> {
    window_mut(state, app_id).ok_or_else(|| {
        tracing::warn!(%app_id, "action rejected: window not registered");
        ReducerError::WindowNotFound(app_id)
    })
}

/// Desktop skins allow dragging and resizing open, restored windows.
fn accepts_gesture(os_type: OsType, window: &AppWindow) -> bool {
    !os_type.is_mobile() && window.is_visible() && !window.is_maximized
}

fn drop_gestures_for(interaction: &mut InteractionState, app_id: AppId) {
    if interaction
        .dragging
        .as_ref()
        .is_some_and(|session| session.app_id == app_id)
    {
        interaction.dragging = None;
    }
    if interaction
        .resizing
        .as_ref()
        .is_some_and(|session| session.app_id == app_id)
    {
        interaction.resizing = None;
    }
}

fn set_os_type(state: &mut DesktopState, interaction: &mut InteractionState, os_type: OsType) {
    state.os_type = os_type;
    if os_type.is_mobile() {
        interaction.dragging = None;
        interaction.resizing = None;
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn dispatch(
        state: &mut DesktopState,
        interaction: &mut InteractionState,
        action: DesktopAction,
    ) -> Vec<RuntimeEffect> {
        reduce_desktop(state, interaction, action).expect("reduce")
    }

    fn open(state: &mut DesktopState, interaction: &mut InteractionState, app_id: AppId) {
        let _ = dispatch(state, interaction, DesktopAction::OpenWindow { app_id });
    }

    fn window(state: &DesktopState, app_id: AppId) -> &AppWindow {
        state.window(app_id).expect("window")
    }

    #[test]
    fn open_focus_scenario_tracks_z_order() {
        let mut state = DesktopState::with_apps(&[AppId::Terminal, AppId::About]);
        let mut interaction = InteractionState::default();

        open(&mut state, &mut interaction, AppId::Terminal);
        let terminal = window(&state, AppId::Terminal);
        assert!(terminal.is_open && terminal.is_focused);
        assert_eq!(terminal.z_index, 1);

        open(&mut state, &mut interaction, AppId::About);
        assert_eq!(window(&state, AppId::About).z_index, 2);
        assert!(!window(&state, AppId::Terminal).is_focused);

        let _ = dispatch(
            &mut state,
            &mut interaction,
            DesktopAction::FocusWindow {
                app_id: AppId::Terminal,
            },
        );
        assert_eq!(window(&state, AppId::Terminal).z_index, 3);
        assert!(window(&state, AppId::Terminal).is_focused);
        assert!(!window(&state, AppId::About).is_focused);
        assert_eq!(state.max_z_index, 3);
    }

    #[test]
    fn close_clears_flags_but_keeps_geometry_and_stack() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        open(&mut state, &mut interaction, AppId::Projects);
        let _ = dispatch(
            &mut state,
            &mut interaction,
            DesktopAction::MaximizeWindow {
                app_id: AppId::Projects,
            },
        );
        let before = window(&state, AppId::Projects).clone();
        let effects = dispatch(
            &mut state,
            &mut interaction,
            DesktopAction::CloseWindow {
                app_id: AppId::Projects,
            },
        );
        let after = window(&state, AppId::Projects);
        assert!(!after.is_open && !after.is_focused && !after.is_maximized && !after.is_minimized);
        assert_eq!(after.z_index, before.z_index);
        assert_eq!(after.position, before.position);
        assert_eq!(after.size, before.size);
        assert_eq!(effects, vec![RuntimeEffect::PlaySound(SOUND_WINDOW_CLOSE)]);
    }

    #[test]
    fn toggle_twice_returns_to_original_open_flag() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        let toggle = DesktopAction::ToggleWindow {
            app_id: AppId::Contact,
        };
        let _ = dispatch(&mut state, &mut interaction, toggle.clone());
        assert!(window(&state, AppId::Contact).is_open);
        let _ = dispatch(&mut state, &mut interaction, toggle);
        assert!(!window(&state, AppId::Contact).is_open);
        assert_eq!(window(&state, AppId::Contact).z_index, 1);
    }

    #[test]
    fn open_emits_focus_and_sound_when_enabled() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        let effects = dispatch(
            &mut state,
            &mut interaction,
            DesktopAction::OpenWindow {
                app_id: AppId::Terminal,
            },
        );
        assert_eq!(
            effects,
            vec![
                RuntimeEffect::FocusWindowInput(AppId::Terminal),
                RuntimeEffect::PlaySound(SOUND_WINDOW_OPEN),
            ]
        );

        state.preferences.sound_enabled = false;
        let effects = dispatch(
            &mut state,
            &mut interaction,
            DesktopAction::OpenWindow {
                app_id: AppId::About,
            },
        );
        assert_eq!(effects, vec![RuntimeEffect::FocusWindowInput(AppId::About)]);
    }

    #[test]
    fn minimize_restore_and_maximize_toggle() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        open(&mut state, &mut interaction, AppId::About);

        let _ = dispatch(
            &mut state,
            &mut interaction,
            DesktopAction::MinimizeWindow {
                app_id: AppId::About,
            },
        );
        assert!(window(&state, AppId::About).is_minimized);
        assert!(!window(&state, AppId::About).is_focused);

        let _ = dispatch(
            &mut state,
            &mut interaction,
            DesktopAction::ToggleMaximize {
                app_id: AppId::About,
            },
        );
        assert!(window(&state, AppId::About).is_maximized);
        let _ = dispatch(
            &mut state,
            &mut interaction,
            DesktopAction::ToggleMaximize {
                app_id: AppId::About,
            },
        );
        let about = window(&state, AppId::About);
        assert!(!about.is_maximized && !about.is_minimized && about.is_open);
    }

    #[test]
    fn focus_raises_closed_window_without_opening_it() {
        let mut state = DesktopState::with_apps(&[AppId::Terminal, AppId::About]);
        let mut interaction = InteractionState::default();
        open(&mut state, &mut interaction, AppId::Terminal);

        let effects = dispatch(
            &mut state,
            &mut interaction,
            DesktopAction::FocusWindow {
                app_id: AppId::About,
            },
        );
        assert_eq!(effects, vec![RuntimeEffect::FocusWindowInput(AppId::About)]);
        let about = window(&state, AppId::About);
        assert_eq!((about.z_index, state.max_z_index), (2, 2));
        assert!(about.is_focused && !about.is_open);
        assert!(!window(&state, AppId::Terminal).is_focused);
        assert_eq!(state.focused_window(), None);
    }

    #[test]
    fn minimize_and_maximize_apply_to_closed_windows() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        let _ = dispatch(
            &mut state,
            &mut interaction,
            DesktopAction::MinimizeWindow {
                app_id: AppId::Settings,
            },
        );
        let _ = dispatch(
            &mut state,
            &mut interaction,
            DesktopAction::MaximizeWindow {
                app_id: AppId::Settings,
            },
        );
        let settings = window(&state, AppId::Settings);
        assert!(settings.is_minimized && settings.is_maximized && !settings.is_open);

        open(&mut state, &mut interaction, AppId::Settings);
        let settings = window(&state, AppId::Settings);
        assert!(settings.is_open && !settings.is_minimized && settings.is_maximized);
    }

    #[test]
    fn move_and_resize_overwrite_without_clamping() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        let _ = dispatch(
            &mut state,
            &mut interaction,
            DesktopAction::MoveWindow {
                app_id: AppId::Terminal,
                position: WindowPosition { x: -500, y: -20 },
            },
        );
        let _ = dispatch(
            &mut state,
            &mut interaction,
            DesktopAction::ResizeWindow {
                app_id: AppId::Terminal,
                size: WindowSize {
                    width: 10,
                    height: 5,
                },
            },
        );
        let terminal = window(&state, AppId::Terminal);
        assert_eq!(terminal.position, WindowPosition { x: -500, y: -20 });
        assert_eq!(
            terminal.size,
            WindowSize {
                width: 10,
                height: 5
            }
        );
    }

    #[test]
    fn missing_window_is_an_error_and_leaves_state() {
        let mut state = DesktopState::with_apps(&[AppId::Terminal]);
        let mut interaction = InteractionState::default();
        let before = state.clone();
        let result = reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::OpenWindow {
                app_id: AppId::About,
            },
        );
        assert_eq!(result, Err(ReducerError::WindowNotFound(AppId::About)));
        assert_eq!(state, before);
    }

    #[test]
    fn drag_commits_only_on_end() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        open(&mut state, &mut interaction, AppId::Terminal);
        open(&mut state, &mut interaction, AppId::About);

        let _ = dispatch(
            &mut state,
            &mut interaction,
            DesktopAction::BeginMove {
                app_id: AppId::Terminal,
                pointer: PointerPosition { x: 10, y: 10 },
            },
        );
        assert!(window(&state, AppId::Terminal).is_focused);
        let _ = dispatch(
            &mut state,
            &mut interaction,
            DesktopAction::UpdateMove {
                pointer: PointerPosition { x: 40, y: 25 },
            },
        );
        assert_eq!(
            window(&state, AppId::Terminal).position,
            WindowPosition { x: 100, y: 100 }
        );
        assert_eq!(
            interaction.dragging.as_ref().map(|session| session.preview),
            Some(WindowPosition { x: 130, y: 115 })
        );

        let _ = dispatch(&mut state, &mut interaction, DesktopAction::EndMove);
        assert_eq!(
            window(&state, AppId::Terminal).position,
            WindowPosition { x: 130, y: 115 }
        );
        assert!(interaction.dragging.is_none());
    }

    #[test]
    fn resize_preview_floors_and_cancel_discards() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        open(&mut state, &mut interaction, AppId::Contact);

        let _ = dispatch(
            &mut state,
            &mut interaction,
            DesktopAction::BeginResize {
                app_id: AppId::Contact,
                edge: ResizeEdge::SouthEast,
                pointer: PointerPosition { x: 0, y: 0 },
            },
        );
        let _ = dispatch(
            &mut state,
            &mut interaction,
            DesktopAction::UpdateResize {
                pointer: PointerPosition { x: -900, y: 30 },
            },
        );
        let _ = dispatch(&mut state, &mut interaction, DesktopAction::CancelGesture);
        assert_eq!(
            window(&state, AppId::Contact).size,
            WindowSize {
                width: 400,
                height: 350
            }
        );

        let _ = dispatch(
            &mut state,
            &mut interaction,
            DesktopAction::BeginResize {
                app_id: AppId::Contact,
                edge: ResizeEdge::SouthEast,
                pointer: PointerPosition { x: 0, y: 0 },
            },
        );
        let _ = dispatch(
            &mut state,
            &mut interaction,
            DesktopAction::UpdateResize {
                pointer: PointerPosition { x: -900, y: 30 },
            },
        );
        let _ = dispatch(&mut state, &mut interaction, DesktopAction::EndResize);
        assert_eq!(
            window(&state, AppId::Contact).size,
            WindowSize {
                width: 220,
                height: 380
            }
        );
    }

    #[test]
    fn gestures_are_ignored_on_mobile_and_when_maximized() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        open(&mut state, &mut interaction, AppId::Terminal);
        let _ = dispatch(
            &mut state,
            &mut interaction,
            DesktopAction::MaximizeWindow {
                app_id: AppId::Terminal,
            },
        );
        let begin = DesktopAction::BeginMove {
            app_id: AppId::Terminal,
            pointer: PointerPosition::default(),
        };
        assert!(dispatch(&mut state, &mut interaction, begin.clone()).is_empty());
        assert!(interaction.dragging.is_none());

        let _ = dispatch(
            &mut state,
            &mut interaction,
            DesktopAction::RestoreWindow {
                app_id: AppId::Terminal,
            },
        );
        let _ = dispatch(
            &mut state,
            &mut interaction,
            DesktopAction::SetOsType {
                os_type: OsType::Ios,
            },
        );
        let _ = dispatch(&mut state, &mut interaction, begin);
        assert!(interaction.dragging.is_none());
    }

    #[test]
    fn preference_setters_request_persistence() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        let effects = dispatch(
            &mut state,
            &mut interaction,
            DesktopAction::SetPreferredOs {
                preferred_os: PreferredOs::Auto,
                detected: Some(OsType::Android),
            },
        );
        assert_eq!(effects, vec![RuntimeEffect::PersistPreferences]);
        assert_eq!(state.os_type, OsType::Android);

        for action in [
            DesktopAction::SetMotionReduced { enabled: true },
            DesktopAction::SetSoundEnabled { enabled: false },
            DesktopAction::SetFontSize {
                font_size: FontSize::Large,
            },
            DesktopAction::SetThemeMode {
                theme: ThemeMode::Dark,
            },
        ] {
            assert_eq!(
                dispatch(&mut state, &mut interaction, action),
                vec![RuntimeEffect::PersistPreferences]
            );
        }
        assert!(state.preferences.motion_reduced);
        assert!(!state.preferences.sound_enabled);
        assert_eq!(state.preferences.font_size, FontSize::Large);
        assert!(state.is_dark());

        assert!(dispatch(
            &mut state,
            &mut interaction,
            DesktopAction::SetSystemDark { dark: true }
        )
        .is_empty());
    }

    #[test]
    fn boot_phases_advance() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        let _ = dispatch(&mut state, &mut interaction, DesktopAction::StartBoot);
        assert_eq!(state.boot, BootPhase::Booting);
        let _ = dispatch(&mut state, &mut interaction, DesktopAction::CompleteBoot);
        assert_eq!(state.boot, BootPhase::Complete);
    }
}
