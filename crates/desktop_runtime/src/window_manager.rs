//! Shared window-manager transition helpers used by the desktop reducer.

use crate::model::{AppId, AppWindow, DesktopState, ResizeEdge, WindowSize};

/// Minimum width a resize gesture previews.
pub const MIN_WINDOW_WIDTH: i32 = 220;
/// Minimum height a resize gesture previews.
pub const MIN_WINDOW_HEIGHT: i32 = 140;

pub(crate) fn window_mut(state: &mut DesktopState, app_id: AppId) -> Option<&mut AppWindow> {
    state.windows.iter_mut().find(|w| w.id == app_id)
}

/// Focuses `app_id` and lifts it to a fresh maximum z-index. Every other window loses focus.
///
/// Returns `false` when the window is not registered; state is then untouched.
pub fn raise_window(state: &mut DesktopState, app_id: AppId) -> bool {
    if !state.windows.iter().any(|w| w.id == app_id) {
        return false;
    }

    state.max_z_index += 1;
    let z_index = state.max_z_index;
    for window in &mut state.windows {
        if window.id == app_id {
            window.is_focused = true;
            window.z_index = z_index;
        } else {
            window.is_focused = false;
        }
    }
    true
}

/// Clears every visibility flag. Stacking and geometry are kept for the next open.
pub fn close_window(window: &mut AppWindow) {
    window.is_open = false;
    window.is_focused = false;
    window.is_maximized = false;
    window.is_minimized = false;
}

/// Applies a pointer delta to the start size for the dragged handle, floored at the minimum
/// window size.
pub fn resize_size(start: WindowSize, edge: ResizeEdge, dx: i32, dy: i32) -> WindowSize {
    let resized = match edge {
        ResizeEdge::East => WindowSize {
            width: start.width + dx,
            ..start
        },
        ResizeEdge::South => WindowSize {
            height: start.height + dy,
            ..start
        },
        ResizeEdge::SouthEast => WindowSize {
            width: start.width + dx,
            height: start.height + dy,
        },
    };
    resized.clamped_min(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn raise_bumps_counter_once_and_unfocuses_others() {
        let mut state = DesktopState::with_apps(&[AppId::Terminal, AppId::About]);
        assert!(raise_window(&mut state, AppId::Terminal));
        assert!(raise_window(&mut state, AppId::About));
        assert_eq!(state.max_z_index, 2);
        let terminal = state.window(AppId::Terminal).expect("terminal");
        let about = state.window(AppId::About).expect("about");
        assert_eq!((terminal.z_index, terminal.is_focused), (1, false));
        assert_eq!((about.z_index, about.is_focused), (2, true));
    }

    #[test]
    fn raise_missing_window_leaves_counter() {
        let mut state = DesktopState::with_apps(&[AppId::Terminal]);
        assert!(!raise_window(&mut state, AppId::Settings));
        assert_eq!(state.max_z_index, 0);
    }

    #[test]
    fn resize_edges_only_touch_their_axis() {
        let start = WindowSize {
            width: 600,
            height: 400,
        };
        assert_eq!(
            resize_size(start, ResizeEdge::East, 50, 80),
            WindowSize {
                width: 650,
                height: 400
            }
        );
        assert_eq!(
            resize_size(start, ResizeEdge::South, 50, 80),
            WindowSize {
                width: 600,
                height: 480
            }
        );
        assert_eq!(
            resize_size(start, ResizeEdge::SouthEast, -1000, -1000),
            WindowSize {
                width: MIN_WINDOW_WIDTH,
                height: MIN_WINDOW_HEIGHT
            }
        );
    }
}
