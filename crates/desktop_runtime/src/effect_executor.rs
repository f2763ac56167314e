//! Drains reducer-emitted runtime effects into a host.

use crate::{
    model::DesktopState,
    reducer::RuntimeEffect,
    runtime_context::DesktopRuntime,
};

/// Host collaborator that carries out runtime effects (sound playback, storage, input focus).
pub trait EffectHost {
    /// Executes one effect against the state it was emitted for.
    fn run_runtime_effect(&mut self, state: &DesktopState, effect: RuntimeEffect);
}

/// Runs every queued effect in emission order and returns how many ran.
pub fn run_queued_effects(runtime: &mut DesktopRuntime, host: &mut impl EffectHost) -> usize {
    let queued = runtime.drain_effects();
    let count = queued.len();
    for effect in queued {
        host.run_runtime_effect(runtime.state(), effect);
    }
    count
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{
        model::{AppId, DesktopPreferences},
        profile::ProfileData,
        reducer::DesktopAction,
    };

    #[derive(Default)]
    struct RecordingHost {
        seen: Vec<RuntimeEffect>,
        stored_prefs: Option<String>,
    }

    impl EffectHost for RecordingHost {
        fn run_runtime_effect(&mut self, state: &DesktopState, effect: RuntimeEffect) {
            if effect == RuntimeEffect::PersistPreferences {
                self.stored_prefs = state.preferences.to_json().ok();
            }
            self.seen.push(effect);
        }
    }

    #[test]
    fn queued_effects_run_once_in_order() {
        let mut runtime = DesktopRuntime::new(DesktopPreferences::default(), ProfileData::default());
        runtime
            .dispatch(DesktopAction::ToggleWindow {
                app_id: AppId::Contact,
            })
            .expect("toggle");
        runtime
            .dispatch(DesktopAction::SetMotionReduced { enabled: true })
            .expect("prefs");

        let mut host = RecordingHost::default();
        assert_eq!(run_queued_effects(&mut runtime, &mut host), 3);
        assert_eq!(
            host.seen,
            vec![
                RuntimeEffect::FocusWindowInput(AppId::Contact),
                RuntimeEffect::PlaySound("window-open"),
                RuntimeEffect::PersistPreferences,
            ]
        );
        assert!(host
            .stored_prefs
            .as_deref()
            .is_some_and(|json| json.contains("\"motionReduced\":true")));
        assert_eq!(run_queued_effects(&mut runtime, &mut host), 0);
    }
}
