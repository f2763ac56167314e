//! Owned runtime container: desktop state, gesture state, effect queue, and the terminal session.

use std::rc::Rc;

use system_shell::TerminalSession;
use system_shell_contract::TerminalTheme;

use crate::{
    boot,
    model::{AppId, DesktopPreferences, DesktopState, InteractionState, OsType},
    profile::ProfileData,
    reducer::{reduce_desktop, DesktopAction, ReducerError, RuntimeEffect},
    shell,
};

/// Long-lived desktop runtime owned by the host.
pub struct DesktopRuntime {
    state: DesktopState,
    interaction: InteractionState,
    effects: Vec<RuntimeEffect>,
    profile: Rc<ProfileData>,
    terminal: Option<TerminalSession>,
    terminal_theme: TerminalTheme,
}

impl DesktopRuntime {
    /// Creates a runtime over the full app catalog.
    pub fn new(preferences: DesktopPreferences, profile: ProfileData) -> Self {
        let mut state = DesktopState::default();
        state.preferences = preferences;
        Self::with_state(state, profile)
    }

    /// Creates a runtime over a prepared registry.
    pub fn with_state(state: DesktopState, profile: ProfileData) -> Self {
        Self {
            state,
            interaction: InteractionState::default(),
            effects: Vec::new(),
            profile: Rc::new(profile),
            terminal: None,
            terminal_theme: TerminalTheme::default(),
        }
    }

    /// Theme for the terminal session created on first open.
    pub fn with_terminal_theme(mut self, theme: TerminalTheme) -> Self {
        self.terminal_theme = theme;
        self
    }

    pub fn state(&self) -> &DesktopState {
        &self.state
    }

    pub fn interaction(&self) -> &InteractionState {
        &self.interaction
    }

    pub fn profile(&self) -> &ProfileData {
        &self.profile
    }

    /// Applies an action atomically: on error neither state nor queue change.
    ///
    /// Returns the effects the action produced; they are also queued for [`Self::drain_effects`].
    pub fn dispatch(&mut self, action: DesktopAction) -> Result<Vec<RuntimeEffect>, ReducerError> {
        let mut desktop = self.state.clone();
        let mut ui = self.interaction.clone();

        match reduce_desktop(&mut desktop, &mut ui, action) {
            Ok(new_effects) => {
                self.state = desktop;
                self.interaction = ui;
                self.sync_terminal();
                self.effects.extend(new_effects.iter().cloned());
                Ok(new_effects)
            }
            Err(err) => {
                tracing::warn!("desktop reducer error: {err}");
                Err(err)
            }
        }
    }

    /// Resolves the OS skin and enters the boot screen.
    pub fn start_boot(
        &mut self,
        detected: Option<OsType>,
    ) -> Result<Vec<RuntimeEffect>, ReducerError> {
        let new_effects = boot::start_boot(&mut self.state, &mut self.interaction, detected)?;
        self.effects.extend(new_effects.iter().cloned());
        Ok(new_effects)
    }

    /// Takes every queued effect in emission order.
    pub fn drain_effects(&mut self) -> Vec<RuntimeEffect> {
        std::mem::take(&mut self.effects)
    }

    /// Terminal session, present once the Terminal window has been opened.
    pub fn terminal(&self) -> Option<&TerminalSession> {
        self.terminal.as_ref()
    }

    pub fn terminal_mut(&mut self) -> Option<&mut TerminalSession> {
        self.terminal.as_mut()
    }

    /// Prompt for the active skin.
    pub fn prompt(&self) -> String {
        boot::prompt(self.state.os_type, &self.profile.handle)
    }

    /// Creates the session when the Terminal window first opens and keeps it across close/open.
    fn sync_terminal(&mut self) {
        let terminal_open = self
            .state
            .window(AppId::Terminal)
            .is_some_and(|window| window.is_open);
        if terminal_open && self.terminal.is_none() {
            tracing::debug!("starting terminal session");
            self.terminal = Some(shell::new_terminal_session(
                self.profile.clone(),
                self.terminal_theme,
            ));
        }
    }
}
