use crate::core::config::settings::ServiceSettings;
use crate::core::input::InputController;
use crate::core::session::QuerySession;
use crate::ui::theme::Theme;

pub mod actions;
pub mod service;
pub mod ui_state;

pub use actions::{apply_action, apply_actions, AppAction, AppCommand};
pub use service::ServiceContext;
pub use ui_state::UiState;

/// Everything the chat screen owns. The event loop holds the only instance
/// and mutates it between events; background tasks never touch it directly.
pub struct App {
    pub session: QuerySession,
    pub input: InputController,
    pub service: ServiceContext,
    pub ui: UiState,
}

impl App {
    pub fn new(settings: ServiceSettings, theme: Theme) -> Result<Self, reqwest::Error> {
        Ok(Self {
            session: QuerySession::new(),
            input: InputController::new(),
            service: ServiceContext::new(settings)?,
            ui: UiState::new(theme),
        })
    }

    pub fn can_submit(&self) -> bool {
        self.input.can_submit(&self.session)
    }

    #[cfg(test)]
    pub fn new_test_app() -> Self {
        Self::new(ServiceSettings::default(), Theme::dark_default()).expect("test client")
    }
}
