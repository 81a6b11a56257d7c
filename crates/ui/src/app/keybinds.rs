use super::App;
use crate::event_handler::{EventHandler, KeyAction};

use crossterm::event::Event;

impl App {
    /// Translate a terminal event and apply the resulting action
    pub fn handle_event(&mut self, event: Event) {
        if let Some(action) = EventHandler::handle_event(&event, &mut self.state) {
            self.handle_action(action);
        }
    }

    pub fn handle_action(&mut self, action: KeyAction) {
        match action {
            KeyAction::SendMessage { message } => self.send_message(message),
            KeyAction::Scroll { delta } => self.view.anchor_mut().scroll_by(delta),
            KeyAction::ToggleTheme => {
                self.state.toggle_theme();
                tracing::debug!(theme = %self.state.theme(), "theme toggled");
            }
            KeyAction::Exit => self.should_exit = true,
        }
    }
}
