use crate::state::AppState;

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::time::Duration;

/// Lines moved by PageUp/PageDown
const PAGE_LINES: i32 = 10;

/// Actions that can be triggered by key events
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyAction {
    /// User wants to send a message
    SendMessage { message: String },
    /// Move the transcript by some lines (negative is up)
    Scroll { delta: i32 },
    /// Toggle theme variant
    ToggleTheme,
    /// Leave the chat screen
    Exit,
}

/// Event handler for the TUI application
pub struct EventHandler;

impl EventHandler {
    /// Read a single event from the terminal
    ///
    /// Returns `Some(event)` if an event is available, `None` on timeout or error.
    pub fn read(timeout: Duration) -> Option<Event> {
        match crossterm::event::poll(timeout) {
            Ok(true) => match crossterm::event::read() {
                Ok(event) => Some(event),
                Err(e) => {
                    tracing::warn!("terminal read error: {}", e);
                    None
                }
            },
            Ok(false) => None,
            Err(e) => {
                tracing::warn!("event poll error: {}", e);
                None
            }
        }
    }

    /// Handle any terminal event
    pub fn handle_event(event: &Event, state: &mut AppState) -> Option<KeyAction> {
        match event {
            Event::Key(key_event) => Self::handle_key_event(*key_event, state),
            Event::Mouse(mouse) => match mouse.kind {
                crossterm::event::MouseEventKind::ScrollUp => Some(KeyAction::Scroll { delta: -3 }),
                crossterm::event::MouseEventKind::ScrollDown => Some(KeyAction::Scroll { delta: 3 }),
                _ => None,
            },
            _ => None,
        }
    }

    /// Handle a keyboard event, editing the composer in place
    pub fn handle_key_event(event: KeyEvent, state: &mut AppState) -> Option<KeyAction> {
        if event.kind != KeyEventKind::Press {
            return None;
        }

        let ctrl = event.modifiers.contains(KeyModifiers::CONTROL);
        match event.code {
            KeyCode::Char('c') | KeyCode::Char('d') if ctrl => Some(KeyAction::Exit),
            KeyCode::Char('t') if ctrl => Some(KeyAction::ToggleTheme),
            KeyCode::Esc => Some(KeyAction::Exit),
            KeyCode::Enter => {
                if state.is_generating() {
                    return None;
                }
                state.composer.take_message().map(|message| KeyAction::SendMessage { message })
            }
            KeyCode::Char(ch) if !ctrl => {
                state.composer.insert_char(ch);
                None
            }
            KeyCode::Backspace => {
                state.composer.backspace();
                None
            }
            KeyCode::Left => {
                state.composer.move_left();
                None
            }
            KeyCode::Right => {
                state.composer.move_right();
                None
            }
            KeyCode::Up => Some(KeyAction::Scroll { delta: -1 }),
            KeyCode::Down => Some(KeyAction::Scroll { delta: 1 }),
            KeyCode::PageUp => Some(KeyAction::Scroll { delta: -PAGE_LINES }),
            KeyCode::PageDown => Some(KeyAction::Scroll { delta: PAGE_LINES }),
            _ => None,
        }
    }
}
