pub mod app;
pub mod components;
pub mod event_handler;
pub mod layout;
pub mod snapshot;
pub mod state;
pub mod theme;
pub mod transcript;

pub use app::{App, ReplyEvent, ReplySource};
pub use event_handler::{EventHandler, KeyAction};
pub use snapshot::{buffer_to_string, render_to_string};
pub use state::{AppState, ComposerState};
pub use theme::{Theme, ThemePalette};
pub use transcript::{Bubble, TranscriptFrame, TranscriptRenderer, TranscriptView, compose};
