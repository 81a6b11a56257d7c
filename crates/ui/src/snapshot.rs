//! Headless rendering of a transcript into plain text.

use crate::app::{App, ReplySource};

use purrsona_core::{Error, Message, Result, ScrollBehavior, TranscriptStore, UiConfig};
use ratatui::{Terminal, backend::TestBackend, buffer::Buffer};
use std::sync::Arc;

struct NoReply;

impl ReplySource for NoReply {
    fn reply(&self, _: &[Message]) -> Vec<String> {
        Vec::new()
    }
}

/// Render one frame of the full UI at `width` x `height` and return it as text
///
/// A single frame has no later ticks to ease over, so scrolling is always
/// instant here. Trailing spaces are trimmed from every row.
pub fn render_to_string(store: TranscriptStore, config: &UiConfig, width: u16, height: u16) -> Result<String> {
    if width == 0 || height == 0 {
        return Err(Error::Other(format!("cannot render into a {width}x{height} area")));
    }

    let config = UiConfig { scroll: ScrollBehavior::Instant, ..config.clone() };
    let mut app = App::new(&config, store, Arc::new(NoReply));
    if !app.store().live_response().is_empty() {
        app.state_mut().start_generation();
    }

    let mut terminal = Terminal::new(TestBackend::new(width, height)).map_err(|e| Error::Other(e.to_string()))?;
    terminal
        .draw(|frame| app.render_frame(frame))
        .map_err(|e| Error::Other(e.to_string()))?;

    Ok(buffer_to_string(terminal.backend().buffer()))
}

/// Flatten a buffer into newline-separated rows
pub fn buffer_to_string(buffer: &Buffer) -> String {
    let area = buffer.area;
    let mut rows = Vec::with_capacity(area.height as usize);
    for y in area.top()..area.bottom() {
        let mut row = String::new();
        for x in area.left()..area.right() {
            row.push_str(buffer[(x, y)].symbol());
        }
        rows.push(row.trim_end().to_string());
    }
    rows.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_empty_store_shows_idle_prompt() {
        let text = render_to_string(TranscriptStore::new(), &UiConfig::default(), 80, 24).unwrap();
        assert!(text.contains("Purr-Sonal Cat Assistant"));
        assert!(text.contains("here to help you."));
    }

    #[test]
    fn test_render_long_store_shows_newest_message() {
        let messages = (0..30).map(|i| Message::assistant(format!("msg-{i:05}"))).collect();
        let config = UiConfig { scroll: ScrollBehavior::Smooth, ..UiConfig::default() };
        let text = render_to_string(TranscriptStore::from_messages(messages), &config, 80, 24).unwrap();

        assert!(text.contains("msg-00029"));
        assert!(!text.contains("msg-00000"));
    }

    #[test]
    fn test_render_rejects_zero_area() {
        assert!(render_to_string(TranscriptStore::new(), &UiConfig::default(), 0, 10).is_err());
    }

    #[test]
    fn test_render_live_response_shows_cursor() {
        let mut store = TranscriptStore::from_messages(vec![Message::user("Tell me a joke")]);
        store.set_live_response("Why did the cat");
        let text = render_to_string(store, &UiConfig::default(), 80, 24).unwrap();
        assert!(text.contains("Why did the cat"));
        assert!(text.contains("▌"));
    }

    #[test]
    fn test_buffer_to_string_row_count() {
        let buffer = Buffer::empty(ratatui::layout::Rect::new(0, 0, 4, 3));
        assert_eq!(buffer_to_string(&buffer), "\n\n");
    }
}
