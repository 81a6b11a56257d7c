use crate::{state::AppState, theme::ThemePalette};

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

const PLACEHOLDER: &str = "Ask your cat anything...";

/// Input box under the transcript
pub struct Composer<'a> {
    state: &'a AppState,
    theme: ThemePalette,
}

impl<'a> Composer<'a> {
    pub fn new(state: &'a AppState, theme: ThemePalette) -> Self {
        Self { state, theme }
    }

    pub fn render(&self, frame: &mut Frame<'_>, area: Rect) {
        if area.width < 10 || area.height < 3 {
            return;
        }

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.theme.border))
            .style(self.theme.base());
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let cursor = Span::styled("█", Style::default().fg(self.theme.accent));
        let composer = &self.state.composer;
        let spans = if composer.buffer.is_empty() {
            vec![cursor, Span::styled(PLACEHOLDER, self.theme.muted())]
        } else {
            let (before, after) = composer.split_at_cursor();
            vec![
                Span::styled(before.to_string(), self.theme.base()),
                cursor,
                Span::styled(after.to_string(), self.theme.base()),
            ]
        };
        frame.render_widget(Paragraph::new(Line::from(spans)), inner);

        let hint = if self.state.is_generating() { "waiting for reply " } else { "[Enter] send  [Esc] exit " };
        frame.render_widget(
            Paragraph::new(Span::styled(hint, self.theme.muted())).alignment(Alignment::Right),
            inner,
        );
    }
}
