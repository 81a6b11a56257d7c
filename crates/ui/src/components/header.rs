use crate::{state::AppState, theme::ThemePalette};

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

const SPINNER_FRAMES: &[&str] = &["·  ", "·· ", "···", " ··", "  ·", "   "];

/// One-line title bar: name, reply status, theme
pub struct Header<'a> {
    state: &'a AppState,
    theme: ThemePalette,
}

impl<'a> Header<'a> {
    pub fn new(state: &'a AppState, theme: ThemePalette) -> Self {
        Self { state, theme }
    }

    pub fn render(&self, frame: &mut Frame<'_>, area: Rect) {
        if area.height == 0 {
            return;
        }

        let mut spans = vec![
            Span::styled(" purrsona", Style::default().fg(self.theme.fg).add_modifier(Modifier::BOLD)),
            Span::styled(" | ", Style::default().fg(self.theme.muted)),
        ];

        if self.state.is_generating() {
            let step = (self.state.animation_frame() / 4) % SPINNER_FRAMES.len() as u64;
            let spinner = SPINNER_FRAMES[step as usize];
            spans.push(Span::styled("purring", Style::default().fg(self.theme.accent)));
            spans.push(Span::styled(spinner, Style::default().fg(self.theme.accent)));
        } else {
            spans.push(Span::styled("ready", Style::default().fg(self.theme.muted)));
        }

        frame.render_widget(Paragraph::new(Line::from(spans)).style(self.theme.base()), area);

        let right = Span::styled(format!("{} ", self.state.theme()), Style::default().fg(self.theme.muted));
        frame.render_widget(Paragraph::new(Line::from(right)).alignment(Alignment::Right), area);
    }
}
