use super::App;
use crate::components::{Composer, Header};
use crate::layout::TuiLayout;
use crate::theme::Theme;
use crate::transcript::{RenderOptions, TranscriptRenderer};

use ratatui::{Frame, Terminal, backend::CrosstermBackend, layout::Rect, widgets::Block};
use std::io::{Result, Stdout};

pub fn draw(app: &mut App, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
    terminal.draw(|frame| render(app, frame))?;
    Ok(())
}

pub fn render(app: &mut App, frame: &mut Frame<'_>) {
    let size = frame.area();
    let theme = Theme::palette(app.state.theme());

    frame.render_widget(Block::default().style(theme.base()), size);

    let layout = TuiLayout::calculate(inset_area(size, 1, 1, 0, 0));

    Header::new(&app.state, theme).render(frame, layout.header);

    let options =
        RenderOptions { animation_frame: app.state.animation_frame(), streaming_cursor: app.state.is_generating() };
    TranscriptRenderer::new(app.store.messages(), app.store.live_response(), &app.idle, theme)
        .with_options(options)
        .render(frame, layout.transcript, &mut app.view);

    Composer::new(&app.state, theme).render(frame, layout.composer);
}

fn inset_area(area: Rect, left: u16, right: u16, top: u16, bottom: u16) -> Rect {
    let width = area.width.saturating_sub(left + right);
    let height = area.height.saturating_sub(top + bottom);
    if width == 0 || height == 0 {
        return area;
    }
    Rect { x: area.x + left, y: area.y + top, width, height }
}

impl App {
    /// Draw one full frame to the terminal
    pub fn draw(&mut self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
        draw(self, terminal)
    }

    /// Render into an already-open frame; works with any backend
    pub fn render_frame(&mut self, frame: &mut Frame<'_>) {
        render(self, frame);
    }
}
