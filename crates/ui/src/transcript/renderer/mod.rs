mod bubble;
mod scrollbar;
mod wrap;

pub use bubble::{AVATAR_GLYPH, STREAMING_CURSOR};

use crate::components::IdlePlaceholder;
use crate::theme::ThemePalette;
use crate::transcript::compose::{Bubble, TranscriptFrame, compose};
use crate::transcript::view::TranscriptView;
use purrsona_core::Message;

use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Text},
    widgets::{Block, Paragraph},
};

const PADDING_LEFT: u16 = 1;
const SCROLLBAR_WIDTH: u16 = 1;
const PADDING_RIGHT: u16 = 1;

#[derive(Debug, Clone, Copy, Default)]
pub struct RenderOptions {
    /// Host animation counter, drives the idle animation
    pub animation_frame: u64,
    /// Draw a cursor at the end of the live bubble
    pub streaming_cursor: bool,
}

/// Renders the message history and the live reply to a frame
pub struct TranscriptRenderer<'a> {
    messages: &'a [Message],
    live_response: &'a str,
    idle: &'a IdlePlaceholder,
    theme: ThemePalette,
    options: RenderOptions,
}

impl<'a> TranscriptRenderer<'a> {
    pub fn new(
        messages: &'a [Message], live_response: &'a str, idle: &'a IdlePlaceholder, theme: ThemePalette,
    ) -> Self {
        Self { messages, live_response, idle, theme, options: RenderOptions::default() }
    }

    pub fn with_options(mut self, options: RenderOptions) -> Self {
        self.options = options;
        self
    }

    /// Render to `area`, issuing and resolving scroll requests on `view`
    pub fn render(&self, frame: &mut Frame<'_>, area: Rect, view: &mut TranscriptView) {
        view.observe(self.messages, self.live_response);
        frame.render_widget(Block::default().style(self.theme.base()), area);

        match compose(self.messages, self.live_response) {
            TranscriptFrame::Idle => {
                view.anchor_mut().resolve(None, area.height);
                self.idle.render(frame, area, self.theme, self.options.animation_frame);
            }
            TranscriptFrame::List(bubbles) => {
                let text_area = Self::text_area(area);
                let lines = self.layout_bubbles(&bubbles, text_area.width as usize);
                let marker = lines.len();

                let anchor = view.anchor_mut();
                anchor.resolve(Some(marker), text_area.height);
                anchor.tick();
                let offset = anchor.offset();

                let visible: Vec<Line<'static>> =
                    lines.into_iter().skip(offset).take(text_area.height as usize).collect();
                frame.render_widget(Paragraph::new(Text::from(visible)).style(self.theme.base()), text_area);
                self.render_scrollbar(frame, area, marker, offset);
            }
        }
    }

    /// Pane rows for the current inputs at `area_width`; empty while idle
    pub fn layout(&self, area_width: u16) -> Vec<Line<'static>> {
        let width = Self::text_area(Rect::new(0, 0, area_width, 1)).width as usize;
        self.layout_bubbles(compose(self.messages, self.live_response).bubbles(), width)
    }

    /// Line index just past the last bubble, `None` while idle
    pub fn marker_line(&self, area_width: u16) -> Option<usize> {
        if compose(self.messages, self.live_response).is_idle() {
            None
        } else {
            Some(self.layout(area_width).len())
        }
    }

    fn layout_bubbles(&self, bubbles: &[Bubble<'_>], width: usize) -> Vec<Line<'static>> {
        let mut lines = Vec::new();
        for (idx, bubble) in bubbles.iter().enumerate() {
            if idx > 0 {
                lines.push(Line::default());
            }
            self.render_bubble(bubble, width, &mut lines);
        }
        lines
    }

    fn text_area(area: Rect) -> Rect {
        let trim = PADDING_LEFT + SCROLLBAR_WIDTH + PADDING_RIGHT;
        Rect { x: area.x + PADDING_LEFT.min(area.width), width: area.width.saturating_sub(trim), ..area }
    }
}
