use super::wrap::{pad_to_width, wrap_text_to_width};
use crate::layout::LayoutMode;
use crate::transcript::compose::{Bubble, BubbleAlignment};

use ratatui::{
    style::Style,
    text::{Line, Span},
};
use unicode_width::UnicodeWidthStr;

/// Cat badge drawn beside every assistant bubble
pub const AVATAR_GLYPH: &str = "=^.^=";
/// Cursor appended to a live bubble while the host reports streaming
pub const STREAMING_CURSOR: &str = "▌";

const PADDING_X: usize = 2;
const PADDING_Y: usize = 1;
const AVATAR_GAP: usize = 1;
const MIN_BUBBLE_WIDTH: usize = 12;

/// Column budget of one bubble inside a pane
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct BubbleGeometry {
    /// Full bubble width including padding
    pub(crate) width: usize,
    /// Width available for the avatar column and text
    pub(crate) inner: usize,
    /// Width given to text
    pub(crate) text: usize,
    /// Leading pane columns before the bubble starts
    pub(crate) indent: usize,
}

impl BubbleGeometry {
    pub(crate) fn for_bubble(bubble: &Bubble<'_>, pane_width: usize) -> Self {
        let mode = LayoutMode::from(pane_width.min(u16::MAX as usize) as u16);
        let width = mode.bubble_width(pane_width).max(MIN_BUBBLE_WIDTH).min(pane_width);
        let inner = width.saturating_sub(PADDING_X * 2);

        let text = if bubble.has_avatar() {
            let narrowed = (inner as f32 * bubble.text_ratio()).floor() as usize;
            narrowed.min(inner.saturating_sub(AVATAR_GLYPH.width() + AVATAR_GAP))
        } else {
            inner
        };

        let indent = match bubble.alignment() {
            BubbleAlignment::Left => 0,
            BubbleAlignment::Right => pane_width.saturating_sub(width),
        };

        Self { width, inner, text: text.max(1), indent }
    }
}

impl<'a> super::TranscriptRenderer<'a> {
    /// Lay out one bubble as pane rows
    pub(super) fn render_bubble(&self, bubble: &Bubble<'_>, pane_width: usize, lines: &mut Vec<Line<'static>>) {
        let geometry = BubbleGeometry::for_bubble(bubble, pane_width);
        let style = if bubble.role.is_user() { self.theme.user_bubble() } else { self.theme.assistant_bubble() };

        let mut rows = wrap_text_to_width(bubble.content, geometry.text);
        if bubble.is_live() && self.options.streaming_cursor {
            push_cursor(&mut rows, geometry.text);
        }

        for _ in 0..PADDING_Y {
            lines.push(self.bubble_row(geometry, vec![Span::styled(" ".repeat(geometry.width), style)]));
        }

        for (idx, row) in rows.iter().enumerate() {
            let spans = if bubble.has_avatar() {
                self.assistant_row(row, idx == 0, geometry, style)
            } else {
                user_row(row, geometry, style)
            };
            lines.push(self.bubble_row(geometry, spans));
        }

        for _ in 0..PADDING_Y {
            lines.push(self.bubble_row(geometry, vec![Span::styled(" ".repeat(geometry.width), style)]));
        }
    }

    fn assistant_row(
        &self, row: &str, first: bool, geometry: BubbleGeometry, style: Style,
    ) -> Vec<Span<'static>> {
        let avatar_width = AVATAR_GLYPH.width();
        let avatar = if first {
            Span::styled(AVATAR_GLYPH, self.theme.avatar())
        } else {
            Span::styled(" ".repeat(avatar_width), style)
        };

        let used = PADDING_X + avatar_width + AVATAR_GAP + geometry.text;
        vec![
            Span::styled(" ".repeat(PADDING_X), style),
            avatar,
            Span::styled(" ".repeat(AVATAR_GAP), style),
            Span::styled(pad_to_width(row, geometry.text, false), style),
            Span::styled(" ".repeat(geometry.width.saturating_sub(used)), style),
        ]
    }

    fn bubble_row(&self, geometry: BubbleGeometry, mut spans: Vec<Span<'static>>) -> Line<'static> {
        if geometry.indent > 0 {
            spans.insert(0, Span::styled(" ".repeat(geometry.indent), Style::default().bg(self.theme.bg)));
        }
        Line::from(spans)
    }
}

fn user_row(row: &str, geometry: BubbleGeometry, style: Style) -> Vec<Span<'static>> {
    vec![
        Span::styled(" ".repeat(PADDING_X), style),
        Span::styled(pad_to_width(row, geometry.inner, true), style),
        Span::styled(" ".repeat(PADDING_X), style),
    ]
}

fn push_cursor(rows: &mut Vec<String>, text_width: usize) {
    match rows.last_mut() {
        Some(last) if last.width() + STREAMING_CURSOR.width() <= text_width => last.push_str(STREAMING_CURSOR),
        _ => rows.push(STREAMING_CURSOR.to_string()),
    }
}
