use ratatui::{Frame, layout::Rect, style::Style};

const TRACK_SYMBOL: &str = "│";
const THUMB_SYMBOL: &str = "┃";

/// Rows of the scrollbar covered by the thumb
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Thumb {
    top: u16,
    len: u16,
}

impl Thumb {
    /// `None` when the whole transcript fits in `track` rows
    fn measure(track: u16, total_lines: usize, offset: usize) -> Option<Self> {
        let track_len = track as usize;
        if track_len <= 1 || total_lines <= track_len {
            return None;
        }

        let hidden = total_lines - track_len;
        let len = (track_len * track_len).div_ceil(total_lines).clamp(1, track_len);
        let travel = track_len - len;
        let top = offset.min(hidden) * travel / hidden;

        Some(Self { top: top as u16, len: len as u16 })
    }

    fn contains(&self, row: u16) -> bool {
        row >= self.top && row < self.top + self.len
    }
}

impl<'a> super::TranscriptRenderer<'a> {
    /// Draw a one-column scrollbar on the right edge of `area`
    pub(super) fn render_scrollbar(&self, frame: &mut Frame<'_>, area: Rect, total_lines: usize, offset: usize) {
        let Some(thumb) = Thumb::measure(area.height, total_lines, offset) else {
            return;
        };

        let x = area.right().saturating_sub(1);
        let track = Style::default().fg(self.theme.border).bg(self.theme.bg);
        let handle = Style::default().fg(self.theme.accent).bg(self.theme.bg);

        let buffer = frame.buffer_mut();
        for row in 0..area.height {
            let (symbol, style) = if thumb.contains(row) { (THUMB_SYMBOL, handle) } else { (TRACK_SYMBOL, track) };
            buffer[(x, area.y + row)].set_symbol(symbol).set_style(style);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_thumb_when_content_fits() {
        assert_eq!(Thumb::measure(10, 10, 0), None);
        assert_eq!(Thumb::measure(1, 50, 0), None);
    }

    #[test]
    fn test_thumb_at_top_and_bottom() {
        let top = Thumb::measure(10, 40, 0).unwrap();
        assert_eq!(top, Thumb { top: 0, len: 3 });

        let bottom = Thumb::measure(10, 40, 30).unwrap();
        assert_eq!(bottom.top + bottom.len, 10);
    }

    #[test]
    fn test_offset_past_end_is_clamped() {
        let thumb = Thumb::measure(10, 40, 500).unwrap();
        assert_eq!(thumb.top + thumb.len, 10);
    }

    #[test]
    fn test_long_content_keeps_one_row_thumb() {
        let thumb = Thumb::measure(5, 10_000, 0).unwrap();
        assert_eq!(thumb.len, 1);
        assert!(thumb.contains(0));
        assert!(!thumb.contains(1));
    }
}
