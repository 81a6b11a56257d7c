use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Width breakpoint between compact and wide transcript layouts
pub const WIDE_BREAKPOINT: u16 = 80;

/// Layout breakpoints for the transcript pane
///
/// - >= 80 cols: bubbles take two thirds of the pane
/// - < 80 cols: bubbles take 90% of the pane
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutMode {
    Wide,
    Compact,
}

impl From<u16> for LayoutMode {
    fn from(width: u16) -> Self {
        if width >= WIDE_BREAKPOINT { Self::Wide } else { Self::Compact }
    }
}

impl LayoutMode {
    /// Bubble width for a pane `width` columns wide
    pub fn bubble_width(&self, width: usize) -> usize {
        match self {
            Self::Wide => width * 2 / 3,
            Self::Compact => width * 9 / 10,
        }
    }
}

/// Calculated layout for the chat screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TuiLayout {
    pub mode: LayoutMode,
    /// Title line
    pub header: Rect,
    /// Transcript pane
    pub transcript: Rect,
    /// Composer (input) line with its border
    pub composer: Rect,
}

impl TuiLayout {
    pub fn calculate(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Min(0), Constraint::Length(3)])
            .split(area);

        Self { mode: LayoutMode::from(area.width), header: chunks[0], transcript: chunks[1], composer: chunks[2] }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_mode_from_width() {
        assert_eq!(LayoutMode::from(120), LayoutMode::Wide);
        assert_eq!(LayoutMode::from(80), LayoutMode::Wide);
        assert_eq!(LayoutMode::from(79), LayoutMode::Compact);
        assert_eq!(LayoutMode::from(20), LayoutMode::Compact);
    }

    #[test]
    fn test_bubble_width() {
        assert_eq!(LayoutMode::Wide.bubble_width(90), 60);
        assert_eq!(LayoutMode::Compact.bubble_width(50), 45);
    }

    #[test]
    fn test_calculate() {
        let layout = TuiLayout::calculate(Rect::new(0, 0, 100, 30));
        assert_eq!(layout.mode, LayoutMode::Wide);
        assert_eq!(layout.header.height, 1);
        assert_eq!(layout.composer.height, 3);
        assert_eq!(layout.transcript.height, 26);
        assert_eq!(layout.transcript.y, 1);
    }
}
