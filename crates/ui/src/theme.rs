use purrsona_core::ThemeName;
use ratatui::style::{Color, Style};

/// Resolved colors for one theme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemePalette {
    /// Pane background
    pub bg: Color,
    /// Primary text
    pub fg: Color,
    /// Secondary text (hints, scrollbar track)
    pub muted: Color,
    /// Title and scrollbar thumb
    pub accent: Color,
    pub border: Color,
    /// Background of the user's bubbles
    pub user_bubble: Color,
    /// Background of the cat's bubbles, committed or live
    pub assistant_bubble: Color,
    /// Text inside bubbles
    pub bubble_fg: Color,
    /// Avatar badge
    pub avatar_bg: Color,
    pub avatar_fg: Color,
}

/// Theme lookup for the Purrsona TUI
///
/// Latte follows the chat client's warm cream-and-orange scheme; Midnight
/// keeps the same roles on a dark, blue-black base.
#[derive(Debug, Clone, Copy)]
pub struct Theme;

impl Theme {
    pub const LATTE: ThemePalette = ThemePalette {
        bg: Color::Rgb(255, 251, 247),
        fg: Color::Rgb(74, 52, 38),
        muted: Color::Rgb(160, 138, 122),
        accent: Color::Rgb(255, 165, 0),
        border: Color::Rgb(226, 208, 192),
        user_bubble: Color::Rgb(0xF3, 0xED, 0xE8),
        assistant_bubble: Color::Rgb(0xFA, 0xDF, 0xC9),
        bubble_fg: Color::Rgb(58, 40, 28),
        avatar_bg: Color::Rgb(0xFF, 0xA5, 0x00),
        avatar_fg: Color::Rgb(58, 40, 28),
    };

    pub const MIDNIGHT: ThemePalette = ThemePalette {
        bg: Color::Rgb(22, 24, 33),
        fg: Color::Rgb(198, 200, 209),
        muted: Color::Rgb(107, 112, 137),
        accent: Color::Rgb(226, 164, 120),
        border: Color::Rgb(60, 65, 90),
        user_bubble: Color::Rgb(39, 44, 66),
        assistant_bubble: Color::Rgb(61, 46, 38),
        bubble_fg: Color::Rgb(226, 220, 214),
        avatar_bg: Color::Rgb(0xFF, 0xA5, 0x00),
        avatar_fg: Color::Rgb(22, 24, 33),
    };

    pub fn palette(name: ThemeName) -> ThemePalette {
        match name {
            ThemeName::Latte => Self::LATTE,
            ThemeName::Midnight => Self::MIDNIGHT,
        }
    }
}

impl ThemePalette {
    /// Base style for the pane
    pub fn base(&self) -> Style {
        Style::default().fg(self.fg).bg(self.bg)
    }

    pub fn muted(&self) -> Style {
        Style::default().fg(self.muted).bg(self.bg)
    }

    pub fn user_bubble(&self) -> Style {
        Style::default().fg(self.bubble_fg).bg(self.user_bubble)
    }

    pub fn assistant_bubble(&self) -> Style {
        Style::default().fg(self.bubble_fg).bg(self.assistant_bubble)
    }

    pub fn avatar(&self) -> Style {
        Style::default().fg(self.avatar_fg).bg(self.avatar_bg)
    }
}
