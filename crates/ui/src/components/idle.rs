use crate::theme::ThemePalette;
use purrsona_core::config::{DEFAULT_IDLE_ANIMATION, DEFAULT_IDLE_PROMPT};

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::Paragraph,
};

/// Host animation frames each idle frame is held for
const FRAME_HOLD: u64 = 8;

const PULSE_KITTY: &[[&str; 4]] = &[
    ["           ", "   /\\_/\\   ", "  ( o.o )  ", "   > ^ <   "],
    ["  .     .  ", "   /\\_/\\   ", "  ( o.o )  ", "   > ^ <   "],
    [" .       . ", "   /\\_/\\   ", "  ( -.- )  ", "   > ^ <   "],
    ["  .     .  ", "   /\\_/\\   ", "  ( o.o )  ", "   > ^ <   "],
];

const SLEEPY_KITTY: &[[&str; 4]] = &[
    ["        z  ", "   /\\_/\\   ", "  ( -.- )  ", "   > ^ <   "],
    ["      z    ", "   /\\_/\\   ", "  ( -.- )  ", "   > ^ <   "],
    ["    Z      ", "   /\\_/\\   ", "  ( -.- )  ", "   > ^ <   "],
];

/// Looping animation shown while the transcript is empty
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdleAnimation {
    source: String,
    frames: &'static [[&'static str; 4]],
}

impl IdleAnimation {
    /// Resolve an animation identifier; unknown ones fall back to the pulse kitty
    pub fn from_source(source: &str) -> Self {
        let frames = match animation_key(source).as_str() {
            "pulse_kitty" => PULSE_KITTY,
            "sleepy_kitty" => SLEEPY_KITTY,
            _ => {
                tracing::warn!(source, "unknown idle animation, using {}", DEFAULT_IDLE_ANIMATION);
                PULSE_KITTY
            }
        };
        Self { source: source.to_string(), frames }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    /// Frame to show for a host animation counter
    pub fn frame(&self, animation_frame: u64) -> &'static [&'static str; 4] {
        &self.frames[self.frame_index(animation_frame)]
    }

    fn frame_index(&self, animation_frame: u64) -> usize {
        ((animation_frame / FRAME_HOLD) % self.frames.len() as u64) as usize
    }

    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }
}

impl Default for IdleAnimation {
    fn default() -> Self {
        Self::from_source(DEFAULT_IDLE_ANIMATION)
    }
}

/// `riv/V2/Pulse_kitty.riv` -> `pulse_kitty`
fn animation_key(source: &str) -> String {
    let file = source.rsplit(['/', '\\']).next().unwrap_or(source);
    let stem = file.split('.').next().unwrap_or(file);
    stem.to_lowercase()
}

/// Empty-state placeholder: idle animation above a static prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdlePlaceholder {
    animation: IdleAnimation,
    prompt: String,
}

impl IdlePlaceholder {
    pub fn new(animation: IdleAnimation, prompt: impl Into<String>) -> Self {
        Self { animation, prompt: prompt.into() }
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn animation(&self) -> &IdleAnimation {
        &self.animation
    }

    /// Render centered in `area`; the animation is dropped when space is short
    pub fn render(&self, frame: &mut Frame<'_>, area: Rect, theme: ThemePalette, animation_frame: u64) {
        let prompt_style = Style::default().fg(theme.fg).bg(theme.bg).add_modifier(Modifier::BOLD);
        let art_style = Style::default().fg(theme.accent).bg(theme.bg);

        let prompt_lines: Vec<Line<'static>> = self
            .prompt
            .lines()
            .map(|line| Line::from(Span::styled(line.to_string(), prompt_style)))
            .collect();

        let art = self.animation.frame(animation_frame);
        let full_height = art.len() + 1 + prompt_lines.len();

        let mut lines = Vec::with_capacity(full_height);
        if full_height <= area.height as usize {
            lines.extend(art.iter().map(|row| Line::from(Span::styled(*row, art_style))));
            lines.push(Line::default());
        }
        lines.extend(prompt_lines);

        let height = (lines.len() as u16).min(area.height);
        let top = area.y + area.height.saturating_sub(height) / 2;
        let centered = Rect { y: top, height, ..area };

        let paragraph = Paragraph::new(Text::from(lines))
            .style(theme.base())
            .alignment(Alignment::Center);
        frame.render_widget(paragraph, centered);
    }
}

impl Default for IdlePlaceholder {
    fn default() -> Self {
        Self::new(IdleAnimation::default(), DEFAULT_IDLE_PROMPT)
    }
}
