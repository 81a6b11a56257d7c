use purrsona_core::ThemeName;

/// Single-line message composer
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComposerState {
    /// Current text
    pub buffer: String,
    /// Cursor position in characters
    pub cursor: usize,
}

impl ComposerState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_char(&mut self, ch: char) {
        let byte_idx = self.byte_index();
        self.buffer.insert(byte_idx, ch);
        self.cursor += 1;
    }

    pub fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        self.cursor -= 1;
        let byte_idx = self.byte_index();
        self.buffer.remove(byte_idx);
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.buffer.chars().count());
    }

    /// Take the buffer for sending; blank input is left in place
    pub fn take_message(&mut self) -> Option<String> {
        if self.buffer.trim().is_empty() {
            return None;
        }
        self.cursor = 0;
        Some(std::mem::take(&mut self.buffer).trim().to_string())
    }

    /// Text before and after the cursor
    pub fn split_at_cursor(&self) -> (&str, &str) {
        self.buffer.split_at(self.byte_index())
    }

    fn byte_index(&self) -> usize {
        self.buffer
            .char_indices()
            .nth(self.cursor)
            .map(|(idx, _)| idx)
            .unwrap_or(self.buffer.len())
    }
}

/// Interactive state owned by the chat screen
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub composer: ComposerState,
    theme: ThemeName,
    generating: bool,
    animation_frame: u64,
}

impl AppState {
    pub fn new(theme: ThemeName) -> Self {
        Self { theme, ..Self::default() }
    }

    pub fn theme(&self) -> ThemeName {
        self.theme
    }

    pub fn toggle_theme(&mut self) {
        self.theme = match self.theme {
            ThemeName::Latte => ThemeName::Midnight,
            ThemeName::Midnight => ThemeName::Latte,
        };
    }

    pub fn is_generating(&self) -> bool {
        self.generating
    }

    pub fn start_generation(&mut self) {
        self.generating = true;
    }

    pub fn stop_generation(&mut self) {
        self.generating = false;
    }

    pub fn animation_frame(&self) -> u64 {
        self.animation_frame
    }

    pub fn advance_animation_frame(&mut self) {
        self.animation_frame = self.animation_frame.wrapping_add(1);
    }
}
