use purrsona_core::{Message, Role};

/// Share of an assistant bubble's inner width given to text; the rest is
/// reserved for the avatar column.
pub const ASSISTANT_TEXT_RATIO: f32 = 0.9;

/// Where a bubble's text came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BubbleSource {
    /// Index into the committed transcript
    Committed(usize),
    /// The in-flight streaming buffer
    Live,
}

/// Horizontal placement of a bubble in the pane
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BubbleAlignment {
    Left,
    Right,
}

/// One visual entry of the transcript
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bubble<'a> {
    pub source: BubbleSource,
    pub role: Role,
    pub content: &'a str,
}

impl<'a> Bubble<'a> {
    pub fn alignment(&self) -> BubbleAlignment {
        if self.role.is_user() { BubbleAlignment::Right } else { BubbleAlignment::Left }
    }

    pub fn has_avatar(&self) -> bool {
        !self.role.is_user()
    }

    /// Fraction of the inner bubble width available to text
    pub fn text_ratio(&self) -> f32 {
        if self.role.is_user() { 1.0 } else { ASSISTANT_TEXT_RATIO }
    }

    pub fn is_live(&self) -> bool {
        matches!(self.source, BubbleSource::Live)
    }
}

/// What the transcript pane shows for one pair of inputs
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TranscriptFrame<'a> {
    /// Nothing said yet and nothing streaming
    Idle,
    /// Committed messages in order, then the live reply if any
    List(Vec<Bubble<'a>>),
}

impl<'a> TranscriptFrame<'a> {
    pub fn is_idle(&self) -> bool {
        matches!(self, TranscriptFrame::Idle)
    }

    pub fn bubbles(&self) -> &[Bubble<'a>] {
        match self {
            TranscriptFrame::Idle => &[],
            TranscriptFrame::List(bubbles) => bubbles,
        }
    }
}

/// Reconcile the committed history with the streaming buffer
pub fn compose<'a>(messages: &'a [Message], live_response: &'a str) -> TranscriptFrame<'a> {
    if messages.is_empty() && live_response.is_empty() {
        return TranscriptFrame::Idle;
    }

    let mut bubbles: Vec<Bubble<'a>> = messages
        .iter()
        .enumerate()
        .map(|(index, message)| Bubble {
            source: BubbleSource::Committed(index),
            role: message.role,
            content: &message.content,
        })
        .collect();

    if !live_response.is_empty() {
        bubbles.push(Bubble { source: BubbleSource::Live, role: Role::Assistant, content: live_response });
    }

    TranscriptFrame::List(bubbles)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contents<'a>(frame: &TranscriptFrame<'a>) -> Vec<&'a str> {
        frame.bubbles().iter().map(|b| b.content).collect()
    }

    #[test]
    fn test_empty_inputs_are_idle() {
        let frame = compose(&[], "");
        assert!(frame.is_idle());
        assert!(frame.bubbles().is_empty());
    }

    #[test]
    fn test_live_response_alone_leaves_idle() {
        let frame = compose(&[], "Mew");
        assert!(!frame.is_idle());
        assert_eq!(contents(&frame), vec!["Mew"]);
        assert!(frame.bubbles()[0].is_live());
    }

    #[test]
    fn test_single_user_message() {
        let messages = vec![Message::user("Hi")];
        let frame = compose(&messages, "");

        let bubbles = frame.bubbles();
        assert_eq!(bubbles.len(), 1);
        assert_eq!(bubbles[0].alignment(), BubbleAlignment::Right);
        assert!(!bubbles[0].has_avatar());
        assert_eq!(bubbles[0].text_ratio(), 1.0);
    }

    #[test]
    fn test_live_bubble_is_last() {
        let messages = vec![Message::user("Hi"), Message::assistant("Meow"), Message::user("Treats?")];
        let frame = compose(&messages, "Maybe");

        assert_eq!(contents(&frame), vec!["Hi", "Meow", "Treats?", "Maybe"]);
        let sources: Vec<BubbleSource> = frame.bubbles().iter().map(|b| b.source).collect();
        assert_eq!(
            sources,
            vec![
                BubbleSource::Committed(0),
                BubbleSource::Committed(1),
                BubbleSource::Committed(2),
                BubbleSource::Live,
            ]
        );
    }

    #[test]
    fn test_live_bubble_uses_assistant_layout() {
        let messages = vec![Message::user("Hi")];
        let frame = compose(&messages, "Hel");
        let live = frame.bubbles()[1];

        assert_eq!(live.role, Role::Assistant);
        assert_eq!(live.alignment(), BubbleAlignment::Left);
        assert!(live.has_avatar());
        assert_eq!(live.text_ratio(), ASSISTANT_TEXT_RATIO);
    }

    #[test]
    fn test_replacing_live_response_keeps_bubble_count() {
        let messages = vec![Message::user("Hi")];

        let first = compose(&messages, "Hel");
        let second = compose(&messages, "Hello!");

        assert_eq!(first.bubbles().len(), 2);
        assert_eq!(second.bubbles().len(), 2);
        assert_eq!(contents(&second), vec!["Hi", "Hello!"]);
    }

    #[test]
    fn test_clearing_live_response_removes_bubble_only() {
        let messages = vec![Message::user("Hi")];
        let streaming = compose(&messages, "Hel");
        let cleared = compose(&messages, "");

        assert_eq!(streaming.bubbles().len(), 2);
        assert_eq!(contents(&cleared), vec!["Hi"]);
    }

    #[test]
    fn test_blank_role_renders_as_assistant() {
        let messages = vec![Message::new(Role::parse_lenient(""), "Meow")];
        let frame = compose(&messages, "");
        let bubble = frame.bubbles()[0];

        assert_eq!(bubble.alignment(), BubbleAlignment::Left);
        assert!(bubble.has_avatar());
    }
}
