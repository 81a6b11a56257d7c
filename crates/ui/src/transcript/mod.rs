mod compose;
mod renderer;
mod scroll;
mod view;

pub use compose::{ASSISTANT_TEXT_RATIO, Bubble, BubbleAlignment, BubbleSource, TranscriptFrame, compose};
pub use renderer::{AVATAR_GLYPH, RenderOptions, STREAMING_CURSOR, TranscriptRenderer};
pub use scroll::ScrollAnchor;
pub use view::TranscriptView;
