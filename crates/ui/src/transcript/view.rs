use super::scroll::ScrollAnchor;
use purrsona_core::{Message, ScrollBehavior};

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

/// Per-view transcript state
///
/// Tracks which inputs were last drawn so that every change to the history or
/// the streaming buffer issues exactly one scroll request, and the first
/// observation (initial mount) issues one as well.
#[derive(Debug, Clone, Default)]
pub struct TranscriptView {
    anchor: ScrollAnchor,
    last_seen: Option<u64>,
}

impl TranscriptView {
    pub fn new(behavior: ScrollBehavior) -> Self {
        Self { anchor: ScrollAnchor::new(behavior), last_seen: None }
    }

    /// Record the inputs for this render pass; returns whether they changed
    pub fn observe(&mut self, messages: &[Message], live_response: &str) -> bool {
        let fingerprint = fingerprint(messages, live_response);
        if self.last_seen == Some(fingerprint) {
            return false;
        }

        self.last_seen = Some(fingerprint);
        self.anchor.request();
        true
    }

    pub fn anchor(&self) -> &ScrollAnchor {
        &self.anchor
    }

    pub fn anchor_mut(&mut self) -> &mut ScrollAnchor {
        &mut self.anchor
    }
}

fn fingerprint(messages: &[Message], live_response: &str) -> u64 {
    let mut hasher = DefaultHasher::new();
    messages.hash(&mut hasher);
    live_response.hash(&mut hasher);
    hasher.finish()
}
