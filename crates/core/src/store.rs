use crate::error::{Result, TranscriptError};
use crate::message::Message;

use std::path::Path;

/// Conversation history plus the in-flight assistant reply
///
/// The store is the collaborator side of the transcript view: it appends
/// committed messages and replaces the streaming buffer wholesale. Renderers
/// only ever read [`TranscriptStore::messages`] and
/// [`TranscriptStore::live_response`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TranscriptStore {
    messages: Vec<Message>,
    live_response: String,
}

impl TranscriptStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_messages(messages: Vec<Message>) -> Self {
        Self { messages, live_response: String::new() }
    }

    /// Load a transcript file written as a JSON array of messages
    pub fn load_json(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(TranscriptError::NotFound(path.to_path_buf()).into());
        }

        let content = std::fs::read_to_string(path)?;
        let messages: Vec<Message> = serde_json::from_str(&content)
            .map_err(|e| TranscriptError::Malformed { path: path.to_path_buf(), reason: e.to_string() })?;

        tracing::debug!(path = %path.display(), count = messages.len(), "loaded transcript");
        Ok(Self::from_messages(messages))
    }

    /// Append a committed message
    pub fn push(&mut self, message: Message) {
        tracing::debug!(role = %message.role, len = message.content.len(), "message committed");
        self.messages.push(message);
    }

    /// Replace the streaming buffer
    pub fn set_live_response(&mut self, content: impl Into<String>) {
        self.live_response = content.into();
    }

    /// Extend the streaming buffer with one more token
    pub fn append_token(&mut self, token: &str) {
        self.live_response.push_str(token);
    }

    /// Move the streaming buffer into the history as an assistant message
    pub fn commit_live_response(&mut self) -> Option<Message> {
        if self.live_response.is_empty() {
            return None;
        }

        let message = Message::assistant(std::mem::take(&mut self.live_response));
        self.push(message.clone());
        Some(message)
    }

    /// Drop the streaming buffer without committing it
    pub fn clear_live_response(&mut self) {
        self.live_response.clear();
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn live_response(&self) -> &str {
        &self.live_response
    }

    pub fn is_streaming(&self) -> bool {
        !self.live_response.is_empty()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// No committed messages and nothing streaming, so the idle placeholder shows
    pub fn is_idle(&self) -> bool {
        self.messages.is_empty() && self.live_response.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::Role;
    use std::io::Write;

    #[test]
    fn test_store_new_is_empty() {
        let store = TranscriptStore::new();
        assert!(store.is_empty());
        assert!(store.is_idle());
        assert!(!store.is_streaming());
        assert_eq!(store.live_response(), "");
    }

    #[test]
    fn test_push_appends_in_order() {
        let mut store = TranscriptStore::new();
        store.push(Message::user("Hi"));
        store.push(Message::assistant("Meow"));

        assert_eq!(store.len(), 2);
        assert_eq!(store.messages()[0].content, "Hi");
        assert_eq!(store.messages()[1].role, Role::Assistant);
    }

    #[test]
    fn test_set_live_response_replaces() {
        let mut store = TranscriptStore::new();
        store.set_live_response("Hel");
        store.set_live_response("Hello!");
        assert_eq!(store.live_response(), "Hello!");
        assert!(store.is_streaming());
        assert!(!store.is_idle());
    }

    #[test]
    fn test_len_and_is_empty_agree_while_streaming() {
        let mut store = TranscriptStore::new();
        store.set_live_response("Mew");

        assert_eq!(store.len(), 0);
        assert!(store.is_empty());
        assert!(!store.is_idle());

        store.commit_live_response();
        assert_eq!(store.len(), 1);
        assert!(!store.is_empty());
    }

    #[test]
    fn test_append_token() {
        let mut store = TranscriptStore::new();
        store.append_token("Pu");
        store.append_token("rr");
        assert_eq!(store.live_response(), "Purr");
    }

    #[test]
    fn test_commit_live_response() {
        let mut store = TranscriptStore::from_messages(vec![Message::user("Hi")]);
        store.set_live_response("Hello!");

        let committed = store.commit_live_response();
        assert_eq!(committed, Some(Message::assistant("Hello!")));
        assert_eq!(store.len(), 2);
        assert!(!store.is_streaming());
    }

    #[test]
    fn test_commit_empty_is_noop() {
        let mut store = TranscriptStore::from_messages(vec![Message::user("Hi")]);
        assert_eq!(store.commit_live_response(), None);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_clear_live_response_keeps_history() {
        let mut store = TranscriptStore::from_messages(vec![Message::user("Hi")]);
        store.set_live_response("Hel");
        store.clear_live_response();

        assert_eq!(store.messages(), &[Message::user("Hi")]);
        assert!(!store.is_streaming());
    }

    #[test]
    fn test_load_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"[{{"role":"user","content":"Hi"}},{{"role":"","content":"Meow"}}]"#).unwrap();

        let store = TranscriptStore::load_json(file.path()).unwrap();
        assert_eq!(store.messages(), &[Message::user("Hi"), Message::assistant("Meow")]);
    }

    #[test]
    fn test_load_json_non_string_role_reads_as_assistant() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"[{{"role":5,"content":"Meow"}},{{"role":{{"kind":"user"}},"content":"Purr"}}]"#).unwrap();

        let store = TranscriptStore::load_json(file.path()).unwrap();
        assert_eq!(store.messages(), &[Message::assistant("Meow"), Message::assistant("Purr")]);
    }

    #[test]
    fn test_load_json_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = TranscriptStore::load_json(&dir.path().join("missing.json")).unwrap_err();
        assert!(err.to_string().contains("transcript file not found"));
    }

    #[test]
    fn test_load_json_malformed() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"role":"user"}}"#).unwrap();

        let err = TranscriptStore::load_json(file.path()).unwrap_err();
        assert!(err.to_string().contains("malformed transcript"));
    }
}
