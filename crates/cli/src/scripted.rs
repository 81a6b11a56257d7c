use purrsona_core::Message;
use purrsona_ui::ReplySource;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

const CAT_REPLIES: &[&str] = &[
    "Meow! I'm all ears. Well, mostly whiskers.",
    "Purr... that sounds like a job for a nap first, then a plan.",
    "Let me knead on that for a moment.\n\nOkay, here is what I think: start small, then pounce.",
    "Mrrp? Could you say that again, slower? I was watching a bird.",
    "Every problem looks smaller from the top of a bookshelf.",
];

/// Canned cat replies for demos and tests
///
/// Cycles through a fixed set of replies and streams each one word by word.
pub struct ScriptedCat {
    replies: Vec<String>,
    current: AtomicUsize,
    token_delay: Duration,
}

impl ScriptedCat {
    pub fn new(token_delay: Duration) -> Self {
        Self::with_replies(CAT_REPLIES.iter().map(|r| r.to_string()).collect(), token_delay)
    }

    pub fn with_replies(replies: Vec<String>, token_delay: Duration) -> Self {
        Self { replies, current: AtomicUsize::new(0), token_delay }
    }

    fn next_reply(&self) -> &str {
        if self.replies.is_empty() {
            return "Meow.";
        }
        let index = self.current.fetch_add(1, Ordering::SeqCst);
        &self.replies[index % self.replies.len()]
    }
}

impl ReplySource for ScriptedCat {
    fn reply(&self, history: &[Message]) -> Vec<String> {
        let reply = self.next_reply();
        tracing::debug!(history = history.len(), len = reply.len(), "scripted reply chosen");
        tokenize(reply)
    }

    fn token_delay(&self) -> Duration {
        self.token_delay
    }
}

/// Split text into word tokens that concatenate back to the input
pub fn tokenize(text: &str) -> Vec<String> {
    text.split_inclusive(' ').map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use purrsona_core::TranscriptStore;
    use purrsona_ui::app::spawn_reply;
    use tokio::sync::mpsc;
    use tokio_util::sync::CancellationToken;

    #[test]
    fn test_tokenize_round_trips() {
        let text = "Meow! I'm  all ears.\nPurr";
        assert_eq!(tokenize(text).concat(), text);
        assert_eq!(tokenize("Meow there"), vec!["Meow ", "there"]);
    }

    #[test]
    fn test_tokenize_empty() {
        assert!(tokenize("").is_empty());
    }

    #[test]
    fn test_scripted_cat_cycles_replies() {
        let cat = ScriptedCat::with_replies(vec!["one".to_string(), "two".to_string()], Duration::ZERO);
        assert_eq!(cat.reply(&[]).concat(), "one");
        assert_eq!(cat.reply(&[]).concat(), "two");
        assert_eq!(cat.reply(&[]).concat(), "one");
    }

    #[test]
    fn test_scripted_cat_without_replies() {
        let cat = ScriptedCat::with_replies(Vec::new(), Duration::ZERO);
        assert_eq!(cat.reply(&[]).concat(), "Meow.");
    }

    #[test]
    fn test_scripted_reply_streams_into_store() {
        let cat = ScriptedCat::new(Duration::from_millis(1));
        let tokens = cat.reply(&[Message::user("hello")]);

        let mut store = TranscriptStore::from_messages(vec![Message::user("hello")]);
        tokio_test::block_on(async {
            let (tx, mut rx) = mpsc::unbounded_channel();
            spawn_reply(tokens, cat.token_delay(), tx, CancellationToken::new());
            while let Some(event) = rx.recv().await {
                match event {
                    purrsona_ui::ReplyEvent::Token(token) => store.append_token(&token),
                    purrsona_ui::ReplyEvent::Done => break,
                }
            }
        });

        let committed = store.commit_live_response().unwrap();
        assert_eq!(committed.content, CAT_REPLIES[0]);
        assert_eq!(store.len(), 2);
    }
}
