use super::App;

use purrsona_core::{Message, logging};
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

/// Default delay between streamed tokens
pub const DEFAULT_TOKEN_DELAY: Duration = Duration::from_millis(40);

/// Event emitted by a streaming reply task
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplyEvent {
    /// Next fragment of the assistant reply
    Token(String),
    /// The reply finished (or was cancelled)
    Done,
}

/// Something that can answer the conversation so far
///
/// Implementations return the reply already split into the fragments that
/// should be streamed, in order.
pub trait ReplySource: Send + Sync {
    fn reply(&self, history: &[Message]) -> Vec<String>;

    fn token_delay(&self) -> Duration {
        DEFAULT_TOKEN_DELAY
    }
}

/// Stream `tokens` into `tx`, pausing `delay` between each one.
///
/// Always finishes with [`ReplyEvent::Done`] unless the receiver is gone.
pub fn spawn_reply(
    tokens: Vec<String>, delay: Duration, tx: mpsc::UnboundedSender<ReplyEvent>, cancel_token: CancellationToken,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        for token in tokens {
            tokio::select! {
                _ = cancel_token.cancelled() => {
                    tracing::debug!("reply stream cancelled");
                    break;
                }
                _ = tokio::time::sleep(delay) => {
                    if tx.send(ReplyEvent::Token(token)).is_err() {
                        return;
                    }
                }
            }
        }
        let _ = tx.send(ReplyEvent::Done);
    })
}

impl App {
    /// Record the user's message and start streaming a reply to it
    pub(super) fn send_message(&mut self, message: String) {
        tracing::info!(content = %logging::redact_content(&message, &self.privacy), "user message");
        self.store.push(Message::user(message));

        let tokens = self.reply_source.reply(self.store.messages());
        let delay = self.reply_source.token_delay();

        self.store.clear_live_response();
        self.state.start_generation();
        self.reply_task = Some(spawn_reply(tokens, delay, self.reply_tx.clone(), self.cancel_token.child_token()));
    }

    /// Apply one event from the reply stream to the transcript
    pub fn handle_reply_event(&mut self, event: ReplyEvent) {
        match event {
            ReplyEvent::Token(token) => self.store.append_token(&token),
            ReplyEvent::Done => {
                if let Some(reply) = self.store.commit_live_response() {
                    tracing::info!(
                        content = %logging::redact_content(&reply.content, &self.privacy),
                        "assistant reply committed"
                    );
                }
                self.state.stop_generation();
                self.reply_task = None;
            }
        }
    }

    /// Drain every reply event that is already queued without waiting
    pub fn drain_reply_events(&mut self) -> usize {
        let mut handled = 0;
        while let Ok(event) = self.reply_rx.try_recv() {
            self.handle_reply_event(event);
            handled += 1;
        }
        handled
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_spawn_reply_streams_tokens_then_done() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let tokens = vec!["Purr".to_string(), "fect".to_string()];
        spawn_reply(tokens, Duration::from_millis(1), tx, CancellationToken::new()).await.unwrap();

        assert_eq!(rx.recv().await, Some(ReplyEvent::Token("Purr".to_string())));
        assert_eq!(rx.recv().await, Some(ReplyEvent::Token("fect".to_string())));
        assert_eq!(rx.recv().await, Some(ReplyEvent::Done));
    }

    #[tokio::test]
    async fn test_spawn_reply_stops_when_cancelled() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let cancel = CancellationToken::new();
        cancel.cancel();
        let tokens = vec!["never".to_string(); 3];
        spawn_reply(tokens, Duration::from_secs(5), tx, cancel).await.unwrap();

        assert_eq!(rx.recv().await, Some(ReplyEvent::Done));
    }

    #[tokio::test]
    async fn test_spawn_reply_with_no_tokens() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        spawn_reply(Vec::new(), Duration::from_millis(1), tx, CancellationToken::new()).await.unwrap();
        assert_eq!(rx.recv().await, Some(ReplyEvent::Done));
    }
}
