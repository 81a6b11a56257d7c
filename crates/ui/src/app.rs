use crate::components::{IdleAnimation, IdlePlaceholder};
use crate::state::AppState;
use crate::transcript::TranscriptView;

use purrsona_core::logging::PrivacyConfig;
use purrsona_core::{TranscriptStore, UiConfig};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

mod event_loop;
mod keybinds;
mod rendering;
mod reply;

pub use reply::{DEFAULT_TOKEN_DELAY, ReplyEvent, ReplySource, spawn_reply};

/// Main TUI application
///
/// Owns the transcript store, the view that keeps it scrolled to the newest
/// bubble, and the channel the streaming reply task writes into.
pub struct App {
    state: AppState,
    store: TranscriptStore,
    view: TranscriptView,
    idle: IdlePlaceholder,
    frame_interval: Duration,
    privacy: PrivacyConfig,
    reply_source: Arc<dyn ReplySource>,
    reply_tx: mpsc::UnboundedSender<ReplyEvent>,
    reply_rx: mpsc::UnboundedReceiver<ReplyEvent>,
    reply_task: Option<JoinHandle<()>>,
    pub cancel_token: CancellationToken,
    should_exit: bool,
}

impl App {
    pub fn new(config: &UiConfig, store: TranscriptStore, reply_source: Arc<dyn ReplySource>) -> Self {
        let (reply_tx, reply_rx) = mpsc::unbounded_channel();
        let idle = IdlePlaceholder::new(IdleAnimation::from_source(&config.idle_animation), config.idle_prompt.clone());

        Self {
            state: AppState::new(config.theme),
            store,
            view: TranscriptView::new(config.scroll),
            idle,
            frame_interval: Duration::from_millis(config.frame_rate_ms.max(1)),
            privacy: PrivacyConfig::default(),
            reply_source,
            reply_tx,
            reply_rx,
            reply_task: None,
            cancel_token: CancellationToken::new(),
            should_exit: false,
        }
    }

    pub fn with_privacy(mut self, privacy: PrivacyConfig) -> Self {
        self.privacy = privacy;
        self
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut AppState {
        &mut self.state
    }

    pub fn store(&self) -> &TranscriptStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut TranscriptStore {
        &mut self.store
    }

    pub fn view(&self) -> &TranscriptView {
        &self.view
    }

    pub fn frame_interval(&self) -> Duration {
        self.frame_interval
    }

    pub fn should_exit(&self) -> bool {
        self.should_exit
    }

    /// Whether the next frame tick has anything to animate
    ///
    /// True while a reply streams, while a smooth scroll is still easing, or
    /// while the idle placeholder is on screen.
    pub fn is_animating(&self) -> bool {
        self.state.is_generating() || !self.view.anchor().is_settled() || self.store.is_idle()
    }

    /// Run the interactive event loop until the user exits
    pub async fn run(&mut self) -> std::io::Result<()> {
        event_loop::run(self).await
    }
}
