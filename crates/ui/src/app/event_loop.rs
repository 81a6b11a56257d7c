use super::App;
use crate::event_handler::EventHandler;

use crossterm::{cursor, event, terminal};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{Result, Write};
use std::{panic, time::Duration};

const INPUT_POLL: Duration = Duration::from_millis(10);

/// Puts the terminal back in cooked mode on the main screen when dropped,
/// so early `?` returns leave the shell usable
struct TerminalGuard<W: Write> {
    out: W,
    raw_mode: bool,
    restored: bool,
}

impl<W: Write> TerminalGuard<W> {
    fn enter(out: W) -> Result<Self> {
        terminal::enable_raw_mode()?;
        let mut guard = Self { out, raw_mode: true, restored: false };
        crossterm::execute!(guard.out, terminal::EnterAlternateScreen, event::EnableMouseCapture)?;
        Ok(guard)
    }

    fn restore(&mut self) -> Result<()> {
        if self.restored {
            return Ok(());
        }
        self.restored = true;

        if self.raw_mode {
            terminal::disable_raw_mode()?;
        }
        crossterm::execute!(self.out, event::DisableMouseCapture, terminal::LeaveAlternateScreen, cursor::Show)
    }
}

impl<W: Write> Drop for TerminalGuard<W> {
    fn drop(&mut self) {
        if let Err(e) = self.restore() {
            tracing::warn!("failed to restore terminal: {}", e);
        }
    }
}

pub async fn run(app: &mut App) -> Result<()> {
    let mut guard = TerminalGuard::enter(std::io::stdout())?;

    let backend = CrosstermBackend::new(std::io::stdout());
    let mut terminal = Terminal::new(backend)?;

    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = terminal::disable_raw_mode();
        let _ = crossterm::execute!(
            std::io::stdout(),
            event::DisableMouseCapture,
            terminal::LeaveAlternateScreen,
            cursor::Show
        );
        original_hook(panic_info);
    }));

    let result = event_loop(app, &mut terminal).await;

    app.cancel_token.cancel();
    if let Some(task) = app.reply_task.take() {
        task.abort();
    }
    app.state.stop_generation();
    tracing::info!(messages = app.store.len(), "tui stopped");

    guard.restore()?;
    result
}

async fn event_loop(app: &mut App, terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>) -> Result<()> {
    terminal.clear()?;
    app.draw(terminal)?;

    let mut frame_tick = tokio::time::interval(app.frame_interval());
    frame_tick.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);
    tracing::info!(messages = app.store.len(), "tui started");

    while !app.should_exit {
        let tui_poll = async {
            tokio::time::sleep(INPUT_POLL).await;
            EventHandler::read(Duration::ZERO)
        };
        let animating = app.is_animating();

        tokio::select! {
            maybe_event = tui_poll => {
                if let Some(event) = maybe_event {
                    app.handle_event(event);
                    app.draw(terminal)?;
                }
            }
            maybe_reply = app.reply_rx.recv() => {
                if let Some(event) = maybe_reply {
                    app.handle_reply_event(event);
                    app.draw(terminal)?;
                }
            }
            _ = frame_tick.tick(), if animating => {
                app.state.advance_animation_frame();
                app.draw(terminal)?;
            }
        }
    }

    Ok(())
}
