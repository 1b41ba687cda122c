//! Background render thread for non-blocking UI rendering.
//!
//! The render thread owns the Terminal and draws snapshots of AppState sent
//! from the event loop, which stays free to drain AI events and user input.

use std::io;
use std::sync::mpsc::{self, SyncSender, TrySendError};
use std::thread::{self, JoinHandle};

use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};

use super::state::AppState;

/// Command sent to the render thread.
pub enum RenderCommand {
    /// Render this state snapshot
    Render(Box<AppState>),
    /// Shutdown the render thread
    Shutdown,
}

/// Handle to the background render thread.
pub struct RenderThread {
    cmd_tx: SyncSender<RenderCommand>,
    handle: Option<JoinHandle<()>>,
}

impl RenderThread {
    /// Spawn the render thread. Terminal setup and teardown both happen on
    /// the spawned thread so raw mode is always released on exit.
    pub fn spawn() -> io::Result<Self> {
        // Capacity 1: only the latest state matters
        let (cmd_tx, cmd_rx) = mpsc::sync_channel::<RenderCommand>(1);

        let handle = thread::spawn(move || {
            if let Err(e) = enable_raw_mode() {
                tracing::error!("Failed to enable raw mode: {}", e);
                return;
            }

            let mut stdout = io::stdout();
            if let Err(e) = execute!(stdout, EnterAlternateScreen) {
                tracing::error!("Failed to enter alternate screen: {}", e);
                disable_raw_mode().ok();
                return;
            }

            let backend = CrosstermBackend::new(stdout);
            let mut terminal = match Terminal::new(backend) {
                Ok(t) => t,
                Err(e) => {
                    tracing::error!("Failed to create terminal: {}", e);
                    disable_raw_mode().ok();
                    return;
                }
            };

            while let Ok(cmd) = cmd_rx.recv() {
                match cmd {
                    RenderCommand::Render(state) => {
                        if let Err(e) = terminal.draw(|f| crate::ui::render(f, &state)) {
                            tracing::error!("Render error: {}", e);
                        }
                    }
                    RenderCommand::Shutdown => break,
                }
            }

            disable_raw_mode().ok();
            execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
        });

        Ok(Self {
            cmd_tx,
            handle: Some(handle),
        })
    }

    /// Request a render of the given state (non-blocking). If the render
    /// thread is busy the frame is skipped; the next state wins.
    pub fn render(&self, state: AppState) {
        match self.cmd_tx.try_send(RenderCommand::Render(Box::new(state))) {
            Ok(()) => {}
            Err(TrySendError::Full(_)) => {
                tracing::trace!("Render thread busy, skipping frame");
            }
            Err(TrySendError::Disconnected(_)) => {
                tracing::error!("Render thread disconnected");
            }
        }
    }

    /// Shutdown the render thread and wait for terminal cleanup.
    pub fn shutdown(mut self) {
        let _ = self.cmd_tx.send(RenderCommand::Shutdown);

        if let Some(handle) = self.handle.take() {
            handle.join().ok();
        }
    }
}
