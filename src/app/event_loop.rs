//! Main event loop and AI event processing

use anyhow::Result;
use crossterm::event;
use std::time::Duration;

use crate::ai::AiEvent;
use crate::constants::{INPUT_POLL_BUSY_MS, INPUT_POLL_IDLE_MS};
use crate::input::{InputResult, handle_input};

use super::App;
use super::render_thread::RenderThread;

impl App {
    pub(crate) async fn event_loop(&mut self, render_thread: &RenderThread) -> Result<()> {
        loop {
            // Drain AI events FIRST (non-blocking) - prioritize responsiveness
            if self.process_ai_events() {
                self.dirty = true;
            }

            // The spinner must keep animating while a request is pending
            if self.state.any_in_flight() {
                self.dirty = true;
            }

            // Render only when dirty (non-blocking - sends to render thread)
            if self.dirty {
                render_thread.render(self.state.clone());
                self.dirty = false;
            }

            // Handle input (adaptive timeout: faster while generating)
            let poll_timeout = if self.state.any_in_flight() {
                INPUT_POLL_BUSY_MS
            } else {
                INPUT_POLL_IDLE_MS
            };
            if event::poll(Duration::from_millis(poll_timeout))? {
                let evt = event::read()?;
                // Any input event (including resize) requires re-render
                self.dirty = true;
                match handle_input(evt, &self.state, &self.bindings) {
                    InputResult::Quit => break,
                    InputResult::Action(action) => {
                        self.handle_action(action).await?;
                    }
                    InputResult::Char(c) => {
                        self.handle_char(c);
                    }
                    InputResult::Backspace => {
                        self.handle_backspace();
                    }
                    InputResult::Continue => {}
                }
            }
        }

        Ok(())
    }

    /// Drain events from the AI actor (non-blocking). Returns true if any
    /// events were processed.
    pub(crate) fn process_ai_events(&mut self) -> bool {
        let Some(ref mut ai) = self.ai_actor else {
            return false;
        };

        let mut had_events = false;
        while let Ok(event) = ai.event_rx.try_recv() {
            had_events = true;
            let message = match &event {
                AiEvent::Completed { task, result } => {
                    tracing::info!(
                        "{:?} generation complete ({} sources)",
                        task,
                        result.sources.len()
                    );
                    "Draft ready"
                }
                AiEvent::Failed { task, message } => {
                    tracing::warn!("{:?} generation failed: {}", task, message);
                    "Generation failed"
                }
            };
            self.state.apply_event(event);
            self.state.set_status(message);
        }
        had_events
    }
}
