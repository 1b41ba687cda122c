//! Action handlers: field edits, task switching, submission, output navigation

use anyhow::Result;

use crate::ai::{AiCommand, AiEvent};
use crate::app::state::{CancelField, ReplyField};
use crate::input::Action;
use crate::task::TaskKind;

use super::App;

impl App {
    pub(crate) async fn handle_action(&mut self, action: Action) -> Result<()> {
        match action {
            Action::NextTask => self.switch_task(self.state.task.next()),
            Action::PrevTask => self.switch_task(self.state.task.prev()),
            Action::NextField => self.cycle_field(true),
            Action::PrevField => self.cycle_field(false),
            Action::ToneNext => self.cycle_tone(true),
            Action::TonePrev => self.cycle_tone(false),
            Action::Submit => self.submit().await,
            Action::ScrollUp => self.state.active_output_mut().scroll_up(),
            Action::ScrollDown => {
                let lines = self.state.active_result_lines();
                self.state.active_output_mut().scroll_down(lines);
            }
            Action::PrevSource => self.state.active_output_mut().source_up(),
            Action::NextSource => {
                let count = self.state.active_source_count();
                self.state.active_output_mut().source_down(count);
            }
            Action::OpenSource => self.open_selected_source(),
            Action::Dismiss => self.state.dismiss_error(),
            // Quit never reaches here; the event loop handles it.
            Action::Quit => {}
        }
        Ok(())
    }

    /// Switch the active task. Forms keep their state (including any
    /// in-flight request) across switches.
    fn switch_task(&mut self, task: TaskKind) {
        self.state.task = task;
        self.state.set_status(task.title());
    }

    fn cycle_field(&mut self, forward: bool) {
        match self.state.task {
            TaskKind::ReplyEmail => {
                let field = self.state.reply.field;
                self.state.reply.field = if forward { field.next() } else { field.prev() };
            }
            TaskKind::CancelSubscription => {
                let field = self.state.cancel.field;
                self.state.cancel.field = if forward { field.next() } else { field.prev() };
            }
            // Single field - nothing to cycle
            TaskKind::MeetingNotes => {}
        }
    }

    fn cycle_tone(&mut self, forward: bool) {
        if self.state.task != TaskKind::ReplyEmail {
            return;
        }
        if forward {
            self.state.reply.cycle_tone_forward();
        } else {
            self.state.reply.cycle_tone_back();
        }
    }

    /// Validate and submit the active form to the AI actor.
    async fn submit(&mut self) {
        // Unreachable behind the config-error screen, but guard anyway.
        let Some(ref ai) = self.ai_actor else {
            return;
        };

        let Some((task, prompt)) = self.state.begin_submit() else {
            return;
        };

        self.state.set_status("Generating...");
        tracing::info!("submitting {:?} generation ({} chars)", task, prompt.len());

        if ai
            .cmd_tx
            .send(AiCommand::Generate { task, prompt })
            .await
            .is_err()
        {
            tracing::error!("AI actor is gone; failing the submission");
            self.state.apply_event(AiEvent::Failed {
                task,
                message: "The generation service is unavailable.".to_string(),
            });
        }
    }

    /// Open the selected cited source in the system browser.
    fn open_selected_source(&mut self) {
        let selected = self.state.active_output().selected_source;
        let uri = self
            .state
            .active_status()
            .result()
            .and_then(|r| r.sources.get(selected))
            .map(|s| s.uri.clone());

        let Some(uri) = uri else {
            return;
        };

        match open::that(&uri) {
            Ok(()) => self.state.set_status(format!("Opened {}", uri)),
            Err(e) => self.state.set_status(format!("Failed to open browser: {}", e)),
        }
    }

    pub(crate) fn handle_char(&mut self, c: char) {
        match self.state.task {
            TaskKind::ReplyEmail => match self.state.reply.field {
                ReplyField::Content => self.state.reply.content.push(c),
                // The tone is cycled with arrows, not typed
                ReplyField::Tone => {}
            },
            TaskKind::CancelSubscription => match self.state.cancel.field {
                CancelField::Name => self.state.cancel.name.push(c),
                CancelField::Reason => self.state.cancel.reason.push(c),
            },
            TaskKind::MeetingNotes => self.state.meeting.notes.push(c),
        }
    }

    pub(crate) fn handle_backspace(&mut self) {
        match self.state.task {
            TaskKind::ReplyEmail => match self.state.reply.field {
                ReplyField::Content => {
                    self.state.reply.content.pop();
                }
                ReplyField::Tone => {}
            },
            TaskKind::CancelSubscription => match self.state.cancel.field {
                CancelField::Name => {
                    self.state.cancel.name.pop();
                }
                CancelField::Reason => {
                    self.state.cancel.reason.pop();
                }
            },
            TaskKind::MeetingNotes => {
                self.state.meeting.notes.pop();
            }
        }
    }
}
