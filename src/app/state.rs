//! Application state types
//!
//! State types live in the app layer; the UI renders snapshots of them and
//! never mutates. Each task's form owns its own request status, result, and
//! output position, so nothing is shared across tasks.

use crate::ai::{AiEvent, GenerationResult, prompts};
use crate::task::TaskKind;

/// Lifecycle of one form's generation request.
///
/// Transitions are strictly sequential:
/// Idle/Succeeded/Failed -> InFlight -> Succeeded | Failed.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum RequestStatus {
    #[default]
    Idle,
    InFlight,
    Succeeded(GenerationResult),
    Failed(String),
}

impl RequestStatus {
    pub fn is_in_flight(&self) -> bool {
        matches!(self, Self::InFlight)
    }

    pub fn result(&self) -> Option<&GenerationResult> {
        match self {
            Self::Succeeded(result) => Some(result),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            _ => None,
        }
    }
}

/// Focused field in the email reply form.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReplyField {
    #[default]
    Content,
    Tone,
}

impl ReplyField {
    pub fn next(self) -> Self {
        match self {
            Self::Content => Self::Tone,
            Self::Tone => Self::Content,
        }
    }

    pub fn prev(self) -> Self {
        // Two fields - forward and backward are the same swap.
        self.next()
    }
}

/// Focused field in the cancellation form.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CancelField {
    #[default]
    Name,
    Reason,
}

impl CancelField {
    pub fn next(self) -> Self {
        match self {
            Self::Name => Self::Reason,
            Self::Reason => Self::Name,
        }
    }

    pub fn prev(self) -> Self {
        self.next()
    }
}

/// Output pane position, kept per form so switching tasks never mixes
/// scroll or source selection between results.
#[derive(Debug, Clone, Default)]
pub struct OutputState {
    pub scroll: usize,
    pub selected_source: usize,
}

impl OutputState {
    pub fn reset(&mut self) {
        self.scroll = 0;
        self.selected_source = 0;
    }

    pub fn scroll_up(&mut self) {
        self.scroll = self.scroll.saturating_sub(1);
    }

    /// Scroll down, bounded by the rendered line count.
    pub fn scroll_down(&mut self, line_count: usize) {
        let max = line_count.saturating_sub(1);
        if self.scroll < max {
            self.scroll += 1;
        }
    }

    pub fn source_up(&mut self) {
        self.selected_source = self.selected_source.saturating_sub(1);
    }

    pub fn source_down(&mut self, source_count: usize) {
        if self.selected_source + 1 < source_count {
            self.selected_source += 1;
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct EmailReplyForm {
    pub content: String,
    /// Index into [`prompts::TONES`].
    pub tone: usize,
    pub field: ReplyField,
    pub status: RequestStatus,
    pub output: OutputState,
}

impl EmailReplyForm {
    pub fn tone_name(&self) -> &'static str {
        prompts::TONES[self.tone]
    }

    pub fn cycle_tone_forward(&mut self) {
        self.tone = (self.tone + 1) % prompts::TONES.len();
    }

    pub fn cycle_tone_back(&mut self) {
        self.tone = (self.tone + prompts::TONES.len() - 1) % prompts::TONES.len();
    }
}

#[derive(Debug, Clone, Default)]
pub struct CancelForm {
    pub name: String,
    pub reason: String,
    pub field: CancelField,
    pub status: RequestStatus,
    pub output: OutputState,
}

#[derive(Debug, Clone, Default)]
pub struct MeetingForm {
    pub notes: String,
    pub status: RequestStatus,
    pub output: OutputState,
}

/// Transient status-line state
#[derive(Debug, Clone, Default)]
pub struct StatusState {
    pub message: String,
}

impl StatusState {
    pub fn set_message(&mut self, msg: impl ToString) {
        self.message = msg.to_string();
    }
}

#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub task: TaskKind,
    pub reply: EmailReplyForm,
    pub cancel: CancelForm,
    pub meeting: MeetingForm,

    // Status line (transient messages)
    pub status: StatusState,

    /// Set when the API key is missing at startup. Blocks the whole UI
    /// behind a static configuration-error screen.
    pub config_error: Option<String>,
}

impl AppState {
    pub fn set_status(&mut self, msg: impl ToString) {
        self.status.set_message(msg);
    }

    /// Request status of the active task's form.
    pub fn active_status(&self) -> &RequestStatus {
        match self.task {
            TaskKind::ReplyEmail => &self.reply.status,
            TaskKind::CancelSubscription => &self.cancel.status,
            TaskKind::MeetingNotes => &self.meeting.status,
        }
    }

    pub fn active_output(&self) -> &OutputState {
        match self.task {
            TaskKind::ReplyEmail => &self.reply.output,
            TaskKind::CancelSubscription => &self.cancel.output,
            TaskKind::MeetingNotes => &self.meeting.output,
        }
    }

    pub fn active_output_mut(&mut self) -> &mut OutputState {
        let task = self.task;
        self.output_mut(task)
    }

    fn status_mut(&mut self, task: TaskKind) -> &mut RequestStatus {
        match task {
            TaskKind::ReplyEmail => &mut self.reply.status,
            TaskKind::CancelSubscription => &mut self.cancel.status,
            TaskKind::MeetingNotes => &mut self.meeting.status,
        }
    }

    fn output_mut(&mut self, task: TaskKind) -> &mut OutputState {
        match task {
            TaskKind::ReplyEmail => &mut self.reply.output,
            TaskKind::CancelSubscription => &mut self.cancel.output,
            TaskKind::MeetingNotes => &mut self.meeting.output,
        }
    }

    /// Line count of the active form's result text, for scroll bounding.
    pub fn active_result_lines(&self) -> usize {
        self.active_status()
            .result()
            .map(|r| r.text.lines().count())
            .unwrap_or(0)
    }

    /// Source count of the active form's result, for selection bounding.
    pub fn active_source_count(&self) -> usize {
        self.active_status()
            .result()
            .map(|r| r.sources.len())
            .unwrap_or(0)
    }

    pub fn any_in_flight(&self) -> bool {
        self.reply.status.is_in_flight()
            || self.cancel.status.is_in_flight()
            || self.meeting.status.is_in_flight()
    }

    /// Validate the active form and flip it to `InFlight`.
    ///
    /// Returns the task and its built prompt when the form is valid. On a
    /// blank required field the form is marked `Failed` with the fixed
    /// validation message and no prompt is produced, so no remote call can
    /// happen. A form already in flight yields nothing - submission is
    /// disabled for the duration.
    pub fn begin_submit(&mut self) -> Option<(TaskKind, String)> {
        if self.active_status().is_in_flight() {
            return None;
        }

        let task = self.task;
        let prompt = match task {
            TaskKind::ReplyEmail => {
                if self.reply.content.trim().is_empty() {
                    self.reply.status =
                        RequestStatus::Failed("Email content cannot be empty.".to_string());
                    return None;
                }
                prompts::email_reply(self.reply.tone_name(), &self.reply.content)
            }
            TaskKind::CancelSubscription => {
                if self.cancel.name.trim().is_empty() {
                    self.cancel.status =
                        RequestStatus::Failed("Subscription name cannot be empty.".to_string());
                    return None;
                }
                prompts::cancel_subscription(&self.cancel.name, &self.cancel.reason)
            }
            TaskKind::MeetingNotes => {
                if self.meeting.notes.trim().is_empty() {
                    self.meeting.status = RequestStatus::Failed(
                        "Meeting content/transcript cannot be empty.".to_string(),
                    );
                    return None;
                }
                prompts::meeting_notes(&self.meeting.notes)
            }
        };

        *self.status_mut(task) = RequestStatus::InFlight;
        self.output_mut(task).reset();
        Some((task, prompt))
    }

    /// Apply an actor event to the form that issued it.
    ///
    /// Events carry the task they were issued for, so a result lands on the
    /// owning form even if the user has switched tasks meanwhile. A result
    /// for a form that is no longer waiting is stale and is dropped.
    pub fn apply_event(&mut self, event: AiEvent) {
        let (task, status) = match event {
            AiEvent::Completed { task, result } => (task, RequestStatus::Succeeded(result)),
            AiEvent::Failed { task, message } => (task, RequestStatus::Failed(message)),
        };

        let slot = self.status_mut(task);
        if slot.is_in_flight() {
            *slot = status;
            self.output_mut(task).reset();
        } else {
            tracing::debug!("dropping stale AI event for {:?}", task);
        }
    }

    /// Dismiss the active form's error, returning it to `Idle`.
    pub fn dismiss_error(&mut self) {
        let task = self.task;
        let slot = self.status_mut(task);
        if matches!(slot, RequestStatus::Failed(_)) {
            *slot = RequestStatus::Idle;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn succeed(state: &mut AppState, task: TaskKind, text: &str) {
        state.apply_event(AiEvent::Completed {
            task,
            result: GenerationResult {
                text: text.to_string(),
                sources: vec![],
            },
        });
    }

    #[test]
    fn blank_required_field_fails_without_a_prompt() {
        let cases = [
            (TaskKind::ReplyEmail, "Email content cannot be empty."),
            (TaskKind::CancelSubscription, "Subscription name cannot be empty."),
            (TaskKind::MeetingNotes, "Meeting content/transcript cannot be empty."),
        ];

        for (task, message) in cases {
            let mut state = AppState {
                task,
                ..Default::default()
            };
            assert!(state.begin_submit().is_none());
            assert_eq!(state.active_status().error(), Some(message));
        }
    }

    #[test]
    fn whitespace_only_input_is_still_blank() {
        let mut state = AppState::default();
        state.reply.content = "   \n\t ".to_string();
        assert!(state.begin_submit().is_none());
        assert!(matches!(state.reply.status, RequestStatus::Failed(_)));
    }

    #[test]
    fn valid_submit_goes_in_flight_with_prompt() {
        let mut state = AppState::default();
        state.reply.content = "Can we move Friday's meeting?".to_string();
        state.reply.tone = 2; // Concise

        let (task, prompt) = state.begin_submit().expect("submit should produce a prompt");
        assert_eq!(task, TaskKind::ReplyEmail);
        assert!(prompt.contains("Concise"));
        assert!(prompt.contains("Can we move Friday's meeting?"));
        assert!(prompt.contains("Use Google Search"));
        assert!(state.reply.status.is_in_flight());
    }

    #[test]
    fn submit_is_disabled_while_in_flight() {
        let mut state = AppState::default();
        state.reply.content = "hello".to_string();

        assert!(state.begin_submit().is_some());
        // Second submission while the first is pending produces nothing.
        assert!(state.begin_submit().is_none());
        assert!(state.reply.status.is_in_flight());
    }

    #[test]
    fn completed_event_lands_on_the_owning_form() {
        let mut state = AppState::default();
        state.reply.content = "hello".to_string();
        state.begin_submit().unwrap();

        // User switches away before the result arrives.
        state.task = TaskKind::MeetingNotes;
        succeed(&mut state, TaskKind::ReplyEmail, "Sure, does 3pm work?");

        assert_eq!(
            state.reply.status.result().map(|r| r.text.as_str()),
            Some("Sure, does 3pm work?")
        );
        assert_eq!(state.meeting.status, RequestStatus::Idle);
    }

    #[test]
    fn stale_event_for_idle_form_is_dropped() {
        let mut state = AppState::default();
        succeed(&mut state, TaskKind::CancelSubscription, "late arrival");
        assert_eq!(state.cancel.status, RequestStatus::Idle);
    }

    #[test]
    fn failed_event_keeps_form_resubmittable() {
        let mut state = AppState::default();
        state.meeting.notes = "minutes".to_string();
        state.task = TaskKind::MeetingNotes;
        state.begin_submit().unwrap();

        state.apply_event(AiEvent::Failed {
            task: TaskKind::MeetingNotes,
            message: "Gemini API error: 503".to_string(),
        });
        assert_eq!(
            state.meeting.status.error(),
            Some("Gemini API error: 503")
        );

        // The form is still editable and a new submission works.
        assert!(state.begin_submit().is_some());
    }

    #[test]
    fn forms_are_independent_across_tasks() {
        let mut state = AppState::default();
        state.reply.content = "reply body".to_string();
        state.cancel.name = "Netflix".to_string();

        state.begin_submit().unwrap();
        state.task = TaskKind::CancelSubscription;
        state.begin_submit().unwrap();

        succeed(&mut state, TaskKind::ReplyEmail, "reply text");
        assert!(state.reply.status.result().is_some());
        assert!(state.cancel.status.is_in_flight());
    }

    #[test]
    fn cancel_prompt_omits_blank_reason() {
        let mut state = AppState {
            task: TaskKind::CancelSubscription,
            ..Default::default()
        };
        state.cancel.name = "Netflix".to_string();

        let (_, prompt) = state.begin_submit().unwrap();
        assert!(prompt.contains("Netflix"));
        assert!(!prompt.contains("reason for cancellation"));
    }

    #[test]
    fn dismiss_clears_only_a_failed_status() {
        let mut state = AppState::default();
        state.reply.status = RequestStatus::Failed("boom".to_string());
        state.dismiss_error();
        assert_eq!(state.reply.status, RequestStatus::Idle);

        succeed_in_place(&mut state);
        state.dismiss_error();
        assert!(state.reply.status.result().is_some());
    }

    fn succeed_in_place(state: &mut AppState) {
        state.reply.status = RequestStatus::InFlight;
        succeed(state, TaskKind::ReplyEmail, "kept");
    }

    #[test]
    fn tone_cycling_wraps_in_both_directions() {
        let mut form = EmailReplyForm::default();
        assert_eq!(form.tone_name(), "Formal");

        for _ in 0..prompts::TONES.len() {
            form.cycle_tone_forward();
        }
        assert_eq!(form.tone_name(), "Formal");

        form.cycle_tone_back();
        assert_eq!(form.tone_name(), *prompts::TONES.last().unwrap());
    }

    #[test]
    fn output_scroll_and_selection_are_bounded() {
        let mut output = OutputState::default();
        output.scroll_up();
        assert_eq!(output.scroll, 0);

        output.scroll_down(3);
        output.scroll_down(3);
        output.scroll_down(3);
        assert_eq!(output.scroll, 2);

        output.source_down(2);
        output.source_down(2);
        assert_eq!(output.selected_source, 1);
        output.source_up();
        output.source_up();
        assert_eq!(output.selected_source, 0);
    }
}
