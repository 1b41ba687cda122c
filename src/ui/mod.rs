mod config_error;
mod forms;
mod output;
mod selector;
pub mod theme;
mod widgets;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};

use crate::app::state::{AppState, ReplyField};
use crate::task::TaskKind;
use widgets::spinner_char;

pub fn render(frame: &mut Frame, state: &AppState) {
    if let Some(ref message) = state.config_error {
        config_error::render_config_error(frame, message);
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),      // Status bar
            Constraint::Length(3),      // Task selector
            Constraint::Min(7),         // Active form
            Constraint::Percentage(45), // Output pane
            Constraint::Length(1),      // Help bar
        ])
        .split(frame.area());

    let left = format!("quill │ {}", state.task.title());
    let right = if state.any_in_flight() {
        format!("{} Generating", spinner_char())
    } else {
        widgets::truncate_string(&state.status.message, 48)
    };
    widgets::status_bar(frame, chunks[0], &left, &right);

    selector::render_selector(frame, chunks[1], state.task);
    forms::render_form(frame, chunks[2], state);
    output::render_output(frame, chunks[3], state);
    widgets::help_bar(frame, chunks[4], help_hints(state));
}

fn help_hints(state: &AppState) -> &'static [(&'static str, &'static str)] {
    if state.task == TaskKind::ReplyEmail && state.reply.field == ReplyField::Tone {
        return &[
            ("←/→", "tone"),
            ("Tab", "next field"),
            ("Ctrl+S", "generate"),
            ("Ctrl+N/P", "switch task"),
            ("Ctrl+Q", "quit"),
        ];
    }

    if state.active_status().result().is_some_and(|r| !r.sources.is_empty()) {
        return &[
            ("Ctrl+S", "generate"),
            ("Ctrl+↑/↓", "source"),
            ("Ctrl+O", "open source"),
            ("PgUp/PgDn", "scroll"),
            ("Ctrl+N/P", "switch task"),
            ("Ctrl+Q", "quit"),
        ];
    }

    &[
        ("Tab", "next field"),
        ("Ctrl+S", "generate"),
        ("Ctrl+N/P", "switch task"),
        ("PgUp/PgDn", "scroll"),
        ("Ctrl+Q", "quit"),
    ]
}
