use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};

use super::keybindings::{Action, KeyBindings};
use crate::app::state::{AppState, CancelField, ReplyField};
use crate::task::TaskKind;

pub enum InputResult {
    Continue,
    Quit,
    Action(Action),
    Char(char),
    Backspace,
}

pub fn handle_input(event: Event, state: &AppState, bindings: &KeyBindings) -> InputResult {
    match event {
        Event::Key(key_event) => handle_key(key_event, state, bindings),
        _ => InputResult::Continue,
    }
}

fn handle_key(key: KeyEvent, state: &AppState, bindings: &KeyBindings) -> InputResult {
    // The configuration-error screen swallows everything except quitting.
    if state.config_error.is_some() {
        return handle_config_error_key(key, bindings);
    }

    // Arrow keys cycle the tone while the tone field is focused.
    if is_tone_field(state)
        && let Some(result) = handle_tone_key(&key)
    {
        return result;
    }

    // Mapped chords first, so Ctrl+S and friends never land in a text field.
    if let Some(action) = bindings.get(&key) {
        if action == Action::Quit {
            return InputResult::Quit;
        }
        return InputResult::Action(action);
    }

    // Everything else is text input for the focused field.
    match key.code {
        KeyCode::Char(c)
            if key.modifiers.is_empty() || key.modifiers == KeyModifiers::SHIFT =>
        {
            InputResult::Char(c)
        }
        KeyCode::Backspace => InputResult::Backspace,
        KeyCode::Enter => {
            if is_multiline_field(state) {
                InputResult::Char('\n')
            } else {
                InputResult::Action(Action::NextField)
            }
        }
        _ => InputResult::Continue,
    }
}

fn handle_config_error_key(key: KeyEvent, bindings: &KeyBindings) -> InputResult {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => InputResult::Quit,
        _ if bindings.get(&key) == Some(Action::Quit) => InputResult::Quit,
        _ => InputResult::Continue,
    }
}

fn is_tone_field(state: &AppState) -> bool {
    state.task == TaskKind::ReplyEmail && state.reply.field == ReplyField::Tone
}

fn handle_tone_key(key: &KeyEvent) -> Option<InputResult> {
    if !key.modifiers.is_empty() {
        return None;
    }
    match key.code {
        KeyCode::Left | KeyCode::Up => Some(InputResult::Action(Action::TonePrev)),
        KeyCode::Right | KeyCode::Down => Some(InputResult::Action(Action::ToneNext)),
        _ => None,
    }
}

/// Multiline fields take Enter as a newline; single-line fields treat it as
/// a hop to the next field.
fn is_multiline_field(state: &AppState) -> bool {
    match state.task {
        TaskKind::ReplyEmail => state.reply.field == ReplyField::Content,
        TaskKind::CancelSubscription => state.cancel.field == CancelField::Reason,
        TaskKind::MeetingNotes => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    #[test]
    fn ctrl_q_quits() {
        let bindings = KeyBindings::new();
        let state = AppState::default();

        let result = handle_key(ctrl('q'), &state, &bindings);
        assert!(matches!(result, InputResult::Quit));
    }

    #[test]
    fn plain_chars_are_text_input() {
        let bindings = KeyBindings::new();
        let state = AppState::default();

        let result = handle_key(key(KeyCode::Char('s')), &state, &bindings);
        assert!(matches!(result, InputResult::Char('s')));
    }

    #[test]
    fn ctrl_s_submits_instead_of_typing() {
        let bindings = KeyBindings::new();
        let state = AppState::default();

        let result = handle_key(ctrl('s'), &state, &bindings);
        assert!(matches!(result, InputResult::Action(Action::Submit)));
    }

    #[test]
    fn enter_is_newline_in_multiline_fields() {
        let bindings = KeyBindings::new();
        let state = AppState {
            task: TaskKind::MeetingNotes,
            ..Default::default()
        };

        let result = handle_key(key(KeyCode::Enter), &state, &bindings);
        assert!(matches!(result, InputResult::Char('\n')));
    }

    #[test]
    fn enter_hops_fields_in_single_line_fields() {
        let bindings = KeyBindings::new();
        let state = AppState {
            task: TaskKind::CancelSubscription,
            ..Default::default()
        };
        assert_eq!(state.cancel.field, CancelField::Name);

        let result = handle_key(key(KeyCode::Enter), &state, &bindings);
        assert!(matches!(result, InputResult::Action(Action::NextField)));
    }

    #[test]
    fn arrows_cycle_tone_when_tone_focused() {
        let bindings = KeyBindings::new();
        let mut state = AppState::default();
        state.reply.field = ReplyField::Tone;

        let result = handle_key(key(KeyCode::Right), &state, &bindings);
        assert!(matches!(result, InputResult::Action(Action::ToneNext)));

        let result = handle_key(key(KeyCode::Left), &state, &bindings);
        assert!(matches!(result, InputResult::Action(Action::TonePrev)));
    }

    #[test]
    fn config_error_screen_ignores_everything_but_quit() {
        let bindings = KeyBindings::new();
        let state = AppState {
            config_error: Some("missing key".to_string()),
            ..Default::default()
        };

        for code in [KeyCode::Char('x'), KeyCode::Enter, KeyCode::Tab] {
            let result = handle_key(key(code), &state, &bindings);
            assert!(matches!(result, InputResult::Continue));
        }
        assert!(matches!(
            handle_key(ctrl('s'), &state, &bindings),
            InputResult::Continue
        ));

        assert!(matches!(
            handle_key(key(KeyCode::Char('q')), &state, &bindings),
            InputResult::Quit
        ));
        assert!(matches!(
            handle_key(key(KeyCode::Esc), &state, &bindings),
            InputResult::Quit
        ));
        assert!(matches!(
            handle_key(ctrl('c'), &state, &bindings),
            InputResult::Quit
        ));
    }
}
