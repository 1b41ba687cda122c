use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

/// Everything a key press can ask the app to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    // Task selector
    NextTask,
    PrevTask,

    // Form navigation
    NextField,
    PrevField,

    // Submission
    Submit,

    // Tone picker (contextual, email reply form only)
    ToneNext,
    TonePrev,

    // Output pane
    ScrollUp,
    ScrollDown,
    NextSource,
    PrevSource,
    OpenSource,

    // Misc
    Dismiss,
    Quit,
}

pub struct KeyBindings {
    bindings: HashMap<KeyEvent, Action>,
}

impl KeyBindings {
    pub fn new() -> Self {
        Self {
            bindings: Self::default_bindings(),
        }
    }

    pub fn get(&self, event: &KeyEvent) -> Option<Action> {
        self.bindings.get(event).copied()
    }

    /// The app is mostly a text editor, so every plain character must stay
    /// free for typing: chords use Ctrl, navigation uses Tab and the
    /// dedicated keys.
    fn default_bindings() -> HashMap<KeyEvent, Action> {
        use KeyCode::*;

        let ctrl = KeyModifiers::CONTROL;
        let shift = KeyModifiers::SHIFT;
        let none = KeyModifiers::NONE;

        let mut map = HashMap::new();
        let mut bind = |code, modifiers, action| {
            map.insert(KeyEvent::new(code, modifiers), action);
        };

        bind(Tab, none, Action::NextField);
        bind(BackTab, shift, Action::PrevField);
        bind(BackTab, none, Action::PrevField);

        bind(Char('s'), ctrl, Action::Submit);

        bind(Char('n'), ctrl, Action::NextTask);
        bind(Char('p'), ctrl, Action::PrevTask);

        bind(PageUp, none, Action::ScrollUp);
        bind(PageDown, none, Action::ScrollDown);

        bind(Up, ctrl, Action::PrevSource);
        bind(Down, ctrl, Action::NextSource);
        bind(Char('o'), ctrl, Action::OpenSource);

        bind(Esc, none, Action::Dismiss);

        bind(Char('q'), ctrl, Action::Quit);
        bind(Char('c'), ctrl, Action::Quit);

        map
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self::new()
    }
}
