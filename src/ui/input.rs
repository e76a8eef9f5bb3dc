use crate::counter::CounterAction;
use crate::ui::app::App;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// What a key press asks the app to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCommand {
    Dispatch(CounterAction),
    Quit,
}

/// One row of the key map: the keys that trigger `command`, and how the
/// footer names it.
#[derive(Debug, Clone, Copy)]
pub struct KeyBinding {
    pub command: KeyCommand,
    pub codes: &'static [KeyCode],
    pub label: &'static str,
}

/// Ctrl+<this> quits regardless of the table below.
pub const QUIT_CHORD: char = 'c';

pub const KEY_BINDINGS: &[KeyBinding] = &[
    KeyBinding {
        command: KeyCommand::Dispatch(CounterAction::Increment),
        codes: &[KeyCode::Char('+'), KeyCode::Char('='), KeyCode::Char('k'), KeyCode::Up],
        label: "Increment",
    },
    KeyBinding {
        command: KeyCommand::Dispatch(CounterAction::Decrement),
        codes: &[KeyCode::Char('-'), KeyCode::Char('_'), KeyCode::Char('j'), KeyCode::Down],
        label: "Decrement",
    },
    KeyBinding {
        command: KeyCommand::Dispatch(CounterAction::Reset),
        codes: &[KeyCode::Char('r'), KeyCode::Char('R'), KeyCode::Char('0')],
        label: "Reset",
    },
    KeyBinding {
        command: KeyCommand::Quit,
        codes: &[KeyCode::Char('q'), KeyCode::Char('Q'), KeyCode::Esc],
        label: "Quit",
    },
];

pub fn handle_key(app: &mut App, key: KeyEvent) {
    match key_command(key) {
        Some(KeyCommand::Dispatch(action)) => app.dispatch(action),
        Some(KeyCommand::Quit) => app.request_quit(),
        None => {}
    }
}

/// Map a key event to a command. Releases and repeats are ignored.
pub fn key_command(key: KeyEvent) -> Option<KeyCommand> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    if is_ctrl_char(key, QUIT_CHORD) {
        return Some(KeyCommand::Quit);
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return None;
    }

    KEY_BINDINGS
        .iter()
        .find(|binding| binding.codes.contains(&key.code))
        .map(|binding| binding.command)
}

/// Short on-screen name of a key.
pub fn key_label(code: KeyCode) -> String {
    match code {
        KeyCode::Char(ch) => ch.to_string(),
        KeyCode::Up => "↑".to_string(),
        KeyCode::Down => "↓".to_string(),
        KeyCode::Esc => "Esc".to_string(),
        other => format!("{:?}", other),
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}
