//! Shared test utilities.

#![allow(dead_code, unused_imports)]

use counter_tui::counter::CounterAction;
use counter_tui::root::build_store;
use counter_tui::ui::app::App;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};
use std::path::PathBuf;
use tempfile::TempDir;

pub fn make_app(initial: i64) -> App {
    App::new(build_store(initial)).expect("counter slice registered")
}

pub fn press_key(code: KeyCode) -> KeyEvent {
    KeyEvent {
        code,
        modifiers: KeyModifiers::empty(),
        kind: KeyEventKind::Press,
        state: KeyEventState::empty(),
    }
}

/// All action sequences of length `len`.
pub fn sequences(len: usize) -> Vec<Vec<CounterAction>> {
    let alphabet = [
        CounterAction::Increment,
        CounterAction::Decrement,
        CounterAction::Reset,
    ];
    let mut out = vec![Vec::new()];
    for _ in 0..len {
        out = out
            .into_iter()
            .flat_map(|prefix: Vec<CounterAction>| {
                alphabet.iter().map(move |action| {
                    let mut next = prefix.clone();
                    next.push(*action);
                    next
                })
            })
            .collect();
    }
    out
}

/// Write `content` to a config.toml in a fresh temp dir.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}
