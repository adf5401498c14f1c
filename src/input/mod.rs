use macroquad::prelude::*;

use crate::application::{InputEvent, SessionState};

/// Key bindings, checked in a fixed order so the per-frame event batch
/// is deterministic for a given set of pressed keys.
const BINDINGS: [(KeyCode, InputEvent); 5] = [
    (KeyCode::Up, InputEvent::IncreaseDepth),
    (KeyCode::Down, InputEvent::DecreaseDepth),
    (KeyCode::Space, InputEvent::ToggleMethod),
    (KeyCode::R, InputEvent::Reset),
    (KeyCode::Escape, InputEvent::Quit),
];

/// Drain this frame's key presses into discrete events. An empty batch
/// is the normal case on most frames.
pub fn poll_events() -> Vec<InputEvent> {
    BINDINGS
        .iter()
        .filter(|(key, _)| is_key_pressed(*key))
        .map(|&(_, event)| event)
        .collect()
}

/// Fold a batch of events over the session state
pub fn apply_events(state: SessionState, events: &[InputEvent]) -> SessionState {
    events.iter().fold(state, |s, &event| s.apply(event))
}
