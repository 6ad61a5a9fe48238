//! Handler für Zustände, Transitionen und Alphabet.

use crate::app::use_cases;
use crate::app::AppState;
use crate::core::{StateId, TokenId, TransitionId};

/// Fügt einen neuen Zustand an der übergebenen Position hinzu.
pub fn add_state(state: &mut AppState, position: glam::Vec2) {
    use_cases::editing::add_state(state, position);
}

/// Entfernt einen Zustand samt berührender Transitionen.
pub fn remove_state(state: &mut AppState, id: &StateId) {
    use_cases::editing::remove_state(state, id);
}

pub fn rename_state(state: &mut AppState, id: &StateId, label: &str) {
    use_cases::editing::rename_state(state, id, label);
}

pub fn set_accept(state: &mut AppState, id: &StateId, is_accept: bool) {
    use_cases::editing::set_accept(state, id, is_accept);
}

pub fn set_start(state: &mut AppState, id: Option<&StateId>) {
    use_cases::editing::set_start(state, id);
}

/// Erstellt eine Transition zwischen zwei Zuständen.
pub fn add_transition(
    state: &mut AppState,
    source: &StateId,
    dest: &StateId,
    is_epsilon: bool,
    tokens: &[TokenId],
) {
    use_cases::editing::add_transition(state, source, dest, is_epsilon, tokens);
}

/// Verbindet zwei Zustände (bestehende Transition wird selektiert).
pub fn connect_states(state: &mut AppState, source: &StateId, dest: &StateId) {
    use_cases::editing::connect_states(state, source, dest);
}

pub fn remove_transition(state: &mut AppState, id: &TransitionId) {
    use_cases::editing::remove_transition(state, id);
}

pub fn set_transition_token(
    state: &mut AppState,
    transition: &TransitionId,
    token: &TokenId,
    accept: bool,
) {
    use_cases::editing::set_transition_token(state, transition, token, accept);
}

pub fn set_transition_epsilon(state: &mut AppState, transition: &TransitionId, is_epsilon: bool) {
    use_cases::editing::set_transition_epsilon(state, transition, is_epsilon);
}

/// Fügt ein neues Token mit leerem Symbol hinzu.
pub fn add_token(state: &mut AppState) {
    use_cases::editing::add_token(state);
}

pub fn remove_token(state: &mut AppState, id: &TokenId) {
    use_cases::editing::remove_token(state, id);
}

pub fn set_token_symbol(state: &mut AppState, id: &TokenId, symbol: &str) {
    use_cases::editing::set_token_symbol(state, id, symbol);
}
