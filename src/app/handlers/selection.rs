//! Handler für Selektion und Verschieben.

use crate::app::use_cases;
use crate::app::AppState;
use crate::core::{StateId, TransitionId};
use glam::Vec2;

/// Ersetzt die Selektion.
pub fn set(state: &mut AppState, states: &[StateId], transitions: &[TransitionId]) {
    use_cases::selection::set_selection(state, states, transitions);
}

/// Hebt die aktuelle Selektion auf.
pub fn clear(state: &mut AppState) {
    use_cases::selection::clear_selection(state);
}

/// Selektiert alle Zustände und Transitionen.
pub fn select_all(state: &mut AppState) {
    use_cases::selection::select_all(state);
}

/// Löscht alle selektierten Objekte als ein Undo-Schritt.
pub fn delete_selected(state: &mut AppState) {
    use_cases::selection::delete_selected(state);
}

/// Startet einen Verschiebe-Vorgang.
pub fn begin_move(state: &mut AppState) {
    use_cases::selection::begin_move_selected(state);
}

/// Verschiebt die selektierten Zustände (live, ohne History-Eintrag).
pub fn move_selected(state: &mut AppState, delta: Vec2) {
    use_cases::selection::move_selected_states(state, delta);
}

/// Beendet den Verschiebe-Vorgang und legt den History-Eintrag an.
pub fn end_move(state: &mut AppState) {
    use_cases::selection::end_move_selected(state);
}

/// Verschiebt bestimmte Zustände als einzelnen Undo-Schritt.
pub fn move_states(state: &mut AppState, ids: &[StateId], delta: Vec2) {
    use_cases::selection::move_states(state, ids, delta);
}
