//! Use-Case: Selektion setzen und selektierte Objekte löschen.

use crate::app::edit_action::EditAction;
use crate::app::{AppState, SelectionState};
use crate::core::{StateId, TransitionId};

/// Ersetzt die Selektion; unbekannte IDs werden verworfen.
pub fn set_selection(state: &mut AppState, states: &[StateId], transitions: &[TransitionId]) {
    let selection = SelectionState {
        state_ids: states
            .iter()
            .filter(|id| state.graph.contains_state(id))
            .cloned()
            .collect(),
        transition_ids: transitions
            .iter()
            .filter(|id| state.graph.transition(id).is_some())
            .cloned()
            .collect(),
    };
    state.replace_selection(selection);
}

/// Hebt die Selektion auf.
pub fn clear_selection(state: &mut AppState) {
    state.replace_selection(SelectionState::new());
}

/// Selektiert alle Zustände und Transitionen.
pub fn select_all(state: &mut AppState) {
    let selection = SelectionState {
        state_ids: state.graph.states().map(|s| s.id.clone()).collect(),
        transition_ids: state.graph.transitions().map(|t| t.id.clone()).collect(),
    };
    state.replace_selection(selection);
}

/// Löscht alle selektierten Objekte in einem Undo-Schritt.
///
/// Transitionen, die einen selektierten Zustand berühren, werden mit entfernt.
pub fn delete_selected(state: &mut AppState) {
    if state.selection.is_empty() {
        log::debug!("Nichts zum Löschen selektiert");
        return;
    }

    let removal = state
        .graph
        .capture_removal(&state.selection.state_vec(), &state.selection.transition_vec());
    if removal.is_empty() {
        clear_selection(state);
        return;
    }

    let count = removal.object_count();
    let text = format!("Delete {count} Object{}", if count == 1 { "" } else { "s" });
    state.push_action(text, EditAction::RemoveEntities { removal });
    clear_selection(state);
    log::info!("{} Objekte gelöscht", count);
}
