//! Handler für Undo/Redo-Operationen.

use crate::app::AppState;

/// Führt einen Undo-Schritt aus, falls vorhanden.
pub fn undo(state: &mut AppState) {
    // Laufender Drag wird vorher abgeschlossen
    crate::app::use_cases::selection::end_move_selected(state);
    if state.history.undo(&mut state.graph).is_ok() {
        state.prune_selection();
        log::info!("Undo ausgeführt");
    }
}

/// Führt einen Redo-Schritt aus, falls vorhanden.
pub fn redo(state: &mut AppState) {
    crate::app::use_cases::selection::end_move_selected(state);
    if state.history.redo(&mut state.graph).is_ok() {
        state.prune_selection();
        log::info!("Redo ausgeführt");
    }
}
