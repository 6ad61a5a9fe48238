//! Use-Cases: Kopieren, Ausschneiden und Einfügen.

use crate::app::edit_action::EditAction;
use crate::app::{AppState, SelectionState};
use glam::Vec2;

fn objects_text(verb: &str, count: usize) -> String {
    format!("{verb} {count} Object{}", if count == 1 { "" } else { "s" })
}

/// Kopiert die Selektion in die Zwischenablage (keine History).
pub fn copy_selection(state: &mut AppState) {
    if state.selection.is_empty() {
        log::debug!("Nichts zum Kopieren selektiert");
        return;
    }
    state.clipboard = state
        .graph
        .copy(&state.selection.state_vec(), &state.selection.transition_vec());
    log::info!(
        "{} Zustände und {} Transitionen kopiert",
        state.clipboard.states.len(),
        state.clipboard.transitions.len()
    );
}

/// Schneidet die Selektion aus (ein Undo-Schritt).
pub fn cut_selection(state: &mut AppState) {
    if state.selection.is_empty() {
        log::debug!("Nichts zum Ausschneiden selektiert");
        return;
    }
    let states = state.selection.state_vec();
    let transitions = state.selection.transition_vec();

    state.clipboard = state.graph.copy(&states, &transitions);
    let removal = state.graph.capture_removal(&states, &transitions);
    let text = objects_text("Cut", removal.object_count());
    state.push_action(text, EditAction::RemoveEntities { removal });
    state.replace_selection(SelectionState::new());
}

/// Fügt die Zwischenablage ein und selektiert die eingefügten Zustände.
///
/// `offset == None` verwendet den Standard-Versatz aus den Optionen.
pub fn paste(state: &mut AppState, offset: Option<Vec2>) {
    if state.clipboard.is_empty() {
        log::debug!("Zwischenablage ist leer");
        return;
    }
    let offset = offset.unwrap_or_else(|| state.options.paste_offset_vec());
    let batch = state.graph.prepare_paste(&state.clipboard, offset);
    // Transitionen kommen nur mit ihren Endpunkten mit
    let count = batch.states.len();
    if count == 0 {
        return;
    }

    let selection = SelectionState {
        state_ids: batch.states.iter().map(|s| s.id.clone()).collect(),
        transition_ids: Default::default(),
    };
    state.push_action(
        objects_text("Paste", count),
        EditAction::Paste {
            batch,
            flipped: Vec::new(),
        },
    );
    state.replace_selection(selection);
}
