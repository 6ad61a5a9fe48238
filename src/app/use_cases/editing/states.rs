//! Use-Cases: Zustände hinzufügen, entfernen, umbenennen, markieren.

use crate::app::edit_action::EditAction;
use crate::app::AppState;
use crate::core::{State, StateId};

/// Label eines Zustands für Anzeige-Texte
pub(crate) fn label_of(state: &AppState, id: &StateId) -> String {
    state
        .graph
        .state(id)
        .map_or_else(|| "none".to_string(), |s| s.label.clone())
}

/// Fügt einen neuen Zustand `q{n}` an der gegebenen Position hinzu.
///
/// Gibt es noch keinen Start-Zustand, wird der neue Zustand zum Start.
pub fn add_state(state: &mut AppState, position: glam::Vec2) -> StateId {
    let position = state.options.snap_position(position);
    let label = state.graph.next_state_label();
    let id = state.graph.allocate_state_id();
    let made_start = state.graph.start_state().is_none();
    let new_state = State::new(id.clone(), label.clone(), position);

    state.push_action(
        format!("Add \"{label}\""),
        EditAction::AddState {
            state: new_state,
            made_start,
        },
    );
    log::info!(
        "Zustand {} an Position ({:.1}, {:.1}) hinzugefügt",
        label,
        position.x,
        position.y
    );
    id
}

/// Entfernt einen Zustand samt aller berührenden Transitionen.
pub fn remove_state(state: &mut AppState, id: &StateId) {
    if !state.graph.contains_state(id) {
        log::debug!("Zustand {} existiert nicht, nichts zu entfernen", id);
        return;
    }
    let text = format!("Delete Node \"{}\"", label_of(state, id));
    let removal = state.graph.capture_removal(std::slice::from_ref(id), &[]);
    state.push_action(text, EditAction::RemoveEntities { removal });
    state.prune_selection();
}

/// Benennt einen Zustand um (No-op bei gleichem Label).
pub fn rename_state(state: &mut AppState, id: &StateId, label: &str) {
    let Some(current) = state.graph.state(id) else {
        log::debug!("Zustand {} existiert nicht, Umbenennen ignoriert", id);
        return;
    };
    if current.label == label {
        return;
    }
    let old = current.label.clone();
    state.push_action(
        format!("Rename \"{old}\" To \"{label}\""),
        EditAction::RenameState {
            id: id.clone(),
            old,
            new: label.to_string(),
        },
    );
}

/// Setzt das Akzeptanz-Flag eines Zustands.
pub fn set_accept(state: &mut AppState, id: &StateId, is_accept: bool) {
    let Some(current) = state.graph.state(id) else {
        log::debug!("Zustand {} existiert nicht, Akzeptanz ignoriert", id);
        return;
    };
    if current.is_accept == is_accept {
        return;
    }
    let text = format!(
        "Mark \"{}\" as {}",
        current.label,
        if is_accept { "Accepting" } else { "Rejecting" }
    );
    state.push_action(
        text,
        EditAction::SetAccept {
            id: id.clone(),
            old: !is_accept,
            new: is_accept,
        },
    );
}

/// Setzt (oder löscht mit `None`) den Start-Zustand.
pub fn set_start(state: &mut AppState, id: Option<&StateId>) {
    if let Some(id) = id {
        if !state.graph.contains_state(id) {
            log::debug!("Zustand {} existiert nicht, Start ignoriert", id);
            return;
        }
    }
    let old = state.graph.start_state().cloned();
    if old.as_ref() == id {
        return;
    }
    let text = match id {
        Some(id) => format!("Set \"{}\" As Initial Node", label_of(state, id)),
        None => "Set \"none\" As Initial Node".to_string(),
    };
    state.push_action(
        text,
        EditAction::SetStart {
            old,
            new: id.cloned(),
        },
    );
}
