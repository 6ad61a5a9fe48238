//! Use-Case: Verschieben selektierter Zustände.
//!
//! Während eines Drags wird live verschoben; erst `end_move_selected` legt
//! den aufsummierten Versatz als einen Undo-Schritt ab.

use crate::app::edit_action::EditAction;
use crate::app::state::DragState;
use crate::app::AppState;
use crate::core::StateId;
use glam::Vec2;

fn describe_move(state: &AppState, ids: &[StateId]) -> String {
    match ids {
        [single] => format!("Move \"{}\"", crate::app::use_cases::editing::label_of(state, single)),
        _ => format!("Move {} Nodes", ids.len()),
    }
}

/// Startet einen Drag der selektierten Zustände.
pub fn begin_move_selected(state: &mut AppState) {
    if state.selection.state_ids.is_empty() {
        log::debug!("Keine Zustände selektiert, Drag ignoriert");
        return;
    }
    state.drag = Some(DragState {
        state_ids: state.selection.state_vec(),
        accumulated: Vec2::ZERO,
    });
}

/// Verschiebt die selektierten Zustände live (ohne History).
///
/// Ohne vorheriges `begin_move_selected` wird der Drag implizit gestartet.
pub fn move_selected_states(state: &mut AppState, delta: Vec2) {
    if delta == Vec2::ZERO {
        return;
    }
    if state.drag.is_none() {
        begin_move_selected(state);
    }
    let Some(drag) = state.drag.as_mut() else {
        return;
    };
    if state.graph.translate_states(&drag.state_ids, delta) {
        drag.accumulated += delta;
    }
}

/// Beendet den Drag und legt ihn als einen Undo-Schritt ab.
pub fn end_move_selected(state: &mut AppState) {
    let Some(drag) = state.drag.take() else {
        return;
    };
    if drag.accumulated == Vec2::ZERO {
        return;
    }
    let text = describe_move(state, &drag.state_ids);
    state.record_action(
        text,
        EditAction::MoveStates {
            ids: drag.state_ids,
            delta: drag.accumulated,
        },
    );
}

/// Verschiebt Zustände in einem Schritt (mit History).
pub fn move_states(state: &mut AppState, ids: &[StateId], delta: Vec2) {
    let ids: Vec<StateId> = ids
        .iter()
        .filter(|id| state.graph.contains_state(id))
        .cloned()
        .collect();
    if ids.is_empty() || delta == Vec2::ZERO {
        return;
    }
    let text = describe_move(state, &ids);
    state.push_action(text, EditAction::MoveStates { ids, delta });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::use_cases::editing::add_state;

    #[test]
    fn drag_is_one_undo_step() {
        let mut state = AppState::new();
        let id = add_state(&mut state, Vec2::ZERO);
        state.selection.state_ids.insert(id.clone());

        begin_move_selected(&mut state);
        move_selected_states(&mut state, Vec2::new(1.0, 0.0));
        move_selected_states(&mut state, Vec2::new(2.0, 5.0));
        end_move_selected(&mut state);

        assert_eq!(state.graph.state(&id).map(|s| s.position), Some(Vec2::new(3.0, 5.0)));
        assert_eq!(state.history.len(), 2);
        assert_eq!(state.history.undo_text(), Some("Move \"q0\""));

        state
            .history
            .undo(&mut state.graph)
            .expect("Undo erwartet");
        assert_eq!(state.graph.state(&id).map(|s| s.position), Some(Vec2::ZERO));
    }

    #[test]
    fn drag_without_movement_records_nothing() {
        let mut state = AppState::new();
        let id = add_state(&mut state, Vec2::ZERO);
        state.selection.state_ids.insert(id);

        begin_move_selected(&mut state);
        end_move_selected(&mut state);
        assert_eq!(state.history.len(), 1);
    }
}
