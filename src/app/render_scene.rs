//! Builder für Render-Szenen aus dem AppState.

use crate::app::AppState;
use crate::core::layout;
use crate::shared::{RenderScene, StateProxy, TransitionProxy};

/// Anzahl der Commands in der Verlaufsanzeige
const RECENT_COMMAND_COUNT: usize = 8;

/// Baut eine RenderScene aus dem aktuellen AppState.
///
/// Pfeil-Geometrie kommt aus dem Layout-Cache; fehlt ein Eintrag
/// (Cache noch nicht aufgefrischt), wird sie direkt berechnet.
pub fn build(state: &AppState) -> RenderScene {
    let graph = &state.graph;
    let start = graph.start_state();

    let states = graph
        .states()
        .map(|s| StateProxy {
            id: s.id.clone(),
            label: s.label.clone(),
            position: s.position,
            is_accept: s.is_accept,
            is_start: start == Some(&s.id),
            selected: state.selection.state_ids.contains(&s.id),
        })
        .collect();

    let metrics = state.layout_cache.metrics();
    let transitions = graph
        .transitions()
        .filter_map(|t| {
            let arrow = match state.layout_cache.get(&t.id) {
                Some(cached) => cached.clone(),
                None => layout::layout_for(graph, t, metrics)?,
            };
            Some(TransitionProxy {
                id: t.id.clone(),
                source: t.source.clone(),
                dest: t.dest.clone(),
                tokens: t.tokens.iter().cloned().collect(),
                is_epsilon: t.is_epsilon,
                arrow,
                selected: state.selection.transition_ids.contains(&t.id),
            })
        })
        .collect();

    RenderScene {
        states,
        transitions,
        node_radius: metrics.node_radius,
        undo_text: state.history.undo_text().map(str::to_string),
        redo_text: state.history.redo_text().map(str::to_string),
        recent_commands: state
            .command_log
            .recent(RECENT_COMMAND_COUNT)
            .map(|command| format!("{command:?}"))
            .collect(),
    }
}
