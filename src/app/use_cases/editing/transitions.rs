//! Use-Cases: Transitionen erstellen, entfernen und konfigurieren.

use super::states::label_of;
use crate::app::edit_action::EditAction;
use crate::app::{AppState, SelectionState};
use crate::core::{StateId, TokenId, Transition, TransitionId};

fn describe(state: &AppState, transition: &Transition) -> String {
    format!(
        "\"{}\" To \"{}\"",
        label_of(state, &transition.source),
        label_of(state, &transition.dest)
    )
}

/// Erstellt eine neue Transition (Paar-Regel für die Darstellung).
///
/// Gibt `None` zurück, wenn Quelle oder Ziel nicht existieren.
pub fn add_transition(
    state: &mut AppState,
    source: &StateId,
    dest: &StateId,
    is_epsilon: bool,
    tokens: &[TokenId],
) -> Option<TransitionId> {
    if !state.graph.contains_state(source) || !state.graph.contains_state(dest) {
        log::warn!(
            "Transition {}→{} nicht erstellt: Zustand existiert nicht",
            source,
            dest
        );
        return None;
    }

    let id = state.graph.allocate_transition_id();
    let tokens: Vec<TokenId> = tokens
        .iter()
        .filter(|t| state.graph.token(t).is_some())
        .cloned()
        .collect();
    let transition = Transition::new(id.clone(), source.clone(), dest.clone(), is_epsilon, tokens);
    let text = format!(
        "Add Transition from \"{}\" to \"{}\"",
        label_of(state, source),
        label_of(state, dest)
    );

    state.push_action(
        text,
        EditAction::AddTransition {
            transition,
            flipped: Vec::new(),
        },
    );
    Some(id)
}

/// Verbindet zwei Zustände: existiert bereits eine `source→dest`-Transition,
/// wird diese selektiert, sonst wird eine neue erstellt.
pub fn connect_states(state: &mut AppState, source: &StateId, dest: &StateId) -> Option<TransitionId> {
    if let Some(existing) = state.graph.find_transition(source, dest) {
        let id = existing.id.clone();
        log::info!("Transition {}→{} existiert bereits, wird selektiert", source, dest);
        let mut selection = SelectionState::new();
        selection.transition_ids.insert(id.clone());
        state.replace_selection(selection);
        return Some(id);
    }
    add_transition(state, source, dest, false, &[])
}

/// Entfernt eine Transition.
pub fn remove_transition(state: &mut AppState, id: &TransitionId) {
    let Some(transition) = state.graph.transition(id) else {
        log::debug!("Transition {} existiert nicht, nichts zu entfernen", id);
        return;
    };
    let text = format!("Remove Transition {}", describe(state, transition));
    let removal = state.graph.capture_removal(&[], std::slice::from_ref(id));
    state.push_action(text, EditAction::RemoveEntities { removal });
    state.prune_selection();
}

/// Wählt ein Token für eine Transition an (`accept`) oder ab.
///
/// No-op, wenn die Mitgliedschaft bereits dem Wunsch entspricht.
pub fn set_transition_token(
    state: &mut AppState,
    transition_id: &TransitionId,
    token_id: &TokenId,
    accept: bool,
) {
    let Some(transition) = state.graph.transition(transition_id) else {
        log::debug!("Transition {} existiert nicht", transition_id);
        return;
    };
    let Some(token) = state.graph.token(token_id) else {
        log::warn!("Token {} ist nicht im Alphabet", token_id);
        return;
    };
    if transition.tokens.contains(token_id) == accept {
        return;
    }

    let verb = if accept { "Use" } else { "Don't Use" };
    let text = format!(
        "{verb} Token \"{}\" For Transition {}",
        token.symbol,
        describe(state, transition)
    );
    state.push_action(
        text,
        EditAction::SetTransitionToken {
            transition: transition_id.clone(),
            token: token_id.clone(),
            include: accept,
            index: None,
        },
    );
}

/// Setzt das ε-Flag einer Transition.
pub fn set_transition_epsilon(state: &mut AppState, transition_id: &TransitionId, is_epsilon: bool) {
    let Some(transition) = state.graph.transition(transition_id) else {
        log::debug!("Transition {} existiert nicht", transition_id);
        return;
    };
    if transition.is_epsilon == is_epsilon {
        return;
    }
    let verb = if is_epsilon { "Use" } else { "Don't Use" };
    let text = format!("{verb} ε For Transition {}", describe(state, transition));
    state.push_action(
        text,
        EditAction::SetEpsilon {
            transition: transition_id.clone(),
            old: !is_epsilon,
            new: is_epsilon,
        },
    );
}
