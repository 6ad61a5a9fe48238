//! Parser für Automaten-Snapshots.

use super::{Snapshot, SnapshotError};
use crate::core::{Graph, State, StateId, Token, TokenId, Transition, TransitionId};
use glam::Vec2;
use std::collections::HashSet;

/// Parsed einen Snapshot aus einem JSON-String (ohne Konsistenzprüfung)
pub fn parse_snapshot(json: &str) -> Result<Snapshot, SnapshotError> {
    Ok(serde_json::from_str(json)?)
}

fn check_unique<'a>(
    kind: &'static str,
    ids: impl Iterator<Item = &'a str>,
) -> Result<HashSet<&'a str>, SnapshotError> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(SnapshotError::DuplicateId {
                kind,
                id: id.to_string(),
            });
        }
    }
    Ok(seen)
}

/// Prüft Snapshot-Konsistenz, bevor der Graph angefasst wird
fn check_structure(snapshot: &Snapshot) -> Result<(), SnapshotError> {
    let state_ids = check_unique("Zustands", snapshot.states.iter().map(|s| s.id.as_str()))?;
    for state in &snapshot.states {
        state.check_finite()?;
    }
    check_unique("Token", snapshot.alphabet.iter().map(|t| t.id.as_str()))?;
    check_unique(
        "Transitions",
        snapshot.transitions.iter().map(|t| t.id.as_str()),
    )?;

    for transition in &snapshot.transitions {
        for endpoint in [&transition.source, &transition.dest] {
            if !state_ids.contains(endpoint.as_str()) {
                return Err(SnapshotError::DanglingEndpoint {
                    transition: transition.id.clone(),
                    state: endpoint.clone(),
                });
            }
        }
    }
    Ok(())
}

/// Ersetzt den Inhalt des Graphen durch den Snapshot.
///
/// Strukturfehler (doppelte IDs, unbekannte Endpunkte, Koordinaten außerhalb
/// des `f32`-Bereichs) brechen ab, bevor
/// der Graph verändert wird. Unbekannte Token-, Start- oder Akzeptanz-IDs
/// werden geloggt und übersprungen. Transitionen werden in Datei-Reihenfolge
/// eingefügt, die Paar-Regel gilt wie beim Editieren.
pub fn apply_snapshot(graph: &mut Graph, snapshot: &Snapshot) -> Result<(), SnapshotError> {
    check_structure(snapshot)?;
    graph.clear();

    for record in &snapshot.states {
        graph.insert_state(State::new(
            StateId::new(record.id.as_str()),
            record.label.as_str(),
            Vec2::new(record.x, record.y),
        ));
    }

    for record in &snapshot.alphabet {
        graph.insert_token(Token::new(
            TokenId::new(record.id.as_str()),
            record.symbol.as_str(),
        ));
    }

    for record in &snapshot.transitions {
        let mut tokens = Vec::with_capacity(record.tokens.len());
        for raw in &record.tokens {
            let id = TokenId::new(raw.as_str());
            if graph.token(&id).is_some() {
                tokens.push(id);
            } else {
                log::warn!(
                    "Transition {}: unbekanntes Token {} übersprungen",
                    record.id,
                    raw
                );
            }
        }
        graph.insert_transition(Transition::new(
            TransitionId::new(record.id.as_str()),
            StateId::new(record.source.as_str()),
            StateId::new(record.dest.as_str()),
            record.is_epsilon_transition,
            tokens,
        ));
    }

    if let Some(raw) = &snapshot.start_state {
        let id = StateId::new(raw.as_str());
        if !graph.set_start(Some(&id)) {
            log::warn!("Start-Zustand {} existiert nicht, übersprungen", raw);
        }
    }

    for raw in &snapshot.accept_states {
        if graph.set_accept(&StateId::new(raw.as_str()), true).is_none() {
            log::warn!("Akzeptanz-Zustand {} existiert nicht, übersprungen", raw);
        }
    }

    graph.resync_label_counter();
    Ok(())
}

/// Parsed JSON und ersetzt den Graph-Inhalt (siehe `apply_snapshot`)
pub fn load_snapshot(graph: &mut Graph, json: &str) -> Result<(), SnapshotError> {
    let snapshot = parse_snapshot(json)?;
    apply_snapshot(graph, &snapshot)?;
    log::info!(
        "Automat geladen: {} Zustände, {} Transitionen, {} Tokens",
        graph.state_count(),
        graph.transition_count(),
        graph.token_count()
    );
    Ok(())
}
