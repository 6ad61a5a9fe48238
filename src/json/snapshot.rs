use super::SnapshotError;
use crate::core::Graph;
use serde::{Deserialize, Serialize};

/// Serialisierter Zustand
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StateRecord {
    pub id: String,
    pub x: f32,
    pub y: f32,
    pub label: String,
}

/// Serialisiertes Token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenRecord {
    pub id: String,
    pub symbol: String,
}

/// Serialisierte Transition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransitionRecord {
    pub id: String,
    pub source: String,
    pub dest: String,
    #[serde(default)]
    pub is_epsilon_transition: bool,
    #[serde(default)]
    pub tokens: Vec<String>,
}

/// Kompletter Automat als Datei-Snapshot
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    #[serde(default)]
    pub states: Vec<StateRecord>,
    #[serde(default)]
    pub alphabet: Vec<TokenRecord>,
    #[serde(default)]
    pub transitions: Vec<TransitionRecord>,
    #[serde(default)]
    pub start_state: Option<String>,
    #[serde(default)]
    pub accept_states: Vec<String>,
}

impl StateRecord {
    /// Position als endliche `f32`-Koordinaten prüfen
    pub(super) fn check_finite(&self) -> Result<(), SnapshotError> {
        if self.x.is_finite() && self.y.is_finite() {
            Ok(())
        } else {
            Err(SnapshotError::NonFiniteCoordinate {
                state: self.id.clone(),
                x: self.x,
                y: self.y,
            })
        }
    }
}

impl Snapshot {
    /// Projiziert den Graphen auf das Datei-Format
    pub fn from_graph(graph: &Graph) -> Self {
        Self {
            states: graph
                .states()
                .map(|s| StateRecord {
                    id: s.id.to_string(),
                    x: s.position.x,
                    y: s.position.y,
                    label: s.label.clone(),
                })
                .collect(),
            alphabet: graph
                .alphabet()
                .map(|t| TokenRecord {
                    id: t.id.to_string(),
                    symbol: t.symbol.clone(),
                })
                .collect(),
            transitions: graph
                .transitions()
                .map(|t| TransitionRecord {
                    id: t.id.to_string(),
                    source: t.source.to_string(),
                    dest: t.dest.to_string(),
                    is_epsilon_transition: t.is_epsilon,
                    tokens: t.tokens.iter().map(|id| id.to_string()).collect(),
                })
                .collect(),
            start_state: graph.start_state().map(|id| id.to_string()),
            accept_states: graph
                .states()
                .filter(|s| s.is_accept)
                .map(|s| s.id.to_string())
                .collect(),
        }
    }
}
