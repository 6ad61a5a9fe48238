//! Render-Szene als expliziter Übergabevertrag zwischen App und Renderer.
//!
//! Lebt im shared-Modul, da `app` sie baut und ein Renderer sie konsumiert.

use crate::core::{ArrowLayout, StateId, TokenId, TransitionId};
use glam::Vec2;

/// Darstellungsdaten eines Zustands
#[derive(Debug, Clone, PartialEq)]
pub struct StateProxy {
    pub id: StateId,
    pub label: String,
    pub position: Vec2,
    pub is_accept: bool,
    pub is_start: bool,
    pub selected: bool,
}

/// Darstellungsdaten einer Transition
#[derive(Debug, Clone, PartialEq)]
pub struct TransitionProxy {
    pub id: TransitionId,
    pub source: StateId,
    pub dest: StateId,
    pub tokens: Vec<TokenId>,
    pub is_epsilon: bool,
    /// Fertige Pfeil-Geometrie inkl. Label
    pub arrow: ArrowLayout,
    pub selected: bool,
}

/// Read-only Daten für einen Render-Frame.
#[derive(Debug, Clone, Default)]
pub struct RenderScene {
    /// Zustände in Einfügereihenfolge
    pub states: Vec<StateProxy>,
    /// Transitionen in Einfügereihenfolge
    pub transitions: Vec<TransitionProxy>,
    /// Radius eines Zustandskreises
    pub node_radius: f32,
    /// Beschriftung für den Undo-Button (falls möglich)
    pub undo_text: Option<String>,
    /// Beschriftung für den Redo-Button (falls möglich)
    pub redo_text: Option<String>,
    /// Zuletzt ausgeführte Commands, neuester zuerst (Debug-Darstellung)
    pub recent_commands: Vec<String>,
}

impl RenderScene {
    /// Gibt zurück, ob die Szene etwas zu zeichnen hat.
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Sucht den Proxy eines Zustands.
    pub fn state(&self, id: &StateId) -> Option<&StateProxy> {
        self.states.iter().find(|s| &s.id == id)
    }

    /// Sucht den Proxy einer Transition.
    pub fn transition(&self, id: &TransitionId) -> Option<&TransitionProxy> {
        self.transitions.iter().find(|t| &t.id == id)
    }
}
