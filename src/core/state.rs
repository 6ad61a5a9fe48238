//! Ein Zustand (Knoten) des Automaten.

use super::StateId;
use glam::Vec2;

/// Zustand mit Label, Position und Akzeptanz-Flag
#[derive(Debug, Clone, PartialEq)]
pub struct State {
    /// Eindeutige, unveränderliche ID
    pub id: StateId,
    /// Anzeigename (Eindeutigkeit ist nur ein Validierungsthema)
    pub label: String,
    /// Position in Weltkoordinaten
    pub position: Vec2,
    /// Akzeptierender Zustand?
    pub is_accept: bool,
}

impl State {
    /// Erstellt einen neuen, nicht-akzeptierenden Zustand
    pub fn new(id: StateId, label: impl Into<String>, position: Vec2) -> Self {
        Self {
            id,
            label: label.into(),
            position,
            is_accept: false,
        }
    }
}
