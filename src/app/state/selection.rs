use crate::core::{Graph, StateId, TransitionId};
use indexmap::IndexSet;

/// Auswahlbezogener Anwendungszustand
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionState {
    /// Selektierte Zustände (Reihenfolge der Auswahl)
    pub state_ids: IndexSet<StateId>,
    /// Selektierte Transitionen (Reihenfolge der Auswahl)
    pub transition_ids: IndexSet<TransitionId>,
}

impl SelectionState {
    /// Erstellt einen leeren Selektionszustand.
    pub fn new() -> Self {
        Self::default()
    }

    /// Nichts selektiert?
    pub fn is_empty(&self) -> bool {
        self.state_ids.is_empty() && self.transition_ids.is_empty()
    }

    /// Anzahl selektierter Objekte
    pub fn len(&self) -> usize {
        self.state_ids.len() + self.transition_ids.len()
    }

    /// Selektierte Zustände als Vec (für Graph-Operationen)
    pub fn state_vec(&self) -> Vec<StateId> {
        self.state_ids.iter().cloned().collect()
    }

    /// Selektierte Transitionen als Vec (für Graph-Operationen)
    pub fn transition_vec(&self) -> Vec<TransitionId> {
        self.transition_ids.iter().cloned().collect()
    }

    /// Entfernt IDs, die im Graphen nicht mehr existieren (z.B. nach Undo).
    ///
    /// Gibt `true` zurück, wenn sich die Selektion dadurch geändert hat.
    pub fn retain_existing(&mut self, graph: &Graph) -> bool {
        let before = self.len();
        self.state_ids.retain(|id| graph.contains_state(id));
        self.transition_ids.retain(|id| graph.transition(id).is_some());
        self.len() != before
    }
}
