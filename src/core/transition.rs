//! Repräsentiert eine Transition zwischen zwei Zuständen.

use super::{StateId, TokenId, TransitionId};
use indexmap::IndexSet;

/// Darstellungsart des Transitions-Pfeils
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LayoutPriority {
    /// Gerader Pfeil (einzige Transition zwischen zwei Zuständen)
    #[default]
    Straight,
    /// Gebogener Pfeil (mehrere Transitionen zwischen demselben Paar)
    Curve,
}

/// Eine Transition zwischen zwei Zuständen
#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    /// Eindeutige, unveränderliche ID
    pub id: TransitionId,
    /// Quell-Zustand
    pub source: StateId,
    /// Ziel-Zustand
    pub dest: StateId,
    /// Akzeptierte Tokens (eindeutig, Einfügereihenfolge bleibt für Serialisierung erhalten)
    pub tokens: IndexSet<TokenId>,
    /// Akzeptiert das leere Wort (ε)
    pub is_epsilon: bool,
    /// Gerade oder gebogen
    pub layout_priority: LayoutPriority,
}

impl Transition {
    /// Erstellt eine neue Transition mit gerader Darstellung
    pub fn new(
        id: TransitionId,
        source: StateId,
        dest: StateId,
        is_epsilon: bool,
        tokens: impl IntoIterator<Item = TokenId>,
    ) -> Self {
        Self {
            id,
            source,
            dest,
            tokens: tokens.into_iter().collect(),
            is_epsilon,
            layout_priority: LayoutPriority::Straight,
        }
    }

    /// Prüft ob der Zustand Quelle oder Ziel dieser Transition ist
    pub fn involves(&self, state_id: &StateId) -> bool {
        &self.source == state_id || &self.dest == state_id
    }

    /// Selbstschleife (Quelle == Ziel)?
    pub fn is_self_loop(&self) -> bool {
        self.source == self.dest
    }

    /// Verbindet diese Transition dasselbe ungeordnete Zustandspaar?
    pub fn connects_pair(&self, a: &StateId, b: &StateId) -> bool {
        (&self.source == a && &self.dest == b) || (&self.source == b && &self.dest == a)
    }
}
