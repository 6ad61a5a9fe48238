//! Kopieren, Einfügen und Ausschneiden von Teilgraphen.

use super::{Graph, RemovalSet};
use crate::core::{State, StateId, Transition, TransitionId};
use glam::Vec2;
use std::collections::HashMap;

/// Kopierte Entitäten (Werte-Kopien, unabhängig vom Graphen)
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Clipboard {
    /// Kopierte Zustände
    pub states: Vec<State>,
    /// Kopierte Transitionen (mit den alten Endpunkt-IDs)
    pub transitions: Vec<Transition>,
}

impl Clipboard {
    /// Nichts kopiert?
    pub fn is_empty(&self) -> bool {
        self.states.is_empty() && self.transitions.is_empty()
    }
}

/// Vorbereitete, noch nicht eingefügte Entitäten mit frischen IDs.
///
/// Wird im Undo-Stack gespeichert, damit Redo exakt dieselben IDs einfügt.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PasteBatch {
    /// Neue Zustände
    pub states: Vec<State>,
    /// Neue Transitionen (Endpunkte bereits umgeschrieben)
    pub transitions: Vec<Transition>,
}

/// Ergebnis eines `paste`-Aufrufs
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PasteResult {
    /// IDs der eingefügten Zustände
    pub states: Vec<StateId>,
    /// IDs der eingefügten Transitionen
    pub transitions: Vec<TransitionId>,
    /// Bereits existierende Transitionen, die auf `Curve` umgestellt wurden
    pub flipped: Vec<TransitionId>,
}

impl Graph {
    /// Kopiert die Auswahl.
    ///
    /// Enthält die gewählten Zustände, die gewählten Transitionen und jede
    /// Transition, deren beide Endpunkte gewählt sind.
    pub fn copy(&self, state_ids: &[StateId], transition_ids: &[TransitionId]) -> Clipboard {
        let states: Vec<State> = self
            .states
            .values()
            .filter(|s| state_ids.contains(&s.id))
            .cloned()
            .collect();

        let transitions = self
            .transitions
            .values()
            .filter(|t| {
                transition_ids.contains(&t.id)
                    || (state_ids.contains(&t.source) && state_ids.contains(&t.dest))
            })
            .cloned()
            .collect();

        Clipboard {
            states,
            transitions,
        }
    }

    /// Erzeugt aus der Zwischenablage neue Entitäten mit frischen IDs.
    ///
    /// Transitionen werden nur übernommen, wenn beide Endpunkte mit
    /// eingefügt werden. Tokens, die nicht mehr im Alphabet sind, fallen weg.
    /// Eingefügte Zustände behalten ihr Label, verbrauchen aber je eine
    /// `q{n}`-Nummer.
    pub fn prepare_paste(&mut self, clipboard: &Clipboard, offset: Vec2) -> PasteBatch {
        let mut id_map: HashMap<StateId, StateId> = HashMap::new();
        let mut states = Vec::with_capacity(clipboard.states.len());

        for original in &clipboard.states {
            let id = self.allocate_state_id();
            self.next_state_label();
            id_map.insert(original.id.clone(), id.clone());
            let mut state = State::new(id, original.label.clone(), original.position + offset);
            state.is_accept = original.is_accept;
            states.push(state);
        }

        let mut transitions = Vec::new();
        for original in &clipboard.transitions {
            let (Some(source), Some(dest)) = (id_map.get(&original.source), id_map.get(&original.dest))
            else {
                continue;
            };
            let tokens: Vec<_> = original
                .tokens
                .iter()
                .filter(|t| self.alphabet.contains_key(*t))
                .cloned()
                .collect();
            let id = self.allocate_transition_id();
            transitions.push(Transition::new(
                id,
                source.clone(),
                dest.clone(),
                original.is_epsilon,
                tokens,
            ));
        }

        PasteBatch {
            states,
            transitions,
        }
    }

    /// Fügt einen vorbereiteten Batch ein; liefert die umgestellten Transitionen
    pub fn insert_batch(&mut self, batch: &PasteBatch) -> Vec<TransitionId> {
        for state in &batch.states {
            self.insert_state(state.clone());
        }
        let mut flipped = Vec::new();
        for transition in &batch.transitions {
            let mut transition = transition.clone();
            // Tokens könnten seit dem Vorbereiten entfernt worden sein
            transition.tokens.retain(|t| self.alphabet.contains_key(t));
            flipped.extend(self.insert_transition(transition));
        }
        flipped
    }

    /// Entfernt einen eingefügten Batch wieder
    pub fn remove_batch(&mut self, batch: &PasteBatch) {
        for transition in &batch.transitions {
            self.transitions.shift_remove(&transition.id);
        }
        for state in &batch.states {
            self.states.shift_remove(&state.id);
            if self.start_state.as_ref() == Some(&state.id) {
                self.start_state = None;
            }
        }
    }

    /// Fügt die Zwischenablage mit Versatz ein
    pub fn paste(&mut self, clipboard: &Clipboard, offset: Vec2) -> PasteResult {
        let batch = self.prepare_paste(clipboard, offset);
        let flipped = self.insert_batch(&batch);
        PasteResult {
            states: batch.states.iter().map(|s| s.id.clone()).collect(),
            transitions: batch.transitions.iter().map(|t| t.id.clone()).collect(),
            flipped,
        }
    }

    /// Kopiert die Auswahl und entfernt sie anschließend.
    ///
    /// Entfernt werden die gewählten Zustände, alle sie berührenden
    /// Transitionen und die direkt gewählten Transitionen.
    pub fn cut(
        &mut self,
        state_ids: &[StateId],
        transition_ids: &[TransitionId],
    ) -> (Clipboard, RemovalSet) {
        let clipboard = self.copy(state_ids, transition_ids);
        let removal = self.capture_removal(state_ids, transition_ids);
        self.apply_removal(&removal);
        (clipboard, removal)
    }
}
