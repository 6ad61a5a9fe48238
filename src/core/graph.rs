//! Der zentrale Automaten-Graph mit Zuständen, Transitionen und Alphabet.

mod clipboard;

pub use clipboard::{Clipboard, PasteBatch, PasteResult};

use super::{IdAllocator, LayoutPriority, State, StateId, Token, TokenId, Transition, TransitionId};
use glam::Vec2;
use indexmap::IndexMap;

/// ID-Präfixe der drei Entitätsarten
const STATE_ID_PREFIX: &str = "state-";
const TRANSITION_ID_PREFIX: &str = "transition-";
const TOKEN_ID_PREFIX: &str = "token-";

/// Vollständiger Automaten-Graph.
///
/// Alle Sammlungen sind nach Einfügereihenfolge geordnet; Undo stellt
/// entfernte Entitäten an ihrer ursprünglichen Position wieder her.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    states: IndexMap<StateId, State>,
    transitions: IndexMap<TransitionId, Transition>,
    alphabet: IndexMap<TokenId, Token>,
    start_state: Option<StateId>,
    ids: IdAllocator,
    /// Zähler für Standard-Labels `q0`, `q1`, ...
    next_state_number: u64,
}

/// Beim Entfernen erfasste Entitäten inklusive ihrer Positionen.
///
/// Wird von Undo benutzt, um exakt den Zustand vor dem Entfernen herzustellen.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RemovalSet {
    /// Entfernte Zustände (aufsteigend nach Index)
    pub states: Vec<(usize, State)>,
    /// Entfernte Transitionen (aufsteigend nach Index)
    pub transitions: Vec<(usize, Transition)>,
    /// Start-Zustand, falls er unter den entfernten Zuständen war
    pub start: Option<StateId>,
}

impl RemovalSet {
    /// Leer, wenn weder Zustände noch Transitionen betroffen sind.
    pub fn is_empty(&self) -> bool {
        self.states.is_empty() && self.transitions.is_empty()
    }

    /// Gesamtzahl betroffener Objekte
    pub fn object_count(&self) -> usize {
        self.states.len() + self.transitions.len()
    }
}

/// Ein entferntes Token samt der Transitionen, aus denen es gestrichen wurde.
#[derive(Debug, Clone, PartialEq)]
pub struct TokenRemoval {
    /// Index im Alphabet
    pub index: usize,
    /// Das Token selbst
    pub token: Token,
    /// (Transition, Index im Token-Set) für jede betroffene Transition
    pub stripped: Vec<(TransitionId, usize)>,
}

impl Graph {
    /// Erstellt einen leeren Graphen
    pub fn new() -> Self {
        Self::default()
    }

    // ── Lesezugriff ────────────────────────────────────────────────

    /// Zustand nach ID
    pub fn state(&self, id: &StateId) -> Option<&State> {
        self.states.get(id)
    }

    /// Alle Zustände in Reihenfolge
    pub fn states(&self) -> impl Iterator<Item = &State> {
        self.states.values()
    }

    /// Transition nach ID
    pub fn transition(&self, id: &TransitionId) -> Option<&Transition> {
        self.transitions.get(id)
    }

    /// Alle Transitionen in Reihenfolge
    pub fn transitions(&self) -> impl Iterator<Item = &Transition> {
        self.transitions.values()
    }

    /// Token nach ID
    pub fn token(&self, id: &TokenId) -> Option<&Token> {
        self.alphabet.get(id)
    }

    /// Alphabet in Reihenfolge
    pub fn alphabet(&self) -> impl Iterator<Item = &Token> {
        self.alphabet.values()
    }

    /// Aktueller Start-Zustand
    pub fn start_state(&self) -> Option<&StateId> {
        self.start_state.as_ref()
    }

    /// Anzahl Zustände
    pub fn state_count(&self) -> usize {
        self.states.len()
    }

    /// Anzahl Transitionen
    pub fn transition_count(&self) -> usize {
        self.transitions.len()
    }

    /// Anzahl Tokens
    pub fn token_count(&self) -> usize {
        self.alphabet.len()
    }

    /// Prüft ob der Zustand existiert
    pub fn contains_state(&self, id: &StateId) -> bool {
        self.states.contains_key(id)
    }

    /// Alle Transitionen, die den Zustand berühren (eingehend, ausgehend, Schleife)
    pub fn transitions_touching<'a>(
        &'a self,
        state_id: &'a StateId,
    ) -> impl Iterator<Item = &'a Transition> + 'a {
        self.transitions.values().filter(move |t| t.involves(state_id))
    }

    /// Alle Transitionen zwischen zwei Zuständen (beide Richtungen)
    pub fn transitions_between<'a>(
        &'a self,
        a: &'a StateId,
        b: &'a StateId,
    ) -> impl Iterator<Item = &'a Transition> + 'a {
        self.transitions.values().filter(move |t| t.connects_pair(a, b))
    }

    /// Erste Transition mit exakt dieser Quelle und diesem Ziel
    pub fn find_transition(&self, source: &StateId, dest: &StateId) -> Option<&Transition> {
        self.transitions
            .values()
            .find(|t| &t.source == source && &t.dest == dest)
    }

    // ── ID- und Label-Vergabe ─────────────────────────────────────

    /// Neue Zustands-ID
    pub fn allocate_state_id(&mut self) -> StateId {
        StateId::new(self.ids.allocate(STATE_ID_PREFIX))
    }

    /// Neue Transitions-ID
    pub fn allocate_transition_id(&mut self) -> TransitionId {
        TransitionId::new(self.ids.allocate(TRANSITION_ID_PREFIX))
    }

    /// Neue Token-ID
    pub fn allocate_token_id(&mut self) -> TokenId {
        TokenId::new(self.ids.allocate(TOKEN_ID_PREFIX))
    }

    /// Nächstes Standard-Label `q{n}`
    pub fn next_state_label(&mut self) -> String {
        let label = format!("q{}", self.next_state_number);
        self.next_state_number = self.next_state_number.saturating_add(1);
        label
    }

    /// Setzt den Label-Zähler hinter das höchste vorhandene `q{n}`-Label.
    pub fn resync_label_counter(&mut self) {
        self.next_state_number = self
            .states
            .values()
            .filter_map(|s| s.label.strip_prefix('q')?.parse::<u64>().ok())
            .filter_map(|n| n.checked_add(1))
            .max()
            .unwrap_or(0);
    }

    // ── Zustände ──────────────────────────────────────────────────

    /// Fügt einen neuen Zustand mit frischer ID hinzu
    pub fn add_state(&mut self, label: impl Into<String>, position: Vec2) -> State {
        let id = self.allocate_state_id();
        let state = State::new(id, label, position);
        self.insert_state(state.clone());
        state
    }

    /// Fügt einen fertigen Zustand am Ende ein (Load/Redo-Pfad)
    pub fn insert_state(&mut self, state: State) {
        self.ids.register(state.id.as_str());
        self.states.insert(state.id.clone(), state);
    }

    /// Entfernt einen Zustand samt aller berührenden Transitionen.
    ///
    /// No-op (`None`) wenn der Zustand nicht existiert.
    pub fn remove_state(&mut self, id: &StateId) -> Option<RemovalSet> {
        if !self.states.contains_key(id) {
            return None;
        }
        let removal = self.capture_removal(std::slice::from_ref(id), &[]);
        self.apply_removal(&removal);
        Some(removal)
    }

    /// Benennt einen Zustand um; liefert das alte Label
    pub fn rename_state(&mut self, id: &StateId, label: impl Into<String>) -> Option<String> {
        let state = self.states.get_mut(id)?;
        Some(std::mem::replace(&mut state.label, label.into()))
    }

    /// Setzt das Akzeptanz-Flag; liefert den alten Wert
    pub fn set_accept(&mut self, id: &StateId, is_accept: bool) -> Option<bool> {
        let state = self.states.get_mut(id)?;
        Some(std::mem::replace(&mut state.is_accept, is_accept))
    }

    /// Setzt (oder löscht) den Start-Zustand.
    ///
    /// Gibt `false` zurück, wenn die ID nicht existiert (dann unverändert).
    pub fn set_start(&mut self, id: Option<&StateId>) -> bool {
        match id {
            Some(id) if !self.states.contains_key(id) => false,
            _ => {
                self.start_state = id.cloned();
                true
            }
        }
    }

    /// Setzt eine Zustands-Position absolut
    pub fn set_state_position(&mut self, id: &StateId, position: Vec2) -> bool {
        let Some(state) = self.states.get_mut(id) else {
            return false;
        };
        state.position = position;
        true
    }

    /// Verschiebt mehrere Zustände um denselben Offset
    pub fn translate_states(&mut self, ids: &[StateId], delta: Vec2) -> bool {
        let mut moved_any = false;
        for id in ids {
            if let Some(state) = self.states.get_mut(id) {
                state.position += delta;
                moved_any = true;
            }
        }
        moved_any
    }

    // ── Transitionen ──────────────────────────────────────────────

    /// Fügt eine neue Transition hinzu (Paar-Regel für die Darstellung).
    ///
    /// `None` wenn Quelle oder Ziel nicht existieren. Tokens, die nicht im
    /// Alphabet sind, werden verworfen.
    pub fn add_transition(
        &mut self,
        source: &StateId,
        dest: &StateId,
        is_epsilon: bool,
        tokens: impl IntoIterator<Item = TokenId>,
    ) -> Option<Transition> {
        if !self.states.contains_key(source) || !self.states.contains_key(dest) {
            return None;
        }
        let id = self.allocate_transition_id();
        let tokens: Vec<TokenId> = tokens
            .into_iter()
            .filter(|t| self.alphabet.contains_key(t))
            .collect();
        let transition = Transition::new(id.clone(), source.clone(), dest.clone(), is_epsilon, tokens);
        self.insert_transition(transition);
        self.transitions.get(&id).cloned()
    }

    /// Fügt eine fertige Transition am Ende ein und wendet die Paar-Regel an.
    ///
    /// Liefert die IDs bereits existierender Transitionen, die dabei von
    /// `Straight` auf `Curve` umgestellt wurden.
    pub fn insert_transition(&mut self, mut transition: Transition) -> Vec<TransitionId> {
        let mut flipped = Vec::new();
        if transition.is_self_loop() {
            transition.layout_priority = LayoutPriority::Straight;
        } else {
            let mut has_sibling = false;
            for existing in self.transitions.values_mut() {
                if existing.id == transition.id
                    || !existing.connects_pair(&transition.source, &transition.dest)
                {
                    continue;
                }
                has_sibling = true;
                if existing.layout_priority == LayoutPriority::Straight {
                    existing.layout_priority = LayoutPriority::Curve;
                    flipped.push(existing.id.clone());
                }
            }
            transition.layout_priority = if has_sibling {
                LayoutPriority::Curve
            } else {
                LayoutPriority::Straight
            };
        }
        self.ids.register(transition.id.as_str());
        self.transitions.insert(transition.id.clone(), transition);
        flipped
    }

    /// Setzt die Darstellungsart der angegebenen Transitionen
    pub fn set_layout_priority(&mut self, ids: &[TransitionId], priority: LayoutPriority) {
        for id in ids {
            if let Some(t) = self.transitions.get_mut(id) {
                t.layout_priority = priority;
            }
        }
    }

    /// Entfernt eine einzelne Transition (No-op wenn unbekannt)
    pub fn remove_transition(&mut self, id: &TransitionId) -> Option<Transition> {
        self.transitions.shift_remove(id)
    }

    /// Nimmt ein Token in die Transition auf; `true` wenn sich etwas geändert hat
    pub fn transition_add_token(&mut self, transition_id: &TransitionId, token_id: &TokenId) -> bool {
        if !self.alphabet.contains_key(token_id) {
            return false;
        }
        self.transitions
            .get_mut(transition_id)
            .is_some_and(|t| t.tokens.insert(token_id.clone()))
    }

    /// Entfernt ein Token aus der Transition; liefert dessen bisherigen Index im Set
    pub fn transition_remove_token(
        &mut self,
        transition_id: &TransitionId,
        token_id: &TokenId,
    ) -> Option<usize> {
        let transition = self.transitions.get_mut(transition_id)?;
        let (index, _) = transition.tokens.shift_remove_full(token_id)?;
        Some(index)
    }

    /// Fügt ein Token an einer bestimmten Position des Token-Sets wieder ein
    pub fn transition_insert_token_at(
        &mut self,
        transition_id: &TransitionId,
        token_id: &TokenId,
        index: usize,
    ) -> bool {
        if !self.alphabet.contains_key(token_id) {
            return false;
        }
        let Some(transition) = self.transitions.get_mut(transition_id) else {
            return false;
        };
        if transition.tokens.contains(token_id) {
            return false;
        }
        let index = index.min(transition.tokens.len());
        transition.tokens.shift_insert(index, token_id.clone())
    }

    /// Setzt das ε-Flag; liefert den alten Wert
    pub fn set_epsilon(&mut self, transition_id: &TransitionId, is_epsilon: bool) -> Option<bool> {
        let transition = self.transitions.get_mut(transition_id)?;
        Some(std::mem::replace(&mut transition.is_epsilon, is_epsilon))
    }

    // ── Alphabet ──────────────────────────────────────────────────

    /// Fügt ein neues Token mit leerem Symbol hinzu
    pub fn add_token(&mut self) -> Token {
        let token = Token::new(self.allocate_token_id(), "");
        self.insert_token(token.clone());
        token
    }

    /// Fügt ein fertiges Token am Ende ein
    pub fn insert_token(&mut self, token: Token) {
        self.ids.register(token.id.as_str());
        self.alphabet.insert(token.id.clone(), token);
    }

    /// Erfasst, was `remove_token` entfernen würde, ohne den Graphen zu ändern
    pub fn capture_token_removal(&self, id: &TokenId) -> Option<TokenRemoval> {
        let (index, _, token) = self.alphabet.get_full(id)?;
        let stripped = self
            .transitions
            .values()
            .filter_map(|t| Some((t.id.clone(), t.tokens.get_index_of(id)?)))
            .collect();
        Some(TokenRemoval {
            index,
            token: token.clone(),
            stripped,
        })
    }

    /// Entfernt ein Token aus dem Alphabet und aus allen Transitionen
    pub fn remove_token(&mut self, id: &TokenId) -> Option<TokenRemoval> {
        let removal = self.capture_token_removal(id)?;
        self.alphabet.shift_remove(id);
        for transition in self.transitions.values_mut() {
            transition.tokens.shift_remove(id);
        }
        Some(removal)
    }

    /// Macht ein `remove_token` rückgängig
    pub fn restore_token(&mut self, removal: &TokenRemoval) {
        let index = removal.index.min(self.alphabet.len());
        self.alphabet
            .shift_insert(index, removal.token.id.clone(), removal.token.clone());
        for (transition_id, pos) in &removal.stripped {
            self.transition_insert_token_at(transition_id, &removal.token.id, *pos);
        }
    }

    /// Setzt das Symbol eines Tokens; liefert das alte Symbol
    pub fn set_token_symbol(&mut self, id: &TokenId, symbol: impl Into<String>) -> Option<String> {
        let token = self.alphabet.get_mut(id)?;
        Some(std::mem::replace(&mut token.symbol, symbol.into()))
    }

    // ── Entfernen mit Wiederherstellung ───────────────────────────

    /// Erfasst alles, was beim Entfernen der Zustände und Transitionen wegfällt.
    ///
    /// Enthält zusätzlich jede Transition, die einen der Zustände berührt.
    /// Unbekannte IDs werden ignoriert.
    pub fn capture_removal(&self, state_ids: &[StateId], transition_ids: &[TransitionId]) -> RemovalSet {
        let mut states: Vec<(usize, State)> = state_ids
            .iter()
            .filter_map(|id| {
                let (index, _, state) = self.states.get_full(id)?;
                Some((index, state.clone()))
            })
            .collect();
        states.sort_by_key(|(index, _)| *index);
        states.dedup_by_key(|(index, _)| *index);

        let mut transitions: Vec<(usize, Transition)> = self
            .transitions
            .values()
            .enumerate()
            .filter(|(_, t)| {
                transition_ids.contains(&t.id)
                    || states.iter().any(|(_, s)| t.involves(&s.id))
            })
            .map(|(index, t)| (index, t.clone()))
            .collect();
        transitions.sort_by_key(|(index, _)| *index);

        let start = self
            .start_state
            .as_ref()
            .filter(|start| states.iter().any(|(_, s)| &s.id == *start))
            .cloned();

        RemovalSet {
            states,
            transitions,
            start,
        }
    }

    /// Entfernt alle Entitäten eines `RemovalSet`
    pub fn apply_removal(&mut self, removal: &RemovalSet) {
        for (_, transition) in &removal.transitions {
            self.transitions.shift_remove(&transition.id);
        }
        for (_, state) in &removal.states {
            self.states.shift_remove(&state.id);
            if self.start_state.as_ref() == Some(&state.id) {
                self.start_state = None;
            }
        }
    }

    /// Stellt alle Entitäten eines `RemovalSet` an ihren alten Positionen wieder her
    pub fn restore_removal(&mut self, removal: &RemovalSet) {
        for (index, state) in &removal.states {
            let index = (*index).min(self.states.len());
            self.states.shift_insert(index, state.id.clone(), state.clone());
        }
        for (index, transition) in &removal.transitions {
            let index = (*index).min(self.transitions.len());
            self.transitions
                .shift_insert(index, transition.id.clone(), transition.clone());
        }
        if let Some(start) = &removal.start {
            self.start_state = Some(start.clone());
        }
    }

    /// Leert den Graphen. Bereits vergebene IDs bleiben gesperrt.
    pub fn clear(&mut self) {
        self.states.clear();
        self.transitions.clear();
        self.alphabet.clear();
        self.start_state = None;
        self.next_state_number = 0;
    }
}
