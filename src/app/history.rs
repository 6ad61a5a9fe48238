//! Generischer Undo/Redo-Stack auf Basis umkehrbarer Commands.
//!
//! Jeder Eintrag kennt seine Vorwärts- und Rückwärts-Anwendung; der Stack
//! selbst hält nur Einträge und einen Zeiger auf den zuletzt angewendeten.

use std::fmt;

/// Anwendungsrichtung eines Commands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

/// Ein Command, das vorwärts und rückwärts auf ein Ziel angewendet werden kann.
///
/// Wiederholtes Vorwärts/Rückwärts-Anwenden muss dasselbe Ergebnis liefern.
pub trait Reversible<T> {
    fn apply(&mut self, direction: Direction, target: &mut T);
}

/// Eintrag im Stack
#[derive(Debug, Clone)]
pub struct HistoryEntry<C> {
    /// Fortlaufende ID innerhalb des Stacks
    pub id: u64,
    /// Beschreibung für Anzeige (z.B. Action-Stack-Viewer)
    pub display_text: String,
    /// Das umkehrbare Command
    pub command: C,
}

/// Art der Änderung, über die Listener benachrichtigt werden
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StackChange {
    Pushed,
    Undone,
    Redone,
    Cleared,
}

/// Fehler bei Undo/Redo
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum HistoryError {
    #[error("Nichts zum Rückgängigmachen")]
    NothingToUndo,
    #[error("Nichts zum Wiederherstellen")]
    NothingToRedo,
}

/// Handle eines registrierten Listeners
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

type Listener = Box<dyn FnMut(&StackChange)>;

/// Undo/Redo-Stack mit Zeiger auf den zuletzt angewendeten Eintrag.
///
/// `pointer == None` bedeutet: nichts angewendet (Position -1).
pub struct CommandStack<C> {
    entries: Vec<HistoryEntry<C>>,
    pointer: Option<usize>,
    next_entry_id: u64,
    max_depth: Option<usize>,
    listeners: Vec<(ListenerId, Listener)>,
    next_listener_id: u64,
}

impl<C> Default for CommandStack<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> fmt::Debug for CommandStack<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommandStack")
            .field("len", &self.entries.len())
            .field("pointer", &self.pointer)
            .field("max_depth", &self.max_depth)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl<C> CommandStack<C> {
    /// Erstellt einen unbegrenzten, leeren Stack.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            pointer: None,
            next_entry_id: 0,
            max_depth: None,
            listeners: Vec::new(),
            next_listener_id: 0,
        }
    }

    /// Erstellt einen Stack, der höchstens `max_depth` Einträge behält.
    pub fn with_max_depth(max_depth: Option<usize>) -> Self {
        Self {
            max_depth: max_depth.map(|d| d.max(1)),
            ..Self::new()
        }
    }

    /// Legt einen Eintrag ab und verwirft alle Redo-Einträge.
    ///
    /// Bei `execute_forward == false` wurde die Änderung bereits live
    /// ausgeführt (z.B. Drag) und wird nur noch protokolliert.
    pub fn push<T>(
        &mut self,
        display_text: impl Into<String>,
        mut command: C,
        target: &mut T,
        execute_forward: bool,
    ) -> u64
    where
        C: Reversible<T>,
    {
        let keep = self.pointer.map_or(0, |p| p + 1);
        self.entries.truncate(keep);

        if execute_forward {
            command.apply(Direction::Forward, target);
        }

        let id = self.next_entry_id;
        self.next_entry_id += 1;
        self.entries.push(HistoryEntry {
            id,
            display_text: display_text.into(),
            command,
        });

        if let Some(max) = self.max_depth {
            if self.entries.len() > max {
                let overflow = self.entries.len() - max;
                self.entries.drain(..overflow);
            }
        }
        self.pointer = self.entries.len().checked_sub(1);

        self.notify(StackChange::Pushed);
        id
    }

    /// Macht den Eintrag am Zeiger rückgängig.
    pub fn undo<T>(&mut self, target: &mut T) -> Result<(), HistoryError>
    where
        C: Reversible<T>,
    {
        let Some(index) = self.pointer else {
            log::warn!("Undo nicht möglich: Stack ist am Anfang");
            return Err(HistoryError::NothingToUndo);
        };
        self.entries[index]
            .command
            .apply(Direction::Backward, target);
        self.pointer = index.checked_sub(1);
        self.notify(StackChange::Undone);
        Ok(())
    }

    /// Wendet den nächsten Eintrag nach dem Zeiger erneut an.
    pub fn redo<T>(&mut self, target: &mut T) -> Result<(), HistoryError>
    where
        C: Reversible<T>,
    {
        let index = self.pointer.map_or(0, |p| p + 1);
        let Some(entry) = self.entries.get_mut(index) else {
            log::warn!("Redo nicht möglich: Stack ist am Ende");
            return Err(HistoryError::NothingToRedo);
        };
        entry.command.apply(Direction::Forward, target);
        self.pointer = Some(index);
        self.notify(StackChange::Redone);
        Ok(())
    }

    /// Leert den Stack.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.pointer = None;
        self.notify(StackChange::Cleared);
    }

    /// Identisch zu `clear`.
    pub fn reset(&mut self) {
        self.clear();
    }

    /// Registriert einen Listener, der nach jeder Änderung aufgerufen wird.
    pub fn subscribe(&mut self, listener: impl FnMut(&StackChange) + 'static) -> ListenerId {
        let id = ListenerId(self.next_listener_id);
        self.next_listener_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Entfernt einen Listener; `false` wenn unbekannt.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(lid, _)| *lid != id);
        self.listeners.len() != before
    }

    fn notify(&mut self, change: StackChange) {
        for (_, listener) in &mut self.listeners {
            listener(&change);
        }
    }

    /// Alle Einträge (ältester zuerst)
    pub fn entries(&self) -> &[HistoryEntry<C>] {
        &self.entries
    }

    /// Index des zuletzt angewendeten Eintrags
    pub fn pointer(&self) -> Option<usize> {
        self.pointer
    }

    /// Gibt zurück, ob ein Undo-Schritt verfügbar ist.
    pub fn can_undo(&self) -> bool {
        self.pointer.is_some()
    }

    /// Gibt zurück, ob ein Redo-Schritt verfügbar ist.
    pub fn can_redo(&self) -> bool {
        self.pointer.map_or(0, |p| p + 1) < self.entries.len()
    }

    /// Beschreibung des nächsten Undo-Schritts
    pub fn undo_text(&self) -> Option<&str> {
        self.pointer
            .and_then(|p| self.entries.get(p))
            .map(|e| e.display_text.as_str())
    }

    /// Beschreibung des nächsten Redo-Schritts
    pub fn redo_text(&self) -> Option<&str> {
        self.entries
            .get(self.pointer.map_or(0, |p| p + 1))
            .map(|e| e.display_text.as_str())
    }

    /// Anzahl Einträge
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Stack leer?
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Addiert einen Wert auf einen Zähler
    struct Add(i32);

    impl Reversible<i32> for Add {
        fn apply(&mut self, direction: Direction, target: &mut i32) {
            match direction {
                Direction::Forward => *target += self.0,
                Direction::Backward => *target -= self.0,
            }
        }
    }

    #[test]
    fn empty_stack_cannot_undo_or_redo() {
        let mut stack: CommandStack<Add> = CommandStack::new();
        let mut value = 0;
        assert_eq!(stack.undo(&mut value), Err(HistoryError::NothingToUndo));
        assert_eq!(stack.redo(&mut value), Err(HistoryError::NothingToRedo));
        assert_eq!(stack.pointer(), None);
    }

    #[test]
    fn push_executes_forward_and_moves_pointer() {
        let mut stack = CommandStack::new();
        let mut value = 0;
        stack.push("plus 2", Add(2), &mut value, true);
        stack.push("plus 3", Add(3), &mut value, true);

        assert_eq!(value, 5);
        assert_eq!(stack.pointer(), Some(1));
        assert_eq!(stack.undo_text(), Some("plus 3"));
        assert!(!stack.can_redo());
    }

    #[test]
    fn push_without_forward_only_records() {
        let mut stack = CommandStack::new();
        let mut value = 7;
        stack.push("live", Add(7), &mut value, false);
        assert_eq!(value, 7);

        stack.undo(&mut value).expect("Undo erwartet");
        assert_eq!(value, 0);
    }

    #[test]
    fn undo_redo_round_trip() {
        let mut stack = CommandStack::new();
        let mut value = 0;
        stack.push("a", Add(1), &mut value, true);
        stack.push("b", Add(10), &mut value, true);

        stack.undo(&mut value).expect("Undo erwartet");
        stack.undo(&mut value).expect("Undo erwartet");
        assert_eq!(value, 0);
        assert_eq!(stack.pointer(), None);
        assert_eq!(stack.undo(&mut value), Err(HistoryError::NothingToUndo));

        stack.redo(&mut value).expect("Redo erwartet");
        stack.redo(&mut value).expect("Redo erwartet");
        assert_eq!(value, 11);
        assert_eq!(stack.redo(&mut value), Err(HistoryError::NothingToRedo));
    }

    #[test]
    fn push_after_undo_truncates_redo_tail() {
        let mut stack = CommandStack::new();
        let mut value = 0;
        stack.push("a", Add(1), &mut value, true);
        stack.push("b", Add(2), &mut value, true);
        stack.push("c", Add(4), &mut value, true);
        stack.undo(&mut value).expect("Undo erwartet");
        stack.undo(&mut value).expect("Undo erwartet");

        stack.push("d", Add(8), &mut value, true);

        assert_eq!(value, 9);
        assert_eq!(stack.len(), 2);
        assert_eq!(stack.pointer(), Some(1));
        let texts: Vec<_> = stack.entries().iter().map(|e| e.display_text.as_str()).collect();
        assert_eq!(texts, vec!["a", "d"]);
    }

    #[test]
    fn push_after_undoing_everything_replaces_all() {
        let mut stack = CommandStack::new();
        let mut value = 0;
        stack.push("a", Add(1), &mut value, true);
        stack.undo(&mut value).expect("Undo erwartet");
        stack.push("b", Add(5), &mut value, true);
        assert_eq!(stack.len(), 1);
        assert_eq!(stack.pointer(), Some(0));
        assert_eq!(value, 5);
    }

    #[test]
    fn max_depth_drops_oldest() {
        let mut stack = CommandStack::with_max_depth(Some(2));
        let mut value = 0;
        stack.push("a", Add(1), &mut value, true);
        stack.push("b", Add(2), &mut value, true);
        stack.push("c", Add(4), &mut value, true);

        assert_eq!(stack.len(), 2);
        assert_eq!(stack.pointer(), Some(1));
        stack.undo(&mut value).expect("Undo erwartet");
        stack.undo(&mut value).expect("Undo erwartet");
        assert_eq!(value, 1);
        assert!(!stack.can_undo());
    }

    #[test]
    fn clear_and_reset_are_identical() {
        let mut value = 0;
        let mut a = CommandStack::new();
        let mut b = CommandStack::new();
        for stack in [&mut a, &mut b] {
            stack.push("x", Add(1), &mut value, true);
            stack.push("y", Add(1), &mut value, true);
            stack.undo(&mut value).expect("Undo erwartet");
        }
        a.clear();
        b.reset();
        assert_eq!(a.len(), b.len());
        assert_eq!(a.pointer(), b.pointer());
        assert!(a.is_empty());
    }

    #[test]
    fn listeners_fire_after_every_change() {
        let mut stack = CommandStack::new();
        let mut value = 0;
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let id = stack.subscribe(move |change| sink.borrow_mut().push(*change));

        stack.push("a", Add(1), &mut value, true);
        stack.undo(&mut value).expect("Undo erwartet");
        stack.redo(&mut value).expect("Redo erwartet");
        let _ = stack.redo(&mut value);
        stack.clear();

        assert_eq!(
            *seen.borrow(),
            vec![
                StackChange::Pushed,
                StackChange::Undone,
                StackChange::Redone,
                StackChange::Cleared
            ]
        );

        assert!(stack.unsubscribe(id));
        assert!(!stack.unsubscribe(id));
        stack.push("b", Add(1), &mut value, true);
        assert_eq!(seen.borrow().len(), 4);
    }

    #[test]
    fn entry_ids_are_unique() {
        let mut stack = CommandStack::new();
        let mut value = 0;
        let a = stack.push("a", Add(1), &mut value, true);
        stack.undo(&mut value).expect("Undo erwartet");
        let b = stack.push("b", Add(1), &mut value, true);
        assert_ne!(a, b);
    }
}
