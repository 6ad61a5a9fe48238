use crate::app::edit_action::EditAction;
use crate::app::history::CommandStack;
use crate::app::CommandLog;
use crate::core::{Clipboard, Graph, LayoutCache, RunStatus, StateId, ValidationFinding};
use crate::shared::EditorOptions;
use glam::Vec2;

use super::SelectionState;

/// Callback für Selektionsänderungen (z.B. Details-Panel der UI)
pub type SelectionListener = Box<dyn FnMut(&SelectionState)>;

/// Laufender Drag selektierter Zustände
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DragState {
    /// Verschobene Zustände
    pub state_ids: Vec<StateId>,
    /// Bisher aufsummierter Versatz
    pub accumulated: Vec2,
}

/// Ergebnis des letzten Wort-Tests
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestResult {
    /// Getestete Eingabe
    pub input: String,
    /// Endstatus des Laufs
    pub status: RunStatus,
}

/// Hauptzustand der Anwendung
pub struct AppState {
    /// Der bearbeitete Automat
    pub graph: Graph,
    /// Undo/Redo-Stack der Editier-Aktionen
    pub history: CommandStack<EditAction>,
    /// Selection-State
    pub selection: SelectionState,
    /// Zwischenablage (Werte-Kopien)
    pub clipboard: Clipboard,
    /// Laufzeit-Optionen
    pub options: EditorOptions,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Gecachte Pfeil-Geometrie
    pub layout_cache: LayoutCache,
    /// Befunde der letzten Validierung
    pub last_findings: Vec<ValidationFinding>,
    /// Ergebnis des letzten Wort-Tests
    pub last_test: Option<TestResult>,
    /// Laufender Drag (zwischen Begin und End)
    pub drag: Option<DragState>,
    /// Pfad der aktuell geladenen Datei (für Save ohne Pfad)
    pub current_file_path: Option<String>,
    on_selection_changed: Option<SelectionListener>,
}

impl AppState {
    /// Erstellt einen neuen, leeren App-State
    pub fn new() -> Self {
        Self::with_options(EditorOptions::default())
    }

    /// Erstellt einen leeren App-State mit den gegebenen Optionen
    pub fn with_options(options: EditorOptions) -> Self {
        Self {
            graph: Graph::new(),
            history: CommandStack::with_max_depth(options.history_max_depth),
            selection: SelectionState::new(),
            clipboard: Clipboard::default(),
            command_log: CommandLog::new(),
            layout_cache: LayoutCache::new(options.layout_metrics()),
            options,
            last_findings: Vec::new(),
            last_test: None,
            drag: None,
            current_file_path: None,
            on_selection_changed: None,
        }
    }

    /// Gibt die Anzahl der Zustände zurück (für UI-Anzeige)
    pub fn state_count(&self) -> usize {
        self.graph.state_count()
    }

    /// Gibt die Anzahl der Transitionen zurück (für UI-Anzeige)
    pub fn transition_count(&self) -> usize {
        self.graph.transition_count()
    }

    /// Undo/Redo helpers
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Gibt zurück, ob ein Redo-Schritt verfügbar ist.
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Führt eine Aktion aus und legt sie auf den Undo-Stack.
    pub fn push_action(&mut self, display_text: impl Into<String>, action: EditAction) {
        let text = display_text.into();
        log::info!("{} ({})", text, action.kind_name());
        self.history.push(text, action, &mut self.graph, true);
    }

    /// Protokolliert eine bereits live ausgeführte Aktion (z.B. Drag).
    pub fn record_action(&mut self, display_text: impl Into<String>, action: EditAction) {
        let text = display_text.into();
        log::info!("{} ({}, bereits ausgeführt)", text, action.kind_name());
        self.history.push(text, action, &mut self.graph, false);
    }

    /// Registriert den Selektions-Callback (ersetzt einen vorhandenen).
    pub fn set_selection_listener(&mut self, listener: impl FnMut(&SelectionState) + 'static) {
        self.on_selection_changed = Some(Box::new(listener));
    }

    /// Entfernt den Selektions-Callback.
    pub fn clear_selection_listener(&mut self) {
        self.on_selection_changed = None;
    }

    /// Ersetzt die Selektion und benachrichtigt bei Änderung.
    pub fn replace_selection(&mut self, selection: SelectionState) {
        if self.selection != selection {
            self.selection = selection;
            self.notify_selection_changed();
        }
    }

    /// Entfernt verwaiste IDs aus der Selektion (nach Undo/Redo/Load).
    pub fn prune_selection(&mut self) {
        if self.selection.retain_existing(&self.graph) {
            self.notify_selection_changed();
        }
    }

    fn notify_selection_changed(&mut self) {
        if let Some(listener) = self.on_selection_changed.as_mut() {
            listener(&self.selection);
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
