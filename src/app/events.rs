//! AppCommand-Enum für den Command-Datenfluss.

use crate::core::{StateId, TokenId, TransitionId};
use glam::Vec2;

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone, PartialEq)]
pub enum AppCommand {
    // === Zustände ===
    /// Neuen Zustand an Position hinzufügen (Label `q{n}`)
    AddState { position: Vec2 },
    /// Zustand samt berührender Transitionen entfernen
    RemoveState { id: StateId },
    /// Zustand umbenennen
    RenameState { id: StateId, label: String },
    /// Akzeptanz-Flag setzen
    SetStateAccept { id: StateId, is_accept: bool },
    /// Start-Zustand setzen oder löschen
    SetStartState { id: Option<StateId> },

    // === Transitionen ===
    /// Neue Transition erstellen
    AddTransition {
        source: StateId,
        dest: StateId,
        is_epsilon: bool,
        tokens: Vec<TokenId>,
    },
    /// Existierende `source→dest`-Transition selektieren, sonst neu anlegen
    ConnectStates { source: StateId, dest: StateId },
    /// Transition entfernen
    RemoveTransition { id: TransitionId },
    /// Token für eine Transition an- oder abwählen
    SetTransitionToken {
        transition: TransitionId,
        token: TokenId,
        accept: bool,
    },
    /// ε für eine Transition an- oder abwählen
    SetTransitionEpsilon {
        transition: TransitionId,
        is_epsilon: bool,
    },

    // === Alphabet ===
    /// Neues (leeres) Token hinzufügen
    AddToken,
    /// Token aus Alphabet und allen Transitionen entfernen
    RemoveToken { id: TokenId },
    /// Symbol eines Tokens ändern
    SetTokenSymbol { id: TokenId, symbol: String },

    // === Selektion & Verschieben ===
    /// Selektion ersetzen
    SetSelection {
        states: Vec<StateId>,
        transitions: Vec<TransitionId>,
    },
    /// Selektion aufheben
    ClearSelection,
    /// Alle Zustände und Transitionen selektieren
    SelectAll,
    /// Move-Lifecycle: Verschieben starten
    BeginMoveSelectedStates,
    /// Move-Lifecycle: Selektierte Zustände live verschieben
    MoveSelectedStates { delta: Vec2 },
    /// Move-Lifecycle: Verschieben beenden (ein Undo-Schritt)
    EndMoveSelectedStates,
    /// Zustände in einem Schritt verschieben
    MoveStates { ids: Vec<StateId>, delta: Vec2 },
    /// Selektion löschen
    DeleteSelected,

    // === Zwischenablage ===
    /// Selektion kopieren
    CopySelection,
    /// Selektion ausschneiden
    CutSelection,
    /// Zwischenablage einfügen (None = Standard-Versatz)
    Paste { offset: Option<Vec2> },

    // === History ===
    /// Undo: Letzte Aktion rückgängig machen
    Undo,
    /// Redo: Rückgängig gemachte Aktion wiederherstellen
    Redo,

    // === Automat & Dateien ===
    /// Neuer, leerer Automat (History wird zurückgesetzt)
    ClearAutomaton,
    /// JSON-Datei laden
    LoadFile { path: String },
    /// Datei speichern (None = aktueller Pfad)
    SaveFile { path: Option<String> },
    /// JSON-Text laden
    LoadJson { json: String },
    /// Snap-to-Grid umschalten
    ToggleSnapToGrid,
    /// Wort testen (jedes Zeichen ist ein Symbol)
    TestString { input: String },
    /// Automaten validieren
    ValidateAutomaton,
}
