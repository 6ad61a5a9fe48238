//! Handler für Datei-Operationen (Laden, Speichern, Neu).

use crate::app::use_cases;
use crate::app::AppState;

/// Lädt einen Automaten aus dem übergebenen Pfad.
pub fn load(state: &mut AppState, path: String) -> anyhow::Result<()> {
    use_cases::file_io::load_selected_file(state, path)
}

/// Lädt einen Automaten aus JSON-Text.
pub fn load_json(state: &mut AppState, json: &str) -> anyhow::Result<()> {
    use_cases::file_io::load_json(state, json)
}

/// Speichert den Automaten.
///
/// `None` speichert unter dem aktuell bekannten Pfad.
/// `Some(p)` speichert explizit unter dem neuen Pfad `p`.
pub fn save(state: &mut AppState, path: Option<String>) -> anyhow::Result<()> {
    use_cases::file_io::save_file(state, path)
}

/// Verwirft den Automaten und startet leer.
pub fn clear(state: &mut AppState) {
    use_cases::file_io::clear_automaton(state);
}
