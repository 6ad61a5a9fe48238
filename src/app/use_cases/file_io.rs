//! Use-Case-Funktionen für Dateiaktionen und neue Automaten.
//! Alle Dateisystem-Operationen (I/O) sind hier zentralisiert.

use crate::app::{AppState, SelectionState};

/// Setzt alles zurück, was am alten Graphen hing.
fn reset_after_replace(state: &mut AppState) {
    state.history.reset();
    state.drag = None;
    state.last_findings.clear();
    state.last_test = None;
    state.layout_cache.clear();
    state.replace_selection(SelectionState::new());
}

/// Lädt einen Automaten aus JSON-Text. History wird zurückgesetzt.
///
/// Bei Fehlern bleibt der bisherige Automat unverändert.
pub fn load_json(state: &mut AppState, json: &str) -> anyhow::Result<()> {
    crate::json::load_snapshot(&mut state.graph, json)?;
    reset_after_replace(state);
    Ok(())
}

/// Lädt die Datei in den AppState.
pub fn load_selected_file(state: &mut AppState, path: String) -> anyhow::Result<()> {
    let content = std::fs::read_to_string(&path)?;
    load_json(state, &content)?;

    // Merke Pfad für späteres Save
    state.current_file_path = Some(path);
    log::info!(
        "Geladen: {} Zustände, {} Transitionen",
        state.state_count(),
        state.transition_count()
    );
    Ok(())
}

/// Speichert unter dem angegebenen oder dem zuletzt benutzten Pfad.
pub fn save_file(state: &mut AppState, path: Option<String>) -> anyhow::Result<()> {
    let path = path
        .or_else(|| state.current_file_path.clone())
        .ok_or_else(|| anyhow::anyhow!("Kein Speicherpfad bekannt"))?;
    let content = crate::json::write_snapshot(&state.graph)?;
    std::fs::write(&path, content)?;
    log::info!("Datei gespeichert: {}", path);
    state.current_file_path = Some(path);
    Ok(())
}

/// Startet einen neuen, leeren Automaten (History und Label-Zähler zurückgesetzt).
pub fn clear_automaton(state: &mut AppState) {
    state.graph.clear();
    state.current_file_path = None;
    reset_after_replace(state);
    log::info!("Neuer Automat");
}
