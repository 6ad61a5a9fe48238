//! Handler für Validierung, Wort-Tests und Editor-Optionen.

use crate::app::use_cases;
use crate::app::AppState;

/// Validiert den Automaten.
pub fn validate(state: &mut AppState) {
    use_cases::automaton::validate_automaton(state);
}

/// Testet ein Eingabewort.
pub fn test_string(state: &mut AppState, input: &str) {
    use_cases::automaton::test_string(state, input);
}

/// Schaltet das Einrasten am Raster um.
pub fn toggle_snap_to_grid(state: &mut AppState) {
    state.options.snap_to_grid = !state.options.snap_to_grid;
    log::info!("Raster-Einrasten: {}", state.options.snap_to_grid);
}
