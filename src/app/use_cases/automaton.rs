//! Use-Cases: Automaten validieren und Wörter testen.

use crate::app::state::TestResult;
use crate::app::AppState;
use crate::core::{automaton, runner, RunStatus};

/// Validiert den aktuellen Automaten und speichert die Befunde.
pub fn validate_automaton(state: &mut AppState) {
    let dfa = automaton::project(&state.graph);
    state.last_findings = automaton::validate(&dfa);

    let errors = state.last_findings.iter().filter(|f| f.is_error()).count();
    let warnings = state.last_findings.len() - errors;
    log::info!("Validierung: {} Fehler, {} Warnungen", errors, warnings);
    for finding in &state.last_findings {
        log::debug!("  {}", finding);
    }
}

/// Testet ein Wort; jedes Zeichen ist ein Symbol.
pub fn test_string(state: &mut AppState, input: &str) -> RunStatus {
    let dfa = automaton::project(&state.graph);
    let status = runner::run(&dfa, runner::split_symbols(input));
    log::info!("Wort \"{}\" getestet: {}", input, status);
    state.last_test = Some(TestResult {
        input: input.to_string(),
        status,
    });
    status
}
