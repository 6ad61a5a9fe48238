//! Application Controller für zentrale Event-Verarbeitung.

use super::render_scene;
use super::{AppCommand, AppState};
use crate::shared::RenderScene;

/// Orchestriert Commands und Use-Cases auf den AppState.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    ///
    /// Nach jedem Command wird der Layout-Cache aufgefrischt.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(&command);
        use super::handlers;

        let result = match command {
            // === Zustände ===
            AppCommand::AddState { position } => {
                handlers::editing::add_state(state, position);
                Ok(())
            }
            AppCommand::RemoveState { id } => {
                handlers::editing::remove_state(state, &id);
                Ok(())
            }
            AppCommand::RenameState { id, label } => {
                handlers::editing::rename_state(state, &id, &label);
                Ok(())
            }
            AppCommand::SetStateAccept { id, is_accept } => {
                handlers::editing::set_accept(state, &id, is_accept);
                Ok(())
            }
            AppCommand::SetStartState { id } => {
                handlers::editing::set_start(state, id.as_ref());
                Ok(())
            }

            // === Transitionen ===
            AppCommand::AddTransition {
                source,
                dest,
                is_epsilon,
                tokens,
            } => {
                handlers::editing::add_transition(state, &source, &dest, is_epsilon, &tokens);
                Ok(())
            }
            AppCommand::ConnectStates { source, dest } => {
                handlers::editing::connect_states(state, &source, &dest);
                Ok(())
            }
            AppCommand::RemoveTransition { id } => {
                handlers::editing::remove_transition(state, &id);
                Ok(())
            }
            AppCommand::SetTransitionToken {
                transition,
                token,
                accept,
            } => {
                handlers::editing::set_transition_token(state, &transition, &token, accept);
                Ok(())
            }
            AppCommand::SetTransitionEpsilon {
                transition,
                is_epsilon,
            } => {
                handlers::editing::set_transition_epsilon(state, &transition, is_epsilon);
                Ok(())
            }

            // === Alphabet ===
            AppCommand::AddToken => {
                handlers::editing::add_token(state);
                Ok(())
            }
            AppCommand::RemoveToken { id } => {
                handlers::editing::remove_token(state, &id);
                Ok(())
            }
            AppCommand::SetTokenSymbol { id, symbol } => {
                handlers::editing::set_token_symbol(state, &id, &symbol);
                Ok(())
            }

            // === Selektion & Verschieben ===
            AppCommand::SetSelection {
                states,
                transitions,
            } => {
                handlers::selection::set(state, &states, &transitions);
                Ok(())
            }
            AppCommand::ClearSelection => {
                handlers::selection::clear(state);
                Ok(())
            }
            AppCommand::SelectAll => {
                handlers::selection::select_all(state);
                Ok(())
            }
            AppCommand::BeginMoveSelectedStates => {
                handlers::selection::begin_move(state);
                Ok(())
            }
            AppCommand::MoveSelectedStates { delta } => {
                handlers::selection::move_selected(state, delta);
                Ok(())
            }
            AppCommand::EndMoveSelectedStates => {
                handlers::selection::end_move(state);
                Ok(())
            }
            AppCommand::MoveStates { ids, delta } => {
                handlers::selection::move_states(state, &ids, delta);
                Ok(())
            }
            AppCommand::DeleteSelected => {
                handlers::selection::delete_selected(state);
                Ok(())
            }

            // === Zwischenablage ===
            AppCommand::CopySelection => {
                handlers::clipboard::copy(state);
                Ok(())
            }
            AppCommand::CutSelection => {
                handlers::clipboard::cut(state);
                Ok(())
            }
            AppCommand::Paste { offset } => {
                handlers::clipboard::paste(state, offset);
                Ok(())
            }

            // === History ===
            AppCommand::Undo => {
                handlers::history::undo(state);
                Ok(())
            }
            AppCommand::Redo => {
                handlers::history::redo(state);
                Ok(())
            }

            // === Automat & Datei-I/O ===
            AppCommand::ClearAutomaton => {
                handlers::file_io::clear(state);
                Ok(())
            }
            AppCommand::LoadFile { path } => handlers::file_io::load(state, path),
            AppCommand::SaveFile { path } => handlers::file_io::save(state, path),
            AppCommand::LoadJson { json } => handlers::file_io::load_json(state, &json),
            AppCommand::ToggleSnapToGrid => {
                handlers::automaton::toggle_snap_to_grid(state);
                Ok(())
            }
            AppCommand::TestString { input } => {
                handlers::automaton::test_string(state, &input);
                Ok(())
            }
            AppCommand::ValidateAutomaton => {
                handlers::automaton::validate(state);
                Ok(())
            }
        };

        // Cache auch nach Fehlern auffrischen (Graph bleibt gültig)
        state
            .layout_cache
            .set_metrics(state.options.layout_metrics());
        let recomputed = state.layout_cache.refresh(&state.graph);
        if recomputed > 0 {
            log::trace!("Layout-Cache: {} Pfeile neu berechnet", recomputed);
        }

        result
    }

    /// Baut die Render-Szene aus dem aktuellen State.
    pub fn build_render_scene(&self, state: &AppState) -> RenderScene {
        render_scene::build(state)
    }
}
