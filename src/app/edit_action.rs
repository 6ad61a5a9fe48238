//! Umkehrbare Editier-Aktionen auf dem Automaten-Graphen.
//!
//! Jede Variante trägt alle Daten, die für Vorwärts- und Rückwärts-Anwendung
//! nötig sind. `apply` ist die einzige Stelle, an der Undo/Redo den Graphen
//! verändert.

use super::history::{Direction, Reversible};
use crate::core::{
    Graph, LayoutPriority, PasteBatch, RemovalSet, State, StateId, Token, TokenId, TokenRemoval,
    Transition, TransitionId,
};
use glam::Vec2;

/// Alle Editier-Aktionen, die im Undo-Stack landen
#[derive(Debug, Clone, PartialEq)]
pub enum EditAction {
    /// Neuer Zustand (optional zugleich als Start gesetzt)
    AddState { state: State, made_start: bool },
    /// Zustände und/oder Transitionen entfernt (inkl. Kaskade)
    RemoveEntities { removal: RemovalSet },
    /// Zustand umbenannt
    RenameState {
        id: StateId,
        old: String,
        new: String,
    },
    /// Akzeptanz-Flag geändert
    SetAccept { id: StateId, old: bool, new: bool },
    /// Start-Zustand geändert
    SetStart {
        old: Option<StateId>,
        new: Option<StateId>,
    },
    /// Zustände verschoben
    MoveStates { ids: Vec<StateId>, delta: Vec2 },
    /// Neue Transition; `flipped` wird beim Vorwärts-Anwenden gefüllt
    AddTransition {
        transition: Transition,
        flipped: Vec<TransitionId>,
    },
    /// Neues Token im Alphabet
    AddToken { token: Token },
    /// Token entfernt (inkl. Streichung aus Transitionen)
    RemoveToken { removal: TokenRemoval },
    /// Symbol eines Tokens geändert
    SetTokenSymbol {
        id: TokenId,
        old: String,
        new: String,
    },
    /// Token einer Transition hinzugefügt oder entfernt
    SetTransitionToken {
        transition: TransitionId,
        token: TokenId,
        include: bool,
        /// Position im Token-Set vor dem Entfernen
        index: Option<usize>,
    },
    /// ε-Flag einer Transition geändert
    SetEpsilon {
        transition: TransitionId,
        old: bool,
        new: bool,
    },
    /// Eingefügte Zwischenablage
    Paste {
        batch: PasteBatch,
        flipped: Vec<TransitionId>,
    },
}

impl Reversible<Graph> for EditAction {
    fn apply(&mut self, direction: Direction, graph: &mut Graph) {
        let forward = direction == Direction::Forward;
        match self {
            Self::AddState { state, made_start } => {
                if forward {
                    graph.insert_state(state.clone());
                    if *made_start {
                        graph.set_start(Some(&state.id));
                    }
                } else {
                    graph.remove_state(&state.id);
                }
            }
            Self::RemoveEntities { removal } => {
                if forward {
                    graph.apply_removal(removal);
                } else {
                    graph.restore_removal(removal);
                }
            }
            Self::RenameState { id, old, new } => {
                let label = if forward { new } else { old };
                graph.rename_state(id, label.clone());
            }
            Self::SetAccept { id, old, new } => {
                graph.set_accept(id, if forward { *new } else { *old });
            }
            Self::SetStart { old, new } => {
                let target = if forward { new } else { old };
                graph.set_start(target.as_ref());
            }
            Self::MoveStates { ids, delta } => {
                let delta = if forward { *delta } else { -*delta };
                graph.translate_states(ids, delta);
            }
            Self::AddTransition {
                transition,
                flipped,
            } => {
                if forward {
                    *flipped = graph.insert_transition(transition.clone());
                } else {
                    graph.remove_transition(&transition.id);
                    graph.set_layout_priority(flipped, LayoutPriority::Straight);
                }
            }
            Self::AddToken { token } => {
                if forward {
                    graph.insert_token(token.clone());
                } else {
                    graph.remove_token(&token.id);
                }
            }
            Self::RemoveToken { removal } => {
                if forward {
                    graph.remove_token(&removal.token.id);
                } else {
                    graph.restore_token(removal);
                }
            }
            Self::SetTokenSymbol { id, old, new } => {
                let symbol = if forward { new } else { old };
                graph.set_token_symbol(id, symbol.clone());
            }
            Self::SetTransitionToken {
                transition,
                token,
                include,
                index,
            } => {
                // Vorwärts: gewünschte Mitgliedschaft herstellen, rückwärts: umgekehrt
                let should_contain = *include == forward;
                if should_contain {
                    match index {
                        Some(index) if !*include => {
                            graph.transition_insert_token_at(transition, token, *index);
                        }
                        _ => {
                            graph.transition_add_token(transition, token);
                        }
                    }
                } else {
                    let removed_at = graph.transition_remove_token(transition, token);
                    if !*include {
                        *index = removed_at.or(*index);
                    }
                }
            }
            Self::SetEpsilon {
                transition,
                old,
                new,
            } => {
                graph.set_epsilon(transition, if forward { *new } else { *old });
            }
            Self::Paste { batch, flipped } => {
                if forward {
                    *flipped = graph.insert_batch(batch);
                } else {
                    graph.remove_batch(batch);
                    graph.set_layout_priority(flipped, LayoutPriority::Straight);
                }
            }
        }
    }
}

impl EditAction {
    /// Kurzname der Aktion für Logs
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::AddState { .. } => "AddState",
            Self::RemoveEntities { .. } => "RemoveEntities",
            Self::RenameState { .. } => "RenameState",
            Self::SetAccept { .. } => "SetAccept",
            Self::SetStart { .. } => "SetStart",
            Self::MoveStates { .. } => "MoveStates",
            Self::AddTransition { .. } => "AddTransition",
            Self::AddToken { .. } => "AddToken",
            Self::RemoveToken { .. } => "RemoveToken",
            Self::SetTokenSymbol { .. } => "SetTokenSymbol",
            Self::SetTransitionToken { .. } => "SetTransitionToken",
            Self::SetEpsilon { .. } => "SetEpsilon",
            Self::Paste { .. } => "Paste",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::history::CommandStack;

    fn graph_with_pair() -> (Graph, StateId, StateId) {
        let mut graph = Graph::new();
        let a = graph.add_state("q0", Vec2::ZERO).id;
        let b = graph.add_state("q1", Vec2::new(100.0, 0.0)).id;
        (graph, a, b)
    }

    #[test]
    fn add_transition_undo_reverts_flipped_priority() {
        let (mut graph, a, b) = graph_with_pair();
        let first = graph.add_transition(&a, &b, false, []).expect("erste");

        let mut stack = CommandStack::new();
        let id = graph.allocate_transition_id();
        let action = EditAction::AddTransition {
            transition: Transition::new(id.clone(), b.clone(), a.clone(), false, []),
            flipped: Vec::new(),
        };
        stack.push("Add", action, &mut graph, true);
        assert_eq!(
            graph.transition(&first.id).map(|t| t.layout_priority),
            Some(LayoutPriority::Curve)
        );

        stack.undo(&mut graph).expect("Undo erwartet");
        assert!(graph.transition(&id).is_none());
        assert_eq!(
            graph.transition(&first.id).map(|t| t.layout_priority),
            Some(LayoutPriority::Straight)
        );

        stack.redo(&mut graph).expect("Redo erwartet");
        assert_eq!(
            graph.transition(&id).map(|t| t.layout_priority),
            Some(LayoutPriority::Curve)
        );
    }

    #[test]
    fn set_transition_token_remove_restores_position() {
        let (mut graph, a, b) = graph_with_pair();
        let x = graph.add_token();
        let y = graph.add_token();
        let t = graph
            .add_transition(&a, &b, false, [x.id.clone(), y.id.clone()])
            .expect("Transition");

        let mut stack = CommandStack::new();
        stack.push(
            "Remove x",
            EditAction::SetTransitionToken {
                transition: t.id.clone(),
                token: x.id.clone(),
                include: false,
                index: None,
            },
            &mut graph,
            true,
        );
        let tokens = |g: &Graph| -> Vec<TokenId> {
            g.transition(&t.id)
                .map(|t| t.tokens.iter().cloned().collect())
                .unwrap_or_default()
        };
        assert_eq!(tokens(&graph), vec![y.id.clone()]);

        stack.undo(&mut graph).expect("Undo erwartet");
        assert_eq!(tokens(&graph), vec![x.id.clone(), y.id.clone()]);

        stack.redo(&mut graph).expect("Redo erwartet");
        assert_eq!(tokens(&graph), vec![y.id.clone()]);
    }

    #[test]
    fn move_states_backward_negates_delta() {
        let (mut graph, a, _) = graph_with_pair();
        let mut action = EditAction::MoveStates {
            ids: vec![a.clone()],
            delta: Vec2::new(3.0, 4.0),
        };
        action.apply(Direction::Forward, &mut graph);
        action.apply(Direction::Backward, &mut graph);
        action.apply(Direction::Forward, &mut graph);
        assert_eq!(graph.state(&a).map(|s| s.position), Some(Vec2::new(3.0, 4.0)));
    }

    #[test]
    fn remove_token_round_trip() {
        let (mut graph, a, b) = graph_with_pair();
        let x = graph.add_token();
        let t = graph
            .add_transition(&a, &b, false, [x.id.clone()])
            .expect("Transition");
        let removal = graph.remove_token(&x.id).expect("Token");
        // Graph zurück auf Ausgangslage, dann über die Aktion entfernen
        graph.restore_token(&removal);

        let mut stack = CommandStack::new();
        stack.push("Remove", EditAction::RemoveToken { removal }, &mut graph, true);
        assert_eq!(graph.token_count(), 0);
        stack.undo(&mut graph).expect("Undo erwartet");
        assert!(graph
            .transition(&t.id)
            .is_some_and(|t| t.tokens.contains(&x.id)));
    }
}
