//! Automaton Editor Library.
//! Core-Funktionalität als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod json;
pub mod shared;

pub use app::{AppCommand, AppController, AppState, EditAction, SelectionState};
pub use core::{
    Dfa, Graph, LayoutPriority, RunStatus, State, StateId, Token, TokenId, Transition,
    TransitionId, ValidationFinding,
};
pub use core::{ArrowKind, ArrowLayout, LayoutCache, LayoutMetrics};
pub use json::{load_snapshot, write_snapshot, Snapshot, SnapshotError};
pub use shared::{EditorOptions, RenderScene};
