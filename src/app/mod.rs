//! Application-Layer: Controller, State, Events und Use-Cases.

pub mod command_log;
pub mod controller;
pub mod edit_action;
pub mod events;
pub mod handlers;
pub mod history;
pub mod render_scene;
/// Application State
///
/// Dieses Modul verwaltet den Zustand der Anwendung (Automat, Selektion, History).
pub mod state;
pub mod use_cases;

pub use crate::core::{Graph, StateId, TokenId, TransitionId};
pub use command_log::CommandLog;
pub use controller::AppController;
pub use edit_action::EditAction;
pub use events::AppCommand;
pub use history::{CommandStack, Direction, HistoryError, Reversible, StackChange};
pub use render_scene::build as build_render_scene;
pub use state::{AppState, DragState, SelectionState, TestResult};
