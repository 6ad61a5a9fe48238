//! Core-Domänentypen: Zustände, Transitionen, Alphabet, Graph, Layout, DFA.

pub mod automaton;
pub mod graph;
pub mod ids;
pub mod layout;
pub mod runner;
/// Core-Datenmodelle des Automaten-Editors
///
/// Dieses Modul definiert die Haupt-Datenstrukturen:
/// - Graph: Container für Zustände, Transitionen und Alphabet
/// - State: Einzelner Zustand mit Position und Akzeptanz-Flag
/// - Transition: Übergang zwischen zwei Zuständen
pub mod state;
pub mod token;
pub mod transition;

pub use automaton::{project, validate, Dfa, DfaEpsilon, DfaTransition, Severity, ValidationFinding};
pub use graph::{Clipboard, Graph, PasteBatch, PasteResult, RemovalSet, TokenRemoval};
pub use ids::{IdAllocator, StateId, TokenId, TransitionId};
pub use layout::{ArrowKind, ArrowLayout, LayoutCache, LayoutMetrics};
pub use runner::{DfaRunner, RunStatus};
pub use state::State;
pub use token::Token;
pub use transition::{LayoutPriority, Transition};
