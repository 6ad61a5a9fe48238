//! JSON Import/Export für Automaten-Snapshots.
//!
//! Format: `states`, `alphabet`, `transitions`, `startState`, `acceptStates`.
//! IDs bleiben beim Laden erhalten.

pub mod parser;
mod snapshot;
pub mod writer;

pub use parser::{apply_snapshot, load_snapshot, parse_snapshot};
pub use snapshot::{Snapshot, StateRecord, TokenRecord, TransitionRecord};
pub use writer::write_snapshot;

use thiserror::Error;

/// Fehler beim Lesen oder Anwenden eines Snapshots
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("Ungültiges JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Doppelte {kind}-ID: {id}")]
    DuplicateId { kind: &'static str, id: String },

    #[error("Transition {transition} verweist auf unbekannten Zustand {state}")]
    DanglingEndpoint { transition: String, state: String },

    #[error("Zustand {state} hat keine endliche Position ({x}, {y})")]
    NonFiniteCoordinate { state: String, x: f32, y: f32 },
}
