//! Writer für Automaten-Snapshots.

use super::{Snapshot, SnapshotError};
use crate::core::Graph;

/// Schreibt den Graphen als formatiertes JSON.
///
/// Nicht-endliche Positionen würden als `null` geschrieben und ließen sich
/// nicht wieder laden; sie werden als Fehler gemeldet.
pub fn write_snapshot(graph: &Graph) -> Result<String, SnapshotError> {
    let snapshot = Snapshot::from_graph(graph);
    for state in &snapshot.states {
        state.check_finite()?;
    }
    Ok(serde_json::to_string_pretty(&snapshot)?)
}
