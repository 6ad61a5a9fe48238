//! Use-Case-Funktionen für Selektion und Verschieben.
//!
//! - `select`: Selektion setzen, aufheben, alles wählen, löschen
//! - `move_states`: Drag-Lifecycle und direktes Verschieben

mod move_states;
mod select;

pub use move_states::{begin_move_selected, end_move_selected, move_selected_states, move_states};
pub use select::{clear_selection, delete_selected, select_all, set_selection};
