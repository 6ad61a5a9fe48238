//! Use-Case-Funktionen für Zustände, Transitionen und Alphabet.
//!
//! Aufgeteilt nach Objektart:
//! - `states`: Zustände hinzufügen, entfernen, umbenennen, markieren
//! - `transitions`: Transitionen erstellen, verbinden, entfernen, Tokens/ε wählen
//! - `alphabet`: Tokens hinzufügen, entfernen, umbenennen

mod alphabet;
mod states;
mod transitions;

pub use alphabet::{add_token, remove_token, set_token_symbol};
pub use states::{add_state, remove_state, rename_state, set_accept, set_start};
pub use transitions::{
    add_transition, connect_states, remove_transition, set_transition_epsilon,
    set_transition_token,
};

pub(crate) use states::label_of;
