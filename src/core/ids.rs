//! Opake Entitäts-IDs und ein Allokator, der nie eine ID doppelt vergibt.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

macro_rules! entity_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Erstellt eine ID aus einem beliebigen String (Load-/Test-Pfad).
            pub fn new(raw: impl Into<String>) -> Self {
                Self(raw.into())
            }

            /// Roh-String der ID.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(raw: &str) -> Self {
                Self(raw.to_string())
            }
        }
    };
}

entity_id!(
    /// ID eines Zustands
    StateId
);
entity_id!(
    /// ID eines Alphabet-Tokens
    TokenId
);
entity_id!(
    /// ID einer Transition
    TransitionId
);

/// Vergibt fortlaufende IDs mit Präfix.
///
/// Jede jemals gesehene ID (vergeben oder per Load registriert) wird gemerkt,
/// damit eine per Undo entfernte Entität beim Redo ihre ID behalten kann,
/// ohne dass sie zwischenzeitlich neu vergeben wurde.
#[derive(Debug, Clone, Default)]
pub struct IdAllocator {
    next: u64,
    issued: HashSet<String>,
}

impl IdAllocator {
    /// Erstellt einen leeren Allokator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Liefert eine neue, nie zuvor gesehene ID mit dem gegebenen Präfix.
    pub fn allocate(&mut self, prefix: &str) -> String {
        loop {
            let candidate = format!("{prefix}{}", self.next);
            self.next += 1;
            if self.issued.insert(candidate.clone()) {
                return candidate;
            }
        }
    }

    /// Registriert eine extern erzeugte ID (z.B. aus einer geladenen Datei).
    pub fn register(&mut self, raw: &str) {
        self.issued.insert(raw.to_string());
    }

    /// Prüft ob eine ID bereits vergeben wurde.
    pub fn is_issued(&self, raw: &str) -> bool {
        self.issued.contains(raw)
    }
}
