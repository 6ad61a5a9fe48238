//! Ein Symbol des Eingabealphabets.

use super::TokenId;

/// Alphabet-Token. Identität ist die ID, nicht das Symbol.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// Eindeutige, unveränderliche ID
    pub id: TokenId,
    /// Symbol (gedacht: genau ein Zeichen; leer oder doppelt ist erlaubt, aber ungültig)
    pub symbol: String,
}

impl Token {
    /// Erstellt ein Token mit dem gegebenen Symbol
    pub fn new(id: TokenId, symbol: impl Into<String>) -> Self {
        Self {
            id,
            symbol: symbol.into(),
        }
    }
}
