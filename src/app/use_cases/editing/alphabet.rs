//! Use-Cases: Alphabet bearbeiten.

use crate::app::edit_action::EditAction;
use crate::app::AppState;
use crate::core::{Token, TokenId};

/// Fügt ein neues Token mit leerem Symbol hinzu.
pub fn add_token(state: &mut AppState) -> TokenId {
    let id = state.graph.allocate_token_id();
    let token = Token::new(id.clone(), "");
    state.push_action("Add Token", EditAction::AddToken { token });
    id
}

/// Entfernt ein Token aus dem Alphabet und allen Transitionen.
pub fn remove_token(state: &mut AppState, id: &TokenId) {
    let Some(token) = state.graph.token(id) else {
        log::debug!("Token {} existiert nicht, nichts zu entfernen", id);
        return;
    };
    let text = format!("Remove Token \"{}\"", token.symbol);
    let Some(removal) = state.graph.capture_token_removal(id) else {
        return;
    };
    state.push_action(text, EditAction::RemoveToken { removal });
}

/// Ändert das Symbol eines Tokens (No-op bei gleichem Symbol).
pub fn set_token_symbol(state: &mut AppState, id: &TokenId, symbol: &str) {
    let Some(token) = state.graph.token(id) else {
        log::debug!("Token {} existiert nicht, Symbol ignoriert", id);
        return;
    };
    if token.symbol == symbol {
        return;
    }
    let old = token.symbol.clone();
    state.push_action(
        format!("Rename Token \"{old}\" To \"{symbol}\""),
        EditAction::SetTokenSymbol {
            id: id.clone(),
            old,
            new: symbol.to_string(),
        },
    );
}
