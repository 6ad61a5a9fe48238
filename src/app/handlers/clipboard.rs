//! Handler für Copy/Cut/Paste.

use crate::app::use_cases;
use crate::app::AppState;

/// Kopiert die Selektion in die Zwischenablage.
pub fn copy(state: &mut AppState) {
    use_cases::clipboard::copy_selection(state);
}

/// Schneidet die Selektion aus.
pub fn cut(state: &mut AppState) {
    use_cases::clipboard::cut_selection(state);
}

/// Fügt die Zwischenablage ein, optional mit eigenem Versatz.
pub fn paste(state: &mut AppState, offset: Option<glam::Vec2>) {
    use_cases::clipboard::paste(state, offset);
}
