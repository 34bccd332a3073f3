//! Handler für Animations-Uhr und Pause.

use crate::app::use_cases;
use crate::app::AppState;

/// Schaltet die Animation um einen Frame weiter.
pub fn advance(state: &mut AppState) {
    use_cases::animation::advance_frame(state);
}

/// Pausiert oder setzt die Animation fort.
pub fn set_paused(state: &mut AppState, paused: bool) {
    use_cases::animation::set_paused(state, paused);
}
