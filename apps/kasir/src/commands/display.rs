//! # Display Commands
//!
//! Cosmetic preferences. These never touch the session.

use tracing::debug;

use crate::state::{DisplayState, ThemeMode};

pub fn get_display(display: &DisplayState) -> DisplayState {
    debug!("get_display command");
    display.clone()
}

/// Switches between light and dark. Not saved across restarts.
pub fn toggle_theme(display: &mut DisplayState) -> ThemeMode {
    let theme = display.toggle_theme();
    debug!(theme = %theme, "toggle_theme command");
    theme
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::AppState;

    #[test]
    fn test_toggle_leaves_session_alone() {
        let mut state = AppState::default();
        let before = state.session.snapshot();

        assert_eq!(toggle_theme(&mut state.display), ThemeMode::Dark);
        assert_eq!(get_display(&state.display).theme, ThemeMode::Dark);
        assert_eq!(state.session.snapshot(), before);
    }
}
