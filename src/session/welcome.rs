//! One-time welcome notification.

use std::path::Path;

use crate::state::GlobalState;
use crate::ui::UserInterface;

/// Shown the first time Bonnie runs for a user.
pub const WELCOME_MESSAGE: &str =
    "Welcome to Bonnie! Your Behave BDD development companion is ready.";

/// Show the welcome message unless the state file says it was shown.
///
/// Returns whether the message was shown. Without a user directory the
/// message is never shown, since there is nowhere to remember it. A state
/// file that cannot be read or written is logged and otherwise ignored.
pub fn show_welcome_once(user_dir: Option<&Path>, ui: &mut dyn UserInterface) -> bool {
    let Some(user_dir) = user_dir else {
        tracing::debug!("No user directory; skipping welcome");
        return false;
    };

    let path = GlobalState::file_path(user_dir);
    let mut state = match GlobalState::load(&path) {
        Ok(state) => state,
        Err(e) => {
            tracing::warn!("Ignoring unreadable state file: {}", e);
            GlobalState::default()
        }
    };

    if state.has_shown_welcome {
        return false;
    }

    ui.message(WELCOME_MESSAGE);
    state.mark_welcome_shown();
    if let Err(e) = state.save(&path) {
        tracing::warn!("Failed to record welcome message: {}", e);
    }
    true
}
