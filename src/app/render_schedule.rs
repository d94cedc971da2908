//! Pure functions for calculating animation deadlines.
//!
//! The UI layer uses the returned deadline to schedule a wake-up so timed
//! feedback disappears without user input.

use std::time::Instant;

use crate::state::AppState;

/// Returns `None` when nothing on screen is waiting to expire.
///
/// The only timed element is the per-command "Copied!" acknowledgement.
/// The text cursor is the terminal's own and needs no redraws to blink.
pub fn next_animation_deadline(state: &AppState) -> Option<Instant> {
    state.form.copy_feedback.next_expiry()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command_panel_state::{CommandPanelState, CommandTarget};
    use crate::settings::Settings;
    use crate::test_support::sample_registry;
    use std::sync::Arc;
    use std::time::Duration;

    fn create_test_state() -> AppState {
        AppState::new(Arc::new(sample_registry()), &Settings::default())
    }

    #[test]
    fn idle_state_has_no_deadline() {
        let state = create_test_state();

        assert_eq!(next_animation_deadline(&state), None);
    }

    #[test]
    fn earliest_copy_feedback_expiry_wins() {
        let mut state = create_test_state();
        let now = Instant::now();
        state.form.copy_feedback.mark_copied_at(CommandTarget::Cli, now);
        state
            .form
            .copy_feedback
            .mark_copied_at(CommandTarget::Http, now + Duration::from_millis(500));

        assert_eq!(
            next_animation_deadline(&state),
            Some(now + CommandPanelState::FEEDBACK_TIMEOUT)
        );
    }
}
