//! Command panel sub-reducer: copy requests and their results.

use std::time::Instant;

use crate::action::Action;
use crate::command_panel_state::CommandTarget;
use crate::effect::Effect;
use crate::state::AppState;

/// Handles command panel actions.
/// Returns Some(effects) if action was handled, None otherwise.
pub fn reduce_commands(
    state: &mut AppState,
    action: &Action,
    now: Instant,
) -> Option<Vec<Effect>> {
    match action {
        Action::CopyCommand(target) => {
            if *target == CommandTarget::Cli && !state.display.show_cli_command {
                return Some(vec![]);
            }
            let content = state.commands().get(*target).to_string();
            if content.is_empty() {
                return Some(vec![]);
            }
            Some(vec![Effect::CopyToClipboard {
                target: *target,
                content,
                generation: state.form_generation,
            }])
        }
        Action::CommandCopied { target, generation } => {
            if *generation == state.form_generation {
                state.form.copy_feedback.mark_copied_at(*target, now);
            }
            Some(vec![])
        }
        Action::CommandCopyFailed { .. } => Some(vec![]),
        Action::ToggleCliCommand => {
            state.display.show_cli_command = !state.display.show_cli_command;
            Some(vec![])
        }
        _ => None,
    }
}
