//! Pure reducer: state transitions only, no I/O.
//!
//! # Purity Rules
//!
//! The reducer MUST NOT:
//! - Call `Instant::now()` (time is passed as `now` parameter)
//! - Perform I/O operations
//! - Spawn async tasks
//!
//! Clipboard writes are requested through `Effect::CopyToClipboard` and
//! their outcome comes back as an action.

use std::time::Instant;

use crate::action::Action;
use crate::effect::Effect;
use crate::reducers::{reduce_commands, reduce_form, reduce_shell};
use crate::state::AppState;

pub fn reduce(state: &mut AppState, action: Action, now: Instant) -> Vec<Effect> {
    // Mark dirty for all state-changing actions (except None and Render)
    let should_mark_dirty = !matches!(action, Action::None | Action::Render);

    let effects = reduce_inner(state, action, now);

    if should_mark_dirty {
        state.mark_dirty();
    }

    effects
}

fn reduce_inner(state: &mut AppState, action: Action, now: Instant) -> Vec<Effect> {
    if let Some(effects) = reduce_shell(state, &action, now) {
        return effects;
    }
    if let Some(effects) = reduce_form(state, &action, now) {
        return effects;
    }
    if let Some(effects) = reduce_commands(state, &action, now) {
        return effects;
    }

    match action {
        Action::Quit => {
            state.should_quit = true;
            vec![]
        }
        Action::Resize => vec![],
        Action::Render => {
            state.clear_expired_timers(now);
            state.clear_dirty();
            vec![Effect::Render]
        }
        _ => vec![],
    }
}
