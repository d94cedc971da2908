//! Shell sub-reducer: help overlay, engine tabs and the database ID input.

use std::time::Instant;

use crate::action::{Action, CursorMove};
use crate::effect::Effect;
use crate::input_mode::InputMode;
use crate::state::AppState;

/// Handles actions outside the field form.
/// Returns Some(effects) if action was handled, None otherwise.
pub fn reduce_shell(state: &mut AppState, action: &Action, _now: Instant) -> Option<Vec<Effect>> {
    match action {
        Action::OpenHelp => {
            state.input_mode = if state.input_mode == InputMode::Help {
                InputMode::Normal
            } else {
                InputMode::Help
            };
            Some(vec![])
        }
        Action::CloseHelp => {
            state.input_mode = InputMode::Normal;
            Some(vec![])
        }

        Action::SwitchEngine(engine) => {
            state.switch_engine(*engine);
            Some(vec![])
        }
        Action::NextEngine => {
            state.switch_engine(state.engine.next());
            Some(vec![])
        }
        Action::PreviousEngine => {
            state.switch_engine(state.engine.previous());
            Some(vec![])
        }

        Action::EnterDatabaseIdInput => {
            state.form.close_dropdown();
            state.database_id.move_cursor(CursorMove::End);
            state.input_mode = InputMode::DatabaseId;
            Some(vec![])
        }
        Action::ExitDatabaseIdInput => {
            state.input_mode = InputMode::Normal;
            Some(vec![])
        }
        Action::DatabaseIdInput(c) => {
            state.database_id.insert_char(*c);
            Some(vec![])
        }
        Action::DatabaseIdBackspace => {
            state.database_id.backspace();
            Some(vec![])
        }
        Action::DatabaseIdDelete => {
            state.database_id.delete();
            Some(vec![])
        }
        Action::DatabaseIdClear => {
            state.database_id.clear();
            Some(vec![])
        }
        Action::DatabaseIdMoveCursor(movement) => {
            state.database_id.move_cursor(*movement);
            Some(vec![])
        }
        Action::Paste(text) if state.input_mode == InputMode::DatabaseId => {
            state.database_id.insert_str(text);
            Some(vec![])
        }

        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Settings;
    use crate::test_support::sample_registry;
    use crate::text_input::EditBuffer;
    use dbtune_domain::{Engine, FieldInput};
    use rstest::rstest;
    use std::sync::Arc;

    fn create_test_state() -> AppState {
        AppState::new(Arc::new(sample_registry()), &Settings::default())
    }

    mod help {
        use super::*;

        #[test]
        fn open_help_toggles() {
            let mut state = create_test_state();

            reduce_shell(&mut state, &Action::OpenHelp, Instant::now());
            assert_eq!(state.input_mode, InputMode::Help);

            reduce_shell(&mut state, &Action::OpenHelp, Instant::now());
            assert_eq!(state.input_mode, InputMode::Normal);
        }

        #[test]
        fn close_help_returns_to_normal() {
            let mut state = create_test_state();
            state.input_mode = InputMode::Help;

            reduce_shell(&mut state, &Action::CloseHelp, Instant::now());

            assert_eq!(state.input_mode, InputMode::Normal);
        }
    }

    mod engine_tabs {
        use super::*;

        #[rstest]
        #[case(Action::NextEngine, Engine::Postgres)]
        #[case(Action::PreviousEngine, Engine::OpenSearch)]
        #[case(Action::SwitchEngine(Engine::Kafka), Engine::Kafka)]
        fn moves_to_expected_engine(#[case] action: Action, #[case] expected: Engine) {
            let mut state = create_test_state();

            let effects = reduce_shell(&mut state, &action, Instant::now());

            assert_eq!(effects, Some(vec![]));
            assert_eq!(state.engine, expected);
        }

        #[test]
        fn switch_discards_form_values_and_bumps_generation() {
            let mut state = create_test_state();
            state.form.config = state.form.config.apply_change(
                state.schema(),
                "slow_query_log",
                FieldInput::Toggle(true),
            );
            state.form.selected = 3;

            reduce_shell(
                &mut state,
                &Action::SwitchEngine(Engine::Redis),
                Instant::now(),
            );

            assert!(state.form.config.is_empty());
            assert_eq!(state.form.selected, 0);
            assert_eq!(state.form_generation, 1);
        }

        #[test]
        fn switch_to_active_engine_keeps_values() {
            let mut state = create_test_state();
            state.form.config = state.form.config.apply_change(
                state.schema(),
                "slow_query_log",
                FieldInput::Toggle(true),
            );

            reduce_shell(
                &mut state,
                &Action::SwitchEngine(Engine::MySql),
                Instant::now(),
            );

            assert_eq!(state.form.config.len(), 1);
            assert_eq!(state.form_generation, 0);
        }

        #[test]
        fn switch_while_editing_leaves_edit_mode() {
            let mut state = create_test_state();
            state.input_mode = InputMode::EditField;

            reduce_shell(&mut state, &Action::NextEngine, Instant::now());

            assert_eq!(state.input_mode, InputMode::Normal);
        }
    }

    mod database_id {
        use super::*;

        #[test]
        fn enter_places_cursor_at_end() {
            let mut state = create_test_state();
            state.database_id = EditBuffer::with_text("abc");
            state.database_id.move_cursor(CursorMove::Home);

            reduce_shell(&mut state, &Action::EnterDatabaseIdInput, Instant::now());

            assert_eq!(state.input_mode, InputMode::DatabaseId);
            assert_eq!(state.database_id.cursor(), 3);
        }

        #[test]
        fn typing_and_backspace_edit_the_id() {
            let mut state = create_test_state();
            state.input_mode = InputMode::DatabaseId;
            let now = Instant::now();

            for c in "abcd".chars() {
                reduce_shell(&mut state, &Action::DatabaseIdInput(c), now);
            }
            reduce_shell(&mut state, &Action::DatabaseIdBackspace, now);

            assert_eq!(state.database_id.as_str(), "abc");
        }

        #[test]
        fn clear_empties_the_id() {
            let mut state = create_test_state();
            state.database_id = EditBuffer::with_text("abc");

            reduce_shell(&mut state, &Action::DatabaseIdClear, Instant::now());

            assert!(state.database_id.is_empty());
        }

        #[test]
        fn paste_strips_newlines() {
            let mut state = create_test_state();
            state.input_mode = InputMode::DatabaseId;

            let effects = reduce_shell(
                &mut state,
                &Action::Paste("9cc1-\n42\r\n".to_string()),
                Instant::now(),
            );

            assert!(effects.is_some());
            assert_eq!(state.database_id.as_str(), "9cc1-42");
        }

        #[test]
        fn paste_in_normal_mode_returns_none() {
            let mut state = create_test_state();

            let effects = reduce_shell(
                &mut state,
                &Action::Paste("text".to_string()),
                Instant::now(),
            );

            assert!(effects.is_none());
            assert!(state.database_id.is_empty());
        }
    }
}
