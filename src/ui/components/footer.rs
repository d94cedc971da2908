use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::widgets::Paragraph;

use dbtune_app::input_mode::InputMode;
use dbtune_app::keybindings::{
    DROPDOWN_KEYS, FIELD_KEYS, GLOBAL_KEYS, HELP_KEYS, TEXT_ENTRY_KEYS, idx,
};
use dbtune_app::state::AppState;

use super::molecules::hint_line;

pub struct Footer;

impl Footer {
    pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
        let hints = Self::get_context_hints(state);
        frame.render_widget(Paragraph::new(hint_line(&hints)), area);
    }

    /// Hint ordering: Actions → Navigation → Help → Close/Cancel → Quit
    fn get_context_hints(state: &AppState) -> Vec<(&'static str, &'static str)> {
        match state.input_mode {
            InputMode::Normal => {
                let mut list = vec![
                    FIELD_KEYS[idx::field::EDIT].as_hint(),
                    FIELD_KEYS[idx::field::UNSET].as_hint(),
                    GLOBAL_KEYS[idx::global::DATABASE_ID].as_hint(),
                ];
                if !state.commands().is_empty() {
                    list.push(GLOBAL_KEYS[idx::global::COPY_HTTP].as_hint());
                    if state.display.show_cli_command {
                        list.push(GLOBAL_KEYS[idx::global::COPY_CLI].as_hint());
                    }
                }
                list.push(FIELD_KEYS[idx::field::NAVIGATE].as_hint());
                if state.schema().is_sectioned() {
                    list.push(FIELD_KEYS[idx::field::SECTION].as_hint());
                }
                list.push(GLOBAL_KEYS[idx::global::ENGINE_TABS].as_hint());
                list.push(GLOBAL_KEYS[idx::global::HELP].as_hint());
                list.push(GLOBAL_KEYS[idx::global::QUIT].as_hint());
                list
            }
            InputMode::EditField | InputMode::DatabaseId => vec![
                TEXT_ENTRY_KEYS[idx::text_entry::CLEAR].as_hint(),
                TEXT_ENTRY_KEYS[idx::text_entry::MOVE].as_hint(),
                TEXT_ENTRY_KEYS[idx::text_entry::DONE].as_hint(),
            ],
            InputMode::Dropdown => vec![
                DROPDOWN_KEYS[idx::dropdown::CONFIRM].as_hint(),
                DROPDOWN_KEYS[idx::dropdown::NAVIGATE].as_hint(),
                DROPDOWN_KEYS[idx::dropdown::CANCEL].as_hint(),
            ],
            InputMode::Help => vec![
                HELP_KEYS[idx::help::CLOSE].as_hint(),
                HELP_KEYS[idx::help::QUIT].as_hint(),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use dbtune_app::settings::Settings;
    use dbtune_app::test_support::sample_registry;
    use dbtune_app::text_input::EditBuffer;
    use dbtune_domain::{Engine, FieldInput};
    use rstest::rstest;

    fn create_test_state() -> AppState {
        AppState::new(Arc::new(sample_registry()), &Settings::default())
    }

    fn keys(state: &AppState) -> Vec<&'static str> {
        Footer::get_context_hints(state)
            .into_iter()
            .map(|(key, _)| key)
            .collect()
    }

    #[rstest]
    #[case(InputMode::EditField, "Enter/Esc")]
    #[case(InputMode::DatabaseId, "Enter/Esc")]
    #[case(InputMode::Dropdown, "Esc")]
    #[case(InputMode::Help, "q")]
    fn modal_hints_end_with_leave_key(#[case] mode: InputMode, #[case] last: &str) {
        let mut state = create_test_state();
        state.input_mode = mode;

        assert_eq!(keys(&state).last().copied(), Some(last));
    }

    #[test]
    fn copy_hints_only_with_commands() {
        let mut state = create_test_state();
        assert!(!keys(&state).contains(&"y"));

        state.database_id = EditBuffer::with_text("db-1");
        state.form.config =
            state
                .form
                .config
                .apply_change(state.schema(), "backup_hour", FieldInput::Text("3".into()));

        let with_commands = keys(&state);
        assert!(with_commands.contains(&"y"));
        assert!(with_commands.contains(&"Y"));

        state.display.show_cli_command = false;
        assert!(!keys(&state).contains(&"Y"));
    }

    #[test]
    fn section_hint_only_on_sectioned_engine() {
        let mut state = create_test_state();
        assert!(!keys(&state).contains(&"[/]"));

        state.switch_engine(Engine::Postgres);

        assert!(keys(&state).contains(&"[/]"));
    }
}
