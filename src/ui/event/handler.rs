use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use dbtune_app::action::{Action, CursorMove};
use dbtune_app::command_panel_state::CommandTarget;
use dbtune_app::input_mode::InputMode;
use dbtune_app::state::AppState;
use dbtune_domain::Engine;

use super::Event;

pub fn handle_event(event: Event, state: &AppState) -> Action {
    match event {
        Event::Init => Action::Render,
        Event::Resize => Action::Resize,
        Event::Paste(text) if state.input_mode.has_text_cursor() => Action::Paste(text),
        Event::Paste(_) => Action::None,
        Event::Key(key) => handle_key_event(key, state),
    }
}

fn handle_key_event(key: KeyEvent, state: &AppState) -> Action {
    // Ctrl+C quits from anywhere
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Action::Quit;
    }

    match state.input_mode {
        InputMode::Normal => handle_normal_mode(key),
        InputMode::EditField => handle_field_edit_keys(key),
        InputMode::DatabaseId => handle_database_id_keys(key),
        InputMode::Dropdown => handle_dropdown_keys(key),
        InputMode::Help => handle_help_keys(key),
    }
}

fn handle_normal_mode(key: KeyEvent) -> Action {
    match (key.code, key.modifiers) {
        // Shift+Tab: Previous engine
        (KeyCode::Tab, m) if m.contains(KeyModifiers::SHIFT) => {
            return Action::PreviousEngine;
        }
        // BackTab (some terminals send this for Shift+Tab)
        (KeyCode::BackTab, _) => {
            return Action::PreviousEngine;
        }
        (KeyCode::Tab, _) => {
            return Action::NextEngine;
        }
        _ => {}
    }

    match key.code {
        KeyCode::Char('q') => Action::Quit,
        KeyCode::Char('?') => Action::OpenHelp,
        KeyCode::Char('i') => Action::EnterDatabaseIdInput,

        // Engine tabs (1-6 keys)
        KeyCode::Char(c @ '1'..='9') => c
            .to_digit(10)
            .and_then(|d| Engine::from_index(d as usize - 1))
            .map(Action::SwitchEngine)
            .unwrap_or(Action::None),

        // Navigation
        KeyCode::Up | KeyCode::Char('k') => Action::SelectPreviousField,
        KeyCode::Down | KeyCode::Char('j') => Action::SelectNextField,
        KeyCode::Char('g') | KeyCode::Home => Action::SelectFirstField,
        KeyCode::Char('G') | KeyCode::End => Action::SelectLastField,
        KeyCode::Char(']') => Action::SelectNextSection,
        KeyCode::Char('[') => Action::SelectPreviousSection,

        KeyCode::Enter | KeyCode::Char(' ') => Action::ActivateField,
        KeyCode::Char('x') | KeyCode::Delete => Action::ClearField,

        KeyCode::Char('y') => Action::CopyCommand(CommandTarget::Http),
        KeyCode::Char('Y') => Action::CopyCommand(CommandTarget::Cli),
        KeyCode::Char('o') => Action::ToggleCliCommand,

        _ => Action::None,
    }
}

fn cursor_move(code: KeyCode) -> Option<CursorMove> {
    match code {
        KeyCode::Left => Some(CursorMove::Left),
        KeyCode::Right => Some(CursorMove::Right),
        KeyCode::Home => Some(CursorMove::Home),
        KeyCode::End => Some(CursorMove::End),
        _ => None,
    }
}

fn is_clear(key: &KeyEvent) -> bool {
    key.code == KeyCode::Char('u') && key.modifiers.contains(KeyModifiers::CONTROL)
}

fn handle_field_edit_keys(key: KeyEvent) -> Action {
    if is_clear(&key) {
        return Action::FieldClearDraft;
    }
    if let Some(movement) = cursor_move(key.code) {
        return Action::FieldMoveCursor(movement);
    }

    match key.code {
        KeyCode::Enter | KeyCode::Esc => Action::ExitFieldEdit,
        KeyCode::Backspace => Action::FieldBackspace,
        KeyCode::Delete => Action::FieldDelete,
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            Action::FieldInput(c)
        }
        _ => Action::None,
    }
}

fn handle_database_id_keys(key: KeyEvent) -> Action {
    if is_clear(&key) {
        return Action::DatabaseIdClear;
    }
    if let Some(movement) = cursor_move(key.code) {
        return Action::DatabaseIdMoveCursor(movement);
    }

    match key.code {
        KeyCode::Enter | KeyCode::Esc => Action::ExitDatabaseIdInput,
        KeyCode::Backspace => Action::DatabaseIdBackspace,
        KeyCode::Delete => Action::DatabaseIdDelete,
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            Action::DatabaseIdInput(c)
        }
        _ => Action::None,
    }
}

fn handle_dropdown_keys(key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Enter => Action::ConfirmDropdown,
        KeyCode::Esc => Action::CloseDropdown,
        KeyCode::Up | KeyCode::Char('k') => Action::DropdownPrevious,
        KeyCode::Down | KeyCode::Char('j') => Action::DropdownNext,
        _ => Action::None,
    }
}

fn handle_help_keys(key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Char('q') => Action::Quit,
        KeyCode::Esc | KeyCode::Char('?') => Action::CloseHelp,
        _ => Action::None,
    }
}
