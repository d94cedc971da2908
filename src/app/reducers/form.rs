//! Form sub-reducer: field selection, drafts, dropdowns and toggles.
//!
//! Every edit is applied to the config immediately; there is no submit step.

use std::time::Instant;

use dbtune_domain::{FieldInput, FieldKind};

use crate::action::Action;
use crate::effect::Effect;
use crate::field_editor::{Activation, activate, choice_input, draft_input};
use crate::field_view::select_choices;
use crate::input_mode::InputMode;
use crate::state::AppState;

fn apply_to_selected(state: &mut AppState, input: FieldInput) {
    let Some(name) = state.selected_field().map(|field| field.name.clone()) else {
        return;
    };
    state.form.config = state.form.config.apply_change(state.schema(), &name, input);
}

fn apply_draft(state: &mut AppState) {
    let input = draft_input(&state.form.draft);
    apply_to_selected(state, input);
}

fn selected_options(state: &AppState) -> Option<Vec<String>> {
    match state.selected_field().map(|field| field.kind()) {
        Some(FieldKind::Select { options }) => Some(options.clone()),
        _ => None,
    }
}

fn leave_edit(state: &mut AppState) {
    state.form.draft.clear();
    state.input_mode = InputMode::Normal;
}

fn close_dropdown(state: &mut AppState) {
    state.form.close_dropdown();
    state.input_mode = InputMode::Normal;
}

/// Handles field form actions.
/// Returns Some(effects) if action was handled, None otherwise.
pub fn reduce_form(state: &mut AppState, action: &Action, _now: Instant) -> Option<Vec<Effect>> {
    match action {
        Action::SelectNextField => {
            let count = state.schema().len();
            state.form.select_next(count);
            Some(vec![])
        }
        Action::SelectPreviousField => {
            state.form.select_previous();
            Some(vec![])
        }
        Action::SelectFirstField => {
            state.form.select_first();
            Some(vec![])
        }
        Action::SelectLastField => {
            let count = state.schema().len();
            state.form.select_last(count);
            Some(vec![])
        }
        Action::SelectNextSection => {
            let starts = state.schema().section_starts();
            state.form.select_next_section(&starts);
            Some(vec![])
        }
        Action::SelectPreviousSection => {
            let starts = state.schema().section_starts();
            state.form.select_previous_section(&starts);
            Some(vec![])
        }

        Action::ActivateField => {
            let Some(field) = state.selected_field() else {
                return Some(vec![]);
            };
            let activation = activate(field.kind(), state.selected_value());
            match activation {
                Activation::Apply(input) => apply_to_selected(state, input),
                Activation::OpenDropdown { selected_index } => {
                    state.form.open_dropdown(selected_index);
                    state.input_mode = InputMode::Dropdown;
                }
                Activation::EditDraft(draft) => {
                    state.form.draft = draft;
                    state.input_mode = InputMode::EditField;
                }
            }
            Some(vec![])
        }
        Action::ClearField => {
            apply_to_selected(state, FieldInput::Unset);
            Some(vec![])
        }

        Action::FieldInput(c) => {
            state.form.draft.insert_char(*c);
            apply_draft(state);
            Some(vec![])
        }
        Action::FieldBackspace => {
            if state.form.draft.backspace() {
                apply_draft(state);
            }
            Some(vec![])
        }
        Action::FieldDelete => {
            if state.form.draft.delete() {
                apply_draft(state);
            }
            Some(vec![])
        }
        Action::FieldClearDraft => {
            state.form.draft.clear();
            apply_draft(state);
            Some(vec![])
        }
        Action::FieldMoveCursor(movement) => {
            state.form.draft.move_cursor(*movement);
            Some(vec![])
        }
        Action::ExitFieldEdit => {
            leave_edit(state);
            Some(vec![])
        }
        Action::Paste(text) if state.input_mode == InputMode::EditField => {
            state.form.draft.insert_str(text);
            apply_draft(state);
            Some(vec![])
        }

        Action::DropdownNext => {
            if let Some(options) = selected_options(state) {
                let last = select_choices(&options).len() - 1;
                let dropdown = &mut state.form.dropdown;
                dropdown.selected_index = (dropdown.selected_index + 1).min(last);
            }
            Some(vec![])
        }
        Action::DropdownPrevious => {
            let dropdown = &mut state.form.dropdown;
            dropdown.selected_index = dropdown.selected_index.saturating_sub(1);
            Some(vec![])
        }
        Action::ConfirmDropdown => {
            let input = selected_options(state)
                .and_then(|options| choice_input(&options, state.form.dropdown.selected_index));
            if let Some(input) = input {
                apply_to_selected(state, input);
            }
            close_dropdown(state);
            Some(vec![])
        }
        Action::CloseDropdown => {
            close_dropdown(state);
            Some(vec![])
        }

        _ => None,
    }
}
