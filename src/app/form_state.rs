use dbtune_domain::ConfigState;

use crate::command_panel_state::CommandPanelState;
use crate::text_input::EditBuffer;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DropdownState {
    pub is_open: bool,
    /// Index into `select_choices`, 0 being the unset choice.
    pub selected_index: usize,
}

/// Everything owned by the form of the active engine. Replaced wholesale on
/// engine switch so nothing carries over.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormState {
    pub config: ConfigState,
    /// Index into the schema's flat field order.
    pub selected: usize,
    pub draft: EditBuffer,
    pub dropdown: DropdownState,
    pub copy_feedback: CommandPanelState,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select_next(&mut self, field_count: usize) {
        if field_count > 0 {
            self.selected = (self.selected + 1).min(field_count - 1);
        }
    }

    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    pub fn select_last(&mut self, field_count: usize) {
        self.selected = field_count.saturating_sub(1);
    }

    /// Moves to the start of the first section after the current one.
    /// `section_starts` must be ascending.
    pub fn select_next_section(&mut self, section_starts: &[usize]) {
        if let Some(&start) = section_starts.iter().find(|&&start| start > self.selected) {
            self.selected = start;
        }
    }

    /// Moves to the start of the section before the current one.
    pub fn select_previous_section(&mut self, section_starts: &[usize]) {
        let current = section_starts
            .iter()
            .rposition(|&start| start <= self.selected);
        if let Some(previous) = current.and_then(|i| i.checked_sub(1)) {
            self.selected = section_starts[previous];
        }
    }

    pub fn open_dropdown(&mut self, selected_index: usize) {
        self.dropdown = DropdownState {
            is_open: true,
            selected_index,
        };
    }

    pub fn close_dropdown(&mut self) {
        self.dropdown = DropdownState::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn selection_is_clamped() {
        let mut form = FormState::new();

        form.select_previous();
        assert_eq!(form.selected, 0);

        form.select_next(2);
        form.select_next(2);
        assert_eq!(form.selected, 1);

        form.select_first();
        assert_eq!(form.selected, 0);

        form.select_last(5);
        assert_eq!(form.selected, 4);
    }

    #[rstest]
    #[case(0, 3)]
    #[case(2, 3)]
    #[case(3, 7)]
    #[case(8, 8)]
    fn next_section_stops_at_last(#[case] from: usize, #[case] expected: usize) {
        let mut form = FormState {
            selected: from,
            ..FormState::new()
        };

        form.select_next_section(&[0, 3, 7]);

        assert_eq!(form.selected, expected);
    }

    #[rstest]
    #[case(8, 3)]
    #[case(7, 3)]
    #[case(4, 0)]
    #[case(2, 2)]
    fn previous_section_stops_at_first(#[case] from: usize, #[case] expected: usize) {
        let mut form = FormState {
            selected: from,
            ..FormState::new()
        };

        form.select_previous_section(&[0, 3, 7]);

        assert_eq!(form.selected, expected);
    }

    #[test]
    fn section_jumps_on_flat_schema_are_noops() {
        let mut form = FormState {
            selected: 2,
            ..FormState::new()
        };

        form.select_next_section(&[0]);
        form.select_previous_section(&[0]);

        assert_eq!(form.selected, 2);
    }

    #[test]
    fn close_dropdown_resets_index() {
        let mut form = FormState::new();
        form.open_dropdown(3);

        form.close_dropdown();

        assert_eq!(form.dropdown, DropdownState::default());
    }
}
