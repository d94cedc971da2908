use std::time::Instant;

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};

use dbtune_app::input_mode::InputMode;
use dbtune_app::state::AppState;

use super::command_panel::CommandPanel;
use super::config_field::ConfigField;
use super::database_id::DatabaseIdBox;
use super::dropdown::Dropdown;
use super::field_list::FieldList;
use super::footer::Footer;
use super::header::Header;
use super::help_overlay::HelpOverlay;
use super::tabs::Tabs;

pub struct MainLayout;

impl MainLayout {
    pub fn render(frame: &mut Frame, state: &AppState, now: Instant) {
        let area = frame.area();

        let [header_area, tabs_area, id_area, main_area, footer_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Min(8),
            Constraint::Length(1),
        ])
        .areas(area);

        Header::render(frame, header_area, state);
        Tabs::render(frame, tabs_area, state);
        DatabaseIdBox::render(frame, id_area, state);

        let [list_area, detail_column] =
            Layout::horizontal([Constraint::Percentage(38), Constraint::Percentage(62)])
                .areas(main_area);

        FieldList::render(frame, list_area, state);

        let commands = state.commands();
        if commands.is_empty() {
            ConfigField::render(frame, detail_column, state);
        } else {
            let [detail_area, command_area] =
                Layout::vertical([Constraint::Percentage(40), Constraint::Percentage(60)])
                    .areas(detail_column);
            ConfigField::render(frame, detail_area, state);
            CommandPanel::render(frame, command_area, state, &commands, now);
        }

        Footer::render(frame, footer_area, state);

        // Render overlays (on top of everything else)
        match state.input_mode {
            InputMode::Dropdown => Dropdown::render(frame, state),
            InputMode::Help => HelpOverlay::render(frame, state),
            _ => {}
        }
    }
}
