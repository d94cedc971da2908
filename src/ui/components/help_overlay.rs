use ratatui::Frame;
use ratatui::layout::Constraint;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};

use dbtune_app::keybindings::{
    DROPDOWN_KEYS, FIELD_KEYS, GLOBAL_KEYS, HELP_KEYS, HELP_TOTAL_LINES, KeyBinding,
    TEXT_ENTRY_KEYS, idx,
};
use dbtune_app::state::AppState;

use super::molecules::{chip_hint_line, render_modal};
use crate::theme::Theme;

pub const API_DOCS_URL: &str =
    "https://docs.digitalocean.com/reference/api/digitalocean/#tag/Databases/operation/databases_patch_config";

/// Key lines plus a blank line and the API docs link.
const CONTENT_LINES: u16 = HELP_TOTAL_LINES as u16 + 2;

pub struct HelpOverlay;

impl HelpOverlay {
    pub fn render(frame: &mut Frame, _state: &AppState) {
        let hint = format!(
            " {} {}  {} {} ",
            HELP_KEYS[idx::help::CLOSE].key_short,
            HELP_KEYS[idx::help::CLOSE].desc_short,
            HELP_KEYS[idx::help::QUIT].key_short,
            HELP_KEYS[idx::help::QUIT].desc_short,
        );
        let (_, inner) = render_modal(
            frame,
            Constraint::Percentage(70),
            Constraint::Length(CONTENT_LINES + 2),
            " Help ",
            &hint,
        );

        let mut lines = Vec::with_capacity(CONTENT_LINES as usize);
        Self::push_section(&mut lines, "Global", GLOBAL_KEYS);
        lines.push(Line::from(""));
        Self::push_section(&mut lines, "Fields", FIELD_KEYS);
        lines.push(Line::from(""));
        Self::push_section(&mut lines, "Text Input", TEXT_ENTRY_KEYS);
        lines.push(Line::from(""));
        Self::push_section(&mut lines, "Dropdown", DROPDOWN_KEYS);
        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::styled("  API docs: ", Style::default().fg(Theme::TEXT_MUTED)),
            Span::styled(API_DOCS_URL, Style::default().fg(Theme::TEXT_ACCENT)),
        ]));

        let help = Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .style(Style::default().bg(Theme::MODAL_BG));

        frame.render_widget(help, inner);
    }

    fn push_section(lines: &mut Vec<Line<'static>>, title: &str, keys: &[KeyBinding]) {
        lines.push(Line::from(Span::styled(
            title.to_string(),
            Style::default()
                .fg(Theme::SECTION_HEADING)
                .add_modifier(Modifier::BOLD),
        )));
        lines.extend(keys.iter().map(|kb| chip_hint_line(kb.key, kb.description)));
    }
}
