use ratatui::Frame;
use ratatui::layout::Constraint;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{List, ListItem, ListState};
use unicode_width::UnicodeWidthStr;

use dbtune_app::field_view::{SelectChoice, display_label, select_choices};
use dbtune_app::keybindings::{DROPDOWN_KEYS, idx};
use dbtune_app::state::AppState;
use dbtune_domain::FieldKind;

use super::molecules::render_modal;
use crate::theme::Theme;

const MIN_WIDTH: u16 = 30;

pub struct Dropdown;

impl Dropdown {
    pub fn render(frame: &mut Frame, state: &AppState) {
        let Some(field) = state.selected_field() else {
            return;
        };
        let FieldKind::Select { options } = field.kind() else {
            return;
        };
        let choices = select_choices(options);

        let title = format!(" {} ", display_label(&field.name));
        let widest = choices
            .iter()
            .map(|c| c.label().width())
            .max()
            .unwrap_or(0) as u16;
        // Room for borders around the title and the highlight symbol
        let width = (widest + 6).max(title.width() as u16 + 2).max(MIN_WIDTH);
        let height = choices.len() as u16 + 2;

        let hint = format!(
            " {} {}  {} {} ",
            DROPDOWN_KEYS[idx::dropdown::CONFIRM].key_short,
            DROPDOWN_KEYS[idx::dropdown::CONFIRM].desc_short,
            DROPDOWN_KEYS[idx::dropdown::CANCEL].key_short,
            DROPDOWN_KEYS[idx::dropdown::CANCEL].desc_short,
        );
        let (_, inner) = render_modal(
            frame,
            Constraint::Length(width),
            Constraint::Length(height),
            &title,
            &hint,
        );

        let items: Vec<ListItem> = choices
            .iter()
            .map(|choice| {
                let style = match choice {
                    SelectChoice::Unset => Style::default().fg(Theme::TEXT_MUTED),
                    SelectChoice::Option(_) => Style::default().fg(Theme::TEXT_PRIMARY),
                };
                ListItem::new(Line::from(Span::styled(choice.label().to_string(), style)))
            })
            .collect();

        let list = List::new(items)
            .highlight_style(
                Style::default()
                    .bg(Theme::SELECTED_BG)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("▸ ");

        let mut list_state = ListState::default();
        list_state.select(Some(state.form.dropdown.selected_index));
        frame.render_stateful_widget(list, inner, &mut list_state);
    }
}
