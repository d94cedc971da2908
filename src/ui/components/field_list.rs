use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{List, ListItem, ListState};
use unicode_width::UnicodeWidthStr;

use dbtune_app::field_view::display_label;
use dbtune_app::input_mode::InputMode;
use dbtune_app::state::AppState;
use dbtune_domain::{EngineSchema, Field};

use super::atoms::panel_block;
use super::text_utils::truncate_to_width;
use crate::theme::Theme;

/// Every parameter of the active engine, grouped under section headings when
/// the schema has them.
pub struct FieldList;

impl FieldList {
    pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
        let schema = state.schema();
        let title = format!("{} parameters", schema.len());
        let block = panel_block(&title, state.input_mode == InputMode::Normal);
        let inner = block.inner(area);

        let (items, selected_row) = Self::build_items(schema, state, inner.width as usize);

        let list = List::new(items)
            .block(block)
            .highlight_style(
                Style::default()
                    .bg(Theme::SELECTED_BG)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("▸ ");

        let mut list_state = ListState::default();
        list_state.select(selected_row);
        frame.render_stateful_widget(list, area, &mut list_state);
    }

    /// Returns the rows plus the row of the selected field.
    fn build_items<'a>(
        schema: &'a EngineSchema,
        state: &AppState,
        width: usize,
    ) -> (Vec<ListItem<'a>>, Option<usize>) {
        let mut items = Vec::new();
        let mut selected_row = None;
        let mut field_index = 0;

        for section in schema.sections() {
            if let Some(title) = &section.title {
                items.push(ListItem::new(Line::from(Span::styled(
                    title.clone(),
                    Style::default()
                        .fg(Theme::SECTION_HEADING)
                        .add_modifier(Modifier::BOLD),
                ))));
            }
            for field in &section.fields {
                if field_index == state.form.selected {
                    selected_row = Some(items.len());
                }
                items.push(ListItem::new(Self::field_line(field, state, width)));
                field_index += 1;
            }
        }

        (items, selected_row)
    }

    fn field_line(field: &Field, state: &AppState, width: usize) -> Line<'static> {
        // highlight symbol takes two columns
        let available = width.saturating_sub(2);
        let label = display_label(&field.name);

        match state.form.config.get(&field.name) {
            Some(value) => {
                let value = format!(" = {}", value);
                let label_width = available.saturating_sub(value.width().min(available / 2));
                let label = truncate_to_width(&label, label_width);
                let value = truncate_to_width(&value, available.saturating_sub(label.width()));
                Line::from(vec![
                    Span::styled(label, Style::default().fg(Theme::TEXT_PRIMARY)),
                    Span::styled(value, Style::default().fg(Theme::VALUE_SET)),
                ])
            }
            None => Line::from(Span::styled(
                truncate_to_width(&label, available),
                Style::default().fg(Theme::TEXT_SECONDARY),
            )),
        }
    }
}
