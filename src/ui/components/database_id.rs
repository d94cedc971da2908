use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use dbtune_app::input_mode::InputMode;
use dbtune_app::state::AppState;

use super::atoms::{input_line, panel_block};
use crate::theme::Theme;

pub const PLACEHOLDER: &str =
    "Enter your database ID. Get your database ID using: doctl databases list";

pub struct DatabaseIdBox;

impl DatabaseIdBox {
    pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
        let editing = state.input_mode == InputMode::DatabaseId;
        let block = panel_block("Database ID", editing);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let line = if editing {
            input_line(&state.database_id, inner.width as usize)
        } else if state.database_id.is_empty() {
            Line::from(Span::styled(
                PLACEHOLDER,
                Style::default().fg(Theme::TEXT_MUTED),
            ))
        } else {
            Line::from(Span::styled(
                state.database_id.as_str().to_string(),
                Style::default().fg(Theme::TEXT_PRIMARY),
            ))
        };

        frame.render_widget(Paragraph::new(line), inner);
    }
}
