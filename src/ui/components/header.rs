use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use dbtune_app::state::AppState;

use crate::theme::Theme;

pub const TITLE: &str = "Configure Advanced Settings for DigitalOcean Managed Databases";

pub struct Header;

impl Header {
    pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
        let bar = Style::default().bg(Theme::HEADER_BG).fg(Theme::HEADER_FG);
        let set_count = state.form.config.len();
        // The docs URL itself is listed in the help overlay
        let status = format!(
            "{} | {} set | ? API docs ",
            state.engine.display_name(),
            set_count
        );

        let [title_area, status_area] = Layout::horizontal([
            Constraint::Min(0),
            Constraint::Length(status.chars().count() as u16),
        ])
        .areas(area);

        let title = Line::from(Span::styled(
            format!(" {}", TITLE),
            bar.add_modifier(Modifier::BOLD),
        ));
        frame.render_widget(Paragraph::new(title).style(bar), title_area);
        frame.render_widget(Paragraph::new(status).style(bar), status_area);
    }
}
