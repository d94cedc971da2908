use ratatui::Frame;
use ratatui::layout::{Constraint, Flex, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders};

use crate::theme::Theme;

/// Creates a centered rectangle within the given area.
pub fn centered_rect(area: Rect, width: Constraint, height: Constraint) -> Rect {
    let [area] = Layout::horizontal([width]).flex(Flex::Center).areas(area);
    let [area] = Layout::vertical([height]).flex(Flex::Center).areas(area);
    area
}

/// Dims everything already drawn so the overlay stands out.
pub fn render_scrim(frame: &mut Frame) {
    let area = frame.area();
    frame
        .buffer_mut()
        .set_style(area, Style::default().add_modifier(Modifier::DIM));
}

/// Modal block with a title on the top border and a key hint on the bottom.
pub fn modal_block_with_hint(title: String, hint: String) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Theme::FOCUS_BORDER))
        .title(Line::from(Span::styled(
            title,
            Style::default()
                .fg(Theme::MODAL_TITLE)
                .add_modifier(Modifier::BOLD),
        )))
        .title_bottom(Line::from(Span::styled(
            hint,
            Style::default().fg(Theme::MODAL_HINT),
        )))
        .style(Style::default().bg(Theme::MODAL_BG))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centered_rect_is_centered() {
        let area = Rect::new(0, 0, 80, 24);

        let rect = centered_rect(area, Constraint::Length(20), Constraint::Length(10));

        assert_eq!(rect, Rect::new(30, 7, 20, 10));
    }
}
