use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use dbtune_app::text_input::EditBuffer;

use crate::theme::Theme;

/// Draws the visible window of `buffer` with a block cursor, scrolled so the
/// cursor stays inside `width` columns.
pub fn input_line(buffer: &EditBuffer, width: usize) -> Line<'static> {
    let offset = buffer.scroll_offset(width);
    let chars: Vec<char> = buffer.as_str().chars().skip(offset).collect();
    let cursor_col = buffer.cursor() - offset;

    let text_style = Style::default().fg(Theme::TEXT_PRIMARY);
    let cursor_style = Style::default()
        .bg(Theme::CURSOR_BG)
        .fg(Theme::CURSOR_FG)
        .add_modifier(Modifier::BOLD);

    if cursor_col >= chars.len() {
        let text: String = chars.iter().collect();
        return Line::from(vec![
            Span::styled(text, text_style),
            Span::styled(" ", cursor_style),
        ]);
    }

    let before: String = chars[..cursor_col].iter().collect();
    let at: String = chars[cursor_col].to_string();
    let after: String = chars[cursor_col + 1..].iter().collect();

    Line::from(vec![
        Span::styled(before, text_style),
        Span::styled(at, cursor_style),
        Span::styled(after, text_style),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use dbtune_app::action::CursorMove;

    fn rendered(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn cursor_at_end_adds_trailing_cell() {
        let buffer = EditBuffer::with_text("abc");

        let line = input_line(&buffer, 20);

        assert_eq!(rendered(&line), "abc ");
    }

    #[test]
    fn cursor_in_middle_highlights_character() {
        let mut buffer = EditBuffer::with_text("abc");
        buffer.move_cursor(CursorMove::Left);

        let line = input_line(&buffer, 20);

        assert_eq!(line.spans[1].content, "c");
        assert_eq!(line.spans[1].style.bg, Some(Theme::CURSOR_BG));
    }

    #[test]
    fn long_text_scrolls_to_keep_cursor_visible() {
        let buffer = EditBuffer::with_text("0123456789");

        let line = input_line(&buffer, 4);

        assert_eq!(rendered(&line), "789 ");
    }
}
