use ratatui::style::{Modifier, Style};
use ratatui::text::Span;

use crate::theme::Theme;

/// Key with a highlighted background, e.g. ` Esc ` in the help overlay.
pub fn key_chip(key: &str) -> Span<'static> {
    Span::styled(
        format!(" {} ", key),
        Style::default()
            .bg(Theme::KEY_CHIP_BG)
            .fg(Theme::KEY_CHIP_FG)
            .add_modifier(Modifier::BOLD),
    )
}

/// Key in accent color without background, e.g. footer hints.
pub fn key_text(key: &str) -> Span<'static> {
    Span::styled(key.to_string(), Style::default().fg(Theme::TEXT_ACCENT))
}

/// Copy button label for one command: `Copied!` while the acknowledgement is
/// showing, `Copy` otherwise.
pub fn copy_chip(key: &str, copied: bool) -> Span<'static> {
    if copied {
        Span::styled(
            " Copied! ".to_string(),
            Style::default()
                .bg(Theme::STATUS_SUCCESS)
                .fg(Theme::CURSOR_FG)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        key_chip(&format!("{} Copy", key))
    }
}
