use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};

use dbtune_app::field_view::{
    Affordance, UNSET_CHOICE_LABEL, affordance, display_label, kind_badge, limits_text,
    placeholder,
};
use dbtune_app::input_mode::InputMode;
use dbtune_app::state::AppState;
use dbtune_domain::{ConfigValue, Field};

use super::atoms::{input_line, panel_block};
use crate::theme::Theme;

/// Detail view of the selected parameter: label, type, input, description
/// and the advisory range.
pub struct ConfigField;

impl ConfigField {
    pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
        let Some(field) = state.selected_field() else {
            let block = panel_block("Parameter", false);
            frame.render_widget(
                Paragraph::new(Span::styled(
                    "No parameters for this engine",
                    Style::default().fg(Theme::TEXT_MUTED),
                ))
                .block(block),
                area,
            );
            return;
        };

        let editing = matches!(state.input_mode, InputMode::EditField | InputMode::Dropdown);
        let block = panel_block(&display_label(&field.name), editing);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let lines = Self::build_lines(field, state, inner.width as usize);
        frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);
    }

    fn build_lines(field: &Field, state: &AppState, width: usize) -> Vec<Line<'static>> {
        let mut lines = vec![
            Line::from(vec![
                Span::styled(
                    field.name.clone(),
                    Style::default()
                        .fg(Theme::TEXT_PRIMARY)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw("  "),
                Span::styled(
                    format!("[{}]", kind_badge(field.kind())),
                    Style::default().fg(Theme::KIND_BADGE),
                ),
            ]),
            Line::from(""),
            Self::affordance_line(field, state, width),
            Line::from(""),
        ];

        for text in field.descriptor.description.lines() {
            lines.push(Line::from(Span::styled(
                text.to_string(),
                Style::default().fg(Theme::TEXT_SECONDARY),
            )));
        }

        if let Some(range) = limits_text(field.kind()) {
            lines.push(Line::from(""));
            lines.push(Line::from(vec![
                Span::styled("Valid range: ", Style::default().fg(Theme::TEXT_MUTED)),
                Span::styled(range, Style::default().fg(Theme::TEXT_ACCENT)),
            ]));
        }

        lines
    }

    fn affordance_line(field: &Field, state: &AppState, width: usize) -> Line<'static> {
        let value = state.form.config.get(&field.name);
        let muted = Style::default().fg(Theme::TEXT_MUTED);
        let set = Style::default().fg(Theme::VALUE_SET);

        match affordance(field.kind()) {
            Affordance::Toggle => {
                let on = value.and_then(ConfigValue::as_bool).unwrap_or(false);
                let (mark, style) = if on { ("[x]", set) } else { ("[ ]", muted) };
                let state_text = match value {
                    Some(_) if on => "Enabled",
                    Some(_) => "Disabled",
                    None => "Not set",
                };
                Line::from(vec![
                    Span::styled(mark, style),
                    Span::raw(" "),
                    Span::styled(state_text, style),
                ])
            }
            Affordance::Dropdown => match value {
                Some(value) => Line::from(vec![
                    Span::styled("▾ ", muted),
                    Span::styled(value.to_string(), set),
                ]),
                None => Line::from(vec![
                    Span::styled("▾ ", muted),
                    Span::styled(UNSET_CHOICE_LABEL, muted),
                ]),
            },
            Affordance::NumberBox | Affordance::TextBox => {
                if state.input_mode == InputMode::EditField {
                    let mut line = input_line(&state.form.draft, width.saturating_sub(2));
                    line.spans.insert(0, Span::styled("> ", muted));
                    return line;
                }
                match value {
                    Some(value) => Line::from(Span::styled(value.to_string(), set)),
                    None => Line::from(Span::styled(
                        placeholder(&field.descriptor).unwrap_or_else(|| "Not set".to_string()),
                        muted,
                    )),
                }
            }
        }
    }
}
