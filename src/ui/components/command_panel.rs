use std::time::Instant;

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};

use dbtune_app::command_panel_state::CommandTarget;
use dbtune_app::command_synthesis::CommandPair;
use dbtune_app::keybindings::{GLOBAL_KEYS, idx};
use dbtune_app::state::AppState;

use super::atoms::{copy_chip, panel_block};
use crate::theme::Theme;

pub struct CommandPanel;

impl CommandPanel {
    pub fn render(
        frame: &mut Frame,
        area: Rect,
        state: &AppState,
        commands: &CommandPair,
        now: Instant,
    ) {
        let block = panel_block("Commands", false);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let mut lines = Self::command_lines(state, commands, CommandTarget::Http, now);
        if state.display.show_cli_command {
            lines.push(Line::from(""));
            lines.extend(Self::command_lines(state, commands, CommandTarget::Cli, now));
        }

        frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);
    }

    fn command_lines(
        state: &AppState,
        commands: &CommandPair,
        target: CommandTarget,
        now: Instant,
    ) -> Vec<Line<'static>> {
        let key = match target {
            CommandTarget::Http => GLOBAL_KEYS[idx::global::COPY_HTTP].key_short,
            CommandTarget::Cli => GLOBAL_KEYS[idx::global::COPY_CLI].key_short,
        };
        let copied = state.form.copy_feedback.is_copied_visible_at(target, now);

        let mut lines = vec![Line::from(vec![
            Span::styled(
                format!("Generated {} command", target.title()),
                Style::default()
                    .fg(Theme::SECTION_HEADING)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            copy_chip(key, copied),
        ])];

        lines.extend(commands.get(target).lines().map(|text| {
            Line::from(Span::styled(
                text.to_string(),
                Style::default().fg(Theme::COMMAND_TEXT),
            ))
        }));

        lines
    }
}
