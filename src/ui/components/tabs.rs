use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::Tabs as RatatuiTabs;

use dbtune_app::state::AppState;
use dbtune_domain::Engine;

use crate::theme::Theme;

pub struct Tabs;

impl Tabs {
    pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
        let titles: Vec<String> = Engine::all_variants()
            .iter()
            .enumerate()
            .map(|(i, engine)| format!("{} {}", i + 1, engine.display_name()))
            .collect();

        let tabs = RatatuiTabs::new(titles)
            .select(state.engine.index())
            .style(Style::default().fg(Theme::TEXT_SECONDARY))
            .highlight_style(
                Style::default()
                    .fg(Theme::TAB_ACTIVE)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            )
            .divider(" | ");

        frame.render_widget(tabs, area);
    }
}
