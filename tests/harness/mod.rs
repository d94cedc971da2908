use std::sync::{Arc, OnceLock};
use std::time::Instant;

use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;

use dbtune::app::action::Action;
use dbtune::app::reducer::reduce;
use dbtune::app::settings::Settings;
use dbtune::app::state::AppState;
use dbtune::app::test_support::sample_registry;
use dbtune::ui::components::layout::MainLayout;

pub const TEST_WIDTH: u16 = 120;
pub const TEST_HEIGHT: u16 = 40;

/// One instant shared by every render in the test binary.
pub fn fixed_instant() -> Instant {
    static START: OnceLock<Instant> = OnceLock::new();
    *START.get_or_init(Instant::now)
}

pub fn create_test_state() -> AppState {
    AppState::new(Arc::new(sample_registry()), &Settings::default())
}

pub fn create_test_terminal() -> Terminal<TestBackend> {
    create_terminal(TEST_WIDTH, TEST_HEIGHT)
}

pub fn create_terminal(width: u16, height: u16) -> Terminal<TestBackend> {
    Terminal::new(TestBackend::new(width, height)).unwrap()
}

/// Feeds actions through the reducer the way the event loop does.
pub fn dispatch(state: &mut AppState, actions: impl IntoIterator<Item = Action>, now: Instant) {
    for action in actions {
        let _ = reduce(state, action, now);
    }
}

pub fn type_text(text: &str, action: fn(char) -> Action) -> Vec<Action> {
    text.chars().map(action).collect()
}

pub fn render_to_string(
    terminal: &mut Terminal<TestBackend>,
    state: &AppState,
    now: Instant,
) -> String {
    terminal
        .draw(|frame| MainLayout::render(frame, state, now))
        .unwrap();

    buffer_to_string(terminal.backend().buffer())
}

fn buffer_to_string(buffer: &Buffer) -> String {
    let mut result = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            let cell = buffer.cell((x, y)).unwrap();
            result.push_str(cell.symbol());
        }
        if y < buffer.area.height - 1 {
            result.push('\n');
        }
    }
    result
}

/// The screen as text, one line per non-blank row: border glyphs are dropped
/// and runs of blanks collapse to one space. Row order and panel contents
/// survive; exact column splits do not.
pub fn screen_text(output: &str) -> String {
    output
        .lines()
        .map(|row| {
            let row: String = row
                .chars()
                .map(|c| if is_box_drawing(c) { ' ' } else { c })
                .collect();
            row.split_whitespace().collect::<Vec<_>>().join(" ")
        })
        .filter(|row| !row.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

fn is_box_drawing(c: char) -> bool {
    ('\u{2500}'..='\u{257F}').contains(&c)
}

/// Index of the first screen row containing `needle`.
pub fn row_of(output: &str, needle: &str) -> Option<usize> {
    output.lines().position(|row| row.contains(needle))
}
