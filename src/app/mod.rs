pub mod action;
pub mod command_panel_state;
pub mod command_synthesis;
pub mod effect;
pub mod effect_runner;
pub mod field_editor;
pub mod field_view;
pub mod form_state;
pub mod input_mode;
pub mod keybindings;
pub mod ports;
pub mod reducer;
pub mod reducers;
pub mod render_schedule;
pub mod schema_loading;
pub mod settings;
pub mod state;
pub mod text_input;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
