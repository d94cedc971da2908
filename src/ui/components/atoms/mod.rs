mod input_line;
mod key_chip;
mod panel_border;

pub use input_line::input_line;
pub use key_chip::{copy_chip, key_chip, key_text};
pub use panel_border::panel_block;
