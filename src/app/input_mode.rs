#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    Normal,
    /// Typing into a text or number field.
    EditField,
    DatabaseId,
    Dropdown,
    Help,
}

impl InputMode {
    pub fn has_text_cursor(self) -> bool {
        matches!(self, InputMode::EditField | InputMode::DatabaseId)
    }
}
