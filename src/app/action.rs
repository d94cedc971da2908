use dbtune_domain::Engine;

use crate::command_panel_state::CommandTarget;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorMove {
    Left,
    Right,
    Home,
    End,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    None,
    Quit,
    Render,
    /// Redraw at the new size.
    Resize,

    // Overlays
    OpenHelp,
    CloseHelp,

    // Engine tabs
    SwitchEngine(Engine),
    NextEngine,
    PreviousEngine,

    // Database ID input
    EnterDatabaseIdInput,
    ExitDatabaseIdInput,
    DatabaseIdInput(char),
    DatabaseIdBackspace,
    DatabaseIdDelete,
    DatabaseIdClear,
    DatabaseIdMoveCursor(CursorMove),

    // Field navigation
    SelectNextField,
    SelectPreviousField,
    SelectFirstField,
    SelectLastField,
    /// First field of the next / previous section.
    SelectNextSection,
    SelectPreviousSection,

    /// Context dependent: edit, open dropdown or toggle.
    ActivateField,
    ClearField,

    // Text/number field editing
    FieldInput(char),
    FieldBackspace,
    FieldDelete,
    FieldClearDraft,
    FieldMoveCursor(CursorMove),
    ExitFieldEdit,

    // Select dropdown
    DropdownNext,
    DropdownPrevious,
    ConfirmDropdown,
    CloseDropdown,

    /// Bracketed paste into whichever input is active.
    Paste(String),

    // Generated commands
    CopyCommand(CommandTarget),
    /// `generation` identifies the form the copy was issued from.
    CommandCopied { target: CommandTarget, generation: u64 },
    CommandCopyFailed { target: CommandTarget, reason: String },
    ToggleCliCommand,
}

impl Action {
    pub fn is_none(&self) -> bool {
        matches!(self, Action::None)
    }
}
