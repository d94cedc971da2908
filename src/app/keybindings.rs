//! Centralized keybinding definitions.
//! Single source of truth for key/description used by Footer and Help.

#[derive(Clone)]
pub struct KeyBinding {
    /// Short key for Footer (e.g., "^U", "j/k")
    pub key_short: &'static str,
    /// Display key for Help (e.g., "Ctrl+U", "j / ↓")
    pub key: &'static str,
    /// Short description for Footer (e.g., "Quit", "Field")
    pub desc_short: &'static str,
    /// Full description for Help (e.g., "Quit application")
    pub description: &'static str,
}

impl KeyBinding {
    /// Returns (key_short, desc_short) tuple for Footer display
    pub const fn as_hint(&self) -> (&'static str, &'static str) {
        (self.key_short, self.desc_short)
    }
}

// =============================================================================
// Index Constants for Footer Lookup
// =============================================================================

pub mod idx {
    pub mod global {
        pub const QUIT: usize = 0;
        pub const HELP: usize = 1;
        pub const ENGINE_TABS: usize = 2;
        pub const ENGINE_NUMBER: usize = 3;
        pub const DATABASE_ID: usize = 4;
        pub const COPY_HTTP: usize = 5;
        pub const COPY_CLI: usize = 6;
        pub const TOGGLE_CLI: usize = 7;
    }

    pub mod field {
        pub const NAVIGATE: usize = 0;
        pub const TOP_BOTTOM: usize = 1;
        pub const EDIT: usize = 2;
        pub const UNSET: usize = 3;
        pub const SECTION: usize = 4;
    }

    /// Shared by the field draft and the database ID box.
    pub mod text_entry {
        pub const DONE: usize = 0;
        pub const CLEAR: usize = 1;
        pub const MOVE: usize = 2;
    }

    pub mod dropdown {
        pub const CONFIRM: usize = 0;
        pub const NAVIGATE: usize = 1;
        pub const CANCEL: usize = 2;
    }

    pub mod help {
        pub const CLOSE: usize = 0;
        pub const QUIT: usize = 1;
    }
}

// =============================================================================
// Global Keys (Normal mode)
// =============================================================================

pub const GLOBAL_KEYS: &[KeyBinding] = &[
    // idx 0: QUIT
    KeyBinding {
        key_short: "q",
        key: "q / Ctrl+C",
        desc_short: "Quit",
        description: "Quit application",
    },
    // idx 1: HELP
    KeyBinding {
        key_short: "?",
        key: "?",
        desc_short: "Help",
        description: "Toggle help",
    },
    // idx 2: ENGINE_TABS
    KeyBinding {
        key_short: "Tab/⇧Tab",
        key: "Tab / Shift+Tab",
        desc_short: "Engine",
        description: "Next / previous engine",
    },
    // idx 3: ENGINE_NUMBER
    KeyBinding {
        key_short: "1-6",
        key: "1-6",
        desc_short: "Engine",
        description: "Jump to engine tab",
    },
    // idx 4: DATABASE_ID
    KeyBinding {
        key_short: "i",
        key: "i",
        desc_short: "DB ID",
        description: "Edit database ID",
    },
    // idx 5: COPY_HTTP
    KeyBinding {
        key_short: "y",
        key: "y",
        desc_short: "Copy curl",
        description: "Copy curl command",
    },
    // idx 6: COPY_CLI
    KeyBinding {
        key_short: "Y",
        key: "Y",
        desc_short: "Copy doctl",
        description: "Copy doctl command",
    },
    // idx 7: TOGGLE_CLI
    KeyBinding {
        key_short: "o",
        key: "o",
        desc_short: "doctl",
        description: "Show / hide doctl command",
    },
];

// =============================================================================
// Field List (Normal mode)
// =============================================================================

pub const FIELD_KEYS: &[KeyBinding] = &[
    // idx 0: NAVIGATE
    KeyBinding {
        key_short: "j/k / ↑↓",
        key: "j / k / ↑ / ↓",
        desc_short: "Field",
        description: "Next / previous field",
    },
    // idx 1: TOP_BOTTOM
    KeyBinding {
        key_short: "g/G",
        key: "g / G / Home / End",
        desc_short: "Top/Bottom",
        description: "First / last field",
    },
    // idx 2: EDIT
    KeyBinding {
        key_short: "Enter",
        key: "Enter / Space",
        desc_short: "Edit",
        description: "Edit, toggle or pick a value",
    },
    // idx 3: UNSET
    KeyBinding {
        key_short: "x",
        key: "x / Delete",
        desc_short: "Unset",
        description: "Remove the field from the config",
    },
    // idx 4: SECTION
    KeyBinding {
        key_short: "[/]",
        key: "[ / ]",
        desc_short: "Section",
        description: "Previous / next section",
    },
];

// =============================================================================
// Text Entry (field draft, database ID)
// =============================================================================

pub const TEXT_ENTRY_KEYS: &[KeyBinding] = &[
    // idx 0: DONE
    KeyBinding {
        key_short: "Enter/Esc",
        key: "Enter / Esc",
        desc_short: "Done",
        description: "Finish editing",
    },
    // idx 1: CLEAR
    KeyBinding {
        key_short: "^U",
        key: "Ctrl+U",
        desc_short: "Clear",
        description: "Clear input",
    },
    // idx 2: MOVE
    KeyBinding {
        key_short: "←→",
        key: "← / → / Home / End",
        desc_short: "Move",
        description: "Move cursor",
    },
];

// =============================================================================
// Dropdown
// =============================================================================

pub const DROPDOWN_KEYS: &[KeyBinding] = &[
    // idx 0: CONFIRM
    KeyBinding {
        key_short: "Enter",
        key: "Enter",
        desc_short: "Select",
        description: "Use highlighted option",
    },
    // idx 1: NAVIGATE
    KeyBinding {
        key_short: "j/k / ↑↓",
        key: "j / k / ↑ / ↓",
        desc_short: "Navigate",
        description: "Highlight next / previous option",
    },
    // idx 2: CANCEL
    KeyBinding {
        key_short: "Esc",
        key: "Esc",
        desc_short: "Cancel",
        description: "Close without changing",
    },
];

// =============================================================================
// Help
// =============================================================================

pub const HELP_KEYS: &[KeyBinding] = &[
    // idx 0: CLOSE
    KeyBinding {
        key_short: "?/Esc",
        key: "? / Esc",
        desc_short: "Close",
        description: "Close help",
    },
    // idx 1: QUIT
    KeyBinding {
        key_short: "q",
        key: "q",
        desc_short: "Quit",
        description: "Quit",
    },
];

// =============================================================================
// Help Overlay Layout
// =============================================================================

/// Total lines in help overlay content (4 sections + 3 blank lines + key entries)
pub const HELP_TOTAL_LINES: usize = 4
    + 3
    + GLOBAL_KEYS.len()
    + FIELD_KEYS.len()
    + TEXT_ENTRY_KEYS.len()
    + DROPDOWN_KEYS.len();
