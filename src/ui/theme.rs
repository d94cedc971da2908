use ratatui::style::Color;

/// Base color palette
pub struct Palette;

impl Palette {
    pub const DUCKBONES: Color = Color::Rgb(0x15, 0x19, 0x26);
    pub const DO_BLUE: Color = Color::Rgb(0x00, 0x80, 0xff);
}

/// Application color theme constants
pub struct Theme;

impl Theme {
    // Modal/Overlay backgrounds
    pub const MODAL_BG: Color = Palette::DUCKBONES;
    pub const MODAL_TITLE: Color = Color::Cyan;
    pub const MODAL_HINT: Color = Color::DarkGray;

    // Panel borders
    pub const FOCUS_BORDER: Color = Palette::DO_BLUE;
    pub const UNFOCUS_BORDER: Color = Color::DarkGray;

    // Text
    pub const TEXT_PRIMARY: Color = Color::White;
    pub const TEXT_SECONDARY: Color = Color::Gray;
    pub const TEXT_MUTED: Color = Color::DarkGray;
    pub const TEXT_ACCENT: Color = Color::Yellow;

    // Key chips in help and footer
    pub const KEY_CHIP_BG: Color = Color::Rgb(0x45, 0x47, 0x5a);
    pub const KEY_CHIP_FG: Color = Color::White;

    // Header bar
    pub const HEADER_BG: Color = Palette::DO_BLUE;
    pub const HEADER_FG: Color = Color::White;

    // Engine tabs
    pub const TAB_ACTIVE: Color = Color::Cyan;

    // Field list
    pub const SECTION_HEADING: Color = Color::Cyan;
    pub const SELECTED_BG: Color = Color::Rgb(0x45, 0x47, 0x5a);
    pub const VALUE_SET: Color = Color::Green;
    pub const KIND_BADGE: Color = Color::Magenta;

    // Command panel
    pub const COMMAND_TEXT: Color = Color::White;
    pub const STATUS_SUCCESS: Color = Color::Green;

    // Text cursor
    pub const CURSOR_BG: Color = Color::White;
    pub const CURSOR_FG: Color = Color::Black;
}
