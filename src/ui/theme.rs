use ratatui::style::Color;

pub const NAVY: Color = Color::Rgb(0x1e, 0x3c, 0x72);
pub const CARD_BACK: Color = Color::Rgb(0x2a, 0x4b, 0x86);
pub const ACCENT_GREEN: Color = Color::Rgb(0x4c, 0xaf, 0x50);
pub const GLOBAL_BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const HEADER_TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const MUTED_TEXT: Color = Color::Rgb(0xaa, 0xaa, 0xaa);
pub const ERROR_TEXT: Color = Color::Rgb(0xff, 0xeb, 0x3b);
pub const ERROR_BORDER: Color = Color::Rgb(0xef, 0x44, 0x44);
pub const ACTIVE_HIGHLIGHT: Color = Color::Rgb(0x26, 0x26, 0x26);
