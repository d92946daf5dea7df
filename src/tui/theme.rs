use ratatui::style::Color;

pub const DIALOG_BORDER: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const DIALOG_TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const HINT_TEXT: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const ACCENT: Color = Color::Rgb(0xda, 0x77, 0x56);
pub const STATUS_OK: Color = Color::Rgb(0x22, 0xc5, 0x5e);
pub const ACTIVE_HIGHLIGHT: Color = Color::Rgb(0x26, 0x26, 0x26);
pub const TOAST_BACKGROUND: Color = Color::Rgb(0x40, 0x40, 0x40);
