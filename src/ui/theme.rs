use ratatui::style::Color;

// The published game's palette, mapped to terminal RGB.
pub const BLUE: Color = Color::Rgb(0x3b, 0x82, 0xf6);
pub const GREEN: Color = Color::Rgb(0x22, 0xc5, 0x5e);
pub const RED: Color = Color::Rgb(0xef, 0x44, 0x44);
pub const ORANGE: Color = Color::Rgb(0xf9, 0x73, 0x16);
pub const TEAL: Color = Color::Rgb(0x14, 0xb8, 0xa6);
pub const BEIGE: Color = Color::Rgb(0xf5, 0xf0, 0xdc);
pub const DARK_GREY: Color = Color::Rgb(0x6b, 0x72, 0x80);
