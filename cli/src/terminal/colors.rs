use colored::Color;

pub const PRIMARY: Color = Color::TrueColor { r: 0, g: 215, b: 135 };
pub const ACCENT: Color = Color::TrueColor { r: 255, g: 175, b: 0 };
pub const SEPARATOR: Color = Color::BrightBlack;
pub const TEXT_DEFAULT: Color = Color::TrueColor { r: 208, g: 208, b: 208 };
pub const PRICE: Color = Color::TrueColor { r: 255, g: 215, b: 95 };
pub const LINK: Color = Color::TrueColor { r: 135, g: 175, b: 255 };
