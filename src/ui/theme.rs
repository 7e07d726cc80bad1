use crate::savings::rewards::BadgeAccent;
use ratatui::style::Color;

pub const TOLL: Color = Color::Rgb(14, 165, 233);
pub const FUEL: Color = Color::Rgb(16, 185, 129);
pub const TRIPS: Color = Color::Rgb(136, 132, 216);
pub const BRAND: Color = Color::Rgb(37, 99, 235);
pub const MUTED: Color = Color::DarkGray;
pub const LOCKED: Color = Color::Gray;

pub fn accent(accent: BadgeAccent) -> Color {
    match accent {
        BadgeAccent::Amber => Color::Rgb(245, 158, 11),
        BadgeAccent::DeepAmber => Color::Rgb(217, 119, 6),
        BadgeAccent::Green => Color::Rgb(22, 163, 74),
    }
}
