//! Shared UI theme constants.

use ratatui::style::Color;

// Dashboard accent palette
pub const ACCENT_BLUE: Color = Color::Rgb(59, 130, 246);
pub const ACCENT_PURPLE: Color = Color::Rgb(192, 132, 252);
pub const ACCENT_EMERALD: Color = Color::Rgb(52, 211, 153);
pub const ACCENT_RED: Color = Color::Rgb(248, 113, 113);
pub const TEXT_DIM: Color = Color::Rgb(148, 163, 184);
