//! Color constants for the canvas.

use ratatui::style::Color;

use crate::fields::Priority;

/// Window background (#f4f7fa).
pub const BACKGROUND: Color = Color::Rgb(0xf4, 0xf7, 0xfa);
/// Header text (#222).
pub const HEADER: Color = Color::Rgb(0x22, 0x22, 0x22);
/// Button fill (#4f8ef7).
pub const BUTTON_FILL: Color = Color::Rgb(0x4f, 0x8e, 0xf7);
pub const BUTTON_LABEL: Color = Color::Rgb(0xff, 0xff, 0xff);

pub const LOW: Color = Color::Rgb(0, 128, 0);
pub const MEDIUM: Color = Color::Rgb(255, 165, 0);
pub const HIGH: Color = Color::Rgb(255, 0, 0);
/// Open tasks past their reminder time, whatever their priority.
pub const OVERDUE: Color = Color::Rgb(139, 0, 0);

// Modal dialogs
pub const DIALOG_BG: Color = Color::Rgb(0xe8, 0xee, 0xf6);
pub const DIALOG_TEXT: Color = Color::Rgb(0x22, 0x22, 0x22);
pub const DIALOG_HINT: Color = Color::Rgb(114, 0, 0);

pub fn priority_color(priority: Priority) -> Color {
    match priority {
        Priority::Low => LOW,
        Priority::Medium => MEDIUM,
        Priority::High => HIGH,
    }
}
