use super::palette;
use iced::{Theme, widget::button};

/// Icon button that lights up in the accent color while its mode is on.
pub fn style(theme: &Theme, status: button::Status, enabled: bool) -> button::Style {
    let mut style = button::text(theme, status);
    style.text_color = match (enabled, status) {
        (true, _) | (false, button::Status::Hovered) => palette::ACCENT,
        (false, _) => palette::MUTED_TEXT,
    };
    style
}
