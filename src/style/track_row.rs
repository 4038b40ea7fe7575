use super::palette;
use iced::{Background, Color, Theme, widget::button};

pub fn style(_theme: &Theme, status: button::Status, active: bool) -> button::Style {
    let background = if active {
        Color { a: 0.25, ..palette::ACCENT }
    } else if matches!(status, button::Status::Hovered) {
        Color::from_rgba(1.0, 1.0, 1.0, 0.06)
    } else {
        Color::TRANSPARENT
    };
    button::Style {
        background: Some(Background::Color(background)),
        text_color: if active { palette::TEXT } else { palette::MUTED_TEXT },
        border: iced::Border {
            radius: 6.0.into(),
            ..iced::Border::default()
        },
        ..button::Style::default()
    }
}
