use iced::{Background, Border, Color, Theme, widget::container};

/// Frosted card used for the track list and the playlist menu.
pub fn style(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color::from_rgba(1.0, 1.0, 1.0, 0.05))),
        border: Border {
            radius: 12.0.into(),
            width: 1.0,
            color: Color::from_rgba(1.0, 1.0, 1.0, 0.1),
        },
        ..container::Style::default()
    }
}
