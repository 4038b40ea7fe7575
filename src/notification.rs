use crate::message::Message;
use iced::{
    Alignment, Background, Border, Color, Element, Length, Theme,
    widget::{button, column, container, row, text},
};
use iced_fonts::lucide::x;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Notification {
    pub title: &'static str,
    pub description: &'static str,
}

impl Notification {
    pub const PLAYBACK_BLOCKED: Self = Self {
        title: "Playback blocked",
        description: "Please interact with the page to enable audio playback",
    };
}

fn toast_style(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color::from_rgb(0.55, 0.12, 0.16))),
        text_color: Some(Color::WHITE),
        border: Border {
            radius: 8.0.into(),
            width: 1.0,
            color: Color::from_rgba(1.0, 1.0, 1.0, 0.2),
        },
        ..container::Style::default()
    }
}

/// Bottom-right toast with a close button.
pub fn view(notification: &Notification) -> Element<'_, Message> {
    let card = container(
        row![
            column![
                text(notification.title).size(16),
                text(notification.description).size(13),
            ]
            .spacing(4)
            .width(Length::Fill),
            button(x())
                .style(button::text)
                .on_press(Message::DismissNotification),
        ]
        .spacing(12)
        .align_y(Alignment::Start),
    )
    .padding(16)
    .width(360)
    .style(toast_style);

    container(card)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(24)
        .align_right(Length::Fill)
        .align_bottom(Length::Fill)
        .into()
}
