use crate::{
    library::Track,
    message::Message,
    player::Action,
    style,
    time_format::format_time,
};
use iced::{
    Alignment, Element, Length,
    widget::{Column, button, container, row, scrollable, text},
};
use iced_fonts::lucide::play;

const MAX_HEIGHT: f32 = 400.0;

/// Leading cell of a row: the 1-based position, or a play glyph for the
/// active track.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Marker {
    Active,
    Ordinal(usize),
}

pub fn marker(index: usize, current: usize) -> Marker {
    if index == current {
        Marker::Active
    } else {
        Marker::Ordinal(index + 1)
    }
}

pub fn view(tracks: &[Track], current: usize) -> Element<'_, Message> {
    let rows = tracks.iter().enumerate().map(|(index, track)| {
        let active = index == current;
        let lead: Element<'_, Message> = match marker(index, current) {
            Marker::Active => play().size(14).into(),
            Marker::Ordinal(n) => text(n).size(14).into(),
        };
        button(
            row![
                container(lead).center_x(24),
                text(&track.name).width(Length::Fill),
                text(format_time(track.duration)).size(13),
            ]
            .spacing(12)
            .align_y(Alignment::Center),
        )
        .width(Length::Fill)
        .padding([8, 12])
        .style(move |theme, status| style::track_row::style(theme, status, active))
        .on_press(Message::Player(Action::SelectTrack(index)))
        .into()
    });

    container(scrollable(Column::with_children(rows).spacing(4)))
        .max_height(MAX_HEIGHT)
        .into()
}
