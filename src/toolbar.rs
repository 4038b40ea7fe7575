use crate::{
    message::Message,
    player::{Action, PlaybackState},
    style::{self, palette},
    time_format::format_time,
};
use iced::{
    Alignment, Background, Color, Element, Length, Theme,
    widget::{button, column, container, row, text},
};
use iced_fonts::lucide::{pause, play, repeat, shuffle, skip_back, skip_forward, volume_two, volume_x};
use rhythm_ripple_widgets::{HorizontalSlider, SliderColors};

fn round_button_style(theme: &Theme, status: button::Status) -> button::Style {
    let mut style = button::primary(theme, status);
    style.border.radius = 28.0.into();
    style.text_color = Color::WHITE;
    style.background = Some(Background::Color(match status {
        button::Status::Hovered | button::Status::Pressed => Color {
            a: 0.9,
            ..palette::ACCENT
        },
        _ => palette::ACCENT,
    }));
    style
}

fn slider_colors() -> SliderColors {
    SliderColors {
        filled: palette::ACCENT,
        ..SliderColors::default()
    }
}

/// Value shown by the volume slider: zero while muted.
pub fn volume_shown(state: &PlaybackState) -> f32 {
    if state.is_muted { 0.0 } else { state.volume }
}

/// Seek bar with the elapsed and total time under it.
pub fn progress<'a>(state: &PlaybackState, seek_limit: f64) -> Element<'a, Message> {
    column![
        HorizontalSlider::new(0.0..=seek_limit as f32, state.current_time as f32, |v| {
            Message::Player(Action::Seek(f64::from(v).floor()))
        })
        .colors(slider_colors()),
        row![
            text(format_time(state.current_time))
                .size(13)
                .width(Length::Fill)
                .color(palette::MUTED_TEXT),
            text(format_time(state.duration))
                .size(13)
                .color(palette::MUTED_TEXT),
        ],
    ]
    .spacing(6)
    .into()
}

pub fn view<'a>(state: &PlaybackState) -> Element<'a, Message> {
    let toggle = |icon: iced::widget::Text<'a>, enabled: bool, action: Action| {
        button(icon.size(18))
            .style(move |theme, status| style::toggle::style(theme, status, enabled))
            .on_press(Message::Player(action))
    };
    let skip = |icon: iced::widget::Text<'a>, action: Action| {
        button(icon.size(24))
            .style(|theme, status| style::toggle::style(theme, status, false))
            .on_press(Message::Player(action))
    };

    let transport = row![
        toggle(shuffle(), state.is_shuffle, Action::ToggleShuffle),
        skip(skip_back(), Action::SkipBack),
        button(
            container((if state.is_playing { pause() } else { play() }).size(24))
                .center_x(Length::Fill)
                .center_y(Length::Fill),
        )
        .width(56)
        .height(56)
        .style(round_button_style)
        .on_press(Message::Player(Action::TogglePlayback)),
        skip(skip_forward(), Action::SkipForward),
        toggle(repeat(), state.is_repeat, Action::ToggleRepeat),
    ]
    .spacing(24)
    .align_y(Alignment::Center);

    let volume = row![
        button((if state.is_muted { volume_x() } else { volume_two() }).size(20))
            .style(|theme, status| style::toggle::style(theme, status, false))
            .on_press(Message::Player(Action::ToggleMute)),
        HorizontalSlider::new(0.0..=1.0, volume_shown(state), |v| {
            Message::Player(Action::SetVolume((v * 100.0).round() / 100.0))
        })
        .width(96)
        .colors(slider_colors()),
    ]
    .spacing(12)
    .align_y(Alignment::Center);

    row![container(transport).width(Length::Fill), volume]
        .width(Length::Fill)
        .align_y(Alignment::Center)
        .into()
}
