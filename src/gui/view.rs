use super::{PAGE, RhythmRipple};
use crate::{
    landing,
    message::Message,
    notification,
    player::Action,
    style::{self, palette},
    toolbar, track_list,
};
use iced::{
    Alignment, Background, Element, Length,
    widget::{Column, Id, button, column, container, row, scrollable, stack, text},
};
use iced_fonts::lucide::music;

pub const FOOTER: &str = "Rhythm Ripple © 2025. All rights reserved.";

impl RhythmRipple {
    pub fn view(&self) -> Element<'_, Message> {
        let height = self.size.height;
        let progress = landing::scroll_progress(self.scroll_y, 0.0, height, height);

        let page = column![
            landing::view(progress, height),
            self.player_section(),
            container(text(FOOTER).size(13).color(palette::MUTED_TEXT))
                .center_x(Length::Fill)
                .padding(32),
        ];

        let base = container(
            scrollable(page)
                .id(Id::new(PAGE))
                .on_scroll(Message::PageScrolled)
                .width(Length::Fill)
                .height(Length::Fill),
        )
        .style(|_theme| container::Style {
            background: Some(Background::Color(palette::BACKGROUND)),
            text_color: Some(palette::TEXT),
            ..container::Style::default()
        });

        match &self.notification {
            Some(n) => stack![base, notification::view(n)].into(),
            None => base.into(),
        }
    }

    fn player_section(&self) -> Element<'_, Message> {
        let state = self.player.state();
        let playlist = self.player.playlist();
        let track = self.player.track();
        let menu_open = state.is_playlist_menu_open;

        let header = row![
            text(&playlist.name).size(30).width(Length::Fill),
            button(music().size(20))
                .style(move |theme, status| style::toggle::style(theme, status, menu_open))
                .on_press(Message::Player(Action::TogglePlaylistMenu)),
        ]
        .align_y(Alignment::Center);

        let mut info = column![header].spacing(4).width(Length::Fill);
        if menu_open {
            info = info.push(self.playlist_menu());
        }
        info = info
            .push(
                text(format!("by {}", playlist.artist))
                    .size(18)
                    .color(palette::MUTED_TEXT),
            )
            .push(text(playlist.year.to_string()).size(14).color(palette::MUTED_TEXT))
            .push(
                column![
                    text(&track.name).size(24),
                    self.visualizer.view(state.is_playing),
                    toolbar::progress(state, self.player.seek_limit()),
                    toolbar::view(state),
                ]
                .spacing(16)
                .padding([32, 0]),
            );

        let top = row![
            self.vinyl
                .view(&track.name, state.track_change_animation, self.now),
            info,
        ]
        .spacing(32)
        .align_y(Alignment::Start);

        let tracks = container(
            column![
                text("Tracks").size(20),
                track_list::view(&playlist.tracks, state.track_index),
            ]
            .spacing(16),
        )
        .padding(24)
        .width(Length::Fill)
        .style(style::panel::style);

        container(column![top, tracks].spacing(24).max_width(896))
            .center_x(Length::Fill)
            .padding([80, 32])
            .into()
    }

    fn playlist_menu(&self) -> Element<'_, Message> {
        let current = self.player.state().playlist_index;
        let entries = self
            .player
            .library()
            .playlists()
            .iter()
            .enumerate()
            .map(|(index, playlist)| {
                button(text(&playlist.name))
                    .width(Length::Fill)
                    .style(move |theme, status| {
                        style::track_row::style(theme, status, index == current)
                    })
                    .on_press(Message::Player(Action::SelectPlaylist(index)))
                    .into()
            });

        container(Column::with_children(entries).spacing(2))
            .padding(8)
            .width(224)
            .style(style::panel::style)
            .into()
    }
}
