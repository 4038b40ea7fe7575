use super::{CLIENT, RhythmRipple};
use crate::{message::Message, player::Action, ui_timing::VISUALIZER_INTERVAL};
use iced::futures::{Stream, StreamExt, stream};
use iced::keyboard::Event as KeyEvent;
use iced::{Subscription, event, keyboard, window};
use rhythm_ripple_engine::message::Message as EngineMessage;

impl RhythmRipple {
    pub fn subscription(&self) -> Subscription<Message> {
        fn listener() -> impl Stream<Item = Message> {
            stream::once(async { CLIENT.subscribe() }).flat_map(|receiver| {
                stream::unfold(receiver, |mut rx| async move {
                    match rx.recv().await {
                        Some(EngineMessage::Response(r)) => Some((Message::Response(r), rx)),
                        Some(_) => Some((Message::None, rx)),
                        None => None,
                    }
                })
            })
        }
        let engine_sub = Subscription::run(listener);

        let keyboard_sub = keyboard::listen().map(|event| match event {
            KeyEvent::KeyPressed { key, .. } => match key {
                keyboard::Key::Named(keyboard::key::Named::Space) => {
                    Message::Player(Action::TogglePlayback)
                }
                keyboard::Key::Named(keyboard::key::Named::ArrowRight) => {
                    Message::Player(Action::SkipForward)
                }
                keyboard::Key::Named(keyboard::key::Named::ArrowLeft) => {
                    Message::Player(Action::SkipBack)
                }
                keyboard::Key::Character(ch) if ch.eq_ignore_ascii_case("m") => {
                    Message::Player(Action::ToggleMute)
                }
                _ => Message::None,
            },
            _ => Message::None,
        });

        let event_sub = event::listen().map(|event| match event {
            event::Event::Window(window::Event::Resized(size)) => Message::WindowResized(size),
            _ => Message::None,
        });

        let state = self.player.state();
        let visualizer_sub = if state.is_playing {
            iced::time::every(VISUALIZER_INTERVAL).map(|_| Message::VisualizerTick)
        } else {
            Subscription::none()
        };

        let animating = self
            .vinyl
            .is_animating(state.is_playing, state.track_change_animation)
            || self.glide.is_some();
        let frame_sub = if animating {
            window::frames().map(Message::Frame)
        } else {
            Subscription::none()
        };

        Subscription::batch(vec![
            engine_sub,
            keyboard_sub,
            event_sub,
            visualizer_sub,
            frame_sub,
        ])
    }
}
