use super::{PAGE, RhythmRipple};
use crate::{landing::Glide, message::Message, player::Action};
use iced::{
    Task,
    widget::{Id, operation, scrollable::AbsoluteOffset},
};
use rhythm_ripple_engine::message::Action as EngineAction;
use std::time::Instant;
use tracing::{debug, warn};

impl RhythmRipple {
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::None => Task::none(),
            Message::Player(action) => self.dispatch(action),
            Message::Response(Ok(event)) => match event {
                EngineAction::Loaded {
                    url,
                    duration: Some(duration),
                } => self.dispatch(Action::DurationChanged { url, duration }),
                EngineAction::TimeUpdate { url, seconds } => {
                    self.dispatch(Action::TimeUpdate { url, seconds })
                }
                EngineAction::Ended { url } => self.dispatch(Action::TrackEnded { url }),
                other => {
                    debug!("Engine acknowledged {other:?}");
                    Task::none()
                }
            },
            Message::Response(Err(e)) => {
                warn!("{e}");
                if e.is_rejection() {
                    self.dispatch(Action::PlaybackRejected)
                } else {
                    Task::none()
                }
            }
            Message::VisualizerTick => {
                self.visualizer.regenerate(&mut self.rng);
                Task::none()
            }
            Message::Frame(now) => {
                self.now = now;
                self.vinyl.frame(now, self.player.state().is_playing);
                let Some(glide) = self.glide else {
                    return Task::none();
                };
                let (y, arrived) = glide.offset(now);
                if arrived {
                    self.glide = None;
                }
                operation::scroll_to(Id::new(PAGE), AbsoluteOffset { x: 0.0, y })
            }
            Message::WindowResized(size) => {
                self.size = size;
                Task::none()
            }
            Message::PageScrolled(viewport) => {
                self.scroll_y = viewport.absolute_offset().y;
                Task::none()
            }
            Message::ScrollToPlayer => {
                self.glide = Some(Glide::new(self.scroll_y, self.size.height, Instant::now()));
                Task::none()
            }
            Message::DismissNotification => {
                self.notification = None;
                Task::none()
            }
        }
    }

    fn dispatch(&mut self, action: Action) -> Task<Message> {
        let effects = self.player.apply(action, &mut self.rng);
        self.run_effects(effects)
    }
}
