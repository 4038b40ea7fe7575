mod subscriptions;
mod update;
mod view;

use crate::{
    config::Config,
    landing::Glide,
    library::Library,
    message::Message,
    notification::Notification,
    player::{Effect, Player},
    ui_timing::TRACK_CHANGE_PULSE,
    visualizer::Visualizer,
    vinyl::VinylDisplay,
};
use iced::{Size, Task, Theme, task};
use rand::{SeedableRng, rngs::SmallRng};
use rhythm_ripple_engine::{
    self as engine,
    message::{Action as EngineAction, Message as EngineMessage},
};
use std::{sync::LazyLock, time::Instant};
use tracing::{debug, error};

static CLIENT: LazyLock<engine::client::Client> = LazyLock::new(engine::client::Client::default);

pub const WINDOW_SIZE: Size = Size::new(1100.0, 800.0);
const PAGE: &str = "page";

pub struct RhythmRipple {
    player: Player,
    visualizer: Visualizer,
    vinyl: VinylDisplay,
    notification: Option<Notification>,
    rng: SmallRng,
    pulse: Option<task::Handle>,
    size: Size,
    scroll_y: f32,
    glide: Option<Glide>,
    now: Instant,
}

impl RhythmRipple {
    pub fn new(library: Library, config: &Config) -> (Self, Task<Message>) {
        let mut rng = SmallRng::from_os_rng();
        let visualizer = Visualizer::new(&mut rng);
        let mut app = Self {
            player: Player::new(
                library,
                config.library.initial_playlist,
                config.player.volume,
            ),
            visualizer,
            vinyl: VinylDisplay::new(),
            notification: None,
            rng,
            pulse: None,
            size: WINDOW_SIZE,
            scroll_y: 0.0,
            glide: None,
            now: Instant::now(),
        };
        let effects = app.player.mount();
        let task = app.run_effects(effects);
        (app, task)
    }

    pub fn title(&self) -> String {
        format!("{} · {}", self.player.track().name, crate::landing::TITLE)
    }

    pub fn theme(&self) -> Theme {
        Theme::Dark
    }

    /// Queues a request right away so the engine sees requests in the order
    /// `update` produced them.
    fn send(&self, action: EngineAction) {
        if let Err(e) = CLIENT.send(EngineMessage::Request(action)) {
            error!("Failed to reach playback engine: {e}");
        }
    }

    fn run_effects(&mut self, effects: Vec<Effect>) -> Task<Message> {
        let mut tasks = Vec::new();
        for effect in effects {
            debug!("Effect: {effect:?}");
            match effect {
                Effect::Load { url, autoplay } => self.send(EngineAction::Load { url, autoplay }),
                Effect::Play => self.send(EngineAction::Play),
                Effect::Pause => self.send(EngineAction::Pause),
                Effect::Seek(seconds) => self.send(EngineAction::Seek(seconds)),
                Effect::SetVolume(volume) => self.send(EngineAction::SetVolume(volume)),
                Effect::StartPulse(generation) => tasks.push(self.start_pulse(generation)),
                Effect::Notify(notification) => self.notification = Some(notification),
            }
        }
        Task::batch(tasks)
    }

    /// Replaces the running pulse timer; dropping the old handle aborts it.
    fn start_pulse(&mut self, generation: u64) -> Task<Message> {
        self.vinyl.start_pulse(Instant::now());
        let (task, handle) = Task::perform(tokio::time::sleep(TRACK_CHANGE_PULSE), move |_| {
            Message::Player(crate::player::Action::PulseElapsed(generation))
        })
        .abortable();
        self.pulse = Some(handle.abort_on_drop());
        task
    }
}
