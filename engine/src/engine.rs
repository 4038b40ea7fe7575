use std::time::Duration;
use tokio::sync::mpsc::{Sender, UnboundedReceiver};
use tokio::time::{MissedTickBehavior, interval};
use tracing::{debug, warn};

use crate::{
    error::MediaError,
    message::{Action, Message},
    output::Output,
    source,
};

pub struct Engine {
    clients: Vec<Sender<Message>>,
    rx: UnboundedReceiver<Message>,
    output: Box<dyn Output>,
    loaded: Option<String>,
    playing: bool,
    ended_reported: bool,
}

impl Engine {
    const TIME_UPDATE_INTERVAL: Duration = Duration::from_millis(250);

    pub fn new(rx: UnboundedReceiver<Message>, output: Box<dyn Output>) -> Self {
        Self {
            clients: vec![],
            rx,
            output,
            loaded: None,
            playing: false,
            ended_reported: false,
        }
    }

    async fn notify_clients(&mut self, response: Result<Action, MediaError>) {
        let mut alive = Vec::with_capacity(self.clients.len());
        for client in self.clients.drain(..) {
            if client
                .send(Message::Response(response.clone()))
                .await
                .is_ok()
            {
                alive.push(client);
            } else {
                debug!("Dropping disconnected engine client");
            }
        }
        self.clients = alive;
    }

    async fn play(&mut self) {
        if self.loaded.is_none() {
            self.playing = false;
            self.notify_clients(Err(MediaError::PlaybackRejected(
                "nothing loaded".to_string(),
            )))
            .await;
            return;
        }
        match self.output.play() {
            Ok(()) => {
                self.playing = true;
                self.ended_reported = false;
                self.notify_clients(Ok(Action::Play)).await;
            }
            Err(e) => {
                self.playing = false;
                self.notify_clients(Err(e)).await;
            }
        }
    }

    async fn handle_request(&mut self, action: Action) {
        debug!("Engine request: {action:?}");
        match action {
            Action::Load { url, autoplay } => {
                self.playing = false;
                self.ended_reported = false;
                let loaded = source::resolve(&url).and_then(|path| self.output.load(&path));
                match loaded {
                    Ok(duration) => {
                        self.loaded = Some(url.clone());
                        self.notify_clients(Ok(Action::Loaded { url, duration }))
                            .await;
                        if autoplay {
                            self.play().await;
                        }
                    }
                    Err(e) => {
                        warn!("{e}");
                        self.loaded = None;
                        self.notify_clients(Err(e)).await;
                    }
                }
            }
            Action::Play => self.play().await,
            Action::Pause => {
                self.output.pause();
                self.playing = false;
                self.notify_clients(Ok(Action::Pause)).await;
            }
            Action::Seek(seconds) => {
                let position = Duration::from_secs_f64(seconds.max(0.0));
                let result = self.output.seek(position).map(|_| Action::Seek(seconds));
                if result.is_ok() {
                    self.ended_reported = false;
                }
                self.notify_clients(result).await;
            }
            Action::SetVolume(volume) => {
                self.output.set_volume(volume);
                self.notify_clients(Ok(Action::SetVolume(volume))).await;
            }
            Action::Quit
            | Action::Loaded { .. }
            | Action::TimeUpdate { .. }
            | Action::Ended { .. } => {}
        }
    }

    async fn tick(&mut self) {
        if !self.playing || self.ended_reported {
            return;
        }
        let Some(url) = self.loaded.clone() else {
            return;
        };
        if self.output.is_finished() {
            self.playing = false;
            self.ended_reported = true;
            self.notify_clients(Ok(Action::Ended { url })).await;
        } else {
            let seconds = self.output.position().as_secs_f64();
            self.notify_clients(Ok(Action::TimeUpdate { url, seconds }))
                .await;
        }
    }

    pub async fn work(&mut self) {
        let mut ticker = interval(Self::TIME_UPDATE_INTERVAL);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
        loop {
            tokio::select! {
                message = self.rx.recv() => match message {
                    Some(Message::Channel(s)) => self.clients.push(s),
                    Some(Message::Request(Action::Quit)) | None => break,
                    Some(Message::Request(a)) => self.handle_request(a).await,
                    Some(Message::Response(_)) => {}
                },
                _ = ticker.tick() => self.tick().await,
            }
        }
        self.output.pause();
        debug!("Engine stopped");
    }
}
