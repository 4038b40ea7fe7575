use crate::{error::MediaError, message::Message};
use tokio::sync::mpsc::{Receiver, UnboundedSender, channel, unbounded_channel};
use tracing::error;

#[derive(Debug, Clone)]
pub struct Client {
    tx: UnboundedSender<Message>,
}

impl Client {
    pub fn new(tx: UnboundedSender<Message>) -> Self {
        Self { tx }
    }

    /// Queues a message without waiting. Messages reach the engine in the
    /// order they were sent.
    pub fn send(&self, message: Message) -> Result<(), MediaError> {
        self.tx.send(message).map_err(|_| MediaError::ChannelClosed)
    }

    /// Registers a new listener. The receiver yields every response the
    /// engine publishes from now on and closes when the engine stops.
    pub fn subscribe(&self) -> Receiver<Message> {
        let (tx, rx) = channel::<Message>(64);
        if self.send(Message::Channel(tx)).is_err() {
            error!("Engine is not running; subscription will stay empty");
        }
        rx
    }

    pub fn quit(&self) {
        let _ = self.send(Message::Request(crate::message::Action::Quit));
    }
}

impl Default for Client {
    /// Starts an engine on the default audio device.
    fn default() -> Self {
        match crate::init() {
            Ok((client, _handle)) => client,
            Err(e) => {
                error!("Failed to start playback engine: {e}");
                let (tx, _rx) = unbounded_channel::<Message>();
                Self::new(tx)
            }
        }
    }
}
