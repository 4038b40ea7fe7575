use crate::error::MediaError;
use tokio::sync::mpsc::Sender;

/// Requests understood by the engine and the events it answers with.
#[derive(Clone, Debug, PartialEq)]
pub enum Action {
    Quit,

    Load { url: String, autoplay: bool },
    Play,
    Pause,
    /// Position in seconds.
    Seek(f64),
    /// Effective output gain in `[0, 1]`, already accounting for mute.
    SetVolume(f32),

    /// The source is decoded and ready; `duration` is what the decoder reports.
    Loaded { url: String, duration: Option<f64> },
    /// Position in seconds of the source loaded from `url`.
    TimeUpdate { url: String, seconds: f64 },
    Ended { url: String },
}

#[derive(Clone, Debug)]
pub enum Message {
    Channel(Sender<Self>),

    Request(Action),
    Response(Result<Action, MediaError>),
}
