use thiserror::Error;

/// Failures reported by the playback engine.
///
/// Every variant is cheap to clone so it can travel inside UI messages.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MediaError {
    /// A play request was refused, e.g. no output device or nothing loaded.
    #[error("playback rejected: {0}")]
    PlaybackRejected(String),

    #[error("failed to load '{url}': {reason}")]
    Load { url: String, reason: String },

    #[error("seek failed: {0}")]
    Seek(String),

    #[error("engine channel closed")]
    ChannelClosed,
}

impl MediaError {
    pub fn load(url: impl Into<String>, reason: impl ToString) -> Self {
        Self::Load {
            url: url.into(),
            reason: reason.to_string(),
        }
    }

    pub fn is_rejection(&self) -> bool {
        matches!(self, Self::PlaybackRejected(_))
    }
}
