use crate::{error::MediaError, probe};
use rodio::{Decoder, OutputStream, OutputStreamHandle, Sink, Source};
use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
    time::Duration,
};
use tracing::debug;

/// Where decoded audio goes. The engine owns exactly one output and drives
/// it from its worker thread, so implementations need not be `Send`.
pub trait Output {
    /// Replaces the current source, leaving it paused at position zero.
    /// Returns the decoded duration when the source declares one.
    fn load(&mut self, path: &Path) -> Result<Option<f64>, MediaError>;
    fn play(&mut self) -> Result<(), MediaError>;
    fn pause(&mut self);
    fn seek(&mut self, position: Duration) -> Result<(), MediaError>;
    fn set_volume(&mut self, volume: f32);
    fn position(&self) -> Duration;
    /// True once the loaded source has played to its end.
    fn is_finished(&self) -> bool;
}

pub struct RodioOutput {
    _stream: OutputStream,
    handle: OutputStreamHandle,
    sink: Option<Sink>,
    current: Option<PathBuf>,
    volume: f32,
}

impl RodioOutput {
    pub fn open() -> Result<Self, MediaError> {
        let (stream, handle) = OutputStream::try_default()
            .map_err(|e| MediaError::PlaybackRejected(format!("no audio output device: {e}")))?;
        Ok(Self {
            _stream: stream,
            handle,
            sink: None,
            current: None,
            volume: 1.0,
        })
    }

    fn decode(path: &Path) -> Result<Decoder<BufReader<File>>, MediaError> {
        let url = path.display().to_string();
        let file = File::open(path).map_err(|e| MediaError::load(&url, e))?;
        Decoder::new(BufReader::new(file)).map_err(|e| MediaError::load(&url, e))
    }

    /// Re-queues the current file after the sink drained it.
    fn rewind(&mut self) -> Result<(), MediaError> {
        let (Some(sink), Some(path)) = (self.sink.as_ref(), self.current.as_ref()) else {
            return Err(MediaError::PlaybackRejected("nothing loaded".to_string()));
        };
        if sink.empty() {
            debug!("Re-queueing {}", path.display());
            sink.append(Self::decode(path)?);
        }
        Ok(())
    }
}

impl Output for RodioOutput {
    fn load(&mut self, path: &Path) -> Result<Option<f64>, MediaError> {
        if let Some(old) = self.sink.take() {
            old.stop();
        }
        self.current = None;
        let source = Self::decode(path)?;
        let duration = match source.total_duration() {
            Some(d) => Some(d.as_secs_f64()),
            None => probe::duration(path).unwrap_or(None),
        };
        let sink = Sink::try_new(&self.handle)
            .map_err(|e| MediaError::PlaybackRejected(e.to_string()))?;
        sink.pause();
        sink.set_volume(self.volume);
        sink.append(source);
        self.sink = Some(sink);
        self.current = Some(path.to_path_buf());
        Ok(duration)
    }

    fn play(&mut self) -> Result<(), MediaError> {
        self.rewind()?;
        if let Some(sink) = &self.sink {
            sink.play();
        }
        Ok(())
    }

    fn pause(&mut self) {
        if let Some(sink) = &self.sink {
            sink.pause();
        }
    }

    fn seek(&mut self, position: Duration) -> Result<(), MediaError> {
        self.rewind().map_err(|e| MediaError::Seek(e.to_string()))?;
        match &self.sink {
            Some(sink) => sink
                .try_seek(position)
                .map_err(|e| MediaError::Seek(e.to_string())),
            None => Err(MediaError::Seek("nothing loaded".to_string())),
        }
    }

    fn set_volume(&mut self, volume: f32) {
        self.volume = volume.clamp(0.0, 1.0);
        if let Some(sink) = &self.sink {
            sink.set_volume(self.volume);
        }
    }

    fn position(&self) -> Duration {
        self.sink
            .as_ref()
            .map(Sink::get_pos)
            .unwrap_or(Duration::ZERO)
    }

    fn is_finished(&self) -> bool {
        self.sink.as_ref().is_some_and(Sink::empty)
    }
}

/// Stand-in used when no audio device could be opened. Sources still load
/// so durations show up, but every play request is refused.
#[derive(Debug, Default)]
pub struct NullOutput {
    position: Duration,
}

impl Output for NullOutput {
    fn load(&mut self, path: &Path) -> Result<Option<f64>, MediaError> {
        self.position = Duration::ZERO;
        probe::duration(path)
    }

    fn play(&mut self) -> Result<(), MediaError> {
        Err(MediaError::PlaybackRejected(
            "no audio output device available".to_string(),
        ))
    }

    fn pause(&mut self) {}

    fn seek(&mut self, position: Duration) -> Result<(), MediaError> {
        self.position = position;
        Ok(())
    }

    fn set_volume(&mut self, _volume: f32) {}

    fn position(&self) -> Duration {
        self.position
    }

    fn is_finished(&self) -> bool {
        false
    }
}
