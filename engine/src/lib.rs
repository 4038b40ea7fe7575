pub mod client;
mod engine;
pub mod error;
pub mod message;
pub mod output;
pub mod probe;
pub mod source;

use std::{io, thread};
use tokio::sync::mpsc::unbounded_channel;
use tracing::{error, warn};

pub use error::MediaError;

/// Starts the engine on the default output device, falling back to a
/// silent output that refuses playback when no device is available.
pub fn init() -> io::Result<(client::Client, thread::JoinHandle<()>)> {
    spawn(|| match output::RodioOutput::open() {
        Ok(output) => Box::new(output) as Box<dyn output::Output>,
        Err(e) => {
            warn!("{e}; playback requests will be rejected");
            Box::new(output::NullOutput::default())
        }
    })
}

/// Starts the engine with a caller-provided output. The output is built on
/// the worker thread because audio handles are usually not `Send`.
pub fn spawn<F>(make_output: F) -> io::Result<(client::Client, thread::JoinHandle<()>)>
where
    F: FnOnce() -> Box<dyn output::Output> + Send + 'static,
{
    let (tx, rx) = unbounded_channel::<message::Message>();
    let handle = thread::Builder::new()
        .name("rhythm-ripple-engine".to_string())
        .spawn(move || {
            let runtime = match tokio::runtime::Builder::new_current_thread()
                .enable_time()
                .build()
            {
                Ok(runtime) => runtime,
                Err(e) => {
                    error!("Failed to build engine runtime: {e}");
                    return;
                }
            };
            let mut engine = engine::Engine::new(rx, make_output());
            runtime.block_on(engine.work());
        })?;
    Ok((client::Client::new(tx), handle))
}
