mod config;
mod gui;
mod landing;
mod library;
mod logging;
mod message;
mod notification;
mod player;
mod style;
mod time_format;
mod toolbar;
mod track_list;
mod ui_timing;
mod vinyl;
mod visualizer;

use anyhow::Context;
use config::Config;
use gui::RhythmRipple;
use library::Library;
use tracing::info;

fn main() -> anyhow::Result<()> {
    let config = Config::load()?;
    logging::init(&config.log)?;

    let library = Library::load(&config.library.path).with_context(|| {
        format!(
            "no playable library at {}; set [library] path in {}",
            config.library.path.display(),
            config::FILE_NAME
        )
    })?;
    info!(
        "Loaded {} playlists from {}",
        library.len(),
        config.library.path.display()
    );

    iced::application(
        move || RhythmRipple::new(library.clone(), &config),
        RhythmRipple::update,
        RhythmRipple::view,
    )
    .title(RhythmRipple::title)
    .subscription(RhythmRipple::subscription)
    .theme(RhythmRipple::theme)
    .font(iced_fonts::LUCIDE_FONT_BYTES)
    .window_size(gui::WINDOW_SIZE)
    .run()?;

    Ok(())
}
