use crate::player::Action;
use iced::{Size, widget::scrollable::Viewport};
use rhythm_ripple_engine::{MediaError, message::Action as EngineAction};
use std::time::Instant;

#[derive(Debug, Clone)]
pub enum Message {
    None,

    Player(Action),
    Response(Result<EngineAction, MediaError>),

    VisualizerTick,
    Frame(Instant),
    WindowResized(Size),
    PageScrolled(Viewport),
    ScrollToPlayer,
    DismissNotification,
}
