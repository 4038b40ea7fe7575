use crate::{
    message::Message,
    style,
    ui_timing::{TONEARM_SWING, TRACK_CHANGE_PULSE, VINYL_REVOLUTION},
};
use iced::{Element, widget::canvas};
use rhythm_ripple_widgets::Vinyl;
use std::{
    f32::consts::{PI, TAU},
    time::{Duration, Instant},
};

pub const TITLE_LIMIT: usize = 25;
pub const TONEARM_ENGAGED: f32 = 25.0 * PI / 180.0;
const PULSE_DEPTH: f32 = 0.08;
const SIZE: f32 = 256.0;
/// Frames stop while nothing moves; the first one after a pause must not
/// replay the whole gap.
const MAX_FRAME_STEP: Duration = Duration::from_millis(100);

pub fn truncate_title(title: &str) -> String {
    if title.chars().count() > TITLE_LIMIT {
        let head: String = title.chars().take(TITLE_LIMIT).collect();
        format!("{head}...")
    } else {
        title.to_string()
    }
}

/// Record animation driven by window frames.
#[derive(Debug)]
pub struct VinylDisplay {
    angle: f32,
    tonearm: f32,
    pulse_started: Option<Instant>,
    last_frame: Option<Instant>,
}

impl VinylDisplay {
    pub fn new() -> Self {
        Self {
            angle: 0.0,
            tonearm: 0.0,
            pulse_started: None,
            last_frame: None,
        }
    }

    pub fn angle(&self) -> f32 {
        self.angle
    }

    pub fn tonearm(&self) -> f32 {
        self.tonearm
    }

    /// Advances to the frame at `now`. The disk keeps its angle while
    /// stopped; the arm eases towards its resting or engaged angle.
    pub fn frame(&mut self, now: Instant, playing: bool) {
        let dt = self
            .last_frame
            .map_or(Duration::ZERO, |last| now.saturating_duration_since(last))
            .min(MAX_FRAME_STEP);
        self.last_frame = Some(now);
        self.advance(dt, playing);
    }

    pub fn advance(&mut self, dt: Duration, playing: bool) {
        let dt = dt.as_secs_f32();
        if playing && dt > 0.0 {
            let speed = TAU / VINYL_REVOLUTION.as_secs_f32();
            self.angle = (self.angle + speed * dt).rem_euclid(TAU);
        }

        let target = if playing { TONEARM_ENGAGED } else { 0.0 };
        let step = TONEARM_ENGAGED * dt / TONEARM_SWING.as_secs_f32();
        self.tonearm = if self.tonearm < target {
            (self.tonearm + step).min(target)
        } else {
            (self.tonearm - step).max(target)
        };
    }

    pub fn start_pulse(&mut self, now: Instant) {
        self.pulse_started = Some(now);
    }

    /// Disk scale at `now`: dips and recovers once over the pulse window.
    pub fn scale(&self, now: Instant, changing: bool) -> f32 {
        let Some(started) = self.pulse_started.filter(|_| changing) else {
            return 1.0;
        };
        let t = now.saturating_duration_since(started).as_secs_f32()
            / TRACK_CHANGE_PULSE.as_secs_f32();
        if t >= 1.0 {
            1.0
        } else {
            1.0 - PULSE_DEPTH * (PI * t).sin()
        }
    }

    /// Whether anything still moves, so frames are worth requesting.
    pub fn is_animating(&self, playing: bool, changing: bool) -> bool {
        let target = if playing { TONEARM_ENGAGED } else { 0.0 };
        playing || changing || (self.tonearm - target).abs() > f32::EPSILON
    }

    pub fn view<'a>(&self, title: &str, changing: bool, now: Instant) -> Element<'a, Message> {
        canvas(Vinyl {
            angle: self.angle,
            tonearm: self.tonearm,
            scale: self.scale(now, changing),
            label: truncate_title(title),
            label_color: style::palette::LABEL,
        })
        .width(SIZE)
        .height(SIZE)
        .into()
    }
}

impl Default for VinylDisplay {
    fn default() -> Self {
        Self::new()
    }
}
