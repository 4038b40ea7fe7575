use std::time::Duration;

pub const VISUALIZER_INTERVAL: Duration = Duration::from_millis(200);
pub const TRACK_CHANGE_PULSE: Duration = Duration::from_millis(1000);
pub const TONEARM_SWING: Duration = Duration::from_millis(700);
pub const SCROLL_GLIDE: Duration = Duration::from_millis(600);
pub const VINYL_REVOLUTION: Duration = Duration::from_secs(12);
