use crate::{message::Message, style::palette, ui_timing::SCROLL_GLIDE};
use iced::alignment::Horizontal;
use iced::{
    Alignment, Color, Element, Length,
    widget::{button, canvas, column, container, stack, text},
};
use iced_fonts::lucide::{chevron_down, music};
use rhythm_ripple_widgets::{Backdrop, Orb};
use std::time::Instant;

pub const TITLE: &str = "Rhythm Ripple";
pub const TAGLINE: &str =
    "Immerse yourself in seamless audio experiences with our elegant music player";

/// Anchor, radius and tint strength of each backdrop orb, back to front.
const ORBS: [((f32, f32), f32, f32); 3] = [
    ((0.12, 0.15), 80.0, 0.10),
    ((0.85, 0.78), 120.0, 0.20),
    ((0.62, 0.25), 40.0, 0.15),
];

/// How far the section has moved through the window, in `[0, 1]`.
pub fn scroll_progress(
    scroll_y: f32,
    section_top: f32,
    section_height: f32,
    window_height: f32,
) -> f32 {
    let span = section_height + window_height;
    if span <= 0.0 {
        return 0.0;
    }
    ((scroll_y - section_top + window_height) / span).clamp(0.0, 1.0)
}

/// Vertical offset and opacity of the decorative element at `index`.
pub fn parallax(progress: f32, index: usize) -> (f32, f32) {
    let speed = 0.2 + index as f32 * 0.1;
    (progress * speed * -100.0, (1.5 - progress).min(1.0))
}

pub fn orbs(progress: f32) -> Vec<Orb> {
    ORBS.iter()
        .enumerate()
        .map(|(index, &(anchor, radius, strength))| {
            let (offset_y, opacity) = parallax(progress, index);
            Orb {
                anchor,
                radius,
                color: Color {
                    a: strength,
                    ..palette::ACCENT
                },
                offset_y,
                opacity,
            }
        })
        .collect()
}

/// Eased scroll from one offset to another.
#[derive(Debug, Clone, Copy)]
pub struct Glide {
    from: f32,
    to: f32,
    started: Instant,
}

impl Glide {
    pub fn new(from: f32, to: f32, started: Instant) -> Self {
        Self { from, to, started }
    }

    /// Offset at `now` and whether the glide has arrived.
    pub fn offset(&self, now: Instant) -> (f32, bool) {
        let t = now.saturating_duration_since(self.started).as_secs_f32()
            / SCROLL_GLIDE.as_secs_f32();
        if t >= 1.0 {
            return (self.to, true);
        }
        let eased = if t < 0.5 {
            4.0 * t * t * t
        } else {
            1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
        };
        (self.from + (self.to - self.from) * eased, false)
    }
}

pub fn view<'a>(progress: f32, height: f32) -> Element<'a, Message> {
    let backdrop = canvas(Backdrop {
        orbs: orbs(progress),
    })
    .width(Length::Fill)
    .height(Length::Fill);

    let content = column![
        music().size(80).color(palette::ACCENT),
        text(TITLE).size(64).color(palette::TEXT),
        text(TAGLINE)
            .size(22)
            .color(palette::MUTED_TEXT)
            .align_x(Horizontal::Center),
        button(
            column![text("Explore"), chevron_down().size(24)]
                .spacing(8)
                .align_x(Alignment::Center),
        )
        .style(|theme, status| crate::style::toggle::style(theme, status, false))
        .on_press(Message::ScrollToPlayer),
    ]
    .spacing(32)
    .max_width(720)
    .align_x(Alignment::Center);

    stack![
        backdrop,
        container(content)
            .center_x(Length::Fill)
            .center_y(Length::Fill)
            .padding(16),
    ]
    .width(Length::Fill)
    .height(height)
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn progress_is_clamped() {
        assert_eq!(scroll_progress(0.0, 0.0, 800.0, 800.0), 0.5);
        assert_eq!(scroll_progress(800.0, 0.0, 800.0, 800.0), 1.0);
        assert_eq!(scroll_progress(5000.0, 0.0, 800.0, 800.0), 1.0);
        assert_eq!(scroll_progress(0.0, 2000.0, 800.0, 800.0), 0.0);
        assert_eq!(scroll_progress(0.0, 0.0, 0.0, 0.0), 0.0);
    }

    #[test]
    fn deeper_elements_move_faster() {
        let (first, _) = parallax(1.0, 0);
        let (third, _) = parallax(1.0, 2);
        assert!((first + 20.0).abs() < 1e-4);
        assert!((third + 40.0).abs() < 1e-4);
        assert_eq!(parallax(0.0, 1), (0.0, 1.0));
    }

    #[test]
    fn fade_starts_halfway() {
        assert_eq!(parallax(0.5, 0).1, 1.0);
        assert!((parallax(0.75, 0).1 - 0.75).abs() < 1e-6);
        assert!((parallax(1.0, 0).1 - 0.5).abs() < 1e-6);
    }

    #[test]
    fn orbs_follow_progress() {
        let orbs = orbs(1.0);
        assert_eq!(orbs.len(), 3);
        assert!(orbs[1].offset_y < orbs[0].offset_y);
        assert!(orbs.iter().all(|o| (o.opacity - 0.5).abs() < 1e-6));
    }

    #[test]
    fn glide_eases_to_target() {
        let start = Instant::now();
        let glide = Glide::new(0.0, 900.0, start);
        assert_eq!(glide.offset(start), (0.0, false));
        let (mid, done) = glide.offset(start + SCROLL_GLIDE / 2);
        assert!(!done);
        assert!((mid - 450.0).abs() < 1e-3);
        assert_eq!(glide.offset(start + SCROLL_GLIDE + Duration::from_millis(1)), (900.0, true));
    }
}
