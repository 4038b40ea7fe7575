use crate::{message::Message, style};
use iced::{Element, Length, widget::canvas};
use rand::Rng;
use rhythm_ripple_widgets::Bars;
use std::ops::RangeInclusive;

pub const BAR_COUNT: usize = 24;
pub const HEIGHT_RANGE: RangeInclusive<u32> = 5..=50;
pub const PAUSED_OPACITY: f32 = 0.3;
const HEIGHT: f32 = 64.0;

/// Decorative bars. Heights only change on [`Visualizer::regenerate`],
/// which the caller schedules while playback runs.
#[derive(Debug, Clone)]
pub struct Visualizer {
    heights: Vec<u32>,
}

impl Visualizer {
    pub fn new<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            heights: random_heights(rng),
        }
    }

    pub fn regenerate<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.heights = random_heights(rng);
    }

    pub fn heights(&self) -> &[u32] {
        &self.heights
    }

    pub fn view(&self, playing: bool) -> Element<'_, Message> {
        canvas(Bars {
            heights: &self.heights,
            color: style::palette::ACCENT,
            opacity: opacity(playing),
        })
        .width(Length::Fill)
        .height(HEIGHT)
        .into()
    }
}

pub fn opacity(playing: bool) -> f32 {
    if playing { 1.0 } else { PAUSED_OPACITY }
}

fn random_heights<R: Rng + ?Sized>(rng: &mut R) -> Vec<u32> {
    (0..BAR_COUNT)
        .map(|_| rng.random_range(HEIGHT_RANGE))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::SmallRng};

    #[test]
    fn heights_stay_in_range() {
        let mut rng = SmallRng::seed_from_u64(11);
        let mut visualizer = Visualizer::new(&mut rng);
        for _ in 0..200 {
            assert_eq!(visualizer.heights().len(), BAR_COUNT);
            assert!(visualizer.heights().iter().all(|h| HEIGHT_RANGE.contains(h)));
            visualizer.regenerate(&mut rng);
        }
    }

    #[test]
    fn same_seed_same_bars() {
        let a = Visualizer::new(&mut SmallRng::seed_from_u64(5));
        let b = Visualizer::new(&mut SmallRng::seed_from_u64(5));
        assert_eq!(a.heights(), b.heights());
    }

    #[test]
    fn regenerate_changes_bars() {
        let mut rng = SmallRng::seed_from_u64(9);
        let mut visualizer = Visualizer::new(&mut rng);
        let before = visualizer.heights().to_vec();
        visualizer.regenerate(&mut rng);
        assert_ne!(visualizer.heights(), before.as_slice());
    }

    #[test]
    fn paused_bars_are_dimmed() {
        assert_eq!(opacity(true), 1.0);
        assert_eq!(opacity(false), PAUSED_OPACITY);
    }
}
