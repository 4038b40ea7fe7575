use iced::widget::canvas::{self, Frame, Geometry, Path};
use iced::{Color, Point, Rectangle, Renderer, Theme, mouse};

/// Number of rings used to fake a blurred edge.
const GLOW_STEPS: usize = 8;

/// A soft colored disc placed relative to the canvas size.
#[derive(Debug, Clone, Copy)]
pub struct Orb {
    /// Center as a fraction of the canvas width/height.
    pub anchor: (f32, f32),
    pub radius: f32,
    pub color: Color,
    /// Vertical displacement in pixels.
    pub offset_y: f32,
    pub opacity: f32,
}

#[derive(Debug, Clone)]
pub struct Backdrop {
    pub orbs: Vec<Orb>,
}

impl<Message> canvas::Program<Message> for Backdrop {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());

        for orb in &self.orbs {
            let center = Point::new(
                bounds.width * orb.anchor.0,
                bounds.height * orb.anchor.1 + orb.offset_y,
            );
            let opacity = orb.opacity.clamp(0.0, 1.0);
            for step in 0..GLOW_STEPS {
                let t = step as f32 / GLOW_STEPS as f32;
                let radius = orb.radius * (1.6 - t);
                frame.fill(
                    &Path::circle(center, radius),
                    Color {
                        a: orb.color.a * opacity / GLOW_STEPS as f32,
                        ..orb.color
                    },
                );
            }
        }

        vec![frame.into_geometry()]
    }
}
