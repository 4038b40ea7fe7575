use iced::widget::canvas::{self, Frame, Geometry, Path};
use iced::{Color, Point, Rectangle, Renderer, Size, Theme, mouse};

const BAR_WIDTH: f32 = 4.0;
const BAR_GAP: f32 = 3.0;

/// Bottom-aligned bars, centered horizontally. Heights are in pixels and
/// are clipped to the canvas height.
#[derive(Debug, Clone)]
pub struct Bars<'a> {
    pub heights: &'a [u32],
    pub color: Color,
    pub opacity: f32,
}

impl<Message> canvas::Program<Message> for Bars<'_> {
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
        let count = self.heights.len() as f32;
        let total = count * BAR_WIDTH + (count - 1.0).max(0.0) * BAR_GAP;
        let left = ((bounds.width - total) / 2.0).max(0.0);
        let color = Color {
            a: self.color.a * self.opacity.clamp(0.0, 1.0),
            ..self.color
        };

        for (i, height) in self.heights.iter().enumerate() {
            let h = (*height as f32).min(bounds.height);
            let x = left + i as f32 * (BAR_WIDTH + BAR_GAP);
            frame.fill(
                &Path::rectangle(
                    Point::new(x, bounds.height - h),
                    Size::new(BAR_WIDTH, h),
                ),
                color,
            );
        }

        vec![frame.into_geometry()]
    }
}
