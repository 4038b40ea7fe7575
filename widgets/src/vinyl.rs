use iced::alignment::{Horizontal, Vertical};
use iced::widget::canvas::{self, Frame, Geometry, Path, Stroke, Text};
use iced::{Color, Pixels, Point, Rectangle, Renderer, Size, Theme, Vector, mouse};

/// Layout unit: the record is designed on a 256 px square.
const DESIGN_SIZE: f32 = 256.0;

/// Groove rings as (inset from the rim, stroke width) in design pixels.
const GROOVES: [(f32, f32); 4] = [(16.0, 4.0), (32.0, 2.0), (48.0, 1.0), (64.0, 1.0)];

const DISK: Color = Color::from_rgb(0.04, 0.04, 0.05);
const GROOVE: Color = Color::from_rgb(0.12, 0.13, 0.15);
const ARM: Color = Color::from_rgb(0.29, 0.31, 0.34);
const ARM_BASE: Color = Color::from_rgb(0.22, 0.24, 0.27);
const NEEDLE: Color = Color::from_rgb(0.62, 0.64, 0.67);

/// A turntable record with a center label and a tonearm.
///
/// The caller owns the animation: `angle` is the disk rotation,
/// `tonearm` the arm swing (both radians) and `scale` the pulse factor
/// applied to the disk.
#[derive(Debug, Clone)]
pub struct Vinyl {
    pub angle: f32,
    pub tonearm: f32,
    pub scale: f32,
    pub label: String,
    pub label_color: Color,
}

impl<Message> canvas::Program<Message> for Vinyl {
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
        let side = bounds.width.min(bounds.height);
        let unit = side / DESIGN_SIZE;
        let origin = Point::new((bounds.width - side) / 2.0, (bounds.height - side) / 2.0);
        let center = origin + Vector::new(side / 2.0, side / 2.0);
        let radius = side / 2.0;

        frame.with_save(|frame| {
            frame.translate(Vector::new(center.x, center.y));
            frame.scale(self.scale);
            frame.rotate(self.angle);

            frame.fill(&Path::circle(Point::ORIGIN, radius), DISK);
            for (inset, width) in GROOVES {
                frame.stroke(
                    &Path::circle(Point::ORIGIN, radius - inset * unit),
                    Stroke::default()
                        .with_color(GROOVE)
                        .with_width(width * unit),
                );
            }

            frame.fill(&Path::circle(Point::ORIGIN, 32.0 * unit), self.label_color);
            frame.fill_text(Text {
                content: self.label.clone(),
                position: Point::ORIGIN,
                color: Color::WHITE,
                size: Pixels(7.0 * unit),
                align_x: Horizontal::Center.into(),
                align_y: Vertical::Center,
                ..Default::default()
            });
            frame.fill(&Path::circle(Point::ORIGIN, 4.0 * unit), DISK);
        });

        // Static sheen, it must not turn with the disk.
        frame.with_save(|frame| {
            frame.translate(Vector::new(center.x, center.y));
            frame.scale(self.scale);
            frame.fill(
                &Path::circle(Point::new(-radius * 0.18, -radius * 0.18), radius * 0.78),
                Color::from_rgba(0.85, 0.85, 0.9, 0.05),
            );
        });

        let pivot = origin + Vector::new(side - 16.0 * unit, 16.0 * unit);
        frame.with_save(|frame| {
            frame.translate(Vector::new(pivot.x, pivot.y));
            frame.rotate(self.tonearm);

            let arm_length = 150.0 * unit;
            frame.fill(
                &Path::rectangle(
                    Point::new(-4.0 * unit, 0.0),
                    Size::new(8.0 * unit, arm_length),
                ),
                ARM,
            );
            frame.fill(
                &Path::rectangle(
                    Point::new(-8.0 * unit, arm_length - 4.0 * unit),
                    Size::new(16.0 * unit, 24.0 * unit),
                ),
                ARM,
            );
            frame.stroke(
                &Path::line(
                    Point::new(0.0, arm_length + 20.0 * unit),
                    Point::new(0.0, arm_length + 32.0 * unit),
                ),
                Stroke::default().with_color(NEEDLE).with_width(2.0 * unit),
            );
            frame.fill(&Path::circle(Point::ORIGIN, 16.0 * unit), ARM_BASE);
        });

        vec![frame.into_geometry()]
    }
}
