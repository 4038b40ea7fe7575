use iced::advanced::Shell;
use iced::advanced::layout::{self, Layout};
use iced::advanced::renderer;
use iced::advanced::widget::{self, Tree, Widget};
use iced::mouse;
use iced::{Border, Color, Element, Event, Length, Point, Rectangle, Size};

#[derive(Debug, Clone, Copy)]
pub struct SliderColors {
    pub rail: Color,
    pub filled: Color,
    pub handle: Color,
}

impl Default for SliderColors {
    fn default() -> Self {
        Self {
            rail: Color::from_rgba(1.0, 1.0, 1.0, 0.15),
            filled: Color::from_rgb(0.55, 0.36, 0.96),
            handle: Color::WHITE,
        }
    }
}

/// A flat seek/volume bar filled from the start of the range up to the
/// handle. Publishes on press and while dragging.
pub struct HorizontalSlider<'a, Message> {
    range: std::ops::RangeInclusive<f32>,
    value: f32,
    on_change: Box<dyn Fn(f32) -> Message + 'a>,
    width: Length,
    height: Length,
    rail_height: f32,
    handle_radius: f32,
    colors: SliderColors,
}

impl<'a, Message> HorizontalSlider<'a, Message> {
    pub fn new<F>(range: std::ops::RangeInclusive<f32>, value: f32, on_change: F) -> Self
    where
        F: Fn(f32) -> Message + 'a,
    {
        Self {
            range,
            value,
            on_change: Box::new(on_change),
            width: Length::Fill,
            height: Length::Fixed(16.0),
            rail_height: 4.0,
            handle_radius: 6.0,
            colors: SliderColors::default(),
        }
    }

    pub fn width(mut self, width: impl Into<Length>) -> Self {
        self.width = width.into();
        self
    }

    pub fn height(mut self, height: impl Into<Length>) -> Self {
        self.height = height.into();
        self
    }

    pub fn colors(mut self, colors: SliderColors) -> Self {
        self.colors = colors;
        self
    }

    fn normalized(&self) -> f32 {
        normalized(&self.range, self.value)
    }
}

/// Position of `value` inside `range` as a fraction in `[0, 1]`.
/// A degenerate range reports zero.
pub fn normalized(range: &std::ops::RangeInclusive<f32>, value: f32) -> f32 {
    let span = range.end() - range.start();
    if span <= f32::EPSILON || !value.is_finite() {
        return 0.0;
    }
    ((value - range.start()) / span).clamp(0.0, 1.0)
}

/// Value under horizontal offset `x` of a bar `width` pixels wide.
pub fn value_at(range: &std::ops::RangeInclusive<f32>, x: f32, width: f32) -> f32 {
    if width <= 0.0 {
        return *range.start();
    }
    let normalized = (x / width).clamp(0.0, 1.0);
    let value = range.start() + normalized * (range.end() - range.start());
    value.clamp(*range.start(), *range.end())
}

#[derive(Default)]
struct State {
    is_dragging: bool,
}

impl<'a, Message, Theme, Renderer> Widget<Message, Theme, Renderer> for HorizontalSlider<'a, Message>
where
    Renderer: renderer::Renderer,
{
    fn size(&self) -> Size<Length> {
        Size {
            width: self.width,
            height: self.height,
        }
    }

    fn layout(
        &mut self,
        _tree: &mut Tree,
        _renderer: &Renderer,
        limits: &layout::Limits,
    ) -> layout::Node {
        let size = limits.width(self.width).height(self.height).resolve(
            self.width,
            self.height,
            Size::ZERO,
        );

        layout::Node::new(size)
    }

    fn draw(
        &self,
        _tree: &Tree,
        renderer: &mut Renderer,
        _theme: &Theme,
        _style: &renderer::Style,
        layout: Layout<'_>,
        _cursor: mouse::Cursor,
        _viewport: &Rectangle,
    ) {
        let bounds = layout.bounds();
        let rail_y = bounds.y + (bounds.height - self.rail_height) / 2.0;
        let rail_radius = self.rail_height / 2.0;
        let handle_x = (bounds.x + bounds.width * self.normalized()).round();

        renderer.fill_quad(
            renderer::Quad {
                bounds: Rectangle {
                    x: bounds.x,
                    y: rail_y,
                    width: bounds.width,
                    height: self.rail_height,
                },
                border: Border {
                    radius: rail_radius.into(),
                    width: 0.0,
                    color: Color::TRANSPARENT,
                },
                ..Default::default()
            },
            self.colors.rail,
        );

        let filled_width = (handle_x - bounds.x).max(0.0);
        if filled_width > 0.0 {
            renderer.fill_quad(
                renderer::Quad {
                    bounds: Rectangle {
                        x: bounds.x,
                        y: rail_y,
                        width: filled_width,
                        height: self.rail_height,
                    },
                    border: Border {
                        radius: rail_radius.into(),
                        width: 0.0,
                        color: Color::TRANSPARENT,
                    },
                    ..Default::default()
                },
                self.colors.filled,
            );
        }

        let diameter = self.handle_radius * 2.0;
        renderer.fill_quad(
            renderer::Quad {
                bounds: Rectangle {
                    x: handle_x - self.handle_radius,
                    y: bounds.y + (bounds.height - diameter) / 2.0,
                    width: diameter,
                    height: diameter,
                },
                border: Border {
                    radius: self.handle_radius.into(),
                    width: 1.0,
                    color: self.colors.filled,
                },
                ..Default::default()
            },
            self.colors.handle,
        );
    }

    fn tag(&self) -> widget::tree::Tag {
        widget::tree::Tag::of::<State>()
    }

    fn state(&self) -> widget::tree::State {
        widget::tree::State::new(State::default())
    }

    fn update(
        &mut self,
        tree: &mut Tree,
        event: &Event,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        _renderer: &Renderer,
        _clipboard: &mut dyn iced::advanced::Clipboard,
        shell: &mut Shell<'_, Message>,
        _viewport: &Rectangle,
    ) {
        let state = tree.state.downcast_mut::<State>();
        let bounds = layout.bounds();

        match event {
            Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
                if cursor.is_over(bounds)
                    && let Some(cursor_position) = cursor.position()
                {
                    state.is_dragging = true;
                    shell.publish((self.on_change)(self.calculate_value(cursor_position, bounds)));
                    shell.capture_event();
                }
            }
            Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)) => {
                state.is_dragging = false;
            }
            Event::Mouse(mouse::Event::CursorMoved { .. }) => {
                if state.is_dragging
                    && let Some(cursor_position) = cursor.position()
                {
                    shell.publish((self.on_change)(self.calculate_value(cursor_position, bounds)));
                }
            }
            _ => {}
        }
    }

    fn mouse_interaction(
        &self,
        _tree: &Tree,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        _viewport: &Rectangle,
        _renderer: &Renderer,
    ) -> mouse::Interaction {
        if cursor.is_over(layout.bounds()) {
            mouse::Interaction::Pointer
        } else {
            mouse::Interaction::default()
        }
    }
}

impl<'a, Message> HorizontalSlider<'a, Message> {
    fn calculate_value(&self, cursor_position: Point, bounds: Rectangle) -> f32 {
        value_at(&self.range, cursor_position.x - bounds.x, bounds.width)
    }
}

impl<'a, Message, Theme, Renderer> From<HorizontalSlider<'a, Message>>
    for Element<'a, Message, Theme, Renderer>
where
    Message: 'a,
    Theme: 'a,
    Renderer: renderer::Renderer + 'a,
{
    fn from(slider: HorizontalSlider<'a, Message>) -> Self {
        Self::new(slider)
    }
}
