//! Low-level drawing primitives shared across widgets.
//!
//! # Slider
//!
//! A 3px track with the part left of the knob in blue and the rest in gray.
//! The knob position is linear in the value:
//! ```text
//! knob_x = x + (value - min) / (max - min) * width
//! ```

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Circle, Line, PrimitiveStyle, Rectangle};

use crate::styles::{KNOB_STYLE, TRACK_FILL_STYLE, TRACK_STYLE};

/// Knob diameter in pixels.
const KNOB_DIAMETER: u32 = 9;

/// Horizontal knob position for `value` on a track from `x` spanning `width`.
pub fn slider_knob_x(
    x: i32,
    width: u32,
    value: f32,
    min: f32,
    max: f32,
) -> i32 {
    let span = max - min;
    let t = if span > 0.0 { ((value - min) / span).clamp(0.0, 1.0) } else { 0.0 };
    x + (t * width as f32).round() as i32
}

/// Draw a horizontal slider with its vertical centre at `y`.
pub fn draw_slider<D>(
    display: &mut D,
    x: i32,
    y: i32,
    width: u32,
    value: f32,
    range: (f32, f32),
) where
    D: DrawTarget<Color = Rgb565>,
{
    let knob_x = slider_knob_x(x, width, value, range.0, range.1);
    let end = Point::new(x + width as i32, y);

    Line::new(Point::new(x, y), end)
        .into_styled(TRACK_STYLE)
        .draw(display)
        .ok();
    Line::new(Point::new(x, y), Point::new(knob_x, y))
        .into_styled(TRACK_FILL_STYLE)
        .draw(display)
        .ok();
    Circle::with_center(Point::new(knob_x, y), KNOB_DIAMETER)
        .into_styled(KNOB_STYLE)
        .draw(display)
        .ok();
}

/// Fill a rectangle with a solid style.
pub fn fill_rect<D>(
    display: &mut D,
    area: Rectangle,
    style: PrimitiveStyle<Rgb565>,
) where
    D: DrawTarget<Color = Rgb565>,
{
    area.into_styled(style).draw(display).ok();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::Canvas;
    use crate::colors::{BLACK, BUTTON_BLUE, GRAY, WHITE};

    #[test]
    fn test_knob_position() {
        assert_eq!(slider_knob_x(10, 100, 2.0, 2.0, 10.0), 10);
        assert_eq!(slider_knob_x(10, 100, 10.0, 2.0, 10.0), 110);
        assert_eq!(slider_knob_x(10, 100, 6.0, 2.0, 10.0), 60);
    }

    #[test]
    fn test_knob_clamped() {
        assert_eq!(slider_knob_x(0, 50, -3.0, 0.0, 10.0), 0);
        assert_eq!(slider_knob_x(0, 50, 30.0, 0.0, 10.0), 50);
        assert_eq!(slider_knob_x(0, 50, 5.0, 1.0, 1.0), 0, "empty range");
    }

    #[test]
    fn test_draw_slider() {
        let mut canvas = Canvas::new(Size::new(120, 20));
        draw_slider(&mut canvas, 10, 10, 100, 5.0, (0.0, 10.0));

        assert_eq!(canvas.pixel(Point::new(30, 10)), Some(BUTTON_BLUE), "filled part");
        assert_eq!(canvas.pixel(Point::new(90, 10)), Some(GRAY), "empty part");
        assert_eq!(canvas.pixel(Point::new(60, 10)), Some(WHITE), "knob");
        assert_eq!(canvas.pixel(Point::new(60, 0)), Some(BLACK));
    }
}
