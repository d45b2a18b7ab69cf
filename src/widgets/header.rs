//! Header bar rendering.
//!
//! All fixed positions are `const Point` / `const Size`, and the FPS readout
//! is formatted into a `heapless::String` with `core::fmt::Write`.

use core::fmt::Write;

use embedded_graphics::{pixelcolor::Rgb565, prelude::*, primitives::Rectangle, text::Text};
use heapless::String;

use crate::{
    config::{FLOWER_AREA_WIDTH, HEADER_HEIGHT, SCREEN_WIDTH},
    styles::{CENTERED, HEADER_FILL, LABEL_STYLE_WHITE, RIGHT_ALIGNED, TITLE_STYLE_WHITE},
};

/// Title, centred over the flower area.
const HEADER_TITLE_POS: Point = Point::new((FLOWER_AREA_WIDTH / 2) as i32, 19);

/// FPS counter (right-aligned, 5px from edge).
const HEADER_FPS_POS: Point = Point::new((SCREEN_WIDTH - 5) as i32, 17);

const HEADER_RECT: Rectangle = Rectangle::new(Point::new(0, 0), Size::new(SCREEN_WIDTH, HEADER_HEIGHT));

/// Draw the header bar with title and optional FPS counter.
pub fn draw_header<D>(
    display: &mut D,
    show_fps: bool,
    fps: f32,
) where
    D: DrawTarget<Color = Rgb565>,
{
    HEADER_RECT.into_styled(HEADER_FILL).draw(display).ok();

    Text::with_text_style("Breathe", HEADER_TITLE_POS, TITLE_STYLE_WHITE, CENTERED)
        .draw(display)
        .ok();

    if show_fps {
        let mut fps_str: String<16> = String::new();
        let _ = write!(fps_str, "{fps:.0} FPS");
        Text::with_text_style(&fps_str, HEADER_FPS_POS, LABEL_STYLE_WHITE, RIGHT_ALIGNED)
            .draw(display)
            .ok();
    }
}

#[cfg(test)]
mod tests {
    use embedded_graphics::primitives::PointsIter;

    use super::*;
    use crate::canvas::Canvas;
    use crate::colors::{GRAY, WHITE};
    use crate::config::SCREEN_HEIGHT;

    fn count_white(canvas: &Canvas, area: Rectangle) -> usize {
        area.points()
            .filter(|&p| canvas.pixel(p) == Some(WHITE))
            .count()
    }

    const FPS_AREA: Rectangle = Rectangle::new(Point::new(240, 0), Size::new(80, 26));

    #[test]
    fn test_header_background() {
        let mut canvas = Canvas::new(Size::new(SCREEN_WIDTH, SCREEN_HEIGHT));
        draw_header(&mut canvas, false, 0.0);

        assert_eq!(canvas.pixel(Point::new(2, 2)), Some(GRAY));
        assert_ne!(canvas.pixel(Point::new(2, HEADER_HEIGHT as i32)), Some(GRAY));
        assert!(count_white(&canvas, HEADER_RECT) > 0, "title drawn");
    }

    #[test]
    fn test_fps_readout_toggle() {
        let mut shown = Canvas::new(Size::new(SCREEN_WIDTH, SCREEN_HEIGHT));
        draw_header(&mut shown, true, 50.0);
        assert!(count_white(&shown, FPS_AREA) > 0);

        let mut hidden = Canvas::new(Size::new(SCREEN_WIDTH, SCREEN_HEIGHT));
        draw_header(&mut hidden, false, 50.0);
        assert_eq!(count_white(&hidden, FPS_AREA), 0);
    }
}
