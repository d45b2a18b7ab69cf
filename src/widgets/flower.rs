//! Flower area drawing.
//!
//! The flower area is cleared and redrawn every frame. Petals are composited
//! with [`Canvas::blend_circle`], so overlapping petals build up colour the
//! way translucent layers do. The halo is drawn first, underneath.

use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};
use embedded_graphics::pixelcolor::Rgb565;

use crate::canvas::Canvas;
use crate::colors::{BLACK, PETAL_PINK};
use crate::config::{FLOWER_AREA_WIDTH, HEADER_HEIGHT, PETAL_OPACITY, SCREEN_HEIGHT};
use crate::render::{FlowerFrame, PetalLayout};

/// Flower area below the header, left of the panel.
pub const FLOWER_AREA: Rectangle = Rectangle::new(
    Point::new(0, HEADER_HEIGHT as i32),
    Size::new(FLOWER_AREA_WIDTH, SCREEN_HEIGHT - HEADER_HEIGHT),
);

const AREA_FILL: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_fill(BLACK);

/// Clear the flower area and draw `frame` into it. Returns the number of
/// petals composited.
pub fn draw_flower(
    canvas: &mut Canvas,
    frame: &FlowerFrame,
) -> u32 {
    FLOWER_AREA.into_styled(AREA_FILL).draw(canvas).ok();

    let mut drawn = 0;
    if let Some(halo) = &frame.halo {
        drawn += draw_petals(canvas, &halo.petals, halo.opacity);
    }
    drawn + draw_petals(canvas, &frame.petals, 1.0)
}

fn draw_petals(
    canvas: &mut Canvas,
    petals: &[PetalLayout],
    opacity: f32,
) -> u32 {
    let mut drawn = 0;
    for petal in petals {
        let alpha = PETAL_OPACITY * petal.opacity * opacity;
        if alpha <= 0.0 {
            continue;
        }
        canvas.blend_circle(petal.center, petal.diameter(), PETAL_PINK, alpha, &FLOWER_AREA);
        drawn += 1;
    }
    drawn
}
