//! Off-screen RGB565 framebuffer with alpha blending.
//!
//! Everything is drawn here first and then copied to the window in one
//! [`Canvas::present`] call. The canvas implements `DrawTarget`, so the usual
//! embedded-graphics primitives and text draw on it directly; translucent
//! petals go through [`Canvas::blend_circle`], which reads back the pixels
//! underneath.

use core::convert::Infallible;

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Circle, PointsIter, Rectangle};

use crate::colors::{BLACK, blend};

/// Row-major RGB565 framebuffer.
#[derive(Clone, Debug)]
pub struct Canvas {
    width: u32,
    height: u32,
    pixels: Vec<Rgb565>,
}

impl Canvas {
    /// Create a black canvas.
    pub fn new(size: Size) -> Self {
        Self {
            width: size.width,
            height: size.height,
            pixels: vec![BLACK; (size.width * size.height) as usize],
        }
    }

    #[inline]
    fn index(&self, point: Point) -> Option<usize> {
        let (x, y) = (point.x, point.y);
        if x < 0 || y < 0 || x as u32 >= self.width || y as u32 >= self.height {
            return None;
        }
        Some(y as usize * self.width as usize + x as usize)
    }

    /// Color at `point`, or `None` outside the canvas.
    #[inline]
    pub fn pixel(&self, point: Point) -> Option<Rgb565> {
        self.index(point).map(|i| self.pixels[i])
    }

    /// Composite `color` at `point` with opacity `alpha`. Ignored outside the canvas.
    #[inline]
    pub fn blend_pixel(
        &mut self,
        point: Point,
        color: Rgb565,
        alpha: f32,
    ) {
        if let Some(i) = self.index(point) {
            self.pixels[i] = blend(self.pixels[i], color, alpha);
        }
    }

    /// Composite a filled circle with opacity `alpha`, clipped to `clip`.
    pub fn blend_circle(
        &mut self,
        center: Point,
        diameter: u32,
        color: Rgb565,
        alpha: f32,
        clip: &Rectangle,
    ) {
        if diameter == 0 || alpha <= 0.0 {
            return;
        }
        for point in Circle::with_center(center, diameter).points() {
            if clip.contains(point) {
                self.blend_pixel(point, color, alpha);
            }
        }
    }

    /// Raw pixels, row-major.
    #[inline]
    pub fn pixels(&self) -> &[Rgb565] {
        &self.pixels
    }

    /// Copy the whole canvas onto `target` at the origin.
    pub fn present<D>(&self, target: &mut D) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb565>,
    {
        target.fill_contiguous(&self.bounding_box(), self.pixels.iter().copied())
    }
}

impl OriginDimensions for Canvas {
    fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}

impl DrawTarget for Canvas {
    type Color = Rgb565;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            if let Some(i) = self.index(point) {
                self.pixels[i] = color;
            }
        }
        Ok(())
    }
}
