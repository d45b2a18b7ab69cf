//! Color constants and blending for the RGB565 screen.
//!
//! ## Rgb565 Color Format
//!
//! Rgb565 uses 16 bits per pixel: 5 bits red, 6 bits green, 5 bits blue.
//! - Red: 0-31 (5 bits)
//! - Green: 0-63 (6 bits)
//! - Blue: 0-31 (5 bits)
//!
//! The display has no alpha channel, so translucent petals are composited in
//! software by [`blend`] against whatever is already in the framebuffer.

use embedded_graphics::pixelcolor::{Rgb565, RgbColor};
use embedded_graphics::prelude::IntoStorage;

// =============================================================================
// Standard Colors
// =============================================================================

/// Pure black (0, 0, 0). Screen background.
pub const BLACK: Rgb565 = Rgb565::BLACK;

/// Pure white (31, 63, 31). Text on dark backgrounds.
pub const WHITE: Rgb565 = Rgb565::WHITE;

// =============================================================================
// Custom Colors
// =============================================================================

/// Petal pink, close to the iOS system pink (255, 45, 85).
pub const PETAL_PINK: Rgb565 = Rgb565::new(31, 11, 10);

/// Button blue, close to the iOS system blue (0, 122, 255).
pub const BUTTON_BLUE: Rgb565 = Rgb565::new(0, 30, 31);

/// Dimmed button blue shown while a breath is running.
pub const BUTTON_BLUE_DIM: Rgb565 = Rgb565::new(0, 15, 16);

/// Dark gray for the header bar and slider tracks.
pub const GRAY: Rgb565 = Rgb565::new(8, 16, 8);

/// Light gray for secondary text.
pub const LIGHT_GRAY: Rgb565 = Rgb565::new(20, 40, 20);

/// Grouped-list section background.
pub const PANEL_BG: Rgb565 = Rgb565::new(3, 7, 4);

// =============================================================================
// Blending
// =============================================================================

#[inline]
fn channels(color: Rgb565) -> (i32, i32, i32) {
    let raw = color.into_storage();
    (
        ((raw >> 11) & 0x1F) as i32,
        ((raw >> 5) & 0x3F) as i32,
        (raw & 0x1F) as i32,
    )
}

/// Composite `src` over `dst` with opacity `alpha` (clamped to `[0, 1]`).
///
/// Uses 8-bit fixed-point weights per channel.
pub fn blend(
    dst: Rgb565,
    src: Rgb565,
    alpha: f32,
) -> Rgb565 {
    let a = (alpha.clamp(0.0, 1.0) * 256.0) as i32;
    if a == 0 {
        return dst;
    }
    if a >= 256 {
        return src;
    }

    let (dr, dg, db) = channels(dst);
    let (sr, sg, sb) = channels(src);
    let mix = |d: i32, s: i32| d + (((s - d) * a) >> 8);

    Rgb565::new(
        mix(dr, sr).clamp(0, 31) as u8,
        mix(dg, sg).clamp(0, 63) as u8,
        mix(db, sb).clamp(0, 31) as u8,
    )
}
