//! Pre-computed static text and primitive styles.
//!
//! `MonoTextStyle`, `TextStyle` and `PrimitiveStyle` constructors are const fn
//! in embedded-graphics 0.8, so every fixed style lives here as a `const`
//! instead of being rebuilt in each draw call.

use embedded_graphics::{
    mono_font::{
        MonoTextStyle,
        ascii::{FONT_6X10, FONT_10X20},
    },
    pixelcolor::Rgb565,
    primitives::PrimitiveStyle,
    text::{Alignment, TextStyle, TextStyleBuilder},
};
use profont::PROFONT_12_POINT;

use crate::colors::{BUTTON_BLUE, BUTTON_BLUE_DIM, GRAY, LIGHT_GRAY, PANEL_BG, WHITE};

// =============================================================================
// Text Alignment Styles
// =============================================================================

/// Centered text alignment. Header title and button label.
pub const CENTERED: TextStyle = TextStyleBuilder::new().alignment(Alignment::Center).build();

/// Left-aligned text. Panel labels and the event log.
pub const LEFT_ALIGNED: TextStyle = TextStyleBuilder::new().alignment(Alignment::Left).build();

/// Right-aligned text. Panel values and the FPS counter.
pub const RIGHT_ALIGNED: TextStyle = TextStyleBuilder::new().alignment(Alignment::Right).build();

// =============================================================================
// Text Styles
// =============================================================================

/// Small white text for labels.
pub const LABEL_STYLE_WHITE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&FONT_6X10, WHITE);

/// Small gray text for the event log and key hints.
pub const LABEL_STYLE_GRAY: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&FONT_6X10, LIGHT_GRAY);

/// Medium white text for the header title.
pub const TITLE_STYLE_WHITE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&FONT_10X20, WHITE);

/// Panel values (`ProFont` 12pt).
pub const VALUE_STYLE_WHITE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&PROFONT_12_POINT, WHITE);

// =============================================================================
// Primitive Styles
// =============================================================================

/// Header bar fill.
pub const HEADER_FILL: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_fill(GRAY);

/// Panel section fill.
pub const PANEL_FILL: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_fill(PANEL_BG);

/// Slider track (3px line).
pub const TRACK_STYLE: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_stroke(GRAY, 3);

/// Filled part of a slider track.
pub const TRACK_FILL_STYLE: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_stroke(BUTTON_BLUE, 3);

/// Slider knob.
pub const KNOB_STYLE: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_fill(WHITE);

/// Breath button at rest.
pub const BUTTON_FILL: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_fill(BUTTON_BLUE);

/// Breath button while a cycle is running.
pub const BUTTON_FILL_BUSY: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_fill(BUTTON_BLUE_DIM);
