//! Control panel on the right of the flower.
//!
//! ```text
//! ┌──────────────────┐
//! │ PETALS         5 │
//! │ ━━━━━━━●──────── │
//! │ BREATH      4.2s │
//! │ ━━━━━━━━━━━●──── │
//! │ [    Breath    ] │
//! │ </>  petals      │
//! │ ^/v  breath      │
//! │ spc  breathe     │
//! │ event log (3)    │
//! └──────────────────┘
//! ```
//!
//! The panel only changes when a control value, the button state or the log
//! changes, so the caller redraws it conditionally
//! (see [`PanelState`](crate::render::PanelState)).

use core::fmt::Write;

use embedded_graphics::{pixelcolor::Rgb565, prelude::*, primitives::Rectangle, text::Text};
use heapless::String;

use super::primitives::{draw_slider, fill_rect};
use crate::{
    config::{
        BREATH_DURATION_MAX,
        BREATH_DURATION_MIN,
        HEADER_HEIGHT,
        PANEL_WIDTH,
        PANEL_X,
        PETAL_COUNT_MAX,
        PETAL_COUNT_MIN,
        SCREEN_HEIGHT,
    },
    profiling::EventLog,
    state::{PetalCount, Snapshot},
    styles::{
        BUTTON_FILL,
        BUTTON_FILL_BUSY,
        CENTERED,
        LABEL_STYLE_GRAY,
        LABEL_STYLE_WHITE,
        LEFT_ALIGNED,
        PANEL_FILL,
        RIGHT_ALIGNED,
        VALUE_STYLE_WHITE,
    },
};

// =============================================================================
// Layout Constants
// =============================================================================

const PANEL_RECT: Rectangle = Rectangle::new(
    Point::new(PANEL_X, HEADER_HEIGHT as i32),
    Size::new(PANEL_WIDTH, SCREEN_HEIGHT - HEADER_HEIGHT),
);

const LABEL_X: i32 = PANEL_X + 6;
const VALUE_X: i32 = PANEL_X + PANEL_WIDTH as i32 - 6;

const SLIDER_X: i32 = PANEL_X + 10;
const SLIDER_WIDTH: u32 = PANEL_WIDTH - 20;

const PETALS_LABEL_Y: i32 = 44;
const PETALS_SLIDER_Y: i32 = 56;
const BREATH_LABEL_Y: i32 = 80;
const BREATH_SLIDER_Y: i32 = 92;

/// Breath button area.
pub const BUTTON_RECT: Rectangle = Rectangle::new(Point::new(LABEL_X, 104), Size::new(PANEL_WIDTH - 12, 22));
const BUTTON_LABEL_POS: Point = Point::new(PANEL_X + PANEL_WIDTH as i32 / 2, 119);

const HINTS: [&str; 3] = ["</>  petals", "^/v  breath", "spc  breathe"];
const HINTS_Y: i32 = 142;
const LOG_Y: i32 = 196;
const LINE_HEIGHT: i32 = 12;

// =============================================================================
// Drawing
// =============================================================================

/// Draw the whole control panel.
pub fn draw_panel<D>(
    display: &mut D,
    snapshot: &Snapshot,
    log: &EventLog,
) where
    D: DrawTarget<Color = Rgb565>,
{
    fill_rect(display, PANEL_RECT, PANEL_FILL);

    let mut value: String<8> = String::new();

    // Petal slider: the label shows whole petals, the knob the exact count
    let _ = write!(value, "{}", PetalCount::new(snapshot.petal_count).whole());
    draw_row(display, "PETALS", &value, PETALS_LABEL_Y);
    draw_slider(
        display,
        SLIDER_X,
        PETALS_SLIDER_Y,
        SLIDER_WIDTH,
        snapshot.petal_count,
        (PETAL_COUNT_MIN, PETAL_COUNT_MAX),
    );

    // Breath slider
    value.clear();
    let seconds = snapshot.breath_duration.seconds();
    let _ = write!(value, "{seconds:.1}s");
    draw_row(display, "BREATH", &value, BREATH_LABEL_Y);
    draw_slider(
        display,
        SLIDER_X,
        BREATH_SLIDER_Y,
        SLIDER_WIDTH,
        seconds,
        (BREATH_DURATION_MIN, BREATH_DURATION_MAX),
    );

    draw_button(display, snapshot.breathing);

    for (i, hint) in HINTS.iter().enumerate() {
        let pos = Point::new(LABEL_X, HINTS_Y + i as i32 * LINE_HEIGHT);
        Text::with_text_style(hint, pos, LABEL_STYLE_GRAY, LEFT_ALIGNED)
            .draw(display)
            .ok();
    }

    for (i, line) in log.iter().enumerate() {
        let pos = Point::new(LABEL_X, LOG_Y + i as i32 * LINE_HEIGHT);
        Text::with_text_style(line, pos, LABEL_STYLE_WHITE, LEFT_ALIGNED)
            .draw(display)
            .ok();
    }
}

fn draw_row<D>(
    display: &mut D,
    label: &str,
    value: &str,
    y: i32,
) where
    D: DrawTarget<Color = Rgb565>,
{
    Text::with_text_style(label, Point::new(LABEL_X, y), LABEL_STYLE_WHITE, LEFT_ALIGNED)
        .draw(display)
        .ok();
    Text::with_text_style(value, Point::new(VALUE_X, y), VALUE_STYLE_WHITE, RIGHT_ALIGNED)
        .draw(display)
        .ok();
}

/// Breath button, dimmed while a cycle is in flight.
fn draw_button<D>(
    display: &mut D,
    busy: bool,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let style = if busy { BUTTON_FILL_BUSY } else { BUTTON_FILL };
    fill_rect(display, BUTTON_RECT, style);
    Text::with_text_style("Breath", BUTTON_LABEL_POS, LABEL_STYLE_WHITE, CENTERED)
        .draw(display)
        .ok();
}
