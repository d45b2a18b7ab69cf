//! Widget components for the breathing flower screen.
//!
//! - [`flower`]: petals and halo, composited into the [`Canvas`](crate::canvas::Canvas)
//! - [`header`]: header bar with title and FPS counter
//! - [`panel`]: sliders, Breath button, key hints and event log
//! - [`primitives`]: shared low-level drawing utilities
//!
//! # Layout
//!
//! ```text
//! ┌──────────────────────────────┬──────────────┐
//! │ Breathe                      │       50 FPS │  26px
//! ├──────────────────────────────┼──────────────┤
//! │                              │ PETALS     5 │
//! │            flower            │ BREATH  4.2s │
//! │                              │ [ Breath ]   │  214px
//! │                              │ event log    │
//! └──────────────────────────────┴──────────────┘
//!             200px                   120px
//! ```
//!
//! Header and panel draw on any `DrawTarget<Color = Rgb565>`; the flower
//! needs the canvas because it blends with what is already there. Static
//! styles come from [`styles`](crate::styles) and all value formatting uses
//! `heapless::String`.

mod flower;
mod header;
mod panel;
mod primitives;

pub use flower::{FLOWER_AREA, draw_flower};
pub use header::draw_header;
pub use panel::draw_panel;
