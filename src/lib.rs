// Crate-level lints: Allow common embedded/graphics patterns that pedantic lints flag
#![allow(clippy::cast_possible_truncation)] // Intentional f32->i32, u32->i32 casts for pixel math
#![allow(clippy::cast_precision_loss)] // u32/i32->f32 in graphics calculations
#![allow(clippy::cast_possible_wrap)] // u32->i32 wrapping is acceptable for our value ranges
#![allow(clippy::cast_sign_loss)] // f32->u32 where the value is clamped non-negative
#![allow(clippy::float_cmp)] // Exact comparisons against clamped endpoints and targets

//! Breathing flower screen for a 320×240 RGB565 display.
//!
//! A flower of translucent pink petals whose count is set with a slider and
//! which can "breathe": collapse into a small rotated cluster and bloom back
//! out, paced by a second slider.
//!
//! # Data Flow
//!
//! ```text
//! keys ─▶ input::Controls ─▶ state::ScreenState ─▶ Snapshot
//!                              │  breath::BreathCycle (timer::TimerQueue)
//!                              ▼
//!          animations::FlowerAnimator ─▶ FlowerPose ─▶ render::render ─▶ FlowerFrame
//!                                                                           │
//!                               widgets::{draw_flower, draw_header, draw_panel}
//!                                                                           ▼
//!                                                        canvas::Canvas ─▶ window
//! ```
//!
//! - [`geometry`]: petal angles and the fade of the petal being added or removed
//! - [`breath`]: minimize, restore, then reset the animation duration
//! - [`state`]: the screen model, mutated only through explicit setters
//! - [`animations`]: eased tweens driven by wall-clock time
//! - [`render`]: pure layout of petals and halo, plus redraw tracking
//!
//! All time is passed in as a [`Duration`](std::time::Duration) since program
//! start, so every operation is deterministic under test.

pub mod animations;
pub mod breath;
pub mod canvas;
pub mod colors;
pub mod config;
pub mod error;
pub mod geometry;
pub mod input;
pub mod profiling;
pub mod render;
pub mod state;
pub mod styles;
pub mod timer;
pub mod widgets;

pub use error::{FlowerError, Result};
