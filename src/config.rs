//! Application configuration.
//!
//! Compile-time constants for the screen, timing, control ranges and flower
//! geometry, plus the runtime [`Settings`] the screen model is built from.
//!
//! # Pre-computed Layout Constants
//!
//! Fixed positions such as the flower centre and the panel origin are `const`
//! so drawing code never re-derives them per frame.

use std::time::Duration;

use tracing::Level;

use crate::breath::ReentryPolicy;
use crate::error::{FlowerError, Result};

// =============================================================================
// Display Configuration
// =============================================================================

/// Display width in pixels.
pub const SCREEN_WIDTH: u32 = 320;

/// Display height in pixels.
pub const SCREEN_HEIGHT: u32 = 240;

/// Header bar height in pixels.
pub const HEADER_HEIGHT: u32 = 26;

/// Width of the flower area on the left of the screen.
pub const FLOWER_AREA_WIDTH: u32 = 200;

/// Width of the control panel on the right of the screen.
pub const PANEL_WIDTH: u32 = SCREEN_WIDTH - FLOWER_AREA_WIDTH;

/// Left edge of the control panel.
pub const PANEL_X: i32 = FLOWER_AREA_WIDTH as i32;

/// Flower centre X coordinate (middle of the flower area).
pub const FLOWER_CENTER_X: i32 = (FLOWER_AREA_WIDTH / 2) as i32;

/// Flower centre Y coordinate (middle of the area below the header).
pub const FLOWER_CENTER_Y: i32 = (HEADER_HEIGHT + (SCREEN_HEIGHT - HEADER_HEIGHT) / 2) as i32;

// =============================================================================
// Timing Configuration
// =============================================================================

/// Target frame time (~50 FPS). The main loop sleeps if frame completes early.
pub const FRAME_TIME: Duration = Duration::from_millis(20);

/// Duration of petal addition/removal animations, in seconds.
/// Also the resting value of the active animation duration.
pub const PETAL_DURATION: f32 = 0.5;

/// Share of the breath duration used by the halo removal fade.
pub const FADE_RATIO: f32 = 0.6;

/// Duration of the halo insertion fade, in seconds.
pub const HALO_INSERT_DURATION: f32 = 0.35;

/// Petals per second added or removed while a petal key is held.
pub const PETAL_DRAG_RATE: f32 = 2.0;

/// Maximum level emitted by the tracing subscriber.
pub const LOG_LEVEL: Level = Level::INFO;

// =============================================================================
// Control Ranges
// =============================================================================

/// Fewest petals the slider allows.
pub const PETAL_COUNT_MIN: f32 = 2.0;

/// Most petals the slider allows.
pub const PETAL_COUNT_MAX: f32 = 10.0;

/// Upper bound on rendered petals: `floor(PETAL_COUNT_MAX) + 1`.
pub const MAX_PETALS: usize = 11;

/// Shortest breath, in seconds.
pub const BREATH_DURATION_MIN: f32 = 0.0;

/// Longest breath, in seconds.
pub const BREATH_DURATION_MAX: f32 = 10.0;

/// Breath slider step, in seconds.
pub const BREATH_DURATION_STEP: f32 = 0.1;

// =============================================================================
// Flower Geometry
// =============================================================================

/// Diameter of each petal in pixels.
pub const PETAL_DIAMETER: u32 = 80;

/// Opacity of each petal; lets overlapping petals show through.
pub const PETAL_OPACITY: f32 = 0.6;

/// Cluster scale when minimized.
pub const MINIMIZED_SCALE: f32 = 0.3;

/// Cluster rotation when minimized, in degrees.
pub const MINIMIZED_ROTATION: f32 = -90.0;

/// Fixed rotation applied to the whole flower, in degrees.
pub const ORIENTATION_ROTATION: f32 = -60.0;

/// Halo opacity at rest.
pub const HALO_OPACITY: f32 = 0.7;

/// Halo scale at the end of its removal transition.
pub const HALO_REMOVED_SCALE: f32 = 1.5;

// =============================================================================
// Runtime Settings
// =============================================================================

/// Startup values for the screen model.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Settings {
    /// Initial petal count.
    pub petal_count: f32,
    /// Initial breath duration in seconds.
    pub breath_duration: f32,
    /// Petal diameter in pixels.
    pub petal_diameter: u32,
    /// What a Breath press does while a cycle is still running.
    pub reentry: ReentryPolicy,
}

impl Settings {
    /// Check every field against its allowed range.
    pub fn validate(&self) -> Result<()> {
        if !(PETAL_COUNT_MIN..=PETAL_COUNT_MAX).contains(&self.petal_count) {
            return Err(FlowerError::InvalidPetalCount(self.petal_count));
        }
        if !(BREATH_DURATION_MIN..=BREATH_DURATION_MAX).contains(&self.breath_duration) {
            return Err(FlowerError::InvalidBreathDuration(self.breath_duration));
        }
        // Two diameters must fit in the flower area height.
        if self.petal_diameter == 0 || self.petal_diameter * 2 > SCREEN_HEIGHT - HEADER_HEIGHT {
            return Err(FlowerError::InvalidSettings("petal diameter does not fit the flower area"));
        }
        Ok(())
    }
}

/// Fade duration of the halo removal for a breath of `breath_seconds`.
#[inline]
pub fn fade_duration(breath_seconds: f32) -> f32 {
    breath_seconds * FADE_RATIO
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            petal_count: 5.0,
            breath_duration: 4.2,
            petal_diameter: PETAL_DIAMETER,
            reentry: ReentryPolicy::default(),
        }
    }
}
