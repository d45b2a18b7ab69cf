//! Screen model: petal count, breath duration and the breath cycle.
//!
//! One owned struct replaces the bound variables of a declarative view. Each
//! control calls an explicit setter; the frame loop renders from an immutable
//! [`Snapshot`] taken after all mutations of the frame.
//!
//! # Petal Count
//!
//! The petal slider is continuous: while dragging, any value in `[2, 10]` is
//! accepted so petals can slide and fade in between integers. Ending the drag
//! snaps the count to the nearest integer.
//!
//! # Breath Duration
//!
//! Stored as tenths of a second, which is the slider step, so the displayed
//! value never carries float noise like `4.2000003`.

use std::time::Duration;

use tracing::debug;

use crate::breath::{BreathCycle, BreathFlags, TickReport, Trigger};
use crate::config::{
    BREATH_DURATION_MAX,
    BREATH_DURATION_MIN,
    BREATH_DURATION_STEP,
    PETAL_COUNT_MAX,
    PETAL_COUNT_MIN,
    Settings,
    fade_duration,
};
use crate::error::{FlowerError, Result};

// =============================================================================
// Petal Count
// =============================================================================

/// Number of petals, possibly fractional, always within `[2, 10]`.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct PetalCount(f32);

impl PetalCount {
    /// Clamp `value` into range, as the slider does. NaN maps to the minimum.
    pub fn new(value: f32) -> Self {
        if value.is_nan() {
            return Self(PETAL_COUNT_MIN);
        }
        Self(value.clamp(PETAL_COUNT_MIN, PETAL_COUNT_MAX))
    }

    #[inline]
    pub const fn get(self) -> f32 {
        self.0
    }

    /// Nearest whole count, as committed when a drag ends.
    #[inline]
    pub fn snapped(self) -> Self {
        Self::new(self.0.round())
    }

    /// Whole petals shown in the label (`Int(count)` truncation).
    #[inline]
    pub fn whole(self) -> u32 {
        self.0 as u32
    }
}

impl TryFrom<f32> for PetalCount {
    type Error = FlowerError;

    fn try_from(value: f32) -> Result<Self> {
        if (PETAL_COUNT_MIN..=PETAL_COUNT_MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(FlowerError::InvalidPetalCount(value))
        }
    }
}

// =============================================================================
// Breath Duration
// =============================================================================

/// Upper bound of the breath slider in tenths of a second.
const MAX_TENTHS: u16 = (BREATH_DURATION_MAX * 10.0) as u16;

/// Breath duration in `[0, 10]` seconds, quantised to the 0.1 s slider step.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct BreathDuration {
    tenths: u16,
}

impl BreathDuration {
    /// Round to the nearest step and clamp, as the slider does. NaN maps to zero.
    pub fn new(seconds: f32) -> Self {
        let tenths = (seconds / BREATH_DURATION_STEP).round();
        // Float-to-int casts saturate and map NaN to 0
        Self {
            tenths: (tenths as u16).min(MAX_TENTHS),
        }
    }

    #[inline]
    pub const fn from_tenths(tenths: u16) -> Self {
        Self {
            tenths: if tenths > MAX_TENTHS { MAX_TENTHS } else { tenths },
        }
    }

    #[inline]
    pub const fn tenths(self) -> u16 {
        self.tenths
    }

    #[inline]
    pub fn seconds(self) -> f32 {
        f32::from(self.tenths) / 10.0
    }

    /// Move by `steps` slider steps, clamped to range.
    pub fn step(
        self,
        steps: i32,
    ) -> Self {
        let tenths = (i32::from(self.tenths) + steps).clamp(0, i32::from(MAX_TENTHS));
        Self::from_tenths(tenths as u16)
    }
}

impl TryFrom<f32> for BreathDuration {
    type Error = FlowerError;

    fn try_from(seconds: f32) -> Result<Self> {
        if (BREATH_DURATION_MIN..=BREATH_DURATION_MAX).contains(&seconds) {
            Ok(Self::new(seconds))
        } else {
            Err(FlowerError::InvalidBreathDuration(seconds))
        }
    }
}

// =============================================================================
// Screen State
// =============================================================================

/// Immutable view of the screen model, taken once per frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Snapshot {
    pub petal_count: f32,
    pub dragging: bool,
    pub breath_duration: BreathDuration,
    /// Seconds applied to layout transitions.
    pub active_duration: f32,
    /// Seconds of the halo removal fade.
    pub fade_duration: f32,
    pub minimized: bool,
    /// A breath cycle still has pending steps.
    pub breathing: bool,
}

/// All mutable state of the screen.
#[derive(Debug)]
pub struct ScreenState {
    petal_count: PetalCount,
    dragging: bool,
    breath_duration: BreathDuration,
    flags: BreathFlags,
    cycle: BreathCycle,
}

impl ScreenState {
    /// Build the model from validated settings.
    pub fn new(settings: &Settings) -> Result<Self> {
        settings.validate()?;
        Ok(Self {
            petal_count: PetalCount::try_from(settings.petal_count)?,
            dragging: false,
            breath_duration: BreathDuration::try_from(settings.breath_duration)?,
            flags: BreathFlags::default(),
            cycle: BreathCycle::new(settings.reentry),
        })
    }

    #[inline]
    pub const fn petal_count(&self) -> PetalCount {
        self.petal_count
    }

    #[inline]
    pub const fn breath_duration(&self) -> BreathDuration {
        self.breath_duration
    }

    #[inline]
    pub const fn flags(&self) -> BreathFlags {
        self.flags
    }

    /// Continuous petal slider change.
    pub fn drag_petals(&mut self, value: f32) -> PetalCount {
        self.dragging = true;
        self.petal_count = PetalCount::new(value);
        self.petal_count
    }

    /// Petal slider released: commit the nearest whole count.
    pub fn end_petal_drag(&mut self) -> PetalCount {
        self.dragging = false;
        self.petal_count = self.petal_count.snapped();
        debug!(petals = self.petal_count.get(), "petal count committed");
        self.petal_count
    }

    /// Breath slider change.
    pub fn set_breath_duration(&mut self, seconds: f32) -> BreathDuration {
        self.breath_duration = BreathDuration::new(seconds);
        self.breath_duration
    }

    /// Move the breath slider by whole steps.
    pub fn step_breath_duration(&mut self, steps: i32) -> BreathDuration {
        self.breath_duration = self.breath_duration.step(steps);
        debug!(seconds = self.breath_duration.seconds(), "breath duration changed");
        self.breath_duration
    }

    /// Breath button press.
    pub fn breathe(&mut self, now: Duration) -> Trigger {
        self.cycle
            .trigger(&mut self.flags, self.breath_duration.seconds(), now)
    }

    /// Fire due breath steps.
    pub fn tick(&mut self, now: Duration) -> TickReport {
        self.cycle.tick(&mut self.flags, now)
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            petal_count: self.petal_count.get(),
            dragging: self.dragging,
            breath_duration: self.breath_duration,
            active_duration: self.flags.active_duration,
            fade_duration: fade_duration(self.breath_duration.seconds()),
            minimized: self.flags.minimized,
            breathing: self.cycle.in_flight(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================


#[cfg(test)]
mod proptests {
    use proptest::prelude::*;

    use super::*;

    proptest! {
        #[test]
        fn snap_is_rounded_and_clamped(v in -5.0f32..20.0) {
            let mut s = ScreenState::new(&Settings::default()).unwrap();
            s.drag_petals(v);
            let committed = s.end_petal_drag().get();
            let expected = v.round().clamp(PETAL_COUNT_MIN, PETAL_COUNT_MAX);
            prop_assert_eq!(committed, expected);
        }
    }
}
