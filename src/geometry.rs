//! Petal layout and opacity calculation.
//!
//! Given a (possibly fractional) petal count, computes the rotation of every
//! petal and the opacity of the petal currently being added or removed.
//!
//! # Angles
//!
//! Petals are spread evenly over a full turn:
//! ```text
//! absolute_petal_angle = 360 / petal_count
//! angle(i)             = absolute_petal_angle * i
//! ```
//! With a fractional count (mid-drag) the spacing shrinks continuously, so the
//! petals slide apart or together instead of jumping.
//!
//! # Opacity Ramp
//!
//! Petals `0..=floor(count)` are rendered. Only the last one (index
//! `floor(count)`) fades; its opacity measures how far the spacing has
//! travelled from the spacing of `floor(count)` petals toward the spacing of
//! `floor(count) + 1` petals:
//! ```text
//! next_angle       = 360 / (floor + 1)
//! current_angle    = 360 / floor
//! total_travel     = current_angle - next_angle
//! current_progress = absolute_petal_angle - next_angle
//! percentage       = current_progress / total_travel
//! opacity          = 1 - percentage
//! ```
//! At an integral count the ramp evaluates to opacity 0: the extra index is
//! present but invisible, and it becomes visible as the count grows toward
//! the next integer.

use crate::config::MAX_PETALS;

/// Angular spacing between neighbouring petals, in degrees.
///
/// `petal_count` must be at least 2 (guaranteed by [`PetalCount`](crate::state::PetalCount)).
#[inline]
pub fn absolute_petal_angle(petal_count: f32) -> f32 {
    360.0 / petal_count
}

/// Rotation of petal `index`, in degrees.
#[inline]
pub fn petal_angle(petal_count: f32, index: usize) -> f32 {
    absolute_petal_angle(petal_count) * index as f32
}

/// Number of petal indices rendered for a count: `floor(count) + 1`.
#[inline]
pub fn rendered_petals(petal_count: f32) -> usize {
    (petal_count.floor() as usize + 1).min(MAX_PETALS)
}

/// Intermediate values of the fade calculation for the last petal.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OpacityRamp {
    /// `floor(petal_count)`.
    pub floored_count: f32,
    /// Spacing once the fading petal is fully added.
    pub next_angle: f32,
    /// Spacing with only `floored_count` petals.
    pub current_angle: f32,
    /// Angle the spacing travels across one integer step.
    pub total_travel: f32,
    /// How much of that travel is still left.
    pub current_progress: f32,
    /// `current_progress / total_travel`; 1 at an integral count.
    pub percentage: f32,
}

impl OpacityRamp {
    /// Compute the ramp for a petal count.
    pub fn new(petal_count: f32) -> Self {
        let floored_count = petal_count.floor();
        debug_assert!(floored_count >= 1.0, "petal count below 1 divides by zero");

        let next_angle = 360.0 / (floored_count + 1.0);
        let current_angle = 360.0 / floored_count;

        let total_travel = current_angle - next_angle;
        let current_progress = absolute_petal_angle(petal_count) - next_angle;
        let percentage = current_progress / total_travel;

        Self {
            floored_count,
            next_angle,
            current_angle,
            total_travel,
            current_progress,
            percentage,
        }
    }

    /// Opacity of the fading petal, clamped to `[0, 1]`.
    #[inline]
    pub fn opacity(&self) -> f32 {
        (1.0 - self.percentage).clamp(0.0, 1.0)
    }
}

/// Opacity of the petal being added or removed (index `floor(petal_count)`).
#[inline]
pub fn opacity_percentage(petal_count: f32) -> f32 {
    OpacityRamp::new(petal_count).opacity()
}

/// Opacity of petal `index`: the last index fades, all others are opaque.
#[inline]
pub fn petal_opacity(petal_count: f32, index: usize) -> f32 {
    if index == petal_count.floor() as usize {
        opacity_percentage(petal_count)
    } else {
        1.0
    }
}

/// One petal's rotation and opacity, independent of display mode.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Petal {
    pub index: usize,
    pub angle_deg: f32,
    pub opacity: f32,
}

/// Every rendered petal for a count, in index order.
pub fn petals(petal_count: f32) -> impl Iterator<Item = Petal> {
    let spacing = absolute_petal_angle(petal_count);
    let last = petal_count.floor() as usize;
    let fade = opacity_percentage(petal_count);

    (0..rendered_petals(petal_count)).map(move |index| Petal {
        index,
        angle_deg: spacing * index as f32,
        opacity: if index == last { fade } else { 1.0 },
    })
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-4;

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < EPS
    }

    // -------------------------------------------------------------------------
    // Angle Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_absolute_angle_integral() {
        assert!(approx(absolute_petal_angle(2.0), 180.0));
        assert!(approx(absolute_petal_angle(5.0), 72.0));
        assert!(approx(absolute_petal_angle(10.0), 36.0));
    }

    #[test]
    fn test_petal_angle_scales_with_index() {
        assert!(approx(petal_angle(5.0, 0), 0.0));
        assert!(approx(petal_angle(5.0, 3), 216.0));
    }

    #[test]
    fn test_rendered_petals() {
        assert_eq!(rendered_petals(2.0), 3);
        assert_eq!(rendered_petals(5.5), 6);
        assert_eq!(rendered_petals(10.0), MAX_PETALS);
    }

    // -------------------------------------------------------------------------
    // Opacity Ramp Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_ramp_integral_count() {
        // 5 petals: the extra index is fully transparent
        let ramp = OpacityRamp::new(5.0);
        assert!(approx(ramp.floored_count, 5.0));
        assert!(approx(ramp.next_angle, 60.0));
        assert!(approx(ramp.current_angle, 72.0));
        assert!(approx(ramp.total_travel, 12.0));
        assert!(approx(ramp.current_progress, 12.0));
        assert!(approx(ramp.percentage, 1.0));
        assert!(approx(ramp.opacity(), 0.0));
    }

    #[test]
    fn test_ramp_half_count() {
        let ramp = OpacityRamp::new(5.5);
        assert!(approx(ramp.floored_count, 5.0));
        assert!((absolute_petal_angle(5.5) - 65.4545).abs() < 1e-3);
        assert!(approx(ramp.next_angle, 60.0));
        assert!(approx(ramp.current_angle, 72.0));
        assert!(approx(ramp.total_travel, 12.0));
        assert!((ramp.current_progress - 5.4545).abs() < 1e-3);
        assert!((ramp.percentage - 0.4545).abs() < 1e-3);
        assert!((ramp.opacity() - 0.5455).abs() < 1e-3);
    }

    #[test]
    fn test_ramp_bounds_have_no_nan() {
        for count in [2.0, 2.0001, 9.9999, 10.0] {
            let ramp = OpacityRamp::new(count);
            assert!(ramp.percentage.is_finite(), "count {count}");
            assert!(ramp.opacity().is_finite(), "count {count}");
        }
    }

    #[test]
    fn test_ramp_near_next_integer() {
        // Just below 6 the new petal is almost fully visible
        assert!(opacity_percentage(5.999) > 0.99);
    }

    #[test]
    fn test_petal_opacity_only_last_fades() {
        for i in 0..5 {
            assert_eq!(petal_opacity(5.5, i), 1.0, "petal {i} should be opaque");
        }
        assert!((petal_opacity(5.5, 5) - 0.5455).abs() < 1e-3);
    }

    #[test]
    fn test_petals_iterator() {
        let all: Vec<Petal> = petals(4.0).collect();
        assert_eq!(all.len(), 5);
        assert!(approx(all[1].angle_deg, 90.0));
        assert_eq!(all[3].opacity, 1.0);
        assert!(approx(all[4].opacity, 0.0));
    }
}

#[cfg(test)]
mod proptests {
    use proptest::prelude::*;

    use super::*;

    proptest! {
        #[test]
        fn angle_strictly_decreasing(a in 2.0f32..9.9, delta in 0.01f32..1.0) {
            let b = (a + delta).min(10.0);
            prop_assert!(absolute_petal_angle(a) > absolute_petal_angle(b));
        }

        #[test]
        fn angle_matches_formula(count in 2.0f32..=10.0) {
            prop_assert!((absolute_petal_angle(count) * count - 360.0).abs() < 1e-3);
        }

        #[test]
        fn opacity_in_unit_range(count in 2.0f32..=10.0) {
            let opacity = opacity_percentage(count);
            prop_assert!(opacity.is_finite());
            prop_assert!((0.0..=1.0).contains(&opacity));
        }

        #[test]
        fn opacity_monotonic_within_step(k in 2u32..10, t1 in 0.0f32..0.99, dt in 0.0f32..0.01) {
            let lo = k as f32 + t1;
            let hi = k as f32 + (t1 + dt).min(0.999);
            let a = OpacityRamp::new(lo);
            let b = OpacityRamp::new(hi);
            prop_assert!(a.percentage + 1e-4 >= b.percentage);
            prop_assert!(a.opacity() <= b.opacity() + 1e-4);
        }

        #[test]
        fn opacity_continuous_within_step(k in 2u32..10, t in 0.0f32..0.99) {
            let a = opacity_percentage(k as f32 + t);
            let b = opacity_percentage(k as f32 + t + 0.001);
            prop_assert!((a - b).abs() < 0.01);
        }
    }
}
