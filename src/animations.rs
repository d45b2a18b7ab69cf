//! Time-based interpolation for the flower.
//!
//! This module is the interpolator that turns discrete model changes into
//! smooth motion:
//! - **Tweens**: eased interpolation between two values over a duration
//! - **Flower animator**: tweens the displayed petal count and the minimize
//!   progress toward the model, using the active animation duration
//! - **Halo transition**: asymmetric fade of the overlay flower
//!
//! # FPS Independence
//!
//! Every tween is evaluated against wall-clock time (a [`Duration`] since
//! program start), never against frame counts, so motion speed does not
//! depend on the frame rate.
//!
//! # Retargeting
//!
//! When a target changes mid-flight, the new tween starts from the value
//! currently on screen. Dragging the petal slider retargets every frame,
//! which makes the petals trail the slider slightly instead of jumping.
//!
//! # Halo
//!
//! The halo is a second flower drawn only while the main flower is expanded.
//! ```text
//! minimize:  opacity 0.7 -> 0, scale 1 -> 1.5, ease-in over fade duration
//! restore:   wait active duration, then opacity 0 -> 0.7 over 0.35 s
//! ```

use std::time::Duration;

use crate::config::{
    HALO_INSERT_DURATION,
    HALO_OPACITY,
    HALO_REMOVED_SCALE,
    PETAL_COUNT_MAX,
    PETAL_COUNT_MIN,
};
use crate::render::FlowerPose;
use crate::state::Snapshot;

// =============================================================================
// Easing
// =============================================================================

/// Timing curve applied to tween progress.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Easing {
    Linear,
    /// Slow start (quadratic).
    EaseIn,
    /// Slow start and end (smoothstep).
    #[default]
    EaseInOut,
}

impl Easing {
    /// Map linear progress `t` in `[0, 1]` onto the curve.
    #[inline]
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::EaseIn => t * t,
            Self::EaseInOut => t * t * 2.0f32.mul_add(-t, 3.0),
        }
    }
}

// =============================================================================
// Tween
// =============================================================================

/// Eased interpolation from one value to another.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tween {
    from: f32,
    to: f32,
    /// May lie in the future to delay the tween.
    start: Duration,
    /// Seconds; zero jumps straight to `to`.
    duration: f32,
    easing: Easing,
}

impl Tween {
    pub const fn new(
        from: f32,
        to: f32,
        start: Duration,
        duration: f32,
        easing: Easing,
    ) -> Self {
        Self {
            from,
            to,
            start,
            duration,
            easing,
        }
    }

    /// A tween already resting at `value`.
    pub const fn settled(value: f32) -> Self {
        Self::new(value, value, Duration::ZERO, 0.0, Easing::EaseInOut)
    }

    #[inline]
    pub const fn target(&self) -> f32 {
        self.to
    }

    /// Linear progress in `[0, 1]` at `now`.
    pub fn progress(&self, now: Duration) -> f32 {
        if self.duration <= 0.0 {
            return if now >= self.start { 1.0 } else { 0.0 };
        }
        let elapsed = now.saturating_sub(self.start).as_secs_f32();
        (elapsed / self.duration).clamp(0.0, 1.0)
    }

    /// Interpolated value at `now`.
    pub fn value_at(&self, now: Duration) -> f32 {
        let eased = self.easing.apply(self.progress(now));
        (self.to - self.from).mul_add(eased, self.from)
    }

    #[inline]
    pub fn is_settled(&self, now: Duration) -> bool {
        self.progress(now) >= 1.0
    }

    /// Head for `to` from the value shown at `now`. No-op if `to` is already the target.
    pub fn retarget(
        &mut self,
        to: f32,
        now: Duration,
        duration: f32,
    ) {
        if to == self.to {
            return;
        }
        self.from = self.value_at(now);
        self.to = to;
        self.start = now;
        self.duration = duration.max(0.0);
    }
}

// =============================================================================
// Halo Transition
// =============================================================================

/// Fade and scale of the halo overlay.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HaloTransition {
    opacity: Tween,
    scale: Tween,
}

impl HaloTransition {
    /// Halo fully shown.
    pub const fn new() -> Self {
        Self {
            opacity: Tween::settled(HALO_OPACITY),
            scale: Tween::settled(1.0),
        }
    }

    /// Halo fully hidden.
    pub const fn hidden() -> Self {
        Self {
            opacity: Tween::settled(0.0),
            scale: Tween::settled(HALO_REMOVED_SCALE),
        }
    }

    /// Start the removal: grow and fade out over `fade` seconds.
    pub fn remove(
        &mut self,
        now: Duration,
        fade: f32,
    ) {
        let from = self.opacity.value_at(now);
        self.opacity = Tween::new(from, 0.0, now, fade, Easing::EaseIn);
        self.scale = Tween::new(self.scale.value_at(now), HALO_REMOVED_SCALE, now, fade, Easing::EaseIn);
    }

    /// Start the insertion: after `delay` seconds, fade in at normal size.
    pub fn insert(
        &mut self,
        now: Duration,
        delay: f32,
    ) {
        let start = now + Duration::from_secs_f32(delay.max(0.0));
        self.opacity = Tween::new(0.0, HALO_OPACITY, start, HALO_INSERT_DURATION, Easing::EaseInOut);
        self.scale = Tween::settled(1.0);
    }

    /// `(opacity, scale)` at `now`.
    #[inline]
    pub fn sample(&self, now: Duration) -> (f32, f32) {
        (self.opacity.value_at(now), self.scale.value_at(now))
    }

    #[inline]
    pub fn is_settled(&self, now: Duration) -> bool {
        self.opacity.is_settled(now) && self.scale.is_settled(now)
    }
}

impl Default for HaloTransition {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Flower Animator
// =============================================================================

/// Tweens the rendered flower toward the screen model.
#[derive(Clone, Copy, Debug)]
pub struct FlowerAnimator {
    count: Tween,
    /// 0 = expanded, 1 = minimized.
    minimize: Tween,
    halo: HaloTransition,
    minimized: bool,
    layout_duration: f32,
    fade_duration: f32,
}

impl FlowerAnimator {
    /// Start at rest on the current model.
    pub fn new(snapshot: &Snapshot) -> Self {
        let minimized = snapshot.minimized;
        Self {
            count: Tween::settled(snapshot.petal_count),
            minimize: Tween::settled(if minimized { 1.0 } else { 0.0 }),
            halo: if minimized {
                HaloTransition::hidden()
            } else {
                HaloTransition::new()
            },
            minimized,
            layout_duration: snapshot.active_duration,
            fade_duration: snapshot.fade_duration,
        }
    }

    /// Retarget tweens after the model changed.
    pub fn sync(
        &mut self,
        snapshot: &Snapshot,
        now: Duration,
    ) {
        self.layout_duration = snapshot.active_duration;
        self.fade_duration = snapshot.fade_duration;
        self.count
            .retarget(snapshot.petal_count, now, snapshot.active_duration);

        if snapshot.minimized != self.minimized {
            self.minimized = snapshot.minimized;
            let target = if self.minimized { 1.0 } else { 0.0 };
            self.minimize.retarget(target, now, snapshot.active_duration);

            if self.minimized {
                self.halo.remove(now, snapshot.fade_duration);
            } else {
                self.halo.insert(now, snapshot.active_duration);
            }
        }
    }

    /// Flower pose to render at `now`.
    pub fn pose(&self, now: Duration) -> FlowerPose {
        let (halo_opacity, halo_scale) = self.halo.sample(now);
        FlowerPose {
            petal_count: self
                .count
                .value_at(now)
                .clamp(PETAL_COUNT_MIN, PETAL_COUNT_MAX),
            minimize: self.minimize.value_at(now).clamp(0.0, 1.0),
            minimized: self.minimized,
            halo_opacity,
            halo_scale,
            layout_duration: self.layout_duration,
            fade_duration: self.fade_duration,
        }
    }

    /// Whether anything still moves at `now`.
    pub fn is_animating(&self, now: Duration) -> bool {
        !(self.count.is_settled(now) && self.minimize.is_settled(now) && self.halo.is_settled(now))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{PETAL_DURATION, Settings};
    use crate::state::ScreenState;

    fn secs(s: f32) -> Duration {
        Duration::from_secs_f32(s)
    }

    // -------------------------------------------------------------------------
    // Easing Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_easing_endpoints() {
        for easing in [Easing::Linear, Easing::EaseIn, Easing::EaseInOut] {
            assert_eq!(easing.apply(0.0), 0.0, "{easing:?}");
            assert!((easing.apply(1.0) - 1.0).abs() < 1e-6, "{easing:?}");
        }
    }

    #[test]
    fn test_ease_in_out_symmetric() {
        let e = Easing::EaseInOut;
        assert!((e.apply(0.5) - 0.5).abs() < 1e-6);
        assert!((e.apply(0.25) + e.apply(0.75) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_ease_in_starts_slow() {
        assert!(Easing::EaseIn.apply(0.3) < 0.3);
    }

    // -------------------------------------------------------------------------
    // Tween Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_tween_interpolates() {
        let tween = Tween::new(0.0, 10.0, secs(1.0), 2.0, Easing::Linear);
        assert_eq!(tween.value_at(secs(0.5)), 0.0, "before start");
        assert!((tween.value_at(secs(2.0)) - 5.0).abs() < 1e-4);
        assert_eq!(tween.value_at(secs(5.0)), 10.0);
        assert!(tween.is_settled(secs(3.0)));
    }

    #[test]
    fn test_zero_duration_jumps() {
        let mut tween = Tween::settled(2.0);
        tween.retarget(6.0, secs(1.0), 0.0);
        assert_eq!(tween.value_at(secs(1.0)), 6.0);
    }

    #[test]
    fn test_retarget_starts_from_current_value() {
        let mut tween = Tween::new(0.0, 10.0, Duration::ZERO, 1.0, Easing::Linear);
        tween.retarget(0.0, secs(0.5), 1.0);

        assert!((tween.value_at(secs(0.5)) - 5.0).abs() < 1e-4, "no jump on retarget");
        assert_eq!(tween.target(), 0.0);
        assert_eq!(tween.value_at(secs(1.5)), 0.0);
    }

    #[test]
    fn test_retarget_same_target_keeps_timing() {
        let mut tween = Tween::new(0.0, 10.0, Duration::ZERO, 1.0, Easing::Linear);
        tween.retarget(10.0, secs(0.5), 5.0);
        assert!(tween.is_settled(secs(1.0)));
    }

    // -------------------------------------------------------------------------
    // Halo Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_halo_removal() {
        let mut halo = HaloTransition::new();
        assert_eq!(halo.sample(Duration::ZERO), (HALO_OPACITY, 1.0));

        halo.remove(Duration::ZERO, 2.0);
        let (opacity, scale) = halo.sample(secs(1.0));
        assert!(opacity < HALO_OPACITY && opacity > 0.0);
        assert!(scale > 1.0 && scale < HALO_REMOVED_SCALE);

        assert_eq!(halo.sample(secs(2.0)), (0.0, HALO_REMOVED_SCALE));
    }

    #[test]
    fn test_halo_insertion_waits_for_delay() {
        let mut halo = HaloTransition::hidden();
        halo.insert(secs(4.0), 4.0);

        assert_eq!(halo.sample(secs(7.9)).0, 0.0, "hidden during delay");
        assert_eq!(halo.sample(secs(5.0)).1, 1.0, "scale resets immediately");
        assert!(halo.sample(secs(8.1)).0 > 0.0);
        assert!((halo.sample(secs(9.0)).0 - HALO_OPACITY).abs() < 1e-6);
    }

    // -------------------------------------------------------------------------
    // Animator Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_animator_starts_at_rest() {
        let screen = ScreenState::new(&Settings::default()).unwrap();
        let animator = FlowerAnimator::new(&screen.snapshot());
        let pose = animator.pose(Duration::ZERO);

        assert_eq!(pose.petal_count, 5.0);
        assert_eq!(pose.minimize, 0.0);
        assert!(!pose.minimized);
        assert_eq!(pose.halo_opacity, HALO_OPACITY);
        assert!(!animator.is_animating(Duration::ZERO));
    }

    #[test]
    fn test_petal_change_uses_petal_duration() {
        let mut screen = ScreenState::new(&Settings::default()).unwrap();
        let mut animator = FlowerAnimator::new(&screen.snapshot());

        screen.drag_petals(6.0);
        screen.end_petal_drag();
        animator.sync(&screen.snapshot(), secs(1.0));

        let mid = animator.pose(secs(1.0 + PETAL_DURATION / 2.0)).petal_count;
        assert!(mid > 5.0 && mid < 6.0, "mid-transition count {mid}");
        assert_eq!(animator.pose(secs(1.0 + PETAL_DURATION)).petal_count, 6.0);
    }

    #[test]
    fn test_is_animating_until_settled() {
        let mut screen = ScreenState::new(&Settings::default()).unwrap();
        let mut animator = FlowerAnimator::new(&screen.snapshot());

        screen.drag_petals(6.0);
        screen.end_petal_drag();
        animator.sync(&screen.snapshot(), secs(1.0));

        assert!(animator.is_animating(secs(1.0 + PETAL_DURATION / 2.0)));
        assert!(!animator.is_animating(secs(2.0 + PETAL_DURATION)));
    }

    #[test]
    fn test_breath_drives_minimize_progress() {
        let mut screen = ScreenState::new(&Settings::default()).unwrap();
        screen.set_breath_duration(2.0);
        let mut animator = FlowerAnimator::new(&screen.snapshot());

        screen.breathe(Duration::ZERO);
        animator.sync(&screen.snapshot(), Duration::ZERO);

        assert!(animator.pose(secs(1.0)).minimized);
        let half = animator.pose(secs(1.0)).minimize;
        assert!((half - 0.5).abs() < 1e-3, "halfway through collapse: {half}");
        assert_eq!(animator.pose(secs(2.0)).minimize, 1.0);

        // Restore at D, collapse back over D
        screen.tick(secs(2.0));
        animator.sync(&screen.snapshot(), secs(2.0));
        assert!(!animator.pose(secs(2.0)).minimized);
        assert_eq!(animator.pose(secs(4.0)).minimize, 0.0);
        assert!(animator.pose(secs(4.4)).halo_opacity > 0.0, "halo back after delay");
    }
}
