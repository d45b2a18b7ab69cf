//! Breath cycle: minimize, hold, restore.
//!
//! A single Breath press runs three steps against the two bound values of the
//! screen, the minimized flag and the active animation duration:
//!
//! ```text
//! t = 0    active_duration := D, minimized toggles
//! t = D    minimized toggles back
//! t = 2D   active_duration := PETAL_DURATION
//! ```
//!
//! The two delayed steps are [`TimerQueue`] entries fired from [`BreathCycle::tick`].
//!
//! # Re-entrancy
//!
//! Pressing Breath again while a cycle is running is governed by
//! [`ReentryPolicy`]. `Overlap` keeps the uncancelled toggle timers of the
//! reference design: interleaved cycles can leave the flower minimized and
//! reset the duration early. `Ignore` and `Restart` restore an absolute
//! resting value instead of toggling, so the flag always comes back.

use std::time::Duration;

use tracing::{debug, info, warn};

use crate::config::PETAL_DURATION;
use crate::timer::TimerQueue;

/// What a Breath press does while a cycle is already running.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ReentryPolicy {
    /// Drop the press; the running cycle finishes untouched.
    #[default]
    Ignore,
    /// Cancel pending steps and start over from the resting state.
    Restart,
    /// Schedule another independent set of toggles alongside the running ones.
    Overlap,
}

/// The two values a breath cycle drives.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BreathFlags {
    /// Collapsed, rotated, scaled-down display mode.
    pub minimized: bool,
    /// Seconds applied to layout transitions right now.
    pub active_duration: f32,
}

impl Default for BreathFlags {
    fn default() -> Self {
        Self {
            minimized: false,
            active_duration: PETAL_DURATION,
        }
    }
}

/// Delayed step of a cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BreathAction {
    /// Flip the minimized flag (`Overlap`).
    ToggleMinimized,
    /// Put the minimized flag back to its resting value.
    SetMinimized(bool),
    /// Return the active duration to [`PETAL_DURATION`].
    ResetDuration,
}

/// Result of a Breath press.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Trigger {
    /// A new cycle started.
    Started,
    /// A running cycle was cancelled and started again.
    Restarted,
    /// The press was dropped because a cycle is running.
    Ignored,
    /// Another cycle was layered over a running one.
    Overlapped,
}

/// What changed during a [`BreathCycle::tick`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TickReport {
    /// The minimized flag changed value.
    pub minimized_changed: bool,
    /// The active duration went back to [`PETAL_DURATION`].
    pub duration_reset: bool,
    /// The last pending step fired.
    pub finished: bool,
}

/// Timer-driven breath cycle.
#[derive(Debug, Default)]
pub struct BreathCycle {
    policy: ReentryPolicy,
    timers: TimerQueue<BreathAction>,
    /// Minimized value before the first press of the running cycle.
    resting: Option<bool>,
}

impl BreathCycle {
    pub const fn new(policy: ReentryPolicy) -> Self {
        Self {
            policy,
            timers: TimerQueue::new(),
            resting: None,
        }
    }

    #[inline]
    pub const fn policy(&self) -> ReentryPolicy {
        self.policy
    }

    /// Whether any step of a cycle is still pending.
    #[inline]
    pub fn in_flight(&self) -> bool {
        !self.timers.is_empty()
    }

    /// Handle a Breath press at `now` with breath duration `duration` seconds.
    pub fn trigger(
        &mut self,
        flags: &mut BreathFlags,
        duration: f32,
        now: Duration,
    ) -> Trigger {
        let running = self.in_flight();

        let outcome = match (self.policy, running) {
            (ReentryPolicy::Ignore, true) => {
                warn!(pending = self.timers.len(), "breath already running, press ignored");
                return Trigger::Ignored;
            }
            (ReentryPolicy::Overlap, _) => {
                flags.active_duration = duration;
                flags.minimized = !flags.minimized;
                self.schedule(now, duration, BreathAction::ToggleMinimized);
                return if running {
                    warn!(pending = self.timers.len(), "breath overlapped with running cycle");
                    Trigger::Overlapped
                } else {
                    info!(duration, "breath started");
                    Trigger::Started
                };
            }
            (ReentryPolicy::Restart, true) => {
                let dropped = self.timers.cancel_all();
                debug!(dropped, "breath restarted, pending steps cancelled");
                Trigger::Restarted
            }
            (_, false) => {
                self.resting = Some(flags.minimized);
                info!(duration, "breath started");
                Trigger::Started
            }
        };

        let resting = self.resting.unwrap_or(flags.minimized);
        flags.active_duration = duration;
        flags.minimized = !resting;
        self.schedule(now, duration, BreathAction::SetMinimized(resting));
        outcome
    }

    fn schedule(
        &mut self,
        now: Duration,
        duration: f32,
        restore: BreathAction,
    ) {
        let step = Duration::from_secs_f32(duration.max(0.0));
        self.timers.schedule(now + step, restore);
        self.timers.schedule(now + step * 2, BreathAction::ResetDuration);
    }

    /// Fire every step due at `now`, in deadline order.
    pub fn tick(
        &mut self,
        flags: &mut BreathFlags,
        now: Duration,
    ) -> TickReport {
        let mut report = TickReport::default();
        if !self.in_flight() {
            return report;
        }

        while let Some(action) = self.timers.pop_due(now) {
            debug!(?action, "breath step");
            match action {
                BreathAction::ToggleMinimized => {
                    flags.minimized = !flags.minimized;
                    report.minimized_changed = true;
                }
                BreathAction::SetMinimized(value) => {
                    report.minimized_changed |= flags.minimized != value;
                    flags.minimized = value;
                }
                BreathAction::ResetDuration => {
                    flags.active_duration = PETAL_DURATION;
                    report.duration_reset = true;
                }
            }
        }

        if !self.in_flight() {
            self.resting = None;
            report.finished = true;
            info!(minimized = flags.minimized, "breath finished");
        }
        report
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
