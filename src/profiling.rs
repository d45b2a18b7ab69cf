//! Frame timing and the on-screen event log.
//!
//! # Usage
//!
//! ```ignore
//! let mut metrics = ProfilingMetrics::new();
//! let mut log = EventLog::new();
//!
//! // In main loop:
//! let frame_start = Instant::now();
//! // ... render work ...
//! let render_time = frame_start.elapsed();
//! // ... sleep ...
//! metrics.record_frame(frame_start.elapsed(), render_time, sleep_time);
//! if metrics.is_report_frame() {
//!     debug!(fps = metrics.fps(), "frame stats");
//! }
//!
//! // User-visible events:
//! log.push("Breath 4.2s");
//! ```

use std::time::Duration;

use heapless::{Deque, String};

// =============================================================================
// Event Log Configuration
// =============================================================================

/// Lines shown at the bottom of the control panel.
pub const LOG_BUFFER_SIZE: usize = 3;

/// Maximum characters per log line (panel width / 6px font).
pub const LOG_LINE_LENGTH: usize = 20;

// =============================================================================
// Profiling Metrics
// =============================================================================

/// Frames between two `frame stats` log lines (5 s at 50 FPS).
pub const REPORT_INTERVAL: u64 = 250;

/// Frame timing and redraw counters.
pub struct ProfilingMetrics {
    // Frame timing (microseconds for precision)
    /// Total frame time (render + sleep + overhead)
    pub frame_time_us: u32,
    /// Time spent rendering into the canvas and presenting it
    pub render_time_us: u32,
    /// Time spent sleeping (rate limiting)
    pub sleep_time_us: u32,

    /// Minimum frame time observed
    pub frame_time_min_us: u32,
    /// Maximum frame time observed
    pub frame_time_max_us: u32,
    frame_time_avg_us: f32,

    // Counters
    /// Total frames rendered since startup
    pub total_frames: u64,
    /// Header redraw count (should be low if dirty tracking works)
    pub header_redraws: u32,
    /// Control panel redraw count
    pub panel_redraws: u32,
}

impl ProfilingMetrics {
    pub const fn new() -> Self {
        Self {
            frame_time_us: 0,
            render_time_us: 0,
            sleep_time_us: 0,
            frame_time_min_us: u32::MAX,
            frame_time_max_us: 0,
            frame_time_avg_us: 0.0,
            total_frames: 0,
            header_redraws: 0,
            panel_redraws: 0,
        }
    }

    /// Exponential moving average alpha (0.1 for smooth updates).
    const EMA_ALPHA: f32 = 0.1;

    /// Record frame timing for this frame.
    pub fn record_frame(
        &mut self,
        total_time: Duration,
        render_time: Duration,
        sleep_time: Duration,
    ) {
        let total_us = total_time.as_micros() as u32;

        self.frame_time_us = total_us;
        self.render_time_us = render_time.as_micros() as u32;
        self.sleep_time_us = sleep_time.as_micros() as u32;

        self.frame_time_min_us = self.frame_time_min_us.min(total_us);
        self.frame_time_max_us = self.frame_time_max_us.max(total_us);

        if self.total_frames == 0 {
            self.frame_time_avg_us = total_us as f32;
        } else {
            self.frame_time_avg_us =
                Self::EMA_ALPHA.mul_add(total_us as f32, (1.0 - Self::EMA_ALPHA) * self.frame_time_avg_us);
        }

        self.total_frames += 1;
    }

    /// Average frame time in microseconds.
    #[inline]
    pub const fn frame_time_avg_us(&self) -> u32 {
        self.frame_time_avg_us as u32
    }

    /// Frames per second from the averaged frame time, 0 before the first frame.
    pub fn fps(&self) -> f32 {
        if self.frame_time_avg_us <= 0.0 {
            return 0.0;
        }
        1_000_000.0 / self.frame_time_avg_us
    }

    /// Whether the frame just recorded completes a report interval.
    #[inline]
    pub const fn is_report_frame(&self) -> bool {
        self.total_frames > 0 && self.total_frames % REPORT_INTERVAL == 0
    }

    #[inline]
    pub const fn inc_header_redraws(&mut self) {
        self.header_redraws += 1;
    }

    #[inline]
    pub const fn inc_panel_redraws(&mut self) {
        self.panel_redraws += 1;
    }
}

impl Default for ProfilingMetrics {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Event Log Ring Buffer
// =============================================================================

/// Last few user-visible events, oldest first.
pub struct EventLog {
    buffer: Deque<String<LOG_LINE_LENGTH>, LOG_BUFFER_SIZE>,
    /// Incremented on every push so the panel knows when to redraw.
    revision: u32,
}

impl EventLog {
    pub const fn new() -> Self {
        Self {
            buffer: Deque::new(),
            revision: 0,
        }
    }

    /// Push a message, dropping the oldest when full. Long messages are truncated.
    pub fn push(&mut self, msg: &str) {
        if self.buffer.is_full() {
            self.buffer.pop_front();
        }

        let mut line: String<LOG_LINE_LENGTH> = String::new();
        for c in msg.chars() {
            if line.push(c).is_err() {
                break;
            }
        }

        self.buffer.push_back(line).ok();
        self.revision = self.revision.wrapping_add(1);
    }

    /// Iterate over log messages (oldest first).
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.buffer.iter().map(heapless::string::StringInner::as_str)
    }

    #[inline]
    pub const fn revision(&self) -> u32 {
        self.revision
    }

    #[inline]
    pub const fn len(&self) -> usize {
        self.buffer.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }
}

impl Default for EventLog {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Tests
// =============================================================================
