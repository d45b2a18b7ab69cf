//! Error types for checked construction of the screen model.
//!
//! The controls clamp their own values, so these only surface when values come
//! from somewhere else (startup [`Settings`](crate::config::Settings), tests).

use thiserror::Error;

/// Result type for breath-flower operations.
pub type Result<T> = std::result::Result<T, FlowerError>;

/// Errors raised when a value falls outside its allowed range.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum FlowerError {
    /// Petal count is NaN or outside `[2, 10]`.
    #[error("petal count {0} is outside 2..=10")]
    InvalidPetalCount(f32),

    /// Breath duration is NaN or outside `[0, 10]` seconds.
    #[error("breath duration {0}s is outside 0..=10")]
    InvalidBreathDuration(f32),

    /// A settings field is inconsistent with the screen layout.
    #[error("invalid settings: {0}")]
    InvalidSettings(&'static str),
}
