//! Error types for bubble configuration.

use core::fmt;

/// Errors raised when constructing a bubble from an invalid configuration.
#[derive(Debug, Clone, PartialEq)]
pub enum BubbleError {
    /// Friction must be in (0, 1].
    InvalidFriction,
    /// Bounce damping must be in [0, 1].
    InvalidBounceDamping,
    /// Maximum speed must be positive and finite.
    InvalidMaxSpeed,
    /// Rest epsilon must be non-negative and finite.
    InvalidRestEpsilon,
    /// Object size and padding must be non-negative and finite.
    InvalidGeometry,
    /// Frame unit and sample-dt floor must be positive and finite.
    InvalidTiming,
}

impl fmt::Display for BubbleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BubbleError::InvalidFriction => write!(f, "friction must be in (0, 1]"),
            BubbleError::InvalidBounceDamping => write!(f, "bounce damping must be in [0, 1]"),
            BubbleError::InvalidMaxSpeed => write!(f, "max speed must be positive and finite"),
            BubbleError::InvalidRestEpsilon => {
                write!(f, "rest epsilon must be non-negative and finite")
            }
            BubbleError::InvalidGeometry => {
                write!(f, "object size and padding must be non-negative and finite")
            }
            BubbleError::InvalidTiming => {
                write!(f, "frame unit and sample-dt floor must be positive and finite")
            }
        }
    }
}
