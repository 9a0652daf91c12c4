//! Configuration for the bubble simulation.

use crate::error::BubbleError;
use crate::float::Float;

/// Immutable physics constants for a bubble, fixed at construction.
///
/// Velocities are expressed in pixels per tick, where one tick corresponds to
/// one `frame_ms` slice of wall time.
///
/// # Builder Pattern
/// ```
/// use bubbly::BubbleConfig;
///
/// let config: BubbleConfig<f32> = BubbleConfig::new()
///     .with_friction(0.95)
///     .with_gravity(0.2)
///     .with_bounce_damping(0.6);
/// ```
#[derive(Clone, Debug)]
pub struct BubbleConfig<F: Float> {
    /// Object diameter in pixels. Default: 60.
    pub size: F,
    /// Edge padding in pixels. Default: 10.
    pub padding: F,
    /// Multiplicative velocity decay per tick, in (0, 1]. Default: 0.98.
    pub friction: F,
    /// Downward acceleration added to vertical velocity per tick. Default: 0.15.
    pub gravity: F,
    /// Fraction of velocity retained on a boundary bounce, in [0, 1]. Default: 0.7.
    pub bounce_damping: F,
    /// Hard clamp on speed, pixels per tick. Default: 20.
    pub max_speed: F,
    /// Speed below which the bubble is considered at rest. Default: 0.1.
    pub rest_epsilon: F,
    /// One tick's worth of wall time in milliseconds. Default: 16.
    pub frame_ms: F,
    /// Floor on the elapsed time between drag samples, in milliseconds.
    /// Guards the velocity estimate against near-simultaneous events. Default: 1.
    pub sample_dt_floor_ms: F,
    /// Consecutive below-epsilon ticks required before settling to idle.
    /// Default: 2.
    pub settle_ticks: u32,
}

impl<F: Float> BubbleConfig<F> {
    /// Create a config with default values.
    pub fn new() -> Self {
        BubbleConfig {
            size: F::from_f32(60.0),
            padding: F::from_f32(10.0),
            friction: F::from_f32(0.98),
            gravity: F::from_f32(0.15),
            bounce_damping: F::from_f32(0.7),
            max_speed: F::from_f32(20.0),
            rest_epsilon: F::from_f32(0.1),
            frame_ms: F::from_f32(16.0),
            sample_dt_floor_ms: F::from_f32(1.0),
            settle_ticks: 2,
        }
    }

    /// Set the object diameter.
    pub fn with_size(mut self, size: F) -> Self {
        self.size = size;
        self
    }

    /// Set the edge padding.
    pub fn with_padding(mut self, padding: F) -> Self {
        self.padding = padding;
        self
    }

    /// Set the per-tick friction factor.
    pub fn with_friction(mut self, friction: F) -> Self {
        self.friction = friction;
        self
    }

    /// Set the per-tick gravity acceleration.
    pub fn with_gravity(mut self, gravity: F) -> Self {
        self.gravity = gravity;
        self
    }

    /// Set the bounce damping factor.
    pub fn with_bounce_damping(mut self, damping: F) -> Self {
        self.bounce_damping = damping;
        self
    }

    /// Set the maximum speed.
    pub fn with_max_speed(mut self, max_speed: F) -> Self {
        self.max_speed = max_speed;
        self
    }

    /// Set the rest epsilon.
    pub fn with_rest_epsilon(mut self, epsilon: F) -> Self {
        self.rest_epsilon = epsilon;
        self
    }

    /// Set the tick duration in milliseconds.
    pub fn with_frame_ms(mut self, frame_ms: F) -> Self {
        self.frame_ms = frame_ms;
        self
    }

    /// Validate all constants, returning the first violation found.
    pub fn validate(&self) -> Result<(), BubbleError> {
        let zero = F::zero();
        let one = F::one();
        if !(self.friction > zero && self.friction <= one) {
            return Err(BubbleError::InvalidFriction);
        }
        if !(self.bounce_damping >= zero && self.bounce_damping <= one) {
            return Err(BubbleError::InvalidBounceDamping);
        }
        if !(self.max_speed > zero && self.max_speed.is_finite()) {
            return Err(BubbleError::InvalidMaxSpeed);
        }
        if !(self.rest_epsilon >= zero && self.rest_epsilon.is_finite()) {
            return Err(BubbleError::InvalidRestEpsilon);
        }
        if !(self.size >= zero && self.size.is_finite())
            || !(self.padding >= zero && self.padding.is_finite())
            || !self.gravity.is_finite()
        {
            return Err(BubbleError::InvalidGeometry);
        }
        if !(self.frame_ms > zero && self.frame_ms.is_finite())
            || !(self.sample_dt_floor_ms > zero && self.sample_dt_floor_ms.is_finite())
        {
            return Err(BubbleError::InvalidTiming);
        }
        Ok(())
    }
}

impl<F: Float> Default for BubbleConfig<F> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config: BubbleConfig<f32> = BubbleConfig::new();
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn rejects_bad_friction() {
        let config: BubbleConfig<f32> = BubbleConfig::new().with_friction(0.0);
        assert_eq!(config.validate(), Err(BubbleError::InvalidFriction));
        let config: BubbleConfig<f32> = BubbleConfig::new().with_friction(1.5);
        assert_eq!(config.validate(), Err(BubbleError::InvalidFriction));
    }

    #[test]
    fn rejects_bad_damping() {
        let config: BubbleConfig<f32> = BubbleConfig::new().with_bounce_damping(-0.1);
        assert_eq!(config.validate(), Err(BubbleError::InvalidBounceDamping));
    }

    #[test]
    fn rejects_nan_gravity() {
        let config: BubbleConfig<f32> = BubbleConfig::new().with_gravity(f32::NAN);
        assert_eq!(config.validate(), Err(BubbleError::InvalidGeometry));
    }
}
