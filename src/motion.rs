//! Velocity integration: gravity, friction, and the speed clamp.

use crate::config::BubbleConfig;
use crate::float::Float;
use crate::vec::Vec2;

/// Advance a velocity by one tick.
///
/// Gravity is added to the vertical component, friction decays both
/// components, and the result is uniformly rescaled if it exceeds the
/// configured maximum speed. Pure and deterministic.
pub fn integrate<F: Float>(velocity: Vec2<F>, config: &BubbleConfig<F>) -> Vec2<F> {
    let mut v = Vec2::new(
        velocity.x * config.friction,
        (velocity.y + config.gravity) * config.friction,
    );

    let speed = v.length();
    if speed > config.max_speed {
        v = v.scale(config.max_speed / speed);
    }
    v
}

/// Advance a position by one tick's velocity.
pub fn advance<F: Float>(position: Vec2<F>, velocity: Vec2<F>) -> Vec2<F> {
    position + velocity
}
