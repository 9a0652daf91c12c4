//! Squash/stretch deformation derived from velocity.

use crate::float::Float;
use crate::vec::Vec2;

/// Speed below which the shape snaps to the rest state.
const SPEED_THRESHOLD: f32 = 0.5;
/// Speed that produces the maximum squash (before capping).
const SQUASH_RESPONSE: f32 = 30.0;
/// Cap on the squash amount.
const MAX_SQUASH: f32 = 0.3;
/// The orthogonal axis compresses 1.5x faster than the dominant axis stretches.
const ORTHO_GAIN: f32 = 1.5;
/// Scales never drop below this floor; the shape cannot collapse or invert.
const MIN_SCALE: f32 = 0.7;
/// Tilt in degrees for dominant horizontal motion.
const TILT_HORIZONTAL: f32 = 5.0;
/// Tilt in degrees for dominant vertical motion.
const TILT_VERTICAL: f32 = 3.0;

/// Visual deformation of the bubble: non-uniform scale plus a small tilt.
///
/// Always recomputed from the current velocity, never accumulated, so it
/// self-corrects after any external velocity change such as a bounce.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Deformation<F: Float> {
    pub scale_x: F,
    pub scale_y: F,
    pub rotation_deg: F,
}

impl<F: Float> Deformation<F> {
    /// The undeformed shape: unit scale, no tilt.
    pub fn rest() -> Self {
        Deformation {
            scale_x: F::one(),
            scale_y: F::one(),
            rotation_deg: F::zero(),
        }
    }

    /// Derive the deformation for a velocity, in pixels per tick.
    ///
    /// The axis of dominant motion stretches, the orthogonal axis squashes
    /// (floored at 0.7), and the shape tilts a few degrees in the direction
    /// of travel. Pure: equal velocities always yield equal deformations.
    pub fn from_velocity(velocity: Vec2<F>) -> Self {
        let speed = velocity.length();
        if speed <= F::from_f32(SPEED_THRESHOLD) {
            return Self::rest();
        }

        let squash = (speed / F::from_f32(SQUASH_RESPONSE)).min(F::from_f32(MAX_SQUASH));
        let stretch = F::one() + squash;
        let compress = (F::one() - squash * F::from_f32(ORTHO_GAIN)).max(F::from_f32(MIN_SCALE));

        if velocity.x.abs() > velocity.y.abs() {
            // Horizontal travel: stretch along x, tilt with the direction.
            let tilt = F::from_f32(TILT_HORIZONTAL);
            Deformation {
                scale_x: stretch,
                scale_y: compress,
                rotation_deg: if velocity.x > F::zero() { tilt } else { -tilt },
            }
        } else {
            // Vertical travel: stretch along y, tilt opposes the direction.
            let tilt = F::from_f32(TILT_VERTICAL);
            Deformation {
                scale_x: compress,
                scale_y: stretch,
                rotation_deg: if velocity.y > F::zero() { -tilt } else { tilt },
            }
        }
    }

    /// True when this equals the rest state.
    pub fn is_rest(&self) -> bool {
        *self == Self::rest()
    }
}

impl<F: Float> Default for Deformation<F> {
    fn default() -> Self {
        Self::rest()
    }
}
