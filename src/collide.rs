//! Boundary collision: clamp to the viewport and damp the reflected velocity.

use crate::bounds::Bounds;
use crate::float::Float;
use crate::vec::Vec2;

/// A viewport edge the bubble can bounce off.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Edge {
    Left,
    Right,
    Top,
    Bottom,
}

/// One boundary contact: which edge, and how fast the bubble hit it.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Contact<F: Float> {
    pub edge: Edge,
    /// Speed normal to the edge at the moment of impact, before damping.
    pub impact_speed: F,
}

/// Result of resolving one tick's candidate state against the bounds.
#[derive(Copy, Clone, Debug)]
pub struct Resolution<F: Float> {
    pub position: Vec2<F>,
    pub velocity: Vec2<F>,
    /// Horizontal then vertical contact, if any. A corner hit fills both.
    pub contacts: [Option<Contact<F>>; 2],
}

/// Clamp a candidate position to `bounds`, reflecting and damping the normal
/// velocity component for each axis that actually penetrated.
///
/// Damping applies only when clamping occurred, so a body resting exactly on
/// an edge is not re-dampened by ticks that do not push it back out.
pub fn resolve<F: Float>(
    position: Vec2<F>,
    velocity: Vec2<F>,
    bounds: &Bounds<F>,
    damping: F,
) -> Resolution<F> {
    let mut pos = position;
    let mut vel = velocity;
    let mut contacts = [None, None];

    if pos.x < bounds.min.x {
        pos.x = bounds.min.x;
        contacts[0] = Some(Contact { edge: Edge::Left, impact_speed: vel.x.abs() });
        vel.x = -vel.x * damping;
    } else if pos.x > bounds.max.x {
        pos.x = bounds.max.x;
        contacts[0] = Some(Contact { edge: Edge::Right, impact_speed: vel.x.abs() });
        vel.x = -vel.x * damping;
    }

    if pos.y < bounds.min.y {
        pos.y = bounds.min.y;
        contacts[1] = Some(Contact { edge: Edge::Top, impact_speed: vel.y.abs() });
        vel.y = -vel.y * damping;
    } else if pos.y > bounds.max.y {
        pos.y = bounds.max.y;
        contacts[1] = Some(Contact { edge: Edge::Bottom, impact_speed: vel.y.abs() });
        vel.y = -vel.y * damping;
    }

    Resolution { position: pos, velocity: vel, contacts }
}
