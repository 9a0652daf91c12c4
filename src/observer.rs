//! Observer trait for monitoring the bubble simulation.

use crate::bubble::Mode;
use crate::collide::Edge;
use crate::float::Float;

/// Hooks into the simulation for side effects outside the physics contract
/// (sound, haptics, debugging). All methods have default no-op
/// implementations; notifications are fire-and-forget.
pub trait BubbleObserver<F: Float> {
    /// Called once per boundary bounce with the pre-damping impact speed.
    fn on_contact(&mut self, _edge: Edge, _impact_speed: F) {}

    /// Called on every mode transition.
    fn on_mode_change(&mut self, _from: Mode, _to: Mode) {}

    /// Called when a simulation tick is fully committed.
    fn on_tick_complete(&mut self) {}
}

/// A no-op observer that does nothing. Use as default when no observation needed.
pub struct NoOpBubbleObserver;

impl<F: Float> BubbleObserver<F> for NoOpBubbleObserver {}
