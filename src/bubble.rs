//! The bubble controller: state machine, tick composition, input handling.

use log::{debug, warn};

use crate::bounds::Bounds;
use crate::collide;
use crate::config::BubbleConfig;
use crate::deform::Deformation;
use crate::drag::DragSession;
use crate::error::BubbleError;
use crate::float::Float;
use crate::motion;
use crate::observer::BubbleObserver;
use crate::vec::Vec2;

/// Who is driving the bubble's position.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Mode {
    /// At rest; no frames are scheduled.
    Idle,
    /// Position follows the pointer; velocity is estimated from samples.
    Dragging,
    /// Free physics motion after release, until speed decays below epsilon.
    Settling,
}

/// A pointer press/move/release with screen coordinates and a timestamp.
#[derive(Copy, Clone, Debug)]
pub struct PointerEvent<F: Float> {
    pub pointer_id: i32,
    pub x: F,
    pub y: F,
    pub time_ms: F,
}

/// Read-only per-frame output for the rendering layer.
#[derive(Copy, Clone, Debug)]
pub struct Snapshot<F: Float> {
    pub position: Vec2<F>,
    pub deformation: Deformation<F>,
    pub mode: Mode,
}

/// Outcome of one simulation tick.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Tick {
    /// Motion (or a drag) is still in progress; schedule another frame.
    Active,
    /// The bubble reached rest; stop scheduling frames.
    Settled,
}

/// A pointer-draggable bubble with throw, gravity, bounce, and squash/stretch.
///
/// The state is owned exclusively by this struct and mutated once per tick or
/// input event; hosts read [`Snapshot`]s. All input and tick calls are
/// expected on one thread (the host event loop), so pointer updates that
/// arrive between frames are always visible to the next tick.
pub struct Bubble<F: Float> {
    config: BubbleConfig<F>,
    bounds: Bounds<F>,
    position: Vec2<F>,
    velocity: Vec2<F>,
    deformation: Deformation<F>,
    mode: Mode,
    session: Option<DragSession<F>>,
    rest_ticks: u32,
}

impl<F: Float> Bubble<F> {
    /// Default resting spot for a freshly mounted bubble, in pixels.
    const HOME: (f32, f32) = (20.0, 100.0);

    /// Create an idle bubble at the default position for the given viewport.
    pub fn new(config: BubbleConfig<F>, viewport_w: F, viewport_h: F) -> Result<Self, BubbleError> {
        let home = Vec2::new(F::from_f32(Self::HOME.0), F::from_f32(Self::HOME.1));
        Self::new_at(config, viewport_w, viewport_h, home)
    }

    /// Create an idle bubble at `position` (clamped into the viewport).
    pub fn new_at(
        config: BubbleConfig<F>,
        viewport_w: F,
        viewport_h: F,
        position: Vec2<F>,
    ) -> Result<Self, BubbleError> {
        config.validate()?;
        let bounds = Bounds::from_viewport(viewport_w, viewport_h, &config);
        Ok(Bubble {
            position: bounds.clamp(position),
            bounds,
            config,
            velocity: Vec2::zero(),
            deformation: Deformation::rest(),
            mode: Mode::Idle,
            session: None,
            rest_ticks: 0,
        })
    }

    /// Begin (or restart) a drag at the pressed pointer position.
    ///
    /// A press while settling cancels the residual velocity; a press while
    /// already dragging restarts the session at the current object position
    /// with the new pointer, without teleporting the bubble.
    pub fn pointer_down<O: BubbleObserver<F>>(&mut self, event: PointerEvent<F>, observer: &mut O) {
        let pointer = Vec2::new(event.x, event.y);
        if !pointer.is_finite() || !event.time_ms.is_finite() {
            warn!("ignoring non-finite pointer press");
            return;
        }

        self.session = Some(DragSession::begin(
            event.pointer_id,
            pointer,
            self.position,
            event.time_ms,
        ));
        self.velocity = Vec2::zero();
        self.deformation = Deformation::rest();
        self.rest_ticks = 0;
        self.set_mode(Mode::Dragging, observer);
    }

    /// Follow the pointer while dragging. Moves from a pointer other than the
    /// session's are ignored, as are moves with no active session.
    pub fn pointer_move(&mut self, event: PointerEvent<F>) {
        let pointer = Vec2::new(event.x, event.y);
        if !pointer.is_finite() || !event.time_ms.is_finite() {
            warn!("ignoring non-finite pointer move");
            return;
        }

        let Some(session) = self.session.as_mut() else { return };
        if session.pointer_id() != event.pointer_id {
            return;
        }

        let sample = session.sample(pointer, event.time_ms, &self.bounds, &self.config);
        if !sample.position.is_finite() || !sample.velocity.is_finite() {
            warn!("discarding non-finite drag sample");
            return;
        }

        self.position = sample.position;
        self.velocity = sample.velocity;
        self.deformation = Deformation::from_velocity(self.velocity);
    }

    /// End the drag for `pointer_id` and hand the bubble to physics.
    ///
    /// The last estimated velocity becomes the initial free velocity. A
    /// release with no matching session is a no-op.
    pub fn pointer_up<O: BubbleObserver<F>>(&mut self, pointer_id: i32, observer: &mut O) {
        match &self.session {
            Some(session) if session.pointer_id() == pointer_id => {
                self.session = None;
                self.rest_ticks = 0;
                self.set_mode(Mode::Settling, observer);
            }
            _ => {}
        }
    }

    /// End any active drag regardless of pointer id (capture loss, unmount).
    pub fn cancel_drag<O: BubbleObserver<F>>(&mut self, observer: &mut O) {
        if self.session.take().is_some() {
            self.rest_ticks = 0;
            self.set_mode(Mode::Settling, observer);
        }
    }

    /// Advance the simulation by one tick.
    ///
    /// While dragging, only the velocity estimate decays and the deformation
    /// follows it; the pointer owns the position. While settling, the full
    /// integrate / resolve / deform pipeline runs. Idle ticks do nothing.
    pub fn tick<O: BubbleObserver<F>>(&mut self, observer: &mut O) -> Tick {
        match self.mode {
            Mode::Idle => Tick::Settled,
            Mode::Dragging => {
                // Let the shape relax while the pointer holds still.
                self.velocity = self.velocity.scale(self.config.friction);
                self.deformation = Deformation::from_velocity(self.velocity);
                observer.on_tick_complete();
                Tick::Active
            }
            Mode::Settling => {
                let velocity = motion::integrate(self.velocity, &self.config);
                let candidate = motion::advance(self.position, velocity);
                let resolved =
                    collide::resolve(candidate, velocity, &self.bounds, self.config.bounce_damping);

                if !resolved.position.is_finite() || !resolved.velocity.is_finite() {
                    // Fatal to this tick only: keep the last known-good state.
                    warn!("discarding non-finite physics step");
                    observer.on_tick_complete();
                    return Tick::Active;
                }

                self.position = resolved.position;
                self.velocity = resolved.velocity;
                self.deformation = Deformation::from_velocity(self.velocity);

                for contact in resolved.contacts.into_iter().flatten() {
                    observer.on_contact(contact.edge, contact.impact_speed);
                }

                // Rest requires consecutive quiet ticks so a single slow
                // sample does not halt a bounce mid-flight.
                if self.velocity.length() <= self.config.rest_epsilon {
                    self.rest_ticks += 1;
                } else {
                    self.rest_ticks = 0;
                }

                let outcome = if self.rest_ticks >= self.config.settle_ticks {
                    self.velocity = Vec2::zero();
                    self.deformation = Deformation::rest();
                    self.set_mode(Mode::Idle, observer);
                    Tick::Settled
                } else {
                    Tick::Active
                };

                observer.on_tick_complete();
                outcome
            }
        }
    }

    /// Apply new viewport dimensions, re-clamping the position immediately.
    /// The mode is unchanged; this does not wait for a tick.
    pub fn set_viewport(&mut self, width: F, height: F) {
        if !width.is_finite() || !height.is_finite() {
            warn!("ignoring non-finite viewport dimensions");
            return;
        }
        self.bounds = Bounds::from_viewport(width, height, &self.config);
        self.position = self.bounds.clamp(self.position);
    }

    /// True while frames should be scheduled (dragging or settling).
    pub fn is_active(&self) -> bool {
        self.mode != Mode::Idle
    }

    /// Current mode.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Current top-left position in viewport pixels.
    pub fn position(&self) -> Vec2<F> {
        self.position
    }

    /// Current velocity in pixels per tick.
    pub fn velocity(&self) -> Vec2<F> {
        self.velocity
    }

    /// Current visual deformation.
    pub fn deformation(&self) -> Deformation<F> {
        self.deformation
    }

    /// Current clamp bounds.
    pub fn bounds(&self) -> Bounds<F> {
        self.bounds
    }

    /// Read-only state for the rendering layer.
    pub fn snapshot(&self) -> Snapshot<F> {
        Snapshot {
            position: self.position,
            deformation: self.deformation,
            mode: self.mode,
        }
    }

    fn set_mode<O: BubbleObserver<F>>(&mut self, mode: Mode, observer: &mut O) {
        if self.mode != mode {
            debug!("bubble mode {:?} -> {:?}", self.mode, mode);
            let from = self.mode;
            self.mode = mode;
            observer.on_mode_change(from, mode);
        }
    }
}
