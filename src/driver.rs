//! Frame scheduling: runs the simulation only while something is moving.

use crate::bubble::{Bubble, PointerEvent, Snapshot, Tick};
use crate::float::Float;
use crate::observer::BubbleObserver;

/// Host capability for display-refresh callbacks.
///
/// `request_frame` asks the host to call [`BubbleDriver::on_frame`] on its
/// next refresh; `cancel_frame` withdraws a pending request. Backed by
/// `requestAnimationFrame` in a browser, or any event-loop timer elsewhere.
pub trait FrameScheduler {
    fn request_frame(&mut self);
    fn cancel_frame(&mut self);
}

/// Composes a bubble with a host scheduler and an observer.
///
/// Forwards input events to the bubble and keeps exactly one frame request
/// outstanding while the bubble is dragging or settling. Once the bubble
/// settles to idle, no further frames are requested; the loop is fully
/// stopped until the next press.
pub struct BubbleDriver<F: Float, S: FrameScheduler, O: BubbleObserver<F>> {
    bubble: Bubble<F>,
    scheduler: S,
    observer: O,
    frame_pending: bool,
}

impl<F: Float, S: FrameScheduler, O: BubbleObserver<F>> BubbleDriver<F, S, O> {
    pub fn new(bubble: Bubble<F>, scheduler: S, observer: O) -> Self {
        BubbleDriver {
            bubble,
            scheduler,
            observer,
            frame_pending: false,
        }
    }

    /// Handle a press: starts dragging and spins up the frame loop.
    pub fn pointer_down(&mut self, event: PointerEvent<F>) {
        self.bubble.pointer_down(event, &mut self.observer);
        self.sync_scheduling();
    }

    /// Handle a move. Cheap when no drag is active.
    pub fn pointer_move(&mut self, event: PointerEvent<F>) {
        self.bubble.pointer_move(event);
    }

    /// Handle a release: hands the bubble to physics. The loop keeps running
    /// until the throw settles.
    pub fn pointer_up(&mut self, pointer_id: i32) {
        self.bubble.pointer_up(pointer_id, &mut self.observer);
        self.sync_scheduling();
    }

    /// Deterministically end any drag (pointer capture loss, unmount).
    pub fn cancel_drag(&mut self) {
        self.bubble.cancel_drag(&mut self.observer);
        self.sync_scheduling();
    }

    /// Apply new viewport dimensions. The position is repaired immediately,
    /// without waiting for a frame, in any mode.
    pub fn resize(&mut self, width: F, height: F) {
        self.bubble.set_viewport(width, height);
    }

    /// Host frame callback: run one tick and reschedule if still active.
    pub fn on_frame(&mut self) -> Tick {
        self.frame_pending = false;
        let outcome = self.bubble.tick(&mut self.observer);
        self.sync_scheduling();
        outcome
    }

    /// True while a frame request is outstanding.
    pub fn frame_pending(&self) -> bool {
        self.frame_pending
    }

    /// Read-only state for rendering.
    pub fn snapshot(&self) -> Snapshot<F> {
        self.bubble.snapshot()
    }

    pub fn bubble(&self) -> &Bubble<F> {
        &self.bubble
    }

    pub fn observer(&self) -> &O {
        &self.observer
    }

    /// Tear down, releasing the scheduler and observer. Cancels any pending
    /// frame so no callback outlives the driver.
    pub fn into_parts(mut self) -> (Bubble<F>, S, O) {
        if self.frame_pending {
            self.scheduler.cancel_frame();
        }
        (self.bubble, self.scheduler, self.observer)
    }

    fn sync_scheduling(&mut self) {
        if self.bubble.is_active() {
            if !self.frame_pending {
                self.scheduler.request_frame();
                self.frame_pending = true;
            }
        } else if self.frame_pending {
            self.scheduler.cancel_frame();
            self.frame_pending = false;
        }
    }
}
