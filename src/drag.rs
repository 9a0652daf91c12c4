//! Drag sessions: pointer capture and velocity estimation.

use crate::bounds::Bounds;
use crate::config::BubbleConfig;
use crate::float::Float;
use crate::vec::Vec2;

/// Bookkeeping for an active drag. Exists only while the bubble is dragged
/// and is discarded on release; its sole purpose is the velocity estimate.
#[derive(Clone, Debug)]
pub struct DragSession<F: Float> {
    pointer_id: i32,
    /// Pointer position relative to the object origin at press time.
    grab_offset: Vec2<F>,
    last_position: Vec2<F>,
    last_time_ms: F,
}

/// Output of one drag move: where the object goes and how fast it is moving.
#[derive(Copy, Clone, Debug)]
pub struct DragSample<F: Float> {
    pub position: Vec2<F>,
    /// Pixels per tick, normalized to the configured frame unit.
    pub velocity: Vec2<F>,
}

impl<F: Float> DragSession<F> {
    /// Start a session for `pointer_id` pressing at `pointer`, with the
    /// object currently at `object_position`.
    pub fn begin(pointer_id: i32, pointer: Vec2<F>, object_position: Vec2<F>, time_ms: F) -> Self {
        DragSession {
            pointer_id,
            grab_offset: pointer - object_position,
            last_position: object_position,
            last_time_ms: time_ms,
        }
    }

    /// The pointer this session belongs to.
    pub fn pointer_id(&self) -> i32 {
        self.pointer_id
    }

    /// Process a move event: clamp the dragged position to `bounds` and
    /// estimate the instantaneous velocity from the previous sample.
    ///
    /// Elapsed time is floored at `config.sample_dt_floor_ms`, so two events
    /// with the same timestamp still produce a finite estimate. The ratio is
    /// normalized so the velocity is expressed per `frame_ms` tick.
    pub fn sample(
        &mut self,
        pointer: Vec2<F>,
        time_ms: F,
        bounds: &Bounds<F>,
        config: &BubbleConfig<F>,
    ) -> DragSample<F> {
        let candidate = pointer - self.grab_offset;
        let position = bounds.clamp(candidate);

        let dt_ms = (time_ms - self.last_time_ms).max(config.sample_dt_floor_ms);
        let velocity = (position - self.last_position).scale(config.frame_ms / dt_ms);

        self.last_position = position;
        self.last_time_ms = time_ms;

        DragSample { position, velocity }
    }
}
