use bubbly::{
    Bubble, BubbleConfig, BubbleDriver, BubbleObserver, Edge, FrameScheduler, Mode, PointerEvent,
};
use wasm_bindgen::prelude::*;

/// Install panic and logging hooks. Call once from JS before anything else.
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
}

/// Scheduler backed by a flag the JS host polls: JS runs
/// requestAnimationFrame only while `wants_frame()` is true.
#[derive(Default)]
struct FlagScheduler {
    wanted: bool,
}

impl FrameScheduler for FlagScheduler {
    fn request_frame(&mut self) {
        self.wanted = true;
    }
    fn cancel_frame(&mut self) {
        self.wanted = false;
    }
}

/// Counts boundary bounces so the page can flash or click on impact.
#[derive(Default)]
struct BounceCounter {
    bounces: u32,
    last_edge: Option<Edge>,
}

impl BubbleObserver<f32> for BounceCounter {
    fn on_contact(&mut self, edge: Edge, impact_speed: f32) {
        self.bounces += 1;
        self.last_edge = Some(edge);
        log::debug!("bounce off {:?} at {:.2} px/tick", edge, impact_speed);
    }
}

// ---- Bubble Demo ----

#[wasm_bindgen]
pub struct BubbleDemo {
    driver: BubbleDriver<f32, FlagScheduler, BounceCounter>,
}

#[wasm_bindgen]
impl BubbleDemo {
    #[wasm_bindgen(constructor)]
    pub fn new(viewport_w: f32, viewport_h: f32) -> Result<BubbleDemo, JsError> {
        let bubble = Bubble::new(BubbleConfig::new(), viewport_w, viewport_h)
            .map_err(|e| JsError::new(&e.to_string()))?;
        Ok(BubbleDemo {
            driver: BubbleDriver::new(bubble, FlagScheduler::default(), BounceCounter::default()),
        })
    }

    pub fn pointer_down(&mut self, pointer_id: i32, x: f32, y: f32, time_ms: f32) {
        self.driver.pointer_down(PointerEvent { pointer_id, x, y, time_ms });
    }

    pub fn pointer_move(&mut self, pointer_id: i32, x: f32, y: f32, time_ms: f32) {
        self.driver.pointer_move(PointerEvent { pointer_id, x, y, time_ms });
    }

    pub fn pointer_up(&mut self, pointer_id: i32) {
        self.driver.pointer_up(pointer_id);
    }

    /// Call on pointercancel / lost capture / page hide.
    pub fn cancel(&mut self) {
        self.driver.cancel_drag();
    }

    pub fn resize(&mut self, viewport_w: f32, viewport_h: f32) {
        self.driver.resize(viewport_w, viewport_h);
    }

    /// Advance one tick. Call from the requestAnimationFrame callback.
    pub fn frame(&mut self) {
        self.driver.on_frame();
    }

    /// True while the host should keep the rAF loop running.
    pub fn wants_frame(&self) -> bool {
        self.driver.frame_pending()
    }

    /// Returns [x, y, scale_x, scale_y, rotation_deg] for the CSS transform.
    pub fn render_state(&self) -> Vec<f32> {
        let snap = self.driver.snapshot();
        vec![
            snap.position.x,
            snap.position.y,
            snap.deformation.scale_x,
            snap.deformation.scale_y,
            snap.deformation.rotation_deg,
        ]
    }

    pub fn is_dragging(&self) -> bool {
        self.driver.snapshot().mode == Mode::Dragging
    }

    pub fn bounce_count(&self) -> u32 {
        self.driver.observer().bounces
    }
}
