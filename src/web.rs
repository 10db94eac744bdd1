use wasm_bindgen::prelude::*;

use crate::config::FlyWalkConfig;
use crate::input::viewport_offset;
use crate::navigation::{NavigationController, NavigationEvent};
use crate::uniforms::FrameUniforms;

#[wasm_bindgen(start)]
pub fn start() {
    crate::init_logging();
}

/// Browser-side handle. The page owns the canvas and shader; it calls `tick`
/// once per animation frame and uploads the returned floats as uniforms.
#[wasm_bindgen]
pub struct FlyWalk {
    controller: NavigationController,
}

#[wasm_bindgen]
impl FlyWalk {
    #[wasm_bindgen(constructor)]
    pub fn new(seed: Option<u32>) -> FlyWalk {
        let config = FlyWalkConfig {
            rng_seed: seed.map(u64::from),
            ..FlyWalkConfig::with_defaults()
        };
        FlyWalk {
            controller: NavigationController::new(&config),
        }
    }

    /// `[position.xyzw, right.xyzw, up.xyzw, zoom]`
    pub fn tick(&mut self) -> Vec<f32> {
        let frame = self.controller.tick();
        FrameUniforms::from(&frame).as_floats().to_vec()
    }

    /// Wheel `deltaY`, applied on the next tick.
    pub fn scroll(&self, delta_y: f64) {
        self.controller.push_event(NavigationEvent::Scroll { delta_y });
    }

    /// Click at `(offset_x, offset_y)` inside a `width x height` canvas, applied
    /// on the next tick.
    pub fn click(&self, offset_x: f64, offset_y: f64, width: f64, height: f64) {
        let (x, y) = viewport_offset(offset_x, offset_y, width, height);
        self.controller.push_event(NavigationEvent::Retarget { x, y });
    }

    pub fn debug_text(&self) -> String {
        self.controller.snapshot().to_string()
    }

    /// Writes the diagnostic snapshot into the element with id `element_id`.
    pub fn render_debug(&self, element_id: &str) -> Result<(), JsValue> {
        let element = web_sys::window()
            .and_then(|win| win.document())
            .and_then(|doc| doc.get_element_by_id(element_id))
            .ok_or_else(|| JsValue::from_str(&format!("no element with id {element_id}")))?;
        element.set_text_content(Some(&self.debug_text()));
        Ok(())
    }
}
