/// Pseudo3D Web - WASM bindings that stroke the scene onto an HTML canvas
///
/// The host page owns the slider and drag widgets and forwards their values
/// here; every call to `draw` projects the cached scene with the current view.

use pseudo3d_core::{LineStyle, Projector, Scene, SceneConfig, ViewState};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

const AXIS_WIDTH: f64 = 4.0;
const GRID_WIDTH: f64 = 1.0;
const LABEL_FONT: &str = "32px sans-serif";
const LABEL_OFFSET: f64 = 20.0;

#[wasm_bindgen]
pub struct WebRenderer {
    scene: Scene,
    projector: Projector,
    view: ViewState,
}

#[wasm_bindgen]
impl WebRenderer {
    #[wasm_bindgen(constructor)]
    pub fn new() -> WebRenderer {
        Self::from_config(&SceneConfig::default())
    }

    /// Build from a JSON scene configuration
    pub fn with_config(json: &str) -> Result<WebRenderer, JsValue> {
        let config =
            SceneConfig::from_json_str(json).map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(Self::from_config(&config))
    }

    /// Rotation about the vertical axis, in radians
    pub fn set_rotation(&mut self, radians: f32) {
        self.view.set_rotation(radians);
    }

    pub fn rotate(&mut self, delta: f32) {
        self.view.rotate_by(delta);
    }

    pub fn set_distance(&mut self, distance: f32) {
        self.view.set_distance(distance);
    }

    /// Drag gesture in CSS pixels
    pub fn drag(&mut self, dx: f32, dy: f32) {
        self.view.drag(dx, dy);
    }

    pub fn set_perspective(&mut self, enabled: bool) {
        self.projector.perspective = enabled;
    }

    pub fn rotation(&self) -> f32 {
        self.view.rotation.z
    }

    pub fn distance(&self) -> f32 {
        self.view.distance
    }

    /// Projected lines as flat `[x0, y0, x1, y1, ...]` screen offsets
    pub fn lines(&self) -> Vec<f32> {
        self.scene
            .project(&self.projector, &self.view)
            .iter()
            .flat_map(|line| [line.start.x, line.start.y, line.end.x, line.end.y])
            .collect()
    }

    /// Stroke the scene onto the canvas with the given element id
    pub fn draw(&self, canvas_id: &str) -> Result<(), JsValue> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| JsValue::from_str("no document available"))?;
        let canvas: HtmlCanvasElement = document
            .get_element_by_id(canvas_id)
            .ok_or_else(|| JsValue::from_str(&format!("no element with id {}", canvas_id)))?
            .dyn_into()?;
        let context: CanvasRenderingContext2d = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
            .dyn_into()?;

        let (width, height) = (canvas.width() as f32, canvas.height() as f32);
        context.clear_rect(0.0, 0.0, width as f64, height as f64);
        context.set_font(LABEL_FONT);

        for line in self.scene.project(&self.projector, &self.view) {
            if !line.start.is_finite() || !line.end.is_finite() {
                continue;
            }
            let start = line.start.translate(width / 2.0, height / 2.0);
            let end = line.end.translate(width / 2.0, height / 2.0);
            let color = line.style.color().to_css();

            context.set_stroke_style(&JsValue::from_str(&color));
            context.set_line_width(match line.style {
                LineStyle::Grid => GRID_WIDTH,
                LineStyle::Axis { .. } => AXIS_WIDTH,
            });
            context.begin_path();
            context.move_to(start.x as f64, start.y as f64);
            context.line_to(end.x as f64, end.y as f64);
            context.stroke();

            if let LineStyle::Axis { label, .. } = line.style {
                context.set_fill_style(&JsValue::from_str(&color));
                context.fill_text(label, end.x as f64 + LABEL_OFFSET, end.y as f64 - LABEL_OFFSET)?;
            }
        }

        Ok(())
    }
}

impl WebRenderer {
    fn from_config(config: &SceneConfig) -> Self {
        log::debug!("Creating web renderer");
        Self {
            scene: Scene::new(config),
            projector: config.projector(),
            view: ViewState::from_config(config),
        }
    }
}

impl Default for WebRenderer {
    fn default() -> Self {
        Self::new()
    }
}
