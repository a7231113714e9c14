use std::f64::consts::TAU;

use aura_core::{BlendMode, ConfigError, DrawSurface, Glow, SurfaceSize};
use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement};

/// Outer gradient stop.
const TRANSPARENT: &str = "rgba(0,0,0,0)";

#[derive(Debug, Error)]
pub enum CanvasError {
    #[error("no global window")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("no element with id {0:?}")]
    MissingElement(String),
    #[error("element {0:?} is not a <canvas>")]
    NotCanvas(String),
    #[error("canvas {0:?} has no 2d context")]
    NoContext(String),
    #[error("invalid aura config JSON: {0}")]
    ConfigJson(#[from] serde_json::Error),
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl From<CanvasError> for JsValue {
    fn from(err: CanvasError) -> Self {
        js_sys::Error::new(&err.to_string()).into()
    }
}

/// [`DrawSurface`] backed by a `<canvas>` 2D context.
pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn from_element_id(document: &Document, id: &str) -> Result<Self, CanvasError> {
        let canvas = document
            .get_element_by_id(id)
            .ok_or_else(|| CanvasError::MissingElement(id.to_string()))?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| CanvasError::NotCanvas(id.to_string()))?;
        let ctx = canvas
            .get_context("2d")
            .ok()
            .flatten()
            .and_then(|ctx| ctx.dyn_into::<CanvasRenderingContext2d>().ok())
            .ok_or_else(|| CanvasError::NoContext(id.to_string()))?;
        Ok(Self { canvas, ctx })
    }

    /// Resize the backing store; the canvas is implicitly cleared.
    pub fn resize(&self, size: SurfaceSize) {
        self.canvas.set_width(size.width);
        self.canvas.set_height(size.height);
    }
}

impl DrawSurface for CanvasSurface {
    type Error = JsValue;

    fn clear(&mut self, size: SurfaceSize) -> Result<(), Self::Error> {
        self.ctx.clear_rect(0.0, 0.0, size.width as f64, size.height as f64);
        Ok(())
    }

    fn set_blend_mode(&mut self, mode: BlendMode) -> Result<(), Self::Error> {
        self.ctx.set_global_composite_operation(mode.composite_operation())
    }

    fn fill_glow(&mut self, glow: &Glow) -> Result<(), Self::Error> {
        let Glow {
            center,
            radius,
            color,
            alpha,
        } = *glow;
        let gradient = self
            .ctx
            .create_radial_gradient(center.x, center.y, 0.0, center.x, center.y, radius)?;
        gradient.add_color_stop(0.0, &color.to_string())?;
        gradient.add_color_stop(1.0, TRANSPARENT)?;

        self.ctx.begin_path();
        self.ctx.arc(center.x, center.y, radius, 0.0, TAU)?;

        self.ctx.set_global_alpha(alpha);
        self.ctx.set_fill_style_canvas_gradient(&gradient);
        self.ctx.fill();
        self.ctx.set_global_alpha(1.0);
        Ok(())
    }
}
