//! Canvas 2D surface

use std::f64::consts::TAU;

use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::Surface;

/// A `<canvas>` with its 2D context
pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self, JsValue> {
        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
            .dyn_into()?;
        ctx.set_text_baseline("hanging");
        Ok(Self { canvas, ctx })
    }
}

impl Surface for CanvasSurface {
    fn clear(&mut self) {
        let w = self.canvas.width() as f64;
        let h = self.canvas.height() as f64;
        self.ctx.clear_rect(0.0, 0.0, w, h);
    }

    fn fill_circle(&mut self, x: f64, y: f64, radius: f64) {
        self.ctx.begin_path();
        if self.ctx.arc(x, y, radius, 0.0, TAU).is_ok() {
            self.ctx.fill();
        }
        self.ctx.close_path();
    }

    fn fill_text(&mut self, text: &str, x: f64, y: f64) {
        let _ = self.ctx.fill_text(text, x, y);
    }

    /// Resize the backing store; the context state resets, so restore the baseline
    fn resize(&mut self, width: u32, height: u32) {
        self.canvas.set_width(width);
        self.canvas.set_height(height);
        self.ctx.set_text_baseline("hanging");
    }
}
