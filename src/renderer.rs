// Renderer that wraps the canvas' 2d context. Frame logic talks to the
// `Painter` trait so it can be exercised without a DOM.

use crate::color::Color;
use crate::error::EffectsError;
use crate::surface::Surface;
use std::f64::consts::PI;
use vecmath::Vector2;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

pub trait Painter {
    fn clear(&mut self, surface: Surface);
    fn fill_circle(&mut self, center: Vector2<f64>, radius: f64, color: Color);
    fn stroke_line(&mut self, from: Vector2<f64>, to: Vector2<f64>, width: f64, color: Color);
}

pub struct CanvasRenderer {
    pub context: CanvasRenderingContext2d,
}

impl CanvasRenderer {
    // Grabs the 2d context from a canvas on the DOM
    pub fn new(canvas: &HtmlCanvasElement) -> Result<Self, EffectsError> {
        let context = canvas
            .get_context("2d")?
            .ok_or(EffectsError::NoContext)?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| EffectsError::NoContext)?;
        Ok(CanvasRenderer { context })
    }
}

impl Painter for CanvasRenderer {
    fn clear(&mut self, surface: Surface) {
        self.context.clear_rect(0.0, 0.0, surface.width as f64, surface.height as f64);
    }

    #[allow(deprecated)]
    fn fill_circle(&mut self, center: Vector2<f64>, radius: f64, color: Color) {
        self.context.begin_path();
        if let Err(e) = self.context.arc(center[0], center[1], radius, 0.0, PI * 2.0) {
            log::warn!("arc failed: {:?}", e);
            return;
        }
        self.context.set_fill_style(&JsValue::from_str(&color.to_css()));
        self.context.fill();
    }

    #[allow(deprecated)]
    fn stroke_line(&mut self, from: Vector2<f64>, to: Vector2<f64>, width: f64, color: Color) {
        self.context.begin_path();
        self.context.set_stroke_style(&JsValue::from_str(&color.to_css()));
        self.context.set_line_width(width);
        self.context.move_to(from[0], from[1]);
        self.context.line_to(to[0], to[1]);
        self.context.stroke();
    }
}

/// Painter that records draw calls instead of issuing them
#[cfg(test)]
#[derive(Debug, Default)]
pub struct RecordingPainter {
    pub ops: Vec<DrawOp>,
}

#[cfg(test)]
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    Clear(Surface),
    Circle {
        center: Vector2<f64>,
        radius: f64,
        color: Color,
    },
    Line {
        from: Vector2<f64>,
        to: Vector2<f64>,
        width: f64,
        color: Color,
    },
}

#[cfg(test)]
impl Painter for RecordingPainter {
    fn clear(&mut self, surface: Surface) {
        self.ops.push(DrawOp::Clear(surface));
    }

    fn fill_circle(&mut self, center: Vector2<f64>, radius: f64, color: Color) {
        self.ops.push(DrawOp::Circle {
            center,
            radius,
            color,
        });
    }

    fn stroke_line(&mut self, from: Vector2<f64>, to: Vector2<f64>, width: f64, color: Color) {
        self.ops.push(DrawOp::Line {
            from,
            to,
            width,
            color,
        });
    }
}
