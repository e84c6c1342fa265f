//! Canvas 2D backend

use std::f64::consts::TAU;

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::shapes::{Shape, scene};
use crate::sim::World;

pub struct CanvasRenderer {
    ctx: CanvasRenderingContext2d,
}

impl CanvasRenderer {
    pub fn new(canvas: &HtmlCanvasElement) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        Ok(Self { ctx })
    }

    /// Paint one frame
    pub fn render(&self, world: &World) -> Result<(), JsValue> {
        for shape in scene(world) {
            self.draw(&shape)?;
        }
        Ok(())
    }

    fn draw(&self, shape: &Shape) -> Result<(), JsValue> {
        let ctx = &self.ctx;
        match shape {
            Shape::Rect { pos, size, color } => {
                ctx.set_fill_style_str(color);
                ctx.fill_rect(pos.x as f64, pos.y as f64, size.x as f64, size.y as f64);
            }
            Shape::Circle {
                center,
                radius,
                color,
            } => {
                ctx.set_fill_style_str(color);
                ctx.begin_path();
                ctx.arc(center.x as f64, center.y as f64, *radius as f64, 0.0, TAU)?;
                ctx.close_path();
                ctx.fill();
            }
            Shape::Text {
                pos,
                text,
                font,
                color,
            } => {
                ctx.set_fill_style_str(color);
                ctx.set_font(font);
                ctx.fill_text(text, pos.x as f64, pos.y as f64)?;
            }
        }
        Ok(())
    }
}
