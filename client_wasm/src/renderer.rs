//! Canvas playback of the frame display list

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use crate::scene::DrawOp;

pub struct Renderer {
    ctx: CanvasRenderingContext2d,
}

impl Renderer {
    pub fn new(ctx: CanvasRenderingContext2d) -> Self {
        Self { ctx }
    }

    /// Replay the display list onto the 2D context
    pub fn draw(&self, ops: &[DrawOp]) -> Result<(), JsValue> {
        for op in ops {
            match *op {
                DrawOp::Clear { w, h } => {
                    self.ctx.clear_rect(0.0, 0.0, w as f64, h as f64);
                }
                DrawOp::StrokeRect {
                    x,
                    y,
                    w,
                    h,
                    color,
                    line_width,
                } => {
                    self.ctx.save();
                    self.ctx.set_stroke_style_str(color);
                    self.ctx.set_line_width(line_width as f64);
                    self.ctx.stroke_rect(x as f64, y as f64, w as f64, h as f64);
                    self.ctx.restore();
                }
                DrawOp::DashedLine {
                    from,
                    to,
                    color,
                    line_width,
                    dash,
                } => {
                    self.ctx.save();
                    self.ctx.set_stroke_style_str(color);
                    self.ctx.set_line_width(line_width as f64);
                    let segments = js_sys::Array::of2(
                        &JsValue::from_f64(dash as f64),
                        &JsValue::from_f64(dash as f64),
                    );
                    self.ctx.set_line_dash(&segments)?;
                    self.ctx.begin_path();
                    self.ctx.move_to(from.x as f64, from.y as f64);
                    self.ctx.line_to(to.x as f64, to.y as f64);
                    self.ctx.stroke();
                    self.ctx.restore();
                }
                DrawOp::FillRect { x, y, w, h, color } => {
                    self.ctx.save();
                    self.ctx.set_fill_style_str(color);
                    self.ctx.fill_rect(x as f64, y as f64, w as f64, h as f64);
                    self.ctx.restore();
                }
                DrawOp::FillCircle { center, r, color } => {
                    self.ctx.save();
                    self.ctx.set_fill_style_str(color);
                    self.ctx.begin_path();
                    self.ctx.arc(
                        center.x as f64,
                        center.y as f64,
                        r as f64,
                        0.0,
                        std::f64::consts::TAU,
                    )?;
                    self.ctx.fill();
                    self.ctx.restore();
                }
            }
        }
        Ok(())
    }
}
