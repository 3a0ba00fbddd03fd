//! Render/update loop for the particle backdrop.

use std::cell::RefCell;
use std::f64::consts::TAU;
use std::rc::Rc;

use anyhow::anyhow;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use driftfield_core::ParticleField;

use crate::constants::{ACCENT_RGB, GLOW_BLUR_PX, GLOW_COLOR};

pub struct FrameContext {
    pub field: Rc<RefCell<ParticleField>>,
    pub ctx: web::CanvasRenderingContext2d,
}

/// Obtain the 2d context; the backdrop cannot run without one.
pub fn context_2d(canvas: &web::HtmlCanvasElement) -> anyhow::Result<web::CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .map_err(|e| anyhow!("{:?}", e))?
        .ok_or_else(|| anyhow!("no 2d context"))?
        .dyn_into::<web::CanvasRenderingContext2d>()
        .map_err(|e| anyhow!("{:?}", e))
}

impl FrameContext {
    /// Draw the field at its current positions, then advance it one step.
    pub fn frame(&mut self) {
        let mut field = self.field.borrow_mut();
        self.ctx
            .clear_rect(0.0, 0.0, field.width() as f64, field.height() as f64);

        // The glow is identical for every dot; only the fill alpha varies.
        self.ctx.set_shadow_blur(GLOW_BLUR_PX);
        self.ctx.set_shadow_color(GLOW_COLOR);
        for p in field.particles() {
            self.ctx.begin_path();
            if self
                .ctx
                .arc(p.pos.x as f64, p.pos.y as f64, p.radius as f64, 0.0, TAU)
                .is_err()
            {
                continue;
            }
            self.ctx.set_fill_style_str(&accent_fill(p.alpha));
            self.ctx.fill();
        }

        field.step();
    }
}

/// rgba() fill for the accent hue at the dot's opacity.
#[inline]
fn accent_fill(alpha: f32) -> String {
    format!(
        "rgba({},{},{},{})",
        ACCENT_RGB[0], ACCENT_RGB[1], ACCENT_RGB[2], alpha
    )
}

/// Self-perpetuating requestAnimationFrame loop; runs for the page lifetime.
pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        if let Some(w) = web::window() {
            _ = w.request_animation_frame(
                tick_clone
                    .borrow()
                    .as_ref()
                    .unwrap()
                    .as_ref()
                    .unchecked_ref(),
            );
        }
    }) as Box<dyn FnMut()>));
    if let Some(w) = web::window() {
        _ = w.request_animation_frame(tick.borrow().as_ref().unwrap().as_ref().unchecked_ref());
    }
}
