#![cfg(target_arch = "wasm32")]
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

use driftfield_core::ParticleField;

pub mod constants;
pub mod dom;
pub mod events;
pub mod frame;
pub mod toast;

use constants::CANVAS_ID;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("driftfield-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    // Card wiring and the toast are independent of the canvas; wire them
    // first so a missing canvas only takes down the backdrop.
    events::wire_upload_cards(&document);
    toast::schedule_auto_hide(&window);

    let canvas_el = document
        .get_element_by_id(CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", CANVAS_ID))?;
    let canvas: web::HtmlCanvasElement = canvas_el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    let ctx = frame::context_2d(&canvas)?;

    // Canvas backing size tracks the viewport, not CSS layout.
    let size = dom::viewport_size(&window);
    canvas.set_width(size.x as u32);
    canvas.set_height(size.y as u32);

    let seed = (js_sys::Math::random() * u32::MAX as f64) as u64;
    let field = Rc::new(RefCell::new(ParticleField::with_default_count(
        size.x, size.y, seed,
    )));
    {
        let f = field.borrow();
        log::info!(
            "[field] particles={} extent={}x{} seed={}",
            f.particles().len(),
            f.width(),
            f.height(),
            seed
        );
    }

    wire_viewport_resize(&canvas, field.clone());

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext { field, ctx }));
    frame::start_loop(frame_ctx);

    Ok(())
}

fn wire_viewport_resize(canvas: &web::HtmlCanvasElement, field: Rc<RefCell<ParticleField>>) {
    let canvas_resize = canvas.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        if let Some(w) = web::window() {
            let size = dom::viewport_size(&w);
            canvas_resize.set_width(size.x as u32);
            canvas_resize.set_height(size.y as u32);
            field.borrow_mut().resize(size.x, size.y);
        }
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}
