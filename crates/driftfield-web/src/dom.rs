use glam::Vec2;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::constants::{CARD_SELECTOR, UPLOAD_INPUT_SELECTOR};

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Viewport inner size in CSS pixels, clamped to at least 1x1.
#[inline]
pub fn viewport_size(window: &web::Window) -> Vec2 {
    let w = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    let h = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    Vec2::new(w.max(1.0) as f32, h.max(1.0) as f32)
}

/// Nearest enclosing card container for an upload control.
#[inline]
pub fn card_for_input(input: &web::Element) -> Option<web::HtmlElement> {
    input
        .closest(CARD_SELECTOR)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
}

/// Every file-upload control living inside a card, in document order.
pub fn upload_inputs(document: &web::Document) -> Vec<web::HtmlInputElement> {
    let mut inputs = Vec::new();
    if let Ok(list) = document.query_selector_all(UPLOAD_INPUT_SELECTOR) {
        for i in 0..list.length() {
            if let Some(node) = list.item(i) {
                if let Ok(input) = node.dyn_into::<web::HtmlInputElement>() {
                    inputs.push(input);
                }
            }
        }
    }
    inputs
}
