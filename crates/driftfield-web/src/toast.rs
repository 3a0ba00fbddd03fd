use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::constants::{TOAST_HIDE_DELAY_MS, TOAST_SELECTOR};

/// Hide the toast banner if the page has one; a page without a toast is fine.
#[inline]
pub fn hide(document: &web::Document) {
    if let Ok(Some(el)) = document.query_selector(TOAST_SELECTOR) {
        if let Ok(el) = el.dyn_into::<web::HtmlElement>() {
            _ = el.style().set_property("display", "none");
        }
    }
}

/// One-shot timer that hides the toast a fixed delay after startup.
///
/// No cancellation path: a toast the user already dismissed just makes the
/// callback a no-op.
pub fn schedule_auto_hide(window: &web::Window) {
    let closure = Closure::once(move || {
        if let Some(document) = crate::dom::window_document() {
            hide(&document);
        }
    });
    _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(
        closure.as_ref().unchecked_ref(),
        TOAST_HIDE_DELAY_MS,
    );
    closure.forget();
}
