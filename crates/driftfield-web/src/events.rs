//! Upload-card drag-and-drop wiring.
//!
//! The handlers are plain named functions over elements; the closures
//! registered on the cards only translate events into those calls, so the
//! contracts stay exercisable without synthesizing `DragEvent`s.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::constants::CARD_DRAG_TRANSFORM;
use crate::dom;

/// Scale the card up slightly while a drag hovers over it.
#[inline]
pub fn apply_drag_feedback(card: &web::HtmlElement) {
    _ = card.style().set_property("transform", CARD_DRAG_TRANSFORM);
}

/// Restore the card's resting (empty) transform.
#[inline]
pub fn clear_drag_feedback(card: &web::HtmlElement) {
    _ = card.style().remove_property("transform");
}

/// Replace the control's selection with the dropped files.
///
/// An empty or malformed drop clears the selection; nothing is surfaced.
#[inline]
pub fn accept_drop(input: &web::HtmlInputElement, files: Option<web::FileList>) {
    input.set_files(files.as_ref());
}

/// Attach dragover/dragleave/drop to every upload card in `document`.
///
/// A page without upload cards is a silent no-op.
pub fn wire_upload_cards(document: &web::Document) {
    let inputs = dom::upload_inputs(document);
    if inputs.is_empty() {
        return;
    }
    log::info!("[dnd] wiring {} upload card(s)", inputs.len());
    for input in inputs {
        if let Some(card) = dom::card_for_input(&input) {
            wire_card(card, input);
        }
    }
}

fn wire_card(card: web::HtmlElement, input: web::HtmlInputElement) {
    // dragover
    {
        let card_over = card.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::DragEvent| {
            ev.prevent_default();
            apply_drag_feedback(&card_over);
        }) as Box<dyn FnMut(_)>);
        _ = card.add_event_listener_with_callback("dragover", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    // dragleave
    {
        let card_leave = card.clone();
        let closure = Closure::wrap(Box::new(move |_ev: web::DragEvent| {
            clear_drag_feedback(&card_leave);
        }) as Box<dyn FnMut(_)>);
        _ = card.add_event_listener_with_callback("dragleave", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    // drop
    {
        let card_drop = card.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::DragEvent| {
            ev.prevent_default();
            accept_drop(&input, ev.data_transfer().and_then(|dt| dt.files()));
            clear_drag_feedback(&card_drop);
        }) as Box<dyn FnMut(_)>);
        _ = card.add_event_listener_with_callback("drop", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
