use crate::constants::{LOADING_DISMISS_MS, LOADING_DOTS_INTERVAL_MS};
use crate::typing;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Dismisses the startup `[data-loading]` overlay after a fixed delay,
/// cycling the dots of any `[data-loading-dots]` indicator inside it until
/// then. Pages without the overlay are left alone.
pub fn wire_loading(document: &web::Document) {
    let Ok(Some(overlay)) = document.query_selector("[data-loading]") else {
        return;
    };
    let dismissed = Rc::new(Cell::new(false));

    if let Ok(Some(dots_el)) = overlay.query_selector("[data-loading-dots]") {
        animate_dots(dots_el, dismissed.clone());
    }

    let overlay_for_timer = overlay.clone();
    let dismiss = Closure::wrap(Box::new(move || {
        dismissed.set(true);
        _ = overlay_for_timer.class_list().add_1("hidden");
        log::info!("loading overlay dismissed");
    }) as Box<dyn FnMut()>);
    if let Some(w) = web::window() {
        _ = w.set_timeout_with_callback_and_timeout_and_arguments_0(
            dismiss.as_ref().unchecked_ref(),
            LOADING_DISMISS_MS as i32,
        );
    }
    dismiss.forget();
}

/// Self-rescheduling dot cycle in the typewriter driver's style; stops
/// rescheduling once the overlay is dismissed.
fn animate_dots(target: web::Element, dismissed: Rc<Cell<bool>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let mut step = 0usize;

    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if dismissed.get() {
            return;
        }
        step += 1;
        target.set_text_content(Some(typing::loading_dots(step)));
        if let Some(w) = web::window() {
            _ = w.set_timeout_with_callback_and_timeout_and_arguments_0(
                tick_clone.borrow().as_ref().unwrap().as_ref().unchecked_ref(),
                LOADING_DOTS_INTERVAL_MS as i32,
            );
        }
    }) as Box<dyn FnMut()>));

    if let Some(w) = web::window() {
        _ = w.set_timeout_with_callback_and_timeout_and_arguments_0(
            tick.borrow().as_ref().unwrap().as_ref().unchecked_ref(),
            LOADING_DOTS_INTERVAL_MS as i32,
        );
    }
}
