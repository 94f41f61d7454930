use crate::constants::FADE_THRESHOLD;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

/// Reveals `[data-fade]` elements the first time they scroll into view:
/// each gets the `visible` class on first intersection and is unobserved.
/// CSS owns the actual transition.
pub fn wire_fade_ins(document: &web::Document) {
    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: web::IntersectionObserver| {
            for entry in entries.iter() {
                let entry: web::IntersectionObserverEntry = entry.unchecked_into();
                if entry.is_intersecting() {
                    let target = entry.target();
                    _ = target.class_list().add_1("visible");
                    observer.unobserve(&target);
                }
            }
        },
    )
        as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);

    let options = web::IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(FADE_THRESHOLD));
    let observer = match web::IntersectionObserver::new_with_options(
        callback.as_ref().unchecked_ref(),
        &options,
    ) {
        Ok(o) => o,
        Err(_) => {
            log::warn!("IntersectionObserver unavailable; fade-ins shown immediately");
            reveal_all(document);
            return;
        }
    };

    let mut observed = 0;
    if let Ok(nodes) = document.query_selector_all("[data-fade]") {
        for i in 0..nodes.length() {
            if let Some(el) = nodes.item(i).and_then(|n| n.dyn_into::<web::Element>().ok()) {
                observer.observe(&el);
                observed += 1;
            }
        }
    }
    log::debug!("observing {observed} fade-in elements");

    // The observer and its callback live for the page lifetime.
    callback.forget();
}

fn reveal_all(document: &web::Document) {
    if let Ok(nodes) = document.query_selector_all("[data-fade]") {
        for i in 0..nodes.length() {
            if let Some(el) = nodes.item(i).and_then(|n| n.dyn_into::<web::Element>().ok()) {
                _ = el.class_list().add_1("visible");
            }
        }
    }
}
