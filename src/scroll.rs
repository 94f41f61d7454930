use crate::constants::SCROLL_TOP_THRESHOLD_PX;
use crate::events::Listener;
use web_sys as web;

/// Scroll-to-top button: `#scroll-top` gains the `visible` class past a
/// fixed scroll depth, and clicking it smooth-scrolls back to the top.
pub fn wire_scroll_top(document: &web::Document) -> Vec<Listener> {
    let Some(button) = document.get_element_by_id("scroll-top") else {
        return Vec::new();
    };
    let Some(window) = web::window() else {
        return Vec::new();
    };

    let mut listeners = Vec::new();

    let button_for_scroll = button.clone();
    listeners.extend(Listener::attach(&window, "scroll", move |_| {
        let depth = web::window()
            .and_then(|w| w.scroll_y().ok())
            .unwrap_or(0.0);
        let classes = button_for_scroll.class_list();
        let result = if depth > SCROLL_TOP_THRESHOLD_PX {
            classes.add_1("visible")
        } else {
            classes.remove_1("visible")
        };
        if result.is_err() {
            log::debug!("could not toggle scroll-top visibility");
        }
    }));

    listeners.extend(Listener::attach(&button, "click", move |_| {
        if let Some(w) = web::window() {
            let options = web::ScrollToOptions::new();
            options.set_top(0.0);
            options.set_behavior(web::ScrollBehavior::Smooth);
            w.scroll_to_with_scroll_to_options(&options);
        }
    }));

    listeners
}
