use crate::events::Listener;
use web_sys as web;

/// Lightbox wiring for project videos and certificate images.
///
/// Markup contract: a trigger carries `data-modal-open="<modal id>"` and
/// optionally `data-modal-src` (copied into the modal's
/// `[data-modal-frame]` on open). The modal element itself is the
/// backdrop: clicking it, or any `[data-modal-close]` inside it, closes;
/// clicks on inner content do not. Visibility is the `open` class, CSS
/// owns the transition.
pub fn wire_modals(document: &web::Document) -> Vec<Listener> {
    let mut listeners = Vec::new();

    if let Ok(nodes) = document.query_selector_all("[data-modal-open]") {
        for i in 0..nodes.length() {
            let Some(trigger) = element_at(&nodes, i) else {
                continue;
            };
            let Some(modal) = trigger
                .get_attribute("data-modal-open")
                .and_then(|id| document.get_element_by_id(&id))
            else {
                log::warn!("modal trigger without a matching modal element");
                continue;
            };
            let src = trigger.get_attribute("data-modal-src");
            let modal = modal.clone();
            listeners.extend(Listener::attach(&trigger, "click", move |_| {
                open(&modal, src.as_deref());
            }));
        }
    }

    if let Ok(nodes) = document.query_selector_all("[data-modal]") {
        for i in 0..nodes.length() {
            let Some(modal) = element_at(&nodes, i) else {
                continue;
            };

            // Backdrop click: only when the modal element itself is hit.
            let backdrop: web::EventTarget = modal.clone().into();
            let modal_for_backdrop = modal.clone();
            listeners.extend(Listener::attach(&modal, "click", move |ev: web::Event| {
                if ev.target().as_ref() == Some(&backdrop) {
                    close(&modal_for_backdrop);
                }
            }));

            if let Ok(closers) = modal.query_selector_all("[data-modal-close]") {
                for j in 0..closers.length() {
                    let Some(closer) = element_at(&closers, j) else {
                        continue;
                    };
                    let modal = modal.clone();
                    listeners.extend(Listener::attach(&closer, "click", move |_| {
                        close(&modal);
                    }));
                }
            }
        }
    }

    listeners
}

fn open(modal: &web::Element, src: Option<&str>) {
    if let (Some(src), Ok(Some(frame))) = (src, modal.query_selector("[data-modal-frame]")) {
        _ = frame.set_attribute("src", src);
    }
    _ = modal.class_list().add_1("open");
}

fn close(modal: &web::Element) {
    _ = modal.class_list().remove_1("open");
    // Dropping the frame src stops an embedded video from playing in the
    // background, the way unmounting the frame would.
    if let Ok(Some(frame)) = modal.query_selector("[data-modal-frame]") {
        _ = frame.set_attribute("src", "");
    }
}

fn element_at(nodes: &web::NodeList, index: u32) -> Option<web::Element> {
    use wasm_bindgen::JsCast;
    nodes.item(index).and_then(|n| n.dyn_into().ok())
}
