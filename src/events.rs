use crate::dom;
use crate::motion::PointerState;
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// A DOM event listener that can be detached. Unlike a forgotten closure
/// this keeps teardown airtight: after `detach` (or drop) the callback can
/// no longer fire and nothing leaks across globe rebuilds.
pub struct Listener {
    target: web::EventTarget,
    event: &'static str,
    closure: Closure<dyn FnMut(web::Event)>,
}

impl Listener {
    pub fn attach(
        target: &web::EventTarget,
        event: &'static str,
        handler: impl FnMut(web::Event) + 'static,
    ) -> Option<Listener> {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
        target
            .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
            .ok()?;
        Some(Listener {
            target: target.clone(),
            event,
            closure,
        })
    }

    pub fn detach(&self) {
        _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.closure.as_ref().unchecked_ref());
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        self.detach();
    }
}

/// Forwards pointer movement into the shared pointer state. The frame loop
/// reads the latest value once per frame; the listener never touches
/// rotation or points directly.
pub fn wire_pointer_move(pointer: Rc<RefCell<PointerState>>) -> Option<Listener> {
    let window = web::window()?;
    Listener::attach(&window, "pointermove", move |ev: web::Event| {
        if let Some(ev) = ev.dyn_ref::<web::PointerEvent>() {
            pointer
                .borrow_mut()
                .set(ev.client_x() as f32, ev.client_y() as f32);
        }
    })
}

/// Resize resyncs the canvas backing store and the live viewport used for
/// clearing and centering. The particle set and globe radius are left
/// alone; geometry is sized once at mount and again on theme rebuilds.
pub fn wire_resize(
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
    viewport: Rc<RefCell<Vec2>>,
) -> Option<Listener> {
    let window = web::window()?;
    Listener::attach(&window, "resize", move |_| {
        dom::sync_canvas_backing_size(&canvas, &ctx);
        if let Some(size) = dom::viewport_size() {
            *viewport.borrow_mut() = size;
        }
    })
}
