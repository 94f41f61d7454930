use crate::typing::Typewriter;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Handle to a running typewriter. `cancel` stops the pending timeout and
/// flags the tick so an already-queued callback does nothing.
pub struct TypewriterHandle {
    timeout_id: Rc<Cell<Option<i32>>>,
    cancelled: Rc<Cell<bool>>,
    _tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
}

impl TypewriterHandle {
    pub fn cancel(&self) {
        self.cancelled.set(true);
        if let (Some(w), Some(id)) = (web::window(), self.timeout_id.take()) {
            w.clear_timeout_with_handle(id);
        }
    }
}

/// Drives the pure [`Typewriter`] machine with self-rescheduling timeouts,
/// writing each step into the target element's text content.
pub fn start(target: web::Element, mut machine: Typewriter) -> TypewriterHandle {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let timeout_id = Rc::new(Cell::new(None));
    let cancelled = Rc::new(Cell::new(false));

    let tick_clone = tick.clone();
    let timeout_id_clone = timeout_id.clone();
    let cancelled_clone = cancelled.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if cancelled_clone.get() {
            return;
        }
        let (text, delay) = machine.tick();
        target.set_text_content(Some(text));
        if let Some(w) = web::window() {
            if let Ok(id) = w.set_timeout_with_callback_and_timeout_and_arguments_0(
                tick_clone.borrow().as_ref().unwrap().as_ref().unchecked_ref(),
                delay as i32,
            ) {
                timeout_id_clone.set(Some(id));
            }
        }
    }) as Box<dyn FnMut()>));

    if let Some(w) = web::window() {
        if let Ok(id) = w.set_timeout_with_callback_and_timeout_and_arguments_0(
            tick.borrow().as_ref().unwrap().as_ref().unchecked_ref(),
            0,
        ) {
            timeout_id.set(Some(id));
        }
    }

    TypewriterHandle {
        timeout_id,
        cancelled,
        _tick: tick,
    }
}
