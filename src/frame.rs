use crate::events::{self, Listener};
use crate::field::{self, FieldConfig, Point};
use crate::motion::{self, PointerState, RotationState};
use crate::render;
use glam::Vec2;
use instant::Instant;
use rand::thread_rng;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Everything one frame needs, owned by the loop. Points and config are
/// built at mount; rotation is the only cross-frame mutable state besides
/// the shared pointer snapshot.
pub struct FrameContext {
    pub ctx: web::CanvasRenderingContext2d,
    pub config: FieldConfig,
    pub points: Vec<Point>,
    pub rotation: RotationState,
    pub pointer: Rc<RefCell<PointerState>>,
    /// Live viewport in logical pixels; resize updates it, the frame reads
    /// it for clearing and centering.
    pub viewport: Rc<RefCell<Vec2>>,
    pub started: Instant,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let viewport = *self.viewport.borrow();
        // Center and clear follow the live viewport; radius and point count
        // intentionally do not (initialization-only geometry).
        self.config.width = viewport.x;
        self.config.height = viewport.y;

        render::clear(&self.ctx, viewport.x, viewport.y);

        let t = self.started.elapsed().as_secs_f32();
        let (target_pitch, target_yaw) = motion::pointer_target(*self.pointer.borrow(), viewport);
        self.rotation.step(target_pitch, target_yaw);

        let projected = field::project(
            &self.points,
            self.rotation.pitch,
            self.rotation.yaw,
            t,
            &self.config,
        );
        let segments = field::connections(&projected, &self.config);
        render::draw_segments(&self.ctx, &segments, self.config.color);
        render::draw_points(&self.ctx, &projected, self.config.color);
    }
}

/// Handle to a running requestAnimationFrame loop. `cancel` revokes the
/// pending request and flags the tick so a callback already queued by the
/// host does nothing.
pub struct RafHandle {
    raf_id: Rc<Cell<Option<i32>>>,
    cancelled: Rc<Cell<bool>>,
    _tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
}

impl RafHandle {
    pub fn cancel(&self) {
        self.cancelled.set(true);
        if let (Some(w), Some(id)) = (web::window(), self.raf_id.take()) {
            _ = w.cancel_animation_frame(id);
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) -> RafHandle {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let raf_id = Rc::new(Cell::new(None));
    let cancelled = Rc::new(Cell::new(false));

    let tick_clone = tick.clone();
    let raf_id_clone = raf_id.clone();
    let cancelled_clone = cancelled.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if cancelled_clone.get() {
            return;
        }
        frame_ctx.borrow_mut().frame();
        if let Some(w) = web::window() {
            if let Ok(id) = w.request_animation_frame(
                tick_clone
                    .borrow()
                    .as_ref()
                    .unwrap()
                    .as_ref()
                    .unchecked_ref(),
            ) {
                raf_id_clone.set(Some(id));
            }
        }
    }) as Box<dyn FnMut()>));

    if let Some(w) = web::window() {
        if let Ok(id) =
            w.request_animation_frame(tick.borrow().as_ref().unwrap().as_ref().unchecked_ref())
        {
            raf_id.set(Some(id));
        }
    }

    RafHandle {
        raf_id,
        cancelled,
        _tick: tick,
    }
}

/// A mounted particle globe: the running loop plus the listeners it owns.
pub struct FieldInstance {
    raf: RafHandle,
    _listeners: Vec<Listener>,
}

impl FieldInstance {
    pub fn unmount(self) {
        self.raf.cancel();
        // Listeners detach on drop.
        log::info!("particle globe unmounted");
    }
}

/// Builds the globe for the current viewport and theme and starts the
/// frame loop. Returns `None` without animating if the 2D context or the
/// viewport cannot be acquired; the page stays inert rather than failing.
pub fn mount(
    canvas: &web::HtmlCanvasElement,
    pointer: Rc<RefCell<PointerState>>,
    theme: crate::theme::Theme,
) -> Option<FieldInstance> {
    let ctx = match canvas.get_context("2d") {
        Ok(Some(obj)) => match obj.dyn_into::<web::CanvasRenderingContext2d>() {
            Ok(ctx) => ctx,
            Err(_) => {
                log::warn!("canvas context is not 2d; particle globe disabled");
                return None;
            }
        },
        _ => {
            log::warn!("2d canvas context unavailable; particle globe disabled");
            return None;
        }
    };

    let viewport = match crate::dom::viewport_size() {
        Some(v) => v,
        None => {
            log::warn!("viewport size unavailable; particle globe disabled");
            return None;
        }
    };
    crate::dom::sync_canvas_backing_size(canvas, &ctx);

    let config = FieldConfig::for_viewport(viewport.x, viewport.y, theme);
    let points = field::generate_points(&mut thread_rng(), &config);
    log::info!(
        "particle globe mounted: {} points, radius {:.1}px, {:?}",
        points.len(),
        config.radius,
        theme
    );

    let viewport = Rc::new(RefCell::new(viewport));
    let frame_ctx = Rc::new(RefCell::new(FrameContext {
        ctx: ctx.clone(),
        config,
        points,
        rotation: RotationState::default(),
        pointer: pointer.clone(),
        viewport: viewport.clone(),
        started: Instant::now(),
    }));

    let listeners: Vec<Listener> = [
        events::wire_pointer_move(pointer),
        events::wire_resize(canvas.clone(), ctx, viewport),
    ]
    .into_iter()
    .flatten()
    .collect();

    Some(FieldInstance {
        raf: start_loop(frame_ctx),
        _listeners: listeners,
    })
}
