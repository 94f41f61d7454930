use crate::theme::Theme;
use glam::Vec2;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Viewport size in logical (CSS) pixels.
pub fn viewport_size() -> Option<Vec2> {
    let w = web::window()?;
    let width = w.inner_width().ok()?.as_f64()?;
    let height = w.inner_height().ok()?.as_f64()?;
    Some(Vec2::new(width as f32, height as f32))
}

pub fn device_pixel_ratio() -> f64 {
    web::window().map(|w| w.device_pixel_ratio()).unwrap_or(1.0)
}

/// Sizes the canvas backing store to viewport * devicePixelRatio and scales
/// the 2D context to match, keeping rendering sharp on high-density
/// displays while draw code works in logical pixels.
pub fn sync_canvas_backing_size(
    canvas: &web::HtmlCanvasElement,
    ctx: &web::CanvasRenderingContext2d,
) {
    if let Some(size) = viewport_size() {
        let dpr = device_pixel_ratio();
        canvas.set_width(((size.x as f64 * dpr) as u32).max(1));
        canvas.set_height(((size.y as f64 * dpr) as u32).max(1));
        _ = ctx.scale(dpr, dpr);
    }
}

#[inline]
pub fn add_click_listener(
    document: &web::Document,
    element_id: &str,
    mut handler: impl FnMut() + 'static,
) {
    if let Some(el) = document.get_element_by_id(element_id) {
        let closure =
            wasm_bindgen::closure::Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
        let _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

/// Reads the persisted theme; absent, denied, or unrecognized storage all
/// fall back to dark.
pub fn load_theme() -> Theme {
    let stored = web::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .and_then(|s| s.get_item(Theme::STORAGE_KEY).ok().flatten());
    Theme::from_stored(stored.as_deref())
}

/// Denied storage is non-fatal; the preference just does not stick.
pub fn store_theme(theme: Theme) {
    let stored = web::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .map(|s| s.set_item(Theme::STORAGE_KEY, theme.as_str()));
    if !matches!(stored, Some(Ok(()))) {
        log::debug!("theme preference not persisted (storage unavailable)");
    }
}

/// Applies a theme outside the canvas: root `dark` class and the canvas
/// container opacity.
pub fn apply_theme(document: &web::Document, canvas: &web::HtmlCanvasElement, theme: Theme) {
    if let Some(root) = document.document_element() {
        let classes = root.class_list();
        let result = if theme.is_dark() {
            classes.add_1("dark")
        } else {
            classes.remove_1("dark")
        };
        if result.is_err() {
            log::debug!("could not update root theme class");
        }
    }
    _ = canvas
        .style()
        .set_property("opacity", &format!("{}", theme.canvas_opacity()));
}
