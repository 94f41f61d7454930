#![cfg(target_arch = "wasm32")]
//! Portfolio page effects: an interactive particle-globe background on a 2D
//! canvas, a typewriter headline, scroll-triggered fade-ins, a persisted
//! dark/light theme, and typed icon resolution. Wired at module start; the
//! page supplies the markup, this crate supplies the behavior.

use crate::icons::IconKind;
use crate::motion::PointerState;
use crate::theme::Theme;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod constants;
mod dom;
mod events;
mod fade;
mod field;
mod frame;
mod icons;
mod loading;
mod modal;
mod motion;
mod render;
mod scroll;
mod theme;
mod typewriter;
mod typing;

const CANVAS_ID: &str = "bg-canvas";
const THEME_TOGGLE_ID: &str = "theme-toggle";

struct App {
    theme: Theme,
    field: Option<frame::FieldInstance>,
    // Page-lifetime listeners (modal, scroll-top); detaching them is the
    // drop path, which the forgotten App never takes.
    _page_listeners: Vec<events::Listener>,
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("orbfield starting");

    if let Err(e) = init() {
        log::error!("init error: {e:?}");
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no window/document"))?;

    let canvas: web::HtmlCanvasElement = document
        .get_element_by_id(CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{CANVAS_ID}"))?
        .dyn_into()
        .map_err(|_| anyhow::anyhow!("#{CANVAS_ID} is not a canvas"))?;

    let theme = dom::load_theme();
    dom::apply_theme(&document, &canvas, theme);
    loading::wire_loading(&document);

    // Pointer state outlives theme rebuilds, so the globe does not snap
    // back to center when the palette changes.
    let pointer = Rc::new(RefCell::new(PointerState::default()));

    let mut page_listeners = modal::wire_modals(&document);
    page_listeners.extend(scroll::wire_scroll_top(&document));

    let app = Rc::new(RefCell::new(App {
        theme,
        field: frame::mount(&canvas, pointer.clone(), theme),
        _page_listeners: page_listeners,
    }));

    wire_theme_toggle(&document, &canvas, app.clone(), pointer);
    wire_typewriter(&document);
    wire_icons(&document);
    fade::wire_fade_ins(&document);

    // The app state lives for the page lifetime; without this the globe's
    // listeners would detach if the page has no toggle button.
    std::mem::forget(app);

    Ok(())
}

/// Flips, persists, and applies the theme, then rebuilds the globe with the
/// new palette, a full remount exactly like the initial one.
fn wire_theme_toggle(
    document: &web::Document,
    canvas: &web::HtmlCanvasElement,
    app: Rc<RefCell<App>>,
    pointer: Rc<RefCell<PointerState>>,
) {
    let document = document.clone();
    let canvas = canvas.clone();
    dom::add_click_listener(&document.clone(), THEME_TOGGLE_ID, move || {
        let mut app = app.borrow_mut();
        let next = app.theme.toggled();
        dom::store_theme(next);
        dom::apply_theme(&document, &canvas, next);
        if let Some(field) = app.field.take() {
            field.unmount();
        }
        app.field = frame::mount(&canvas, pointer.clone(), next);
        app.theme = next;
        log::info!("theme switched to {}", next.as_str());
    });
}

/// The headline element carries its rotation as `data-typewriter`, strings
/// separated by `|`.
fn wire_typewriter(document: &web::Document) {
    let Ok(Some(el)) = document.query_selector("[data-typewriter]") else {
        return;
    };
    let strings: Vec<String> = el
        .get_attribute("data-typewriter")
        .unwrap_or_default()
        .split('|')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect();
    if strings.is_empty() {
        return;
    }
    // The handle's closure keeps itself alive; the machine runs for the
    // page lifetime.
    let _handle = typewriter::start(el, typing::Typewriter::with_defaults(strings));
}

/// Resolves every `[data-icon]` reference through the typed catalogue;
/// unknown names render the fallback glyph instead of a lookalike.
fn wire_icons(document: &web::Document) {
    let Ok(nodes) = document.query_selector_all("[data-icon]") else {
        return;
    };
    for i in 0..nodes.length() {
        let Some(el) = nodes.item(i).and_then(|n| n.dyn_into::<web::Element>().ok()) else {
            continue;
        };
        let name = el.get_attribute("data-icon").unwrap_or_default();
        let kind = IconKind::from_name(&name);
        if kind == IconKind::Fallback && !name.is_empty() {
            log::warn!("unknown icon name {name:?}, using fallback glyph");
        }
        _ = el.set_attribute("href", &format!("#{}", kind.glyph_id()));
    }
}
