//! Window Helpers
//!
//! Thin wrappers over `web_sys::Window` used by the components.
//! All of them degrade to a neutral value when there is no window.

use wasm_bindgen::JsCast;

pub fn viewport_width() -> f64 {
    web_sys::window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0)
}

/// Viewport height, falling back to the root element's client height
pub fn viewport_height() -> f64 {
    let Some(win) = web_sys::window() else { return 0.0 };
    if let Some(h) = win.inner_height().ok().and_then(|v| v.as_f64()) {
        return h;
    }
    win.document()
        .and_then(|d| d.document_element())
        .map(|el| f64::from(el.client_height()))
        .unwrap_or(0.0)
}

pub fn scroll_y() -> f64 {
    web_sys::window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0)
}

/// `offsetTop` of the element with the given id
pub fn section_offset_top(id: &str) -> Option<f64> {
    let el = web_sys::window()?.document()?.get_element_by_id(id)?;
    let el = el.dyn_into::<web_sys::HtmlElement>().ok()?;
    Some(f64::from(el.offset_top()))
}

pub fn smooth_scroll_to(top: f64) {
    if let Some(win) = web_sys::window() {
        let opts = web_sys::ScrollToOptions::new();
        opts.set_top(top);
        opts.set_behavior(web_sys::ScrollBehavior::Smooth);
        win.scroll_to_with_scroll_to_options(&opts);
    }
}

/// Native confirm dialog. No window counts as a cancel.
pub fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}

pub fn alert(message: &str) {
    if let Some(win) = web_sys::window() {
        let _ = win.alert_with_message(message);
    }
}

/// Uniform roll in `[0, 1)`
pub fn random() -> f64 {
    js_sys::Math::random()
}
