//! One-shot viewport visibility, shared by the reveal effects and the stat
//! counters. Each observed element fires at most once.

use wasm_bindgen::prelude::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

/// Runs `on_visible` the first time `element` intersects the viewport, then
/// stops observing it. The observer and its callback stay alive for the
/// page's lifetime; elements only ever animate once, so nothing needs to be
/// torn down.
pub fn observe_once<F>(element: &Element, threshold: f64, root_margin: Option<&str>, on_visible: F)
where
    F: Fn(Element) + 'static,
{
    let callback = Closure::<dyn Fn(js_sys::Array, IntersectionObserver)>::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                if entry.is_intersecting() {
                    observer.unobserve(&entry.target());
                    on_visible(entry.target());
                }
            }
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(threshold));
    if let Some(margin) = root_margin {
        options.set_root_margin(margin);
    }

    match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
        Ok(observer) => {
            observer.observe(element);
            callback.forget();
        }
        Err(err) => gloo_console::error!("failed to create intersection observer", err),
    }
}

/// Adds the `fade-in` class when `element` first scrolls into view.
/// Root margin matches the visual offset of the section reveals.
pub fn reveal_on_scroll(element: &Element) {
    observe_once(element, 0.1, Some("0px 0px -50px 0px"), |el| {
        let _ = el.class_list().add_1("fade-in");
    });
}
