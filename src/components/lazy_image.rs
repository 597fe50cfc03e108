//! Lazy Images
//!
//! Defers marked image loads until the image scrolls into view. Each image
//! is loaded at most once and then dropped from the observer.

use wasm_bindgen::prelude::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlImageElement, IntersectionObserver, IntersectionObserverEntry};

use crate::dom;

/// Selector for images awaiting their real source
const SELECTOR: &str = "img.lazy[data-src]";

/// Observe every marked image in the document. Returns how many are being
/// watched, or how many were loaded eagerly when the observer is
/// unavailable.
pub fn bind_all(document: &Document) -> Result<usize, JsValue> {
    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = match entry.dyn_into() {
                    Ok(entry) => entry,
                    Err(_) => continue,
                };
                if !entry.is_intersecting() {
                    continue;
                }

                let target = entry.target();
                load_now(&target);
                observer.unobserve(&target);
            }
        },
    )
        as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

    let observer = match IntersectionObserver::new(callback.as_ref().unchecked_ref()) {
        Ok(observer) => observer,
        Err(e) => {
            // No observer support: load everything up front rather than never.
            web_sys::console::warn_1(
                &format!("IntersectionObserver unavailable, loading eagerly: {:?}", e).into(),
            );
            return dom::for_each_selector(document, SELECTOR, |element| {
                load_now(&element);
                true
            });
        }
    };

    let observed = dom::for_each_selector(document, SELECTOR, |element| {
        observer.observe(&element);
        true
    })?;

    // The observer callback lives for the page.
    callback.forget();
    Ok(observed)
}

fn load_now(element: &Element) {
    let img = match element.dyn_ref::<HtmlImageElement>() {
        Some(img) => img,
        None => return,
    };

    if let Some(src) = element.get_attribute("data-src") {
        img.set_src(&src);
    }
    let _ = element.class_list().remove_1("lazy");
}
