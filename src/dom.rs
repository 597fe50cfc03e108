//! DOM Utilities
//!
//! Shared helpers for cookie access, event wiring and element queries.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, EventTarget, HtmlDocument};

/// Extract a cookie value from a raw cookie header string.
///
/// Matches the name exactly (a cookie named `xcsrftoken` never satisfies a
/// lookup for `csrftoken`), trims surrounding whitespace and percent-decodes
/// the value. Returns `None` when the cookie is absent or its value does not
/// decode to valid UTF-8.
pub fn cookie_value(header: &str, name: &str) -> Option<String> {
    if header.is_empty() {
        return None;
    }

    for part in header.split(';') {
        let part = part.trim();
        if let Some(raw) = part.strip_prefix(name).and_then(|rest| rest.strip_prefix('=')) {
            return urlencoding::decode(raw).ok().map(|value| value.into_owned());
        }
    }

    None
}

/// Read a cookie from the document.
pub fn get_cookie(document: &Document, name: &str) -> Option<String> {
    // The cookie accessor lives on HtmlDocument, not Document
    let html_doc = document.dyn_ref::<HtmlDocument>()?;
    let cookies = html_doc.cookie().ok()?;
    cookie_value(&cookies, name)
}

/// Attach an event listener that lives for the lifetime of the page.
///
/// Handlers on server-rendered elements are never detached, so the closure
/// is leaked intentionally.
pub fn listen(
    target: &EventTarget,
    event: &str,
    handler: impl FnMut(Event) + 'static,
) -> Result<(), JsValue> {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Run `bind` over every element matching `selector` and count the elements
/// it accepts.
pub fn for_each_selector(
    document: &Document,
    selector: &str,
    mut bind: impl FnMut(Element) -> bool,
) -> Result<usize, JsValue> {
    let nodes = document.query_selector_all(selector)?;
    let mut bound = 0;

    for index in 0..nodes.length() {
        if let Some(node) = nodes.get(index) {
            if let Ok(element) = node.dyn_into::<Element>() {
                if bind(element) {
                    bound += 1;
                }
            }
        }
    }

    Ok(bound)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cookie_value_single() {
        assert_eq!(
            cookie_value("csrftoken=abc123", "csrftoken"),
            Some("abc123".to_string())
        );
    }

    #[test]
    fn test_cookie_value_among_many() {
        let header = "sessionid=xyz; csrftoken=abc123; theme=dark";
        assert_eq!(cookie_value(header, "csrftoken"), Some("abc123".to_string()));
        assert_eq!(cookie_value(header, "sessionid"), Some("xyz".to_string()));
        assert_eq!(cookie_value(header, "theme"), Some("dark".to_string()));
    }

    #[test]
    fn test_cookie_value_trims_whitespace() {
        assert_eq!(
            cookie_value("sessionid=xyz;   csrftoken=abc123  ", "csrftoken"),
            Some("abc123".to_string())
        );
    }

    #[test]
    fn test_cookie_value_percent_decoded() {
        assert_eq!(
            cookie_value("csrftoken=a%2Bb%3Dc", "csrftoken"),
            Some("a+b=c".to_string())
        );
    }

    #[test]
    fn test_cookie_value_exact_name_only() {
        // A longer cookie name sharing the prefix must not match
        let header = "xcsrftoken=evil; csrftoken=good";
        assert_eq!(cookie_value(header, "csrftoken"), Some("good".to_string()));

        // And a shorter one must not match a longer lookup
        assert_eq!(cookie_value("csrf=short", "csrftoken"), None);
    }

    #[test]
    fn test_cookie_value_missing() {
        assert_eq!(cookie_value("", "csrftoken"), None);
        assert_eq!(cookie_value("sessionid=xyz", "csrftoken"), None);
    }

    #[test]
    fn test_cookie_value_empty_value() {
        assert_eq!(cookie_value("csrftoken=", "csrftoken"), Some(String::new()));
    }
}
