//! Registration Form
//!
//! Injects placeholder text into the registration fields, which the server
//! renders without any.

use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlInputElement};

/// Field ids and the placeholder each one receives
const PLACEHOLDERS: [(&str, &str); 3] = [
    ("id_username", "Username"),
    ("id_password1", "Password"),
    ("id_password2", "Confirm Password"),
];

/// Fill in placeholders on whichever registration fields are present.
/// Returns how many fields were updated.
pub fn bind(document: &Document) -> usize {
    let mut updated = 0;
    for (id, placeholder) in PLACEHOLDERS {
        if let Some(element) = document.get_element_by_id(id) {
            if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
                input.set_placeholder(placeholder);
                updated += 1;
            }
        }
    }
    updated
}
