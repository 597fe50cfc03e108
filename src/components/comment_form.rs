//! Comment Form
//!
//! Validates comment submissions and shows a posting state before handing the
//! form back to the browser. Also drives the typing indicator on comment
//! inputs.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, HtmlElement, HtmlFormElement, HtmlInputElement, HtmlTextAreaElement};

use crate::dom;
use crate::state::global::ControllerState;

/// Selector for comment forms
const FORM_SELECTOR: &str = ".comment-form";

/// Selector for comment inputs, both inside forms and standalone
const INPUT_SELECTOR: &str = ".comment-input";

/// Label shown on the submit button while the delayed submission is pending
const BUSY_LABEL: &str = "⏳ Posting...";

/// A comment is valid when it contains something other than whitespace.
pub fn is_valid_comment(text: &str) -> bool {
    !text.trim().is_empty()
}

/// Bind every comment form in the document. Returns how many were bound.
pub fn bind_all(state: &ControllerState) -> Result<usize, JsValue> {
    dom::for_each_selector(&state.document, FORM_SELECTOR, |element| {
        bind(state, element)
    })
}

fn bind(state: &ControllerState, element: Element) -> bool {
    let form: HtmlFormElement = match element.dyn_into() {
        Ok(form) => form,
        Err(_) => return false,
    };

    // Set once a valid submission is scheduled. The page reload that follows
    // the native submit discards it; a failed submit clears it instead.
    let pending = Rc::new(Cell::new(false));

    let state = state.clone();
    let handler_form = form.clone();
    let result = dom::listen(&form, "submit", move |event| {
        event.prevent_default();
        handle_submit(&state, &handler_form, &pending);
    });

    match result {
        Ok(()) => true,
        Err(e) => {
            web_sys::console::error_1(&format!("Failed to bind comment form: {:?}", e).into());
            false
        }
    }
}

fn handle_submit(state: &ControllerState, form: &HtmlFormElement, pending: &Rc<Cell<bool>>) {
    if pending.get() {
        return;
    }

    let input = match form.query_selector(INPUT_SELECTOR) {
        Ok(Some(input)) => input,
        _ => {
            web_sys::console::warn_1(&"Comment form without a .comment-input, skipping".into());
            return;
        }
    };

    let comment = field_value(&input).unwrap_or_default();
    if !is_valid_comment(&comment) {
        state.show_error("Please enter a comment!");
        if let Some(input) = input.dyn_ref::<HtmlElement>() {
            let _ = input.focus();
        }
        return;
    }

    pending.set(true);

    let button = form
        .query_selector("button")
        .ok()
        .flatten()
        .and_then(|button| button.dyn_into::<HtmlElement>().ok());
    let label = button.as_ref().and_then(|button| button.text_content());
    if let Some(button) = &button {
        let _ = button.class_list().add_1("loading");
        button.set_text_content(Some(BUSY_LABEL));
    }

    let form = form.clone();
    let pending = Rc::clone(pending);
    Timeout::new(state.config.timing.submit_delay_ms, move || {
        // The native submit does not fire the submit event again, so the
        // handler above is not re-entered.
        if let Err(e) = form.submit() {
            web_sys::console::error_1(&format!("Comment submit failed: {:?}", e).into());
            // No page transition is coming; release the form so the next
            // attempt is accepted.
            pending.set(false);
            if let Some(button) = &button {
                let _ = button.class_list().remove_1("loading");
                button.set_text_content(label.as_deref());
            }
        }
    })
    .forget();
}

fn field_value(element: &Element) -> Option<String> {
    if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
        return Some(input.value());
    }
    element
        .dyn_ref::<HtmlTextAreaElement>()
        .map(|area| area.value())
}

/// Bind the typing indicator to every comment input. Returns how many inputs
/// were bound.
pub fn bind_typing_indicators(state: &ControllerState) -> Result<usize, JsValue> {
    let typing_ms = state.config.timing.typing_ms;
    dom::for_each_selector(&state.document, INPUT_SELECTOR, |element| {
        bind_typing(element, typing_ms)
    })
}

fn bind_typing(element: Element, typing_ms: u32) -> bool {
    let container = match element.parent_element() {
        Some(container) => container,
        None => return false,
    };

    let timer: RefCell<Option<Timeout>> = RefCell::new(None);

    let result = dom::listen(&element, "input", move |_| {
        // Dropping the previous timer cancels it, so the class only comes
        // off once typing has paused.
        drop(timer.borrow_mut().take());

        let _ = container.class_list().add_1("typing");

        let container = container.clone();
        let next = Timeout::new(typing_ms, move || {
            let _ = container.class_list().remove_1("typing");
        });
        *timer.borrow_mut() = Some(next);
    });

    match result {
        Ok(()) => true,
        Err(e) => {
            web_sys::console::error_1(&format!("Failed to bind typing indicator: {:?}", e).into());
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_comment() {
        assert!(is_valid_comment("Nice post!"));
        assert!(is_valid_comment("  padded  "));
    }

    #[test]
    fn test_blank_comment_rejected() {
        assert!(!is_valid_comment(""));
        assert!(!is_valid_comment("   "));
        assert!(!is_valid_comment("\n\t "));
    }
}
