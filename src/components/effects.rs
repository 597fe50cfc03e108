//! Hover & Press Effects
//!
//! Small inline-style flourishes: cards lift on hover, buttons shrink
//! briefly when clicked.

use gloo_timers::callback::Timeout;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, HtmlElement};

use crate::dom;

/// Selector for hover-lifted cards
const CARD_SELECTOR: &str = ".post, .user-card";

/// Selector for press-animated buttons
const PRESS_SELECTOR: &str = "button, .action-btn";

/// How long a pressed button stays shrunk
const PRESS_MS: u32 = 150;

/// Bind the hover lift to every card. Returns how many were bound.
pub fn bind_card_hover(document: &Document) -> Result<usize, JsValue> {
    dom::for_each_selector(document, CARD_SELECTOR, |element| {
        let card: HtmlElement = match element.dyn_into() {
            Ok(card) => card,
            Err(_) => return false,
        };

        let enter_card = card.clone();
        let enter = dom::listen(&card, "mouseenter", move |_| {
            let _ = enter_card
                .style()
                .set_property("transform", "translateY(-5px) scale(1.02)");
        });

        let leave_card = card.clone();
        let leave = dom::listen(&card, "mouseleave", move |_| {
            let _ = leave_card
                .style()
                .set_property("transform", "translateY(0) scale(1)");
        });

        enter.is_ok() && leave.is_ok()
    })
}

/// Bind the press animation to every button. Returns how many were bound.
pub fn bind_button_press(document: &Document) -> Result<usize, JsValue> {
    dom::for_each_selector(document, PRESS_SELECTOR, |element| {
        let button: HtmlElement = match element.dyn_into() {
            Ok(button) => button,
            Err(_) => return false,
        };

        let press_button = button.clone();
        let result = dom::listen(&button, "click", move |_| {
            let _ = press_button.style().set_property("transform", "scale(0.95)");

            let reset_button = press_button.clone();
            Timeout::new(PRESS_MS, move || {
                // The empty value clears the inline transform.
                let _ = reset_button.style().set_property("transform", "");
            })
            .forget();
        });

        result.is_ok()
    })
}
