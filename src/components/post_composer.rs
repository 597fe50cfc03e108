//! Post Composer
//!
//! Live character counter, auto-growing textarea and focus styling for the
//! post composer. The counter element is created on first input and adopted
//! on later passes so repeat binds never stack duplicates.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement, HtmlTextAreaElement};

use crate::config::ComposerConfig;
use crate::dom;
use crate::state::global::ControllerState;

/// Selector for the composer form
const FORM_SELECTOR: &str = ".post-form";

/// Selector for the composer textarea inside the form
const TEXTAREA_SELECTOR: &str = ".post-textarea";

/// Selector for the counter element inside the textarea's container
const COUNTER_SELECTOR: &str = ".char-counter";

/// Inline style applied to a freshly created counter
const COUNTER_STYLE: &str =
    "text-align: right; font-size: 12px; margin-top: 5px; color: #4CAF50;";

/// Color band for the character counter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CounterTier {
    Normal,
    Warning,
    Over,
}

impl CounterTier {
    /// Classify a character count against the configured limits.
    pub fn for_count(count: usize, limits: &ComposerConfig) -> Self {
        if count > limits.char_limit {
            CounterTier::Over
        } else if count > limits.warn_above {
            CounterTier::Warning
        } else {
            CounterTier::Normal
        }
    }

    /// Counter text color for this tier
    pub fn color(&self) -> &'static str {
        match self {
            CounterTier::Normal => "#4CAF50",
            CounterTier::Warning => "#ff9800",
            CounterTier::Over => "#f44336",
        }
    }
}

/// Counter text, e.g. `123/500`
pub fn counter_label(count: usize, limit: usize) -> String {
    format!("{}/{}", count, limit)
}

/// Length of the draft the way the page measures it, in UTF-16 code units,
/// so the count agrees with the server-side length checks.
pub fn char_count(text: &str) -> usize {
    text.encode_utf16().count()
}

/// Bind the first composer form in the document. Returns whether one was
/// found and bound.
pub fn bind(state: &ControllerState) -> Result<bool, JsValue> {
    let form = match state.document.query_selector(FORM_SELECTOR)? {
        Some(form) => form,
        None => return Ok(false),
    };

    let textarea = match form.query_selector(TEXTAREA_SELECTOR)? {
        Some(area) => area,
        None => {
            web_sys::console::warn_1(&"Post form without a .post-textarea, skipping".into());
            return Ok(false);
        }
    };
    let textarea: HtmlTextAreaElement = match textarea.dyn_into() {
        Ok(area) => area,
        Err(_) => return Ok(false),
    };

    let container = match textarea.parent_element() {
        Some(container) => container,
        None => return Ok(false),
    };

    let document = state.document.clone();
    let limits = state.config.composer.clone();
    let input_area = textarea.clone();
    let input_container = container.clone();
    dom::listen(&textarea, "input", move |_| {
        let count = char_count(&input_area.value());
        match ensure_counter(&document, &input_container) {
            Ok(counter) => {
                counter.set_text_content(Some(&counter_label(count, limits.char_limit)));
                let tier = CounterTier::for_count(count, &limits);
                let _ = counter.style().set_property("color", tier.color());
            }
            Err(e) => {
                web_sys::console::error_1(&format!("Failed to update counter: {:?}", e).into());
            }
        }
        autogrow(&input_area);
    })?;

    let focus_container = container.clone();
    dom::listen(&textarea, "focus", move |_| {
        let _ = focus_container.class_list().add_1("focused");
    })?;

    let blur_area = textarea.clone();
    dom::listen(&textarea, "blur", move |_| {
        if blur_area.value().is_empty() {
            let _ = container.class_list().remove_1("focused");
        }
    })?;

    Ok(true)
}

fn ensure_counter(document: &Document, container: &Element) -> Result<HtmlElement, JsValue> {
    if let Some(existing) = container.query_selector(COUNTER_SELECTOR)? {
        if let Ok(counter) = existing.dyn_into::<HtmlElement>() {
            return Ok(counter);
        }
    }

    let counter: HtmlElement = document.create_element("div")?.dyn_into()?;
    counter.set_class_name("char-counter");
    counter.style().set_css_text(COUNTER_STYLE);
    container.append_child(&counter)?;
    Ok(counter)
}

fn autogrow(textarea: &HtmlTextAreaElement) {
    let style = textarea.style();
    let _ = style.set_property("height", "auto");
    let _ = style.set_property("height", &format!("{}px", textarea.scroll_height()));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_char_count_utf16_units() {
        assert_eq!(char_count(""), 0);
        assert_eq!(char_count("hello"), 5);
        assert_eq!(char_count("héllo"), 5);
        // Astral-plane characters take two units, matching the page's length
        assert_eq!(char_count("🤍🤍"), 4);
    }

    #[test]
    fn test_counter_tiers() {
        let limits = ComposerConfig::default();
        assert_eq!(CounterTier::for_count(0, &limits), CounterTier::Normal);
        assert_eq!(CounterTier::for_count(400, &limits), CounterTier::Normal);
        assert_eq!(CounterTier::for_count(401, &limits), CounterTier::Warning);
        assert_eq!(CounterTier::for_count(500, &limits), CounterTier::Warning);
        assert_eq!(CounterTier::for_count(501, &limits), CounterTier::Over);
    }

    #[test]
    fn test_tier_colors() {
        assert_eq!(CounterTier::Normal.color(), "#4CAF50");
        assert_eq!(CounterTier::Warning.color(), "#ff9800");
        assert_eq!(CounterTier::Over.color(), "#f44336");
    }

    #[test]
    fn test_counter_label() {
        assert_eq!(counter_label(123, 500), "123/500");
        assert_eq!(counter_label(0, 280), "0/280");
    }
}
