//! Page Controller
//!
//! Scans the server-rendered document, binds every enhancer and starts the
//! realtime feed. The controller owns all page-lifetime state; the markup
//! itself stays in the server's hands.

use wasm_bindgen::JsValue;
use web_sys::Document;

use crate::components::{
    comment_form, effects, follow_button, lazy_image, like_button, post_composer, register_form,
    toast,
};
use crate::config::Config;
use crate::state::{ControllerState, FeedSink, RealtimeFeed, SimulatedFeed};

/// Selector for the presence display element
const PRESENCE_SELECTOR: &str = ".online-users";

/// What one enhancement pass attached, by component.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct BindReport {
    pub like_buttons: usize,
    pub follow_buttons: usize,
    pub comment_forms: usize,
    pub typing_inputs: usize,
    pub composer_bound: bool,
    pub lazy_images: usize,
    pub placeholder_fields: usize,
    pub hover_cards: usize,
    pub press_buttons: usize,
}

/// Drives enhancement of a single document.
pub struct PageController {
    state: ControllerState,
    feed: Box<dyn RealtimeFeed>,
}

impl PageController {
    /// Build a controller for the document, reading configuration from the
    /// page itself.
    pub fn new(document: Document) -> Self {
        let config = Config::load(&document);
        let feed = Box::new(SimulatedFeed::new(config.timing.presence_ms));
        PageController {
            state: ControllerState::new(document, config),
            feed,
        }
    }

    /// Swap the realtime feed for another implementation.
    pub fn with_feed(mut self, feed: Box<dyn RealtimeFeed>) -> Self {
        self.feed = feed;
        self
    }

    /// Bind every enhancer and start the feed. Tolerates documents missing
    /// any or all of the expected markup.
    pub fn enhance(&self) -> BindReport {
        if let Err(e) = toast::ensure_styles(&self.state.document) {
            web_sys::console::error_1(&format!("Failed to inject styles: {:?}", e).into());
        }

        let report = BindReport {
            like_buttons: log_bind("like buttons", like_button::bind_all(&self.state)),
            follow_buttons: log_bind("follow buttons", follow_button::bind_all(&self.state)),
            comment_forms: log_bind("comment forms", comment_form::bind_all(&self.state)),
            typing_inputs: log_bind(
                "typing indicators",
                comment_form::bind_typing_indicators(&self.state),
            ),
            composer_bound: match post_composer::bind(&self.state) {
                Ok(bound) => bound,
                Err(e) => {
                    web_sys::console::error_1(
                        &format!("Failed to bind post composer: {:?}", e).into(),
                    );
                    false
                }
            },
            lazy_images: log_bind("lazy images", lazy_image::bind_all(&self.state.document)),
            placeholder_fields: register_form::bind(&self.state.document),
            hover_cards: log_bind("hover cards", effects::bind_card_hover(&self.state.document)),
            press_buttons: log_bind(
                "press buttons",
                effects::bind_button_press(&self.state.document),
            ),
        };

        self.start_feed();

        web_sys::console::log_1(&format!("✅ Mingle interactions loaded: {:?}", report).into());
        report
    }

    fn start_feed(&self) {
        let presence_state = self.state.clone();
        let activity_state = self.state.clone();
        let sink = FeedSink {
            on_presence: Box::new(move |update| {
                render_presence(&presence_state.document, update.online);
            }),
            on_activity: Box::new(move |event| {
                activity_state.show_info(&event.message);
            }),
        };

        // The subscription lives for the page.
        self.feed.subscribe(sink).forget();
    }
}

fn log_bind(what: &str, result: Result<usize, JsValue>) -> usize {
    match result {
        Ok(count) => count,
        Err(e) => {
            web_sys::console::error_1(&format!("Failed to bind {}: {:?}", what, e).into());
            0
        }
    }
}

fn render_presence(document: &Document, online: u32) {
    if let Ok(Some(element)) = document.query_selector(PRESENCE_SELECTOR) {
        element.set_text_content(Some(&presence_label(online)));
    }
}

/// Presence display text, e.g. `17 users online`
pub fn presence_label(online: u32) -> String {
    format!("{} users online", online)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presence_label() {
        assert_eq!(presence_label(1), "1 users online");
        assert_eq!(presence_label(42), "42 users online");
    }
}
