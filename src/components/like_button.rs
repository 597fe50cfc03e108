//! Like Button
//!
//! Binds the post like controls. A click toggles the like through the
//! backend and re-renders the button from the response; the server is the
//! source of truth for both the state and the count, so nothing is
//! incremented locally.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::spawn_local;
use web_sys::{Element, HtmlElement};

use crate::dom;
use crate::state::global::{ControlId, ControllerState};

/// Selector for like controls
const SELECTOR: &str = ".like-btn";

/// Label shown while a toggle request is in flight
const BUSY_LABEL: &str = "🤍 Loading...";

/// View-model for one like control. Seeded from the server-rendered markup
/// at bind time, thereafter updated only from server responses.
#[derive(Debug, Clone, PartialEq)]
pub struct LikeModel {
    pub post_id: String,
    pub liked: bool,
    pub like_count: i64,
}

impl LikeModel {
    /// Label markup for the current state
    pub fn label(&self) -> String {
        like_label(self.liked, self.like_count)
    }
}

/// Label markup for a like state and count
pub fn like_label(liked: bool, like_count: i64) -> String {
    if liked {
        format!(
            "❤️ Liked (<span class=\"like-count\">{}</span>)",
            like_count
        )
    } else {
        format!(
            "🤍 Like (<span class=\"like-count\">{}</span>)",
            like_count
        )
    }
}

/// Bind every like control in the document. Returns how many were bound.
pub fn bind_all(state: &ControllerState) -> Result<usize, JsValue> {
    dom::for_each_selector(&state.document, SELECTOR, |element| bind(state, element))
}

fn bind(state: &ControllerState, element: Element) -> bool {
    let post_id = match element.get_attribute("data-post-id") {
        Some(post_id) => post_id,
        None => {
            web_sys::console::warn_1(&"Like button without data-post-id, skipping".into());
            return false;
        }
    };

    let button: HtmlElement = match element.dyn_into() {
        Ok(button) => button,
        Err(_) => return false,
    };

    let model = Rc::new(RefCell::new(seed_model(&button, post_id)));

    let state = state.clone();
    let handler_button = button.clone();
    let result = dom::listen(&button, "click", move |event| {
        event.prevent_default();
        handle_click(&state, &handler_button, &model);
    });

    match result {
        Ok(()) => true,
        Err(e) => {
            web_sys::console::error_1(&format!("Failed to bind like button: {:?}", e).into());
            false
        }
    }
}

/// Seed the view-model from the server-rendered control
fn seed_model(button: &HtmlElement, post_id: String) -> LikeModel {
    let liked = button.class_list().contains("liked");
    let like_count = button
        .query_selector(".like-count")
        .ok()
        .flatten()
        .and_then(|count| count.text_content())
        .and_then(|text| text.trim().parse().ok())
        .unwrap_or(0);

    LikeModel {
        post_id,
        liked,
        like_count,
    }
}

fn handle_click(state: &ControllerState, button: &HtmlElement, model: &Rc<RefCell<LikeModel>>) {
    let control = ControlId::Like(model.borrow().post_id.clone());
    if !state.begin(control.clone()) {
        // A toggle for this post is already in flight
        return;
    }

    let snapshot = model.borrow().clone();

    let _ = button.class_list().add_1("loading");
    button.set_inner_html(BUSY_LABEL);

    let state = state.clone();
    let button = button.clone();
    let model = Rc::clone(model);
    spawn_local(async move {
        match state.api.toggle_like(&snapshot.post_id).await {
            Ok(toggle) => {
                {
                    let mut model = model.borrow_mut();
                    model.liked = toggle.liked;
                    model.like_count = toggle.like_count;
                }
                render(&button, &model.borrow());

                if toggle.liked {
                    state.show_success("Post liked!");
                } else {
                    state.show_info("Post unliked!");
                }

                replay_pulse(&button);
            }
            Err(e) => {
                web_sys::console::error_1(&format!("Error: {}", e).into());
                *model.borrow_mut() = snapshot;
                render(&button, &model.borrow());
                state.show_error("Error liking post!");
            }
        }

        let _ = button.class_list().remove_1("loading");
        state.finish(&control);
    });
}

/// Render the control from its model. Safe to call any number of times.
fn render(button: &HtmlElement, model: &LikeModel) {
    button.set_inner_html(&model.label());

    let class_list = button.class_list();
    if model.liked {
        let _ = class_list.add_1("liked");
    } else {
        let _ = class_list.remove_1("liked");
    }
}

/// Restart the pulse animation so repeat toggles replay it
fn replay_pulse(button: &HtmlElement) {
    let _ = button.style().set_property("animation", "none");

    let button = button.clone();
    Timeout::new(10, move || {
        let _ = button.style().set_property("animation", "pulse 0.3s ease");
    })
    .forget();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_like_label_liked() {
        assert_eq!(
            like_label(true, 7),
            "❤️ Liked (<span class=\"like-count\">7</span>)"
        );
    }

    #[test]
    fn test_like_label_unliked() {
        assert_eq!(
            like_label(false, 0),
            "🤍 Like (<span class=\"like-count\">0</span>)"
        );
    }

    #[test]
    fn test_model_label_tracks_state() {
        let mut model = LikeModel {
            post_id: "42".to_string(),
            liked: false,
            like_count: 3,
        };
        assert!(model.label().contains("Like ("));

        model.liked = true;
        model.like_count = 4;
        assert!(model.label().contains("Liked ("));
        assert!(model.label().contains(">4<"));
    }
}
