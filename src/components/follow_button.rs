//! Follow Button
//!
//! Binds the user follow controls. Same shape as the like control, keyed by
//! user id and without a count.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::spawn_local;
use web_sys::{Element, HtmlElement};

use crate::dom;
use crate::state::global::{ControlId, ControllerState};

/// Selector for follow controls
const SELECTOR: &str = ".follow-btn";

/// Label shown while a toggle request is in flight
const BUSY_LABEL: &str = "⏳ Loading...";

/// View-model for one follow control
#[derive(Debug, Clone, PartialEq)]
pub struct FollowModel {
    pub user_id: String,
    pub followed: bool,
}

impl FollowModel {
    /// Label for the current state
    pub fn label(&self) -> &'static str {
        follow_label(self.followed)
    }
}

/// Label for a follow state
pub fn follow_label(followed: bool) -> &'static str {
    if followed {
        "✅ Following"
    } else {
        "👤 Follow"
    }
}

/// Bind every follow control in the document. Returns how many were bound.
pub fn bind_all(state: &ControllerState) -> Result<usize, JsValue> {
    dom::for_each_selector(&state.document, SELECTOR, |element| bind(state, element))
}

fn bind(state: &ControllerState, element: Element) -> bool {
    let user_id = match element.get_attribute("data-user-id") {
        Some(user_id) => user_id,
        None => {
            web_sys::console::warn_1(&"Follow button without data-user-id, skipping".into());
            return false;
        }
    };

    let button: HtmlElement = match element.dyn_into() {
        Ok(button) => button,
        Err(_) => return false,
    };

    let followed = button.class_list().contains("following");
    let model = Rc::new(RefCell::new(FollowModel { user_id, followed }));

    let state = state.clone();
    let handler_button = button.clone();
    let result = dom::listen(&button, "click", move |event| {
        event.prevent_default();
        handle_click(&state, &handler_button, &model);
    });

    match result {
        Ok(()) => true,
        Err(e) => {
            web_sys::console::error_1(&format!("Failed to bind follow button: {:?}", e).into());
            false
        }
    }
}

fn handle_click(state: &ControllerState, button: &HtmlElement, model: &Rc<RefCell<FollowModel>>) {
    let control = ControlId::Follow(model.borrow().user_id.clone());
    if !state.begin(control.clone()) {
        // A toggle for this user is already in flight
        return;
    }

    let snapshot = model.borrow().clone();

    let _ = button.class_list().add_1("loading");
    button.set_text_content(Some(BUSY_LABEL));

    let state = state.clone();
    let button = button.clone();
    let model = Rc::clone(model);
    spawn_local(async move {
        match state.api.toggle_follow(&snapshot.user_id).await {
            Ok(toggle) => {
                model.borrow_mut().followed = toggle.followed;
                render(&button, &model.borrow());

                if toggle.followed {
                    state.show_success("User followed!");
                } else {
                    state.show_info("User unfollowed!");
                }
            }
            Err(e) => {
                web_sys::console::error_1(&format!("Error: {}", e).into());
                *model.borrow_mut() = snapshot;
                render(&button, &model.borrow());
                state.show_error("Error following user!");
            }
        }

        let _ = button.class_list().remove_1("loading");
        state.finish(&control);
    });
}

/// Render the control from its model. Safe to call any number of times.
fn render(button: &HtmlElement, model: &FollowModel) {
    button.set_text_content(Some(model.label()));

    let class_list = button.class_list();
    if model.followed {
        let _ = class_list.add_1("following");
    } else {
        let _ = class_list.remove_1("following");
    }
}
