//! Toast Notifications
//!
//! Floating dismissible messages in the top right corner of the page.
//! Toasts auto-remove after a configured timeout; the close button removes
//! them earlier. Both paths play the slide-out transition before detaching.

use chrono::{DateTime, Utc};
use gloo_timers::callback::Timeout;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, HtmlElement};

use crate::config::TimingConfig;
use crate::dom;

/// Id of the injected style block
const STYLE_ID: &str = "mingle-styles";

/// Animation and state styles the enhancements rely on
const BASE_CSS: &str = "
@keyframes slideInRight {
    from { transform: translateX(100%); opacity: 0; }
    to { transform: translateX(0); opacity: 1; }
}

@keyframes slideOutRight {
    from { transform: translateX(0); opacity: 1; }
    to { transform: translateX(100%); opacity: 0; }
}

.loading {
    opacity: 0.7;
    pointer-events: none;
}

.typing::after {
    content: '...';
    animation: typing 1s infinite;
}

@keyframes typing {
    0%, 20% { content: '.'; }
    40% { content: '..'; }
    60%, 100% { content: '...'; }
}

.char-counter {
    transition: color 0.3s ease;
}
";

/// Severity of a toast
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

impl ToastKind {
    /// Background color for this kind
    pub fn color(&self) -> &'static str {
        match self {
            ToastKind::Success => "#4CAF50",
            ToastKind::Error => "#f44336",
            ToastKind::Info => "#2196F3",
        }
    }

    /// Class suffix for this kind
    pub fn css_class(&self) -> &'static str {
        match self {
            ToastKind::Success => "success",
            ToastKind::Error => "error",
            ToastKind::Info => "info",
        }
    }

    /// Parse a kind name; anything unrecognized renders as info
    pub fn parse(kind: &str) -> ToastKind {
        match kind {
            "success" => ToastKind::Success,
            "error" => ToastKind::Error,
            _ => ToastKind::Info,
        }
    }
}

/// An ephemeral notification
#[derive(Debug, Clone)]
pub struct Toast {
    pub message: String,
    pub kind: ToastKind,
    pub created_at: DateTime<Utc>,
}

impl Toast {
    /// Create a toast stamped with the current time
    pub fn new(message: &str, kind: ToastKind) -> Self {
        Self {
            message: message.to_string(),
            kind,
            created_at: Utc::now(),
        }
    }
}

/// Show a toast on the page
pub fn show(document: &Document, message: &str, kind: ToastKind, timing: &TimingConfig) {
    let toast = Toast::new(message, kind);
    if let Err(e) = attach(document, &toast, timing) {
        web_sys::console::error_1(&format!("Failed to show notification: {:?}", e).into());
    }
}

/// Build the notification element, wire its timers and append it to the body
fn attach(document: &Document, toast: &Toast, timing: &TimingConfig) -> Result<(), JsValue> {
    let notification: HtmlElement = document.create_element("div")?.dyn_into()?;
    notification.set_class_name(&format!("notification notification-{}", toast.kind.css_class()));
    notification.set_title(&toast.created_at.format("%H:%M:%S").to_string());
    notification.style().set_css_text(&format!(
        "position: fixed; top: 20px; right: 20px; background: {}; color: white; \
         padding: 15px 20px; border-radius: 10px; box-shadow: 0 5px 15px rgba(0,0,0,0.2); \
         z-index: 10000; animation: slideInRight 0.3s ease; display: flex; \
         align-items: center; gap: 10px; max-width: 300px;",
        toast.kind.color()
    ));

    let message = document.create_element("span")?;
    message.set_class_name("notification-message");
    // The message is rendered as text, never as markup
    message.set_text_content(Some(&toast.message));
    notification.append_child(&message)?;

    let close = document.create_element("button")?;
    close.set_class_name("notification-close");
    close.set_text_content(Some("×"));
    notification.append_child(&close)?;

    let exit_ms = timing.exit_ms;
    let dismiss_target = notification.clone();
    dom::listen(&close, "click", move |_| {
        dismiss(&dismiss_target, exit_ms);
    })?;

    // Auto-remove unless the close button already detached it
    let auto_target = notification.clone();
    Timeout::new(timing.toast_ms, move || {
        if auto_target.parent_node().is_some() {
            dismiss(&auto_target, exit_ms);
        }
    })
    .forget();

    let body = document
        .body()
        .ok_or_else(|| JsValue::from_str("document has no body"))?;
    body.append_child(&notification)?;

    Ok(())
}

/// Play the exit transition, then remove the element
fn dismiss(notification: &HtmlElement, exit_ms: u32) {
    let _ = notification
        .style()
        .set_property("animation", &format!("slideOutRight {}ms ease", exit_ms));

    let target = notification.clone();
    Timeout::new(exit_ms, move || {
        target.remove();
    })
    .forget();
}

/// Inject the shared animation and state styles, once per document
pub fn ensure_styles(document: &Document) -> Result<(), JsValue> {
    if document.get_element_by_id(STYLE_ID).is_some() {
        return Ok(());
    }

    let style = document.create_element("style")?;
    style.set_id(STYLE_ID);
    style.set_text_content(Some(BASE_CSS));

    let head = document
        .head()
        .ok_or_else(|| JsValue::from_str("document has no head"))?;
    head.append_child(&style)?;

    Ok(())
}
