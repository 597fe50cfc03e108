//! # Mingle UI
//!
//! Client-side interaction layer for the Mingle social app. Compiles to
//! WebAssembly and progressively enhances the server-rendered pages: every
//! control it drives already exists in the markup, it only attaches behavior.
//!
//! ## Features
//!
//! - **Like & follow toggles**: busy states, server-confirmed rendering,
//!   snapshot rollback on failure
//! - **Comment & post forms**: validation, posting states, live character
//!   counter with auto-grow
//! - **Notifications**: floating toasts with enter/exit animations
//! - **Lazy images**: viewport-triggered loading via IntersectionObserver
//! - **Simulated presence**: placeholder online counts and activity pings
//!   behind a swappable feed trait
//!
//! ## Modules
//!
//! - [`controller`]: page controller that scans and binds everything
//! - [`components`]: one enhancer per page behavior
//! - [`api`]: backend toggle endpoints with CSRF handling
//! - [`state`]: busy tracking and the realtime feed seam
//! - [`config`]: timing and endpoint settings read from the page
//!
//! ## Quick Start
//!
//! The crate boots itself once the module is loaded:
//!
//! ```html
//! <script type="module">
//!   import init from "/static/wasm/mingle_ui.js";
//!   init();
//! </script>
//! ```

use wasm_bindgen::prelude::*;

pub mod api;
pub mod components;
pub mod config;
pub mod controller;
pub mod dom;
pub mod state;

use components::toast::{self, ToastKind};
use config::Config;
use controller::PageController;

/// Entry point, invoked by the WASM loader once the module is instantiated.
#[wasm_bindgen(start)]
pub fn run() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    let document = match web_sys::window().and_then(|w| w.document()) {
        Some(document) => document,
        None => {
            web_sys::console::error_1(&"No document available, nothing to enhance".into());
            return;
        }
    };

    web_sys::console::log_1(&"🚀 Mingle interactions initialized!".into());

    PageController::new(document).enhance();
}

/// Show a toast from page scripts. Unknown kinds fall back to info.
#[wasm_bindgen]
pub fn notify(message: &str, kind: &str) {
    let document = match web_sys::window().and_then(|w| w.document()) {
        Some(document) => document,
        None => return,
    };

    let config = Config::load(&document);
    toast::show(&document, message, ToastKind::parse(kind), &config.timing);
}
