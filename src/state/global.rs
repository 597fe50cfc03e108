//! Controller State
//!
//! Shared state handed to every bound component: configuration, the API
//! client, the busy set guarding re-entrant toggles, and the toast facade.

use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;

use web_sys::Document;

use crate::api::ApiClient;
use crate::components::toast::{self, ToastKind};
use crate::config::Config;

/// Identity of a toggle control, as rendered by the server
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ControlId {
    /// Like button for a post
    Like(String),
    /// Follow button for a user
    Follow(String),
}

/// Tracks which controls have a request in flight
#[derive(Debug, Default)]
pub struct BusySet {
    active: HashSet<ControlId>,
}

impl BusySet {
    /// Mark a control busy. Returns false when it already is, in which case
    /// the caller must not start another request.
    pub fn begin(&mut self, id: ControlId) -> bool {
        self.active.insert(id)
    }

    /// Clear a control's busy mark
    pub fn finish(&mut self, id: &ControlId) {
        self.active.remove(id);
    }

    /// Whether a control currently has a request in flight
    pub fn contains(&self, id: &ControlId) -> bool {
        self.active.contains(id)
    }
}

/// Shared state provided to all components
#[derive(Clone)]
pub struct ControllerState {
    /// The document the controller is bound to
    pub document: Document,
    /// Page configuration
    pub config: Rc<Config>,
    /// Client for the toggle endpoints
    pub api: Rc<ApiClient>,
    /// Controls with a request in flight
    busy: Rc<RefCell<BusySet>>,
}

impl ControllerState {
    /// Create the shared state for a document
    pub fn new(document: Document, config: Config) -> Self {
        let api = ApiClient::new(document.clone(), &config.endpoints);

        Self {
            document,
            config: Rc::new(config),
            api: Rc::new(api),
            busy: Rc::new(RefCell::new(BusySet::default())),
        }
    }

    /// Mark a control busy; false means a request is already in flight
    pub fn begin(&self, id: ControlId) -> bool {
        self.busy.borrow_mut().begin(id)
    }

    /// Clear a control's busy mark
    pub fn finish(&self, id: &ControlId) {
        self.busy.borrow_mut().finish(id);
    }

    /// Whether a control has a request in flight
    pub fn is_busy(&self, id: &ControlId) -> bool {
        self.busy.borrow().contains(id)
    }

    /// Show a success toast
    pub fn show_success(&self, message: &str) {
        toast::show(
            &self.document,
            message,
            ToastKind::Success,
            &self.config.timing,
        );
    }

    /// Show an error toast
    pub fn show_error(&self, message: &str) {
        toast::show(
            &self.document,
            message,
            ToastKind::Error,
            &self.config.timing,
        );
    }

    /// Show an info toast
    pub fn show_info(&self, message: &str) {
        toast::show(&self.document, message, ToastKind::Info, &self.config.timing);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_busy_set_rejects_reentry() {
        let mut busy = BusySet::default();
        let id = ControlId::Like("42".to_string());

        assert!(busy.begin(id.clone()));
        assert!(!busy.begin(id.clone()));
        assert!(busy.contains(&id));

        busy.finish(&id);
        assert!(!busy.contains(&id));
        assert!(busy.begin(id));
    }

    #[test]
    fn test_busy_set_keys_by_control_kind() {
        let mut busy = BusySet::default();

        // A like and a follow sharing a raw id are distinct controls
        assert!(busy.begin(ControlId::Like("7".to_string())));
        assert!(busy.begin(ControlId::Follow("7".to_string())));

        // But the same control is rejected
        assert!(!busy.begin(ControlId::Like("7".to_string())));
    }

    #[test]
    fn test_busy_set_distinct_ids() {
        let mut busy = BusySet::default();

        assert!(busy.begin(ControlId::Like("1".to_string())));
        assert!(busy.begin(ControlId::Like("2".to_string())));

        busy.finish(&ControlId::Like("1".to_string()));
        assert!(!busy.contains(&ControlId::Like("1".to_string())));
        assert!(busy.contains(&ControlId::Like("2".to_string())));
    }
}
