//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::flows::FlowOutcome;
use crate::host::ViewHost;
use crate::modals::{ModalKind, ModalSet, SuccessMessage};
use crate::models::{ActionKind, IssueId};
use crate::session::{ActionSession, PendingActions};

/// Text typed into the confirm modals
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ActionDrafts {
    pub worker: String,
    pub amount: String,
}

impl ActionDrafts {
    /// Clear the input owned by `kind`'s modal
    pub fn reset_for(&mut self, kind: ActionKind) {
        match kind {
            ActionKind::Take => self.worker.clear(),
            ActionKind::Contribute => self.amount.clear(),
            ActionKind::Complete => {}
        }
    }

    pub fn get(&self, kind: ActionKind) -> &str {
        match kind {
            ActionKind::Take => &self.worker,
            ActionKind::Contribute => &self.amount,
            ActionKind::Complete => "",
        }
    }

    pub fn set(&mut self, kind: ActionKind, value: String) {
        match kind {
            ActionKind::Take => self.worker = value,
            ActionKind::Contribute => self.amount = value,
            ActionKind::Complete => {}
        }
    }
}

/// Global UI state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Which dialogs are showing, and the success text
    pub modals: ModalSet,
    /// Issue each confirm modal acts on
    pub pending: PendingActions,
    pub drafts: ActionDrafts,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Open the confirm modal of `kind` for `issue_id`, with a blank input
pub fn store_open_action(store: &AppStore, kind: ActionKind, issue_id: IssueId) -> ActionSession {
    let session = store.pending().write().open(kind, issue_id);
    store.drafts().write().reset_for(kind);
    store.modals().write().open(kind.into());
    session
}

pub fn store_close_modal(store: &AppStore, kind: ModalKind) {
    store.modals().write().close(kind);
}

pub fn store_close_all(store: &AppStore) {
    store.modals().write().close_all();
}

pub fn store_is_visible(store: &AppStore, kind: ModalKind) -> bool {
    store.modals().read().is_visible(kind)
}

pub fn store_session(store: &AppStore, kind: ActionKind) -> Option<ActionSession> {
    store.pending().read_untracked().session(kind)
}

/// Current text of `kind`'s input, tracked
pub fn store_draft(store: &AppStore, kind: ActionKind) -> String {
    store.drafts().read().get(kind).to_string()
}

pub fn store_set_draft(store: &AppStore, kind: ActionKind, value: String) {
    store.drafts().write().set(kind, value);
}

pub fn store_success(store: &AppStore) -> Option<SuccessMessage> {
    store.modals().read().success().cloned()
}

/// Apply a finished flow.
///
/// A successful action closes its modal and ends its session only while
/// `session` is still the pending one of its kind; a result for an issue
/// the user has since replaced only shows the overlay.
pub fn store_settle(store: &AppStore, session: Option<ActionSession>, outcome: &FlowOutcome) {
    let current = session.filter(|s| store.pending().read_untracked().session(s.kind) == Some(*s));
    let succeeded = store.modals().write().settle(current.map(|s| ModalKind::from(s.kind)), outcome);
    if succeeded {
        if let Some(s) = current {
            store.pending().write().clear(s.kind);
        }
    }
}

/// Hide the overlay, then refresh the view to pick up server state
pub fn store_dismiss_success(store: &AppStore, host: &impl ViewHost) {
    store_close_modal(store, ModalKind::Success);
    host.reload();
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};

    use super::*;
    use crate::api::ApiError;

    #[derive(Default)]
    struct RecordingHost {
        alerts: RefCell<Vec<String>>,
        reloads: Cell<u32>,
    }

    impl ViewHost for RecordingHost {
        fn alert(&self, message: &str) {
            self.alerts.borrow_mut().push(message.to_string());
        }

        fn reload(&self) {
            self.reloads.set(self.reloads.get() + 1);
        }
    }

    fn with_store(test: impl FnOnce(AppStore)) {
        let owner = Owner::new();
        owner.with(|| test(Store::new(AppState::default())));
    }

    fn taken() -> FlowOutcome {
        FlowOutcome::Succeeded(SuccessMessage::new("Issue Taken 🤝", "Thank you for stepping up to help!"))
    }

    #[test]
    fn test_open_action_resets_input_and_replaces_pending() {
        with_store(|store| {
            store_set_draft(&store, ActionKind::Take, "Asha".to_string());
            store_set_draft(&store, ActionKind::Contribute, "25".to_string());

            let first = store_open_action(&store, ActionKind::Take, 1);
            assert_eq!(first, ActionSession { kind: ActionKind::Take, issue_id: 1 });
            assert_eq!(store_draft(&store, ActionKind::Take), "");
            assert_eq!(store_draft(&store, ActionKind::Contribute), "25");
            assert!(store_is_visible(&store, ModalKind::Take));

            store_set_draft(&store, ActionKind::Take, "Ravi".to_string());
            store_open_action(&store, ActionKind::Take, 2);
            assert_eq!(store_draft(&store, ActionKind::Take), "");
            assert_eq!(store_session(&store, ActionKind::Take).map(|s| s.issue_id), Some(2));
        });
    }

    #[test]
    fn test_settle_success_ends_session() {
        with_store(|store| {
            let session = store_open_action(&store, ActionKind::Take, 1);
            store_settle(&store, Some(session), &taken());

            assert_eq!(store_session(&store, ActionKind::Take), None);
            assert!(!store_is_visible(&store, ModalKind::Take));
            assert!(store_is_visible(&store, ModalKind::Success));
            assert_eq!(store_success(&store).map(|m| m.title), Some("Issue Taken 🤝".to_string()));
        });
    }

    #[test]
    fn test_late_success_leaves_newer_session_alone() {
        with_store(|store| {
            let stale = store_open_action(&store, ActionKind::Take, 1);
            store_open_action(&store, ActionKind::Take, 2);
            store_settle(&store, Some(stale), &taken());

            assert_eq!(store_session(&store, ActionKind::Take).map(|s| s.issue_id), Some(2));
            assert!(store_is_visible(&store, ModalKind::Take));
            assert!(store_is_visible(&store, ModalKind::Success));
        });
    }

    #[test]
    fn test_settle_failure_keeps_session_and_modal() {
        with_store(|store| {
            let session = store_open_action(&store, ActionKind::Contribute, 4);
            store_settle(&store, Some(session), &FlowOutcome::Failed(ApiError::Status(500)));

            assert_eq!(store_session(&store, ActionKind::Contribute), Some(session));
            assert!(store_is_visible(&store, ModalKind::Contribute));
            assert!(!store_is_visible(&store, ModalKind::Success));
        });
    }

    #[test]
    fn test_dismiss_success_reloads_once() {
        with_store(|store| {
            store_settle(&store, None, &taken());
            assert!(store_is_visible(&store, ModalKind::Success));

            let host = RecordingHost::default();
            store_dismiss_success(&store, &host);
            assert!(!store_is_visible(&store, ModalKind::Success));
            assert_eq!(host.reloads.get(), 1);
            assert!(host.alerts.borrow().is_empty());
        });
    }

    #[test]
    fn test_reset_only_touches_owned_input() {
        let mut drafts = ActionDrafts {
            worker: "Asha".to_string(),
            amount: "25".to_string(),
        };
        drafts.reset_for(ActionKind::Complete);
        assert_eq!(drafts.worker, "Asha");
        drafts.reset_for(ActionKind::Take);
        assert_eq!(drafts.worker, "");
        assert_eq!(drafts.amount, "25");
        drafts.reset_for(ActionKind::Contribute);
        assert_eq!(drafts.amount, "");
    }

    #[test]
    fn test_complete_has_no_draft() {
        let mut drafts = ActionDrafts::default();
        drafts.set(ActionKind::Complete, "ignored".to_string());
        drafts.set(ActionKind::Contribute, "50".to_string());
        assert_eq!(drafts.get(ActionKind::Complete), "");
        assert_eq!(drafts.get(ActionKind::Contribute), "50");
    }
}
