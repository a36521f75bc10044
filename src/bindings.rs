//! Document-level Listeners
//!
//! Escape closes every dialog; clicks on server-rendered action buttons
//! (`data-issue-action` / `data-issue-id`) open the matching confirm modal.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

use crate::models::{ActionKind, IssueId, IssueStatus};
use crate::store::{store_close_all, store_open_action, AppStore};

pub const ACTION_ATTR: &str = "data-issue-action";
pub const ID_ATTR: &str = "data-issue-id";
pub const STATUS_ATTR: &str = "data-issue-status";

/// Why a clicked trigger was ignored
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TriggerError {
    UnknownAction(String),
    BadIssueId(String),
    NotAllowed(ActionKind, IssueStatus),
}

/// Resolve trigger attributes to an action. A missing or unknown status does
/// not block the action; the server has the final say.
pub fn parse_trigger(
    action: &str,
    issue_id: Option<&str>,
    status: Option<&str>,
) -> Result<(ActionKind, IssueId), TriggerError> {
    let kind = ActionKind::parse(action).ok_or_else(|| TriggerError::UnknownAction(action.to_string()))?;
    let raw_id = issue_id.unwrap_or_default();
    let id: IssueId = raw_id
        .trim()
        .parse()
        .map_err(|_| TriggerError::BadIssueId(raw_id.to_string()))?;
    if let Some(status) = status.and_then(IssueStatus::parse) {
        if !status.allows(kind) {
            return Err(TriggerError::NotAllowed(kind, status));
        }
    }
    Ok((kind, id))
}

/// Ctrl+Shift+L replays the recent log lines to the console
pub fn is_log_dump_shortcut(key: &str, ctrl: bool, shift: bool) -> bool {
    ctrl && shift && key.eq_ignore_ascii_case("l")
}

/// Bind global keydown: Escape hides all four modals, Ctrl+Shift+L dumps
/// the log buffer
pub fn bind_escape(store: AppStore) {
    let on_keydown = Closure::<dyn FnMut(web_sys::KeyboardEvent)>::new(move |ev: web_sys::KeyboardEvent| {
        let key = ev.key();
        if key == "Escape" {
            store_close_all(&store);
        } else if is_log_dump_shortcut(&key, ev.ctrl_key(), ev.shift_key()) {
            ev.prevent_default();
            rolling_logger::dump_recent();
        }
    });

    if let Some(win) = web_sys::window() {
        if let Some(doc) = win.document() {
            let _ = doc.add_event_listener_with_callback("keydown", on_keydown.as_ref().unchecked_ref());
        }
    }
    on_keydown.forget();
}

/// Bind a delegated click handler for action buttons anywhere in the page
pub fn bind_action_triggers(store: AppStore) {
    let selector = format!("[{}]", ACTION_ATTR);
    let on_click = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |ev: web_sys::MouseEvent| {
        let Some(target) = ev.target().and_then(|t| t.dyn_into::<web_sys::Element>().ok()) else {
            return;
        };
        let Ok(Some(trigger)) = target.closest(&selector) else {
            return;
        };
        ev.prevent_default();

        let action = trigger.get_attribute(ACTION_ATTR).unwrap_or_default();
        let issue_id = trigger.get_attribute(ID_ATTR);
        let status = trigger.get_attribute(STATUS_ATTR);
        match parse_trigger(&action, issue_id.as_deref(), status.as_deref()) {
            Ok((kind, id)) => {
                log::debug!("open {:?} for issue #{}", kind, id);
                store_open_action(&store, kind, id);
            }
            Err(e) => log::warn!("ignoring issue action trigger: {:?}", e),
        }
    });

    if let Some(win) = web_sys::window() {
        if let Some(doc) = win.document() {
            let _ = doc.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref());
        }
    }
    on_click.forget();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_trigger() {
        assert_eq!(parse_trigger("take", Some("5"), None), Ok((ActionKind::Take, 5)));
        assert_eq!(
            parse_trigger("complete", Some(" 9 "), Some("in_progress")),
            Ok((ActionKind::Complete, 9))
        );
        assert_eq!(
            parse_trigger("contribute", Some("2"), Some("archived")),
            Ok((ActionKind::Contribute, 2))
        );
    }

    #[test]
    fn test_log_dump_shortcut() {
        assert!(is_log_dump_shortcut("L", true, true));
        assert!(is_log_dump_shortcut("l", true, true));
        assert!(!is_log_dump_shortcut("l", true, false));
        assert!(!is_log_dump_shortcut("Escape", true, true));
    }

    #[test]
    fn test_parse_trigger_errors() {
        assert_eq!(
            parse_trigger("delete", Some("5"), None),
            Err(TriggerError::UnknownAction("delete".to_string()))
        );
        assert_eq!(
            parse_trigger("take", None, None),
            Err(TriggerError::BadIssueId(String::new()))
        );
        assert_eq!(
            parse_trigger("take", Some("x1"), None),
            Err(TriggerError::BadIssueId("x1".to_string()))
        );
        assert_eq!(
            parse_trigger("take", Some("5"), Some("completed")),
            Err(TriggerError::NotAllowed(ActionKind::Take, IssueStatus::Completed))
        );
    }
}
