//! Pending Action Sessions
//!
//! One pending issue id per action kind. Reopening a modal replaces the id of
//! that kind only.

use crate::models::{ActionKind, IssueId};

/// The issue an open confirm modal acts on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActionSession {
    pub kind: ActionKind,
    pub issue_id: IssueId,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PendingActions {
    slots: [Option<IssueId>; 3],
}

impl PendingActions {
    /// Start a session for `kind`, dropping any earlier one of the same kind
    pub fn open(&mut self, kind: ActionKind, issue_id: IssueId) -> ActionSession {
        self.slots[kind.index()] = Some(issue_id);
        ActionSession { kind, issue_id }
    }

    pub fn session(&self, kind: ActionKind) -> Option<ActionSession> {
        self.slots[kind.index()].map(|issue_id| ActionSession { kind, issue_id })
    }

    pub fn clear(&mut self, kind: ActionKind) {
        self.slots[kind.index()] = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reopen_overwrites_same_kind() {
        let mut pending = PendingActions::default();
        pending.open(ActionKind::Take, 1);
        pending.open(ActionKind::Take, 2);
        assert_eq!(
            pending.session(ActionKind::Take),
            Some(ActionSession { kind: ActionKind::Take, issue_id: 2 })
        );
    }

    #[test]
    fn test_kinds_do_not_share_ids() {
        let mut pending = PendingActions::default();
        pending.open(ActionKind::Take, 1);
        pending.open(ActionKind::Complete, 9);
        assert_eq!(pending.session(ActionKind::Take).map(|s| s.issue_id), Some(1));
        assert_eq!(pending.session(ActionKind::Complete).map(|s| s.issue_id), Some(9));
        assert_eq!(pending.session(ActionKind::Contribute), None);

        pending.clear(ActionKind::Take);
        assert_eq!(pending.session(ActionKind::Take), None);
        assert_eq!(pending.session(ActionKind::Complete).map(|s| s.issue_id), Some(9));
    }
}
