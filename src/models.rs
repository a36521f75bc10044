//! Frontend Models
//!
//! Request bodies and identifiers shared with the issue backend.

use serde::{Deserialize, Serialize};

pub use leptos_map_picker::Coordinate;

pub type IssueId = u32;

/// Issue lifecycle status as rendered by the server
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueStatus {
    Open,
    InProgress,
    Completed,
}

impl IssueStatus {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "open" => Some(IssueStatus::Open),
            "in_progress" => Some(IssueStatus::InProgress),
            "completed" => Some(IssueStatus::Completed),
            _ => None,
        }
    }

    /// Whether the backend would accept `action` for an issue in this status
    pub fn allows(self, action: ActionKind) -> bool {
        match action {
            ActionKind::Take => self == IssueStatus::Open,
            ActionKind::Complete => self == IssueStatus::InProgress,
            ActionKind::Contribute => self != IssueStatus::Completed,
        }
    }
}

/// Per-issue actions that go through a confirm modal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionKind {
    Take,
    Complete,
    Contribute,
}

impl ActionKind {
    pub const ALL: [ActionKind; 3] = [ActionKind::Take, ActionKind::Complete, ActionKind::Contribute];

    /// Last path segment of the action endpoint
    pub fn path_segment(self) -> &'static str {
        match self {
            ActionKind::Take => "take",
            ActionKind::Complete => "complete",
            ActionKind::Contribute => "contribute",
        }
    }

    /// Parse a `data-issue-action` value
    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.path_segment() == raw.trim())
    }

    pub(crate) fn index(self) -> usize {
        match self {
            ActionKind::Take => 0,
            ActionKind::Complete => 1,
            ActionKind::Contribute => 2,
        }
    }
}

/// Body of `POST /issues`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewIssue {
    pub title: String,
    pub description: String,
    pub target_amount: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lat: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lng: Option<f64>,
}

/// Body of `POST /issues/{id}/take`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TakeRequest {
    pub worker: String,
}

/// Body of `POST /issues/{id}/contribute`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContributeRequest {
    pub amount: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_issue_omits_missing_location() {
        let issue = NewIssue {
            title: "Pothole".to_string(),
            description: "Main road".to_string(),
            target_amount: 500,
            lat: None,
            lng: None,
        };
        let json = serde_json::to_value(&issue).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"title": "Pothole", "description": "Main road", "target_amount": 500})
        );
    }

    #[test]
    fn test_status_gates_actions() {
        assert!(IssueStatus::Open.allows(ActionKind::Take));
        assert!(!IssueStatus::Open.allows(ActionKind::Complete));
        assert!(IssueStatus::InProgress.allows(ActionKind::Complete));
        assert!(IssueStatus::InProgress.allows(ActionKind::Contribute));
        assert!(!IssueStatus::Completed.allows(ActionKind::Contribute));
        assert_eq!(IssueStatus::parse("in_progress"), Some(IssueStatus::InProgress));
        assert_eq!(IssueStatus::parse("closed"), None);
    }

    #[test]
    fn test_action_kind_parse() {
        assert_eq!(ActionKind::parse("take"), Some(ActionKind::Take));
        assert_eq!(ActionKind::parse(" contribute "), Some(ActionKind::Contribute));
        assert_eq!(ActionKind::parse("delete"), None);
    }
}
