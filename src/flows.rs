//! Issue Flows
//!
//! Create / take / complete / contribute, each as one async call: validate,
//! send at most one request, report the outcome. Nothing here touches the DOM.

use crate::api::{ApiError, IssueApi};
use crate::models::{ContributeRequest, Coordinate, TakeRequest};
use crate::modals::SuccessMessage;
use crate::session::ActionSession;
use crate::validation::{parse_amount, validate_worker, IssueDraft, ValidationError};

#[derive(Debug, Clone, PartialEq)]
pub enum FlowOutcome {
    /// Nothing was sent
    Rejected(ValidationError),
    /// Sent, but the server said no (or never answered)
    Failed(ApiError),
    Succeeded(SuccessMessage),
}

impl FlowOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, FlowOutcome::Succeeded(_))
    }
}

pub async fn create_issue<A: IssueApi + ?Sized>(
    api: &A,
    draft: &IssueDraft,
    map_enabled: bool,
    location: Option<Coordinate>,
) -> FlowOutcome {
    let issue = match draft.validate(map_enabled, location) {
        Ok(issue) => issue,
        Err(e) => return FlowOutcome::Rejected(e),
    };
    match api.create_issue(&issue).await {
        Ok(()) => {
            log::info!("issue created: {}", issue.title);
            FlowOutcome::Succeeded(SuccessMessage::new(
                "Issue Created 🌱",
                "Your community issue was added successfully.",
            ))
        }
        Err(e) => {
            log::warn!("create issue failed: {}", e);
            FlowOutcome::Failed(e)
        }
    }
}

/// Alert text for a failed creation; `None` when the flow succeeded
pub fn creation_alert(outcome: &FlowOutcome) -> Option<&'static str> {
    match outcome {
        FlowOutcome::Succeeded(_) => None,
        FlowOutcome::Rejected(ValidationError::MissingLocation) => Some("Please select a location on the map"),
        FlowOutcome::Rejected(_) => Some("Please enter a valid target amount"),
        FlowOutcome::Failed(_) => Some("Error creating issue"),
    }
}

pub async fn take_issue<A: IssueApi + ?Sized>(api: &A, session: ActionSession, worker_raw: &str) -> FlowOutcome {
    let worker = match validate_worker(worker_raw) {
        Ok(worker) => worker,
        Err(e) => return FlowOutcome::Rejected(e),
    };
    match api.take_issue(session.issue_id, &TakeRequest { worker }).await {
        Ok(()) => FlowOutcome::Succeeded(SuccessMessage::new(
            "Issue Taken 🤝",
            "Thank you for stepping up to help!",
        )),
        Err(e) => {
            log::warn!("take issue #{} failed: {}", session.issue_id, e);
            FlowOutcome::Failed(e)
        }
    }
}

pub async fn complete_issue<A: IssueApi + ?Sized>(api: &A, session: ActionSession) -> FlowOutcome {
    match api.complete_issue(session.issue_id).await {
        Ok(()) => FlowOutcome::Succeeded(SuccessMessage::new(
            "Issue Completed ✅",
            "Great work! You made real impact today.",
        )),
        Err(e) => {
            log::warn!("complete issue #{} failed: {}", session.issue_id, e);
            FlowOutcome::Failed(e)
        }
    }
}

pub async fn contribute<A: IssueApi + ?Sized>(
    api: &A,
    session: ActionSession,
    amount_raw: &str,
    currency: &str,
) -> FlowOutcome {
    let amount = match parse_amount(amount_raw) {
        Ok(amount) => amount,
        Err(e) => return FlowOutcome::Rejected(ValidationError::InvalidAmount(e)),
    };
    match api.contribute(session.issue_id, &ContributeRequest { amount }).await {
        Ok(()) => FlowOutcome::Succeeded(SuccessMessage::new(
            "Contribution Successful 💚",
            format!("{}{} was added to this issue (demo)", currency, amount),
        )),
        Err(e) => {
            log::warn!("contribution to issue #{} failed: {}", session.issue_id, e);
            FlowOutcome::Failed(e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ApiResult;
    use crate::models::{ActionKind, IssueId, NewIssue};
    use crate::session::PendingActions;
    use crate::validation::AmountError;
    use async_trait::async_trait;
    use futures::executor::block_on;
    use std::cell::RefCell;

    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        Create(NewIssue),
        Take(IssueId, TakeRequest),
        Complete(IssueId),
        Contribute(IssueId, ContributeRequest),
    }

    /// Records every request and answers with a fixed status
    struct RecordingApi {
        calls: RefCell<Vec<Call>>,
        status: Option<u16>,
    }

    impl RecordingApi {
        fn ok() -> Self {
            Self { calls: RefCell::new(Vec::new()), status: None }
        }

        fn failing(status: u16) -> Self {
            Self { calls: RefCell::new(Vec::new()), status: Some(status) }
        }

        fn answer(&self, call: Call) -> ApiResult<()> {
            self.calls.borrow_mut().push(call);
            match self.status {
                None => Ok(()),
                Some(code) => Err(ApiError::Status(code)),
            }
        }

        fn calls(&self) -> Vec<Call> {
            self.calls.borrow().clone()
        }
    }

    #[async_trait(?Send)]
    impl IssueApi for RecordingApi {
        async fn create_issue(&self, issue: &NewIssue) -> ApiResult<()> {
            self.answer(Call::Create(issue.clone()))
        }

        async fn take_issue(&self, id: IssueId, request: &TakeRequest) -> ApiResult<()> {
            self.answer(Call::Take(id, request.clone()))
        }

        async fn complete_issue(&self, id: IssueId) -> ApiResult<()> {
            self.answer(Call::Complete(id))
        }

        async fn contribute(&self, id: IssueId, request: &ContributeRequest) -> ApiResult<()> {
            self.answer(Call::Contribute(id, request.clone()))
        }
    }

    fn draft(amount: &str) -> IssueDraft {
        IssueDraft {
            title: " Overflowing drain ".to_string(),
            description: "Ward 12".to_string(),
            amount: amount.to_string(),
        }
    }

    fn session(kind: ActionKind, issue_id: IssueId) -> ActionSession {
        ActionSession { kind, issue_id }
    }

    #[test]
    fn test_create_sends_one_post_with_last_location() {
        let api = RecordingApi::ok();
        let outcome = block_on(create_issue(&api, &draft("750"), true, Some(Coordinate::new(13.0, 77.7))));

        assert!(outcome.is_success());
        assert_eq!(
            api.calls(),
            vec![Call::Create(NewIssue {
                title: "Overflowing drain".to_string(),
                description: "Ward 12".to_string(),
                target_amount: 750,
                lat: Some(13.0),
                lng: Some(77.7),
            })]
        );
    }

    #[test]
    fn test_create_without_location_sends_nothing() {
        let api = RecordingApi::ok();
        let outcome = block_on(create_issue(&api, &draft("750"), true, None));

        assert_eq!(outcome, FlowOutcome::Rejected(ValidationError::MissingLocation));
        assert_eq!(creation_alert(&outcome), Some("Please select a location on the map"));
        assert!(api.calls().is_empty());
    }

    #[test]
    fn test_create_failure_alerts() {
        let api = RecordingApi::failing(500);
        let outcome = block_on(create_issue(&api, &draft("750"), false, None));

        assert_eq!(outcome, FlowOutcome::Failed(ApiError::Status(500)));
        assert_eq!(creation_alert(&outcome), Some("Error creating issue"));
        assert_eq!(api.calls().len(), 1);
    }

    #[test]
    fn test_take_goes_to_latest_opened_issue() {
        let api = RecordingApi::ok();
        let mut pending = PendingActions::default();
        pending.open(ActionKind::Take, 3);
        pending.open(ActionKind::Take, 8);

        let current = pending.session(ActionKind::Take).unwrap();
        let outcome = block_on(take_issue(&api, current, "  Ravi "));

        assert!(outcome.is_success());
        assert_eq!(api.calls(), vec![Call::Take(8, TakeRequest { worker: "Ravi".to_string() })]);
    }

    #[test]
    fn test_take_with_blank_name_sends_nothing() {
        let api = RecordingApi::ok();
        let outcome = block_on(take_issue(&api, session(ActionKind::Take, 1), "   "));
        assert_eq!(outcome, FlowOutcome::Rejected(ValidationError::EmptyWorkerName));
        assert!(api.calls().is_empty());
    }

    #[test]
    fn test_complete_posts_without_body() {
        let api = RecordingApi::ok();
        let outcome = block_on(complete_issue(&api, session(ActionKind::Complete, 4)));
        assert_eq!(
            outcome,
            FlowOutcome::Succeeded(SuccessMessage::new(
                "Issue Completed ✅",
                "Great work! You made real impact today."
            ))
        );
        assert_eq!(api.calls(), vec![Call::Complete(4)]);
    }

    #[test]
    fn test_contribute_rejects_zero_and_garbage() {
        let api = RecordingApi::ok();
        for raw in ["0", "abc", "", "-20"] {
            let outcome = block_on(contribute(&api, session(ActionKind::Contribute, 2), raw, "₹"));
            assert!(matches!(outcome, FlowOutcome::Rejected(ValidationError::InvalidAmount(_))));
        }
        assert!(api.calls().is_empty());
    }

    #[test]
    fn test_contribute_fifty() {
        let api = RecordingApi::ok();
        let outcome = block_on(contribute(&api, session(ActionKind::Contribute, 2), "50", "₹"));

        assert_eq!(api.calls(), vec![Call::Contribute(2, ContributeRequest { amount: 50 })]);
        assert_eq!(
            outcome,
            FlowOutcome::Succeeded(SuccessMessage::new(
                "Contribution Successful 💚",
                "₹50 was added to this issue (demo)"
            ))
        );
    }

    #[test]
    fn test_non_ok_status_is_failure_for_every_action() {
        let api = RecordingApi::failing(400);
        let outcomes = [
            block_on(take_issue(&api, session(ActionKind::Take, 1), "Meera")),
            block_on(complete_issue(&api, session(ActionKind::Complete, 1))),
            block_on(contribute(&api, session(ActionKind::Contribute, 1), "10", "₹")),
        ];
        for outcome in outcomes {
            assert_eq!(outcome, FlowOutcome::Failed(ApiError::Status(400)));
        }
        assert_eq!(api.calls().len(), 3);
    }

    #[test]
    fn test_invalid_target_amount_alert() {
        let outcome = FlowOutcome::Rejected(ValidationError::InvalidAmount(AmountError::NotANumber));
        assert_eq!(creation_alert(&outcome), Some("Please enter a valid target amount"));
    }
}
