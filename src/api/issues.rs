//! Issue Endpoints
//!
//! `fetch`-backed implementation of [`IssueApi`].

use async_trait::async_trait;

use super::{http, ApiResult, IssueApi};
use crate::models::{ActionKind, ContributeRequest, IssueId, NewIssue, TakeRequest};

/// `{base}/issues`
pub fn issues_url(base: &str) -> String {
    format!("{}/issues", base.trim_end_matches('/'))
}

/// `{base}/issues/{id}/{take|complete|contribute}`
pub fn action_url(base: &str, id: IssueId, action: ActionKind) -> String {
    format!("{}/{}/{}", issues_url(base), id, action.path_segment())
}

#[derive(Debug, Clone)]
pub struct HttpIssueApi {
    base: String,
}

impl HttpIssueApi {
    pub fn new(base: impl Into<String>) -> Self {
        Self { base: base.into() }
    }
}

#[async_trait(?Send)]
impl IssueApi for HttpIssueApi {
    async fn create_issue(&self, issue: &NewIssue) -> ApiResult<()> {
        http::post(&issues_url(&self.base), Some(issue)).await
    }

    async fn take_issue(&self, id: IssueId, request: &TakeRequest) -> ApiResult<()> {
        http::post(&action_url(&self.base, id, ActionKind::Take), Some(request)).await
    }

    async fn complete_issue(&self, id: IssueId) -> ApiResult<()> {
        // No body and no content type
        http::post::<()>(&action_url(&self.base, id, ActionKind::Complete), None).await
    }

    async fn contribute(&self, id: IssueId, request: &ContributeRequest) -> ApiResult<()> {
        http::post(&action_url(&self.base, id, ActionKind::Contribute), Some(request)).await
    }
}
