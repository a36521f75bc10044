//! Issue API Bindings
//!
//! Frontend bindings to the REST backend. Only the ok / not-ok status of a
//! response matters; response bodies are never read.

mod http;
mod issues;

use async_trait::async_trait;

use crate::models::{ContributeRequest, IssueId, NewIssue, TakeRequest};

pub use issues::{action_url, issues_url, HttpIssueApi};

/// Common result type for API calls
pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The request never produced a response
    Network(String),
    /// The server answered with a non-2xx status
    Status(u16),
    Serialization(String),
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::Network(msg) => write!(f, "Network error: {}", msg),
            ApiError::Status(code) => write!(f, "HTTP status {}", code),
            ApiError::Serialization(msg) => write!(f, "Serialization error: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

/// The four mutating endpoints of the issue backend
#[async_trait(?Send)]
pub trait IssueApi {
    async fn create_issue(&self, issue: &NewIssue) -> ApiResult<()>;

    async fn take_issue(&self, id: IssueId, request: &TakeRequest) -> ApiResult<()>;

    async fn complete_issue(&self, id: IssueId) -> ApiResult<()>;

    async fn contribute(&self, id: IssueId, request: &ContributeRequest) -> ApiResult<()>;
}
