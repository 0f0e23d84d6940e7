//! Error types for the resource client.
//!
//! Every failure is classified into one of three kinds: validation
//! (rejected locally, no request sent), network (transport failure,
//! non-success status without detail, undecodable body) and server
//! (structured `detail` in the error body, shown verbatim).

use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

use super::validation::ValidationError;

/// The client operation a request belongs to. Supplies the fallback
/// message shown when the backend gives no detail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    ListCampaigns,
    GetCampaign,
    CreateCampaign,
    UpdateCampaign,
    ChangeCampaignStatus,
    ListAdvices,
    CreateAdvice,
    ApproveAdvice,
    ExecuteAdvice,
    DailyBrief,
    DecisionFlow,
    Optimize,
    AgentLogs,
    Analyze,
    Overview,
}

impl Operation {
    pub fn name(&self) -> &'static str {
        match self {
            Operation::ListCampaigns => "list_campaigns",
            Operation::GetCampaign => "get_campaign",
            Operation::CreateCampaign => "create_campaign",
            Operation::UpdateCampaign => "update_campaign",
            Operation::ChangeCampaignStatus => "change_campaign_status",
            Operation::ListAdvices => "list_advices",
            Operation::CreateAdvice => "create_advice",
            Operation::ApproveAdvice => "approve_advice",
            Operation::ExecuteAdvice => "execute_advice",
            Operation::DailyBrief => "daily_brief",
            Operation::DecisionFlow => "decision_flow",
            Operation::Optimize => "optimize",
            Operation::AgentLogs => "agent_logs",
            Operation::Analyze => "analyze",
            Operation::Overview => "overview",
        }
    }

    pub fn failure_message(&self) -> &'static str {
        match self {
            Operation::ListCampaigns => "Failed to load campaigns",
            Operation::GetCampaign => "Failed to load campaign",
            Operation::CreateCampaign => "Failed to create campaign",
            Operation::UpdateCampaign => "Failed to update campaign",
            Operation::ChangeCampaignStatus => "Failed to change campaign status",
            Operation::ListAdvices => "Failed to load advice",
            Operation::CreateAdvice => "Failed to create advice",
            Operation::ApproveAdvice => "Failed to review advice",
            Operation::ExecuteAdvice => "Failed to execute advice",
            Operation::DailyBrief => "Failed to load daily brief",
            Operation::DecisionFlow => "Failed to load decision flow",
            Operation::Optimize => "Agent optimization failed",
            Operation::AgentLogs => "Failed to load agent logs",
            Operation::Analyze => "Campaign analysis failed",
            Operation::Overview => "Failed to load dashboard overview",
        }
    }
}

/// Three-way classification of [`ApiError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    Network,
    Server,
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("{}: {source}", .operation.failure_message())]
    Transport {
        operation: Operation,
        #[source]
        source: reqwest::Error,
    },

    #[error("{} (HTTP {status})", .operation.failure_message())]
    Status { operation: Operation, status: u16 },

    #[error("{detail}")]
    Server {
        operation: Operation,
        status: u16,
        detail: String,
    },

    #[error("{}: unexpected response: {source}", .operation.failure_message())]
    Decode {
        operation: Operation,
        #[source]
        source: reqwest::Error,
    },

    #[error("Invalid API URL '{url}': {source}")]
    Url {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
}

impl ApiError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ApiError::Validation(_) => ErrorKind::Validation,
            ApiError::Server { .. } => ErrorKind::Server,
            ApiError::Transport { .. }
            | ApiError::Status { .. }
            | ApiError::Decode { .. }
            | ApiError::Url { .. }
            | ApiError::Client(_) => ErrorKind::Network,
        }
    }

    /// HTTP status of the failed response, when there was one.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } | ApiError::Server { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Build the error for a non-success response from its raw body.
    pub(crate) fn from_response(operation: Operation, status: u16, body: &[u8]) -> Self {
        match extract_detail(body) {
            Some(detail) => ApiError::Server {
                operation,
                status,
                detail,
            },
            None => ApiError::Status { operation, status },
        }
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    detail: Value,
}

/// Pull the `detail` out of an error body. FastAPI sends either a plain
/// string or, for request validation failures, a list of `{msg, ...}`.
fn extract_detail(body: &[u8]) -> Option<String> {
    let parsed: ErrorBody = serde_json::from_slice(body).ok()?;
    let detail = match parsed.detail {
        Value::String(s) => s,
        Value::Array(items) => items
            .iter()
            .filter_map(|item| item.get("msg").and_then(Value::as_str))
            .collect::<Vec<_>>()
            .join("; "),
        _ => return None,
    };
    let detail = detail.trim();
    (!detail.is_empty()).then(|| detail.to_string())
}
