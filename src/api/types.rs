//! Wire types for the campaign and advice REST surface.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::validation::ValidationError;

/// Lifecycle state of a campaign as reported by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CampaignStatus {
    Draft,
    Running,
    Optimizing,
    Paused,
    /// Backend default for freshly created campaigns.
    Created,
    Completed,
    #[serde(other)]
    Unknown,
}

impl CampaignStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Running => "running",
            Self::Optimizing => "optimizing",
            Self::Paused => "paused",
            Self::Created => "created",
            Self::Completed => "completed",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for CampaignStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CampaignStatus {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "draft" => Ok(Self::Draft),
            "running" => Ok(Self::Running),
            "optimizing" => Ok(Self::Optimizing),
            "paused" => Ok(Self::Paused),
            "created" => Ok(Self::Created),
            "completed" => Ok(Self::Completed),
            _ => Err(ValidationError::UnknownStatus {
                input: s.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Campaign {
    pub id: i64,
    pub name: String,
    pub product: String,
    pub objective: String,
    pub budget: f64,
    pub status: CampaignStatus,
    pub created_at: String,
}

/// Review state of an advice item.
///
/// Valid transitions are `Pending -> Approved | Rejected` and
/// `Approved -> Executed`. `Rejected` and `Executed` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdviceStatus {
    Pending,
    Approved,
    Rejected,
    Executed,
}

impl AdviceStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
            Self::Executed => "executed",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Rejected | Self::Executed)
    }

    pub fn can_transition_to(&self, next: AdviceStatus) -> bool {
        matches!(
            (self, next),
            (Self::Pending, Self::Approved)
                | (Self::Pending, Self::Rejected)
                | (Self::Approved, Self::Executed)
        )
    }
}

impl fmt::Display for AdviceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AdviceStatus {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pending" => Ok(Self::Pending),
            "approved" => Ok(Self::Approved),
            "rejected" => Ok(Self::Rejected),
            "executed" => Ok(Self::Executed),
            _ => Err(ValidationError::UnknownStatus {
                input: s.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Advice {
    pub id: i64,
    #[serde(default)]
    pub campaign_id: Option<i64>,
    #[serde(rename = "type")]
    pub kind: String,
    pub content: String,
    pub status: AdviceStatus,
    pub created_at: String,
    #[serde(default)]
    pub approved_by: Option<String>,
    #[serde(default)]
    pub executed_at: Option<String>,
}

/// Record the backend writes when an advice is executed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExecutionRecord {
    pub id: i64,
    pub advice_id: i64,
    pub result: String,
    pub executed_at: String,
}

/// Response to an execute call. Depending on the backend version this is
/// either the updated advice or the execution record.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Executed {
    Advice(Advice),
    Record(ExecutionRecord),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Brief {
    pub id: i64,
    pub content: String,
    pub date: String,
    #[serde(default)]
    pub raw_data: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepStatus {
    Completed,
    Error,
    InProgress,
    Pending,
    #[serde(other)]
    Unknown,
}

/// One node of the agent decision flow for a campaign.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionStep {
    pub id: i64,
    #[serde(rename = "type")]
    pub kind: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub status: StepStatus,
    #[serde(default)]
    pub timestamp: String,
    #[serde(default)]
    pub input: Value,
    #[serde(default)]
    pub output: Value,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct DecisionFlowEnvelope {
    #[serde(rename = "decisionFlow", default)]
    pub decision_flow: Vec<DecisionStep>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct OptimizeOutcome {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub result: Value,
}

impl OptimizeOutcome {
    /// Human-readable summary: the agent's own `result.result` text when it
    /// produced one, the envelope message otherwise.
    pub fn summary(&self) -> &str {
        self.result
            .get("result")
            .and_then(Value::as_str)
            .filter(|s| !s.is_empty())
            .unwrap_or(self.message.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentLogEntry {
    pub timestamp: String,
    pub level: String,
    pub component: String,
    pub message: String,
    #[serde(default)]
    pub data: Value,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct AgentLogEnvelope {
    #[serde(rename = "agentLogs", default)]
    pub agent_logs: Vec<AgentLogEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndustryItem {
    pub title: String,
    #[serde(default)]
    pub summary: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CampaignAnalysis {
    #[serde(default)]
    pub info: Vec<IndustryItem>,
    #[serde(default)]
    pub suggestion: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatCard {
    pub title: String,
    pub value: String,
    #[serde(default)]
    pub change: String,
    #[serde(default)]
    pub trend: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecentCampaign {
    pub name: String,
    pub status: String,
    pub budget: String,
    #[serde(default)]
    pub performance: f64,
    #[serde(default)]
    pub ai_optimized: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Overview {
    #[serde(default)]
    pub stats: Vec<StatCard>,
    #[serde(rename = "recentCampaigns", default)]
    pub recent_campaigns: Vec<RecentCampaign>,
}
