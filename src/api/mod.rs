//! Resource client for the campaign/advice backend.

mod client;
mod error;
mod types;
mod validation;

pub use client::ApiClient;
pub use error::{ApiError, ErrorKind, Operation};
pub use types::{
    Advice, AdviceStatus, AgentLogEntry, Brief, Campaign, CampaignAnalysis, CampaignStatus,
    DecisionStep, Executed, ExecutionRecord, IndustryItem, OptimizeOutcome, Overview,
    RecentCampaign, StatCard, StepStatus,
};
pub(crate) use validation::require;
pub use validation::{parse_budget, CampaignUpdate, NewAdvice, NewCampaign, ValidationError};
