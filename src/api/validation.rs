//! Request payloads and the client-side checks they must pass before any
//! request is sent.

use serde::Serialize;
use thiserror::Error;

use super::types::CampaignStatus;

/// Client-side rejection of a payload. Never reaches the network.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{field} must not be empty")]
    Required { field: &'static str },

    #[error("budget must be a positive number, got '{input}'")]
    InvalidBudget { input: String },

    #[error("{field} must be a number, got '{input}'")]
    InvalidNumber { field: &'static str, input: String },

    #[error("unknown status '{input}'")]
    UnknownStatus { input: String },

    #[error("no fields to update")]
    EmptyUpdate,
}

/// Parse a raw budget field. Accepts anything `f64` parses that is finite
/// and strictly positive.
pub fn parse_budget(raw: &str) -> Result<f64, ValidationError> {
    let invalid = || ValidationError::InvalidBudget {
        input: raw.to_string(),
    };
    let value: f64 = raw.trim().parse().map_err(|_| invalid())?;
    check_budget(value).map_err(|_| invalid())?;
    Ok(value)
}

fn check_budget(value: f64) -> Result<(), ValidationError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ValidationError::InvalidBudget {
            input: value.to_string(),
        })
    }
}

pub(crate) fn require(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        Err(ValidationError::Required { field })
    } else {
        Ok(())
    }
}

/// Body of `POST /api/campaigns/`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewCampaign {
    pub name: String,
    pub product: String,
    pub objective: String,
    pub budget: f64,
}

impl NewCampaign {
    pub fn validate(&self) -> Result<(), ValidationError> {
        require("name", &self.name)?;
        require("product", &self.product)?;
        require("objective", &self.objective)?;
        check_budget(self.budget)
    }
}

/// Body of `PUT /api/campaigns/{id}`. Absent fields are left untouched by
/// the backend and are not serialized.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct CampaignUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub objective: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub budget: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<CampaignStatus>,
}

impl CampaignUpdate {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.product.is_none()
            && self.objective.is_none()
            && self.budget.is_none()
            && self.status.is_none()
    }

    /// Applies the create-time rules to every field that is present.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.is_empty() {
            return Err(ValidationError::EmptyUpdate);
        }
        if let Some(name) = &self.name {
            require("name", name)?;
        }
        if let Some(product) = &self.product {
            require("product", product)?;
        }
        if let Some(objective) = &self.objective {
            require("objective", objective)?;
        }
        if let Some(budget) = self.budget {
            check_budget(budget)?;
        }
        if self.status == Some(CampaignStatus::Unknown) {
            return Err(ValidationError::UnknownStatus {
                input: CampaignStatus::Unknown.to_string(),
            });
        }
        Ok(())
    }
}

/// Body of `POST /api/ai/advise`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewAdvice {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub campaign_id: Option<i64>,
    #[serde(rename = "type")]
    pub kind: String,
    pub content: String,
}

impl NewAdvice {
    pub fn validate(&self) -> Result<(), ValidationError> {
        require("content", &self.content)
    }
}
