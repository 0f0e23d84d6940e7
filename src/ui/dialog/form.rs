//! Raw form models and their conversion into request payloads.

use std::fmt::Debug;

use crate::api::{
    parse_budget, require, Campaign, CampaignStatus, CampaignUpdate, NewAdvice, NewCampaign,
    ValidationError,
};

/// Input fields a dialog can edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    Product,
    Objective,
    Budget,
    Status,
    Campaign,
    Kind,
    Content,
}

/// Raw string form state that validates into a request payload.
pub trait Form: Clone + PartialEq + Default + Debug + Send + 'static {
    /// Validated payload handed to the resource client.
    type Submission: Clone + PartialEq + Debug + Send + 'static;

    /// Notification title shown after a successful submit.
    const SUCCESS_MESSAGE: &'static str;

    /// Store `value` into `field`. Fields the form doesn't have are ignored.
    fn set(&mut self, field: FormField, value: String);

    fn validate(&self) -> Result<Self::Submission, ValidationError>;
}

/// Create-campaign dialog.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CampaignForm {
    pub name: String,
    pub product: String,
    pub objective: String,
    pub budget: String,
}

impl Form for CampaignForm {
    type Submission = NewCampaign;

    const SUCCESS_MESSAGE: &'static str = "Campaign created";

    fn set(&mut self, field: FormField, value: String) {
        match field {
            FormField::Name => self.name = value,
            FormField::Product => self.product = value,
            FormField::Objective => self.objective = value,
            FormField::Budget => self.budget = value,
            _ => {}
        }
    }

    fn validate(&self) -> Result<NewCampaign, ValidationError> {
        require("name", &self.name)?;
        require("product", &self.product)?;
        require("objective", &self.objective)?;
        let budget = parse_budget(&self.budget)?;
        let campaign = NewCampaign {
            name: self.name.trim().to_string(),
            product: self.product.trim().to_string(),
            objective: self.objective.trim().to_string(),
            budget,
        };
        campaign.validate()?;
        Ok(campaign)
    }
}

/// Validated edit: which campaign, and the fields to change.
#[derive(Debug, Clone, PartialEq)]
pub struct CampaignEdit {
    pub id: i64,
    pub update: CampaignUpdate,
}

/// Edit-campaign dialog. `None` means the field is left as it is on the
/// server; prefilled and edited fields are sent.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CampaignEditForm {
    pub id: i64,
    pub name: Option<String>,
    pub product: Option<String>,
    pub objective: Option<String>,
    pub budget: Option<String>,
    pub status: Option<String>,
}

impl CampaignEditForm {
    /// Empty edit for `id`; only fields set afterwards are sent.
    pub fn for_id(id: i64) -> Self {
        Self {
            id,
            ..Self::default()
        }
    }

    /// Edit prefilled with the campaign's current values.
    pub fn prefilled(campaign: &Campaign) -> Self {
        Self {
            id: campaign.id,
            name: Some(campaign.name.clone()),
            product: Some(campaign.product.clone()),
            objective: Some(campaign.objective.clone()),
            budget: Some(campaign.budget.to_string()),
            status: (campaign.status != CampaignStatus::Unknown)
                .then(|| campaign.status.to_string()),
        }
    }
}

impl Form for CampaignEditForm {
    type Submission = CampaignEdit;

    const SUCCESS_MESSAGE: &'static str = "Campaign updated";

    fn set(&mut self, field: FormField, value: String) {
        match field {
            FormField::Name => self.name = Some(value),
            FormField::Product => self.product = Some(value),
            FormField::Objective => self.objective = Some(value),
            FormField::Budget => self.budget = Some(value),
            FormField::Status => self.status = Some(value),
            _ => {}
        }
    }

    fn validate(&self) -> Result<CampaignEdit, ValidationError> {
        let budget = self.budget.as_deref().map(parse_budget).transpose()?;
        let status = self
            .status
            .as_deref()
            .map(str::parse::<CampaignStatus>)
            .transpose()?;
        let update = CampaignUpdate {
            name: self.name.as_deref().map(|s| s.trim().to_string()),
            product: self.product.as_deref().map(|s| s.trim().to_string()),
            objective: self.objective.as_deref().map(|s| s.trim().to_string()),
            budget,
            status,
        };
        update.validate()?;
        Ok(CampaignEdit {
            id: self.id,
            update,
        })
    }
}

/// Compose-advice dialog.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AdviceForm {
    /// Raw campaign id; blank means a global advice.
    pub campaign: String,
    pub kind: String,
    pub content: String,
}

impl AdviceForm {
    pub fn new(campaign_id: Option<i64>, kind: impl Into<String>) -> Self {
        Self {
            campaign: campaign_id.map(|id| id.to_string()).unwrap_or_default(),
            kind: kind.into(),
            content: String::new(),
        }
    }
}

impl Form for AdviceForm {
    type Submission = NewAdvice;

    const SUCCESS_MESSAGE: &'static str = "Advice created";

    fn set(&mut self, field: FormField, value: String) {
        match field {
            FormField::Campaign => self.campaign = value,
            FormField::Kind => self.kind = value,
            FormField::Content => self.content = value,
            _ => {}
        }
    }

    fn validate(&self) -> Result<NewAdvice, ValidationError> {
        let campaign = self.campaign.trim();
        let campaign_id = if campaign.is_empty() {
            None
        } else {
            Some(
                campaign
                    .parse::<i64>()
                    .map_err(|_| ValidationError::InvalidNumber {
                        field: "campaign",
                        input: campaign.to_string(),
                    })?,
            )
        };
        let kind = match self.kind.trim() {
            "" => "custom".to_string(),
            kind => kind.to_string(),
        };
        let advice = NewAdvice {
            campaign_id,
            kind,
            content: self.content.trim().to_string(),
        };
        advice.validate()?;
        Ok(advice)
    }
}
