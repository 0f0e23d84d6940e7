//! Intents for the advice panel.

use crate::api::{Advice, AdviceStatus};
use crate::ui::mvi::Intent;

/// Intents that can be dispatched to the advice panel.
#[derive(Debug, Clone)]
pub enum AdvicePanelIntent {
    /// Change the campaign/status filters.
    Filter {
        campaign_id: Option<i64>,
        status: Option<AdviceStatus>,
    },
    LoadStarted,
    Loaded { advices: Vec<Advice> },
    LoadFailed { message: String },
}

impl Intent for AdvicePanelIntent {}
