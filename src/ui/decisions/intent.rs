//! Intents for the decision flow.

use crate::api::DecisionStep;
use crate::ui::mvi::Intent;

/// Intents that can be dispatched to the decision flow.
#[derive(Debug, Clone)]
pub enum DecisionFlowIntent {
    Select { campaign_id: i64 },
    LoadStarted,
    Loaded { steps: Vec<DecisionStep> },
    LoadFailed { message: String },
    OptimizeStarted,
    OptimizeFinished,
}

impl Intent for DecisionFlowIntent {}
