//! State for the decision flow.

use crate::api::DecisionStep;
use crate::ui::collection::Collection;
use crate::ui::mvi::UiState;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct DecisionFlowState {
    /// Campaign whose flow is shown. Nothing loads until one is selected.
    pub campaign_id: Option<i64>,
    pub steps: Collection<DecisionStep>,
    /// An optimize request is in flight.
    pub optimizing: bool,
}

impl UiState for DecisionFlowState {}
