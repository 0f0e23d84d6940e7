//! Reducer for the decision flow.

use crate::ui::collection::Collection;
use crate::ui::mvi::Reducer;

use super::intent::DecisionFlowIntent;
use super::state::DecisionFlowState;

/// Reducer for decision flow state transitions.
pub struct DecisionFlowReducer;

impl Reducer for DecisionFlowReducer {
    type State = DecisionFlowState;
    type Intent = DecisionFlowIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            DecisionFlowIntent::Select { campaign_id } => DecisionFlowState {
                campaign_id: Some(campaign_id),
                steps: Collection::default(),
                ..state
            },
            DecisionFlowIntent::LoadStarted => DecisionFlowState {
                steps: state.steps.start_loading(),
                ..state
            },
            DecisionFlowIntent::Loaded { steps } => DecisionFlowState {
                steps: Collection::loaded(steps),
                ..state
            },
            DecisionFlowIntent::LoadFailed { message } => DecisionFlowState {
                steps: Collection::failed(message),
                ..state
            },
            // Only one optimize at a time, and only with a campaign selected.
            DecisionFlowIntent::OptimizeStarted
                if state.campaign_id.is_some() && !state.optimizing =>
            {
                DecisionFlowState {
                    optimizing: true,
                    ..state
                }
            }
            DecisionFlowIntent::OptimizeStarted => state,
            DecisionFlowIntent::OptimizeFinished => DecisionFlowState {
                optimizing: false,
                ..state
            },
        }
    }
}
