//! Reducer for the brief panel.

use crate::ui::collection::Collection;
use crate::ui::mvi::Reducer;

use super::intent::BriefPanelIntent;
use super::state::BriefPanelState;

/// Reducer for brief panel state transitions.
pub struct BriefPanelReducer;

impl Reducer for BriefPanelReducer {
    type State = BriefPanelState;
    type Intent = BriefPanelIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            BriefPanelIntent::SetLimit { limit } => BriefPanelState {
                limit: limit.max(1),
                ..state
            },
            BriefPanelIntent::LoadStarted => BriefPanelState {
                briefs: state.briefs.start_loading(),
                ..state
            },
            BriefPanelIntent::Loaded { briefs } => BriefPanelState {
                briefs: Collection::loaded(briefs),
                ..state
            },
            BriefPanelIntent::LoadFailed { message } => BriefPanelState {
                briefs: Collection::failed(message),
                ..state
            },
        }
    }
}
