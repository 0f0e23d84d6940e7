//! Reducer for the advice panel.

use crate::ui::collection::Collection;
use crate::ui::mvi::Reducer;

use super::intent::AdvicePanelIntent;
use super::state::AdvicePanelState;

/// Reducer for advice panel state transitions.
pub struct AdvicePanelReducer;

impl Reducer for AdvicePanelReducer {
    type State = AdvicePanelState;
    type Intent = AdvicePanelIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            AdvicePanelIntent::Filter {
                campaign_id,
                status,
            } => AdvicePanelState {
                campaign_id,
                status,
                ..state
            },
            AdvicePanelIntent::LoadStarted => AdvicePanelState {
                advices: state.advices.start_loading(),
                ..state
            },
            AdvicePanelIntent::Loaded { advices } => AdvicePanelState {
                advices: Collection::loaded(advices),
                ..state
            },
            AdvicePanelIntent::LoadFailed { message } => AdvicePanelState {
                advices: Collection::failed(message),
                ..state
            },
        }
    }
}
