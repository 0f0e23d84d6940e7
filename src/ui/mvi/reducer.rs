use super::intent::Intent;
use super::state::UiState;

/// Computes the next state from the current one and an intent.
///
/// The only place state transitions happen. Must not perform I/O.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
