//! Advice panel: filtered list, status-gated reviewer actions and the
//! compose dialog.

mod intent;
mod reducer;
mod state;
mod view;

pub use intent::AdvicePanelIntent;
pub use reducer::AdvicePanelReducer;
pub use state::{actions_for, AdviceAction, AdvicePanelState, EMPTY_MESSAGE};
pub use view::{ActionOutcome, AdvicePanelView};
