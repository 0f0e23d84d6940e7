//! Agent decision flow and the optimize trigger.

mod intent;
mod reducer;
mod state;
mod view;

pub use intent::DecisionFlowIntent;
pub use reducer::DecisionFlowReducer;
pub use state::DecisionFlowState;
pub use view::{DecisionFlowView, OptimizeResult, OPTIMIZE_TITLE};
