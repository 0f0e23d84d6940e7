//! Daily brief panel.

mod intent;
mod reducer;
mod state;
mod view;

pub use intent::BriefPanelIntent;
pub use reducer::BriefPanelReducer;
pub use state::BriefPanelState;
pub use view::BriefPanelView;
