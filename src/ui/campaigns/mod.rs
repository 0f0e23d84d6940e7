//! Campaign list view.
//!
//! - `state.rs` - page, search term and loaded campaigns
//! - `intent.rs` - load outcomes, paging, search
//! - `reducer.rs` - state transitions
//! - `view.rs` - async controller with the create/edit dialogs

mod intent;
mod reducer;
mod state;
mod view;

pub use intent::CampaignListIntent;
pub use reducer::CampaignListReducer;
pub use state::CampaignListState;
pub use view::CampaignListView;
