//! Form dialogs.
//!
//! Same MVI split as the list views:
//! - `form.rs` - raw field models and their validation
//! - `state.rs` - dialog lifecycle
//! - `intent.rs` - user/system actions
//! - `reducer.rs` - state transitions
//! - `controller.rs` - submit wiring and notifications

mod controller;
mod form;
mod intent;
mod reducer;
mod state;

pub use controller::{DialogController, SubmitOutcome, CANCELLED_MESSAGE};
pub use form::{AdviceForm, CampaignEdit, CampaignEditForm, CampaignForm, Form, FormField};
pub use intent::DialogIntent;
pub use reducer::DialogReducer;
pub use state::DialogState;
