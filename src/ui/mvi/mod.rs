//! Model-View-Intent primitives shared by every view.
//!
//! ```text
//! action ──→ Intent ──→ Reducer ──→ State ──→ render
//!               ↑                      │
//!               └── load / submit ─────┘
//! ```
//!
//! Reducers are pure. Network calls happen in the view controllers, which
//! feed their outcomes back in as intents.

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
