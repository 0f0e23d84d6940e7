//! Intents for the brief panel.

use crate::api::Brief;
use crate::ui::mvi::Intent;

/// Intents that can be dispatched to the brief panel.
#[derive(Debug, Clone)]
pub enum BriefPanelIntent {
    SetLimit { limit: u32 },
    LoadStarted,
    Loaded { briefs: Vec<Brief> },
    LoadFailed { message: String },
}

impl Intent for BriefPanelIntent {}
