//! Intents for the campaign list.

use crate::api::Campaign;
use crate::ui::mvi::Intent;

/// Intents that can be dispatched to the campaign list.
#[derive(Debug, Clone)]
pub enum CampaignListIntent {
    LoadStarted,
    Loaded { campaigns: Vec<Campaign> },
    LoadFailed { message: String },
    NextPage,
    PrevPage,
    /// Jump to a page (1-based; 0 is treated as 1).
    GoToPage { page: u32 },
    Search { term: String },
}

impl Intent for CampaignListIntent {}
