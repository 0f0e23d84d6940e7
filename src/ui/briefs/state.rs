//! State for the brief panel.

use crate::api::Brief;
use crate::config::DEFAULT_BRIEF_LIMIT;
use crate::ui::collection::Collection;
use crate::ui::mvi::UiState;

/// Latest daily briefs and how many to fetch.
#[derive(Debug, Clone, PartialEq)]
pub struct BriefPanelState {
    pub briefs: Collection<Brief>,
    /// How many of the latest briefs to request.
    pub limit: u32,
}

impl Default for BriefPanelState {
    fn default() -> Self {
        Self {
            briefs: Collection::default(),
            limit: DEFAULT_BRIEF_LIMIT,
        }
    }
}

impl UiState for BriefPanelState {}
