//! State for the campaign list.

use crate::api::Campaign;
use crate::config::DEFAULT_PAGE_SIZE;
use crate::ui::collection::Collection;
use crate::ui::mvi::UiState;

/// Campaign list: one page of campaigns plus the search term.
#[derive(Debug, Clone, PartialEq)]
pub struct CampaignListState {
    pub campaigns: Collection<Campaign>,
    /// 1-based.
    pub page: u32,
    pub page_size: u32,
    pub search: String,
    /// False only when the last load returned fewer than `page_size`
    /// items. A final page of exactly `page_size` items keeps it true;
    /// the backend gives no total count to do better.
    pub has_next: bool,
}

impl Default for CampaignListState {
    fn default() -> Self {
        Self::with_page_size(DEFAULT_PAGE_SIZE)
    }
}

impl UiState for CampaignListState {}

impl CampaignListState {
    pub fn with_page_size(page_size: u32) -> Self {
        Self {
            campaigns: Collection::default(),
            page: 1,
            page_size: page_size.max(1),
            search: String::new(),
            has_next: false,
        }
    }

    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    pub fn offset(&self) -> u64 {
        u64::from(self.page.saturating_sub(1)) * u64::from(self.page_size)
    }

    /// Campaigns whose name contains the search term, ignoring case.
    pub fn filtered(&self) -> Vec<&Campaign> {
        let needle = self.search.trim().to_lowercase();
        self.campaigns
            .items()
            .iter()
            .filter(|c| needle.is_empty() || c.name.to_lowercase().contains(&needle))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_uses_configured_page_size() {
        assert_eq!(CampaignListState::default().page_size, DEFAULT_PAGE_SIZE);
    }

    #[test]
    fn offset_of_page_zero_is_zero() {
        let state = CampaignListState {
            page: 0,
            ..CampaignListState::with_page_size(10)
        };
        assert_eq!(state.offset(), 0);
        assert!(!state.has_prev());
    }

    #[test]
    fn offset_counts_whole_pages() {
        let state = CampaignListState {
            page: 3,
            ..CampaignListState::with_page_size(10)
        };
        assert_eq!(state.offset(), 20);
    }
}
