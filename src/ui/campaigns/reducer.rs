//! Reducer for the campaign list.

use crate::ui::collection::Collection;
use crate::ui::mvi::Reducer;

use super::intent::CampaignListIntent;
use super::state::CampaignListState;

/// Reducer for campaign list state transitions.
pub struct CampaignListReducer;

impl Reducer for CampaignListReducer {
    type State = CampaignListState;
    type Intent = CampaignListIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            CampaignListIntent::LoadStarted => CampaignListState {
                campaigns: state.campaigns.start_loading(),
                ..state
            },

            CampaignListIntent::Loaded { campaigns } => {
                let has_next = campaigns.len() as u64 >= u64::from(state.page_size);
                CampaignListState {
                    campaigns: Collection::loaded(campaigns),
                    has_next,
                    ..state
                }
            }

            CampaignListIntent::LoadFailed { message } => CampaignListState {
                campaigns: Collection::failed(message),
                has_next: false,
                ..state
            },

            CampaignListIntent::NextPage if state.has_next => CampaignListState {
                page: state.page + 1,
                ..state
            },

            CampaignListIntent::PrevPage if state.has_prev() => CampaignListState {
                page: state.page - 1,
                ..state
            },

            CampaignListIntent::GoToPage { page } => CampaignListState {
                page: page.max(1),
                ..state
            },

            CampaignListIntent::Search { term } => CampaignListState {
                search: term,
                ..state
            },

            CampaignListIntent::NextPage | CampaignListIntent::PrevPage => state,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{Campaign, CampaignStatus};
    use crate::ui::collection::Display;

    fn campaign(id: i64, name: &str) -> Campaign {
        Campaign {
            id,
            name: name.to_string(),
            product: "Shoes".into(),
            objective: "Reach".into(),
            budget: 100.0,
            status: CampaignStatus::Running,
            created_at: "2024-03-15T10:00:00".into(),
        }
    }

    fn page_of(n: usize) -> Vec<Campaign> {
        (0..n).map(|i| campaign(i as i64 + 1, "c")).collect()
    }

    fn loaded(page_size: u32, n: usize) -> CampaignListState {
        CampaignListReducer::reduce(
            CampaignListState::with_page_size(page_size),
            CampaignListIntent::Loaded {
                campaigns: page_of(n),
            },
        )
    }

    #[test]
    fn short_page_disables_next() {
        let state = loaded(5, 3);
        assert!(!state.has_next);
        let same = CampaignListReducer::reduce(state.clone(), CampaignListIntent::NextPage);
        assert_eq!(same.page, 1);
    }

    #[test]
    fn full_page_keeps_next_enabled() {
        // Exactly page_size items: could be the last page, but the
        // count-based heuristic cannot tell.
        let state = loaded(5, 5);
        assert!(state.has_next);
        let next = CampaignListReducer::reduce(state, CampaignListIntent::NextPage);
        assert_eq!(next.page, 2);
        assert_eq!(next.offset(), 5);
    }

    #[test]
    fn prev_page_stops_at_one() {
        let state = CampaignListState::with_page_size(5);
        assert!(!state.has_prev());
        let same = CampaignListReducer::reduce(state, CampaignListIntent::PrevPage);
        assert_eq!(same.page, 1);

        let page3 = CampaignListReducer::reduce(same, CampaignListIntent::GoToPage { page: 3 });
        let page2 = CampaignListReducer::reduce(page3, CampaignListIntent::PrevPage);
        assert_eq!(page2.page, 2);
    }

    #[test]
    fn go_to_page_zero_means_first_page() {
        let state = CampaignListReducer::reduce(
            CampaignListState::default(),
            CampaignListIntent::GoToPage { page: 0 },
        );
        assert_eq!(state.page, 1);
    }

    #[test]
    fn load_started_discards_previous_items() {
        let state = CampaignListReducer::reduce(loaded(5, 3), CampaignListIntent::LoadStarted);
        assert_eq!(state.campaigns.display(), Display::Loading);
        assert!(state.campaigns.is_empty());
    }

    #[test]
    fn load_failure_sets_error_and_disables_next() {
        let state = CampaignListReducer::reduce(
            loaded(5, 5),
            CampaignListIntent::LoadFailed {
                message: "Failed to load campaigns (HTTP 500)".into(),
            },
        );
        assert_eq!(
            state.campaigns.display(),
            Display::Failed("Failed to load campaigns (HTTP 500)")
        );
        assert!(!state.has_next);
    }

    #[test]
    fn search_is_case_insensitive_substring_on_name() {
        let state = CampaignListReducer::reduce(
            CampaignListState::default(),
            CampaignListIntent::Loaded {
                campaigns: vec![
                    campaign(1, "Spring Launch"),
                    campaign(2, "Brand Awareness"),
                    campaign(3, "spring retention"),
                ],
            },
        );
        let state = CampaignListReducer::reduce(
            state,
            CampaignListIntent::Search {
                term: "SPRING".into(),
            },
        );
        let ids: Vec<i64> = state.filtered().iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![1, 3]);

        let cleared =
            CampaignListReducer::reduce(state, CampaignListIntent::Search { term: String::new() });
        assert_eq!(cleared.filtered().len(), 3);
    }
}
