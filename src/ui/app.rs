use crate::api::{ApiClient, ApiError};
use crate::config::Config;
use crate::notify::SharedNotifier;
use crate::ui::advices::AdvicePanelView;
use crate::ui::briefs::BriefPanelView;
use crate::ui::campaigns::CampaignListView;
use crate::ui::decisions::DecisionFlowView;

/// Composition root: one client and one notifier shared by every view.
#[derive(Clone)]
pub struct Console {
    client: ApiClient,
    campaigns: CampaignListView,
    advices: AdvicePanelView,
    briefs: BriefPanelView,
    decisions: DecisionFlowView,
}

impl Console {
    pub fn new(config: &Config, notifier: SharedNotifier) -> Result<Self, ApiError> {
        let client = ApiClient::new(&config.api)?;
        Ok(Self {
            campaigns: CampaignListView::new(
                client.clone(),
                notifier.clone(),
                config.views.page_size,
            ),
            advices: AdvicePanelView::new(
                client.clone(),
                notifier.clone(),
                config.views.advice_type.clone(),
            ),
            briefs: BriefPanelView::new(client.clone(), notifier.clone(), config.views.brief_limit),
            decisions: DecisionFlowView::new(client.clone(), notifier),
            client,
        })
    }

    /// Reviewer name sent with approve/reject.
    pub fn with_reviewer(mut self, reviewer: Option<String>) -> Self {
        self.advices = self.advices.with_reviewer(reviewer);
        self
    }

    /// Direct access for read-only calls that have no view.
    pub fn client(&self) -> &ApiClient {
        &self.client
    }

    pub fn campaigns(&self) -> &CampaignListView {
        &self.campaigns
    }

    pub fn advices(&self) -> &AdvicePanelView {
        &self.advices
    }

    pub fn briefs(&self) -> &BriefPanelView {
        &self.briefs
    }

    pub fn decisions(&self) -> &DecisionFlowView {
        &self.decisions
    }

    /// Drop every view; in-flight results are discarded.
    pub fn shutdown(&self) {
        self.campaigns.unmount();
        self.advices.unmount();
        self.briefs.unmount();
        self.decisions.unmount();
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::notify::RecordingNotifier;

    #[test]
    fn views_pick_up_configured_sizes() {
        let mut config = Config::default();
        config.views.page_size = 5;
        config.views.brief_limit = 3;
        let console = Console::new(&config, Arc::new(RecordingNotifier::new())).unwrap();

        assert_eq!(console.campaigns().state().page_size, 5);
        assert_eq!(console.briefs().state().limit, 3);
        assert_eq!(console.client().base_url(), "http://127.0.0.1:8000");
    }
}
