//! Decision flow view and the optimize trigger.

use tracing::{debug, info, warn};

use crate::api::ApiClient;
use crate::notify::{SharedNotifier, Toast};
use crate::ui::runtime::{Store, ViewGuard};

use super::intent::DecisionFlowIntent;
use super::reducer::DecisionFlowReducer;
use super::state::DecisionFlowState;

/// Title of the toast announcing a finished optimize; the summary is its
/// description.
pub const OPTIMIZE_TITLE: &str = "Optimization finished";

/// Result of an optimize trigger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptimizeResult {
    /// The agent ran; carries the summary that was shown.
    Finished(String),
    Failed,
    /// Not mounted, no campaign selected, or an optimize was already in
    /// flight. Also returned when the view is unmounted mid-request.
    Ignored,
}

/// Decision flow of one campaign plus the optimize trigger.
#[derive(Clone)]
pub struct DecisionFlowView {
    client: ApiClient,
    notifier: SharedNotifier,
    store: Store<DecisionFlowReducer>,
    guard: ViewGuard,
}

impl DecisionFlowView {
    pub fn new(client: ApiClient, notifier: SharedNotifier) -> Self {
        Self {
            client,
            notifier,
            store: Store::default(),
            guard: ViewGuard::new(),
        }
    }

    pub fn state(&self) -> DecisionFlowState {
        self.store.snapshot()
    }

    pub fn mount(&self) {
        self.guard.mount();
    }

    pub fn unmount(&self) {
        self.guard.unmount();
    }

    /// Show `campaign_id`'s flow.
    pub async fn select(&self, campaign_id: i64) {
        self.store
            .dispatch(DecisionFlowIntent::Select { campaign_id });
        self.reload().await;
    }

    pub async fn reload(&self) {
        if !self.guard.is_mounted() {
            return;
        }
        let Some(campaign_id) = self.store.snapshot().campaign_id else {
            debug!("no campaign selected, skipping decision flow load");
            return;
        };
        let ticket = self.guard.begin();
        self.store.dispatch(DecisionFlowIntent::LoadStarted);

        let result = self.client.fetch_decision_flow(campaign_id).await;

        if !self.guard.is_current(ticket) {
            debug!(campaign_id, "discarding stale decision flow");
            return;
        }
        match result {
            Ok(steps) => {
                self.store.dispatch(DecisionFlowIntent::Loaded { steps });
            }
            Err(err) => {
                warn!(error = %err, campaign_id, "failed to load decision flow");
                let message = err.to_string();
                self.notifier.notify(Toast::error(message.clone()));
                self.store
                    .dispatch(DecisionFlowIntent::LoadFailed { message });
            }
        }
    }

    /// Trigger the agent for the selected campaign, announce its summary
    /// and reload the flow. Ignored while another optimize is running.
    pub async fn optimize(&self) -> OptimizeResult {
        if !self.guard.is_mounted() {
            debug!("decision flow not mounted, optimize ignored");
            return OptimizeResult::Ignored;
        }
        let (before, after) = self.store.transition(DecisionFlowIntent::OptimizeStarted);
        let campaign_id = match (before.optimizing, after.optimizing, after.campaign_id) {
            (false, true, Some(id)) => id,
            _ => {
                debug!("optimize ignored");
                return OptimizeResult::Ignored;
            }
        };

        // Cleared on every exit, including a dropped future.
        let in_flight = scopeguard::guard(self.store.clone(), |store| {
            store.dispatch(DecisionFlowIntent::OptimizeFinished);
        });
        let result = self.client.trigger_optimize(campaign_id).await;
        drop(in_flight);

        if !self.guard.is_mounted() {
            debug!(campaign_id, "decision flow unmounted, discarding optimize result");
            return OptimizeResult::Ignored;
        }
        let outcome = match result {
            Ok(outcome) => {
                let summary = outcome.summary().to_string();
                info!(campaign_id, status = ?outcome.status, "optimize finished");
                self.notifier
                    .notify(Toast::success(OPTIMIZE_TITLE).with_description(summary.clone()));
                OptimizeResult::Finished(summary)
            }
            Err(err) => {
                warn!(error = %err, campaign_id, "optimize failed");
                self.notifier.notify(Toast::error(err.to_string()));
                OptimizeResult::Failed
            }
        };
        self.reload().await;
        outcome
    }
}
