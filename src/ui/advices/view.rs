//! Advice panel view.

use tracing::{debug, warn};

use crate::api::{AdviceStatus, ApiClient, Executed};
use crate::notify::{SharedNotifier, Toast};
use crate::ui::dialog::{AdviceForm, DialogController, SubmitOutcome};
use crate::ui::runtime::{Store, ViewGuard};

use super::intent::AdvicePanelIntent;
use super::reducer::AdvicePanelReducer;
use super::state::{AdviceAction, AdvicePanelState};

/// Result of a reviewer action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionOutcome {
    /// The backend accepted the action.
    Done,
    /// The panel is not mounted, or the action is not offered for the
    /// advice's loaded status; nothing was sent.
    Refused,
    /// The backend rejected the action or could not be reached.
    Failed,
}

/// Advice list with its reviewer actions and compose dialog.
#[derive(Clone)]
pub struct AdvicePanelView {
    client: ApiClient,
    notifier: SharedNotifier,
    store: Store<AdvicePanelReducer>,
    guard: ViewGuard,
    compose: DialogController<AdviceForm>,
    reviewer: Option<String>,
    advice_type: String,
}

impl AdvicePanelView {
    pub fn new(client: ApiClient, notifier: SharedNotifier, advice_type: impl Into<String>) -> Self {
        Self {
            compose: DialogController::new(notifier.clone()),
            store: Store::default(),
            guard: ViewGuard::new(),
            reviewer: None,
            advice_type: advice_type.into(),
            client,
            notifier,
        }
    }

    /// Name sent as `approved_by` with approve/reject.
    pub fn with_reviewer(mut self, reviewer: Option<String>) -> Self {
        self.reviewer = reviewer;
        self
    }

    pub fn state(&self) -> AdvicePanelState {
        self.store.snapshot()
    }

    pub fn compose_dialog(&self) -> &DialogController<AdviceForm> {
        &self.compose
    }

    pub async fn mount(&self) {
        self.guard.mount();
        self.reload().await;
    }

    pub fn unmount(&self) {
        self.guard.unmount();
    }

    pub async fn reload(&self) {
        if !self.guard.is_mounted() {
            debug!("advice panel not mounted, skipping reload");
            return;
        }
        let ticket = self.guard.begin();
        let state = self.store.dispatch(AdvicePanelIntent::LoadStarted);

        let result = self
            .client
            .list_advices(state.campaign_id, state.status)
            .await;

        if !self.guard.is_current(ticket) {
            debug!(campaign_id = ?state.campaign_id, "discarding stale advice list");
            return;
        }
        match result {
            Ok(advices) => {
                self.store.dispatch(AdvicePanelIntent::Loaded { advices });
            }
            Err(err) => {
                warn!(error = %err, "failed to load advices");
                let message = err.to_string();
                self.notifier.notify(Toast::error(message.clone()));
                self.store.dispatch(AdvicePanelIntent::LoadFailed { message });
            }
        }
    }

    /// Change filters and reload.
    pub async fn set_filter(&self, campaign_id: Option<i64>, status: Option<AdviceStatus>) {
        self.store.dispatch(AdvicePanelIntent::Filter {
            campaign_id,
            status,
        });
        self.reload().await;
    }

    /// Run `action` on advice `id`. Refused locally, without a request,
    /// unless the loaded status offers it.
    pub async fn perform(&self, id: i64, action: AdviceAction) -> ActionOutcome {
        self.run(id, action, None).await
    }

    /// Execute an approved advice, recording `result` as its outcome.
    pub async fn execute_with_result(&self, id: i64, result: &str) -> ActionOutcome {
        self.run(id, AdviceAction::Execute, Some(result)).await
    }

    async fn run(&self, id: i64, action: AdviceAction, result: Option<&str>) -> ActionOutcome {
        if !self.guard.is_mounted() {
            debug!(id, action = action.label(), "advice panel not mounted, action refused");
            return ActionOutcome::Refused;
        }
        let state = self.store.snapshot();
        if !state.offers(id, action) {
            let title = match state.find(id) {
                Some(advice) => format!(
                    "Cannot {} advice #{} while it is {}",
                    action.label(),
                    id,
                    advice.status
                ),
                None => format!("Advice #{} is not loaded", id),
            };
            debug!(id, action = action.label(), "action refused");
            self.notifier.notify(Toast::error(title));
            return ActionOutcome::Refused;
        }

        let response = match action {
            AdviceAction::Approve | AdviceAction::Reject => self
                .client
                .approve_advice(id, action == AdviceAction::Approve, self.reviewer.as_deref())
                .await
                .map(|advice| match advice.status {
                    AdviceStatus::Rejected => "Rejected".to_string(),
                    _ => "Approved".to_string(),
                }),
            AdviceAction::Execute => {
                self.client
                    .execute_advice(id, result)
                    .await
                    .map(|executed| match executed {
                        Executed::Record(record) if !record.result.is_empty() => {
                            format!("Advice executed: {}", record.result)
                        }
                        _ => "Advice executed".to_string(),
                    })
            }
        };

        if !self.guard.is_mounted() {
            debug!(id, action = action.label(), "advice panel unmounted, discarding result");
            return match response {
                Ok(_) => ActionOutcome::Done,
                Err(_) => ActionOutcome::Failed,
            };
        }
        let outcome = match response {
            Ok(title) => {
                self.notifier.notify(Toast::success(title));
                ActionOutcome::Done
            }
            Err(err) => {
                warn!(error = %err, id, action = action.label(), "advice action failed");
                self.notifier.notify(Toast::error(err.to_string()));
                ActionOutcome::Failed
            }
        };
        self.reload().await;
        outcome
    }

    /// Open the compose dialog bound to the current campaign filter.
    pub fn begin_compose(&self) {
        let campaign_id = self.store.snapshot().campaign_id;
        self.compose
            .open_with(AdviceForm::new(campaign_id, self.advice_type.clone()));
    }

    pub async fn submit_compose(&self) -> SubmitOutcome {
        let client = self.client.clone();
        let outcome = self
            .compose
            .submit(|advice| async move { client.create_advice(&advice).await })
            .await;
        if outcome.needs_reload() {
            self.reload().await;
        }
        outcome
    }
}
