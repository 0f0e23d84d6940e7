//! Brief panel view.

use tracing::{debug, warn};

use crate::api::ApiClient;
use crate::notify::{SharedNotifier, Toast};
use crate::ui::runtime::{Store, ViewGuard};

use super::intent::BriefPanelIntent;
use super::reducer::BriefPanelReducer;
use super::state::BriefPanelState;

/// Read-only list of the latest daily briefs.
#[derive(Clone)]
pub struct BriefPanelView {
    client: ApiClient,
    notifier: SharedNotifier,
    store: Store<BriefPanelReducer>,
    guard: ViewGuard,
}

impl BriefPanelView {
    pub fn new(client: ApiClient, notifier: SharedNotifier, limit: u32) -> Self {
        let store = Store::default();
        store.dispatch(BriefPanelIntent::SetLimit { limit });
        Self {
            client,
            notifier,
            store,
            guard: ViewGuard::new(),
        }
    }

    pub fn state(&self) -> BriefPanelState {
        self.store.snapshot()
    }

    pub async fn mount(&self) {
        self.guard.mount();
        self.reload().await;
    }

    pub fn unmount(&self) {
        self.guard.unmount();
    }

    pub async fn set_limit(&self, limit: u32) {
        self.store.dispatch(BriefPanelIntent::SetLimit { limit });
        self.reload().await;
    }

    pub async fn reload(&self) {
        if !self.guard.is_mounted() {
            return;
        }
        let ticket = self.guard.begin();
        let state = self.store.dispatch(BriefPanelIntent::LoadStarted);
        let result = self.client.fetch_daily_brief(state.limit).await;

        if !self.guard.is_current(ticket) {
            debug!("discarding stale brief list");
            return;
        }
        match result {
            Ok(briefs) => {
                self.store.dispatch(BriefPanelIntent::Loaded { briefs });
            }
            Err(err) => {
                warn!(error = %err, "failed to load daily brief");
                let message = err.to_string();
                self.notifier.notify(Toast::error(message.clone()));
                self.store.dispatch(BriefPanelIntent::LoadFailed { message });
            }
        }
    }
}
