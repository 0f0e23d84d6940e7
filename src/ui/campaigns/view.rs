//! Campaign list view: paging, search and the create/edit dialogs.

use tracing::{debug, warn};

use crate::api::{ApiClient, Campaign, CampaignStatus};
use crate::notify::{SharedNotifier, Toast};
use crate::ui::dialog::{CampaignEditForm, CampaignForm, DialogController, SubmitOutcome};
use crate::ui::runtime::{Store, ViewGuard};

use super::intent::CampaignListIntent;
use super::reducer::CampaignListReducer;
use super::state::CampaignListState;

/// Campaign list with its create and edit dialogs.
///
/// Every action ends in a full reload of the current page; the loaded
/// list is never patched in place.
#[derive(Clone)]
pub struct CampaignListView {
    client: ApiClient,
    notifier: SharedNotifier,
    store: Store<CampaignListReducer>,
    guard: ViewGuard,
    create: DialogController<CampaignForm>,
    edit: DialogController<CampaignEditForm>,
}

impl CampaignListView {
    pub fn new(client: ApiClient, notifier: SharedNotifier, page_size: u32) -> Self {
        Self {
            create: DialogController::new(notifier.clone()),
            edit: DialogController::new(notifier.clone()),
            store: Store::new(CampaignListState::with_page_size(page_size)),
            guard: ViewGuard::new(),
            client,
            notifier,
        }
    }

    pub fn state(&self) -> CampaignListState {
        self.store.snapshot()
    }

    pub fn create_dialog(&self) -> &DialogController<CampaignForm> {
        &self.create
    }

    pub fn edit_dialog(&self) -> &DialogController<CampaignEditForm> {
        &self.edit
    }

    pub async fn mount(&self) {
        self.guard.mount();
        self.reload().await;
    }

    /// Results of requests still in flight are dropped.
    pub fn unmount(&self) {
        self.guard.unmount();
    }

    pub async fn reload(&self) {
        if !self.guard.is_mounted() {
            debug!("campaign list not mounted, skipping reload");
            return;
        }
        let ticket = self.guard.begin();
        let state = self.store.dispatch(CampaignListIntent::LoadStarted);

        let result = self.client.list_campaigns(state.page, state.page_size).await;

        if !self.guard.is_current(ticket) {
            debug!(page = state.page, "discarding stale campaign page");
            return;
        }
        match result {
            Ok(campaigns) => {
                self.store
                    .dispatch(CampaignListIntent::Loaded { campaigns });
            }
            Err(err) => {
                warn!(error = %err, page = state.page, "failed to load campaigns");
                let message = err.to_string();
                self.notifier.notify(Toast::error(message.clone()));
                self.store
                    .dispatch(CampaignListIntent::LoadFailed { message });
            }
        }
    }

    pub async fn next_page(&self) {
        self.change_page(CampaignListIntent::NextPage).await;
    }

    pub async fn prev_page(&self) {
        self.change_page(CampaignListIntent::PrevPage).await;
    }

    pub async fn go_to_page(&self, page: u32) {
        self.change_page(CampaignListIntent::GoToPage { page }).await;
    }

    async fn change_page(&self, intent: CampaignListIntent) {
        let (before, after) = self.store.transition(intent);
        if before.page != after.page {
            self.reload().await;
        }
    }

    /// Filters the loaded page locally; no request.
    pub fn search(&self, term: impl Into<String>) {
        self.store
            .dispatch(CampaignListIntent::Search { term: term.into() });
    }

    pub fn filtered(&self) -> Vec<Campaign> {
        self.store.snapshot().filtered().into_iter().cloned().collect()
    }

    pub async fn submit_create(&self) -> SubmitOutcome {
        let client = self.client.clone();
        let outcome = self
            .create
            .submit(|campaign| async move { client.create_campaign(&campaign).await })
            .await;
        if outcome.needs_reload() {
            self.reload().await;
        }
        outcome
    }

    /// Open the edit dialog prefilled from a loaded campaign.
    pub fn begin_edit(&self, campaign: &Campaign) {
        self.edit.open_with(CampaignEditForm::prefilled(campaign));
    }

    pub async fn submit_edit(&self) -> SubmitOutcome {
        let client = self.client.clone();
        let outcome = self
            .edit
            .submit(|edit| async move { client.update_campaign(edit.id, &edit.update).await })
            .await;
        if outcome.needs_reload() {
            self.reload().await;
        }
        outcome
    }

    /// Quick status switch (run/pause) outside the edit dialog.
    pub async fn set_status(&self, id: i64, status: CampaignStatus) {
        match self.client.change_campaign_status(id, status).await {
            Ok(campaign) => {
                self.notifier.notify(Toast::success(format!(
                    "Campaign '{}' is now {}",
                    campaign.name, campaign.status
                )));
                self.reload().await;
            }
            Err(err) => {
                warn!(error = %err, id, "failed to change campaign status");
                self.notifier.notify(Toast::error(err.to_string()));
            }
        }
    }
}
