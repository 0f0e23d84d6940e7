//! State for the advice panel and the status-gated reviewer actions.

use crate::api::{Advice, AdviceStatus};
use crate::ui::collection::Collection;
use crate::ui::mvi::UiState;

/// Shown when a load succeeds with no advice.
pub const EMPTY_MESSAGE: &str = "No advice yet";

/// Reviewer action on a single advice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdviceAction {
    Approve,
    Reject,
    Execute,
}

impl AdviceAction {
    /// Status the advice must currently have for this action to be offered.
    pub fn required_status(&self) -> AdviceStatus {
        match self {
            AdviceAction::Approve | AdviceAction::Reject => AdviceStatus::Pending,
            AdviceAction::Execute => AdviceStatus::Approved,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AdviceAction::Approve => "approve",
            AdviceAction::Reject => "reject",
            AdviceAction::Execute => "execute",
        }
    }
}

/// Actions offered for an advice in `status`. Terminal states offer none.
pub fn actions_for(status: AdviceStatus) -> &'static [AdviceAction] {
    match status {
        AdviceStatus::Pending => &[AdviceAction::Approve, AdviceAction::Reject],
        AdviceStatus::Approved => &[AdviceAction::Execute],
        AdviceStatus::Rejected | AdviceStatus::Executed => &[],
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AdvicePanelState {
    pub advices: Collection<Advice>,
    pub campaign_id: Option<i64>,
    pub status: Option<AdviceStatus>,
}

impl UiState for AdvicePanelState {}

impl AdvicePanelState {
    pub fn find(&self, id: i64) -> Option<&Advice> {
        self.advices.items().iter().find(|a| a.id == id)
    }

    /// Whether `action` is currently offered for advice `id`.
    pub fn offers(&self, id: i64, action: AdviceAction) -> bool {
        self.find(id)
            .is_some_and(|advice| actions_for(advice.status).contains(&action))
    }
}
