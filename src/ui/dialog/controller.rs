//! Submit handling for form dialogs.

use std::future::Future;

use scopeguard::ScopeGuard;
use tracing::{debug, warn};

use crate::api::ApiError;
use crate::notify::{SharedNotifier, Toast};
use crate::ui::runtime::Store;

use super::form::{Form, FormField};
use super::intent::DialogIntent;
use super::reducer::DialogReducer;
use super::state::DialogState;

/// Error shown when a submit is abandoned before its request finishes.
pub const CANCELLED_MESSAGE: &str = "Request cancelled";

/// Result of a submit attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The request succeeded; the dialog closed and the parent should reload.
    Submitted,
    /// Validation failed locally; no request was sent.
    Invalid,
    /// The request failed; the dialog is open again with the message.
    Failed,
    /// The dialog was not open, or a submit was already in flight.
    Ignored,
}

impl SubmitOutcome {
    pub fn needs_reload(&self) -> bool {
        matches!(self, SubmitOutcome::Submitted)
    }
}

/// Drives one dialog: holds its state and turns submits into exactly one
/// request.
pub struct DialogController<F: Form> {
    store: Store<DialogReducer<F>>,
    notifier: SharedNotifier,
}

impl<F: Form> Clone for DialogController<F> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
            notifier: self.notifier.clone(),
        }
    }
}

impl<F: Form> DialogController<F> {
    pub fn new(notifier: SharedNotifier) -> Self {
        Self {
            store: Store::default(),
            notifier,
        }
    }

    pub fn state(&self) -> DialogState<F> {
        self.store.snapshot()
    }

    pub fn open(&self) {
        self.store.dispatch(DialogIntent::Open);
    }

    pub fn open_with(&self, form: F) {
        self.store.dispatch(DialogIntent::OpenWith { form });
    }

    pub fn edit(&self, field: FormField, value: impl Into<String>) {
        self.store.dispatch(DialogIntent::Edit {
            field,
            value: value.into(),
        });
    }

    pub fn close(&self) {
        self.store.dispatch(DialogIntent::Close);
    }

    /// Validate the form and, if valid, hand the payload to `send`.
    ///
    /// Errors of either kind are reported through the notifier and leave
    /// the dialog open with its fields intact.
    pub async fn submit<T, S, Fut>(&self, send: S) -> SubmitOutcome
    where
        S: FnOnce(F::Submission) -> Fut,
        Fut: Future<Output = Result<T, ApiError>>,
    {
        let (before, after) = self.store.transition(DialogIntent::Submit);
        let submission = match (before, after) {
            (DialogState::Open { .. }, DialogState::Submitting { submission, .. }) => submission,
            (DialogState::Open { .. }, DialogState::Open { error: Some(message), .. }) => {
                debug!(%message, "form rejected");
                self.notifier.notify(Toast::error(message));
                return SubmitOutcome::Invalid;
            }
            _ => {
                debug!("submit ignored: dialog not open or already submitting");
                return SubmitOutcome::Ignored;
            }
        };

        // A dropped submit future must not leave the dialog stuck in Submitting.
        let pending = scopeguard::guard(self.store.clone(), |store| {
            debug!("submit dropped before the request finished");
            store.dispatch(DialogIntent::Failed {
                message: CANCELLED_MESSAGE.to_string(),
            });
        });
        let response = send(submission).await;
        ScopeGuard::into_inner(pending);

        match response {
            Ok(_) => {
                self.store.dispatch(DialogIntent::Succeeded);
                self.notifier.notify(Toast::success(F::SUCCESS_MESSAGE));
                SubmitOutcome::Submitted
            }
            Err(err) => {
                warn!(error = %err, kind = ?err.kind(), "submit failed");
                let message = err.to_string();
                self.store.dispatch(DialogIntent::Failed {
                    message: message.clone(),
                });
                self.notifier.notify(Toast::error(message));
                SubmitOutcome::Failed
            }
        }
    }
}
