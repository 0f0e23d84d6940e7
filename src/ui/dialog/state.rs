//! State machine shared by every form dialog.

use crate::ui::mvi::UiState;

use super::form::Form;

/// Lifecycle of one dialog instance:
/// `Closed -> Open -> Submitting -> (Closed | Open with error)`.
#[derive(Debug, Clone, PartialEq)]
pub enum DialogState<F: Form> {
    Closed,

    /// Accepting input. `error` holds the last validation or server
    /// message, if any.
    Open { form: F, error: Option<String> },

    /// A request is in flight; edits and further submits are ignored.
    Submitting { form: F, submission: F::Submission },
}

impl<F: Form> Default for DialogState<F> {
    fn default() -> Self {
        Self::Closed
    }
}

impl<F: Form> UiState for DialogState<F> {}

impl<F: Form> DialogState<F> {
    pub fn is_open(&self) -> bool {
        !matches!(self, Self::Closed)
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self, Self::Submitting { .. })
    }

    pub fn form(&self) -> Option<&F> {
        match self {
            Self::Closed => None,
            Self::Open { form, .. } | Self::Submitting { form, .. } => Some(form),
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Open { error, .. } => error.as_deref(),
            _ => None,
        }
    }
}
