//! Intents for form dialogs.

use crate::ui::mvi::Intent;

use super::form::{Form, FormField};

/// Intents that can be dispatched to a dialog.
#[derive(Debug, Clone)]
pub enum DialogIntent<F: Form> {
    /// Open with an empty form.
    Open,

    /// Open with a prefilled form (edit dialogs).
    OpenWith { form: F },

    Edit { field: FormField, value: String },

    /// Validate and, if valid, move to `Submitting`.
    Submit,

    /// The request finished successfully.
    Succeeded,

    /// The request failed; back to `Open` with the message.
    Failed { message: String },

    Close,
}

impl<F: Form> Intent for DialogIntent<F> {}
