//! Reducer for form dialogs.

use std::marker::PhantomData;

use crate::ui::mvi::Reducer;

use super::form::Form;
use super::intent::DialogIntent;
use super::state::DialogState;

/// Reducer for dialog state transitions, generic over the form.
pub struct DialogReducer<F>(PhantomData<F>);

impl<F: Form> Reducer for DialogReducer<F> {
    type State = DialogState<F>;
    type Intent = DialogIntent<F>;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match (state, intent) {
            (DialogState::Closed, DialogIntent::Open) => DialogState::Open {
                form: F::default(),
                error: None,
            },

            (DialogState::Closed, DialogIntent::OpenWith { form }) => {
                DialogState::Open { form, error: None }
            }

            (DialogState::Open { mut form, error }, DialogIntent::Edit { field, value }) => {
                form.set(field, value);
                DialogState::Open { form, error }
            }

            (DialogState::Open { form, .. }, DialogIntent::Submit) => match form.validate() {
                Ok(submission) => DialogState::Submitting { form, submission },
                Err(err) => DialogState::Open {
                    form,
                    error: Some(err.to_string()),
                },
            },

            (DialogState::Submitting { .. }, DialogIntent::Succeeded) => DialogState::Closed,

            (DialogState::Submitting { form, .. }, DialogIntent::Failed { message }) => {
                DialogState::Open {
                    form,
                    error: Some(message),
                }
            }

            (DialogState::Open { .. }, DialogIntent::Close) => DialogState::Closed,

            (state, _) => state,
        }
    }
}
