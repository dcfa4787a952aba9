use dioxus::prelude::*;

use crate::model::validation::ValidationError;

/// Inline message under a form field, shown while `error` names that field
#[component]
pub fn FieldError(error: Signal<Option<ValidationError>>, field: &'static str) -> Element {
    let message = error
        .read()
        .as_ref()
        .filter(|err| err.field() == field)
        .map(ToString::to_string);

    rsx!(
        if let Some(message) = message {
            p { class: "text-error text-sm -mt-2", "{message}" }
        }
    )
}
