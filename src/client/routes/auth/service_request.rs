use dioxus::document::Title;
use dioxus::prelude::*;

use crate::{
    client::{
        components::{FieldError, Page},
        store::{Notifications, Session},
        util::RequestScope,
    },
    model::{entity::Entity, garage::ServiceRequestDto, validation::ValidationError},
};

/// Form a client uses to ask a partner garage for work
#[component]
pub fn ServiceRequestForm() -> Element {
    let session = use_context::<Signal<Option<Session>>>();
    let notifications = use_context::<Signal<Notifications>>();
    let mut service = use_signal(String::new);
    let mut description = use_signal(String::new);
    let mut preferred_date = use_signal(String::new);
    let pending = use_signal(|| false);
    let mut invalid = use_signal(|| None::<ValidationError>);

    let scope = use_hook(RequestScope::new);
    use_drop({
        let scope = scope.clone();
        move || scope.cancel()
    });

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();

        if pending() {
            return;
        }

        let request = ServiceRequestDto {
            service_name: Some(service().trim().to_string()).filter(|value| !value.is_empty()),
            description: Some(description().trim().to_string()).filter(|value| !value.is_empty()),
            client_name: session
                .peek()
                .as_ref()
                .map(|session| session.user.display_name().to_string()),
            preferred_date: Some(preferred_date()).filter(|value| !value.is_empty()),
            ..Default::default()
        };

        if let Err(err) = request.validate() {
            invalid.set(Some(err));
            return;
        }
        invalid.set(None);

        let token = session.peek().as_ref().map(|session| session.token.clone());

        send_request(request, token, scope.clone(), pending, notifications, move || {
            service.set(String::new());
            description.set(String::new());
            preferred_date.set(String::new());
        });
    };

    rsx!(
        Title { "Demande de service | Garage Manager" }
        Page { title: "Demander un service".to_string(),
            form { class: "card shadow-sm w-full max-w-xl",
                onsubmit: onsubmit,
                div { class: "card-body gap-3",
                    input {
                        class: "input input-bordered w-full",
                        placeholder: "Service souhaité (vidange, freins, diagnostic...)",
                        value: "{service}",
                        oninput: move |evt| service.set(evt.value()),
                    }
                    FieldError { error: invalid, field: "service" }
                    textarea {
                        class: "textarea textarea-bordered w-full",
                        placeholder: "Décrivez le problème",
                        value: "{description}",
                        oninput: move |evt| description.set(evt.value()),
                    }
                    FieldError { error: invalid, field: "description" }
                    input {
                        class: "input input-bordered w-full",
                        r#type: "date",
                        value: "{preferred_date}",
                        oninput: move |evt| preferred_date.set(evt.value()),
                    }
                    button {
                        class: "btn btn-primary",
                        r#type: "submit",
                        disabled: pending(),
                        if pending() {
                            span { class: "loading loading-spinner" }
                        }
                        "Envoyer la demande"
                    }
                }
            }
        }
    )
}

#[cfg_attr(not(feature = "web"), allow(unused_variables, unused_mut))]
fn send_request(
    request: ServiceRequestDto,
    token: Option<String>,
    scope: RequestScope,
    mut pending: Signal<bool>,
    mut notifications: Signal<Notifications>,
    mut on_sent: impl FnMut() + 'static,
) {
    #[cfg(feature = "web")]
    {
        use crate::client::{
            api::RestClient,
            config::ClientConfig,
            list::{submit, Mutation},
            store::NotificationLevel,
        };

        let config = consume_context::<ClientConfig>();

        pending.set(true);

        spawn(async move {
            let api = RestClient::new(config, token);
            let mutation = Mutation::Create(request);

            match submit(&api, &scope, &mutation).await {
                Ok(outcome) => {
                    notifications
                        .write()
                        .push(NotificationLevel::Success, "Demande envoyée au garage");
                    on_sent();

                    // Nothing on this form shows the list
                    if let Err(err) = outcome.reloaded {
                        dioxus_logger::tracing::debug!(
                            "Service requests not reloaded after sending: {}",
                            err
                        );
                    }
                }
                Err(err) if err.is_cancelled() => return,
                Err(err) => {
                    notifications.write().push_error(&err);
                }
            }

            pending.set(false);
        });
    }

    #[cfg(not(feature = "web"))]
    dioxus_logger::tracing::warn!("No backend client in this build, request not sent");
}
