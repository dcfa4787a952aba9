use dioxus::document::Title;
use dioxus::prelude::*;

use crate::{
    client::{
        components::{FieldError, Page},
        router::Route,
        store::{Notifications, SessionStore},
        util::RequestScope,
    },
    model::{api::LoginDto, validation::ValidationError},
};

#[component]
pub fn Login() -> Element {
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let pending = use_signal(|| false);
    let mut invalid = use_signal(|| None::<ValidationError>);
    let notifications = use_context::<Signal<Notifications>>();
    let session_store = use_context::<SessionStore>();

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

        let credentials = LoginDto {
            email: email().trim().to_string(),
            password: password(),
        };

        if let Err(err) = credentials.validate() {
            invalid.set(Some(err));
            return;
        }
        invalid.set(None);

        submit_login(
            credentials,
            session_store.clone(),
            scope.clone(),
            pending,
            notifications,
        );
    };

    rsx!(
        Title { "Connexion | Garage Manager" }
        Page { class: "flex items-center justify-center",
            form { class: "card shadow-sm w-full max-w-96",
                onsubmit: onsubmit,
                div { class: "card-body gap-3",
                    h2 { class: "card-title", "Connexion" }
                    input {
                        class: "input input-bordered w-full",
                        r#type: "email",
                        placeholder: "Email",
                        value: "{email}",
                        oninput: move |evt| email.set(evt.value()),
                    }
                    FieldError { error: invalid, field: "email" }
                    input {
                        class: "input input-bordered w-full",
                        r#type: "password",
                        placeholder: "Mot de passe",
                        value: "{password}",
                        oninput: move |evt| password.set(evt.value()),
                    }
                    FieldError { error: invalid, field: "mot de passe" }
                    button {
                        class: "btn btn-primary",
                        r#type: "submit",
                        disabled: pending(),
                        if pending() {
                            span { class: "loading loading-spinner" }
                        }
                        "Se connecter"
                    }
                    p { class: "text-sm text-center",
                        "Pas encore de compte ? "
                        Link { to: Route::Signup {}, class: "link", "Inscription" }
                    }
                }
            }
        }
    )
}

/// Log in, then land on the dashboard of the resolved role
///
/// Backend failures are shown as notifications; the form has already validated.
#[cfg_attr(not(feature = "web"), allow(unused_variables, unused_mut))]
fn submit_login(
    credentials: LoginDto,
    session_store: SessionStore,
    scope: RequestScope,
    mut pending: Signal<bool>,
    mut notifications: Signal<Notifications>,
) {
    #[cfg(feature = "web")]
    {
        use crate::client::{
            access::dashboard_path,
            api::{sign_in, RestClient},
            config::ClientConfig,
            router::route_from_path,
        };

        let config = consume_context::<ClientConfig>();
        let nav = navigator();

        pending.set(true);

        spawn(async move {
            let api = RestClient::anonymous(config);

            match sign_in(&api, &session_store, &credentials, &scope).await {
                Ok(session) => {
                    if let Some(route) = route_from_path(&dashboard_path(&session.role())) {
                        nav.replace(route);
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
    dioxus_logger::tracing::warn!("No backend client in this build, login skipped");
}
