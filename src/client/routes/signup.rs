use dioxus::document::Title;
use dioxus::prelude::*;

use crate::{
    client::{
        components::{FieldError, Page},
        router::Route,
        store::{Notifications, SessionStore},
        util::RequestScope,
    },
    model::{api::RegisterDto, user::Role, validation::ValidationError},
};

#[component]
pub fn Signup() -> Element {
    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut role = use_signal(|| Role::Client.as_str().to_string());
    let pending = use_signal(|| false);
    let mut invalid = use_signal(|| None::<ValidationError>);
    let notifications = use_context::<Signal<Notifications>>();
    let session_store = use_context::<SessionStore>();

    let scope = use_hook(RequestScope::new);
    use_drop({
        let scope = scope.clone();
        move || scope.cancel()
    });

    let password_hint = format!(
        "Mot de passe ({} caractères minimum)",
        RegisterDto::MIN_PASSWORD_LEN
    );

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();

        if pending() {
            return;
        }

        let form = RegisterDto {
            name: name().trim().to_string(),
            email: email().trim().to_string(),
            password: password(),
            role: role(),
        };

        if let Err(err) = form.validate() {
            invalid.set(Some(err));
            return;
        }
        invalid.set(None);

        submit_signup(form, session_store.clone(), scope.clone(), pending, notifications);
    };

    rsx!(
        Title { "Inscription | Garage Manager" }
        Page { class: "flex items-center justify-center",
            form { class: "card shadow-sm w-full max-w-96",
                onsubmit: onsubmit,
                div { class: "card-body gap-3",
                    h2 { class: "card-title", "Créer un compte" }
                    input {
                        class: "input input-bordered w-full",
                        placeholder: "Nom",
                        value: "{name}",
                        oninput: move |evt| name.set(evt.value()),
                    }
                    FieldError { error: invalid, field: "nom" }
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
                        placeholder: "{password_hint}",
                        value: "{password}",
                        oninput: move |evt| password.set(evt.value()),
                    }
                    FieldError { error: invalid, field: "mot de passe" }
                    select {
                        class: "select select-bordered w-full",
                        value: "{role}",
                        onchange: move |evt| role.set(evt.value()),
                        for choice in RegisterDto::SELF_SERVICE_ROLES {
                            option {
                                value: "{choice.as_str()}",
                                "{choice.label()}"
                            }
                        }
                    }
                    FieldError { error: invalid, field: "rôle" }
                    button {
                        class: "btn btn-primary",
                        r#type: "submit",
                        disabled: pending(),
                        if pending() {
                            span { class: "loading loading-spinner" }
                        }
                        "S'inscrire"
                    }
                    p { class: "text-sm text-center",
                        "Déjà inscrit ? "
                        Link { to: Route::Login {}, class: "link", "Connexion" }
                    }
                }
            }
        }
    )
}

/// Register, then land on the dashboard of the resolved role
#[cfg_attr(not(feature = "web"), allow(unused_variables, unused_mut))]
fn submit_signup(
    form: RegisterDto,
    session_store: SessionStore,
    scope: RequestScope,
    mut pending: Signal<bool>,
    mut notifications: Signal<Notifications>,
) {
    #[cfg(feature = "web")]
    {
        use crate::client::{
            access::dashboard_path,
            api::{sign_up, RestClient},
            config::ClientConfig,
            router::route_from_path,
            store::NotificationLevel,
        };

        let config = consume_context::<ClientConfig>();
        let nav = navigator();

        pending.set(true);

        spawn(async move {
            let api = RestClient::anonymous(config);

            match sign_up(&api, &session_store, &form, &scope).await {
                Ok(session) => {
                    notifications
                        .write()
                        .push(NotificationLevel::Success, "Compte créé, bienvenue !");

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
    dioxus_logger::tracing::warn!("No backend client in this build, signup skipped");
}
