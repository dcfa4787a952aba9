use dioxus::document::Title;
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaArrowRotateRight, FaRightFromBracket};
use dioxus_free_icons::Icon;

use crate::{
    client::{
        components::Page,
        router::Route,
        store::{Notifications, Preferences, Session, SessionStore},
        util::RequestScope,
    },
    model::user::Role,
};

#[component]
pub fn Profile() -> Element {
    let session = use_context::<Signal<Option<Session>>>();
    let session_store = use_context::<SessionStore>();
    let preferences = use_context::<Preferences>();
    let mut supplier_mode = use_context::<Signal<bool>>();
    let mut notifications = use_context::<Signal<Notifications>>();
    let nav = navigator();

    let scope = use_hook(RequestScope::new);
    use_drop({
        let scope = scope.clone();
        move || scope.cancel()
    });

    let Some(current) = session.read().clone() else {
        return rsx!();
    };
    let role = current.role();
    let user = current.user;

    let logout = {
        let session_store = session_store.clone();
        move |_: MouseEvent| {
            session_store.clear();
            nav.replace(Route::Login {});
        }
    };

    let toggle_supplier_mode = move |evt: FormEvent| {
        let enabled = evt.checked();

        match preferences.set_supplier_mode(enabled) {
            Ok(()) => supplier_mode.set(enabled),
            Err(err) => {
                notifications.write().push_error(&err);
            }
        }
    };

    rsx!(
        Title { "Mon profil | Garage Manager" }
        Page { title: "Mon profil".to_string(),
            div { class: "card shadow-sm w-full max-w-xl",
                div { class: "card-body gap-4",
                    dl { class: "grid grid-cols-[auto_1fr] gap-x-6 gap-y-2",
                        dt { class: "font-semibold", "Nom" }
                        dd { "{user.display_name()}" }
                        dt { class: "font-semibold", "Email" }
                        dd { "{user.email.clone().unwrap_or_default()}" }
                        dt { class: "font-semibold", "Rôle" }
                        dd { "{role.label()}" }
                        if let Some(garage_id) = &user.garage_id {
                            dt { class: "font-semibold", "Garage" }
                            dd { "#{garage_id}" }
                        }
                    }
                    if role == Role::Garage {
                        label { class: "label cursor-pointer justify-start gap-4",
                            input {
                                r#type: "checkbox",
                                class: "toggle toggle-accent",
                                checked: supplier_mode(),
                                onchange: toggle_supplier_mode,
                            }
                            span { "Mode fournisseur : afficher le catalogue des fournisseurs" }
                        }
                    }
                    div { class: "card-actions justify-end",
                        RefreshButton { scope: scope.clone() }
                        button {
                            class: "btn btn-outline flex gap-2",
                            onclick: logout,
                            Icon { width: 16, height: 16, icon: FaRightFromBracket }
                            "Déconnexion"
                        }
                    }
                }
            }
        }
    )
}

/// Reload the user record from the backend
#[component]
fn RefreshButton(scope: RequestScope) -> Element {
    let session_store = use_context::<SessionStore>();
    let notifications = use_context::<Signal<Notifications>>();
    let pending = use_signal(|| false);

    rsx!(
        button {
            class: "btn btn-ghost flex gap-2",
            disabled: pending(),
            onclick: move |_| {
                if !pending() {
                    spawn_refresh(session_store.clone(), scope.clone(), pending, notifications);
                }
            },
            Icon { width: 16, height: 16, icon: FaArrowRotateRight }
            "Actualiser"
        }
    )
}

#[cfg_attr(not(feature = "web"), allow(unused_variables, unused_mut))]
fn spawn_refresh(
    session_store: SessionStore,
    scope: RequestScope,
    mut pending: Signal<bool>,
    mut notifications: Signal<Notifications>,
) {
    #[cfg(feature = "web")]
    {
        use crate::client::{
            api::{refresh_user, RestClient},
            config::ClientConfig,
            store::NotificationLevel,
        };

        let config = consume_context::<ClientConfig>();
        let token = session_store.load().map(|session| session.token);

        pending.set(true);

        spawn(async move {
            let api = RestClient::new(config, token);

            match refresh_user(&api, &session_store, &scope).await {
                Ok(_) => {
                    notifications
                        .write()
                        .push(NotificationLevel::Info, "Profil actualisé");
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
    dioxus_logger::tracing::warn!("No backend client in this build, refresh skipped");
}
