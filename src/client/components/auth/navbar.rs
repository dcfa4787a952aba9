use dioxus::prelude::*;

use crate::client::{
    components::BrandButton,
    router::Route,
    store::{Session, SessionStore},
};

#[component]
pub fn AuthNavbar() -> Element {
    let session = use_context::<Signal<Option<Session>>>();
    let session_store = use_context::<SessionStore>();
    let nav = navigator();

    let identity = session
        .read()
        .as_ref()
        .map(|session| (session.user.display_name().to_string(), session.role().label().to_string()));

    rsx! {
        div {
            class: "navbar bg-base-200 fixed z-40",
            div {
                class: "navbar-start",
                BrandButton {}
            }
            div {
                class: "navbar-end flex gap-4",
                if let Some((name, role)) = identity {
                    div { class: "flex flex-col items-end",
                        p { class: "text-sm font-semibold", "{name}" }
                        p { class: "text-xs", "{role}" }
                    }
                }
                button {
                    class: "btn btn-outline",
                    onclick: move |_| {
                        session_store.clear();
                        nav.replace(Route::Login {});
                    },
                    "Déconnexion"
                }
            }
        }
    }
}
