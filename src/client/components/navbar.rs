use dioxus::prelude::*;

use crate::client::{
    access::dashboard_path, components::BrandButton, router::Route, store::Session,
};

/// Layout of the public pages
#[component]
pub fn Navbar() -> Element {
    let session = use_context::<Signal<Option<Session>>>();

    let dashboard = session
        .read()
        .as_ref()
        .map(|session| dashboard_path(&session.role()));

    rsx! {
        div {
            class: "navbar bg-base-200 fixed z-40",
            div {
                class: "navbar-start",
                BrandButton {}
            }
            div {
                class: "navbar-end flex gap-2",
                Link {
                    to: Route::PublicShop {},
                    class: "btn btn-ghost",
                    "Boutique"
                }
                if let Some(dashboard) = dashboard {
                    Link {
                        to: dashboard,
                        class: "btn btn-primary",
                        "Tableau de bord"
                    }
                } else {
                    Link {
                        to: Route::Login {},
                        class: "btn btn-outline",
                        "Connexion"
                    }
                    Link {
                        to: Route::Signup {},
                        class: "btn btn-primary",
                        "Inscription"
                    }
                }
            }
        }

        Outlet::<Route> {}
    }
}
