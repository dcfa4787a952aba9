use dioxus::document::{Meta, Title};
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaCalendarDays, FaCar, FaStore, FaWrench};
use dioxus_free_icons::Icon;

use crate::client::{
    access::dashboard_path, components::Page, router::Route, store::Session,
};

#[component]
pub fn Home() -> Element {
    let session = use_context::<Signal<Option<Session>>>();

    let dashboard = session
        .read()
        .as_ref()
        .map(|session| dashboard_path(&session.role()));

    rsx!(
        Title { "Accueil | Garage Manager" }
        Meta {
            name: "description",
            content: "Gestion de garage : clients, véhicules, réparations, factures et boutique."
        }
        Page { class: "flex items-center justify-center",
            div { class: "flex flex-col items-center gap-6 max-w-256",
                h1 { class: "text-3xl font-bold", "Garage Manager" }
                p { class: "text-center",
                    "Suivez vos véhicules, vos réparations et vos rendez-vous au même endroit, que vous soyez client, mécanicien, garage partenaire ou administrateur."
                }
                ul { class: "flex flex-wrap justify-center gap-4",
                    Feature { title: "Véhicules", text: "Historique et entretien",
                        Icon { width: 28, height: 28, icon: FaCar }
                    }
                    Feature { title: "Réparations", text: "Suivi en temps réel",
                        Icon { width: 28, height: 28, icon: FaWrench }
                    }
                    Feature { title: "Rendez-vous", text: "Réservation en ligne",
                        Icon { width: 28, height: 28, icon: FaCalendarDays }
                    }
                    Feature { title: "Boutique", text: "Pièces et accessoires",
                        Icon { width: 28, height: 28, icon: FaStore }
                    }
                }
                div { class: "flex gap-2",
                    if let Some(dashboard) = dashboard {
                        Link { to: dashboard, class: "btn btn-primary w-48", "Mon tableau de bord" }
                    } else {
                        Link { to: Route::Login {}, class: "btn btn-primary w-32", "Connexion" }
                        Link { to: Route::Signup {}, class: "btn btn-outline w-32", "Inscription" }
                    }
                }
            }
        }
    )
}

#[component]
fn Feature(title: &'static str, text: &'static str, children: Element) -> Element {
    rsx!(
        li { class: "card shadow-sm w-48",
            div { class: "card-body items-center text-center",
                {children}
                h2 { class: "card-title", "{title}" }
                p { class: "text-sm", "{text}" }
            }
        }
    )
}
