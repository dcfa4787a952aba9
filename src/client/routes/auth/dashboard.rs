use dioxus::document::{Meta, Title};
use dioxus::prelude::*;

use crate::{
    client::{
        access::{build_menu, menu::NavIcon, MenuOptions},
        components::{NavIconView, Page},
        store::Session,
    },
    model::{stats::CountsSnapshot, user::Role},
};

/// Landing page of a role: one card per section the role can open
#[component]
pub fn Dashboard(role: String) -> Element {
    let session = use_context::<Signal<Option<Session>>>();
    let counts = use_context::<Signal<Option<CountsSnapshot>>>();
    let supplier_mode = use_context::<Signal<bool>>();

    let role = Role::parse(&role);
    let greeting = session
        .read()
        .as_ref()
        .map(|session| session.user.display_name().to_string())
        .unwrap_or_default();

    let cards: Vec<_> = build_menu(
        &role,
        counts.read().as_ref(),
        MenuOptions {
            supplier_mode: supplier_mode(),
        },
    )
    .into_iter()
    .filter(|entry| !matches!(entry.icon, NavIcon::Dashboard | NavIcon::Profile))
    .collect();

    rsx!(
        Title { "Tableau de bord | Garage Manager" }
        Meta {
            name: "description",
            content: "Tableau de bord {role.label()}"
        }
        Page { title: format!("Bonjour {}", greeting),
            p { class: "mb-6 opacity-70", "Espace {role.label()}" }
            div { class: "grid gap-4 grid-cols-1 sm:grid-cols-2 xl:grid-cols-4",
                for entry in cards {
                    Link {
                        key: "{entry.route}",
                        to: entry.route.clone(),
                        class: "card shadow-sm hover:shadow-md",
                        div { class: "card-body flex-row items-center gap-4",
                            NavIconView { icon: entry.icon, size: 32 }
                            div { class: "flex-1",
                                h2 { class: "card-title", "{entry.label}" }
                            }
                            if let Some(badge) = &entry.badge {
                                span { class: "{entry.color.badge_class()} badge-lg", "{badge}" }
                            }
                        }
                    }
                }
            }
        }
    )
}
