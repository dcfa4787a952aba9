use dioxus::prelude::*;

use crate::{
    client::{
        access::{build_menu, MenuOptions},
        components::NavIconView,
        store::Session,
    },
    model::stats::CountsSnapshot,
};

/// Role menu with live counters
#[component]
pub fn Sidebar() -> Element {
    let session = use_context::<Signal<Option<Session>>>();
    let counts = use_context::<Signal<Option<CountsSnapshot>>>();
    let supplier_mode = use_context::<Signal<bool>>();

    let Some(role) = session.read().as_ref().map(|session| session.role()) else {
        return rsx!();
    };

    let entries = build_menu(
        &role,
        counts.read().as_ref(),
        MenuOptions {
            supplier_mode: supplier_mode(),
        },
    );

    rsx!(
        ul { class: "menu bg-base-100 w-64 min-h-screen pt-[72px] gap-1",
            for entry in entries {
                li { key: "{entry.route}",
                    Link {
                        to: entry.route.clone(),
                        active_class: "menu-active",
                        NavIconView { icon: entry.icon }
                        span { class: "flex-1", "{entry.label}" }
                        if let Some(badge) = &entry.badge {
                            span { class: "{entry.color.badge_class()}", "{badge}" }
                        }
                    }
                }
            }
        }
    )
}
